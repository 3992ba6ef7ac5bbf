//! Decoded payload of the `/results` call, queried per page by the viewer
//! and the aggregator.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::aggregate::{aggregate, AggregateRow};
use crate::consts::UNKNOWN_CLASS;
use crate::error::{Result, SymscanError};

/// One classified region reported for a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default = "unknown_class", deserialize_with = "class_name_or_unknown")]
    pub class_name: String,
    #[serde(default, deserialize_with = "unit_interval")]
    pub confidence: f64,
}

impl Detection {
    pub fn new(class_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_name: class_name.into(),
            confidence: clamp_confidence(confidence),
        }
    }
}

fn unknown_class() -> String {
    UNKNOWN_CLASS.to_string()
}

fn class_name_or_unknown<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    let name: Option<String> = Option::deserialize(d)?;
    Ok(name.filter(|n| !n.is_empty()).unwrap_or_else(unknown_class))
}

fn unit_interval<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    let value: Option<f64> = Option::deserialize(d)?;
    Ok(clamp_confidence(value.unwrap_or(0.0)))
}

fn clamp_confidence(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

/// Page index paired with its image locator, if the backend rendered one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub page: u32,
    #[serde(default, deserialize_with = "non_empty_locator")]
    pub url: Option<String>,
}

fn non_empty_locator<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
    let url: Option<String> = Option::deserialize(d)?;
    Ok(url.filter(|u| !u.trim().is_empty()))
}

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Backend-computed totals for the whole document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub items_found: u32,
    #[serde(default)]
    pub total_detections: u32,
}

#[derive(Deserialize)]
struct ResultsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    summary: Summary,
    #[serde(default, deserialize_with = "null_as_default")]
    detections: Vec<Detection>,
    #[serde(default, deserialize_with = "null_as_default")]
    page_detections: BTreeMap<u32, Vec<Detection>>,
    #[serde(default, deserialize_with = "null_as_default")]
    meta_data: BTreeMap<u32, BTreeMap<String, serde_json::Value>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pages: Vec<PageRef>,
    #[serde(default)]
    preview: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pages: Vec<PageRef>,
    detections_by_page: BTreeMap<u32, Vec<Detection>>,
    metadata_by_page: BTreeMap<u32, BTreeMap<String, String>>,
    detections: Vec<Detection>,
    summary: Summary,
    preview: Option<String>,
}

impl ResultSet {
    /// Decode the `/results` body.
    ///
    /// A payload that only carries an `error` field is a failed step.
    pub fn from_json(body: &str) -> Result<Self> {
        let payload: ResultsPayload = serde_json::from_str(body)?;
        if let Some(message) = payload.error {
            return Err(SymscanError::StepRejected {
                path: "/results".into(),
                message,
            });
        }
        Ok(Self::from_payload(payload))
    }

    fn from_payload(payload: ResultsPayload) -> Self {
        let mut seen = BTreeSet::new();
        let mut pages: Vec<PageRef> = payload
            .pages
            .into_iter()
            .filter(|p| p.page >= 1 && seen.insert(p.page))
            .collect();
        pages.sort_by_key(|p| p.page);

        if pages.is_empty() {
            if let Some(ref preview) = payload.preview {
                pages.push(PageRef {
                    page: 1,
                    url: Some(preview.clone()),
                });
            }
        }

        let metadata_by_page = payload
            .meta_data
            .into_iter()
            .map(|(page, fields)| {
                let fields = fields
                    .into_iter()
                    .map(|(k, v)| (k, metadata_value(v)))
                    .collect();
                (page, fields)
            })
            .collect();

        Self {
            pages,
            detections_by_page: payload.page_detections,
            metadata_by_page,
            detections: payload.detections,
            summary: payload.summary,
            preview: payload.preview,
        }
    }

    /// Assemble a result set directly, e.g. from a test fixture.
    pub fn new(
        pages: Vec<PageRef>,
        detections_by_page: BTreeMap<u32, Vec<Detection>>,
        metadata_by_page: BTreeMap<u32, BTreeMap<String, String>>,
        summary: Summary,
    ) -> Self {
        let detections = detections_by_page.values().flatten().cloned().collect();
        let payload = ResultsPayload {
            summary,
            detections,
            page_detections: detections_by_page,
            meta_data: BTreeMap::new(),
            pages,
            preview: None,
            error: None,
        };
        let mut set = Self::from_payload(payload);
        set.metadata_by_page = metadata_by_page;
        set
    }

    pub fn pages(&self) -> &[PageRef] {
        &self.pages
    }

    /// Number of displayable pages; at least 1 so page arithmetic stays valid.
    pub fn total_pages(&self) -> u32 {
        (self.pages.len() as u32).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_image(&self, page: u32) -> Option<&str> {
        self.pages
            .iter()
            .find(|p| p.page == page)
            .and_then(|p| p.url.as_deref())
    }

    pub fn detections(&self, page: u32) -> &[Detection] {
        self.detections_by_page
            .get(&page)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn metadata(&self, page: u32) -> Option<&BTreeMap<String, String>> {
        self.metadata_by_page.get(&page)
    }

    pub fn all_detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Per-class rollup for one page.
    pub fn page_rows(&self, page: u32) -> Vec<AggregateRow> {
        aggregate(self.detections(page))
    }

    /// Per-class rollup across the whole document.
    pub fn overall_rows(&self) -> Vec<AggregateRow> {
        aggregate(&self.detections)
    }
}

fn metadata_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Human label for a metadata key: `drawing_title` -> `Drawing title`.
pub fn metadata_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shown in place of an empty metadata value.
pub fn metadata_display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_label() {
        assert_eq!(metadata_label("drawing_title"), "Drawing title");
        assert_eq!(metadata_label("scale"), "Scale");
        assert_eq!(metadata_label(""), "");
    }

    #[test]
    fn test_metadata_display_value() {
        assert_eq!(metadata_display_value(""), "\u{2014}");
        assert_eq!(metadata_display_value("  "), "\u{2014}");
        assert_eq!(metadata_display_value("A-101"), "A-101");
    }

    #[test]
    fn test_metadata_value_stringifies_non_strings() {
        assert_eq!(metadata_value(serde_json::Value::Null), "");
        assert_eq!(metadata_value(serde_json::json!(3)), "3");
        assert_eq!(metadata_value(serde_json::json!("x")), "x");
    }
}
