use std::collections::HashMap;

use serde::Serialize;

use crate::results::Detection;

/// Per-class rollup of one page's detections.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregateRow {
    pub class_name: String,
    pub count: usize,
    pub mean_confidence: f64,
}

impl AggregateRow {
    /// Mean confidence as a percentage with one decimal, e.g. `80.0%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.mean_confidence * 100.0)
    }
}

/// Group detections by class, most frequent class first.
///
/// Classes with equal counts keep the order in which they were first seen.
pub fn aggregate(detections: &[Detection]) -> Vec<AggregateRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, f64)> = Vec::new();

    for d in detections {
        let slot = *index.entry(d.class_name.as_str()).or_insert_with(|| {
            groups.push((d.class_name.as_str(), 0, 0.0));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.1 += 1;
        group.2 += d.confidence;
    }

    let mut rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|(class_name, count, sum)| AggregateRow {
            class_name: class_name.to_string(),
            count,
            mean_confidence: sum / count as f64,
        })
        .collect();

    // sort_by is stable; ties stay in insertion order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent_one_decimal() {
        let row = AggregateRow {
            class_name: "Door".into(),
            count: 2,
            mean_confidence: 0.8,
        };
        assert_eq!(row.confidence_percent(), "80.0%");

        let row = AggregateRow {
            class_name: "Downlight".into(),
            count: 1,
            mean_confidence: 0.1234,
        };
        assert_eq!(row.confidence_percent(), "12.3%");
    }
}
