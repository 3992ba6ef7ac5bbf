use console::Style;
use symscan_core::aggregate::AggregateRow;
use symscan_core::results::{metadata_display_value, metadata_label, ResultSet};
use symscan_core::viewer::ViewerEngine;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    class: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            class: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Print totals, then the requested page's aggregate and metadata, then the
/// document-wide aggregate. Returns the page actually shown after clamping.
pub fn print_results(results: &ResultSet, page: i64) -> u32 {
    let s = Styles::new();

    let mut viewer = ViewerEngine::new();
    viewer.load(results);
    viewer.set_page(page);
    let shown = viewer.state().current_page;

    println!();
    println!("  {}", s.title.apply_to("Detection Results"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    let summary = results.summary();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Total pages"),
        s.value.apply_to(summary.total_pages)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Items found"),
        s.value.apply_to(summary.items_found)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Detections"),
        s.value.apply_to(summary.total_detections)
    );
    println!();

    println!(
        "  {}",
        s.header
            .apply_to(format!("Page {} of {}", shown, viewer.state().total_pages))
    );
    match viewer.current_image() {
        Some(url) => println!("    {:<14}{}", s.label.apply_to("Image"), s.path.apply_to(url)),
        None => println!(
            "    {:<14}{}",
            s.label.apply_to("Image"),
            s.disabled.apply_to("No preview available")
        ),
    }
    print_rows(&s, &results.page_rows(shown), "No detections available");

    if let Some(meta) = results.metadata(shown).filter(|m| !m.is_empty()) {
        println!("  {}", s.header.apply_to("Metadata"));
        for (key, value) in meta {
            println!(
                "    {:<18}{}",
                s.label.apply_to(metadata_label(key)),
                s.value.apply_to(metadata_display_value(value))
            );
        }
        println!();
    }

    println!("  {}", s.header.apply_to("Whole document"));
    print_rows(&s, &results.overall_rows(), "No detections available");

    shown
}

fn print_rows(s: &Styles, rows: &[AggregateRow], empty: &str) {
    if rows.is_empty() {
        println!("    {}", s.disabled.apply_to(empty));
        println!();
        return;
    }

    let width = rows
        .iter()
        .map(|r| r.class_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(5)
        + 2;
    println!(
        "    {:<width$}{:>7}  {:>14}",
        s.label.apply_to("Class"),
        s.label.apply_to("Count"),
        s.label.apply_to("Avg Confidence"),
    );
    for row in rows {
        println!(
            "    {:<width$}{:>7}  {:>14}",
            s.class.apply_to(&row.class_name),
            s.value.apply_to(row.count),
            row.confidence_percent(),
        );
    }
    println!();
}
