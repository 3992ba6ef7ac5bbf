use egui_plot::{Bar, BarChart, Plot};
use symscan_core::aggregate::AggregateRow;

use crate::app::SymscanApp;

const CHART_HEIGHT: f32 = 140.0;

pub(super) fn summary_section(ui: &mut egui::Ui, app: &mut SymscanApp) {
    super::section_header(ui, "Summary", None);
    ui.add_space(4.0);

    let Some(results) = app.session.results() else {
        ui.weak("No results yet");
        return;
    };

    let summary = results.summary();
    egui::Grid::new("summary_totals")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("Total pages");
            ui.strong(summary.total_pages.to_string());
            ui.end_row();
            ui.label("Items found");
            ui.strong(summary.items_found.to_string());
            ui.end_row();
            ui.label("Total detections");
            ui.strong(summary.total_detections.to_string());
            ui.end_row();
        });

    let rows = results.overall_rows();
    if !rows.is_empty() {
        ui.add_space(4.0);
        class_chart(ui, &rows);
    }
}

/// Detections per class across the whole document.
fn class_chart(ui: &mut egui::Ui, rows: &[AggregateRow]) {
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.count as f64)
                .name(&row.class_name)
                .fill(super::class_color(&row.class_name))
                .width(0.7)
        })
        .collect();

    let chart = BarChart::new("detections per class", bars);

    Plot::new("class_count_chart")
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_x(false)
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
