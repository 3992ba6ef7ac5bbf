use symscan_core::results::{metadata_display_value, metadata_label};

use crate::app::SymscanApp;
use crate::messages::WorkerCommand;

const SWATCH_SIZE: f32 = 10.0;

pub(super) fn overview_section(ui: &mut egui::Ui, app: &mut SymscanApp) {
    ui.horizontal(|ui| {
        ui.strong("Detection Overview");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Export CSV").clicked() {
                export(app);
            }
        });
    });
    ui.add_space(4.0);

    let rows = app.session.current_rows();
    if rows.is_empty() {
        ui.weak("No detections available");
    } else {
        egui::Grid::new("detection_overview")
            .num_columns(3)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Class");
                ui.strong("Count");
                ui.strong("Avg Confidence");
                ui.end_row();

                for row in &rows {
                    ui.horizontal(|ui| {
                        super::swatch(ui, super::class_color(&row.class_name), SWATCH_SIZE);
                        ui.label(&row.class_name);
                    });
                    ui.label(row.count.to_string());
                    ui.label(row.confidence_percent());
                    ui.end_row();
                }
            });
    }

    ui.add_space(8.0);
    ui.strong("Meta Data");
    ui.add_space(4.0);

    match app.session.current_metadata().filter(|m| !m.is_empty()) {
        Some(meta) => {
            egui::Grid::new("page_metadata")
                .num_columns(2)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Title");
                    ui.strong("Value");
                    ui.end_row();
                    for (key, value) in meta {
                        ui.label(metadata_label(key));
                        ui.label(metadata_display_value(value));
                        ui.end_row();
                    }
                });
        }
        None => {
            ui.weak("No metadata available");
        }
    }
}

/// Ask for a destination, then hand the rows to the worker.
fn export(app: &mut SymscanApp) {
    let rows = app.session.current_rows();
    if rows.is_empty() {
        app.ui_state.error("No data to export.");
        return;
    }

    let cmd_tx = app.cmd_tx.clone();
    let file_name = app.config.export.file_name.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportCsv { path, rows });
        }
    });
}
