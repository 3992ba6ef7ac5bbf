use symscan_core::consts::SUPPORTED_EXTENSIONS;

use crate::app::SymscanApp;
use crate::messages::WorkerResult;

pub(super) fn upload_section(ui: &mut egui::Ui, app: &mut SymscanApp) {
    super::section_header(ui, "Upload Files", None);
    ui.add_space(4.0);

    let enabled = app.session.upload_enabled() && !app.ui_state.uploading;
    // Keyed by generation so a refresh rebuilds the widget from scratch.
    ui.push_id(("upload", app.session.upload_generation()), |ui| {
        if ui
            .add_enabled(
                enabled,
                egui::Button::new("Upload file...").min_size(egui::vec2(ui.available_width(), 40.0)),
            )
            .clicked()
        {
            pick_file(app);
        }
    });

    ui.small(
        SUPPORTED_EXTENSIONS
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(", "),
    );

    if let Some(ref path) = app.ui_state.selected_file {
        ui.add_space(4.0);
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }
}

fn pick_file(app: &mut SymscanApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Drawings", SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FileChosen { path });
        }
    });
}
