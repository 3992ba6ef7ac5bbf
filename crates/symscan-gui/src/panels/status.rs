use crate::app::SymscanApp;

const STATUS_BLUE: egui::Color32 = egui::Color32::from_rgb(47, 128, 237);

pub fn show(ctx: &egui::Context, app: &mut SymscanApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        let pipeline = app.session.pipeline();
        if pipeline.phase().is_running() || app.ui_state.uploading {
            let text = if app.ui_state.uploading {
                "Uploading...".to_string()
            } else {
                pipeline.status_message().to_string()
            };
            ui.add(egui::ProgressBar::new(0.0).text(text).animate(true));
        } else {
            // Same height as the running bar, no animation.
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        ui.horizontal(|ui| {
            let (text, failed) = match app.ui_state.notice {
                Some(ref notice) => (notice.text.as_str(), notice.is_error),
                None => (pipeline.status_message(), pipeline.is_failure()),
            };
            if !text.is_empty() {
                let color = if failed { egui::Color32::RED } else { STATUS_BLUE };
                ui.label(egui::RichText::new(text).color(color).strong());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let viewer = app.session.viewer().state();
                ui.label(format!("Zoom: {}%", viewer.zoom_percent()));
                ui.separator();
                ui.label(format!("Page {} of {}", viewer.current_page, viewer.total_pages));
                ui.separator();
                ui.label(format!("Phase: {}", pipeline.phase()));
            });
        });

        ui.add_space(2.0);
    });
}
