use crate::app::SymscanApp;
use crate::states::step_rows;

pub(super) fn steps_section(ui: &mut egui::Ui, app: &mut SymscanApp) {
    let pipeline = app.session.pipeline();
    super::section_header(ui, "Process Steps", Some(pipeline.phase().to_string().as_str()));
    ui.add_space(4.0);

    for (label, status) in step_rows(pipeline.phase(), pipeline.failed_step()) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(status.icon()).color(status.color()));
            ui.label(label);
        });
    }
}
