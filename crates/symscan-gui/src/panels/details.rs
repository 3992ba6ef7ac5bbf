use crate::app::SymscanApp;

const RIGHT_PANEL_WIDTH: f32 = 340.0;

pub fn show(ctx: &egui::Context, app: &mut SymscanApp) {
    egui::SidePanel::right("details")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(RIGHT_PANEL_WIDTH - 20.0);

                super::summary::summary_section(ui, app);
                ui.separator();
                super::overview::overview_section(ui, app);
            });
        });
}
