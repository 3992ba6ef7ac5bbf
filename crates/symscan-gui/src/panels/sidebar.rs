use crate::app::SymscanApp;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut SymscanApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                super::upload::upload_section(ui, app);
                ui.add_space(8.0);
                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Refresh"))
                    .clicked()
                {
                    app.refresh();
                }
                ui.separator();
                super::steps::steps_section(ui, app);
            });
        });
}
