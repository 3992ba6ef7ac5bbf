pub fn show(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Electrical Symbols Detector");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(format!("v{}", env!("CARGO_PKG_VERSION")));
            });
        });
        ui.add_space(4.0);
    });
}
