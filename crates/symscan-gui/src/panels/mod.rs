pub mod details;
pub mod fullscreen;
pub mod header;
pub mod sidebar;
pub mod status;
pub mod viewer;

mod overview;
mod steps;
mod summary;
mod upload;

use symscan_core::viewer::Size;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Fixed swatch colour per detection class; grey for anything unlisted.
pub(crate) fn class_color(class_name: &str) -> egui::Color32 {
    match class_name {
        "Cove Light" => egui::Color32::from_rgb(0xF5, 0x9E, 0x0B),
        "Door" => egui::Color32::from_rgb(0x10, 0xB9, 0x81),
        "Downlight" => egui::Color32::from_rgb(0x2F, 0x80, 0xED),
        "Emergency Light Fitting" => egui::Color32::from_rgb(0xEF, 0x44, 0x44),
        "Fluorescent Light" => egui::Color32::from_rgb(0xA7, 0x8B, 0xFA),
        "Socket Outlet" => egui::Color32::from_rgb(0xF9, 0x73, 0x16),
        "Exit Sign" => egui::Color32::from_rgb(0x05, 0x96, 0x69),
        _ => egui::Color32::from_rgb(0x9C, 0xA3, 0xAF),
    }
}

/// Small rounded colour square sized `side`, laid out inline.
pub(crate) fn swatch(ui: &mut egui::Ui, color: egui::Color32, side: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    ui.painter().rect_filled(rect, side / 4.0, color);
}

pub(crate) fn to_size(rect: egui::Rect) -> Size {
    Size::new(rect.width(), rect.height())
}

/// Rect of an image of `image_size` fitted into `container`, then scaled
/// about the container centre and shifted by `pan`.
pub(crate) fn image_rect(
    container: egui::Rect,
    image_size: egui::Vec2,
    scale: f32,
    pan: egui::Vec2,
) -> egui::Rect {
    let fit = (container.width() / image_size.x).min(container.height() / image_size.y);
    let fit = if fit.is_finite() { fit } else { 1.0 };
    egui::Rect::from_center_size(container.center() + pan, image_size * fit * scale)
}

pub(crate) fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

pub(crate) fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(16.0)
                .color(egui::Color32::from_gray(120)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_color_fallback() {
        assert_eq!(class_color("Door"), egui::Color32::from_rgb(0x10, 0xB9, 0x81));
        assert_eq!(class_color("Unknown"), class_color("Anything else"));
    }

    #[test]
    fn test_image_rect_fits_and_scales() {
        let container = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        let r = image_rect(container, egui::vec2(400.0, 400.0), 1.0, egui::Vec2::ZERO);
        assert_eq!(r.size(), egui::vec2(600.0, 600.0));
        assert_eq!(r.center(), egui::pos2(400.0, 300.0));

        let r = image_rect(container, egui::vec2(400.0, 400.0), 2.0, egui::vec2(10.0, 0.0));
        assert_eq!(r.size(), egui::vec2(1200.0, 1200.0));
        assert_eq!(r.center(), egui::pos2(410.0, 300.0));
    }
}
