/// Decode an encoded page image (JPEG, PNG, ...) into an egui ColorImage.
pub fn decode_color_image(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_raw(),
    ))
}
