use std::collections::HashMap;

/// A page image as far as the UI knows it.
pub enum PageTexture {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Page textures keyed by image locator.
#[derive(Default)]
pub struct ViewportState {
    textures: HashMap<String, PageTexture>,
}

impl ViewportState {
    pub fn get(&self, locator: &str) -> Option<&PageTexture> {
        self.textures.get(locator)
    }

    /// Mark `locator` as requested. Returns false if it is already known.
    pub fn begin_loading(&mut self, locator: &str) -> bool {
        if self.textures.contains_key(locator) {
            return false;
        }
        self.textures
            .insert(locator.to_string(), PageTexture::Loading);
        true
    }

    pub fn insert(&mut self, locator: String, texture: egui::TextureHandle) {
        self.textures.insert(locator, PageTexture::Ready(texture));
    }

    pub fn mark_failed(&mut self, locator: String) {
        self.textures.insert(locator, PageTexture::Failed);
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}
