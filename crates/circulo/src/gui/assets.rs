use super::ICON_SIZE;
use crate::sys::icon;
use circulo_core::menu::ImageSizes;
use circulo_core::{ImageRef, MenuConfig, Size};
use gdk_pixbuf::Pixbuf;
use std::collections::HashMap;

/// Decoded button images, keyed by their reference.
#[derive(Default)]
pub struct ImageCache {
    pixbufs: HashMap<ImageRef, Pixbuf>,
}

impl ImageCache {
    /// Loads every image `config` refers to that is not cached yet.
    pub fn preload(&mut self, config: &MenuConfig) {
        for button in config.center_button.iter().chain(&config.buttons) {
            if self.pixbufs.contains_key(&button.image) {
                continue;
            }
            if let Some(pixbuf) = Self::load(&button.image) {
                self.pixbufs.insert(button.image.clone(), pixbuf);
            }
        }
    }

    fn load(image: &ImageRef) -> Option<Pixbuf> {
        let path = icon::find_icon_path(image, ICON_SIZE as u16)?;
        Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true)
            .map_err(|e| log::error!("Failed to load '{}': {}", path.display(), e))
            .ok()
    }

    pub fn pixbuf(&self, image: &ImageRef) -> Option<&Pixbuf> {
        self.pixbufs.get(image)
    }

    pub fn clear(&mut self) {
        self.pixbufs.clear();
    }
}

impl ImageSizes for ImageCache {
    fn intrinsic_size(&self, asset: &ImageRef) -> Option<Size> {
        self.pixbufs
            .get(asset)
            .map(|p| Size::new(p.width() as f64, p.height() as f64))
    }
}
