use circulo_core::ImageRef;
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static RESOLVED: OnceLock<RwLock<HashMap<ImageRef, Option<PathBuf>>>> = OnceLock::new();

/// Resolves an image reference to a file: an existing absolute path is used as is,
/// anything else is looked up as a freedesktop icon name.
pub fn find_icon_path(image: &ImageRef, size: u16) -> Option<PathBuf> {
    let cache = RESOLVED.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = cache.read().get(image) {
        return hit.clone();
    }

    let resolved = resolve(image, size);
    if resolved.is_none() {
        log::warn!("No icon found for '{}'", image);
    }
    cache.write().insert(image.clone(), resolved.clone());
    resolved
}

/// Forgets every earlier lookup, including failed ones.
pub fn clear_cache() {
    if let Some(cache) = RESOLVED.get() {
        cache.write().clear();
    }
}

fn resolve(image: &ImageRef, size: u16) -> Option<PathBuf> {
    if image.is_empty() {
        return None;
    }

    let path = Path::new(image.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    lookup(image.as_str()).with_size(size).with_scale(1).find()
}
