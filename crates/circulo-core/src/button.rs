use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ButtonId(String);

crate::impl_string_newtype!(ButtonId);

/// Absolute image path or icon name, resolved by the host.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ImageRef(String);

crate::impl_string_newtype!(ImageRef);

#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub id: ButtonId,
    pub image: ImageRef,
    pub color: Srgba<f64>,
}

impl MenuButton {
    pub fn new(id: impl Into<String>, image: impl Into<String>, color: Srgba<f64>) -> Self {
        Self {
            id: ButtonId::new(id),
            image: ImageRef::new(image),
            color,
        }
    }

    pub fn color_with_alpha(&self, alpha: f64) -> Srgba<f64> {
        let (r, g, b, _) = self.color.into_components();
        Srgba::new(r, g, b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_transparent() {
        let id: ButtonId = serde_json::from_str("\"share\"").unwrap();
        assert_eq!(id, ButtonId::new("share"));
        assert_eq!(serde_json::to_string(&ImageRef::new("a.png")).unwrap(), "\"a.png\"");
    }

    #[test]
    fn test_color_with_alpha_keeps_rgb() {
        let button = MenuButton::new("a", "a.png", Srgba::new(0.1, 0.2, 0.3, 1.0));
        let faded = button.color_with_alpha(0.2);
        assert_eq!(faded, Srgba::new(0.1, 0.2, 0.3, 0.2));
    }
}
