//! Dictionary sign entries.

use serde::{Deserialize, Serialize};

/// One sign entry as served by the dictionary API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    /// Service-assigned identifier, used to resolve the sign's image.
    pub id: u32,
    /// The written description of the sign.
    pub description: String,
}

/// A display-ready sign, optionally paired with its image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignView {
    /// Service-assigned identifier.
    pub id: u32,
    /// The written description of the sign.
    pub description: String,
    /// Constructed or resolved image URL for this sign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SignView {
    /// Creates a view for a sign without an image URL.
    pub fn new(sign: Sign) -> Self {
        Self {
            id: sign.id,
            description: sign.description,
            image_url: None,
        }
    }

    /// Builder method to attach the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_shape() {
        let json = r#"[{"id":12,"description":"hello"},{"id":47,"description":"thank you"}]"#;
        let signs: Vec<Sign> = serde_json::from_str(json).unwrap();
        assert_eq!(signs.len(), 2);
        assert_eq!(signs[0].id, 12);
        assert_eq!(signs[1].description, "thank you");
    }

    #[test]
    fn view_builder() {
        let sign = Sign {
            id: 12,
            description: "hello".into(),
        };
        let view = SignView::new(sign).with_image_url("https://example.test/SignImage/12");
        assert_eq!(view.id, 12);
        assert_eq!(
            view.image_url.as_deref(),
            Some("https://example.test/SignImage/12")
        );
    }

    #[test]
    fn view_serde_skips_absent_image() {
        let view = SignView::new(Sign {
            id: 3,
            description: "yes".into(),
        });
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"{"id":3,"description":"yes"}"#);
    }
}
