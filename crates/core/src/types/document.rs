//! The editable configuration document.
//!
//! A single JSON document holds every piece of store and product copy the
//! admin panel can edit. Writes replace the whole document; there is no
//! per-field patch semantics. Field names use camelCase on the wire to match
//! the stored layout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a configuration document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Two color options share the same `id`.
    #[error("duplicate color id: {0}")]
    DuplicateColorId(String),

    /// Discount percent outside the allowed `[0, 100)` range.
    #[error("discount percent out of range: {0}")]
    DiscountOutOfRange(u8),

    /// Negative price.
    #[error("price must be non-negative: {0}")]
    NegativePrice(i64),
}

/// The whole editable document: store copy plus product copy.
///
/// `Default` yields the compiled-in document used when nothing has been
/// stored yet (see [`defaults`](super::defaults)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub product: ProductConfig,
}

impl AppConfig {
    /// Validate the document invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if a color id is duplicated, the discount
    /// percent is outside `[0, 100)`, or the price is negative.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.product.price < 0 {
            return Err(DocumentError::NegativePrice(self.product.price));
        }
        if self.product.discount_percent >= 100 {
            return Err(DocumentError::DiscountOutOfRange(
                self.product.discount_percent,
            ));
        }
        let mut seen = HashSet::new();
        for color in &self.product.colors {
            if !seen.insert(color.id.as_str()) {
                return Err(DocumentError::DuplicateColorId(color.id.clone()));
            }
        }
        Ok(())
    }
}

/// Store-level copy: identity, hero content, contact block, footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub name: String,
    pub tagline: String,
    /// Ordered bullet points shown in the hero section.
    pub hero_highlights: Vec<String>,
    pub contact: StoreContact,
    pub product_links: Vec<StoreLink>,
    pub support_links: Vec<StoreLink>,
    /// Legal/footer line.
    pub legal: String,
}

/// Contact block shown in the footer and contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreContact {
    pub hotline: String,
    pub email: String,
    pub address: String,
    /// External chat link (Zalo).
    pub zalo_link: String,
}

/// A labelled link pair used for the footer link lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLink {
    pub label: String,
    pub href: String,
}

/// Product-level copy: pricing, color options, specifications, features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfig {
    /// Price in the smallest currency unit (VND has no minor unit).
    pub price: i64,
    /// Discount percent applied to `price`, in `[0, 100)`.
    pub discount_percent: u8,
    pub colors: Vec<ColorOption>,
    pub specifications: Vec<Specification>,
    pub features: Vec<Feature>,
    pub benefits: Vec<String>,
}

/// A selectable product color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    /// Unique within the color list.
    pub id: String,
    pub name: String,
    /// CSS classes rendering the swatch.
    pub swatch_classes: String,
    /// Image path for this color variant.
    pub image: String,
}

/// Icon identifiers available for specification rows.
///
/// A closed set so templates can map each value to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecificationIcon {
    Palette,
    Package,
    Droplets,
    Zap,
    Power,
    Home,
    Filter,
    Ruler,
    Scale,
    Shield,
}

impl SpecificationIcon {
    /// The wire identifier, matching the serde representation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Package => "package",
            Self::Droplets => "droplets",
            Self::Zap => "zap",
            Self::Power => "power",
            Self::Home => "home",
            Self::Filter => "filter",
            Self::Ruler => "ruler",
            Self::Scale => "scale",
            Self::Shield => "shield",
        }
    }

    /// Display glyph for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Palette => "🎨",
            Self::Package => "📦",
            Self::Droplets => "💧",
            Self::Zap => "⚡",
            Self::Power => "🔌",
            Self::Home => "🏠",
            Self::Filter => "🌀",
            Self::Ruler => "📏",
            Self::Scale => "⚖️",
            Self::Shield => "🛡️",
        }
    }
}

/// One row in the specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub icon: SpecificationIcon,
    pub label: String,
    pub value: String,
}

/// A marketing feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Emoji glyph shown on the card.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_document_validates() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn default_document_pricing() {
        let config = AppConfig::default();
        assert_eq!(config.product.price, 4_990_000);
        assert_eq!(config.product.discount_percent, 17);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert!(json["store"]["heroHighlights"].is_array());
        assert!(json["store"]["contact"]["zaloLink"].is_string());
        assert!(json["product"]["discountPercent"].is_number());
        assert!(json["product"]["colors"][0]["swatchClasses"].is_string());
        // Spec icons serialize as lowercase identifiers
        assert_eq!(json["product"]["specifications"][0]["icon"], "power");
    }

    #[test]
    fn round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn rejects_duplicate_color_ids() {
        let mut config = AppConfig::default();
        let mut duplicate = config.product.colors.first().unwrap().clone();
        duplicate.name = "Khác".to_string();
        config.product.colors.push(duplicate);
        assert!(matches!(
            config.validate(),
            Err(DocumentError::DuplicateColorId(id)) if id == "black"
        ));
    }

    #[test]
    fn rejects_discount_of_100_or_more() {
        let mut config = AppConfig::default();
        config.product.discount_percent = 100;
        assert!(matches!(
            config.validate(),
            Err(DocumentError::DiscountOutOfRange(100))
        ));
    }

    #[test]
    fn rejects_negative_price() {
        let mut config = AppConfig::default();
        config.product.price = -1;
        assert!(matches!(
            config.validate(),
            Err(DocumentError::NegativePrice(-1))
        ));
    }

    #[test]
    fn full_product_replacement_is_not_merged() {
        // A replacement document with a different product block carries none
        // of the old block's fields after a round trip.
        let mut replacement = AppConfig::default();
        replacement.product.price = 5_500_000;
        replacement.product.discount_percent = 10;
        replacement.product.benefits = vec!["Giao hàng nhanh.".to_string()];

        let json = serde_json::to_string(&replacement).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.product.price, 5_500_000);
        assert_eq!(parsed.product.discount_percent, 10);
        assert_eq!(parsed.product.benefits.len(), 1);
    }
}
