//! Admin form field parsing.
//!
//! The admin forms post indexed field names (`heroHighlights[0]`,
//! `productLinks[1][label]`, ...) which are reshaped here into the
//! configuration document types. Incomplete rows are dropped; an empty
//! optional list falls back to the list in the current document, so clearing
//! every row of a section keeps the existing content rather than publishing
//! an empty page.

use std::collections::{BTreeMap, HashMap};

use ccom_core::{
    ColorOption, Feature, ProductConfig, Specification, SpecificationIcon, StoreConfig,
    StoreContact, StoreLink,
};
use thiserror::Error;

/// Decoded urlencoded form body, duplicate keys preserved in order.
pub type FormPairs = Vec<(String, String)>;

/// Errors from numeric product fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Price that is not a non-negative integer.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Discount percent outside `[0, 100)`.
    #[error("invalid discount percent: {0}")]
    InvalidDiscount(String),
}

/// Parse the store form into a [`StoreConfig`].
///
/// `current` supplies fallbacks: an empty name keeps the current name, empty
/// hero/link lists keep the current lists. Free-text fields (tagline,
/// contact, legal) take the submitted value as-is, including empty.
#[must_use]
pub fn parse_store_form(pairs: &FormPairs, current: &StoreConfig) -> StoreConfig {
    let name = scalar(pairs, "name");
    let hero_highlights = indexed_values(pairs, "heroHighlights");
    let product_links = parse_links(pairs, "productLinks");
    let support_links = parse_links(pairs, "supportLinks");

    StoreConfig {
        name: if name.is_empty() {
            current.name.clone()
        } else {
            name
        },
        tagline: scalar(pairs, "tagline"),
        hero_highlights: if hero_highlights.is_empty() {
            current.hero_highlights.clone()
        } else {
            hero_highlights
        },
        contact: StoreContact {
            hotline: scalar(pairs, "hotline"),
            email: scalar(pairs, "email"),
            address: scalar(pairs, "address"),
            zalo_link: scalar(pairs, "zaloLink"),
        },
        product_links: if product_links.is_empty() {
            current.product_links.clone()
        } else {
            product_links
        },
        support_links: if support_links.is_empty() {
            current.support_links.clone()
        } else {
            support_links
        },
        legal: scalar(pairs, "legal"),
    }
}

/// Parse the product form into a [`ProductConfig`].
///
/// # Errors
///
/// Returns [`FormError`] when the price or discount percent does not parse
/// or is out of range. List sections fall back to `current` when submitted
/// empty, as in [`parse_store_form`].
pub fn parse_product_form(
    pairs: &FormPairs,
    current: &ProductConfig,
) -> Result<ProductConfig, FormError> {
    let price_raw = scalar(pairs, "price");
    let price = if price_raw.is_empty() {
        current.price
    } else {
        price_raw
            .parse::<i64>()
            .ok()
            .filter(|value| *value >= 0)
            .ok_or_else(|| FormError::InvalidPrice(price_raw.clone()))?
    };

    let discount_raw = scalar(pairs, "discountPercent");
    let discount_percent = if discount_raw.is_empty() {
        current.discount_percent
    } else {
        discount_raw
            .parse::<u8>()
            .ok()
            .filter(|value| *value < 100)
            .ok_or_else(|| FormError::InvalidDiscount(discount_raw.clone()))?
    };

    let colors = parse_colors(pairs);
    let specifications = parse_specifications(pairs);
    let features = parse_features(pairs);
    let benefits = indexed_values(pairs, "benefits");

    Ok(ProductConfig {
        price,
        discount_percent,
        colors: if colors.is_empty() {
            current.colors.clone()
        } else {
            colors
        },
        specifications: if specifications.is_empty() {
            current.specifications.clone()
        } else {
            specifications
        },
        features: if features.is_empty() {
            current.features.clone()
        } else {
            features
        },
        benefits: if benefits.is_empty() {
            current.benefits.clone()
        } else {
            benefits
        },
    })
}

/// First value for a plain field name, trimmed.
fn scalar(pairs: &FormPairs, name: &str) -> String {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Values for `group[i]` keys, ordered by index, empties dropped.
fn indexed_values(pairs: &FormPairs, group: &str) -> Vec<String> {
    let mut by_index = BTreeMap::new();
    for (key, value) in pairs {
        if let Some((index, None)) = parse_indexed_key(key, group) {
            by_index.insert(index, value.trim().to_string());
        }
    }
    by_index
        .into_values()
        .filter(|value| !value.is_empty())
        .collect()
}

/// Field maps for `group[i][field]` keys, ordered by index.
fn indexed_fields(pairs: &FormPairs, group: &str) -> Vec<HashMap<String, String>> {
    let mut by_index: BTreeMap<usize, HashMap<String, String>> = BTreeMap::new();
    for (key, value) in pairs {
        if let Some((index, Some(field))) = parse_indexed_key(key, group) {
            by_index
                .entry(index)
                .or_default()
                .insert(field.to_string(), value.trim().to_string());
        }
    }
    by_index.into_values().collect()
}

/// Split `group[3]` / `group[3][field]` into index and optional field name.
fn parse_indexed_key<'a>(key: &'a str, group: &str) -> Option<(usize, Option<&'a str>)> {
    let rest = key.strip_prefix(group)?.strip_prefix('[')?;
    let (index, rest) = rest.split_once(']')?;
    let index = index.parse::<usize>().ok()?;
    if rest.is_empty() {
        return Some((index, None));
    }
    let field = rest.strip_prefix('[')?.strip_suffix(']')?;
    Some((index, Some(field)))
}

fn parse_links(pairs: &FormPairs, group: &str) -> Vec<StoreLink> {
    indexed_fields(pairs, group)
        .into_iter()
        .filter_map(|mut entry| {
            let label = entry.remove("label").unwrap_or_default();
            let href = entry.remove("href").unwrap_or_default();
            (!label.is_empty() && !href.is_empty()).then_some(StoreLink { label, href })
        })
        .collect()
}

fn parse_colors(pairs: &FormPairs) -> Vec<ColorOption> {
    indexed_fields(pairs, "colors")
        .into_iter()
        .filter_map(|mut entry| {
            let id = entry.remove("id").unwrap_or_default();
            let name = entry.remove("name").unwrap_or_default();
            let swatch_classes = entry.remove("swatchClasses").unwrap_or_default();
            let image = entry.remove("image").unwrap_or_default();
            (!id.is_empty() && !name.is_empty() && !image.is_empty()).then_some(ColorOption {
                id,
                name,
                swatch_classes,
                image,
            })
        })
        .collect()
}

fn parse_specifications(pairs: &FormPairs) -> Vec<Specification> {
    indexed_fields(pairs, "specifications")
        .into_iter()
        .filter_map(|mut entry| {
            let icon = icon_from_str(&entry.remove("icon").unwrap_or_default());
            let label = entry.remove("label").unwrap_or_default();
            let value = entry.remove("value").unwrap_or_default();
            (!label.is_empty() && !value.is_empty()).then_some(Specification { icon, label, value })
        })
        .collect()
}

fn parse_features(pairs: &FormPairs) -> Vec<Feature> {
    indexed_fields(pairs, "features")
        .into_iter()
        .filter_map(|mut entry| {
            let mut icon = entry.remove("icon").unwrap_or_default();
            if icon.is_empty() {
                icon = "🌿".to_string();
            }
            let title = entry.remove("title").unwrap_or_default();
            let description = entry.remove("description").unwrap_or_default();
            (!title.is_empty() && !description.is_empty()).then_some(Feature {
                icon,
                title,
                description,
            })
        })
        .collect()
}

/// Map a submitted icon identifier to the closed icon set.
///
/// Unknown identifiers fall back to the palette icon.
fn icon_from_str(value: &str) -> SpecificationIcon {
    match value {
        "package" => SpecificationIcon::Package,
        "droplets" => SpecificationIcon::Droplets,
        "zap" => SpecificationIcon::Zap,
        "power" => SpecificationIcon::Power,
        "home" => SpecificationIcon::Home,
        "filter" => SpecificationIcon::Filter,
        "ruler" => SpecificationIcon::Ruler,
        "scale" => SpecificationIcon::Scale,
        "shield" => SpecificationIcon::Shield,
        _ => SpecificationIcon::Palette,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> FormPairs {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn default_store() -> StoreConfig {
        ccom_core::AppConfig::default().store
    }

    fn default_product() -> ProductConfig {
        ccom_core::AppConfig::default().product
    }

    #[test]
    fn indexed_values_sort_by_index_and_drop_empties() {
        let form = pairs(&[
            ("heroHighlights[2]", "thứ ba"),
            ("heroHighlights[0]", "  thứ nhất  "),
            ("heroHighlights[1]", "   "),
        ]);
        assert_eq!(
            indexed_values(&form, "heroHighlights"),
            vec!["thứ nhất".to_string(), "thứ ba".to_string()]
        );
    }

    #[test]
    fn links_require_both_label_and_href() {
        let form = pairs(&[
            ("productLinks[0][label]", "Máy xử lý rác"),
            ("productLinks[0][href]", "/product"),
            ("productLinks[1][label]", "Thiếu href"),
            ("productLinks[1][href]", ""),
        ]);
        let links = parse_links(&form, "productLinks");
        assert_eq!(links.len(), 1);
        assert_eq!(links.first().unwrap().href, "/product");
    }

    #[test]
    fn store_form_keeps_current_name_when_blank() {
        let form = pairs(&[("name", "  "), ("tagline", "Mới")]);
        let parsed = parse_store_form(&form, &default_store());
        assert_eq!(parsed.name, "CCoM");
        assert_eq!(parsed.tagline, "Mới");
    }

    #[test]
    fn store_form_empty_lists_fall_back_to_current() {
        let parsed = parse_store_form(&pairs(&[]), &default_store());
        assert_eq!(parsed.hero_highlights, default_store().hero_highlights);
        assert_eq!(parsed.product_links, default_store().product_links);
    }

    #[test]
    fn product_form_parses_price_and_discount() {
        let form = pairs(&[("price", "5500000"), ("discountPercent", "10")]);
        let parsed = parse_product_form(&form, &default_product()).unwrap();
        assert_eq!(parsed.price, 5_500_000);
        assert_eq!(parsed.discount_percent, 10);
        // Untouched sections fall back to the current document
        assert_eq!(parsed.colors, default_product().colors);
    }

    #[test]
    fn product_form_rejects_negative_price() {
        let form = pairs(&[("price", "-1")]);
        assert_eq!(
            parse_product_form(&form, &default_product()),
            Err(FormError::InvalidPrice("-1".to_string()))
        );
    }

    #[test]
    fn product_form_rejects_discount_of_100() {
        let form = pairs(&[("discountPercent", "100")]);
        assert_eq!(
            parse_product_form(&form, &default_product()),
            Err(FormError::InvalidDiscount("100".to_string()))
        );
    }

    #[test]
    fn specification_icons_fall_back_to_palette() {
        let form = pairs(&[
            ("specifications[0][icon]", "power"),
            ("specifications[0][label]", "Công suất"),
            ("specifications[0][value]", "500W"),
            ("specifications[1][icon]", "does-not-exist"),
            ("specifications[1][label]", "Khác"),
            ("specifications[1][value]", "?"),
        ]);
        let specs = parse_specifications(&form);
        assert_eq!(specs.first().unwrap().icon, SpecificationIcon::Power);
        assert_eq!(specs.get(1).unwrap().icon, SpecificationIcon::Palette);
    }

    #[test]
    fn colors_require_id_name_and_image() {
        let form = pairs(&[
            ("colors[0][id]", "black"),
            ("colors[0][name]", "Đen"),
            ("colors[0][swatchClasses]", "bg-gray-900"),
            ("colors[0][image]", "/product-black.jpg"),
            ("colors[1][id]", "white"),
            ("colors[1][name]", "Trắng"),
            ("colors[1][image]", ""),
        ]);
        let colors = parse_colors(&form);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors.first().unwrap().id, "black");
    }
}
