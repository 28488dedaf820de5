//! Compiled-in default configuration document.
//!
//! Used whenever the config store has nothing persisted yet, and as the
//! fallback document when the store is unreachable. The copy is the launch
//! content for the CCoM organic waste recycler.

use super::document::{
    AppConfig, ColorOption, Feature, ProductConfig, Specification, SpecificationIcon, StoreConfig,
    StoreContact, StoreLink,
};

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            product: default_product(),
        }
    }
}

fn link(label: &str, href: &str) -> StoreLink {
    StoreLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn spec(icon: SpecificationIcon, label: &str, value: &str) -> Specification {
    Specification {
        icon,
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn default_store() -> StoreConfig {
    StoreConfig {
        name: "CCoM".to_string(),
        tagline: "Máy tái chế rác hữu cơ CS 500W – Dung tích 4L".to_string(),
        hero_highlights: vec![
            "Xử lý rác trong 2–3 giờ thành mùn hữu cơ khô.".to_string(),
            "Giảm 80–90% thể tích rác, giữ bếp sạch thơm.".to_string(),
            "Khử mùi than hoạt tính, không còn ruồi muỗi.".to_string(),
        ],
        contact: StoreContact {
            hotline: "0846989394".to_string(),
            email: "support@ccom.vn".to_string(),
            address: "926/15 Khu Phố 55, Phường Thới An, TP.HCM, Việt Nam".to_string(),
            zalo_link: "https://zalo.me/0846989394".to_string(),
        },
        product_links: vec![
            link("Máy xử lý rác CCoM", "/product"),
            link("Phụ kiện", "/product"),
            link("Bảo trì", "/product"),
        ],
        support_links: vec![
            link("Hướng dẫn sử dụng", "/#how-it-works"),
            link("FAQ", "/#faq"),
            link("Liên hệ", "/#contact"),
        ],
        legal: "© 2024 CCoM.".to_string(),
    }
}

fn default_product() -> ProductConfig {
    ProductConfig {
        price: 4_990_000,
        discount_percent: 17,
        colors: vec![
            ColorOption {
                id: "black".to_string(),
                name: "Đen".to_string(),
                swatch_classes: "bg-gray-900".to_string(),
                image: "/product-black.jpg".to_string(),
            },
            ColorOption {
                id: "white".to_string(),
                name: "Trắng".to_string(),
                swatch_classes: "bg-white border-2 border-gray-200".to_string(),
                image: "/product-white.jpg".to_string(),
            },
        ],
        specifications: vec![
            spec(
                SpecificationIcon::Power,
                "Công suất",
                "500W mạnh mẽ, xử lý rác nhanh chóng",
            ),
            spec(
                SpecificationIcon::Droplets,
                "Dung tích thùng chứa",
                "4L – đáp ứng nhu cầu gia đình 3–6 người",
            ),
            spec(
                SpecificationIcon::Filter,
                "Công nghệ xử lý",
                "Sấy nhiệt + Nghiền nát + Khử mùi than hoạt tính",
            ),
            spec(
                SpecificationIcon::Zap,
                "Nguồn điện",
                "220V – 50Hz, an toàn cho gia đình",
            ),
            spec(
                SpecificationIcon::Ruler,
                "Kích thước",
                "30 × 25 × 35 cm (tham khảo)",
            ),
            spec(SpecificationIcon::Scale, "Trọng lượng", "7 – 8 kg"),
            spec(
                SpecificationIcon::Shield,
                "Chất liệu",
                "Vỏ ABS + Inox chống gỉ, bền bỉ",
            ),
        ],
        features: vec![
            feature(
                "⚡",
                "Công suất 500W mạnh mẽ",
                "Nghiền nhỏ và sấy khô rác hữu cơ chỉ trong 2–3 giờ, giữ bếp sạch thơm.",
            ),
            feature(
                "🪣",
                "Dung tích 4L tiện dụng",
                "Phù hợp gia đình 3–6 người, xử lý rác thải nhà bếp hằng ngày.",
            ),
            feature(
                "🌀",
                "3 trong 1: Sấy – Nghiền – Khử mùi",
                "Rác được nghiền nhỏ, sấy khô và khử mùi triệt để, không còn nhớp nháp.",
            ),
            feature(
                "⏱️",
                "Thời gian xử lý nhanh",
                "Chu trình tiêu chuẩn 2–3 giờ, tùy nhu cầu có thể sấy nhanh 10–15 phút/mẻ.",
            ),
            feature(
                "🔒",
                "Thiết kế thông minh, an toàn",
                "Khóa nắp tự động, chống rò điện, vỏ cách nhiệt, hạn chế bỏng.",
            ),
            feature(
                "🔇",
                "Tiết kiệm điện năng & êm ái",
                "Tiêu thụ điện thấp, vận hành êm không gây ồn lớn.",
            ),
            feature(
                "🧼",
                "Vệ sinh cực dễ",
                "Khay chứa và lưỡi nghiền tháo rời, vệ sinh nhanh chóng.",
            ),
            feature(
                "🌍",
                "Sống xanh bền vững",
                "Giảm 80–90% thể tích rác, tạo phân hữu cơ giàu dinh dưỡng cho cây.",
            ),
        ],
        benefits: vec![
            "Bảo vệ sức khỏe: không còn vi khuẩn, ruồi muỗi phát sinh từ rác bếp.".to_string(),
            "Tiết kiệm chi phí: chủ động nguồn phân hữu cơ sạch cho cây trồng.".to_string(),
            "Bảo vệ môi trường: giảm rác thải chôn lấp và khí nhà kính.".to_string(),
            "Lý tưởng cho gia đình chung cư, nhà phố muốn tiết kiệm diện tích chứa rác.".to_string(),
            "Hoàn hảo cho người yêu trồng cây, làm vườn cần phân hữu cơ sạch.".to_string(),
            "Phù hợp gia đình sống xanh, mong muốn căn bếp luôn sạch đẹp.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_populated() {
        let config = AppConfig::default();
        assert_eq!(config.store.hero_highlights.len(), 3);
        assert_eq!(config.store.product_links.len(), 3);
        assert_eq!(config.store.support_links.len(), 3);
        assert_eq!(config.product.colors.len(), 2);
        assert_eq!(config.product.specifications.len(), 7);
        assert_eq!(config.product.features.len(), 8);
        assert_eq!(config.product.benefits.len(), 6);
    }
}
