use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod gallery;
pub mod route;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 商品集合名
pub const PRODUCTS_COLLECTION: &str = "products";

/// 商品缺少 category 字段时，推荐查询使用的兜底分类
pub const FALLBACK_CATEGORY: &str = "Electronics";

/// 图片加载失败时替换的本地图片
pub const DEFAULT_IMAGE: &str = "/Images/default.png";

/// 缩略图 / 推荐卡片缺少图片时的占位图
pub const PLACEHOLDER_IMAGE: &str = "/Images/DSLR.png";

/// 详情页推荐商品数量上限
pub const SUGGESTION_LIMIT: usize = 4;

/// 上传表单可选的商品分类
pub const CATALOGUE_CATEGORIES: &[&str] = &[
    "Electronics",
    "Cameras",
    "Tools",
    "Outdoor",
    "Sports",
    "Furniture",
    "Vehicles",
    "Party",
];

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub key: String,
    pub value: String,
}

/// 商品记录
///
/// 所有可选字段保持 `Option` / 空集合，显示用的默认值统一由下面的访问器提供，
/// 渲染层不做零散的存在性判断。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 文档 ID，来自文档路径而不是字段
    #[serde(skip)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// 推荐查询使用的分类，只有缺失或空字符串时才替换
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_CATEGORY)
    }

    pub fn name_or_default(&self) -> &str {
        non_blank(&self.product_name).unwrap_or("Unnamed Product")
    }

    pub fn brand_or_default(&self) -> &str {
        non_blank(&self.brand_name).unwrap_or("Unknown")
    }

    pub fn description_or_default(&self) -> &str {
        non_blank(&self.description).unwrap_or("A high-quality product for your needs.")
    }

    pub fn warehouse_or_default(&self) -> &str {
        non_blank(&self.warehouse_location).unwrap_or("Warehouse")
    }

    /// 没有 SKU 时由文档 ID 前 6 位派生
    pub fn sku_label(&self) -> String {
        match non_blank(&self.sku) {
            Some(sku) => sku.to_string(),
            None => format!("PRD{}", self.id.chars().take(6).collect::<String>()),
        }
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price.unwrap_or(0.0))
    }

    pub fn availability_label(&self) -> String {
        match self.stock_quantity {
            Some(n) if n > 0 => format!("In Stock ({} available)", n),
            _ => "In Stock".to_string(),
        }
    }

    /// 规格表行；没有规格时用分类和品牌两行代替
    pub fn spec_rows(&self) -> Vec<(String, String)> {
        if self.specifications.is_empty() {
            return vec![
                (
                    "Category".to_string(),
                    non_blank(&self.category).unwrap_or("General").to_string(),
                ),
                ("Brand".to_string(), self.brand_or_default().to_string()),
            ];
        }
        self.specifications
            .iter()
            .map(|s| (s.key.clone(), s.value.clone()))
            .collect()
    }

    pub fn tag_labels(&self) -> Vec<String> {
        if self.tags.is_empty() {
            return vec![non_blank(&self.category).unwrap_or("product").to_string()];
        }
        self.tags.clone()
    }

    /// 卡片展示用的首图
    pub fn card_image(&self) -> &str {
        self.image_links
            .first()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

// 存储中的数字字段可能是整数、浮点数，甚至是表单遗留的字符串。
// 无法解析时视为缺失，而不是整条记录解码失败。
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LooseNumber {
    fn value(self) -> Option<f64> {
        let n = match self {
            LooseNumber::Number(n) => Some(n),
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok(),
            LooseNumber::Other(_) => None,
        };
        n.filter(|n| n.is_finite())
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<LooseNumber>::deserialize(d)?.and_then(LooseNumber::value))
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<LooseNumber>::deserialize(d)?
        .and_then(LooseNumber::value)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

// =========================================================
// 上传表单 (Upload Draft)
// =========================================================

/// 上传表单的原始输入，全部保持字符串形态，由核心层校验后转成 `Product`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    /// 每行一个图片地址
    pub image_links: String,
    /// 每行一个 `key: value`
    pub specifications: String,
    /// 逗号分隔
    pub tags: String,
}

impl ProductDraft {
    pub fn image_lines(&self) -> Vec<String> {
        self.image_links
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 解析规格行；没有冒号的行返回 Err(行内容)
    pub fn specification_lines(&self) -> Result<Vec<Specification>, String> {
        self.specifications
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| match line.split_once(':') {
                Some((k, v)) if !k.trim().is_empty() => Ok(Specification {
                    key: k.trim().to_string(),
                    value: v.trim().to_string(),
                }),
                _ => Err(line.to_string()),
            })
            .collect()
    }

    /// 去重且保持原顺序
    pub fn tag_list(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let p = Product::default().with_id("abcdefgh");
        assert_eq!(p.category_or_default(), "Electronics");
        assert_eq!(p.name_or_default(), "Unnamed Product");
        assert_eq!(p.brand_or_default(), "Unknown");
        assert_eq!(p.sku_label(), "PRDabcdef");
        assert_eq!(p.price_label(), "$0.00");
        assert_eq!(p.availability_label(), "In Stock");
        assert_eq!(p.card_image(), PLACEHOLDER_IMAGE);
        assert_eq!(
            p.spec_rows(),
            vec![
                ("Category".to_string(), "General".to_string()),
                ("Brand".to_string(), "Unknown".to_string())
            ]
        );
        assert_eq!(p.tag_labels(), vec!["product".to_string()]);
    }

    #[test]
    fn test_only_empty_category_counts_as_missing() {
        let p = Product {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(p.category_or_default(), FALLBACK_CATEGORY);

        // 空白分类原样用于查询
        let p = Product {
            category: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(p.category_or_default(), "  ");
    }

    #[test]
    fn test_tag_fallback_uses_category() {
        let p = Product {
            category: Some("Cameras".into()),
            ..Default::default()
        };
        assert_eq!(p.tag_labels(), vec!["Cameras".to_string()]);
    }

    #[test]
    fn test_labels_with_values() {
        let p = Product {
            price: Some(12.5),
            stock_quantity: Some(3),
            sku: Some("SKU-1".into()),
            ..Default::default()
        };
        assert_eq!(p.price_label(), "$12.50");
        assert_eq!(p.availability_label(), "In Stock (3 available)");
        assert_eq!(p.sku_label(), "SKU-1");
    }

    #[test]
    fn test_lenient_numeric_fields() {
        let p: Product = serde_json::from_value(serde_json::json!({
            "productName": "Drill",
            "price": "19.99",
            "stockQuantity": 4.0,
        }))
        .unwrap();
        assert_eq!(p.price, Some(19.99));
        assert_eq!(p.stock_quantity, Some(4));

        let p: Product = serde_json::from_value(serde_json::json!({
            "price": "free",
            "stockQuantity": -2,
        }))
        .unwrap();
        assert_eq!(p.price, None);
        assert_eq!(p.stock_quantity, None);
    }

    #[test]
    fn test_serialize_skips_id_and_missing() {
        let p = Product {
            id: "x".into(),
            product_name: Some("Tent".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("id").is_none());
        assert!(v.get("price").is_none());
        assert_eq!(v["productName"], "Tent");
    }

    #[test]
    fn test_draft_parsing() {
        let draft = ProductDraft {
            image_links: "https://a/1.png\n\n  /Images/2.png ".into(),
            specifications: "Weight: 2kg\nColor : Red".into(),
            tags: "camping, tent,camping, ,outdoor".into(),
            ..Default::default()
        };
        assert_eq!(draft.image_lines(), vec!["https://a/1.png", "/Images/2.png"]);
        let specs = draft.specification_lines().unwrap();
        assert_eq!(specs[1].key, "Color");
        assert_eq!(specs[1].value, "Red");
        assert_eq!(draft.tag_list(), vec!["camping", "tent", "outdoor"]);

        let bad = ProductDraft {
            specifications: "no separator".into(),
            ..Default::default()
        };
        assert_eq!(bad.specification_lines(), Err("no separator".to_string()));
    }
}
