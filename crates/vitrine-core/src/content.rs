//! Showcase content: the product sections, store info, and FAQ entries
//! rendered by the TUI.
//!
//! Content is declared in a TOML file. Loading is an explicit async
//! operation that completes before any UI wiring happens, so everything
//! that depends on the content is attached strictly after it exists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store identity shown in the header and contact overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One product card inside a carousel section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Short badge text, e.g. "new" or "bestseller"
    #[serde(default)]
    pub tag: Option<String>,
}

/// A titled group of products rendered as one independent carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One FAQ accordion entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Complete showcase content for one storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showcase {
    pub store: StoreInfo,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl Showcase {
    /// Parse showcase content from a TOML string
    pub fn parse(input: &str) -> Result<Self> {
        let showcase: Showcase =
            toml::from_str(input).map_err(|e| Error::Content(e.to_string()))?;
        showcase.validate()?;
        Ok(showcase)
    }

    /// Load showcase content from a file
    pub async fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading showcase content from {}", path.display());
        let input = tokio::fs::read_to_string(path).await?;
        Self::parse(&input)
    }

    /// Load showcase content, falling back to the built-in sample when the
    /// file does not exist
    pub async fn load_or_sample(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path).await
        } else {
            tracing::info!(
                "No content file at {}, using built-in sample showcase",
                path.display()
            );
            Ok(Self::sample())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.store.name.trim().is_empty() {
            return Err(Error::Content("store.name must not be empty".into()));
        }
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(Error::Content(format!(
                    "section \"{}\" has an empty id",
                    section.title
                )));
            }
        }
        Ok(())
    }

    /// Built-in demo content so `vitrine run` works without any setup
    pub fn sample() -> Self {
        Self {
            store: StoreInfo {
                name: "Oakline Interiors".to_string(),
                tagline: Some("Hand-finished furniture for modern homes".to_string()),
            },
            sections: vec![
                Section {
                    id: "featured".to_string(),
                    title: "Featured Products".to_string(),
                    products: vec![
                        product("Walnut Lounge Chair", "$420", Some("bestseller")),
                        product("Brass Floor Lamp", "$180", None),
                        product("Oak Coffee Table", "$350", None),
                        product("Linen Sofa, 3-Seat", "$1,240", Some("new")),
                        product("Ceramic Table Vase", "$45", None),
                        product("Wool Area Rug 5x8", "$310", None),
                    ],
                },
                Section {
                    id: "bedsets".to_string(),
                    title: "Bed Sets".to_string(),
                    products: vec![
                        product("Aspen Bed Set, Queen", "$1,680", Some("bestseller")),
                        product("Haven Bed Set, King", "$2,150", None),
                        product("Nordic Bed Set, Double", "$1,390", None),
                        product("Carved Teak Headboard", "$560", None),
                        product("Floating Nightstand Pair", "$280", Some("new")),
                    ],
                },
                Section {
                    id: "dining".to_string(),
                    title: "Dining Tables".to_string(),
                    products: vec![
                        product("Live-Edge Dining Table", "$1,450", None),
                        product("Round Marble Table", "$1,980", Some("new")),
                        product("Extendable Oak Table", "$1,120", None),
                        product("Rattan Dining Chair Set", "$640", None),
                        product("Walnut Bench, 6ft", "$390", None),
                    ],
                },
            ],
            faq: vec![
                FaqEntry {
                    question: "Do you deliver nationwide?".to_string(),
                    answer: "Yes. Standard delivery takes 5-7 business days; large items \
                             ship with our white-glove service and are placed in the room \
                             of your choice."
                        .to_string(),
                },
                FaqEntry {
                    question: "Can I order custom furniture?".to_string(),
                    answer: "Absolutely. Send us an inquiry with the \"custom-furniture\" \
                             subject and our design team will follow up with a quote within \
                             24 business hours."
                        .to_string(),
                },
                FaqEntry {
                    question: "What warranty do you offer?".to_string(),
                    answer: "All solid-wood pieces carry a 5-year structural warranty. \
                             Upholstery and finishes are covered for 1 year."
                        .to_string(),
                },
                FaqEntry {
                    question: "What materials do you use?".to_string(),
                    answer: "We work primarily with kiln-dried walnut, oak, and teak, \
                             paired with full-grain leather and European linen."
                        .to_string(),
                },
                FaqEntry {
                    question: "Can I return an item?".to_string(),
                    answer: "Stock items can be returned within 14 days in original \
                             condition. Custom pieces are made to order and are not \
                             returnable."
                        .to_string(),
                },
            ],
        }
    }
}

fn product(name: &str, price: &str, tag: Option<&str>) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        description: None,
        tag: tag.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_showcase() {
        let input = r#"
            [store]
            name = "Test Store"
            tagline = "tag"

            [[sections]]
            id = "featured"
            title = "Featured"

            [[sections.products]]
            name = "Chair"
            price = "$10"

            [[sections.products]]
            name = "Table"
            price = "$20"
            tag = "new"

            [[faq]]
            question = "Q?"
            answer = "A."
        "#;
        let showcase = Showcase::parse(input).unwrap();
        assert_eq!(showcase.store.name, "Test Store");
        assert_eq!(showcase.sections.len(), 1);
        assert_eq!(showcase.sections[0].products.len(), 2);
        assert_eq!(showcase.sections[0].products[1].tag.as_deref(), Some("new"));
        assert_eq!(showcase.faq.len(), 1);
    }

    #[test]
    fn test_parse_rejects_empty_store_name() {
        let input = r#"
            [store]
            name = "  "
        "#;
        assert!(Showcase::parse(input).is_err());
    }

    #[test]
    fn test_section_without_products_is_allowed() {
        let input = r#"
            [store]
            name = "Test Store"

            [[sections]]
            id = "empty"
            title = "Empty Section"
        "#;
        let showcase = Showcase::parse(input).unwrap();
        assert!(showcase.sections[0].products.is_empty());
    }

    #[test]
    fn test_sample_has_multiple_sections() {
        let sample = Showcase::sample();
        assert!(sample.sections.len() >= 3);
        assert!(sample.sections.iter().all(|s| !s.products.is_empty()));
        assert!(!sample.faq.is_empty());
    }

    #[tokio::test]
    async fn test_load_or_sample_missing_file() {
        let path = Path::new("/nonexistent/showcase.toml");
        let showcase = Showcase::load_or_sample(path).await.unwrap();
        assert_eq!(showcase.store.name, Showcase::sample().store.name);
    }
}
