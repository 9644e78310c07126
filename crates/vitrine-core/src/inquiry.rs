//! Contact inquiries and the mail-relay client.
//!
//! The relay server accepts a JSON form post on `/api/send-email`,
//! validates it, and sends the actual emails. This module is the client
//! side: the same validation the relay enforces, the request itself, and
//! the WhatsApp deep link used for product orders.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::content::Product;
use crate::{Error, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// A contact-form submission
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    /// Validate the inquiry the same way the relay does: every field is
    /// required, and the email must look like an address.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            &self.name,
            &self.email,
            &self.phone,
            &self.subject,
            &self.message,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::InvalidInquiry("All fields are required".into()));
        }
        if !email_regex().is_match(self.email.trim()) {
            return Err(Error::InvalidInquiry("Invalid email format".into()));
        }
        Ok(())
    }
}

/// Map a well-known subject slug to its display form; unknown slugs pass
/// through verbatim.
pub fn format_subject(subject: &str) -> String {
    match subject {
        "custom-furniture" => "Custom Furniture Design".to_string(),
        "interior-design" => "Interior Design Consultation".to_string(),
        "product-inquiry" => "Product Inquiry".to_string(),
        "order-status" => "Order Status".to_string(),
        "warranty-support" => "Warranty Support".to_string(),
        "other" => "Other Inquiry".to_string(),
        other => other.to_string(),
    }
}

/// Relay response body for both success and failure
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for the inquiry relay server
pub struct RelayClient {
    client: Client,
    base_url: Url,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Trailing slash matters for Url::join
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Submit an inquiry to the relay
    pub async fn send(&self, inquiry: &Inquiry) -> Result<RelayResponse> {
        inquiry.validate()?;

        let url = self.base_url.join("api/send-email")?;
        tracing::debug!("Posting inquiry to {}", url);

        let response = self.client.post(url).json(inquiry).send().await?;
        let body: RelayResponse = response.json().await?;

        if body.success {
            tracing::info!("Inquiry accepted for {}", inquiry.email);
            Ok(body)
        } else {
            Err(Error::Relay(body.message))
        }
    }

    /// Check the relay health endpoint
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("api/health")?;
        let response = self.client.get(url).send().await?;
        let body: HealthResponse = response.json().await?;
        Ok(body.status)
    }
}

/// Build the `wa.me` order link for a product, with the order message
/// percent-encoded into the `text` parameter.
pub fn whatsapp_order_url(phone: &str, product: &Product) -> Result<Url> {
    let message = format!(
        "Hello! I'm interested in ordering:\n\nProduct: {}\nPrice: {}\n\nPlease provide more details.",
        product.name, product.price
    );
    let url = Url::parse_with_params(&format!("https://wa.me/{}", phone), &[("text", message)])?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inquiry() -> Inquiry {
        Inquiry {
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "+15551234567".to_string(),
            subject: "product-inquiry".to_string(),
            message: "Is the lounge chair in stock?".to_string(),
        }
    }

    #[test]
    fn test_valid_inquiry_passes() {
        assert!(valid_inquiry().validate().is_ok());
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut inquiry = valid_inquiry();
        inquiry.message = "   ".to_string();
        let err = inquiry.validate().unwrap_err();
        assert!(err.to_string().contains("All fields are required"));
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@example.com"] {
            let mut inquiry = valid_inquiry();
            inquiry.email = email.to_string();
            assert!(inquiry.validate().is_err(), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_format_subject() {
        assert_eq!(format_subject("custom-furniture"), "Custom Furniture Design");
        assert_eq!(format_subject("order-status"), "Order Status");
        // Unknown slugs pass through
        assert_eq!(format_subject("something-else"), "something-else");
    }

    #[test]
    fn test_whatsapp_order_url() {
        let product = Product {
            name: "Oak Coffee Table".to_string(),
            price: "$350".to_string(),
            description: None,
            tag: None,
        };
        let url = whatsapp_order_url("15551234567", &product).unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15551234567");
        let text = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("Product: Oak Coffee Table"));
        assert!(text.contains("Price: $350"));
    }

    #[test]
    fn test_relay_client_url_join() {
        // Base URLs with and without a trailing slash resolve identically
        let a = RelayClient::new("http://localhost:5000").unwrap();
        let b = RelayClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            a.base_url.join("api/send-email").unwrap(),
            b.base_url.join("api/send-email").unwrap()
        );
    }
}
