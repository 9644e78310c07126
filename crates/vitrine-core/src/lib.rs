pub mod config;
pub mod content;
pub mod error;
pub mod inquiry;

pub use config::{AppConfig, CarouselConfig, ContactConfig};
pub use content::{FaqEntry, Product, Section, Showcase, StoreInfo};
pub use error::{Error, Result};
pub use inquiry::{Inquiry, RelayClient};
