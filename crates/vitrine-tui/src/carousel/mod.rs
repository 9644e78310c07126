//! Looping carousel controller for the product sections.
//!
//! Each showcase section drives one independent `Carousel`: it lays the
//! cards out against the current viewport width, wraps navigation at both
//! ends, keeps a row of indicator dots in sync, and auto-advances on a
//! timer that pauses while the pointer hovers the track.
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_tui::carousel::Carousel;
//!
//! let mut carousel = Carousel::new(item_count, &config.carousel);
//!
//! // On mount and on every terminal resize:
//! carousel.remeasure(card_width, Some(card_gap), viewport_width);
//!
//! // Navigation (wraps at both ends):
//! carousel.next();
//! carousel.previous();
//! carousel.go_to(2);
//!
//! // In the main loop, on each tick:
//! carousel.poll_autoplay(Instant::now());
//! ```

pub mod autoplay;
pub mod controller;
pub mod indicator;
pub mod layout;

pub use autoplay::AutoplayTimer;
pub use controller::Carousel;
pub use indicator::DotRow;
pub use layout::Layout;
