mod carousel;
mod faq;
mod header;
mod popup;
mod status_bar;

pub use carousel::{CarouselWidget, TrackMeasurements, SECTION_HEIGHT};
pub use faq::{FaqState, FaqWidget};
pub use header::HeaderWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
