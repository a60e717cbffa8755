pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{amount, cleaning_fee_text, listing_card};
pub use layouts::desktop::desktop_layout;
