pub mod booking;
pub mod filter;
pub mod listing;
pub mod query;

pub use booking::Booking;
pub use filter::FilterSelector;
pub use listing::Listing;
pub use query::ListingQuery;
