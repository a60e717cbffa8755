pub mod confirmation;
pub mod error;
pub mod index;
pub mod listing;

pub use confirmation::confirmation_page;
pub use error::error_page;
pub use index::index_page;
pub use listing::listing_page;
