pub mod bookings;
pub mod connection;
pub mod listings;

use crate::domain::{Booking, ListingQuery};
use crate::errors::ServerError;
use mongodb::bson::Document;

pub use connection::Database;

pub const LISTINGS_COLLECTION: &str = "listingsAndReviews";
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Data access used by the route handlers.
pub trait ListingStore: Send + Sync {
    /// Listings matching `query`, in store order, at most `query.limit` of them.
    fn find_listings(&self, query: &ListingQuery) -> Result<Vec<Document>, ServerError>;

    fn find_listing(&self, id: &str) -> Result<Option<Document>, ServerError>;

    /// Stores a booking for `listing_id` and returns it with its assigned id.
    /// Callers check the listing exists first.
    fn insert_booking(&self, listing_id: &str) -> Result<Booking, ServerError>;

    fn find_booking(&self, id: &str) -> Result<Option<Booking>, ServerError>;
}

impl ListingStore for Database {
    fn find_listings(&self, query: &ListingQuery) -> Result<Vec<Document>, ServerError> {
        self.with_db(|db| listings::find_listings(db, query))
    }

    fn find_listing(&self, id: &str) -> Result<Option<Document>, ServerError> {
        self.with_db(|db| listings::find_listing(db, id))
    }

    fn insert_booking(&self, listing_id: &str) -> Result<Booking, ServerError> {
        self.with_db(|db| bookings::insert_booking(db, listing_id))
    }

    fn find_booking(&self, id: &str) -> Result<Option<Booking>, ServerError> {
        self.with_db(|db| bookings::find_booking(db, id))
    }
}
