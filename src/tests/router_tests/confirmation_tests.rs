use crate::db::ListingStore;
use crate::domain::{Booking, ListingQuery};
use crate::errors::ServerError;
use crate::tests::utils::{get, listing_doc, send, MemoryStore};
use mongodb::bson::Document;

#[test]
fn booking_is_stored_and_retrievable() {
    let store = MemoryStore::with_listings(vec![listing_doc("abc123", "Tiny house", 75.0, Some(15.0))]);

    let (status, body) = send(&store, get("/confirmation/abc123"));
    assert_eq!(status, 200);
    assert!(body.contains("Tiny house"));

    let bookings = store.bookings.lock().unwrap().clone();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].property, "abc123");

    let id = bookings[0].id.expect("booking id").to_hex();
    assert!(body.contains(&id), "confirmation page should show the booking id");

    let stored = crate::db::ListingStore::find_booking(&store, &id)
        .unwrap()
        .expect("booking should be retrievable");
    assert_eq!(stored.property, "abc123");
}

#[test]
fn each_visit_creates_a_booking() {
    let store = MemoryStore::with_listings(vec![listing_doc("abc123", "Tiny house", 75.0, None)]);

    send(&store, get("/confirmation/abc123"));
    send(&store, get("/confirmation/abc123"));

    assert_eq!(store.booking_count(), 2);
}

#[test]
fn booking_an_unknown_listing_is_404_and_stores_nothing() {
    let store = MemoryStore::default();

    let (status, _) = send(&store, get("/confirmation/ghost"));

    assert_eq!(status, 404);
    assert_eq!(store.booking_count(), 0);
}

#[test]
fn booking_an_id_with_a_space() {
    let store = MemoryStore::with_listings(vec![listing_doc("a b", "Spaced out", 60.0, None)]);

    let (status, _) = send(&store, get("/confirmation/a%20b"));

    assert_eq!(status, 200);
    assert_eq!(store.bookings.lock().unwrap()[0].property, "a b");
}

/// Accepts bookings but never finds them again.
struct LosesBookings(MemoryStore);

impl ListingStore for LosesBookings {
    fn find_listings(&self, query: &ListingQuery) -> Result<Vec<Document>, ServerError> {
        self.0.find_listings(query)
    }

    fn find_listing(&self, id: &str) -> Result<Option<Document>, ServerError> {
        self.0.find_listing(id)
    }

    fn insert_booking(&self, listing_id: &str) -> Result<Booking, ServerError> {
        self.0.insert_booking(listing_id)
    }

    fn find_booking(&self, _id: &str) -> Result<Option<Booking>, ServerError> {
        Ok(None)
    }
}

#[test]
fn unreadable_booking_is_a_server_error() {
    let store = LosesBookings(MemoryStore::with_listings(vec![listing_doc(
        "abc123",
        "Tiny house",
        75.0,
        None,
    )]));

    let err = match crate::router::handle(get("/confirmation/abc123"), &store) {
        Ok(_) => panic!("confirmation should fail when the booking cannot be read back"),
        Err(err) => err,
    };

    assert_eq!(err.status(), 500);
    assert!(matches!(err, ServerError::DbError(_)));
}
