use crate::db::BOOKINGS_COLLECTION;
use crate::domain::Booking;
use crate::errors::ServerError;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::sync::Database;

pub fn insert_booking(db: &Database, listing_id: &str) -> Result<Booking, ServerError> {
    let mut booking = Booking::new(listing_id);

    let result = db
        .collection::<Booking>(BOOKINGS_COLLECTION)
        .insert_one(&booking)
        .run()?;

    booking.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
        ServerError::DbError(format!(
            "booking inserted with unexpected id {}",
            result.inserted_id
        ))
    })?);

    log::info!("Booked listing {listing_id}");
    Ok(booking)
}

/// Unknown or malformed ids find nothing.
pub fn find_booking(db: &Database, id: &str) -> Result<Option<Booking>, ServerError> {
    let Ok(oid) = ObjectId::parse_str(id) else {
        return Ok(None);
    };

    let booking = db
        .collection::<Booking>(BOOKINGS_COLLECTION)
        .find_one(doc! { "_id": oid })
        .run()?;
    Ok(booking)
}
