use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A reservation stored in the `bookings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Id of the booked listing.
    pub property: String,
    pub booked_at: DateTime,
}

impl Booking {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            id: None,
            property: property.into(),
            booked_at: DateTime::now(),
        }
    }
}
