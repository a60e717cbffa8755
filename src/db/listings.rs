use crate::db::LISTINGS_COLLECTION;
use crate::domain::query::{listing_id_filter, ListingQuery};
use crate::errors::ServerError;
use mongodb::bson::Document;
use mongodb::sync::Database;

pub fn find_listings(db: &Database, query: &ListingQuery) -> Result<Vec<Document>, ServerError> {
    let cursor = db
        .collection::<Document>(LISTINGS_COLLECTION)
        .find(query.filter())
        .limit(query.limit)
        .run()?;

    let mut out = Vec::new();
    for doc in cursor {
        out.push(doc?);
    }
    Ok(out)
}

pub fn find_listing(db: &Database, id: &str) -> Result<Option<Document>, ServerError> {
    let doc = db
        .collection::<Document>(LISTINGS_COLLECTION)
        .find_one(listing_id_filter(id))
        .run()?;
    Ok(doc)
}
