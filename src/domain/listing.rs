use crate::errors::ServerError;
use mongodb::bson::{document::ValueAccessError, Bson, Document};

/// A listing flattened for display. Numbers stay numeric; templates format them.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub street: String,
    pub price: f64,
    pub cleaning_fee: Option<f64>,
    pub accommodates: i64,
    pub picture_url: String,
    pub amenities: Vec<String>,
}

impl Listing {
    /// Projects a `listingsAndReviews` document. Every field except `cleaning_fee`
    /// is required; a missing or mistyped one is reported by its dotted path.
    pub fn from_document(doc: &Document) -> Result<Self, ServerError> {
        let id = match doc.get("_id") {
            Some(Bson::String(s)) => s.clone(),
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(_) => return Err(ServerError::malformed("_id", ValueAccessError::UnexpectedType)),
            None => return Err(ServerError::malformed("_id", ValueAccessError::NotPresent)),
        };

        let address = doc
            .get_document("address")
            .map_err(|e| ServerError::malformed("address", e))?;
        let images = doc
            .get_document("images")
            .map_err(|e| ServerError::malformed("images", e))?;

        let amenities = doc
            .get_array("amenities")
            .map_err(|e| ServerError::malformed("amenities", e))?
            .iter()
            .map(|a| {
                a.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ServerError::malformed("amenities", ValueAccessError::UnexpectedType))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Listing {
            id,
            name: text(doc, "name", "name")?,
            summary: text(doc, "summary", "summary")?,
            street: text(address, "street", "address.street")?,
            price: number(doc, "price")?
                .ok_or_else(|| ServerError::malformed("price", ValueAccessError::NotPresent))?,
            cleaning_fee: number(doc, "cleaning_fee")?,
            accommodates: integer(doc, "accommodates")?,
            picture_url: text(images, "picture_url", "images.picture_url")?,
            amenities,
        })
    }
}

fn text(doc: &Document, key: &str, path: &str) -> Result<String, ServerError> {
    doc.get_str(key)
        .map(str::to_string)
        .map_err(|e| ServerError::malformed(path, e))
}

/// Reads any BSON numeric type. `None` when absent or null.
fn number(doc: &Document, key: &str) -> Result<Option<f64>, ServerError> {
    match doc.get(key) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::Double(v)) => Ok(Some(*v)),
        Some(Bson::Int32(v)) => Ok(Some(f64::from(*v))),
        Some(Bson::Int64(v)) => Ok(Some(*v as f64)),
        Some(Bson::Decimal128(d)) => d
            .to_string()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ServerError::malformed(key, ValueAccessError::UnexpectedType)),
        Some(_) => Err(ServerError::malformed(key, ValueAccessError::UnexpectedType)),
    }
}

fn integer(doc: &Document, key: &str) -> Result<i64, ServerError> {
    match doc.get(key) {
        Some(Bson::Int32(v)) => Ok(i64::from(*v)),
        Some(Bson::Int64(v)) => Ok(*v),
        Some(Bson::Double(v)) if v.fract() == 0.0 => Ok(*v as i64),
        Some(_) => Err(ServerError::malformed(key, ValueAccessError::UnexpectedType)),
        None => Err(ServerError::malformed(key, ValueAccessError::NotPresent)),
    }
}
