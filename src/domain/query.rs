use crate::domain::FilterSelector;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

/// Maximum number of listings on the index page.
pub const LISTING_LIMIT: i64 = 15;

pub const CLEANING_FEE: &str = "cleaning_fee";
pub const PRICE: &str = "price";
pub const REVIEW_RATING: &str = "review_scores.review_scores_rating";
pub const AMENITIES: &str = "amenities";

pub const SURPRISE_AMENITIES: &[&str] = &["Pets allowed", "Patio or balcony", "Self check-in"];

/// A single condition on a listing document. Field names may be dotted paths.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Exists(&'static str),
    LessThan(&'static str, i32),
    GreaterThan(&'static str, i32),
    AnyOf(&'static str, &'static [&'static str]),
}

impl Predicate {
    pub fn field(&self) -> &'static str {
        match self {
            Predicate::Exists(f)
            | Predicate::LessThan(f, _)
            | Predicate::GreaterThan(f, _)
            | Predicate::AnyOf(f, _) => *f,
        }
    }

    pub fn to_document(&self) -> Document {
        let condition = match self {
            Predicate::Exists(_) => doc! { "$exists": true },
            Predicate::LessThan(_, n) => doc! { "$lt": *n },
            Predicate::GreaterThan(_, n) => doc! { "$gt": *n },
            Predicate::AnyOf(_, values) => doc! { "$in": values.to_vec() },
        };
        let mut clause = Document::new();
        clause.insert(self.field(), condition);
        clause
    }
}

/// Conjunction of predicates plus a result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub predicates: Vec<Predicate>,
    pub limit: i64,
}

impl ListingQuery {
    pub fn for_selector(selector: FilterSelector) -> Self {
        let mut predicates = vec![Predicate::Exists(CLEANING_FEE)];

        match selector {
            FilterSelector::All => {}
            FilterSelector::Under100 => {
                predicates.push(Predicate::LessThan(PRICE, 100));
            }
            FilterSelector::HighlyRated => {
                predicates.push(Predicate::LessThan(PRICE, 100));
                predicates.push(Predicate::GreaterThan(REVIEW_RATING, 90));
            }
            FilterSelector::Surprise => {
                predicates.push(Predicate::AnyOf(AMENITIES, SURPRISE_AMENITIES));
            }
        }

        Self {
            predicates,
            limit: LISTING_LIMIT,
        }
    }

    /// The MongoDB filter document for `find`.
    pub fn filter(&self) -> Document {
        match self.predicates.as_slice() {
            [] => Document::new(),
            [single] => single.to_document(),
            many => {
                let clauses: Vec<Bson> = many
                    .iter()
                    .map(|p| Bson::Document(p.to_document()))
                    .collect();
                doc! { "$and": clauses }
            }
        }
    }
}

/// Point lookup filter. Ids are usually strings in `listingsAndReviews`,
/// but listings inserted elsewhere may carry an ObjectId.
pub fn listing_id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "$or": [ { "_id": id }, { "_id": oid } ] },
        Err(_) => doc! { "_id": id },
    }
}
