use crate::db::ListingStore;
use crate::domain::{FilterSelector, Listing, ListingQuery};
use crate::errors::{ResultResp, ServerError};
use crate::responses::html_response;
use crate::templates::pages::{confirmation_page, index_page, listing_page};
use astra::Request;
use percent_encoding::percent_decode_str;

pub fn handle(req: Request, store: &dyn ListingStore) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => index(store, req.uri().query()),
        ("GET", ["listing", id]) if !id.is_empty() => listing(store, &path_id(id)?),
        ("GET", ["confirmation", id]) if !id.is_empty() => confirmation(store, &path_id(id)?),

        (_, [""]) => Err(ServerError::MethodNotAllowed),
        (_, ["listing", id]) | (_, ["confirmation", id]) if !id.is_empty() => {
            Err(ServerError::MethodNotAllowed)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn index(store: &dyn ListingStore, query: Option<&str>) -> ResultResp {
    let filter = query_param(query, "filter");
    let selector = FilterSelector::from_param(filter.as_deref());
    let query = ListingQuery::for_selector(selector);

    let listings = store
        .find_listings(&query)?
        .iter()
        .map(Listing::from_document)
        .collect::<Result<Vec<_>, _>>()?;

    html_response(index_page(&listings, selector))
}

fn listing(store: &dyn ListingStore, id: &str) -> ResultResp {
    let doc = store.find_listing(id)?.ok_or(ServerError::NotFound)?;
    let listing = Listing::from_document(&doc)?;

    html_response(listing_page(&listing))
}

/// Books only listings that exist.
fn confirmation(store: &dyn ListingStore, id: &str) -> ResultResp {
    let doc = store.find_listing(id)?.ok_or(ServerError::NotFound)?;
    let listing = Listing::from_document(&doc)?;
    let inserted = store.insert_booking(&listing.id)?;

    let booking_id = inserted.id.ok_or(ServerError::InternalError)?.to_hex();
    let booking = store
        .find_booking(&booking_id)?
        .ok_or_else(|| ServerError::DbError(format!("booking {booking_id} was not stored")))?;

    html_response(confirmation_page(&booking, &listing))
}

/// Percent-decoded path segment. Segments that are not UTF-8 match no listing.
fn path_id(raw: &str) -> Result<String, ServerError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|id| id.into_owned())
        .map_err(|_| ServerError::NotFound)
}

/// First value of `key` in a form-urlencoded query string.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
