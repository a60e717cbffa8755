// src/tests/router_tests/index_tests.rs

use crate::tests::utils::{get, listing_doc, send, MemoryStore};
use mongodb::bson::Document;

fn seeded() -> MemoryStore {
    let mut rated_low = listing_doc("low-rated", "Cheap but loud", 40.0, Some(5.0));
    rated_low.insert("review_scores", mongodb::bson::doc! { "review_scores_rating": 70 });

    let mut balcony = listing_doc("balcony", "Sunny balcony", 180.0, Some(20.0));
    balcony.insert("amenities", vec!["Wifi", "Patio or balcony"]);

    MemoryStore::with_listings(vec![
        listing_doc("cheap", "Cheap flat", 50.0, Some(10.0)),
        listing_doc("pricey", "Pricey loft", 150.0, Some(30.0)),
        listing_doc("nofee", "No fee cottage", 45.0, None),
        rated_low,
        balcony,
    ])
}

#[test]
fn under_100_returns_only_cheap_listings_with_fee() {
    let store = MemoryStore::with_listings(vec![
        listing_doc("cheap", "Cheap flat", 50.0, Some(10.0)),
        listing_doc("pricey", "Pricey loft", 150.0, Some(30.0)),
    ]);

    let (status, body) = send(&store, get("/?filter=under-100"));

    assert_eq!(status, 200);
    assert!(body.contains("Cheap flat"));
    assert!(body.contains("/listing/cheap"));
    assert!(!body.contains("Pricey loft"));
}

#[test]
fn no_filter_lists_everything_with_a_cleaning_fee() {
    let (status, body) = send(&seeded(), get("/"));

    assert_eq!(status, 200);
    for name in ["Cheap flat", "Pricey loft", "Cheap but loud", "Sunny balcony"] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(!body.contains("No fee cottage"));
}

#[test]
fn highly_rated_needs_rating_above_90() {
    let (_, body) = send(&seeded(), get("/?filter=highly-rated"));

    assert!(body.contains("Cheap flat"));
    assert!(!body.contains("Cheap but loud"));
    assert!(!body.contains("Pricey loft"));
}

#[test]
fn surprise_matches_amenities() {
    let (_, body) = send(&seeded(), get("/?filter=surprise"));

    assert!(body.contains("Sunny balcony"));
    assert!(!body.contains("Cheap flat"));
}

#[test]
fn unknown_filter_falls_back_to_all() {
    let (status, unknown) = send(&seeded(), get("/?filter=penthouse"));
    let (_, all) = send(&seeded(), get("/"));

    assert_eq!(status, 200);
    assert_eq!(unknown, all);
}

#[test]
fn results_are_capped_at_15() {
    let docs: Vec<Document> = (0..20)
        .map(|i| listing_doc(&format!("l{i}"), &format!("Listing number {i}"), 60.0, Some(5.0)))
        .collect();
    let store = MemoryStore::with_listings(docs);

    let (_, body) = send(&store, get("/"));

    assert_eq!(body.matches("class=\"card\"").count(), 15);
    assert!(body.contains("Listing number 14"));
    assert!(!body.contains("Listing number 15"));
}

#[test]
fn empty_result_shows_message() {
    let (status, body) = send(&MemoryStore::default(), get("/?filter=surprise"));

    assert_eq!(status, 200);
    assert!(body.contains("No listings match"));
}

#[test]
fn malformed_listing_is_a_server_error() {
    let mut broken = listing_doc("broken", "Broken", 50.0, Some(10.0));
    broken.remove("images");
    let store = MemoryStore::with_listings(vec![broken]);

    let (status, body) = send(&store, get("/"));

    assert_eq!(status, 500);
    assert!(body.contains("images"));
}

#[test]
fn post_to_index_is_not_allowed() {
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .body(astra::Body::empty())
        .unwrap();

    let (status, _) = send(&seeded(), req);
    assert_eq!(status, 405);
}

#[test]
fn unknown_path_is_404() {
    let (status, body) = send(&seeded(), get("/nope"));

    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
}
