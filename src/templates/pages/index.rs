// templates/pages/index.rs

use crate::domain::{FilterSelector, Listing};
use crate::templates::{desktop_layout, listing_card};
use maud::{html, Markup};

pub fn index_page(listings: &[Listing], filter: FilterSelector) -> Markup {
    desktop_layout(
        "Listings",
        Some(filter),
        html! {
            h1 { "Places to stay" }

            @if listings.is_empty() {
                p class="empty" { "No listings match this filter." }
            } @else {
                section class="listings" {
                    @for listing in listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}
