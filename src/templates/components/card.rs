use crate::domain::Listing;
use crate::templates::components::{amount, listing_href};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="card" {
            a href=(listing_href(&listing.id)) {
                img src=(listing.picture_url) alt=(listing.name) loading="lazy";
                h2 { (listing.name) }
            }
            p class="price" { "$" (amount(listing.price)) " / night" }
            p { "Sleeps " (listing.accommodates) }
        }
    }
}
