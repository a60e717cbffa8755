use crate::domain::Listing;
use crate::templates::components::{amenity_list, confirmation_href};
use crate::templates::{amount, cleaning_fee_text, desktop_layout};
use maud::{html, Markup};

pub fn listing_page(listing: &Listing) -> Markup {
    desktop_layout(
        &listing.name,
        None,
        html! {
            article class="listing" {
                img src=(listing.picture_url) alt=(listing.name);
                h1 { (listing.name) }
                p class="street" { (listing.street) }
                p { (listing.summary) }

                dl {
                    dt { "Price" }
                    dd class="price" { "$" (amount(listing.price)) }
                    dt { "Cleaning fee" }
                    dd class="cleaning-fee" { (cleaning_fee_text(listing.cleaning_fee)) }
                    dt { "Accommodates" }
                    dd { (listing.accommodates) }
                }

                h3 { "Amenities" }
                (amenity_list(&listing.amenities))

                a class="book" href=(confirmation_href(&listing.id)) { "Book" }
            }
        },
    )
}
