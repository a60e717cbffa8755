use crate::domain::{Booking, Listing};
use crate::templates::components::listing_href;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn confirmation_page(booking: &Booking, listing: &Listing) -> Markup {
    desktop_layout(
        "Booking confirmed",
        None,
        html! {
            h1 { "You're booked!" }
            p {
                "Your stay at "
                a href=(listing_href(&listing.id)) { (listing.name) }
                " is confirmed."
            }
            @if let Some(id) = &booking.id {
                p { "Confirmation number: " code class="confirmation-id" { (id.to_hex()) } }
            }
        },
    )
}
