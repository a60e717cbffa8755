use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub mod card;

pub use card::listing_card;

/// Characters escaped in a single path segment; the set `url` uses plus `/` and `%`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

pub fn listing_href(id: &str) -> String {
    format!("/listing/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

pub fn confirmation_href(id: &str) -> String {
    format!("/confirmation/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Shown in place of a cleaning fee the listing does not have.
pub const MISSING_AMOUNT: &str = "None";

/// Text for a price. `Display` for `f64` is the shortest exact form, so the
/// rendered text parses back to the same value.
pub fn amount(value: f64) -> String {
    format!("{value}")
}

pub fn cleaning_fee_text(fee: Option<f64>) -> String {
    fee.map(amount).unwrap_or_else(|| MISSING_AMOUNT.to_string())
}

pub fn amenity_list(amenities: &[String]) -> Markup {
    html! {
        ul class="amenities" {
            @for amenity in amenities {
                li { (amenity) }
            }
        }
    }
}
