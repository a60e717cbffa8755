use crate::domain::FilterSelector;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 4px #0002; }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
header nav a.active { font-weight: bold; text-decoration: underline; }
main { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
.listings { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.card img, .listing img { width: 100%; border-radius: 8px; object-fit: cover; }
.card img { height: 180px; }
.price { font-weight: bold; }
"#;

/// Page shell. `active` highlights a filter preset in the navigation; pages
/// outside the index pass `None`.
pub fn desktop_layout(title: &str, active: Option<FilterSelector>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · MongoBnB" }
                style { (PreEscaped(STYLE)) }
            }
            body {
              header {
                  a href="/" aria-label="Home" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#ff5a5f"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                  }
                  h3 { "MongoBnB" }
                  nav {
                      ul {
                          @for preset in FilterSelector::PRESETS {
                              li {
                                  a href=(preset.href()) class=[(active == Some(preset)).then_some("active")] {
                                      (preset.label())
                                  }
                              }
                          }
                      }
                  }
              }
              main { (content) }
            }
        }
    }
}
