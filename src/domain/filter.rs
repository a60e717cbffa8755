// src/domain/filter.rs

/// Named preset narrowing the listing index, taken from the `filter` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSelector {
    #[default]
    All,
    Under100,
    HighlyRated,
    Surprise,
}

impl FilterSelector {
    /// Navigation order.
    pub const PRESETS: [FilterSelector; 4] = [
        FilterSelector::All,
        FilterSelector::Under100,
        FilterSelector::HighlyRated,
        FilterSelector::Surprise,
    ];

    /// Absent and unrecognized values both select `All`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None => FilterSelector::All,
            Some("under-100") => FilterSelector::Under100,
            Some("highly-rated") => FilterSelector::HighlyRated,
            Some("surprise") => FilterSelector::Surprise,
            Some(other) => {
                log::debug!("Unknown filter {other:?}, showing all listings");
                FilterSelector::All
            }
        }
    }

    pub fn param(self) -> Option<&'static str> {
        match self {
            FilterSelector::All => None,
            FilterSelector::Under100 => Some("under-100"),
            FilterSelector::HighlyRated => Some("highly-rated"),
            FilterSelector::Surprise => Some("surprise"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSelector::All => "All",
            FilterSelector::Under100 => "Under $100",
            FilterSelector::HighlyRated => "Highly rated",
            FilterSelector::Surprise => "Surprise me",
        }
    }

    pub fn href(self) -> String {
        match self.param() {
            Some(p) => format!("/?filter={p}"),
            None => "/".to_string(),
        }
    }
}
