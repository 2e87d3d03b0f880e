// src/model.rs
//
// The one entity this crate deals in: a catalogue item as listed on a
// page, plus its five-step star rating.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

/// Star rating as the site labels it (`<p class="star-rating Three">`).
/// Variant order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::One, Rating::Two, Rating::Three, Rating::Four, Rating::Five];

    pub fn label(self) -> &'static str {
        match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown rating label {0:?}")]
pub struct UnknownRating(pub String);

impl FromStr for Rating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| UnknownRating(s!(s)))
    }
}

/// One row of the collected table. Field renames are the file's header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Stock")]
    pub availability: String,
    #[serde(rename = "Rating")]
    pub rating: Rating,
    #[serde(rename = "URL")]
    pub source_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for r in Rating::ALL {
            assert_eq!(r.label().parse::<Rating>(), Ok(r));
        }
        assert_eq!("three".parse::<Rating>(), Err(UnknownRating(s!("three"))));
        assert!("Zero".parse::<Rating>().is_err());
    }

    #[test]
    fn ordinal_order_is_display_order() {
        let mut v = vec![Rating::Five, Rating::One, Rating::Three];
        v.sort();
        assert_eq!(v, vec![Rating::One, Rating::Three, Rating::Five]);
    }
}
