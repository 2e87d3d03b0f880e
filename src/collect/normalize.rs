// src/collect/normalize.rs
use crate::{
    config::consts::CURRENCY_PREFIX,
    core::RawItem,
    error::CollectError,
    model::Item,
};

/// `"£51.77"` → `51.77`. The currency symbol is required; anything that
/// is not a finite non-negative decimal after it is rejected.
pub fn parse_price(text: &str) -> Result<f64, CollectError> {
    let bad = || CollectError::Price { text: s!(text) };

    let t = text.trim();
    // Pages decoded as Latin-1 show the pound sign as "Â£".
    let digits = t
        .strip_prefix(CURRENCY_PREFIX)
        .or_else(|| t.strip_prefix("Â£"))
        .ok_or_else(bad)?;

    let value: f64 = digits.trim().parse().map_err(|_| bad())?;
    if !value.is_finite() || value < 0.0 {
        return Err(bad());
    }
    Ok(value)
}

pub fn normalize(raw: RawItem) -> Result<Item, CollectError> {
    Ok(Item {
        price: parse_price(&raw.price_text)?,
        rating: raw.rating_label.parse()?,
        title: raw.title,
        availability: raw.availability,
        source_url: raw.link,
    })
}
