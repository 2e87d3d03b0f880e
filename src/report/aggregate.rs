// src/report/aggregate.rs
use std::collections::BTreeMap;

use crate::model::{Item, Rating};

/// Count of items per rating, ordinal order, zero counts omitted.
pub fn rating_distribution<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<(Rating, usize)> {
    let mut counts: BTreeMap<Rating, usize> = BTreeMap::new();
    for it in items {
        *counts.entry(it.rating).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// The `n` highest-priced items, most expensive first. Equal prices keep
/// their original table order.
pub fn top_n_by_price<'a>(items: impl IntoIterator<Item = &'a Item>, n: usize) -> Vec<&'a Item> {
    let mut v: Vec<&Item> = items.into_iter().collect();
    // stable sort: ties stay in input order
    v.sort_by(|a, b| b.price.total_cmp(&a.price));
    v.truncate(n);
    v
}

/// Equal-width price buckets spanning the observed min..max.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// `[start, end)` of bucket `i` (the last bucket also includes `end`).
    pub fn bucket(&self, i: usize) -> (f64, f64) {
        let start = self.lo + self.width * i as f64;
        (start, start + self.width)
    }
}

/// None when there is nothing to bucket or `bins` is zero. When every
/// price is equal all items land in the first bucket.
pub fn price_histogram<'a>(items: impl IntoIterator<Item = &'a Item>, bins: usize) -> Option<Histogram> {
    let prices: Vec<f64> = items.into_iter().map(|it| it.price).collect();
    if prices.is_empty() || bins == 0 {
        return None;
    }
    let lo = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for p in prices {
        let ix = if width > 0.0 {
            (((p - lo) / width) as usize).min(bins - 1)
        } else {
            0
        };
        counts[ix] += 1;
    }
    Some(Histogram { lo, width, counts })
}

/// Mean price per rating over whatever it is given. The report always
/// passes the full table here, not the filtered view.
pub fn average_price_by_rating<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<(Rating, f64)> {
    let mut sums: BTreeMap<Rating, (f64, usize)> = BTreeMap::new();
    for it in items {
        let e = sums.entry(it.rating).or_insert((0.0, 0));
        e.0 += it.price;
        e.1 += 1;
    }
    sums.into_iter()
        .map(|(r, (sum, n))| (r, sum / n as f64))
        .collect()
}
