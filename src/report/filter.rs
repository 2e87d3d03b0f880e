// src/report/filter.rs
//
// Sidebar predicates and the filtered view they produce. The view is a
// list of row indices into the loaded table (never a copy, never a
// mutation), so original record order is always recoverable.

use std::collections::BTreeSet;

use crate::model::{Item, Rating};

/// Inclusive price interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriceRange {
    pub fn new(lo: f64, hi: f64) -> Self { Self { lo, hi } }

    /// Min..max over `items`; None for an empty table.
    pub fn observed<'a>(items: impl IntoIterator<Item = &'a Item>) -> Option<Self> {
        items.into_iter().fold(None, |acc, it| match acc {
            None => Some(Self::new(it.price, it.price)),
            Some(r) => Some(Self::new(r.lo.min(it.price), r.hi.max(it.price))),
        })
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        self.lo <= price && price <= self.hi
    }
}

/// Ratings present in the table, in display (ordinal) order.
pub fn ratings_present<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<Rating> {
    items
        .into_iter()
        .map(|it| it.rating)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub ratings: BTreeSet<Rating>,
    pub price: PriceRange,
}

impl Filter {
    /// Defaults: every rating present, full observed price range.
    pub fn full(items: &[Item]) -> Self {
        Self {
            ratings: ratings_present(items).into_iter().collect(),
            price: PriceRange::observed(items).unwrap_or(PriceRange::new(0.0, 0.0)),
        }
    }

    #[inline]
    pub fn matches(&self, item: &Item) -> bool {
        self.ratings.contains(&item.rating) && self.price.contains(item.price)
    }

    pub fn apply<'a>(&self, items: &'a [Item]) -> View<'a> {
        let row_ix = items
            .iter()
            .enumerate()
            .filter(|(_, it)| self.matches(it))
            .map(|(i, _)| i)
            .collect();
        View { items, row_ix }
    }
}

/// Filtered view over a borrowed table.
#[derive(Clone, Debug)]
pub struct View<'a> {
    items: &'a [Item],
    pub row_ix: Vec<usize>,
}

impl<'a> View<'a> {
    /// Apply another filter on top of this view.
    pub fn refine(&self, filter: &Filter) -> View<'a> {
        let row_ix = self
            .row_ix
            .iter()
            .copied()
            .filter(|&i| filter.matches(&self.items[i]))
            .collect();
        View { items: self.items, row_ix }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.row_ix.iter().map(|&i| &self.items[i])
    }

    /// `(row index, item)` pairs, in table order.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &'a Item)> + '_ {
        self.row_ix.iter().map(|&i| (i, &self.items[i]))
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn table(&self) -> &'a [Item] { self.items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_items;

    #[test]
    fn default_filter_keeps_everything() {
        let items = test_items(&[(Rating::One, 10.0), (Rating::Five, 55.5), (Rating::Three, 20.0)]);
        let f = Filter::full(&items);
        assert_eq!(f.price, PriceRange::new(10.0, 55.5));
        assert_eq!(f.apply(&items).len(), 3);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let items = test_items(&[(Rating::One, 10.0), (Rating::One, 20.0), (Rating::One, 30.0)]);
        let f = Filter { ratings: [Rating::One].into(), price: PriceRange::new(10.0, 20.0) };
        assert_eq!(f.apply(&items).row_ix, vec![0, 1]);
    }

    #[test]
    fn rating_and_price_both_required() {
        let items = test_items(&[(Rating::One, 10.0), (Rating::Two, 10.0), (Rating::Two, 99.0)]);
        let f = Filter { ratings: [Rating::Two].into(), price: PriceRange::new(0.0, 50.0) };
        assert_eq!(f.apply(&items).row_ix, vec![1]);
    }

    #[test]
    fn empty_rating_set_selects_nothing() {
        let items = test_items(&[(Rating::One, 10.0)]);
        let f = Filter { ratings: BTreeSet::new(), price: PriceRange::new(0.0, 100.0) };
        assert!(f.apply(&items).is_empty());
    }

    #[test]
    fn ratings_present_in_ordinal_order() {
        let items = test_items(&[(Rating::Five, 1.0), (Rating::One, 1.0), (Rating::Three, 1.0), (Rating::One, 2.0)]);
        assert_eq!(ratings_present(&items), vec![Rating::One, Rating::Three, Rating::Five]);
    }

    #[test]
    fn observed_range_of_empty_table() {
        assert_eq!(PriceRange::observed(&Vec::<Item>::new()), None);
    }
}
