// src/report/mod.rs
//
// Filter / aggregate layer behind the dashboard. Pure functions over the
// loaded table; nothing here mutates it.

pub mod aggregate;
pub mod filter;
pub mod view;

pub use aggregate::{average_price_by_rating, price_histogram, rating_distribution, top_n_by_price, Histogram};
pub use filter::{ratings_present, Filter, PriceRange, View};
pub use view::{ChartKind, Report, Summary};

#[cfg(test)]
pub(crate) fn test_items(rows: &[(crate::model::Rating, f64)]) -> Vec<crate::model::Item> {
    rows.iter()
        .enumerate()
        .map(|(i, &(rating, price))| crate::model::Item {
            title: format!("item-{i}"),
            price,
            availability: s!("In stock"),
            rating,
            source_url: url::Url::parse(&format!("http://books.toscrape.com/catalogue/item-{i}/index.html")).unwrap(),
        })
        .collect()
}
