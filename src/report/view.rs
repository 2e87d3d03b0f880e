// src/report/view.rs
//
// Everything the dashboard draws in one frame, computed without touching
// the UI. The GUI only lays this out; tests inspect it directly.

use crate::{
    config::options::ReportOptions,
    error::LoadError,
    model::{Item, Rating},
};

use super::{
    aggregate::{average_price_by_rating, price_histogram, rating_distribution, top_n_by_price, Histogram},
    filter::{Filter, View},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    RatingPie,
    TopByPrice,
    PriceHistogram,
    AverageByRating,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::RatingPie,
        ChartKind::TopByPrice,
        ChartKind::PriceHistogram,
        ChartKind::AverageByRating,
    ];

    /// `top_n` is the configured size of the most-expensive list.
    pub fn title(self, top_n: usize) -> String {
        match self {
            ChartKind::RatingPie => s!("Rating Distribution"),
            ChartKind::TopByPrice => format!("Top {top_n} Expensive Books"),
            ChartKind::PriceHistogram => s!("Price Histogram"),
            ChartKind::AverageByRating => s!("Average Price by Rating"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Summary<'a> {
    pub total: usize,
    pub view: View<'a>,
    pub distribution: Vec<(Rating, usize)>,
    pub top: Vec<&'a Item>,
    /// Requested length of `top`; it may hold fewer.
    pub top_n: usize,
    pub histogram: Option<Histogram>,
    /// From the full table; ignores `view`.
    pub averages: Vec<(Rating, f64)>,
}

#[derive(Clone, Debug)]
pub enum Report<'a> {
    /// Nothing to chart: the file is missing, unreadable or empty.
    Notice { text: String, is_error: bool },
    Ready(Summary<'a>),
}

impl<'a> Report<'a> {
    pub fn build(loaded: Result<&'a [Item], &LoadError>, filter: &Filter, opts: &ReportOptions) -> Self {
        let items = match loaded {
            Ok(items) => items,
            Err(e) => return Report::Notice { text: e.to_string(), is_error: !e.is_missing() },
        };
        if items.is_empty() {
            return Report::Notice { text: s!("The table has no items yet."), is_error: false };
        }

        let view = filter.apply(items);
        Report::Ready(Summary {
            total: items.len(),
            distribution: rating_distribution(view.iter()),
            top: top_n_by_price(view.iter(), opts.top_n),
            top_n: opts.top_n,
            histogram: price_histogram(view.iter(), opts.histogram_bins),
            averages: average_price_by_rating(items),
            view,
        })
    }

    pub fn charts(&self) -> &'static [ChartKind] {
        match self {
            Report::Notice { .. } => &[],
            Report::Ready(_) => &ChartKind::ALL,
        }
    }

    pub fn notices(&self) -> Vec<&str> {
        match self {
            Report::Notice { text, .. } => vec![text.as_str()],
            Report::Ready(_) => Vec::new(),
        }
    }
}
