// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Fixed location of the collected table: `<crate root>/data/books_data.csv`.
pub fn default_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_DIR).join(DATA_FILE)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Listing URL with a single `{}` placeholder for the page number.
    pub url_template: String,
    /// Pages `1..=pages` are fetched, in order.
    pub pages: u32,
    pub out_path: PathBuf,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            url_template: format!("http://{HOST}{PAGE_PATH}"),
            pages: PAGE_COUNT,
            out_path: default_data_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub data_path: PathBuf,
    pub top_n: usize,
    pub histogram_bins: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            top_n: TOP_N,
            histogram_bins: HISTOGRAM_BINS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub report: ReportOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_points_at_catalogue() {
        let opts = CollectOptions::default();
        assert_eq!(opts.url_template, "http://books.toscrape.com/catalogue/page-{}.html");
        assert_eq!(opts.pages, 50);
    }

    #[test]
    fn app_options_share_the_data_path() {
        // the collector writes where the report reads
        let opts = AppOptions::default();
        assert_eq!(opts.collect.out_path, opts.report.data_path);
        assert_eq!(opts.collect, CollectOptions::default());
    }

    #[test]
    fn data_path_is_under_crate_root() {
        let p = default_data_path();
        assert!(p.starts_with(env!("CARGO_MANIFEST_DIR")));
        assert!(p.ends_with("data/books_data.csv"));
    }
}
