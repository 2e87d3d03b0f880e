// src/config/consts.rs

// Net config
pub const HOST: &str = "books.toscrape.com";
pub const PAGE_PATH: &str = "/catalogue/page-{}.html";
pub const PAGE_COUNT: u32 = 50;

// Collected table, relative to the crate root
pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "books_data.csv";
pub const HEADERS: [&str; 5] = ["Title", "Price", "Stock", "Rating", "URL"];

// Listing markup
pub const CURRENCY_PREFIX: &str = "£";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE_STEM: &str = "debug";

// Report
pub const TOP_N: usize = 10;
pub const HISTOGRAM_BINS: usize = 20;
