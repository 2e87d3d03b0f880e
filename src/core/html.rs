// src/core/html.rs
//
// Listing-page extraction: page markup → one `RawItem` per item block.
// Only this file knows about the HTML library; everything downstream
// works on `RawItem`.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::normalize_ws;
use crate::error::CollectError;

/// Fields exactly as they appear on the page, before any conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub price_text: String,
    pub availability: String,
    pub rating_label: String,
    /// Already resolved against the page URL.
    pub link: Url,
}

pub trait ListingParser {
    /// Extract every item block on the page, in document order.
    /// A block missing any expected element fails the whole page.
    fn parse(&self, markup: &str, page_url: &Url) -> Result<Vec<RawItem>, CollectError>;
}

const RATING_BASE_CLASS: &str = "star-rating";

/// CSS-selector parser for the Books to Scrape listing markup:
///
/// ```html
/// <article class="product_pod">
///   <p class="star-rating Three"></p>
///   <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">…</a></h3>
///   <div class="product_price">
///     <p class="price_color">£51.77</p>
///     <p class="instock availability"><i class="icon-ok"></i> In stock</p>
///   </div>
/// </article>
/// ```
pub struct CssListingParser {
    block: Selector,
    title_link: Selector,
    price: Selector,
    stock: Selector,
    rating: Selector,
}

fn selector(css: &'static str) -> Result<Selector, CollectError> {
    Selector::parse(css).map_err(|_| CollectError::Selector(css))
}

impl CssListingParser {
    pub fn new() -> Result<Self, CollectError> {
        Ok(Self {
            block: selector("article.product_pod")?,
            title_link: selector("h3 > a")?,
            price: selector(".price_color")?,
            stock: selector(".instock.availability")?,
            rating: selector("p.star-rating")?,
        })
    }

    fn extract(&self, block: ElementRef, index: usize, page_url: &Url) -> Result<RawItem, CollectError> {
        let missing = |what| CollectError::Structure { url: page_url.to_string(), index, what };

        let link_el = block.select(&self.title_link).next().ok_or_else(|| missing("h3 > a"))?;
        let title = link_el.value().attr("title").ok_or_else(|| missing("title attribute"))?;
        let href = link_el.value().attr("href").ok_or_else(|| missing("href attribute"))?;
        let link = page_url.join(href).map_err(|source| CollectError::Url { url: s!(href), source })?;

        let price_text = block
            .select(&self.price)
            .next()
            .map(|e| e.text().collect::<String>())
            .ok_or_else(|| missing(".price_color"))?;

        let availability = block
            .select(&self.stock)
            .next()
            .map(|e| normalize_ws(&e.text().collect::<String>()))
            .ok_or_else(|| missing(".instock.availability"))?;

        let rating_label = block
            .select(&self.rating)
            .next()
            .and_then(|e| e.value().classes().find(|c| *c != RATING_BASE_CLASS))
            .ok_or_else(|| missing("star-rating class"))?;

        Ok(RawItem {
            title: s!(title),
            price_text: s!(price_text.trim()),
            availability,
            rating_label: s!(rating_label),
            link,
        })
    }
}

impl ListingParser for CssListingParser {
    fn parse(&self, markup: &str, page_url: &Url) -> Result<Vec<RawItem>, CollectError> {
        let doc = Html::parse_document(markup);
        doc.select(&self.block)
            .enumerate()
            .map(|(i, block)| self.extract(block, i, page_url))
            .collect()
    }
}
