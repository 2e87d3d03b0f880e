// src/collect/mod.rs
//
// The collector: walk listing pages 1..=N strictly in order, extract the
// items on each, and hand the whole ordered table to the store. Any
// failure aborts the run before anything is written.

mod normalize;

pub use normalize::{normalize, parse_price};

use std::path::PathBuf;

use url::Url;

use crate::{
    config::options::CollectOptions,
    core::{Fetch, ListingParser},
    error::CollectError,
    model::Item,
    progress::Progress,
    store,
};

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub pages: u32,
    pub items: usize,
    pub path: PathBuf,
}

/// Substitute `page` into the first `{}` of `template`.
pub fn page_url(template: &str, page: u32) -> Result<Url, CollectError> {
    let url = template.replacen("{}", &page.to_string(), 1);
    Url::parse(&url).map_err(|source| CollectError::Url { url, source })
}

/// Fetch and parse one listing page.
pub fn collect_page(
    url: &Url,
    fetcher: &dyn Fetch,
    parser: &dyn ListingParser,
) -> Result<Vec<Item>, CollectError> {
    let body = fetcher.get(url)?;
    parser
        .parse(&body, url)?
        .into_iter()
        .map(normalize)
        .collect()
}

/// Collect every page into memory, page order then in-page order.
pub fn collect(
    opts: &CollectOptions,
    fetcher: &dyn Fetch,
    parser: &dyn ListingParser,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Item>, CollectError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages as usize);
    }

    let mut items = Vec::new();
    for page in 1..=opts.pages {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping page {page}..."));
        }

        let url = page_url(&opts.url_template, page)?;
        let mut found = collect_page(&url, fetcher, parser).inspect_err(|e| {
            loge!("Collect: page {page} failed: {e}");
        })?;
        logd!("Collect: page {page} → {} items", found.len());

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page, found.len());
        }
        items.append(&mut found);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(items)
}

/// Collect, then persist to `opts.out_path`.
pub fn run(
    opts: &CollectOptions,
    fetcher: &dyn Fetch,
    parser: &dyn ListingParser,
    progress: Option<&mut dyn Progress>,
) -> Result<Summary, CollectError> {
    logf!("Collect: begin pages={} template={}", opts.pages, opts.url_template);

    let items = collect(opts, fetcher, parser, progress)?;
    store::write_table(&opts.out_path, &items)?;

    logf!("Collect: wrote {} items → {}", items.len(), opts.out_path.display());
    Ok(Summary {
        pages: opts.pages,
        items: items.len(),
        path: opts.out_path.clone(),
    })
}
