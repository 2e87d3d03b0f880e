// tests/collect_pages.rs
//
// Collector against local fixture pages; no network.
//
use std::{
    collections::HashMap,
    fs,
    io::{Read, Write},
    net::TcpListener,
    path::PathBuf,
    thread,
};

use shelfscan::collect::{self, page_url};
use shelfscan::config::options::CollectOptions;
use shelfscan::core::{CssListingParser, Fetch, HttpFetcher};
use shelfscan::progress::Progress;
use shelfscan::store;
use shelfscan::{CollectError, Rating};
use url::Url;

const TEMPLATE: &str = "http://books.toscrape.com/catalogue/page-{}.html";

fn fixture(name: &str) -> String {
    let p = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&p).unwrap()
}

/// Serves fixture files by URL; anything else is a fetch failure.
struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl FixtureFetcher {
    fn new(pages: &[(u32, &str)]) -> Self {
        let pages = pages
            .iter()
            .map(|&(n, file)| (page_url(TEMPLATE, n).unwrap().to_string(), fixture(file)))
            .collect();
        Self { pages }
    }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &Url) -> Result<String, CollectError> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| CollectError::transport(url.as_str(), "404 Not Found"))
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(u32, usize)>,
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_done(&mut self, page: u32, items: usize) { self.done.push((page, items)); }
    fn finish(&mut self) { self.finished = true; }
}

fn opts(pages: u32, out: PathBuf) -> CollectOptions {
    CollectOptions { url_template: TEMPLATE.to_string(), pages, out_path: out }
}

fn blocks_in(file: &str) -> usize {
    fixture(file).matches(r#"<article class="product_pod">"#).count()
}

#[test]
fn records_per_page_match_item_blocks() {
    let fetcher = FixtureFetcher::new(&[(1, "page-1.html"), (2, "page-2.html")]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let mut rec = Recorder::default();

    let items = collect::collect(&opts(2, dir.path().join("t.csv")), &fetcher, &parser, Some(&mut rec)).unwrap();

    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, vec![(1, blocks_in("page-1.html")), (2, blocks_in("page-2.html"))]);
    assert_eq!(rec.lines, vec!["Scraping page 1...", "Scraping page 2..."]);
    assert!(rec.finished);
    assert_eq!(items.len(), 5);
}

#[test]
fn page_order_then_document_order() {
    let fetcher = FixtureFetcher::new(&[(1, "page-1.html"), (2, "page-2.html")]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let items = collect::collect(&opts(2, dir.path().join("t.csv")), &fetcher, &parser, None).unwrap();
    let titles: Vec<&str> = items.iter().map(|it| it.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "A Light in the Attic",
            "Tipping the Velvet",
            "Soumission",
            "Sharp Objects & Other Stories",
            "Sapiens: A Brief History of Humankind",
        ]
    );

    let first = &items[0];
    assert_eq!(first.price, 51.77);
    assert_eq!(first.rating, Rating::Three);
    assert_eq!(first.availability, "In stock");
    assert_eq!(
        first.source_url.as_str(),
        "http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
    );
    assert_eq!(
        items[4].source_url.as_str(),
        "http://books.toscrape.com/catalogue/sapiens-a-brief-history-of-humankind_996/index.html"
    );
    assert_eq!(items[3].rating, Rating::Five);
}

#[test]
fn run_writes_table_that_reads_back_equal() {
    let fetcher = FixtureFetcher::new(&[(1, "page-1.html"), (2, "page-2.html")]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data/books_data.csv");

    let summary = collect::run(&opts(2, out.clone()), &fetcher, &parser, None).unwrap();
    assert_eq!(summary.items, 5);
    assert_eq!(summary.path, out);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Title,Price,Stock,Rating,URL\n"));
    assert!(text.contains(",51.77,"));
    assert!(!text.contains('£'));

    let expected = collect::collect(&opts(2, out.clone()), &fetcher, &parser, None).unwrap();
    assert_eq!(store::read_table(&out).unwrap(), expected);
}

#[test]
fn fetch_failure_aborts_without_touching_output() {
    // page 2 has no fixture
    let fetcher = FixtureFetcher::new(&[(1, "page-1.html")]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("books.csv");
    fs::write(&out, "previous run").unwrap();

    let err = collect::run(&opts(2, out.clone()), &fetcher, &parser, None).unwrap_err();
    match &err {
        CollectError::Transport { url, .. } => assert!(url.ends_with("page-2.html")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous run");
}

/// Local listing server: `/catalogue/page-1.html` is the first fixture,
/// every other path is a 404. Returns the page URL template.
fn serve_first_page_only(connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let page = fixture("page-1.html");
    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let mut stream = stream.unwrap();
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);
            let (status, body) = if request.starts_with("GET /catalogue/page-1.html ") {
                ("200 OK", page.as_str())
            } else {
                ("404 Not Found", "not found")
            };
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    format!("http://{addr}/catalogue/page-{{}}.html")
}

#[test]
fn http_error_status_aborts_run() {
    let template = serve_first_page_only(2);
    let fetcher = HttpFetcher::with_client(reqwest::blocking::Client::builder().no_proxy().build().unwrap());
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data/books_data.csv");
    let mut rec = Recorder::default();

    let run_opts = CollectOptions { url_template: template, pages: 2, out_path: out.clone() };
    let err = collect::run(&run_opts, &fetcher, &parser, Some(&mut rec)).unwrap_err();

    match &err {
        CollectError::Transport { url, .. } => assert!(url.ends_with("/catalogue/page-2.html")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("404"), "{err}");
    assert_eq!(rec.done, vec![(1, 3)]);
    assert!(!out.exists());
    assert!(!out.parent().unwrap().join("books_data.csv.tmp").exists());
}

#[test]
fn structural_mismatch_aborts_run() {
    let fetcher = FixtureFetcher::new(&[(1, "page-1.html"), (2, "broken.html")]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("books.csv");
    let mut rec = Recorder::default();

    let err = collect::run(&opts(2, out.clone()), &fetcher, &parser, Some(&mut rec)).unwrap_err();
    match err {
        CollectError::Structure { url, index, what } => {
            assert!(url.ends_with("page-2.html"));
            assert_eq!(index, 0);
            assert_eq!(what, ".price_color");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(rec.done, vec![(1, 3)]);
    assert!(!rec.finished);
    assert!(!out.exists());
}

#[test]
fn zero_pages_writes_header_only() {
    let fetcher = FixtureFetcher::new(&[]);
    let parser = CssListingParser::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("books.csv");

    let summary = collect::run(&opts(0, out.clone()), &fetcher, &parser, None).unwrap();
    assert_eq!(summary.items, 0);
    assert!(store::read_table(&out).unwrap().is_empty());
}
