// src/progress.rs
/// Lightweight progress reporting used by the collector.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one listing page has been fetched and parsed.
    fn item_done(&mut self, _page: u32, _items: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
