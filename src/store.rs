// src/store.rs
//
// The flat-file handoff between collector and report: one CSV with header
// `Title,Price,Stock,Rating,URL`, plus the report-side session cache.

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::{
    config::consts::HEADERS,
    error::{CollectError, LoadError},
    model::Item,
};

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the table (header row always present), replacing any previous
/// file. Rows go to a sibling temp file first, so a failed write never
/// leaves a half-written table behind, and the temp file is removed on
/// any error.
pub fn write_table(path: &Path, items: &[Item]) -> Result<(), CollectError> {
    let io_err = |source| CollectError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let tmp = tmp_sibling(path);
    let written = write_rows(&tmp, items).and_then(|()| fs::rename(&tmp, path).map_err(io_err));
    if written.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            if e.kind() != io::ErrorKind::NotFound {
                loge!("Store: could not remove {}: {e}", tmp.display());
            }
        }
    }
    written
}

fn write_rows(tmp: &Path, items: &[Item]) -> Result<(), CollectError> {
    let io_err = |source| CollectError::Io { path: tmp.to_path_buf(), source };

    let file = File::create(tmp).map_err(io_err)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    wtr.write_record(HEADERS)?;
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.flush().map_err(io_err)
}

/// Read the whole table. A missing file is reported as `LoadError::Missing`
/// so the report can show its empty state.
pub fn read_table(path: &Path) -> Result<Vec<Item>, LoadError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()));
        }
        Err(source) => return Err(LoadError::Io { path: path.to_path_buf(), source }),
    };

    let mut rdr = csv::Reader::from_reader(file);
    let mut items = Vec::new();
    for (i, rec) in rdr.deserialize::<Item>().enumerate() {
        let item = rec?;
        if !item.price.is_finite() || item.price < 0.0 {
            // +1 for the header line
            return Err(LoadError::Record {
                row: i + 1,
                reason: format!("price {} is not a non-negative decimal", item.price),
            });
        }
        items.push(item);
    }
    Ok(items)
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

struct Slot {
    stamp: Option<SystemTime>,
    loaded: Result<Vec<Item>, LoadError>,
}

/// Session cache for the report's table, keyed by path + modification
/// time. The load result (including "missing") is kept until `refresh`
/// sees a different mtime or `clear` is called.
pub struct TableCache {
    path: PathBuf,
    slot: Option<Slot>,
    loads: usize,
}

impl TableCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), slot: None, loads: 0 }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Number of times the file has actually been read.
    pub fn loads(&self) -> usize { self.loads }

    pub fn get(&mut self) -> Result<&[Item], &LoadError> {
        let path = &self.path;
        let loads = &mut self.loads;
        let slot = self.slot.get_or_insert_with(|| {
            let stamp = modified(path);
            let loaded = read_table(path);
            match &loaded {
                Ok(items) => logf!("Cache: loaded {} items from {}", items.len(), path.display()),
                Err(e) if e.is_missing() => logd!("Cache: {e}"),
                Err(e) => loge!("Cache: load failed: {e}"),
            }
            *loads += 1;
            Slot { stamp, loaded }
        });
        slot.loaded.as_deref()
    }

    /// Drop the cached table if the file changed (or appeared/vanished)
    /// since it was loaded. Returns true when the cache was invalidated.
    pub fn refresh(&mut self) -> bool {
        let now = modified(&self.path);
        let stale = match &self.slot {
            Some(slot) => slot.stamp != now,
            None => false,
        };
        if stale {
            logd!("Cache: {} changed, invalidating", self.path.display());
            self.slot = None;
        }
        stale
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
