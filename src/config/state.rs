// src/config/state.rs
use std::collections::BTreeSet;

use super::options::AppOptions;
use crate::model::{Item, Rating};
use crate::report::{ratings_present, Filter, PriceRange};

/// Sidebar filter controls. Rebuilt from the table every time it (re)loads.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Ratings offered by the multiselect (present in the data).
    pub available: Vec<Rating>,
    pub selected: BTreeSet<Rating>,
    /// Observed min/max; slider bounds.
    pub bounds: PriceRange,
    pub range: PriceRange,
}

impl FilterState {
    /// Defaults for a freshly loaded table: everything selected.
    pub fn for_table(items: &[Item]) -> Self {
        let available = ratings_present(items);
        let bounds = PriceRange::observed(items).unwrap_or(PriceRange::new(0.0, 0.0));
        Self {
            selected: available.iter().copied().collect(),
            available,
            bounds,
            range: bounds,
        }
    }

    pub fn to_filter(&self) -> Filter {
        Filter { ratings: self.selected.clone(), price: self.range }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// "Show filtered book list" expander
    pub show_table: bool,

    /// None until a table has been loaded
    pub filter: Option<FilterState>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 860,
            show_table: false,
            filter: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
