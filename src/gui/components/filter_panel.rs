// src/gui/components/filter_panel.rs
//
// Left panel: rating multiselect + price range. Edits GuiState.filter in
// place; the central panel rebuilds the report from it every frame.
// With no table loaded only the Reload button is shown; the central
// panel carries the one notice.

use eframe::egui::{self, Slider};

use crate::config::state::GuiState;

pub fn draw(ui: &mut egui::Ui, gui: &mut GuiState, reload: &mut bool) {
    let Some(f) = gui.filter.as_mut() else {
        reload_button(ui, reload);
        return;
    };

    ui.heading("🔍 Filter Options");
    ui.separator();

    ui.label("Select Rating");
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            f.selected = f.available.iter().copied().collect();
            logd!("UI: Ratings → all");
        }
        if ui.button("None").clicked() {
            f.selected.clear();
            logd!("UI: Ratings → none");
        }
    });

    for &r in &f.available {
        let mut on = f.selected.contains(&r);
        if ui.checkbox(&mut on, r.label()).changed() {
            if on { f.selected.insert(r); } else { f.selected.remove(&r); }
            logd!("UI: Rating {r} → {on}");
        }
    }

    ui.add_space(8.0);
    ui.label("Price Range (£)");

    let bounds = f.bounds.lo..=f.bounds.hi;
    let lo_changed = ui
        .add(Slider::new(&mut f.range.lo, bounds.clone()).text("min").fixed_decimals(2))
        .changed();
    let hi_changed = ui
        .add(Slider::new(&mut f.range.hi, bounds).text("max").fixed_decimals(2))
        .changed();

    // The two handles never cross; the one being dragged pushes the other.
    if f.range.lo > f.range.hi {
        if lo_changed { f.range.hi = f.range.lo; } else { f.range.lo = f.range.hi; }
    }
    if lo_changed || hi_changed {
        logd!("UI: Price range → {:.2}..={:.2}", f.range.lo, f.range.hi);
    }

    if ui.button("Reset filters").clicked() {
        f.selected = f.available.iter().copied().collect();
        f.range = f.bounds;
    }

    ui.separator();
    reload_button(ui, reload);
}

fn reload_button(ui: &mut egui::Ui, reload: &mut bool) {
    if ui.button("Reload data").on_hover_text("Re-read the table if the file changed").clicked() {
        *reload = true;
    }
}
