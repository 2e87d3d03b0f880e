// src/gui/components/data_table.rs
//
// The filtered book list. Purely a view over `View`; rows are looked up
// by index, nothing is copied.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::report::View;

const HEADERS: [&str; 5] = ["Title", "Price", "Rating", "Stock", "URL"];
const WIDTHS: [f32; 5] = [280.0, 70.0, 60.0, 90.0, 360.0];

pub fn draw(ui: &mut egui::Ui, view: &View) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt("book_list")
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(320.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(&ix) = view.row_ix.get(row.index()) else { return };
                let it = &view.table()[ix];

                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(&it.title).on_hover_text(&it.title);
                });
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("{:.2}", it.price));
                    });
                });
                row.col(|ui| {
                    ui.label(it.rating.label());
                });
                row.col(|ui| {
                    ui.label(&it.availability);
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.hyperlink_to(RichText::new(it.source_url.as_str()).small(), it.source_url.as_str());
                });
            });
        });
}
