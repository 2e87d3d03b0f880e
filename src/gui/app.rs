// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, RichText};

use crate::{
    config::state::{AppState, FilterState},
    report::{ChartKind, Filter, Report, Summary},
    store::TableCache,
};

use super::components::{charts, data_table, filter_panel};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Books to Scrape Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // session cache of the collected table (read-only)
    pub cache: TableCache,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = TableCache::new(&state.options.report.data_path);
        logf!("Init: data path {}", cache.path().display());
        Self { state, cache, status: s!() }
    }

    /// Re-check the table file; filters reset when it changed.
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.cache.refresh() {
            self.state.gui.filter = None;
            self.status = s!("Reloaded data");
            logf!("UI: Reload → table changed, filters reset");
        } else {
            self.status = s!("Data unchanged");
            logd!("UI: Reload → no change");
        }
        ctx.request_repaint();
    }

    /// One frame of the dashboard.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let App { state, cache, status } = &mut *self;

        let loaded = cache.get();
        if let Ok(items) = loaded {
            if state.gui.filter.is_none() {
                state.gui.filter = Some(FilterState::for_table(items));
            }
        }

        let mut reload = false;
        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                filter_panel::draw(ui, &mut state.gui, &mut reload);
                if !status.is_empty() {
                    ui.separator();
                    ui.small(status.as_str());
                }
            });

        let filter = match &state.gui.filter {
            Some(f) => f.to_filter(),
            None => Filter::full(&[]),
        };
        let report = Report::build(loaded, &filter, &state.options.report);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("📚 Books to Scrape - Interactive Dashboard");
            ui.horizontal(|ui| {
                ui.label("Explore book data scraped from");
                ui.hyperlink_to("Books to Scrape", "http://books.toscrape.com");
            });
            ui.separator();

            match &report {
                Report::Notice { text, is_error } => {
                    let color = if *is_error { ui.visuals().error_fg_color } else { ui.visuals().warn_fg_color };
                    ui.label(RichText::new(text).color(color));
                }
                Report::Ready(summary) => {
                    egui::ScrollArea::vertical()
                        .id_salt("dashboard_scroll")
                        .show(ui, |ui| draw_summary(ui, summary, &mut state.gui.show_table));
                }
            }
        });

        if reload {
            self.reload(ctx);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn draw_summary(ui: &mut egui::Ui, s: &Summary, show_table: &mut bool) {
    ui.label(format!("Showing {} of {} books", s.view.len(), s.total));

    let expander = egui::CollapsingHeader::new("📘 Show Filtered Book List")
        .default_open(*show_table)
        .show(ui, |ui| data_table::draw(ui, &s.view));
    *show_table = expander.openness > 0.5;

    ui.add_space(8.0);

    // Row 1: pie + top-N. Row 2: histogram + averages.
    for pair in ChartKind::ALL.chunks(2) {
        ui.columns(2, |cols| {
            for (ui, kind) in cols.iter_mut().zip(pair) {
                ui.strong(kind.title(s.top_n));
                draw_chart(ui, *kind, s);
            }
        });
        ui.add_space(12.0);
    }
}

fn draw_chart(ui: &mut egui::Ui, kind: ChartKind, s: &Summary) {
    match kind {
        ChartKind::RatingPie => charts::pie(ui, &s.distribution),
        ChartKind::TopByPrice => {
            let bars: Vec<(String, f64)> = s.top.iter().map(|it| (it.title.clone(), it.price)).collect();
            charts::hbar(ui, &bars);
        }
        ChartKind::PriceHistogram => match &s.histogram {
            Some(h) => {
                let bars: Vec<(String, f64)> = h
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| (format!("{:.0}", h.bucket(i).0), n as f64))
                    .collect();
                charts::vbar(ui, &bars, |v| format!("{v:.0}"));
            }
            None => charts::no_data(ui),
        },
        ChartKind::AverageByRating => {
            let bars: Vec<(String, f64)> = s.averages.iter().map(|(r, v)| (s!(r.label()), *v)).collect();
            charts::vbar(ui, &bars, |v| format!("£{v:.2}"));
        }
    }
}
