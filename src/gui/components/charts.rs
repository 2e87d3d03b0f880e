// src/gui/components/charts.rs
//
// Minimal painter-drawn charts: pie, horizontal bars, vertical bars.
// Each allocates a fixed-height canvas at the full available width.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke};

use crate::model::Rating;

const CHART_H: f32 = 260.0;
const BAR_COLOR: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);

/// One color per rating, One → Five.
const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0xEF, 0x55, 0x3B),
    Color32::from_rgb(0xFF, 0xA1, 0x5A),
    Color32::from_rgb(0xFE, 0xCB, 0x52),
    Color32::from_rgb(0x00, 0xCC, 0x96),
    Color32::from_rgb(0x63, 0x6E, 0xFA),
];

fn rating_color(r: Rating) -> Color32 {
    PALETTE[r as usize]
}

fn canvas(ui: &mut egui::Ui, height: f32) -> (Rect, Painter) {
    let size = vec2(ui.available_width(), height);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    (resp.rect, painter)
}

pub fn no_data(ui: &mut egui::Ui) {
    ui.weak("No books match the current filters.");
}

/// Sector from angle `a0` to `a1` (radians), split into convex pieces of
/// at most a quarter turn.
fn fill_sector(painter: &Painter, c: Pos2, r: f32, a0: f32, a1: f32, color: Color32) {
    const ARC_POINTS: usize = 16;
    let pieces = ((a1 - a0) / FRAC_PI_2).ceil().max(1.0) as usize;
    let span = (a1 - a0) / pieces as f32;

    for p in 0..pieces {
        let start = a0 + span * p as f32;
        let mut pts = Vec::with_capacity(ARC_POINTS + 2);
        pts.push(c);
        for k in 0..=ARC_POINTS {
            let a = start + span * k as f32 / ARC_POINTS as f32;
            pts.push(c + r * vec2(a.cos(), a.sin()));
        }
        painter.add(Shape::convex_polygon(pts, color, Stroke::NONE));
    }
}

pub fn pie(ui: &mut egui::Ui, slices: &[(Rating, usize)]) {
    let total: usize = slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return no_data(ui);
    }

    let text_color = ui.visuals().text_color();
    let (rect, painter) = canvas(ui, CHART_H);
    let r = (rect.height().min(rect.width() * 0.5) * 0.5 - 8.0).max(10.0);
    let center = pos2(rect.left() + r + 8.0, rect.center().y);

    // clockwise from 12 o'clock
    let mut a0 = -FRAC_PI_2;
    for &(rating, n) in slices {
        let sweep = TAU * n as f32 / total as f32;
        fill_sector(&painter, center, r, a0, a0 + sweep, rating_color(rating));
        a0 += sweep;
    }

    let font = FontId::proportional(13.0);
    let x = center.x + r + 20.0;
    let mut y = rect.top() + 16.0;
    for &(rating, n) in slices {
        let pct = 100.0 * n as f32 / total as f32;
        painter.rect_filled(Rect::from_center_size(pos2(x, y), vec2(10.0, 10.0)), 2.0, rating_color(rating));
        painter.text(
            pos2(x + 10.0, y),
            Align2::LEFT_CENTER,
            format!("{rating}  {n} ({pct:.1}%)"),
            font.clone(),
            text_color,
        );
        y += 20.0;
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s!(s);
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Horizontal bars, first entry on top. Values are prices.
pub fn hbar(ui: &mut egui::Ui, bars: &[(String, f64)]) {
    if bars.is_empty() {
        return no_data(ui);
    }

    const ROW_H: f32 = 22.0;
    let text_color = ui.visuals().text_color();
    let (rect, painter) = canvas(ui, ROW_H * bars.len() as f32 + 8.0);
    let font = FontId::proportional(12.0);

    let label_w = (rect.width() * 0.45).min(240.0);
    let track_w = (rect.width() - label_w - 64.0).max(0.0);
    let max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    for (i, (label, v)) in bars.iter().enumerate() {
        let y = rect.top() + 4.0 + ROW_H * i as f32;
        painter.text(
            pos2(rect.left() + label_w - 6.0, y + ROW_H * 0.5),
            Align2::RIGHT_CENTER,
            truncate(label, 34),
            font.clone(),
            text_color,
        );

        let w = if max > 0.0 { track_w * (*v / max) as f32 } else { 0.0 };
        let bar = Rect::from_min_size(pos2(rect.left() + label_w, y + 3.0), vec2(w, ROW_H - 6.0));
        painter.rect_filled(bar, 2.0, BAR_COLOR);
        painter.text(
            pos2(bar.right() + 4.0, bar.center().y),
            Align2::LEFT_CENTER,
            format!("£{v:.2}"),
            font.clone(),
            text_color,
        );
    }
}

/// Vertical bars with category labels under the axis. Labels thin out
/// when slots get narrower than a label.
pub fn vbar(ui: &mut egui::Ui, bars: &[(String, f64)], fmt: impl Fn(f64) -> String) {
    if bars.is_empty() {
        return no_data(ui);
    }

    let visuals = ui.visuals().clone();
    let (rect, painter) = canvas(ui, CHART_H);
    let font = FontId::proportional(11.0);

    let plot = Rect::from_min_max(
        pos2(rect.left() + 4.0, rect.top() + 16.0),
        pos2(rect.right() - 4.0, rect.bottom() - 18.0),
    );
    let slot = plot.width() / bars.len() as f32;
    let gap = (slot * 0.1).min(6.0);
    let every = (36.0 / slot).ceil().max(1.0) as usize;
    let max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    for (i, (label, v)) in bars.iter().enumerate() {
        let x = plot.left() + slot * i as f32;
        let h = if max > 0.0 { plot.height() * (*v / max) as f32 } else { 0.0 };
        let bar = Rect::from_min_max(pos2(x + gap, plot.bottom() - h), pos2(x + slot - gap, plot.bottom()));
        painter.rect_filled(bar, 1.0, BAR_COLOR);

        if slot >= 28.0 {
            painter.text(bar.center_top() - vec2(0.0, 2.0), Align2::CENTER_BOTTOM, fmt(*v), font.clone(), visuals.text_color());
        }
        if i % every == 0 {
            painter.text(
                pos2(x + slot * 0.5, plot.bottom() + 3.0),
                Align2::CENTER_TOP,
                label,
                font.clone(),
                visuals.weak_text_color(),
            );
        }
    }

    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, visuals.weak_text_color()),
    );
}
