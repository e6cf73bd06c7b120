//! Paints a sort snapshot as value bars over a vertical gradient.

use egui::{pos2, Align2, Color32, CornerRadius, FontId, Rect, Stroke, StrokeKind};
use shared::{domain::MAX_NUMBER, protocol::SortSnapshot};

use super::theme::Palette;

pub const BAR_WIDTH: f32 = 40.0;
pub const BAR_GAP: f32 = 5.0;
pub const MARGIN: f32 = 10.0;
/// Head room above the tallest bar for its value label.
pub const HEADROOM: f32 = 100.0;
const MIN_BAR_WIDTH: f32 = 2.0;

/// Bar rectangles for `values` inside `area`, left to right. Bars narrow
/// below [`BAR_WIDTH`] only when they would not fit otherwise.
pub fn bar_rects(area: Rect, values: &[u32]) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }

    let max_height = (area.height() - HEADROOM).max(0.0);
    let scale = max_height / MAX_NUMBER as f32;
    let fit = (area.width() - 2.0 * MARGIN) / values.len() as f32 - BAR_GAP;
    let width = BAR_WIDTH.min(fit).max(MIN_BAR_WIDTH);
    let bottom = area.bottom() - MARGIN;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = area.left() + MARGIN + i as f32 * (width + BAR_GAP);
            let height = *value as f32 * scale;
            Rect::from_min_max(pos2(x, bottom - height), pos2(x + width, bottom))
        })
        .collect()
}

pub fn paint(painter: &egui::Painter, area: Rect, snapshot: &SortSnapshot, palette: &Palette) {
    paint_gradient(painter, area, palette.canvas_top, palette.canvas_bottom);

    let rects = bar_rects(area, &snapshot.values);
    for (i, (rect, value)) in rects.iter().zip(&snapshot.values).enumerate() {
        let fill = palette.bar_fill(snapshot.role_at(i));
        painter.rect_filled(*rect, CornerRadius::ZERO, fill);
        painter.rect_stroke(
            *rect,
            CornerRadius::ZERO,
            Stroke::new(1.0, palette.bar_outline),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center_top() - egui::vec2(0.0, 5.0),
            Align2::CENTER_BOTTOM,
            value.to_string(),
            FontId::proportional(13.0),
            palette.value_text,
        );
    }
}

fn paint_gradient(painter: &egui::Painter, area: Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(area.left_top(), top);
    mesh.colored_vertex(area.right_top(), top);
    mesh.colored_vertex(area.left_bottom(), bottom);
    mesh.colored_vertex(area.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}
