//! Colors for the control strip, the canvas gradient and the bars.

use egui::Color32;
use shared::domain::BarRole;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub panel_background: Color32,
    pub canvas_top: Color32,
    pub canvas_bottom: Color32,
    pub bar_outline: Color32,
    pub value_text: Color32,
    pub current: Color32,
    pub key: Color32,
    pub comparing: Color32,
    pub sorted: Color32,
    pub unsorted: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            panel_background: Color32::from_rgb(200, 220, 240),
            canvas_top: Color32::from_rgb(100, 150, 255),
            canvas_bottom: Color32::from_rgb(0, 20, 100),
            bar_outline: Color32::BLACK,
            value_text: Color32::WHITE,
            current: Color32::RED,
            key: Color32::GREEN,
            comparing: Color32::YELLOW,
            sorted: Color32::WHITE,
            unsorted: Color32::LIGHT_GRAY,
        }
    }
}

impl Palette {
    pub fn bar_fill(&self, role: BarRole) -> Color32 {
        match role {
            BarRole::Current => self.current,
            BarRole::Key => self.key,
            BarRole::Comparing => self.comparing,
            BarRole::Sorted => self.sorted,
            BarRole::Unsorted => self.unsorted,
        }
    }
}
