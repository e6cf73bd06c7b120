//! UI layer for the visualizer: app shell, bar painting, and colors.

pub mod app;
pub mod bars;
pub mod theme;

pub use app::{StartupConfig, VisualizerApp};
