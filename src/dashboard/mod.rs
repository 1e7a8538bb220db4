//! # Dashboard Module
//!
//! Six-panel summary figure:
//! - `layout` - backend-independent panel descriptions
//! - `render` - drawing with plotters

mod layout;
mod render;

pub use layout::{
    label_color, ChartColor, DashboardLayout, LabelSlice, Panel, PanelKind, DASHBOARD_TITLE,
    GOLD, GREEN, GRID_COLUMNS, GRID_ROWS, PLUM, RED, SKY_BLUE,
};
pub use render::{
    draw_dashboard, DashboardRenderer, RenderError, SvgRenderer, SvgStringRenderer, DEFAULT_SIZE,
};
