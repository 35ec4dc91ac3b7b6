pub mod app;
pub mod controls_panel;
pub mod event_table;
pub mod legend;
pub mod touch_area;
