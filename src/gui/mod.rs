pub mod calculator_panel;
pub mod hover;
pub mod spectrum_view;
pub mod theme;
pub mod toolbar;
