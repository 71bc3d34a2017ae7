//! UIコンポーネント

pub mod control_bar;
pub mod decision_legend;
pub mod error_banner;
pub mod loading_overlay;
pub mod results_panel;
