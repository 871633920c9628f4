pub mod app;
pub mod components;
pub mod detail;
pub mod icons;
pub mod media;
pub mod scroll;
pub mod state;
pub mod transition;
