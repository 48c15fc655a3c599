// Presentation layer - HTTP handlers, page layout and chart figures
pub mod app_state;
pub mod figures;
pub mod handlers;
pub mod page;
pub mod view;
