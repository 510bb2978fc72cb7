pub mod app;
pub mod convert;
pub mod svg;
pub mod ui;
