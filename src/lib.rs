mod common;
mod features;

pub mod app;
pub mod clock;
pub mod commands;
pub mod config;
pub mod data_model;
pub mod logging;
pub mod runtime;
pub mod settings;
pub mod storage;
pub mod svg;
pub mod text;
pub mod time_source;
pub mod ui;
