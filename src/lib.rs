pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod http;
pub mod logging;
pub mod render;
pub mod state;
pub mod terminal;
pub mod ui;
