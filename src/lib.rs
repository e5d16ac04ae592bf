//! Fench's Navigator Library
//!
//! Core library for the Fench's Navigator landing page.

pub mod app;
pub mod export;
pub mod i18n;
pub mod state;
pub mod types;
pub mod ui;
pub mod view;
