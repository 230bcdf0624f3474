//! Contrast library — application logic for the comparison demos.

pub mod app;
pub mod config;
pub mod errors;
