//! HTTP route handlers

pub mod items;
pub mod stats;
pub mod study;
