//! Core, DOM-free primitives and helpers for the web shell.
pub mod auth;
pub mod config;
pub mod cookie;
pub mod events;
pub mod routing;
pub mod store;
pub mod switcher;
pub mod video;
