//! Client library for a public job-listing API: typed fetch client,
//! pagination controller, persisted session, and plain-text renderers.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod list;
pub mod models;
pub mod render;
pub mod session;
