//! API Access
//!
//! Loading of the data the home view renders.

pub mod client;

pub use client::{fetch_dashboard, storage_get};
