//! Dealer Home Dashboard
//!
//! Home screen of the sales/dealer app built with Leptos (WASM).
//!
//! # Features
//!
//! - Greeting header with an AI ask box and voice button
//! - Active pipeline, project, and order summary
//! - Action list and quick-access shortcuts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The metrics and the navigation contract live in the
//! `dealer-home` library; this crate only renders them.

use leptos::*;

mod api;
mod app;
mod components;
mod navigation;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
