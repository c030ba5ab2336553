//! Leptos 0.7 CSR front end for the animated portfolio
//!
//! ## Architecture
//! - Pure CSR with Leptos 0.7, compiled to `wasm32-unknown-unknown` by Trunk
//! - Sections reveal once as they scroll into view; the timeline progress
//!   line is scrubbed by scroll position
//! - All timing and state lives in `folio-core`; this crate binds it to the
//!   DOM through `IntersectionObserver`, scroll listeners and animation frames
//!
//! ## Module Structure
//! - `app`: root component
//! - `router`: route table
//! - `pages`: route-level pages
//! - `components`: page sections and cards
//! - `motion`: per-section glue between components and the sequencer
//! - `dom`: browser bindings
//! - `config`: embedded `site.toml`
//! - `logging`: `tracing` to the browser console
//! - `error`: DOM error type

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod motion;
pub mod pages;
pub mod router;

pub use app::App;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_modules() {
        let _home = pages::Home;
        let _not_found = pages::NotFound;
    }

    #[test]
    fn test_error_display() {
        let err = error::DomError::MissingElement("timeline");
        assert!(err.to_string().contains("timeline"));
    }
}
