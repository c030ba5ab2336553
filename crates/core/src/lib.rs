//! Core of the folio portfolio site
//!
//! This crate holds everything that does not need a browser:
//!
//! - `content`: the static catalog and the card view models built from it
//! - `motion`: easing, timeline composition, reveal triggers, scroll scrubbing
//!   and the per-section [`motion::Sequencer`]
//! - `config`: site, theme and motion settings loaded from TOML
//! - `error` / `result`: the shared error type and logging combinators
//!
//! The UI crate adapts the DOM to [`motion::Stage`] and forwards browser
//! events; the rules about when and how things move live here.

#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod result;

pub use config::SiteConfig;
pub use error::Error;
pub use result::{Result, ResultExt};
