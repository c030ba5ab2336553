//! `tracing` output routed to the browser console
//!
//! Each formatted event is buffered and handed to the `console` method that
//! matches its level, so devtools filtering keeps working.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

pub const DEFAULT_LEVEL: &str = "info";

/// Console method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl ConsoleMethod {
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            Level::DEBUG => Self::Debug,
            Level::TRACE => Self::Log,
        }
    }

    fn emit(self, message: &str) {
        let message = JsValue::from_str(message);
        match self {
            Self::Error => web_sys::console::error_1(&message),
            Self::Warn => web_sys::console::warn_1(&message),
            Self::Info => web_sys::console::info_1(&message),
            Self::Debug => web_sys::console::debug_1(&message),
            Self::Log => web_sys::console::log_1(&message),
        }
    }
}

/// Buffers one formatted event and emits it when dropped
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let text = text.trim_end();
        if !text.is_empty() {
            self.method.emit(text);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Installs the global subscriber; later calls are ignored
///
/// `directives` uses `EnvFilter` syntax, e.g. `"info"` or
/// `"info,folio_core::motion=debug"`. Unparseable directives fall back to
/// [`DEFAULT_LEVEL`].
pub fn init(directives: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LEVEL), Some(err)),
    };

    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(MakeConsoleWriter);

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
        return;
    }

    if let Some(err) = rejected {
        tracing::warn!(directives, error = %err, "bad log level, using default");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        // dropping without writing must not touch the console
        let writer = ConsoleWriter::new(ConsoleMethod::Info);
        drop(writer);
    }
}
