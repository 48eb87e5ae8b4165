//! Test utilities for legosigno - log capture and store fixtures
//!
//! Library code only talks to `tracing`; whoever runs it decides where the
//! events go. Tests install a [`CapturedLogs`] subscriber for the duration
//! of a closure and assert on what was written.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::folder::{Entry, Store};

/// In-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with every event up to TRACE routed into this sink.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Writer handed out to the subscriber for each event
pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Build a store from bookmark paths (counter 1) and `(path, score)` visits.
pub fn store_with(bookmarks: &[&str], visits: &[(&str, i64)]) -> Store {
    Store {
        bookmarks: bookmarks.iter().map(|p| Entry::new(*p, 1)).collect(),
        visits: visits.iter().map(|(p, s)| Entry::new(*p, *s)).collect(),
    }
}
