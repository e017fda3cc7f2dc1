//! In-memory log capture.
//!
//! [`CapturedLogs`] is a `MakeWriter` backed by a shared buffer, so tests can
//! install the production line format with `tracing::subscriber::set_default`
//! and then inspect exactly what would have reached the log file.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use crate::logging;

#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriber writing into this buffer at `level`.
    pub fn subscriber(&self, level: &str) -> impl Subscriber + Send + Sync + 'static {
        logging::subscriber_with_writer(level, self.clone())
    }

    /// Captured lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Number of captured lines at `level` (e.g. `"ERROR"`).
    pub fn count(&self, level: &str) -> usize {
        let marker = format!(" - {level} - ");
        self.lines()
            .iter()
            .filter(|line| line.contains(&marker))
            .count()
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

/// Writer handed out per event by [`CapturedLogs`].
pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
