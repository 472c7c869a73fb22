use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::trace::trace::TraceEvent;

/// Append-only JSONL sink for engine trace events.
///
/// Failures to open or write the file are reported on stderr; the engine
/// keeps running with tracing switched off.
#[derive(Debug)]
pub struct TraceLogger {
    file: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                file: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(file) = &self.file else { return };

        if let Err(e) = write_event(file, event) {
            eprintln!("Warning: failed to write trace event {}: {}", event.step, e);
        }
    }
}

fn write_event(file: &Mutex<File>, event: &TraceEvent) -> Result<(), Box<dyn std::error::Error>> {
    let line = serde_json::to_string(event)?;
    let mut file = file.lock().map_err(|_| "trace file lock poisoned")?;
    writeln!(file, "{}", line)?;
    Ok(())
}
