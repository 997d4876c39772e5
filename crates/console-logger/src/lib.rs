//! Console Logger
//!
//! A `tracing` layer for browser builds: every event is written to the
//! developer console (stderr on native targets) and the most recent lines
//! are kept in a bounded ring buffer the UI can display.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub use tracing_subscriber::filter::LevelFilter;

/// Lines kept by the buffer installed with [`init`]
pub const DEFAULT_CAPACITY: usize = 200;

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// One formatted event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular buffer of recent lines; clones share storage
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest when full.
    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer that mirrors events to the console and a [`LogBuffer`]
pub struct ConsoleLayer {
    buffer: LogBuffer,
}

impl ConsoleLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = LogLine {
            timestamp: Local::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };
        write_console(&line);
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(line: &LogLine) {
    let text = line.to_string().into();
    match line.level {
        Level::ERROR => web_sys::console::error_1(&text),
        Level::WARN => web_sys::console::warn_1(&text),
        Level::INFO => web_sys::console::info_1(&text),
        _ => web_sys::console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(line: &LogLine) {
    eprintln!("{line}");
}

/// Install the console layer as the global subscriber.
///
/// Later calls return the buffer created by the first one.
pub fn init(max_level: LevelFilter) -> LogBuffer {
    GLOBAL_BUFFER
        .get_or_init(|| {
            let buffer = LogBuffer::new(DEFAULT_CAPACITY);
            let _ = tracing_subscriber::registry()
                .with(ConsoleLayer::new(buffer.clone()))
                .with(max_level)
                .try_init();
            buffer
        })
        .clone()
}

/// The buffer installed by [`init`], if any
pub fn buffer() -> Option<LogBuffer> {
    GLOBAL_BUFFER.get().cloned()
}
