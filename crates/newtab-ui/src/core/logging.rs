//! `tracing` output routed to a line sink such as the browser console.
//!
//! # Design
//! - Reuse `tracing_subscriber::fmt` formatting; only the writer is custom.
//! - One writer per event; the buffered line is emitted when it drops.
//! - The sink receives the event level so warnings stay warnings downstream.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Receives one formatted log line at a time.
pub type LineSink = fn(Level, &str);

/// `MakeWriter` that hands each formatted event to a [`LineSink`].
#[derive(Clone, Copy, Debug)]
pub struct ConsoleMakeWriter {
    sink: LineSink,
}

impl ConsoleMakeWriter {
    /// Writer forwarding to `sink`.
    #[must_use]
    pub const fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.sink, Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(self.sink, *meta.level())
    }
}

/// Buffers one event's output and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    sink: LineSink,
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(sink: LineSink, level: Level) -> Self {
        Self {
            sink,
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
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
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleMakeWriter;
    use std::cell::RefCell;
    use std::io::Write;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured() -> Vec<(Level, String)> {
        LINES.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    #[test]
    fn writer_emits_one_trimmed_line_per_event() {
        let make = ConsoleMakeWriter::new(capture);
        {
            let mut writer = make.make_writer();
            writer.write_all(b"stored shortcuts ").expect("write");
            writer.write_all(b"are not an array\n").expect("write");
        }
        {
            let _empty = make.make_writer();
        }
        assert_eq!(
            captured(),
            vec![(Level::INFO, "stored shortcuts are not an array".to_string())]
        );
    }

    #[test]
    fn subscriber_forwards_warnings_with_their_level() {
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_writer(ConsoleMakeWriter::new(capture))
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(index = 2, "skipping malformed stored shortcut");
        });
        let lines = captured();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.contains("skipping malformed stored shortcut"));
        assert!(lines[0].1.contains("index=2"));
    }
}
