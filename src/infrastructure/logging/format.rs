use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Timestamp layout, e.g. `2024-05-01 14:03:12,481`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter writing `[<timestamp>: <LEVEL>: <message>]`
///
/// Fields recorded alongside the message follow it as `key=value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "[{}: {}: ",
            Local::now().format(TIMESTAMP_FORMAT),
            level_name(*event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Upper-case level label used in log lines
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(BracketFormat)
            .with_max_level(Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_line_layout() {
        let output = capture(|| tracing::info!("yaml file is loaded successfully config.yaml"));
        let line = output.trim_end();

        assert!(line.starts_with('['), "line: {line}");
        assert!(
            line.ends_with(": INFO: yaml file is loaded successfully config.yaml]"),
            "line: {line}"
        );

        let timestamp = &line[1..line.find(": INFO").unwrap()];
        assert_eq!(timestamp.len(), "2024-05-01 14:03:12,481".len());
        assert_eq!(&timestamp[19..20], ",");
    }

    #[test]
    fn test_fields_follow_message() {
        let output = capture(|| tracing::warn!(path = "params.yaml", "falling back"));

        assert!(output.contains(": WARNING: falling back path=\"params.yaml\"]"), "{output}");
    }

    #[test]
    fn test_level_names() {
        assert_eq!(level_name(Level::TRACE), "TRACE");
        assert_eq!(level_name(Level::DEBUG), "DEBUG");
        assert_eq!(level_name(Level::INFO), "INFO");
        assert_eq!(level_name(Level::WARN), "WARNING");
        assert_eq!(level_name(Level::ERROR), "ERROR");
    }
}
