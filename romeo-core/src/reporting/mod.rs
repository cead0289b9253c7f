use console::style;
use serde::Serialize;
use serde_json::{Value, json};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result of a completed encode workflow.
#[derive(Clone, Debug, Serialize)]
pub struct EncodeOutcome {
    pub plaintext: String,
    pub encoded: String,
    pub location: String,
}

/// Result of a completed decode workflow.
#[derive(Clone, Debug, Serialize)]
pub struct DecodeOutcome {
    pub encoded: String,
    pub plaintext: String,
    pub location: String,
}

/// User-facing description of a failed operation.
#[derive(Clone, Debug, Serialize)]
pub struct ReporterError {
    pub title: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ReporterError {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Reporter interface implemented by both human-readable and JSON reporters.
pub trait Reporter: Send + Sync {
    fn encoded(&self, _outcome: &EncodeOutcome) {}
    fn decoded(&self, _outcome: &DecodeOutcome) {}
    fn nothing_to_decode(&self, _location: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _error: &ReporterError) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Human-friendly reporter that prints concise text output.
#[derive(Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TerminalReporter {
    fn encoded(&self, outcome: &EncodeOutcome) {
        println!(
            "The encoded message is saved in {}",
            style(&outcome.location).bold()
        );
    }

    fn decoded(&self, outcome: &DecodeOutcome) {
        println!(
            "Decoded message from {} is: {}",
            style(&outcome.location).bold(),
            style(&outcome.plaintext).green()
        );
    }

    fn nothing_to_decode(&self, location: &str) {
        println!("{} not found.", location);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", style("Warning:").yellow().bold(), message);
    }

    fn error(&self, error: &ReporterError) {
        eprintln!("{} {}", style(format!("{}:", error.title)).red().bold(), error.message);
        if let Some(suggestion) = &error.suggestion {
            eprintln!("  {}", style(suggestion).dim());
        }
    }
}

/// Line-delimited JSON reporter for scripting.
pub struct JsonReporter {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    fn write_event<T: Serialize>(&self, kind: &str, payload: &T) {
        let mut value = serde_json::to_value(payload).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert("type".to_string(), json!(kind));
            map.insert("timestamp".to_string(), json!(Self::timestamp()));
        }
        self.write_value(value);
    }

    fn write_value(&self, value: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
            let _ = writer.flush();
        }
    }
}

impl Reporter for JsonReporter {
    fn encoded(&self, outcome: &EncodeOutcome) {
        self.write_event("encoded", outcome);
    }

    fn decoded(&self, outcome: &DecodeOutcome) {
        self.write_event("decoded", outcome);
    }

    fn nothing_to_decode(&self, location: &str) {
        let value = json!({
            "type": "not_found",
            "location": location,
            "timestamp": Self::timestamp(),
        });
        self.write_value(value);
    }

    fn warning(&self, message: &str) {
        let value = json!({
            "type": "warning",
            "message": message,
            "timestamp": Self::timestamp(),
        });
        self.write_value(value);
    }

    fn error(&self, error: &ReporterError) {
        self.write_event("error", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn lines(&self) -> Vec<Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    #[test]
    fn json_reporter_emits_one_object_per_event() {
        let buffer = SharedBuffer::default();
        let reporter = JsonReporter::with_writer(Box::new(buffer.clone()));

        reporter.encoded(&EncodeOutcome {
            plaintext: "Hi!".to_string(),
            encoded: "43,30,104".to_string(),
            location: "encrypted_msg.txt".to_string(),
        });
        reporter.nothing_to_decode("missing.txt");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "encoded");
        assert_eq!(lines[0]["encoded"], "43,30,104");
        assert_eq!(lines[0]["plaintext"], "Hi!");
        assert!(lines[0]["timestamp"].is_u64());
        assert_eq!(lines[1]["type"], "not_found");
        assert_eq!(lines[1]["location"], "missing.txt");
    }

    #[test]
    fn json_reporter_serializes_errors() {
        let buffer = SharedBuffer::default();
        let reporter = JsonReporter::with_writer(Box::new(buffer.clone()));

        reporter.error(
            &ReporterError::new("Encode failed", "Unsupported character '@' at position 2")
                .with_suggestion("Remove the character and try again"),
        );

        let lines = buffer.lines();
        assert_eq!(lines[0]["type"], "error");
        assert_eq!(lines[0]["title"], "Encode failed");
        assert_eq!(lines[0]["suggestion"], "Remove the character and try again");
    }

    #[test]
    fn null_reporter_accepts_everything() {
        let reporter = NullReporter;
        reporter.warning("ignored");
        reporter.nothing_to_decode("ignored");
    }
}
