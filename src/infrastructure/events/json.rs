//! JSON Event Sink
//!
//! Outputs pack and deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }

    fn to_json(&self, event: DeployEvent) -> serde_json::Value {
        let command = self.command;
        match event {
            DeployEvent::PackStarted { source, archive } => serde_json::json!({
                "event": "pack_start",
                "command": command,
                "source": source.display().to_string(),
                "archive": archive.display().to_string(),
            }),

            DeployEvent::Packed {
                archive,
                size,
                digest,
            } => serde_json::json!({
                "event": "packed",
                "command": command,
                "archive": archive.display().to_string(),
                "size": size,
                "digest": digest,
            }),

            DeployEvent::PackFailed { error } => serde_json::json!({
                "event": "pack_failed",
                "command": command,
                "error": error,
            }),

            DeployEvent::Started {
                archive,
                host_count,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "archive": archive.display().to_string(),
                "hosts": host_count,
                "dry_run": dry_run,
            }),

            DeployEvent::Aborted { error } => serde_json::json!({
                "event": "aborted",
                "command": command,
                "error": error,
            }),

            DeployEvent::HostStarted { host } => serde_json::json!({
                "event": "host_start",
                "command": command,
                "host": host,
            }),

            DeployEvent::StepStarted {
                host,
                step,
                command: action,
            } => serde_json::json!({
                "event": "step_start",
                "command": command,
                "host": host,
                "step": step.as_str(),
                "action": action,
            }),

            DeployEvent::StepSucceeded { host, step } => serde_json::json!({
                "event": "step_ok",
                "command": command,
                "host": host,
                "step": step.as_str(),
            }),

            DeployEvent::StepFailed { host, step, error } => serde_json::json!({
                "event": "step_failed",
                "command": command,
                "host": host,
                "step": step.as_str(),
                "message": step.failure_message(),
                "error": error,
            }),

            DeployEvent::HostDeployed { host } => serde_json::json!({
                "event": "host_deployed",
                "command": command,
                "host": host,
            }),

            DeployEvent::HostSkipped { host, reason } => serde_json::json!({
                "event": "host_skipped",
                "command": command,
                "host": host,
                "reason": reason,
            }),

            DeployEvent::Completed {
                deployed,
                failed,
                skipped,
            } => {
                let status = if failed == 0 && skipped == 0 {
                    "success"
                } else if deployed > 0 {
                    "partial"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "deployed": deployed,
                    "failed": failed,
                    "skipped": skipped,
                })
            }
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = self.to_json(event);
        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::StepKind;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("deploy", writer);

        sink.on_event(DeployEvent::Started {
            archive: PathBuf::from("versions/web_static_1.tgz"),
            host_count: 2,
            dry_run: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["command"], "deploy");
        assert_eq!(events[0]["hosts"], 2);
    }

    #[test]
    fn step_failure_carries_status_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("ship", writer);

        sink.on_event(DeployEvent::StepFailed {
            host: "web-01".to_string(),
            step: StepKind::Extract,
            error: "exit 2".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["step"], "extract");
        assert_eq!(events[0]["message"], "Failed to extract archive.");
        assert_eq!(events[0]["command"], "ship");
    }

    #[test]
    fn complete_status_reflects_host_outcomes() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("deploy", writer);

        for (deployed, failed, skipped) in [(2, 0, 0), (1, 1, 0), (0, 1, 1)] {
            sink.on_event(DeployEvent::Completed {
                deployed,
                failed,
                skipped,
            });
        }

        let statuses: Vec<_> = lines(&buffer)
            .iter()
            .map(|e| e["status"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(statuses, vec!["success", "partial", "failed"]);
    }
}
