//! Output Rendering
//!
//! Human-readable status lines for pack and deploy events, and plan
//! rendering for `webship plan`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::services::DeployPlan;

use super::terminal::UiContext;

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
struct Icons {
    check: &'static str,
    cross: &'static str,
    host: &'static str,
    arrow: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            host: "●",
            arrow: "↳",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            host: "*",
            arrow: "->",
            skip: "[SKIP]",
        }
    }

    fn for_ui(ui: &UiContext) -> Self {
        if ui.unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Event sink printing status lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    icons: Icons,
    color: bool,
    verbose: u8,
    dry_run: AtomicBool,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: &UiContext, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            icons: Icons::for_ui(ui),
            color: ui.color,
            verbose: ui.verbose,
            dry_run: AtomicBool::new(false),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn ok(&self, text: &str) -> String {
        format!("{} {}", paint(self.icons.check, Color::Green, self.color), text)
    }

    fn fail(&self, text: &str) -> String {
        format!("{} {}", paint(self.icons.cross, Color::Red, self.color), text)
    }

    fn detail(&self, text: &str) -> String {
        paint(text, Color::DarkGrey, self.color)
    }

    /// Text for one event, or `None` when the event is silent at this verbosity
    fn render(&self, event: &DeployEvent) -> Option<String> {
        let icons = self.icons;
        match event {
            DeployEvent::PackStarted { source, archive } => Some(format!(
                "Packing {} {} {}",
                source.display(),
                icons.arrow,
                archive.display()
            )),
            DeployEvent::Packed {
                archive,
                size,
                digest,
            } => {
                let mut text = self.ok(&format!("Packed {} ({} bytes)", archive.display(), size));
                if self.verbose > 0 {
                    text.push_str(&format!("\n  {}", self.detail(digest)));
                }
                Some(text)
            }
            DeployEvent::PackFailed { error } => Some(format!(
                "{}\n  {}",
                self.fail("Packing failed."),
                self.detail(error)
            )),
            DeployEvent::Started {
                archive,
                host_count,
                dry_run,
            } => {
                self.dry_run.store(*dry_run, Ordering::Relaxed);
                let suffix = if *dry_run { " (dry run)" } else { "" };
                Some(format!(
                    "Deploying {} to {} host(s){}",
                    archive.display(),
                    host_count,
                    suffix
                ))
            }
            DeployEvent::Aborted { error } => Some(self.fail(error)),
            DeployEvent::HostStarted { host } => Some(format!(
                "{} {}",
                paint(icons.host, Color::Cyan, self.color),
                host
            )),
            DeployEvent::StepStarted { step, command, .. } => {
                if self.dry_run.load(Ordering::Relaxed) || self.verbose > 0 {
                    Some(format!(
                        "  {} {} {}",
                        icons.arrow,
                        step.description(),
                        self.detail(command)
                    ))
                } else {
                    None
                }
            }
            DeployEvent::StepSucceeded { step, .. } => {
                if self.verbose > 1 {
                    Some(format!("  {}", self.ok(step.as_str())))
                } else {
                    None
                }
            }
            DeployEvent::StepFailed { step, error, .. } => Some(format!(
                "  {}\n    {}",
                self.fail(step.failure_message()),
                self.detail(error)
            )),
            DeployEvent::HostDeployed { .. } => {
                Some(format!("  {}", self.ok("New version deployed!")))
            }
            DeployEvent::HostSkipped { host, reason } => Some(format!(
                "{} {} skipped: {}",
                paint(icons.skip, Color::Yellow, self.color),
                host,
                reason
            )),
            DeployEvent::Completed {
                deployed,
                failed,
                skipped,
            } => {
                let total = deployed + failed + skipped;
                let summary = if self.dry_run.load(Ordering::Relaxed) {
                    format!("Planned {} host(s); nothing was changed", total)
                } else {
                    format!("Deployed to {} of {} host(s)", deployed, total)
                };
                if *failed == 0 && *skipped == 0 {
                    Some(self.ok(&summary))
                } else {
                    Some(self.fail(&format!(
                        "{} ({} failed, {} skipped)",
                        summary, failed, skipped
                    )))
                }
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(&event) {
            self.line(text);
        }
    }
}

/// Render a plan as one `step: action` line per step
pub fn render_plan(plan: &DeployPlan, ui: &UiContext) -> String {
    let mut out = String::new();
    for step in plan.steps() {
        out.push_str(&format!(
            "{:<22} {}\n",
            paint(step.kind.as_str(), Color::Cyan, ui.color),
            step.action
        ));
    }
    out
}

/// Render a plan as a JSON document
pub fn render_plan_json(plan: &DeployPlan) -> serde_json::Value {
    serde_json::json!({
        "archive": plan.archive().file(),
        "release": plan.archive().release(),
        "steps": plan
            .steps()
            .iter()
            .map(|step| serde_json::json!({
                "step": step.kind.as_str(),
                "action": step.action.to_string(),
            }))
            .collect::<Vec<_>>(),
    })
}
