//! Structured output envelope for all CLI commands.
//!
//! Provides a consistent JSON output format for machine consumption (CI and
//! script usage).
//!
//! ## Output Contract
//!
//! Every command produces a result envelope on stdout:
//!
//! ```json
//! {
//!   "ok": true,
//!   "command": "verify",
//!   "data": { ... },
//!   "timings": { "durationMs": 1234 },
//!   "artifacts": []
//! }
//! ```
//!
//! On failure:
//!
//! ```json
//! {
//!   "ok": false,
//!   "command": "verify",
//!   "error": {
//!     "code": "ELEMENT_NOT_FOUND",
//!     "message": "No element matched role=button name=\"Subscription\"",
//!     "details": { ... }
//!   }
//! }
//! ```

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output (default)
    #[default]
    Json,
    /// Newline-delimited JSON (streaming)
    Ndjson,
    /// Human-readable text
    Text,
}

/// The main result envelope returned by all commands.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
    /// Whether the command succeeded
    pub ok: bool,

    /// Command name (e.g., "navigate", "click", "verify")
    pub command: String,

    /// Inputs used for this command (for traceability)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<CommandInputs>,

    /// Command-specific result data (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error information (only present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,

    /// Timing information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<Timings>,

    /// Artifacts produced (screenshot files)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
}

/// Inputs that were used for the command (for traceability)
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

/// Error information for failed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Error code (e.g., "NAVIGATION_FAILED", "ELEMENT_NOT_FOUND")
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (locator, path, context)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Browser failed to launch
    BrowserLaunchFailed,
    /// Navigation to URL failed
    NavigationFailed,
    /// Locator did not match any element
    ElementNotFound,
    /// Multiple elements matched when one was expected
    ElementAmbiguous,
    /// Element matched but cannot receive the interaction
    NotActionable,
    /// Operation timed out
    Timeout,
    /// Screenshot capture failed
    ScreenshotFailed,
    /// File I/O error
    IoError,
    /// Invalid input provided
    InvalidInput,
    /// Unknown/internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::BrowserLaunchFailed => write!(f, "BROWSER_LAUNCH_FAILED"),
            ErrorCode::NavigationFailed => write!(f, "NAVIGATION_FAILED"),
            ErrorCode::ElementNotFound => write!(f, "ELEMENT_NOT_FOUND"),
            ErrorCode::ElementAmbiguous => write!(f, "ELEMENT_AMBIGUOUS"),
            ErrorCode::NotActionable => write!(f, "NOT_ACTIONABLE"),
            ErrorCode::Timeout => write!(f, "TIMEOUT"),
            ErrorCode::ScreenshotFailed => write!(f, "SCREENSHOT_FAILED"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Timing information for the command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    /// Total duration in milliseconds
    pub duration_ms: u64,
}

impl From<Duration> for Timings {
    fn from(duration: Duration) -> Self {
        Timings {
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Artifact produced by a command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Type of artifact
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,

    /// Path to the artifact
    pub path: PathBuf,

    /// Size in bytes (if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// Types of artifacts that can be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Screenshot,
}

/// Result data for the navigate command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateData {
    /// URL after navigation (may differ from the request after redirects)
    pub url: String,
    /// Page title
    pub title: String,
}

/// Result data for the click command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickData {
    /// Locator that resolved to the clicked element
    pub locator: String,
    /// Page URL before the click
    pub before_url: String,
    /// Page URL after the click and settle wait
    pub after_url: String,
    /// Whether the click changed the page URL
    pub navigated: bool,
}

/// Result data for the screenshot command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotData {
    /// Path the screenshot was written to
    pub path: PathBuf,
    /// Whether the full scrollable page was captured
    pub full_page: bool,
    /// Bytes written
    pub size_bytes: u64,
}

/// Result data for the verify command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyData {
    /// Page URL at capture time
    pub url: String,
    /// Locator that was clicked
    pub locator: String,
    /// Whether the click changed the page URL
    pub navigated: bool,
    /// Path the screenshot was written to
    pub screenshot: PathBuf,
    /// Bytes written
    pub size_bytes: u64,
}

/// Builder for constructing command results
pub struct ResultBuilder<T: Serialize> {
    command: String,
    inputs: Option<CommandInputs>,
    data: Option<T>,
    error: Option<CommandError>,
    start_time: Instant,
    artifacts: Vec<Artifact>,
}

impl<T: Serialize> ResultBuilder<T> {
    /// Create a new result builder for the given command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            inputs: None,
            data: None,
            error: None,
            start_time: Instant::now(),
            artifacts: Vec::new(),
        }
    }

    /// Set the inputs used for this command
    pub fn inputs(mut self, inputs: CommandInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Set the successful result data
    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Set an error
    pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.error = Some(CommandError {
            code,
            message: message.into(),
            details: None,
        });
        self
    }

    /// Add an artifact
    pub fn artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Build the final result
    pub fn build(self) -> CommandResult<T> {
        let ok = self.error.is_none() && self.data.is_some();

        CommandResult {
            ok,
            command: self.command,
            inputs: self.inputs,
            data: self.data,
            error: self.error,
            timings: Some(Timings::from(self.start_time.elapsed())),
            artifacts: self.artifacts,
        }
    }
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{json}");
            }
        }
        OutputFormat::Ndjson => {
            if let Ok(json) = serde_json::to_string(result) {
                println!("{json}");
            }
        }
        OutputFormat::Text => {
            print_result_text(result);
        }
    }
}

/// Print a command result in human-readable text format
fn print_result_text<T: Serialize>(result: &CommandResult<T>) {
    let mut stdout = io::stdout().lock();

    if result.ok {
        if let Some(ref data) = result.data {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                let _ = writeln!(stdout, "{json}");
            }
        }
    } else if let Some(ref error) = result.error {
        let _ = writeln!(stdout, "Error [{}]: {}", error.code, error.message);
        if let Some(ref details) = error.details {
            if let Ok(json) = serde_json::to_string_pretty(details) {
                let _ = writeln!(stdout, "Details: {json}");
            }
        }
    }

    for artifact in &result.artifacts {
        let _ = writeln!(
            stdout,
            "Saved {:?}: {}",
            artifact.artifact_type,
            artifact.path.display()
        );
    }
}

/// Print an error to stderr in human-readable form
pub fn print_error_stderr(error: &CommandError) {
    eprintln!("{} [{}] {}", "error".red().bold(), error.code, error.message);
}
