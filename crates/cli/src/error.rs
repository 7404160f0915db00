use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, PcError>;

#[derive(Debug, Error)]
pub enum PcError {
	#[error("invalid target URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Core(#[from] pagecheck::Error),
}

impl PcError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			PcError::InvalidUrl { url, reason } => (
				ErrorCode::InvalidInput,
				format!("Invalid target URL '{url}': {reason}"),
				Some(serde_json::json!({ "url": url })),
			),
			PcError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			PcError::Json(err) => (ErrorCode::InternalError, format!("JSON error: {err}"), None),
			PcError::Core(err) => return classify_core_error(err),
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}

/// Map a core error onto the envelope's code space.
///
/// Timeouts are surfaced as TIMEOUT regardless of which operation timed
/// out, so a slow dev server and a slow element resolve the same way for
/// callers scripting against the envelope.
fn classify_core_error(err: &pagecheck::Error) -> CommandError {
	use pagecheck::Error;

	let (code, message, details) = match err {
		Error::Launch(msg) => (
			ErrorCode::BrowserLaunchFailed,
			format!("Browser launch failed: {msg}"),
			None,
		),
		Error::Navigation { url, source } => (
			if err.is_timeout() {
				ErrorCode::Timeout
			} else {
				ErrorCode::NavigationFailed
			},
			format!("Navigation to {url} failed: {source}"),
			Some(serde_json::json!({ "url": url })),
		),
		Error::ElementNotFound { locator } => (
			ErrorCode::ElementNotFound,
			format!("No element matched {locator}"),
			Some(serde_json::json!({ "locator": locator })),
		),
		Error::AmbiguousLocator { locator, count } => (
			ErrorCode::ElementAmbiguous,
			format!("{locator} matched {count} elements, refusing to pick one"),
			Some(serde_json::json!({ "locator": locator, "count": count })),
		),
		Error::NotActionable { locator, reason } => (
			ErrorCode::NotActionable,
			format!("{locator} is not actionable: {reason}"),
			Some(serde_json::json!({ "locator": locator })),
		),
		Error::Interaction { locator, source } => (
			if err.is_timeout() {
				ErrorCode::Timeout
			} else {
				ErrorCode::InternalError
			},
			format!("Click on {locator} failed: {source}"),
			Some(serde_json::json!({ "locator": locator })),
		),
		Error::Evaluation(msg) => (
			ErrorCode::InternalError,
			format!("JavaScript evaluation failed: {msg}"),
			None,
		),
		Error::Screenshot { path, source } => (
			ErrorCode::ScreenshotFailed,
			format!("Screenshot failed at {}: {source}", path.display()),
			Some(serde_json::json!({ "path": path })),
		),
		Error::Cdp(source) => (
			if err.is_timeout() {
				ErrorCode::Timeout
			} else {
				ErrorCode::InternalError
			},
			source.to_string(),
			None,
		),
		Error::Io(source) => (ErrorCode::IoError, source.to_string(), None),
	};

	CommandError {
		code,
		message,
		details,
	}
}
