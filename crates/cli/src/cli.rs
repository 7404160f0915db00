use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pagecheck::Role;

use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Default address of the application under verification.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default artifact path for the verify flow.
pub const DEFAULT_VERIFY_OUTPUT: &str = "jules-scratch/verification/subscription_page.png";

#[derive(Parser, Debug)]
#[command(name = "pagecheck")]
#[command(about = "Verify a locally served web app with a headless browser")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: json (default), ndjson, or text
    #[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
    pub format: CliOutputFormat,

    /// Base URL of the application under verification
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Run with a visible browser window instead of headless
    #[arg(long, global = true)]
    pub headful: bool,

    /// Per-operation driver timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI output format (clap-compatible enum)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output (default, best for scripts)
    #[default]
    Json,
    /// Newline-delimited JSON (streaming)
    Ndjson,
    /// Human-readable text
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Ndjson => OutputFormat::Ndjson,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

/// Accessible role for element lookup (clap-compatible enum)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    #[default]
    Button,
    Link,
    Checkbox,
    Textbox,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Button => Role::Button,
            RoleArg::Link => Role::Link,
            RoleArg::Checkbox => Role::Checkbox,
            RoleArg::Textbox => Role::Textbox,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate to a URL and report the final location and title
    #[command(alias = "nav")]
    Navigate {
        /// Target URL (absolute, or a path joined onto --base-url)
        url: Option<String>,
    },

    /// Click the single element with the given accessible role and name
    Click {
        /// Accessible name of the element (e.g. a button label)
        name: String,
        /// Target URL (defaults to --base-url)
        url: Option<String>,
        /// Accessible role to match
        #[arg(long, value_enum, default_value = "button")]
        role: RoleArg,
        /// Match the name case-sensitively
        #[arg(long)]
        exact: bool,
        /// Time to let the page settle after the click (ms)
        #[arg(long, value_name = "MS", default_value_t = 500)]
        settle_ms: u64,
    },

    /// Take a screenshot
    #[command(alias = "ss")]
    Screenshot {
        /// Target URL (defaults to --base-url)
        url: Option<String>,
        /// Output file path
        #[arg(short, long, value_name = "FILE", default_value = "screenshot.png")]
        output: PathBuf,
        /// Capture the full scrollable page instead of just the viewport
        #[arg(long)]
        full_page: bool,
    },

    /// Navigate, click an element by accessible name, and save a screenshot
    Verify {
        /// Target URL (defaults to --base-url)
        url: Option<String>,
        /// Accessible name of the element to click
        #[arg(long, value_name = "NAME", default_value = "Subscription")]
        name: String,
        /// Accessible role of the element to click
        #[arg(long, value_enum, default_value = "button")]
        role: RoleArg,
        /// Match the name case-sensitively
        #[arg(long)]
        exact: bool,
        /// Screenshot output path
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_VERIFY_OUTPUT)]
        output: PathBuf,
        /// Time to let the page settle after the click (ms)
        #[arg(long, value_name = "MS", default_value_t = 500)]
        settle_ms: u64,
        /// Capture the full scrollable page instead of just the viewport
        #[arg(long)]
        full_page: bool,
    },
}

impl Commands {
    /// Command name used in the output envelope.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Navigate { .. } => "navigate",
            Commands::Click { .. } => "click",
            Commands::Screenshot { .. } => "screenshot",
            Commands::Verify { .. } => "verify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verify_defaults_reproduce_the_original_flow() {
        let cli = Cli::try_parse_from(["pagecheck", "verify"]).unwrap();

        assert_eq!(cli.base_url, "http://localhost:3000");
        match cli.command {
            Commands::Verify {
                url,
                name,
                role,
                exact,
                output,
                settle_ms,
                full_page,
            } => {
                assert_eq!(url, None);
                assert_eq!(name, "Subscription");
                assert_eq!(role, RoleArg::Button);
                assert!(!exact);
                assert_eq!(
                    output,
                    PathBuf::from("jules-scratch/verification/subscription_page.png")
                );
                assert_eq!(settle_ms, 500);
                assert!(!full_page);
            }
            _ => panic!("Expected Verify command"),
        }
    }

    #[test]
    fn parse_click_with_role_flag() {
        let cli = Cli::try_parse_from(["pagecheck", "click", "Docs", "--role", "link"]).unwrap();

        match cli.command {
            Commands::Click { name, role, .. } => {
                assert_eq!(name, "Docs");
                assert_eq!(role, RoleArg::Link);
            }
            _ => panic!("Expected Click command"),
        }
    }

    #[test]
    fn parse_screenshot_command() {
        let cli = Cli::try_parse_from([
            "pagecheck",
            "screenshot",
            "https://example.com",
            "-o",
            "/tmp/test.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Screenshot {
                url,
                output,
                full_page,
            } => {
                assert_eq!(url.as_deref(), Some("https://example.com"));
                assert_eq!(output, PathBuf::from("/tmp/test.png"));
                assert!(!full_page);
            }
            _ => panic!("Expected Screenshot command"),
        }
    }

    #[test]
    fn parse_navigate_alias() {
        let cli = Cli::try_parse_from(["pagecheck", "nav", "/settings"]).unwrap();

        match cli.command {
            Commands::Navigate { url } => assert_eq!(url.as_deref(), Some("/settings")),
            _ => panic!("Expected Navigate command"),
        }
    }

    #[test]
    fn verbose_flag_short_and_long() {
        let short = Cli::try_parse_from(["pagecheck", "-v", "verify"]).unwrap();
        assert_eq!(short.verbose, 1);

        let long = Cli::try_parse_from(["pagecheck", "--verbose", "verify"]).unwrap();
        assert_eq!(long.verbose, 1);

        let double = Cli::try_parse_from(["pagecheck", "-vv", "verify"]).unwrap();
        assert_eq!(double.verbose, 2);
    }

    #[test]
    fn parse_base_url_and_headful_flags() {
        let cli = Cli::try_parse_from([
            "pagecheck",
            "--base-url",
            "http://localhost:8080",
            "--headful",
            "verify",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://localhost:8080");
        assert!(cli.headful);
    }

    #[test]
    fn command_names_match_subcommands() {
        let cli = Cli::try_parse_from(["pagecheck", "verify"]).unwrap();
        assert_eq!(cli.command.name(), "verify");

        let cli = Cli::try_parse_from(["pagecheck", "click", "Save"]).unwrap();
        assert_eq!(cli.command.name(), "click");
    }

    #[test]
    fn invalid_command_fails() {
        assert!(Cli::try_parse_from(["pagecheck", "unknown-command"]).is_err());
    }
}
