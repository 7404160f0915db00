mod click;
mod navigate;
mod screenshot;
mod verify;

use std::time::Duration;

use pagecheck::{RoleLocator, SessionConfig};

use crate::cli::{Cli, Commands, RoleArg};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::target;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        verbose: _,
        format,
        base_url,
        headful,
        timeout_ms,
        command,
    } = cli;

    let format: OutputFormat = format.into();
    let session_config = build_session_config(headful, timeout_ms);

    match command {
        Commands::Navigate { url } => {
            let url = target::resolve_url(url.as_deref(), &base_url)?;
            navigate::execute(&url, session_config, format).await
        }
        Commands::Click {
            name,
            url,
            role,
            exact,
            settle_ms,
        } => {
            let url = target::resolve_url(url.as_deref(), &base_url)?;
            let locator = build_locator(role, &name, exact);
            click::execute(&url, locator, settle_ms, session_config, format).await
        }
        Commands::Screenshot {
            url,
            output,
            full_page,
        } => {
            let url = target::resolve_url(url.as_deref(), &base_url)?;
            screenshot::execute(&url, &output, full_page, session_config, format).await
        }
        Commands::Verify {
            url,
            name,
            role,
            exact,
            output,
            settle_ms,
            full_page,
        } => {
            let url = target::resolve_url(url.as_deref(), &base_url)?;
            let locator = build_locator(role, &name, exact);
            verify::execute(
                &url,
                locator,
                &output,
                settle_ms,
                full_page,
                session_config,
                format,
            )
            .await
        }
    }
}

fn build_session_config(headful: bool, timeout_ms: Option<u64>) -> SessionConfig {
    let mut config = SessionConfig::default();
    if headful {
        config = config.headful();
    }
    if let Some(ms) = timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }
    config
}

fn build_locator(role: RoleArg, name: &str, exact: bool) -> RoleLocator {
    let locator = RoleLocator::new(role.into(), name);
    if exact { locator.exact() } else { locator }
}
