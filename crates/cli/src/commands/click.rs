use std::time::Duration;

use pagecheck::{BrowserSession, RoleLocator, SessionConfig};
use tracing::info;

use crate::error::Result;
use crate::output::{ClickData, CommandInputs, OutputFormat, ResultBuilder, print_result};

/// Execute click and report the page URL before and after.
///
/// The after URL is read once the settle wait has elapsed, so a click that
/// triggers client-side routing is reported as a navigation.
pub async fn execute(
    url: &str,
    locator: RoleLocator,
    settle_ms: u64,
    config: SessionConfig,
    format: OutputFormat,
) -> Result<()> {
    info!(target = "pagecheck", %url, locator = %locator, "click element");

    let session = BrowserSession::launch_with(config).await?;
    session.goto(url).await?;

    let before_url = session.url().await.unwrap_or_default();
    locator.click(session.page()).await?;

    if settle_ms > 0 {
        tokio::time::sleep(Duration::from_millis(settle_ms)).await;
    }

    let after_url = session.url().await.unwrap_or_default();
    let navigated = before_url != after_url;

    let result = ResultBuilder::new("click")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            locator: Some(locator.to_string()),
            ..Default::default()
        })
        .data(ClickData {
            locator: locator.to_string(),
            before_url,
            after_url,
            navigated,
        })
        .build();

    print_result(&result, format);
    session.close().await?;
    Ok(())
}
