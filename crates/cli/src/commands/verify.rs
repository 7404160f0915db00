//! End-to-end verification flow: navigate, click, capture.

use std::path::Path;
use std::time::Duration;

use pagecheck::{BrowserSession, RoleLocator, SessionConfig};
use tracing::info;

use crate::error::Result;
use crate::output::{
    Artifact, ArtifactType, CommandInputs, OutputFormat, ResultBuilder, VerifyData, print_result,
};

/// Runs the whole verification procedure in one session: navigate to the
/// target, click the element the locator names, let the page settle, then
/// capture the screenshot. A failure at any step aborts the remainder, so a
/// failed click never overwrites an earlier screenshot; the browser process
/// is torn down on every path because the session owns it.
pub async fn execute(
    url: &str,
    locator: RoleLocator,
    output: &Path,
    settle_ms: u64,
    full_page: bool,
    config: SessionConfig,
    format: OutputFormat,
) -> Result<()> {
    info!(
        target = "pagecheck",
        %url,
        locator = %locator,
        path = %output.display(),
        "verify"
    );

    let session = BrowserSession::launch_with(config).await?;
    session.goto(url).await?;

    let before_url = session.url().await.unwrap_or_default();
    locator.click(session.page()).await?;

    if settle_ms > 0 {
        tokio::time::sleep(Duration::from_millis(settle_ms)).await;
    }

    let after_url = session.url().await.unwrap_or_default();
    let size_bytes = session.screenshot_to_file(output, full_page).await?;

    let result = ResultBuilder::new("verify")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            locator: Some(locator.to_string()),
            output_path: Some(output.to_path_buf()),
        })
        .data(VerifyData {
            url: after_url.clone(),
            locator: locator.to_string(),
            navigated: before_url != after_url,
            screenshot: output.to_path_buf(),
            size_bytes,
        })
        .artifact(Artifact {
            artifact_type: ArtifactType::Screenshot,
            path: output.to_path_buf(),
            size_bytes: Some(size_bytes),
        })
        .build();

    print_result(&result, format);
    session.close().await?;
    Ok(())
}
