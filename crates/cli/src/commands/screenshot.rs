use std::path::Path;

use pagecheck::{BrowserSession, SessionConfig};
use tracing::info;

use crate::error::Result;
use crate::output::{
    Artifact, ArtifactType, CommandInputs, OutputFormat, ResultBuilder, ScreenshotData,
    print_result,
};

pub async fn execute(
    url: &str,
    output: &Path,
    full_page: bool,
    config: SessionConfig,
    format: OutputFormat,
) -> Result<()> {
    info!(target = "pagecheck", %url, path = %output.display(), full_page, "screenshot");

    let session = BrowserSession::launch_with(config).await?;
    session.goto(url).await?;

    let size_bytes = session.screenshot_to_file(output, full_page).await?;

    let result = ResultBuilder::new("screenshot")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            output_path: Some(output.to_path_buf()),
            ..Default::default()
        })
        .data(ScreenshotData {
            path: output.to_path_buf(),
            full_page,
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
