use pagecheck::{BrowserSession, SessionConfig};
use tracing::info;

use crate::error::Result;
use crate::output::{CommandInputs, NavigateData, OutputFormat, ResultBuilder, print_result};

pub async fn execute(url: &str, config: SessionConfig, format: OutputFormat) -> Result<()> {
    info!(target = "pagecheck", %url, "navigate");

    let session = BrowserSession::launch_with(config).await?;
    session.goto(url).await?;

    let final_url = session.url().await.unwrap_or_default();
    let title = session.title().await.unwrap_or_default();

    let result = ResultBuilder::new("navigate")
        .inputs(CommandInputs {
            url: Some(url.to_string()),
            ..Default::default()
        })
        .data(NavigateData {
            url: final_url,
            title,
        })
        .build();

    print_result(&result, format);
    session.close().await?;
    Ok(())
}
