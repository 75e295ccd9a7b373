use std::path::Path;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Write a response body verbatim, replacing whatever was at `path`.
///
/// The parent directory has to exist already.
pub async fn write_scrape_result(path: &Path, body: &str) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .await
        .with_context(|| format!("Could not create {}", path.display()))?;
    file.write_all(body.as_bytes())
        .await
        .with_context(|| format!("Could not write {}", path.display()))?;
    file.flush().await?;
    Ok(())
}
