//! Logo download command.

use std::path::Path;

use tracing::info;

use signdex_api::DictionaryClient;

use crate::error::ClientResult;

/// Downloads the service logo image to `output`.
pub async fn run(client: &DictionaryClient, output: &Path) -> ClientResult<()> {
    let bytes = client.logo().await?;
    std::fs::write(output, &bytes)?;
    info!(path = %output.display(), size = bytes.len(), "wrote logo");
    println!("wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
