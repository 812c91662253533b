//! Service version command.

use signdex_api::DictionaryClient;

use crate::error::ClientResult;

/// Prints the service version string.
pub async fn run(client: &DictionaryClient) -> ClientResult<()> {
    let version = client.version().await?;
    println!("{}", version.trim());
    Ok(())
}
