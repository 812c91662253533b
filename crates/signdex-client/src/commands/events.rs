//! Event listing command.

use tracing::debug;

use signdex_api::DictionaryClient;
use signdex_core::{EventView, OutputFormat, OutputFormatter, parse_record};

use crate::error::ClientResult;

/// Fetches every event record, parses it, and prints the listing.
///
/// Records parse and render independently; malformed stamps surface as the
/// invalid-date sentinel and missing fields as blanks, never as errors.
pub async fn run(
    client: &DictionaryClient,
    format: OutputFormat,
    formatter: &OutputFormatter,
) -> ClientResult<()> {
    let records = client.events().await?;
    debug!(count = records.len(), "fetched event records");

    let views: Vec<EventView> = records
        .iter()
        .map(|text| EventView::from_record(&parse_record(text)))
        .collect();

    println!("{}", formatter.format_events(format, &views));
    Ok(())
}
