//! Sign listing and search command.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use signdex_api::DictionaryClient;
use signdex_core::{OutputFormat, OutputFormatter, Sign, SignView};

use crate::error::ClientResult;

/// Fetches signs (all of them, or those matching `term`) and prints the
/// listing.
///
/// With `resolve_images`, each sign's image URL is resolved against the
/// service; otherwise the constructed URL is shown without a request.
pub async fn run(
    client: &DictionaryClient,
    term: Option<&str>,
    resolve_images: bool,
    format: OutputFormat,
    formatter: &OutputFormatter,
) -> ClientResult<()> {
    let signs = match term {
        Some(term) => client.search_signs(term).await?,
        None => client.all_signs().await?,
    };
    debug!(count = signs.len(), "fetched signs");

    let views = if resolve_images {
        resolve_image_urls(client, signs).await
    } else {
        signs
            .into_iter()
            .map(|sign| {
                let url = client.sign_image_url(sign.id);
                SignView::new(sign).with_image_url(url)
            })
            .collect()
    };

    println!("{}", formatter.format_signs(format, &views));
    Ok(())
}

/// Resolves image URLs concurrently, one independent request per sign.
///
/// A failed resolution is logged and leaves that sign without an image URL;
/// the listing still renders.
async fn resolve_image_urls(client: &DictionaryClient, signs: Vec<Sign>) -> Vec<SignView> {
    let mut set = JoinSet::new();
    for (position, sign) in signs.into_iter().enumerate() {
        let client = client.clone();
        set.spawn(async move {
            let resolved = client.resolve_sign_image(sign.id).await;
            (position, sign, resolved)
        });
    }

    let mut views: Vec<(usize, SignView)> = Vec::new();
    while let Some(joined) = set.join_next().await {
        let Ok((position, sign, resolved)) = joined else {
            continue;
        };
        let view = match resolved {
            Ok(url) => SignView::new(sign).with_image_url(url),
            Err(e) => {
                warn!(id = sign.id, error = %e, "failed to resolve sign image");
                SignView::new(sign)
            }
        };
        views.push((position, view));
    }

    views.sort_by_key(|(position, _)| *position);
    views.into_iter().map(|(_, view)| view).collect()
}
