use tokio::time::sleep;

use crate::cache::PageCache;
use crate::client::HttpClient;
use crate::config::{Config, LISTING_PAGE, MUNICIPALITY_PAGE_PREFIX};
use crate::error::Result;

/// Fetch and cache the listing page unless a copy is already on disk.
pub async fn ensure_listing_cached(client: &HttpClient, cache: &PageCache) -> Result<()> {
    if cache.exists(LISTING_PAGE) {
        tracing::debug!("Listing page already cached");
        return Ok(());
    }
    let html = client.fetch_listing().await?;
    cache.write(LISTING_PAGE, &html)?;
    Ok(())
}

/// Collect case numbers from every cached municipality page.
///
/// Municipality pages are recognized by the registry-system prefix on their
/// cache name; anything else in the cache directory, the listing page
/// included, is left alone. Order follows the cache enumeration and
/// duplicates are kept.
pub async fn collect_case_numbers(client: &HttpClient, cache: &PageCache) -> Result<Vec<String>> {
    ensure_listing_cached(client, cache).await?;

    let mut case_numbers = Vec::new();
    for name in cache.list_cached_names()? {
        if !name.starts_with(MUNICIPALITY_PAGE_PREFIX) {
            continue;
        }
        let html = cache.read(&name)?;
        let numbers = fbb_extract::case_numbers(&html)?;
        tracing::info!(page = %name, count = numbers.len(), "Extracted case numbers");
        case_numbers.extend(numbers);
    }
    Ok(case_numbers)
}

/// Municipality ids offered by the listing page's selector.
pub async fn list_municipality_ids(client: &HttpClient, cache: &PageCache) -> Result<Vec<String>> {
    ensure_listing_cached(client, cache).await?;

    let html = cache.read(LISTING_PAGE)?;
    let ids = fbb_extract::municipality_ids(&html)?;
    tracing::info!(count = ids.len(), "Extracted municipality ids");
    Ok(ids)
}

/// Download every municipality page, strictly one at a time.
///
/// Sleeps the configured pause after each fetch. The first failure aborts
/// the remaining downloads; nothing tracks partial progress beyond the files
/// already written.
pub async fn download_municipalities(
    config: &Config,
    client: &HttpClient,
    cache: &PageCache,
    ids: &[String],
) -> Result<()> {
    for id in ids {
        let html = client.fetch_municipality(id).await?;
        cache.write(id, &html)?;
        sleep(config.pause).await;
    }
    Ok(())
}
