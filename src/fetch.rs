// One-shot fetch-and-parse of an external restaurant XML document.
use tracing::warn;

use crate::ingest::parse_document;
use crate::model::Restaurant;

/// Fetch an XML document and parse it into restaurant records.
///
/// Never fails to the caller: network and parse failures are logged and
/// downgraded to an empty sequence, leaving the fallback decision (and any
/// user-visible warning) to the caller.
pub async fn load_document(url: &str) -> Vec<Restaurant> {
    let text = match fetch_text(url).await {
        Ok(text) => text,
        Err(e) => {
            warn!(url, error = %e, "failed to fetch restaurant XML");
            return Vec::new();
        }
    };

    match parse_document(&text) {
        Ok(restaurants) => restaurants,
        Err(e) => {
            warn!(url, error = %e, "failed to parse restaurant XML");
            Vec::new()
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    reqwest::get(url).await?.error_for_status()?.text().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_yields_empty() {
        let restaurants = load_document("not a url").await;
        assert!(restaurants.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_empty() {
        // Nothing listens on the discard port; the failure is absorbed
        let restaurants = load_document("http://127.0.0.1:9/restaurants.xml").await;
        assert!(restaurants.is_empty());
    }
}
