use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Default documentation page. The site serves the whole doc as one page and
/// only toggles section visibility client-side, so a single fetch is enough.
pub const APIDOC_URL: &str = "https://webshare.cz/apidoc/";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Network failure or non-success status while fetching the page.
#[derive(Debug, Error)]
#[error("failed to fetch {url}")]
pub struct AcquisitionError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Fetch the raw documentation page. Surfaces transport errors and
/// non-success statuses; no retries, no recovery.
pub async fn fetch_page(url: &str) -> Result<String, AcquisitionError> {
    let err = |source: reqwest::Error| AcquisitionError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(err)?;

    info!("Fetching {url}");
    let response = client.get(url).send().await.map_err(err)?;
    let response = response.error_for_status().map_err(err)?;
    response.text().await.map_err(err)
}
