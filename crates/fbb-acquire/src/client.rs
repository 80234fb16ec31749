use reqwest::header::{HeaderMap, HeaderValue, FROM};

use crate::config::{Config, RequestHeaders};
use crate::error::{FbbError, Result};

/// HTTP access to the registry site.
///
/// One client per run. Every request carries the operator-supplied
/// `User-Agent` and, when given, `From` header. There is no retry policy;
/// transport failures go straight back to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    listing_url: String,
}

impl HttpClient {
    pub fn new(config: &Config, headers: &RequestHeaders) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        if let Some(from) = &headers.from {
            default_headers.insert(FROM, HeaderValue::from_str(from)?);
        }

        let client = reqwest::Client::builder()
            .user_agent(&headers.user_agent)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            listing_url: config.listing_url.clone(),
        })
    }

    /// GET the top-level listing page.
    pub async fn fetch_listing(&self) -> Result<String> {
        tracing::info!(url = %self.listing_url, "Fetching listing page");
        let response = self
            .client
            .get(&self.listing_url)
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        tracing::info!(bytes = html.len(), "Received listing page");
        Ok(html)
    }

    /// POST for one municipality's result page.
    ///
    /// The id is checked before anything goes on the wire.
    pub async fn fetch_municipality(&self, id: &str) -> Result<String> {
        validate_municipality_id(id)?;

        tracing::info!(url = %self.listing_url, kommune = id, "Fetching municipality page");
        let response = self
            .client
            .post(&self.listing_url)
            .form(&[("kommune", id)])
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        tracing::info!(kommune = id, bytes = html.len(), "Received municipality page");
        Ok(html)
    }
}

/// A municipality id must survive a string to integer to string round trip.
/// Leading zeroes, signs, or anything non-numeric is rejected.
pub fn validate_municipality_id(id: &str) -> Result<()> {
    let round_trips = id
        .parse::<u64>()
        .map(|n| n.to_string() == id)
        .unwrap_or(false);
    if !round_trips {
        return Err(FbbError::InvalidMunicipalityId(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_round_trip() {
        assert!(validate_municipality_id("0").is_ok());
        assert!(validate_municipality_id("101").is_ok());
        assert!(validate_municipality_id("851").is_ok());
    }

    #[test]
    fn anything_else_is_rejected() {
        for bad in ["", "0101", "-1", "+5", "101a", "10 1", "ål", "1e3"] {
            assert!(validate_municipality_id(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[tokio::test]
    async fn a_bad_id_is_rejected_before_any_request() {
        // Port 9 (discard) on loopback: a request reaching the wire would
        // surface as FbbError::Http, not InvalidMunicipalityId.
        let config = Config {
            listing_url: "http://127.0.0.1:9/fredningsliste.htm".to_string(),
            ..Config::default()
        };
        let headers = RequestHeaders {
            user_agent: "fbb-tests".to_string(),
            from: None,
        };
        let client = HttpClient::new(&config, &headers).unwrap();

        let err = client.fetch_municipality("0101").await.unwrap_err();
        assert!(matches!(err, FbbError::InvalidMunicipalityId(id) if id == "0101"));
    }
}
