//! Web-search client.
//!
//! Speaks a minimal JSON search API: `GET {endpoint}?q=...&limit=...` with a
//! bearer key, answering `{"results": [{title, url, snippet?, published_date?,
//! source?}]}`. Results map to [`RawHit`]; malformed individual fields become
//! `None` rather than dropping the hit.

use chrono::NaiveDate;

use crate::{error::ProviderError, http::check_response, ProviderClient};
use scout_core::entities::RawHit;

#[derive(serde::Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(serde::Deserialize)]
struct SearchResult {
    title: String,
    url: String,
    snippet: Option<String>,
    published_date: Option<String>,
    source: Option<String>,
}

impl SearchResult {
    fn into_hit(self) -> RawHit {
        RawHit {
            title: self.title,
            url: self.url,
            snippet: self.snippet.unwrap_or_default(),
            date: self.published_date.as_deref().and_then(parse_date),
            provider: self.source,
        }
    }
}

/// Parse the date prefix of a provider date string (`YYYY-MM-DD`, with or
/// without a trailing time component).
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}

impl ProviderClient {
    /// Search the web for raw opportunity hits.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if no endpoint is configured, the HTTP
    /// request fails, the provider returns a non-success status, or the
    /// response cannot be parsed. Callers reach this through
    /// [`SearchCapability::search`](crate::SearchCapability::search), which
    /// maps every error to `Unavailable`.
    pub async fn search_web(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RawHit>, ProviderError> {
        if !self.search_config.is_configured() {
            return Err(ProviderError::NotConfigured { provider: "search" });
        }
        let limit = limit.min(20);
        let url = format!(
            "{}?q={}&limit={limit}",
            self.search_config.endpoint,
            urlencoding::encode(query)
        );
        let resp = check_response(
            self.http
                .get(&url)
                .bearer_auth(&self.search_config.api_key)
                .send()
                .await?,
        )
        .await?;

        let data: SearchResponse = resp.json().await?;
        Ok(data.results.into_iter().map(SearchResult::into_hit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "results": [
            {
                "title": "Tampa Food Festival 2026 - Vendor Applications Open",
                "url": "https://tampafoodfest.example/vendors",
                "snippet": "Apply by September 1 to join 200 vendors at Curtis Hixon Park, Tampa, FL.",
                "published_date": "2026-08-12",
                "source": "eventbrite"
            },
            {
                "title": "Hillsborough County Small Business Grant",
                "url": "https://hillsborough.example/grants/small-business",
                "snippet": null,
                "published_date": "2026-08-01T09:30:00Z",
                "source": null
            }
        ]
    }"#;

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.results.len(), 2);
        assert_eq!(data.results[0].source.as_deref(), Some("eventbrite"));
    }

    #[test]
    fn maps_to_raw_hits() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let hits: Vec<RawHit> = data.results.into_iter().map(SearchResult::into_hit).collect();

        assert_eq!(hits[0].date, NaiveDate::from_ymd_opt(2026, 8, 12));
        assert!(hits[0].snippet.contains("Curtis Hixon Park"));
        // Timestamped date strings keep only the day; null snippet becomes empty.
        assert_eq!(hits[1].date, NaiveDate::from_ymd_opt(2026, 8, 1));
        assert_eq!(hits[1].snippet, "");
        assert_eq!(hits[1].provider, None);
    }

    #[test]
    fn malformed_dates_become_none() {
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2026/08/12"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2026-08-12"), NaiveDate::from_ymd_opt(2026, 8, 12));
    }
}
