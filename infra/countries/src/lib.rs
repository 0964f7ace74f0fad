//! # Countries
//!
//! A small async client for `restcountries.com` (`/v3.1`).
//!
//! Every lookup is a single `GET` answered with a JSON array of
//! [`Country`] records. Path segments are percent-encoded, so region names such as
//! `"North America"` can be passed verbatim.
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), atlas_countries::CountryError> {
//! use atlas_countries::CountryClient;
//!
//! let client = CountryClient::builder().build()?;
//! let europe = client.region("Europe").await?;
//! println!("{} countries", europe.len());
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{CountryError, CountryErrorExt};
pub use reqwest::StatusCode;

use atlas_domain::catalog::{Continent, ContinentQuery, WORLD_REGIONS};
use atlas_domain::config::ApiConfig;
use atlas_domain::country::Country;
use futures::future::try_join_all;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

const API_VERSION: &str = "v3.1";
const DEFAULT_BASE_URL: &str = "https://restcountries.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CountryClient {
    http: Client,
    base: Url,
}

#[derive(Debug)]
pub struct CountryClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for CountryClientBuilder {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout: DEFAULT_TIMEOUT }
    }
}

impl CountryClientBuilder {
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout. Ignored in the browser, where `fetch` has none.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// # Errors
    /// [`CountryError::InvalidConfiguration`] when the base URL is not an absolute
    /// `http(s)` URL, [`CountryError::Http`] when the HTTP client cannot be created.
    pub fn build(self) -> Result<CountryClient, CountryError> {
        let base = Url::parse(&self.base_url).map_err(|e| CountryError::InvalidConfiguration {
            message: format!("'{}' is not a valid URL: {e}", self.base_url).into(),
            context: None,
        })?;

        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(CountryError::InvalidConfiguration {
                message: format!("'{base}' must be an absolute http(s) URL").into(),
                context: None,
            });
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(self.timeout)
            .user_agent(concat!("world-explorer/", env!("CARGO_PKG_VERSION")));
        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        let http = builder.build().context("Building the HTTP client")?;

        Ok(CountryClient { http, base })
    }
}

impl CountryClient {
    #[must_use]
    pub fn builder() -> CountryClientBuilder {
        CountryClientBuilder::default()
    }

    /// # Errors
    /// See [`CountryClientBuilder::build`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, CountryError> {
        Self::builder()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
    }

    /// `GET /v3.1/region/{name}`
    ///
    /// # Errors
    /// Transport, status and decoding failures, see [`CountryError`].
    pub async fn region(&self, name: &str) -> Result<Vec<Country>, CountryError> {
        self.fetch(&["region", name]).await
    }

    /// `GET /v3.1/subregion/{name}`
    ///
    /// # Errors
    /// Transport, status and decoding failures, see [`CountryError`].
    pub async fn subregion(&self, name: &str) -> Result<Vec<Country>, CountryError> {
        self.fetch(&["subregion", name]).await
    }

    /// `GET /v3.1/name/{name}`. The service matches partial names, so several
    /// records may come back.
    ///
    /// # Errors
    /// Transport, status and decoding failures, see [`CountryError`].
    pub async fn by_name(&self, name: &str) -> Result<Vec<Country>, CountryError> {
        self.fetch(&["name", name]).await
    }

    /// The single country best matching `name`: the record whose common name equals
    /// `name` ignoring case, otherwise the first record returned.
    ///
    /// # Errors
    /// [`CountryError::NotFound`] for an empty answer, plus everything [`Self::by_name`]
    /// can fail with.
    pub async fn country(&self, name: &str) -> Result<Country, CountryError> {
        let mut countries = self.by_name(name).await?;
        if countries.is_empty() {
            return Err(CountryError::NotFound { query: name.to_owned() });
        }

        let wanted = name.to_lowercase();
        let index =
            countries.iter().position(|c| c.name.common.to_lowercase() == wanted).unwrap_or(0);

        Ok(countries.swap_remove(index))
    }

    /// Countries of a map continent, using whichever endpoint the continent maps to.
    ///
    /// # Errors
    /// See [`Self::region`] and [`Self::subregion`].
    pub async fn continent(&self, continent: &Continent) -> Result<Vec<Country>, CountryError> {
        match continent.query {
            ContinentQuery::Region(name) => self.region(name).await,
            ContinentQuery::Subregion(name) => self.subregion(name).await,
        }
    }

    /// Every country of the inhabited regions, sorted by common name ignoring case.
    ///
    /// The regional requests run concurrently; any failure fails the whole call.
    ///
    /// # Errors
    /// The first error returned by a regional request.
    pub async fn all(&self) -> Result<Vec<Country>, CountryError> {
        let regions = try_join_all(WORLD_REGIONS.iter().map(|region| self.region(region))).await?;

        let mut countries = regions.into_iter().flatten().collect::<Vec<_>>();
        countries.sort_by_cached_key(|c| c.name.common.to_lowercase());

        debug!(count = countries.len(), "Loaded the full country list");
        Ok(countries)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CountryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CountryError::InvalidConfiguration {
                message: format!("'{}' cannot carry a path", self.base).into(),
                context: None,
            })?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, segments: &[&str]) -> Result<Vec<Country>, CountryError> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");

        let response =
            self.http.get(url.clone()).send().await.context(format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountryError::Status { status, url: url.into(), context: None });
        }

        let body = response.bytes().await.context(format!("Reading {url}"))?;
        let countries: Vec<Country> =
            serde_json::from_slice(&body).context(format!("Decoding {url}"))?;

        debug!(%url, count = countries.len(), "Received countries");
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CountryClient {
        CountryClient::builder().base_url(base).build().expect("valid base url")
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = client("https://restcountries.com/").endpoint(&["subregion", "North America"]);
        assert_eq!(
            url.expect("url").as_str(),
            "https://restcountries.com/v3.1/subregion/North%20America"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("http://localhost:8080/mirror").endpoint(&["name", "Côte d'Ivoire"]);
        assert_eq!(
            url.expect("url").as_str(),
            "http://localhost:8080/mirror/v3.1/name/C%C3%B4te%20d'Ivoire"
        );
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        for base in ["not a url", "mailto:atlas@example.com", "ftp://restcountries.com/"] {
            let err = CountryClient::builder().base_url(base).build().expect_err(base);
            assert!(matches!(err, CountryError::InvalidConfiguration { .. }), "{base}");
        }
    }

    #[test]
    fn test_not_found_classification() {
        let missing = CountryError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://restcountries.com/v3.1/name/atlantis".to_owned(),
            context: None,
        };
        let outage = CountryError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://restcountries.com/v3.1/region/Europe".to_owned(),
            context: None,
        };

        assert!(!missing.is_not_found());
        assert!(!outage.is_not_found());
        assert!(CountryError::NotFound { query: "atlantis".to_owned() }.is_not_found());
    }
}
