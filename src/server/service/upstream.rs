//! HTTP client for the member and book services.
//!
//! Used by order enrichment to resolve an order's references. Each lookup is a single attempt
//! bounded by the configured timeout; failures are reported as `UpstreamFailure` and never carry
//! the upstream's own error body.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, book::BookDto, member::MemberDto},
    server::{config::UpstreamConfig, error::enrichment::UpstreamFailure},
};

/// Result of a successful round trip to a record store.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The store returned the record.
    Found(T),
    /// The store answered that no record has the identifier.
    Missing,
}

/// Client for the `getById` contracts of the member and book services.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    member_service_url: Url,
    book_service_url: Url,
    timeout: Duration,
}

impl UpstreamClient {
    /// Creates a client from a shared HTTP client and the upstream configuration.
    pub fn new(http: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            http,
            member_service_url: config.member_service_url.clone(),
            book_service_url: config.book_service_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Bound applied to each lookup.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Looks up a member via `GET {member_service_url}/members/{id}`.
    pub async fn get_member(&self, id: Uuid) -> Result<Lookup<MemberDto>, UpstreamFailure> {
        self.fetch(&self.member_service_url, "members", id).await
    }

    /// Looks up a book via `GET {book_service_url}/books/{id}`.
    pub async fn get_book(&self, id: Uuid) -> Result<Lookup<BookDto>, UpstreamFailure> {
        self.fetch(&self.book_service_url, "books", id).await
    }

    /// Fetches one record, bounding the whole exchange (connect, headers and body) by the
    /// configured timeout.
    async fn fetch<T: DeserializeOwned>(
        &self,
        base: &Url,
        collection: &str,
        id: Uuid,
    ) -> Result<Lookup<T>, UpstreamFailure> {
        let url = record_url(base, collection, id)?;

        match tokio::time::timeout(self.timeout, self.request(url)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamFailure::Timeout(self.timeout)),
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: Url) -> Result<Lookup<T>, UpstreamFailure> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamFailure::Timeout(self.timeout)
            } else {
                UpstreamFailure::Transport(e)
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            // Only a store's own record-not-found answer counts as missing. A bare 404 means
            // the route itself is wrong, which is a misconfigured upstream.
            return match response.json::<ErrorDto>().await {
                Ok(body) if body.kind == "not_found" => Ok(Lookup::Missing),
                _ => Err(UpstreamFailure::Status(status.as_u16())),
            };
        }

        if !status.is_success() {
            return Err(UpstreamFailure::Status(status.as_u16()));
        }

        let record = response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamFailure::Timeout(self.timeout)
            } else {
                UpstreamFailure::Decode(e)
            }
        })?;

        Ok(Lookup::Found(record))
    }
}

/// Builds `{base}/{collection}/{id}`, keeping any path prefix of the base URL.
fn record_url(base: &Url, collection: &str, id: Uuid) -> Result<Url, UpstreamFailure> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| UpstreamFailure::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push(collection)
        .push(&id.to_string());

    Ok(url)
}
