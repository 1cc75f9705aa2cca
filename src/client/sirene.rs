use chrono::NaiveDate;
use http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::error::{Error, Result};
use crate::model::establishment::Establishment;
use crate::parser::response::parse_response;
use crate::resilience::retry::RetryPolicy;
use crate::utils::constants::{
    DATE_FORMAT, NAF_CODES, PAGE_SIZE, REQUEST_TIMEOUT, SEARCH_PATH, TOKEN_VALIDITY_SECONDS,
};

/// Client for the SIRENE registry API.
///
/// Holds the one piece of shared state in the crate: the cached bearer
/// token. The cache is a last-writer-wins cell; concurrent first calls
/// may each fetch a token, which is harmless since fetches are
/// idempotent. The lock is never held across a network await, so
/// cancelling an in-flight call leaves the cache as it was.
#[derive(Debug)]
pub struct SireneClient {
    settings: Settings,
    retry: RetryPolicy,
    client: Client,
    token: Mutex<Option<String>>,
}

impl SireneClient {
    pub fn new(settings: Settings) -> Self {
        Self::with_retry_policy(settings, RetryPolicy::default())
    }

    /// Same client with a caller-supplied retry policy.
    pub fn with_retry_policy(settings: Settings, retry: RetryPolicy) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            settings,
            retry,
            client,
            token: Mutex::new(None),
        }
    }

    /// Return the cached bearer token, fetching one first if the cache
    /// is cold. The cache-hit path makes no network call.
    pub async fn get_token(&self) -> Result<String> {
        if let Some(token) = self.token.lock().await.clone() {
            return Ok(token);
        }

        let token = self.retry.run(|| self.fetch_token()).await?;
        *self.token.lock().await = Some(token.clone());
        Ok(token)
    }

    async fn fetch_token(&self) -> Result<String> {
        debug!(url = %self.settings.api_url, "requesting access token");

        let validity = TOKEN_VALIDITY_SECONDS.to_string();
        let form = [
            ("grant_type", "client_credentials"),
            ("validity_period", validity.as_str()),
        ];

        let response = self
            .client
            .post(format!("{}/token", self.settings.api_url))
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Auth(status));
        }

        let body: Value = response.json().await?;
        body.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(Error::MalformedToken)
    }

    /// Search for food & beverage establishments registered on or after
    /// `from_date`. Returns records in the order the API listed them;
    /// unparsable items are dropped (see [`parse_response`]).
    pub async fn search_establishments(&self, from_date: NaiveDate) -> Result<Vec<Establishment>> {
        self.retry.run(|| self.search_once(from_date)).await
    }

    /// One search attempt, with a single bounded 401 recovery: the
    /// first 401 discards the cached token and repeats the call with a
    /// fresh one; a second 401 propagates as a status error.
    async fn search_once(&self, from_date: NaiveDate) -> Result<Vec<Establishment>> {
        let url = format!(
            "{}/{}/{}",
            self.settings.api_url, SEARCH_PATH, self.settings.siren
        );
        let naf_filter = format!("(activitePrincipaleUniteLegale:{})", NAF_CODES.join(" OR "));
        let debut = from_date.format(DATE_FORMAT).to_string();
        let nombre = PAGE_SIZE.to_string();

        let mut reauthenticated = false;
        loop {
            let token = self.get_token().await?;

            let response = self
                .client
                .get(&url)
                .query(&[
                    ("q", naf_filter.as_str()),
                    ("debut", debut.as_str()),
                    ("nombre", nombre.as_str()),
                ])
                .bearer_auth(&token)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED && !reauthenticated {
                warn!("search rejected with 401, discarding cached token");
                self.token.lock().await.take();
                reauthenticated = true;
                continue;
            }
            if !status.is_success() {
                return Err(Error::Status(status));
            }

            let body: Value = response.json().await?;
            let establishments = parse_response(&body);
            info!(total = establishments.len(), %from_date, "search completed");
            return Ok(establishments);
        }
    }
}
