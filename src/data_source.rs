// SPDX-License-Identifier: MPL-2.0
//! Remote source of account records.
//!
//! This module provides:
//! - An HTTP client bound to the fixed `GET /accounts` endpoint
//! - Cooperative cancellation through a shared token
//! - Decoding of the JSON array payload into [`Account`] records
//!
//! Every call issues exactly one request. Nothing is retried or cached
//! here; the view decides when to call again.

use crate::domain::account::Account;
use crate::domain::network::{ApiBaseUrl, RequestTimeout};
use crate::error::FetchError;
use futures_util::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Upper bound on the response body; larger payloads are rejected.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("LedgerLens/", env!("CARGO_PKG_VERSION"));

/// Cancellation token type for in-flight requests.
pub type CancellationToken = Arc<AtomicBool>;

/// Creates a fresh, untriggered token.
#[must_use]
pub fn new_cancellation_token() -> CancellationToken {
    Arc::new(AtomicBool::new(false))
}

/// Checks if the cancellation token has been triggered.
#[inline]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::SeqCst)
}

/// Triggers the token. Idempotent.
#[inline]
pub fn cancel(token: &CancellationToken) {
    token.store(true, Ordering::SeqCst);
}

/// Fetches the account list from the ledger service.
#[derive(Debug, Clone)]
pub struct AccountDataSource {
    client: reqwest::Client,
    url: Url,
}

impl AccountDataSource {
    /// Builds a data source for `<base>/accounts`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(base: &ApiBaseUrl, timeout: RequestTimeout) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout.as_duration())
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: base.accounts_url(),
        })
    }

    /// Endpoint this source reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Issues one `GET` and decodes the body.
    ///
    /// The token is checked before the request goes out and between body
    /// chunks; once triggered the call resolves to [`FetchError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts, non-2xx statuses, oversized bodies and
    /// payloads that are not a JSON array of accounts.
    pub async fn fetch_accounts(
        &self,
        token: CancellationToken,
    ) -> Result<Vec<Account>, FetchError> {
        if is_cancelled(&token) {
            return Err(FetchError::Cancelled);
        }

        let started = Instant::now();
        tracing::debug!(url = %self.url, "fetching accounts");

        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
            });
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            if is_cancelled(&token) {
                return Err(FetchError::Cancelled);
            }
            let chunk = chunk?;
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(FetchError::Deserialization(format!(
                    "response exceeds {MAX_BODY_BYTES} bytes"
                )));
            }
            body.extend_from_slice(&chunk);
        }

        if is_cancelled(&token) {
            return Err(FetchError::Cancelled);
        }

        let accounts = decode_accounts(&body)?;
        tracing::info!(
            count = accounts.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "accounts fetched"
        );
        Ok(accounts)
    }
}

/// Decodes a response body as a JSON array of accounts.
///
/// The whole payload is rejected if any element does not match the
/// account shape.
///
/// # Errors
///
/// Returns [`FetchError::Deserialization`] when the body is not valid JSON
/// or not an array of accounts.
pub fn decode_accounts(body: &[u8]) -> Result<Vec<Account>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
