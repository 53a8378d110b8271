//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiKey, CreditBalanceResponse, OtpGenerateRequest, OtpGenerateResponse, OtpVerifyRequest,
    OtpVerifyResponse, SmsRequest, SmsResponse, SmsStatusResponse, TextId, WebhookPayload,
};
use crate::error::TextbeltError;

const DEFAULT_BASE_URL: &str = "https://textbelt.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>>;
}

#[derive(Debug, thiserror::Error)]
/// Non-successful HTTP status returned by the Textbelt endpoint.
///
/// Surfaces as the cause of a `Transport`-category [`TextbeltError`].
#[error("unexpected HTTP status: {status}")]
pub struct HttpStatusError {
    /// HTTP status code as returned by the server.
    pub status: u16,
    /// Response body, when non-empty.
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bounded retry policy for transient transport failures.
///
/// Applied inside the HTTP transport to connection-level errors and 5xx
/// responses; client methods themselves never retry. The backoff doubles on
/// each attempt.
pub struct RetryPolicy {
    /// Number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Retries disabled entirely.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    fn delay(&self, attempt: u32) -> Duration {
        self.backoff * (1u32 << attempt.min(5))
    }
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestTransport {
    async fn send_with_retry<F>(&self, build: F) -> Result<HttpResponse, TextbeltError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            let result = build().send().await;

            let transient = match &result {
                Ok(response) => response.status().is_server_error(),
                Err(_) => true,
            };
            if transient && attempt < self.retry.max_retries {
                let delay = self.retry.delay(attempt);
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "transient transport failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            let response = result.map_err(TextbeltError::from)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(TextbeltError::from)?;
            return Ok(HttpResponse { status, body });
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>> {
        Box::pin(async move {
            self.send_with_retry(|| self.client.post(url).form(&params))
                .await
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>> {
        Box::pin(async move {
            self.send_with_retry(|| self.client.get(url).query(&query))
                .await
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextbeltClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// retry policy.
pub struct TextbeltClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: RetryPolicy,
}

impl TextbeltClientBuilder {
    /// Create a builder with the default base URL and retry policy.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the Textbelt base URL. A trailing slash is trimmed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Set an HTTP client timeout applied to each request attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the transient-failure retry policy.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build a [`TextbeltClient`].
    pub fn build(self) -> Result<TextbeltClient, TextbeltError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(TextbeltError::transport)?;

        Ok(TextbeltClient {
            api_key: self.api_key,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport {
                client,
                retry: self.retry,
            }),
        })
    }
}

#[derive(Clone)]
/// High-level Textbelt client.
///
/// One instance owns one connection pool and one immutable API key; cloning
/// is cheap and clones share both. All methods are safe to call from
/// concurrent tasks.
///
/// Every method returns [`TextbeltError`] on failure, regardless of whether
/// the underlying fault was a network problem, a malformed response, or
/// invalid input; inspect [`TextbeltError::category`] to tell them apart.
pub struct TextbeltClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl TextbeltClient {
    /// Create a client using the default base URL (`https://textbelt.com`).
    ///
    /// For more customization, use [`TextbeltClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, TextbeltError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TextbeltClientBuilder {
        TextbeltClientBuilder::new(api_key)
    }

    /// Send an SMS to a phone number (`POST /text`).
    ///
    /// When the request carries a reply webhook URL, Textbelt delivers
    /// recipient replies to it; verify those callbacks with
    /// [`TextbeltClient::verify_webhook`].
    pub async fn send_sms(&self, request: SmsRequest) -> Result<SmsResponse, TextbeltError> {
        let url = format!("{}/text", self.base_url);
        let mut params = crate::transport::encode_send_sms_form(&request);
        self.push_key(&mut params);

        debug!(url = %url, "sending SMS");
        let response = self.http.post_form(&url, params).await?;
        let response = ensure_success(response)?;

        crate::transport::decode_send_sms_json_response(&response.body)
    }

    /// Check the delivery status of a sent SMS (`GET /status/{textId}`).
    pub async fn check_sms_status(
        &self,
        text_id: &TextId,
    ) -> Result<SmsStatusResponse, TextbeltError> {
        let url = format!("{}/status/{}", self.base_url, text_id.as_str());

        debug!(url = %url, "checking SMS delivery status");
        let response = self.http.get(&url, Vec::new()).await?;
        let response = ensure_success(response)?;

        crate::transport::decode_sms_status_json_response(&response.body)
    }

    /// Generate and send a one-time password (`POST /otp/generate`).
    pub async fn generate_otp(
        &self,
        request: OtpGenerateRequest,
    ) -> Result<OtpGenerateResponse, TextbeltError> {
        let url = format!("{}/otp/generate", self.base_url);
        let mut params = crate::transport::encode_otp_generate_form(&request);
        self.push_key(&mut params);

        debug!(url = %url, "generating OTP");
        let response = self.http.post_form(&url, params).await?;
        let response = ensure_success(response)?;

        crate::transport::decode_otp_generate_json_response(&response.body)
    }

    /// Verify a user-supplied one-time password (`GET /otp/verify`).
    pub async fn verify_otp(
        &self,
        request: OtpVerifyRequest,
    ) -> Result<OtpVerifyResponse, TextbeltError> {
        let url = format!("{}/otp/verify", self.base_url);
        let mut query = crate::transport::encode_otp_verify_query(&request);
        self.push_key(&mut query);

        debug!(url = %url, "verifying OTP");
        let response = self.http.get(&url, query).await?;
        let response = ensure_success(response)?;

        crate::transport::decode_otp_verify_json_response(&response.body)
    }

    /// Check the remaining credit balance for this API key (`GET /quota/{key}`).
    pub async fn check_credit_balance(&self) -> Result<CreditBalanceResponse, TextbeltError> {
        let url = format!("{}/quota/{}", self.base_url, self.api_key.as_str());

        debug!("checking credit balance");
        let response = self.http.get(&url, Vec::new()).await?;
        let response = ensure_success(response)?;

        crate::transport::decode_credit_balance_json_response(&response.body)
    }

    /// Verify an inbound reply webhook request.
    ///
    /// `timestamp` and `signature` are the raw `X-textbelt-timestamp` and
    /// `X-textbelt-signature` header values; `raw_body` is the unmodified
    /// request body text. Returns `Ok(None)` for stale or mis-signed
    /// requests; see [`crate::webhook::verify`] for the full contract.
    pub fn verify_webhook(
        &self,
        timestamp: &str,
        signature: &str,
        raw_body: &str,
    ) -> Result<Option<WebhookPayload>, TextbeltError> {
        crate::webhook::verify(&self.api_key, timestamp, signature, raw_body)
    }

    fn push_key(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
    }
}

fn ensure_success(response: HttpResponse) -> Result<HttpResponse, TextbeltError> {
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(TextbeltError::transport(HttpStatusError {
            status: response.status,
            body,
        }));
    }
    Ok(response)
}
