use crate::config::REQUEST_TIMEOUT;
use crate::domain::customer::CustomerRecord;
use crate::domain::ports::MerchantGateway;
use crate::domain::source::{ChargeAmount, SourceId};
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

/// HTTP implementation of [`MerchantGateway`] backed by `reqwest`.
///
/// One instance per client; the underlying connection pool is reused across
/// requests and every request carries the fixed timeout. There is no retry
/// and no caller-side cancellation: a dispatched request runs to completion
/// or times out.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
    customer_id: String,
}

#[derive(Serialize)]
struct ChargeRequest<'a> {
    source: &'a str,
    amount: u64,
    customer: &'a str,
}

#[derive(Serialize)]
struct SourceRequest<'a> {
    customer: &'a str,
    source: &'a str,
}

impl HttpGateway {
    pub fn new(base_url: Url, customer_id: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url,
            customer_id: customer_id.into(),
        })
    }

    /// Appends path segments to the base URL, tolerating the presence or
    /// absence of a trailing slash on the base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Configuration(format!(
                    "base URL {} cannot carry request paths",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post<B: Serialize>(&self, url: Url, body: &B) -> Result<()> {
        log::debug!("POST {url}");
        let response = self.http.post(url).json(body).send().await?;
        check_status(&response)
    }
}

/// Maps any non-2xx status to [`ClientError::Networking`]. Transport-level
/// failures never reach here: reqwest surfaces them before a response exists,
/// and they pass through unchanged.
fn check_status(response: &reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Networking(status.as_u16()))
    }
}

#[async_trait]
impl MerchantGateway for HttpGateway {
    async fn charge(&self, source: &SourceId, amount: ChargeAmount) -> Result<()> {
        let url = self.endpoint(&["charge"])?;
        let body = ChargeRequest {
            source: source.as_str(),
            amount: amount.minor_units(),
            customer: &self.customer_id,
        };
        self.post(url, &body).await
    }

    async fn fetch_sources(&self) -> Result<CustomerRecord> {
        let url = self.endpoint(&["customers", &self.customer_id])?;
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        check_status(&response)?;

        let body = response.bytes().await?;
        CustomerRecord::from_slice(&body)
    }

    async fn select_default_source(&self, source: &SourceId) -> Result<()> {
        let url = self.endpoint(&["customers", &self.customer_id, "select_source"])?;
        let body = SourceRequest {
            customer: &self.customer_id,
            source: source.as_str(),
        };
        self.post(url, &body).await
    }

    async fn attach_source(&self, source: &SourceId) -> Result<()> {
        let url = self.endpoint(&["customers", &self.customer_id, "sources"])?;
        let body = SourceRequest {
            customer: &self.customer_id,
            source: source.as_str(),
        };
        self.post(url, &body).await
    }
}
