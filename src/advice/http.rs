use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::error::AdviceError;
use super::payload::parse_payload;
use super::{Advice, AdviceSource};
use crate::random::{RandomSource, StdRandom};

pub const DEFAULT_ADVICE_URL: &str = "https://api.adviceslip.com/advice";

/// Client timeouts for [`HttpAdviceSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSourceOptions {
    pub connect_timeout: Duration,
    /// `None` waits for the provider indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpSourceOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

/// Fetches advice from an HTTP(S) endpoint with one GET per call.
pub struct HttpAdviceSource {
    client: Client,
    url: String,
    /// Samples collection bodies.
    random: Mutex<Box<dyn RandomSource>>,
}

impl HttpAdviceSource {
    pub fn new(url: impl Into<String>, options: HttpSourceOptions) -> Result<Self, AdviceError> {
        let mut builder = Client::builder().connect_timeout(options.connect_timeout);
        if let Some(request_timeout) = options.request_timeout {
            builder = builder.timeout(request_timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdviceError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            random: Mutex::new(Box::new(StdRandom::from_entropy())),
        })
    }

    /// Replace the sampler used for collection bodies.
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Mutex::new(random);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AdviceSource for HttpAdviceSource {
    async fn fetch_advice(&self) -> Result<Advice, AdviceError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let mut random = self.random.lock();
        parse_payload(&body, &mut **random)
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}
