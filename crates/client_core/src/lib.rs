use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use markup::{render_user_view, RenderedHtml};
use reqwest::Client;
use shared::{FetchError, InvalidUserId, RequestOutcome, UserId, UserRecord};
use thiserror::Error;
use url::Url;

mod encoding;
mod observer;

pub use encoding::encode_uri_component;
pub use observer::{FetchObserver, SilentObserver, TracingObserver};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("user-lookup/", env!("CARGO_PKG_VERSION"));
const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_user(&self, user_id: &str) -> RequestOutcome;
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: RenderedHtml) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    InvalidUserId(#[from] InvalidUserId),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to render view: {source}")]
    Render { source: anyhow::Error },
}

// No de-duplication, cancellation, retries or timeout: each call owns its request.
pub struct UserClient {
    http: Client,
    api_base_url: Url,
    observer: Arc<dyn FetchObserver>,
}

impl UserClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_base_url = parse_api_base_url(&config.api_base_url)?;
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            api_base_url,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!(
            "{}/users/{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            encode_uri_component(user_id)
        )
    }

    pub async fn fetch_user(&self, user_id: &str) -> RequestOutcome {
        let outcome = self.request_user(user_id).await;
        match &outcome {
            Ok(user) => self.observer.on_success(user),
            Err(err) => self.observer.on_failure(err),
        }
        outcome
    }

    async fn request_user(&self, user_id: &str) -> RequestOutcome {
        let url = self.user_url(user_id);
        self.observer.on_request(&url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(describe(e)))?;

        let status = response.status();
        self.observer.on_response(status.as_u16());
        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), status_text(&response)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(describe(e)))?;
        serde_json::from_slice::<UserRecord>(&body).map_err(|e| FetchError::parse(e.to_string()))
    }
}

#[async_trait]
impl UserSource for UserClient {
    async fn fetch_user(&self, user_id: &str) -> RequestOutcome {
        UserClient::fetch_user(self, user_id).await
    }
}

pub struct UserLookup {
    source: Arc<dyn UserSource>,
    renderer: Arc<dyn ViewRenderer>,
    observer: Arc<dyn FetchObserver>,
}

impl UserLookup {
    pub fn new(source: Arc<dyn UserSource>, renderer: Arc<dyn ViewRenderer>) -> Self {
        Self {
            source,
            renderer,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Nothing is rendered unless the fetch succeeds. Failures are reported to the
    /// observer and returned to the caller.
    pub async fn lookup_user(&self, user_id: &str) -> Result<(), LookupError> {
        let result = self.fetch_and_render(user_id).await;
        if let Err(err) = &result {
            self.observer.on_lookup_failed(user_id, err);
        }
        result
    }

    async fn fetch_and_render(&self, user_id: &str) -> Result<(), LookupError> {
        let user_id = UserId::parse(user_id)?;
        let user = self.source.fetch_user(user_id.as_str()).await?;
        let view = render_user_view(&user);
        self.renderer
            .render(view)
            .map_err(|source| LookupError::Render { source })
    }
}

fn parse_api_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid API base url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(
            "API base url '{raw}' must use http or https, got '{}'",
            url.scheme()
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(anyhow!(
            "API base url '{raw}' must not carry a query or fragment"
        ));
    }
    Ok(url)
}

/// Wire reason phrase when the server sent a non-canonical one.
fn status_text(response: &reqwest::Response) -> String {
    let wire = response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).trim().to_string())
        .filter(|reason| !reason.is_empty());
    wire.unwrap_or_else(|| {
        response
            .status()
            .canonical_reason()
            .unwrap_or(UNKNOWN_STATUS_TEXT)
            .to_string()
    })
}

fn describe(err: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::new(err))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
