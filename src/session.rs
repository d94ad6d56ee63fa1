use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// One HTTP client with persistent headers, reused across the page GET
/// and the AJAX POST of a fetch. Constructed once per run and passed
/// explicitly; there is no global session.
pub struct SessionContext {
    transport: Arc<dyn HttpTransport>,
    headers: BTreeMap<String, String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Build a session over a custom transport. Tests use this to
    /// substitute a fake network.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        headers.insert(
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        );
        headers.insert("Accept-Language".to_string(), "en-US,en;q=0.5".to_string());
        Self { transport, headers }
    }

    /// Merge additional persistent headers, overriding on key clash.
    pub fn headers_update<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in mapping {
            self.headers.insert(name.into(), value.into());
        }
    }

    pub async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, FetchError> {
        let mut request = HttpRequest::new(HttpMethod::Get, url, timeout);
        request.headers = self.headers.clone();
        self.transport.execute(request).await
    }

    /// POST a urlencoded form body. `extra` headers take precedence
    /// over the session's persistent ones.
    pub async fn post_form(
        &self,
        url: &str,
        body: String,
        extra: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, FetchError> {
        let mut request = HttpRequest::new(HttpMethod::Post, url, timeout).with_body(body);
        request.headers = self.headers.clone();
        for (name, value) in extra {
            request
                .headers
                .insert((*name).to_string(), (*value).to_string());
        }
        self.transport.execute(request).await
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
