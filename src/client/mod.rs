//! Submitting the two documents to the compare server.

pub mod csrf;
pub mod multipart;
pub mod worker;

use std::time::Duration;

use ureq::Agent;

use crate::error::{DoccmpError, Result};
use crate::model::{DiffResult, PickedFile, SlotId};

pub use multipart::MultipartForm;
pub use worker::{CompareJob, CompareReply, CompareWorker};

pub const COMPARE_PATH: &str = "/api/compare/";
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

/// Status and body of a reply, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// A prepared compare upload.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub url: String,
    pub csrf_token: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// HTTP seam of the client
pub trait CompareTransport: Send {
    /// Load the server's index page and return the CSRF cookie it sets.
    fn fetch_csrf_cookie(&self, base_url: &str) -> Result<Option<String>>;

    /// Send the upload. Non-2xx statuses are replies, not errors.
    fn post_compare(&self, request: &CompareRequest) -> Result<RawResponse>;
}

pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl CompareTransport for HttpTransport {
    fn fetch_csrf_cookie(&self, base_url: &str) -> Result<Option<String>> {
        let url = join_url(base_url, "/");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| DoccmpError::Transport(format!("GET {url}: {e}")))?;

        let cookies = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|value| value.to_str().ok());
        Ok(csrf::token_from_set_cookie(cookies))
    }

    fn post_compare(&self, request: &CompareRequest) -> Result<RawResponse> {
        let mut builder = self
            .agent
            .post(&request.url)
            .header(csrf::CSRF_HEADER, &request.csrf_token)
            .header("Content-Type", &request.content_type)
            .header("Accept", "application/json");
        if !request.csrf_token.is_empty() {
            builder = builder.header(
                "Cookie",
                format!("{}={}", csrf::CSRF_COOKIE, request.csrf_token),
            );
        }

        let response = builder
            .send(&request.body[..])
            .map_err(|e| DoccmpError::Transport(format!("POST {}: {e}", request.url)))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| DoccmpError::Transport(format!("reading reply: {e}")))?;

        Ok(RawResponse { status, body })
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Token configured by the user: either the bare token or a copied `Cookie`
/// header containing `csrftoken=…`.
pub fn configured_token(value: &str) -> Option<String> {
    let value = value.trim();
    if value.contains('=') {
        csrf::token_from_cookie_header(value)
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Map a reply to results or an error message.
///
/// The body is parsed as JSON regardless of status. A failing status or a
/// truthy `error` field is a server error; a body that is not the expected
/// JSON is treated like a failed request.
pub fn interpret_response(response: &RawResponse) -> Result<DiffResult> {
    let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
        DoccmpError::Transport(format!(
            "HTTP {} with unparseable body: {e}",
            response.status
        ))
    })?;

    let ok = (200..300).contains(&response.status);
    let error = value.get("error").filter(|e| is_truthy(e));
    if !ok || error.is_some() {
        let message = error
            .and_then(|e| e.as_str())
            .unwrap_or(GENERIC_SERVER_ERROR);
        return Err(DoccmpError::Server(message.to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| DoccmpError::Transport(format!("unexpected reply shape: {e}")))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub struct CompareClient<T: CompareTransport> {
    transport: T,
    configured_token: Option<String>,
    /// Server the cached token was issued by, and the token
    session_token: Option<(String, String)>,
}

impl<T: CompareTransport> CompareClient<T> {
    pub fn new(transport: T, configured_token: Option<String>) -> Self {
        Self {
            transport,
            configured_token,
            session_token: None,
        }
    }

    /// Upload both files to `server` and interpret the reply.
    pub fn compare(
        &mut self,
        server: &str,
        original: &PickedFile,
        modified: &PickedFile,
    ) -> Result<DiffResult> {
        let mut form = MultipartForm::new();
        for (slot, file) in [(SlotId::Original, original), (SlotId::Modified, modified)] {
            let data = std::fs::read(&file.path).map_err(|e| {
                DoccmpError::Transport(format!("reading {}: {e}", file.path.display()))
            })?;
            form.add_file(
                slot.field_name(),
                &file.name,
                file.upload_content_type(),
                &data,
            );
        }
        let (content_type, body) = form.finish();

        let request = CompareRequest {
            url: join_url(server, COMPARE_PATH),
            csrf_token: self.csrf_token(server),
            content_type,
            body,
        };

        log::info!(
            "POST {} ({} bytes, {} vs {})",
            request.url,
            request.body.len(),
            original.name,
            modified.name
        );
        let response = self.transport.post_compare(&request)?;
        log::info!("compare replied HTTP {}", response.status);

        interpret_response(&response)
    }

    /// The configured token, else the session cookie of `server`, fetched
    /// once. An unavailable cookie yields an empty token.
    fn csrf_token(&mut self, server: &str) -> String {
        if let Some(token) = &self.configured_token {
            return token.clone();
        }
        if let Some((issuer, token)) = &self.session_token
            && issuer == server
        {
            return token.clone();
        }

        match self.transport.fetch_csrf_cookie(server) {
            Ok(Some(token)) => {
                log::debug!("obtained CSRF cookie from {server}");
                self.session_token = Some((server.to_string(), token.clone()));
                token
            }
            Ok(None) => {
                log::warn!("{server} did not set a {} cookie", csrf::CSRF_COOKIE);
                String::new()
            }
            Err(e) => {
                log::warn!("CSRF bootstrap failed: {}", e.detail());
                String::new()
            }
        }
    }
}
