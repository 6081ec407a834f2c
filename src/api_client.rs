use crate::error::ApiError;
use reqwest::{
    blocking::Client,
    header::{self, HeaderMap, HeaderValue},
};

pub const DEFAULT_BASE_URL: &str = "https://integrations-assignment-ticketforge.vercel.app";

const ACCEPT: &str = "application/json, text/plain, */*";
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const X_REQUESTED_WITH: &str = "x-requested-with";

/// Status and body of a completed request, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub trait Fetch {
    fn url(&self, path: &str) -> String;
    fn get(&self, path: &str) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client: ApiClient::build_client(&base_url, token)?,
            base_url,
        })
    }

    fn build_client(base_url: &str, token: &str) -> Result<Client, ApiError> {
        Client::builder()
            .default_headers(build_headers(base_url, token)?)
            .build()
            .map_err(|err| ApiError::Client(err.to_string()))
    }
}

impl Fetch for ApiClient {
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let transport = |err: reqwest::Error| ApiError::Transport {
            url: url.clone(),
            message: err.to_string(),
        };

        let response = self.client.get(&url).send().map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport)?;
        log::debug!("{url} answered {status} with {} bytes", body.len());

        Ok(ApiResponse { status, body })
    }
}

/// Header set that makes the request look like it came from the web app.
pub fn build_headers(base_url: &str, token: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&format!("Basic {token}"))?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(&format!("{}/mine", base_url.trim_end_matches('/')))?,
    );
    headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_basic_token() {
        let headers = build_headers(DEFAULT_BASE_URL, "ABC123").unwrap();

        let auth = headers.get(header::AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Basic ABC123");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn headers_mimic_browser_request() {
        let headers = build_headers("https://tickets.test/", "t").unwrap();

        assert_eq!(headers.len(), 5);
        assert_eq!(headers[header::ACCEPT], ACCEPT);
        assert!(headers[header::USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("Mozilla/5.0"));
        assert_eq!(headers[header::REFERER], "https://tickets.test/mine");
        assert_eq!(headers["X-Requested-With"], "XMLHttpRequest");
    }

    #[test]
    fn rejects_token_with_control_characters() {
        assert!(matches!(
            build_headers(DEFAULT_BASE_URL, "bad\ntoken"),
            Err(ApiError::Header(_))
        ));
    }

    #[test]
    fn joins_paths_onto_base_url() {
        let client = ApiClient::new("https://tickets.test/", "t").unwrap();
        assert_eq!(client.url("api/tickets"), "https://tickets.test/api/tickets");
    }
}
