use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::output::Output;

use super::methods;
use super::models::UserRecord;

const USER_AGENT_VALUE: &str = "OpenVK-CLI-Client/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenVkClient {
    http: Client,
    base_url: Url,
    access_token: String,
    api_version: String,
    output: Output,
}

impl OpenVkClient {
    pub fn new(settings: &Settings, output: Output) -> AppResult<Self> {
        // Url::join drops the last path segment unless the base ends in a
        // slash, so normalize `https://host/method` style configs.
        let mut base = settings.base_url().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: settings.access_token()?.to_string(),
            api_version: settings.api_version().to_string(),
            output,
        })
    }

    pub async fn resolve_screen_name(&self, screen_name: &str) -> AppResult<u64> {
        let url = self.method_url(methods::RESOLVE_SCREEN_NAME)?;
        let query = methods::resolve_query(&self.access_token, &self.api_version, screen_name);

        let response = self.http.get(url).query(&query).send().await?;
        self.output
            .debug(&format!("resolve url: {}", response.url()));

        let body = response.text().await?;
        self.output
            .debug(&format!("resolve body: {}", snippet(&body)));

        parse_resolve_body(&body)
            .ok_or_else(|| AppError::NotFound(format!("no profile matches `{screen_name}`")))
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<UserRecord> {
        let url = self.method_url(methods::USERS_GET)?;
        let query = methods::users_get_query(&self.access_token, &self.api_version, user_id);

        let mut request = self.http.get(url).query(&query);
        if let Some(origin) = self.instance_origin() {
            request = request
                .header(ORIGIN, origin.clone())
                .header(REFERER, format!("{origin}/"));
        }

        let response = request.send().await?;
        self.output
            .debug(&format!("users.get url: {}", response.url()));

        let status = response.status();
        self.output.debug(&format!("users.get status: {status}"));
        if status != StatusCode::OK {
            return Err(AppError::Status(status));
        }

        let body = response.text().await?;
        self.output
            .debug(&format!("users.get body: {}", snippet(&body)));

        parse_users_body(&body)
    }

    pub fn profile_link(&self, user_id: u64) -> String {
        match self.instance_origin() {
            Some(origin) => format!("{origin}/id{user_id}"),
            None => format!("https://ovk.to/id{user_id}"),
        }
    }

    fn method_url(&self, method: &str) -> AppResult<Url> {
        Ok(self.base_url.join(method)?)
    }

    fn instance_origin(&self) -> Option<String> {
        let host = self.base_url.host_str()?;
        Some(format!("{}://{}", self.base_url.scheme(), host))
    }
}

#[derive(Debug, Deserialize)]
struct ResolveEnvelope {
    #[serde(default)]
    response: Option<ResolveTarget>,
}

#[derive(Debug, Deserialize)]
struct ResolveTarget {
    #[serde(default)]
    object_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    response: Option<Vec<UserRecord>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_msg: Option<String>,
}

fn parse_resolve_body(body: &str) -> Option<u64> {
    let envelope = serde_json::from_str::<ResolveEnvelope>(body).ok()?;
    envelope
        .response
        .and_then(|target| target.object_id)
        .filter(|object_id| *object_id != 0)
}

fn parse_users_body(body: &str) -> AppResult<UserRecord> {
    let envelope: UsersEnvelope =
        serde_json::from_str(body).map_err(|_| AppError::Malformed(snippet(body)))?;

    if let Some(error) = envelope.error {
        let code = error
            .error_code
            .map(|code| code.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let message = error
            .error_msg
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(AppError::Api(format!("[{code}] {message}")));
    }

    let record = envelope.response.unwrap_or_default().into_iter().next();
    match record {
        // A zero id is the server's "nobody here" sentinel.
        Some(record) if record.id != 0 => Ok(record),
        _ => Err(AppError::NotFound(
            "profile data missing from response".to_string(),
        )),
    }
}

fn snippet(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }

    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    if end < body.len() {
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_body_yields_object_id() {
        assert_eq!(
            parse_resolve_body(r#"{"response": {"type": "user", "object_id": 42}}"#),
            Some(42)
        );
    }

    #[test]
    fn resolve_body_with_null_response_is_not_found() {
        assert_eq!(parse_resolve_body(r#"{"response": null}"#), None);
        assert_eq!(parse_resolve_body(r#"{}"#), None);
        assert_eq!(parse_resolve_body(r#"{"response": {}}"#), None);
    }

    #[test]
    fn resolve_body_with_zero_object_id_is_not_found() {
        assert_eq!(parse_resolve_body(r#"{"response": {"object_id": 0}}"#), None);
    }

    #[test]
    fn non_json_resolve_body_is_not_found() {
        assert_eq!(parse_resolve_body("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn users_body_yields_first_record() {
        let record = parse_users_body(
            r#"{"response": [{"id": 9, "first_name": "Ada", "last_name": "L"}]}"#,
        )
        .expect("record should parse");

        assert_eq!(record.id, 9);
        assert_eq!(record.display_name(), "Ada L");
    }

    #[test]
    fn users_body_with_zero_id_is_not_found() {
        let error = parse_users_body(r#"{"response": [{"id": 0}]}"#);
        match error {
            Err(AppError::NotFound(message)) => {
                assert!(message.contains("missing from response"));
            }
            other => panic!("expected not-found error, got {other:?}"),
        }
    }

    #[test]
    fn users_body_with_empty_response_is_not_found() {
        assert!(matches!(
            parse_users_body(r#"{"response": []}"#),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            parse_users_body(r#"{}"#),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn users_body_error_envelope_reports_code_and_message() {
        let error = parse_users_body(r#"{"error": {"error_code": 5, "error_msg": "x"}}"#);
        match error {
            Err(AppError::Api(message)) => {
                assert!(message.contains("[5]"));
                assert!(message.contains('x'));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn users_body_error_without_code_reports_placeholder() {
        let error = parse_users_body(r#"{"error": {"error_msg": "down"}}"#);
        match error {
            Err(AppError::Api(message)) => {
                assert!(message.contains("[N/A]"));
                assert!(message.contains("down"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_users_body_is_malformed() {
        let error = parse_users_body("<html>Service Unavailable</html>");
        match error {
            Err(AppError::Malformed(message)) => {
                assert!(message.contains("Service Unavailable"));
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn snippet_truncates_long_bodies_on_char_boundaries() {
        let long = "п".repeat(300);
        let cut = snippet(&long);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 203);
    }
}
