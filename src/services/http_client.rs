// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Thin JSON-over-HTTP client bound to one base URL.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Failure of a single request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success body did not match the expected shape, or a request body
    /// could not be encoded.
    #[error("undecodable JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Issues JSON requests against `base_url + path`. One attempt per call.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// `GET base_url + path`, decoding the JSON response.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = self.client.get(self.url_for(path));
        self.send("GET", path, request)
    }

    /// `POST base_url + path` with an optional JSON body.
    pub fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.post(self.url_for(path));
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }
        self.send("POST", path, request)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, HttpError> {
        tracing::debug!(method, path, "sending request");
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .inspect_err(|err| tracing::warn!(method, path, error = %err, "request failed"))?;

        let status = response.status();
        let bytes = response.bytes()?;

        if !status.is_success() {
            let message = error_message(&bytes, status.as_u16());
            tracing::warn!(method, path, status = status.as_u16(), %message, "request rejected");
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // An empty success body decodes as JSON `null`.
        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .into_iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> HttpClient {
        HttpClient::new(&Url::parse(&server.base_url()).unwrap())
    }

    #[test]
    fn get_returns_parsed_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/contacts")
                .query_param("orderBy", "asc")
                .header("content-type", "application/json");
            then.status(200).json_body(json!([{"id": 1, "name": "Ann"}]));
        });

        let value: Value = client_for(&server).get("/contacts?orderBy=asc").unwrap();

        mock.assert();
        assert_eq!(value, json!([{"id": 1, "name": "Ann"}]));
    }

    #[test]
    fn get_surfaces_error_message_and_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/contacts");
            then.status(500).json_body(json!({"error": "boom"}));
        });

        let err = client_for(&server).get::<Value>("/contacts").unwrap_err();

        match err {
            HttpError::Status { status, ref message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn unparsable_error_body_falls_back_to_generic_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/contacts");
            then.status(404).body("<html>not found</html>");
        });

        let err = client_for(&server).get::<Value>("/contacts").unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "HTTP 404: Request failed with status 404"
        );
    }

    #[test]
    fn undecodable_success_body_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/contacts");
            then.status(200).body("not json");
        });

        let err = client_for(&server).get::<Value>("/contacts").unwrap_err();

        assert!(matches!(err, HttpError::Decode(_)), "got {err:?}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn post_sends_json_body_and_accepts_empty_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/contacts")
                .header("content-type", "application/json")
                .json_body(json!({"name": "Ann"}));
            then.status(201);
        });

        let value: Value = client_for(&server)
            .post("/contacts", Some(&json!({"name": "Ann"})))
            .unwrap();

        mock.assert();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = HttpClient::new(&Url::parse("http://localhost:3001/").unwrap());
        assert_eq!(client.url_for("/contacts"), "http://localhost:3001/contacts");
    }
}
