use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiMessage, AuthResponse, LoginRequest, RegisterRequest, SummaryResponse, Transaction,
    TransactionPage, TransactionPayload, UserProfile,
};

use crate::state::filters::FilterState;

pub const API_BASE_URL: &str = "http://localhost:5000";

/// How a request against the backend can fail, from the user's point of view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend rejected the credential. The session store
    /// treats this as an expired token, not a hard error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }
}

/// API client for the expense tracker backend.
///
/// Holds the bearer token for the current session; every protected request
/// goes through [`authorize`](Self::authorize) so the header is attached in
/// exactly one place.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Anonymous client against the default base URL.
    pub fn new() -> Self {
        Self::with_token(None)
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            token,
        }
    }

    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Map a non-ok response to [`ApiError`], preferring the backend's own
    /// `{message}` body over a canned string.
    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(_) if status >= 500 => "Server error".to_string(),
            Err(_) => format!("Request failed ({})", status),
        };
        ApiError::Api { status, message }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&format!("{}/api/auth/login", self.base_url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&format!("{}/api/auth/register", self.base_url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Validate the stored credential against the "who am I" endpoint.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let response = self
            .authorize(Request::get(&format!("{}/api/auth/me", self.base_url)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// One page of the filtered transaction listing.
    pub async fn list_transactions(&self, filters: &FilterState) -> Result<TransactionPage, ApiError> {
        let pairs = filters.query_pairs();
        let query: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let response = self
            .authorize(
                Request::get(&format!("{}/api/transactions", self.base_url)).query(query),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// The most recent transactions, for the dashboard.
    pub async fn recent_transactions(&self, limit: u32) -> Result<TransactionPage, ApiError> {
        let limit = limit.to_string();
        let response = self
            .authorize(
                Request::get(&format!("{}/api/transactions", self.base_url))
                    .query([("limit", limit.as_str())]),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn summary(&self) -> Result<SummaryResponse, ApiError> {
        let response = self
            .authorize(Request::get(&format!(
                "{}/api/transactions/summary",
                self.base_url
            )))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        let response = self
            .authorize(Request::post(&format!("{}/api/transactions", self.base_url)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<Transaction, ApiError> {
        let response = self
            .authorize(Request::put(&format!(
                "{}/api/transactions/{}",
                self.base_url, id
            )))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&format!(
                "{}/api/transactions/{}",
                self.base_url, id
            )))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_only_the_401_status() {
        let expired = ApiError::Api {
            status: 401,
            message: "Not authorized".to_string(),
        };
        assert!(expired.is_unauthorized());

        let bad_request = ApiError::Api {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert!(!bad_request.is_unauthorized());
        assert!(!ApiError::Network("timeout".to_string()).is_unauthorized());
    }

    #[test]
    fn api_error_displays_the_server_message() {
        let err = ApiError::Api {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert_eq!(err.to_string(), "Title is required");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn a_client_holding_a_token_sends_it_as_a_bearer_header() {
        let client =
            ApiClient::with_base_url("http://api.test".to_string(), Some("tok123".to_string()));
        let request = client
            .authorize(Request::get("http://api.test/api/transactions"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").as_deref(),
            Some("Bearer tok123")
        );
    }

    #[wasm_bindgen_test]
    fn an_anonymous_client_sends_no_authorization_header() {
        let client = ApiClient::with_base_url("http://api.test".to_string(), None);
        let request = client
            .authorize(Request::get("http://api.test/api/transactions"))
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }
}
