use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::StatusCode;

use crate::{
    error::AuthError,
    types::{AccessToken, Credentials, TokenResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges client credentials for an access token.
    ///
    /// Sends a `POST` to the token endpoint with HTTP Basic authentication
    /// (`base64("{client_id}:{client_secret}")`) and the form body
    /// `grant_type=client_credentials`. The returned token authorizes every
    /// subsequent request of the run and is neither refreshed nor cached.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Transport`] - DNS, connection or timeout failure
    /// - [`AuthError::Status`] - any status other than `200 OK`, with the
    ///   server's response body as message
    /// - [`AuthError::Malformed`] - a `200 OK` body without a string
    ///   `access_token`
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(Endpoints::from_env());
    /// let token = client.acquire_token(&credentials).await?;
    /// ```
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        debug!("Requesting access token from {}", self.endpoints.token_url);

        let response = self
            .http
            .post(&self.endpoints.token_url)
            .header(
                reqwest::header::AUTHORIZATION,
                basic_auth_header(credentials),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(AuthError::Transport)?;

        if status != StatusCode::OK {
            return Err(AuthError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let json: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))?;

        Ok(AccessToken::new(json.access_token))
    }
}

/// Value of the `Authorization` header for the client-credentials grant.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!(
        "{id}:{secret}",
        id = credentials.client_id,
        secret = credentials.client_secret
    );
    format!("Basic {}", STANDARD.encode(pair))
}
