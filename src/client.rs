//! HTTP client for the SolarWinds Service Desk user API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, UserQuery},
    types::{User, UserEnvelope, UserID, UserPayload},
    Error,
};

/// HTTP client for the SolarWinds Service Desk user API.
///
/// Authenticates with a caller-supplied API token sent on every request.
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.samanage.com`.
    base_api_url: String,
    /// API token, sent as `X-Samanage-Authorization: Bearer <token>`.
    token: String,
}

impl Client {
    /// Creates a new client pointing at the production Service Desk API.
    pub fn new(token: &str) -> Self {
        Self {
            base_api_url: "https://api.samanage.com".to_string(),
            token: token.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            token: token.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::network(e)
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn request(&self, method: Method, url: Url) -> Result<reqwest::RequestBuilder, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::network(e)
            })?;
        Ok(client
            .request(method, url)
            .header(
                "X-Samanage-Authorization",
                format!("Bearer {}", self.token),
            )
            .header("Accept", "application/vnd.samanage.v2.1+json")
            .header("Content-Type", "application/json"))
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::network(e)
        })?;
        resp.error_for_status().map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::network(e)
        })
    }

    async fn fetch<T>(&self, req: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self.execute(req).await?;
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::network(e)
        })?;
        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::network(e)
        })?;
        Ok(parsed)
    }

    /// Fetches the users matching the given query.
    pub async fn get_users(&self, query: &UserQuery) -> Result<Vec<User>, Error> {
        let url = self.get_url("/users.json", Some(query))?;
        self.fetch(self.request(Method::GET, url)?).await
    }

    /// Fetches a single user by its numeric ID.
    pub async fn get_user(&self, user_id: UserID) -> Result<User, Error> {
        let url = self.get_url(format!("/users/{}.json", user_id).as_str(), None::<&UserQuery>)?;
        self.fetch(self.request(Method::GET, url)?).await
    }

    /// Looks up a user by email address. Returns `None` when no account
    /// matches exactly (the API filter can return partial matches).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let users = self
            .get_users(&UserQuery::default().with_email(email))
            .await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    /// Creates a new user account and returns the created record.
    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, Error> {
        let url = self.get_url("/users.json", None::<&UserQuery>)?;
        let req = self
            .request(Method::POST, url)?
            .json(&UserEnvelope { user: payload });
        self.fetch(req).await
    }

    /// Updates an existing user account and returns the updated record.
    pub async fn update_user(&self, user_id: UserID, payload: &UserPayload) -> Result<User, Error> {
        let url = self.get_url(format!("/users/{}.json", user_id).as_str(), None::<&UserQuery>)?;
        let req = self
            .request(Method::PUT, url)?
            .json(&UserEnvelope { user: payload });
        self.fetch(req).await
    }

    /// Marks a user account as disabled. Required before deletion.
    pub async fn deactivate_user(&self, user_id: UserID) -> Result<User, Error> {
        self.update_user(user_id, &UserPayload::default().with_disabled(true))
            .await
    }

    /// Deletes a disabled user account. Refuses to delete an account that is
    /// still active, without issuing any request.
    pub async fn delete_user(&self, user: &User) -> Result<(), Error> {
        if user.is_active() {
            tracing::error!("Refusing to delete active user {}", user.email);
            return Err(Error::attempt_delete_active_user(&user.email));
        }
        let url = self.get_url(format!("/users/{}.json", user.id).as_str(), None::<&UserQuery>)?;
        self.execute(self.request(Method::DELETE, url)?).await?;
        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
