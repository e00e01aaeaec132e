use log::info;
use reqwest::Client;
use serde_json::json;

use crate::error::DirectoryError;
use crate::models::{DraftCreate, User};

/// A trait, necessary for every entity that will serve as the user directory
/// backend. Mirrors the consumed REST contract one method per endpoint.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// `GET /users`, the full collection in server append-order.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;
    /// `POST /users`, returns the created user with its server-assigned id.
    async fn create_user(&self, draft: &DraftCreate) -> Result<User, DirectoryError>;
    /// `PUT /users/{id}` with `{name, email}`; the id travels in the path
    /// only. The response body is not consumed beyond the status.
    async fn update_user(&self, id: u32, name: &str, email: &str) -> Result<(), DirectoryError>;
    /// `DELETE /users/{id}`; any 2xx counts as success.
    async fn delete_user(&self, id: u32) -> Result<(), DirectoryError>;
}

/// The real backend: a reqwest Client pointed at a configured endpoint root.
pub struct RestDirectory {
    http: Client,
    base_url: String,
}

impl RestDirectory {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Allows to use a reqwest Client for all four directory operations via
/// requests to the configured service.
impl UserDirectory for RestDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        info!("Getting users from {}", self.base_url);
        let request_url = format!("{}/users", self.base_url);
        let response = self.http.get(request_url).send().await?;
        let users = response.error_for_status()?.json().await?;
        Ok(users)
    }

    async fn create_user(&self, draft: &DraftCreate) -> Result<User, DirectoryError> {
        info!("Creating user {:?}", draft.name);
        let request_url = format!("{}/users", self.base_url);
        let response = self.http.post(request_url).json(draft).send().await?;
        let user = response.error_for_status()?.json().await?;
        Ok(user)
    }

    async fn update_user(&self, id: u32, name: &str, email: &str) -> Result<(), DirectoryError> {
        info!("Updating user {}", id);
        let request_url = format!("{}/users/{}", self.base_url, id);
        let response = self
            .http
            .put(request_url)
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    async fn delete_user(&self, id: u32) -> Result<(), DirectoryError> {
        info!("Deleting user {}", id);
        let request_url = format!("{}/users/{}", self.base_url, id);
        let response = self.http.delete(request_url).send().await?;
        response.error_for_status()?;
        Ok(())
    }
}
