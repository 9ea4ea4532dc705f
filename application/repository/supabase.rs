use http::StatusCode;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::like::Like;
use crate::models::preference::DrinkPreference;
use crate::models::user::{AuthenticatedUser, Profile, UserId};
use crate::repository::{
    IdentityRepository, LikeRepository, PreferenceRepository, ProfileRepository, Repository,
};

/// Backend client speaking the managed backend's REST surface: PostgREST for
/// the relational tables, GoTrue for sessions and identity administration.
/// Holds the service key, so row-level policies are bypassed; authorization
/// is enforced by the handlers before any call lands here.
#[derive(Clone)]
pub struct SupabaseRepository {
    http: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseRepository {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            service_key,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn with_service_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

fn storage_error(err: reqwest::Error) -> AppError {
    AppError::Storage(err.to_string())
}

async fn expect_success(response: Response, operation: &'static str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::Storage(format!(
        "{operation} returned {status}: {body}"
    )))
}

#[async_trait::async_trait]
impl IdentityRepository for SupabaseRepository {
    async fn get_session_user(
        &self,
        bearer_token: &str,
    ) -> AppResult<Option<AuthenticatedUser>> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(storage_error)?;

        // An expired or bogus token is "no session", not a failure.
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }

        let response = expect_success(response, "session lookup").await?;
        let user = response
            .json::<AuthenticatedUser>()
            .await
            .map_err(storage_error)?;

        Ok(Some(user))
    }

    async fn delete_identity(&self, user_id: &UserId) -> AppResult<()> {
        let url = format!("{}/auth/v1/admin/users/{}", self.base_url, user_id);
        let response = self
            .with_service_auth(self.http.delete(url))
            .send()
            .await
            .map_err(storage_error)?;
        expect_success(response, "identity delete").await?;

        info!(user_id = %user_id, "deleted auth identity");
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileRepository for SupabaseRepository {
    async fn get_profile(&self, user_id: &UserId) -> AppResult<Option<Profile>> {
        let response = self
            .with_service_auth(self.http.get(self.rest_url("profiles")))
            .query(&[("id", format!("eq.{user_id}")), ("select", "*".to_string())])
            .send()
            .await
            .map_err(storage_error)?;
        let response = expect_success(response, "profile lookup").await?;

        let rows = response.json::<Vec<Profile>>().await.map_err(storage_error)?;
        Ok(rows.into_iter().next())
    }

    async fn delete_profile(&self, user_id: &UserId) -> AppResult<()> {
        let response = self
            .with_service_auth(self.http.delete(self.rest_url("profiles")))
            .query(&[("id", format!("eq.{user_id}"))])
            .send()
            .await
            .map_err(storage_error)?;
        expect_success(response, "profile delete").await?;

        info!(user_id = %user_id, "deleted profile row");
        Ok(())
    }
}

#[async_trait::async_trait]
impl LikeRepository for SupabaseRepository {
    async fn like_exists(&self, post_id: &str, user_id: &UserId) -> AppResult<bool> {
        let response = self
            .with_service_auth(self.http.get(self.rest_url("likes")))
            .query(&[
                ("post_id", format!("eq.{post_id}")),
                ("user_id", format!("eq.{user_id}")),
                ("select", "post_id".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(storage_error)?;
        let response = expect_success(response, "like lookup").await?;

        let rows = response.json::<Vec<Value>>().await.map_err(storage_error)?;
        Ok(!rows.is_empty())
    }

    async fn insert_like(&self, like: Like) -> AppResult<()> {
        let response = self
            .with_service_auth(self.http.post(self.rest_url("likes")))
            .header("Prefer", "return=minimal")
            .json(&like)
            .send()
            .await
            .map_err(storage_error)?;

        // The unique (post_id, user_id) index turns a concurrent duplicate
        // insert into a conflict rather than a second row.
        if response.status() == StatusCode::CONFLICT {
            return Err(AppError::AlreadyLiked);
        }
        expect_success(response, "like insert").await?;

        Ok(())
    }

    async fn delete_like(&self, post_id: &str, user_id: &UserId) -> AppResult<()> {
        let response = self
            .with_service_auth(self.http.delete(self.rest_url("likes")))
            .query(&[
                ("post_id", format!("eq.{post_id}")),
                ("user_id", format!("eq.{user_id}")),
            ])
            .send()
            .await
            .map_err(storage_error)?;
        expect_success(response, "like delete").await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceRepository for SupabaseRepository {
    async fn get_drink_preference(
        &self,
        user_id: &UserId,
    ) -> AppResult<Option<DrinkPreference>> {
        let response = self
            .with_service_auth(self.http.get(self.rest_url("drink_preferences")))
            .query(&[
                ("user_id", format!("eq.{user_id}")),
                ("select", "*".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(storage_error)?;
        let response = expect_success(response, "drink preference lookup").await?;

        let rows = response
            .json::<Vec<DrinkPreference>>()
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().next())
    }
}

impl Repository for SupabaseRepository {}
