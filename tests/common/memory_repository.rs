use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use coffeeconnect::error::{AppError, AppResult};
use coffeeconnect::models::like::Like;
use coffeeconnect::models::preference::DrinkPreference;
use coffeeconnect::models::user::{AuthenticatedUser, Profile, UserId};
use coffeeconnect::repository::{
    IdentityRepository, LikeRepository, PreferenceRepository, ProfileRepository, Repository,
};

#[derive(Debug, Default)]
struct Inner {
    sessions: HashMap<String, AuthenticatedUser>,
    profiles: HashMap<UserId, Profile>,
    likes: Vec<Like>,
    preferences: HashMap<UserId, DrinkPreference>,
    fail_profile_reads: bool,
    fail_profile_deletes: bool,
    profile_delete_calls: u32,
    identity_delete_calls: u32,
}

/// In-memory stand-in for the external backend, with failure injection and
/// call counting for the partial-failure tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRepository {
    pub async fn add_session(&self, token: &str, user: AuthenticatedUser) {
        let mut inner = self.inner.write().await;
        inner.sessions.insert(token.to_string(), user);
    }

    pub async fn add_profile(&self, profile: Profile) {
        let mut inner = self.inner.write().await;
        inner.profiles.insert(profile.id.clone(), profile);
    }

    pub async fn add_preference(&self, preference: DrinkPreference) {
        let mut inner = self.inner.write().await;
        inner
            .preferences
            .insert(preference.user_id.clone(), preference);
    }

    pub async fn add_like(&self, post_id: &str, user_id: &str) {
        let mut inner = self.inner.write().await;
        inner.likes.push(Like {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        });
    }

    pub async fn fail_profile_reads(&self) {
        self.inner.write().await.fail_profile_reads = true;
    }

    pub async fn fail_profile_deletes(&self) {
        self.inner.write().await.fail_profile_deletes = true;
    }

    pub async fn has_profile(&self, user_id: &str) -> bool {
        self.inner.read().await.profiles.contains_key(user_id)
    }

    pub async fn like_count(&self, post_id: &str, user_id: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .likes
            .iter()
            .filter(|like| like.post_id == post_id && like.user_id == user_id)
            .count()
    }

    pub async fn profile_delete_calls(&self) -> u32 {
        self.inner.read().await.profile_delete_calls
    }

    pub async fn identity_delete_calls(&self) -> u32 {
        self.inner.read().await.identity_delete_calls
    }
}

#[async_trait::async_trait]
impl IdentityRepository for MemoryRepository {
    async fn get_session_user(
        &self,
        bearer_token: &str,
    ) -> AppResult<Option<AuthenticatedUser>> {
        let inner = self.inner.read().await;
        Ok(inner.sessions.get(bearer_token).cloned())
    }

    async fn delete_identity(&self, user_id: &UserId) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.identity_delete_calls += 1;
        inner.sessions.retain(|_, user| &user.id != user_id);

        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileRepository for MemoryRepository {
    async fn get_profile(&self, user_id: &UserId) -> AppResult<Option<Profile>> {
        let inner = self.inner.read().await;
        if inner.fail_profile_reads {
            return Err(AppError::Storage("injected profile read failure".to_string()));
        }

        Ok(inner.profiles.get(user_id).cloned())
    }

    async fn delete_profile(&self, user_id: &UserId) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.profile_delete_calls += 1;
        if inner.fail_profile_deletes {
            return Err(AppError::Storage(
                "injected profile delete failure".to_string(),
            ));
        }

        inner.profiles.remove(user_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl LikeRepository for MemoryRepository {
    async fn like_exists(&self, post_id: &str, user_id: &UserId) -> AppResult<bool> {
        let inner = self.inner.read().await;
        let exists = inner
            .likes
            .iter()
            .any(|like| like.post_id == post_id && &like.user_id == user_id);

        Ok(exists)
    }

    async fn insert_like(&self, like: Like) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        // Mirrors the backend's unique (post_id, user_id) index.
        if inner
            .likes
            .iter()
            .any(|existing| existing.post_id == like.post_id && existing.user_id == like.user_id)
        {
            return Err(AppError::AlreadyLiked);
        }

        inner.likes.push(like);
        Ok(())
    }

    async fn delete_like(&self, post_id: &str, user_id: &UserId) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .likes
            .retain(|like| !(like.post_id == post_id && &like.user_id == user_id));

        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceRepository for MemoryRepository {
    async fn get_drink_preference(
        &self,
        user_id: &UserId,
    ) -> AppResult<Option<DrinkPreference>> {
        let inner = self.inner.read().await;
        Ok(inner.preferences.get(user_id).cloned())
    }
}

impl Repository for MemoryRepository {}
