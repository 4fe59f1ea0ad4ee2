use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch, ProfileView};
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>>;
    /// Same as `find_by_user`, but holds a row lock until the session commits.
    async fn find_by_user_for_update(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>>;
    async fn list(&self) -> AppResult<Vec<ProfileView>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
    async fn update(&self, user_id: &Id<User>, patch: ProfilePatch) -> AppResult<()>;
    async fn update_entries(&self, profile: Profile) -> AppResult<()>;
    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()>;
}
