use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> AppResult<Id<User>>;
}
