use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::account::DeleteAccountInteractor;
use crate::application::interactors::education::{AddEducationInteractor, RemoveEducationInteractor};
use crate::application::interactors::experience::{AddExperienceInteractor, RemoveExperienceInteractor};
use crate::application::interactors::profile::{
    GetOwnProfileInteractor, GetProfileByUserIdInteractor, ListProfilesInteractor, UpsertProfileInteractor,
};
use crate::application::interface::crypto::TokenVerifier;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub config: Arc<AppConfig>,
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// GetOwnProfileInteractor
#[async_trait]
impl FromAppState for GetOwnProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetOwnProfileInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for GetOwnProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetOwnProfileInteractor::from_app_state(&app_state).await
    }
}

// ListProfilesInteractor
#[async_trait]
impl FromAppState for ListProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(ListProfilesInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for ListProfilesInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        ListProfilesInteractor::from_app_state(&app_state).await
    }
}

// GetProfileByUserIdInteractor
#[async_trait]
impl FromAppState for GetProfileByUserIdInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileByUserIdInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for GetProfileByUserIdInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetProfileByUserIdInteractor::from_app_state(&app_state).await
    }
}

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(UpsertProfileInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

impl<S> FromRequestParts<S> for UpsertProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        UpsertProfileInteractor::from_app_state(&app_state).await
    }
}

// DeleteAccountInteractor
#[async_trait]
impl FromAppState for DeleteAccountInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(DeleteAccountInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(user_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for DeleteAccountInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        DeleteAccountInteractor::from_app_state(&app_state).await
    }
}

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(AddExperienceInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

impl<S> FromRequestParts<S> for AddExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        AddExperienceInteractor::from_app_state(&app_state).await
    }
}

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(RemoveExperienceInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveExperienceInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        RemoveExperienceInteractor::from_app_state(&app_state).await
    }
}

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(AddEducationInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

impl<S> FromRequestParts<S> for AddEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        AddEducationInteractor::from_app_state(&app_state).await
    }
}

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session.clone()));

        Ok(RemoveEducationInteractor::new(
            Arc::new(session),
            profile_gateway.clone(),
            profile_gateway,
        ))
    }
}

impl<S> FromRequestParts<S> for RemoveEducationInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        RemoveEducationInteractor::from_app_state(&app_state).await
    }
}
