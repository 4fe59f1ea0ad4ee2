use crate::adapter::crypto::jwt::JwtTokenVerifier;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;
use std::sync::Arc;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub fn jwt_token_verifier(config: &AppConfig) -> JwtTokenVerifier {
    JwtTokenVerifier::new(&config.auth.jwt_secret)
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    let token_verifier = jwt_token_verifier(config);

    Ok(AppState {
        pool,
        config: Arc::new(config.clone()),
        token_verifier: Arc::new(token_verifier),
    })
}
