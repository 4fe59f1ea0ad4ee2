#![cfg(test)]

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::PgPool;
use uuid::Uuid;

use crate::adapter::crypto::jwt::Claims;

pub fn sign_token(user_id: &str, secret: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).expect("sign token")
}

pub fn unique_email() -> String {
    let id = Uuid::now_v7().as_simple().to_string();
    format!("{}@test.example", &id[..16])
}

pub async fn insert_user(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, name, email, password, avatar) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(name)
    .bind(unique_email())
    .bind("not-a-real-hash")
    .bind("//www.gravatar.com/avatar/00000000000000000000000000000000?s=200&r=pg&d=mm")
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete profile");
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn count_profiles(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count profiles")
}

pub async fn user_exists(pool: &PgPool, user_id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("check user")
}
