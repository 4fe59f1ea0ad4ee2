use axum::{Json, response::Html};
use utoipa::{
    Modify, OpenApi,
    openapi::{
        OpenApi as OpenApiDoc,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

use crate::adapter::http::{
    app_error_impl::{ErrorResponse, FieldError, ValidationErrorResponse},
    routes::profile,
    schema::profile::{
        AddEducationRequest, AddExperienceRequest, EducationResponse, ExperienceResponse, MessageResponse,
        ProfileOwnerResponse, ProfileResponse, SocialResponse, UpsertProfileRequest,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "tokenAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-auth-token"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        profile::get_own_profile,
        profile::upsert_profile,
        profile::list_profiles,
        profile::get_profile_by_user_id,
        profile::delete_account,
        profile::add_experience,
        profile::remove_experience,
        profile::add_education,
        profile::remove_education
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            ValidationErrorResponse,
            MessageResponse,
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            ProfileResponse,
            ProfileOwnerResponse,
            SocialResponse,
            ExperienceResponse,
            EducationResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Developer profiles API</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
