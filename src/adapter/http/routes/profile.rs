use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::{ErrorResponse, ValidationErrorResponse};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::profile::{
    AddEducationRequest, AddExperienceRequest, MessageResponse, ProfileResponse, UpsertProfileRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{AddEducationDTO, AddExperienceDTO, RemoveEntryDTO, UpsertProfileDTO};
use crate::application::interactors::account::DeleteAccountInteractor;
use crate::application::interactors::education::{AddEducationInteractor, RemoveEducationInteractor};
use crate::application::interactors::experience::{AddExperienceInteractor, RemoveExperienceInteractor};
use crate::application::interactors::profile::{
    GetOwnProfileInteractor, GetProfileByUserIdInteractor, ListProfilesInteractor, UpsertProfileInteractor,
};

#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "Profile",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = ProfileResponse),
        (
            status = 400,
            description = "The user has no profile",
            body = ErrorResponse,
            example = json!({ "msg": "There is no profile for this user" })
        ),
        (
            status = 401,
            description = "Missing or invalid token",
            body = ErrorResponse,
            example = json!({ "msg": "No token, authorization denied" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn get_own_profile(
    auth_user: AuthUser,
    interactor: GetOwnProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    request_body(
        content = UpsertProfileRequest,
        example = json!(
            {
                "status": "Developer",
                "skills": "rust, postgres, axum",
                "company": "Acme",
                "twitter": "https://twitter.com/jane"
            }
        )
    ),
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (
            status = 400,
            description = "Validation error",
            body = ValidationErrorResponse,
            example = json!(
                {
                    "errors": [
                        { "param": "skills", "msg": "Skill Field is required." },
                        { "param": "status", "msg": "Status Field is required." }
                    ]
                }
            )
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn upsert_profile(
    auth_user: AuthUser,
    interactor: UpsertProfileInteractor,
    ValidJson(payload): ValidJson<UpsertProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user_id: auth_user.user_id,
        company: payload.company,
        website: payload.website,
        location: payload.location,
        bio: payload.bio,
        status: payload.status,
        githubusername: payload.githubusername,
        skills: payload.skills,
        youtube: payload.youtube,
        twitter: payload.twitter,
        facebook: payload.facebook,
        linkedin: payload.linkedin,
        instagram: payload.instagram,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileResponse>),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({ "msg": "Server Error" })
        )
    )
)]
pub async fn list_profiles(interactor: ListProfilesInteractor) -> AppResult<impl IntoResponse> {
    let profiles = interactor.execute().await?;
    let response: Vec<ProfileResponse> = profiles.into_iter().map(ProfileResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "Profile",
    params(("user_id" = String, Path, description = "Id of the profile owner")),
    responses(
        (status = 200, description = "Profile of the given user", body = ProfileResponse),
        (
            status = 400,
            description = "No profile for this user, or the id is malformed",
            body = ErrorResponse,
            example = json!({ "msg": "There is no profile for this user" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_profile_by_user_id(
    interactor: GetProfileByUserIdInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (
            status = 200,
            description = "Profile and user removed",
            body = MessageResponse,
            example = json!({ "msg": "User deleted" })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn delete_account(
    auth_user: AuthUser,
    interactor: DeleteAccountInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            msg: "User deleted".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "Profile",
    request_body(
        content = AddExperienceRequest,
        example = json!(
            {
                "title": "Backend Engineer",
                "company": "Acme",
                "location": "Berlin",
                "from": "2021-03-01",
                "current": true
            }
        )
    ),
    responses(
        (status = 200, description = "Experience added at the head of the list", body = ProfileResponse),
        (status = 400, description = "Validation error or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn add_experience(
    auth_user: AuthUser,
    interactor: AddExperienceInteractor,
    ValidJson(payload): ValidJson<AddExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddExperienceDTO {
        user_id: auth_user.user_id,
        title: payload.title.unwrap_or_default(),
        company: payload.company.unwrap_or_default(),
        location: payload.location,
        from: payload.from.unwrap_or_default(),
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "Profile",
    params(("exp_id" = String, Path, description = "Id of the experience entry")),
    responses(
        (status = 200, description = "Profile after removal; unknown ids leave it unchanged", body = ProfileResponse),
        (status = 400, description = "The user has no profile", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn remove_experience(
    auth_user: AuthUser,
    interactor: RemoveExperienceInteractor,
    Path(exp_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: auth_user.user_id,
        entry_id: exp_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "Profile",
    request_body(
        content = AddEducationRequest,
        example = json!(
            {
                "school": "State University",
                "degree": "BSc",
                "fieldofstudy": "Computer Science",
                "from": "2016-09-01",
                "to": "2020-06-30"
            }
        )
    ),
    responses(
        (status = 200, description = "Education added at the head of the list", body = ProfileResponse),
        (status = 400, description = "Validation error or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn add_education(
    auth_user: AuthUser,
    interactor: AddEducationInteractor,
    ValidJson(payload): ValidJson<AddEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddEducationDTO {
        user_id: auth_user.user_id,
        school: payload.school.unwrap_or_default(),
        degree: payload.degree.unwrap_or_default(),
        fieldofstudy: payload.fieldofstudy.unwrap_or_default(),
        from: payload.from.unwrap_or_default(),
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    tag = "Profile",
    params(("edu_id" = String, Path, description = "Id of the education entry")),
    responses(
        (status = 200, description = "Profile after removal; unknown ids leave it unchanged", body = ProfileResponse),
        (status = 400, description = "The user has no profile", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("tokenAuth" = []))
)]
pub async fn remove_education(
    auth_user: AuthUser,
    interactor: RemoveEducationInteractor,
    Path(edu_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: auth_user.user_id,
        entry_id: edu_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}
