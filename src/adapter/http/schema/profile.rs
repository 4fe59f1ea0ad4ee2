use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::dto::profile::{EducationDTO, ExperienceDTO, ProfileDTO, ProfileOwnerDTO};
use crate::domain::entities::profile::{DATE_FORMAT, Social};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[validate(
        required(message = "Status Field is required."),
        length(min = 1, message = "Status Field is required.")
    )]
    pub status: Option<String>,
    pub githubusername: Option<String>,
    #[schema(example = "rust, postgres, axum")]
    #[validate(
        required(message = "Skill Field is required."),
        length(min = 1, message = "Skill Field is required.")
    )]
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExperienceRequest {
    #[validate(
        required(message = "Title field is required."),
        length(min = 1, message = "Title field is required.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Company field is required."),
        length(min = 1, message = "Company field is required.")
    )]
    pub company: Option<String>,
    pub location: Option<String>,
    #[schema(example = "2021-03-01")]
    #[validate(
        required(message = "From field is required."),
        length(min = 1, message = "From field is required."),
        custom(function = "valid_date", message = "From must be a date (YYYY-MM-DD).")
    )]
    pub from: Option<String>,
    #[validate(custom(function = "valid_date", message = "To must be a date (YYYY-MM-DD)."))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEducationRequest {
    #[validate(
        required(message = "School Field is required."),
        length(min = 1, message = "School Field is required.")
    )]
    pub school: Option<String>,
    #[validate(
        required(message = "Degree Field is required."),
        length(min = 1, message = "Degree Field is required.")
    )]
    pub degree: Option<String>,
    #[validate(
        required(message = "Study Field is required."),
        length(min = 1, message = "Study Field is required.")
    )]
    pub fieldofstudy: Option<String>,
    #[schema(example = "2016-09-01")]
    #[validate(
        required(message = "From Field is required."),
        length(min = 1, message = "From Field is required."),
        custom(function = "valid_date", message = "From must be a date (YYYY-MM-DD).")
    )]
    pub from: Option<String>,
    #[validate(custom(function = "valid_date", message = "To must be a date (YYYY-MM-DD)."))]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

// Empty values are left to the `length` rule.
fn valid_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_date"))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileOwnerResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub user: ProfileOwnerResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialResponse,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub date: DateTime<Utc>,
}

impl From<ProfileOwnerDTO> for ProfileOwnerResponse {
    fn from(owner: ProfileOwnerDTO) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            avatar: owner.avatar,
        }
    }
}

impl From<Social> for SocialResponse {
    fn from(social: Social) -> Self {
        Self {
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            linkedin: social.linkedin,
            instagram: social.instagram,
        }
    }
}

impl From<ExperienceDTO> for ExperienceResponse {
    fn from(experience: ExperienceDTO) -> Self {
        Self {
            id: experience.id,
            title: experience.title,
            company: experience.company,
            location: experience.location,
            from: experience.from,
            to: experience.to,
            current: experience.current,
            description: experience.description,
        }
    }
}

impl From<EducationDTO> for EducationResponse {
    fn from(education: EducationDTO) -> Self {
        Self {
            id: education.id,
            school: education.school,
            degree: education.degree,
            fieldofstudy: education.fieldofstudy,
            from: education.from,
            to: education.to,
            current: education.current,
            description: education.description,
        }
    }
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(profile: ProfileDTO) -> Self {
        Self {
            id: profile.id,
            user: profile.user.into(),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            githubusername: profile.githubusername,
            skills: profile.skills,
            social: profile.social.into(),
            experience: profile.experience.into_iter().map(ExperienceResponse::from).collect(),
            education: profile.education.into_iter().map(EducationResponse::from).collect(),
            date: profile.date,
        }
    }
}
