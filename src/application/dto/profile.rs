use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::profile::{Education, Experience, ProfileView, Social};

#[derive(Debug, Clone, Default)]
pub struct UpsertProfileDTO {
    pub user_id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddEducationDTO {
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveEntryDTO {
    pub user_id: String,
    pub entry_id: String,
}

#[derive(Debug, Clone)]
pub struct ProfileOwnerDTO {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExperienceDTO {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EducationDTO {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user: ProfileOwnerDTO,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<ExperienceDTO>,
    pub education: Vec<EducationDTO>,
    pub date: DateTime<Utc>,
}

impl From<Experience> for ExperienceDTO {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id.to_string(),
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

impl From<Education> for EducationDTO {
    fn from(education: Education) -> Self {
        Self {
            id: education.id.to_string(),
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

impl From<ProfileView> for ProfileDTO {
    fn from(view: ProfileView) -> Self {
        let ProfileView { profile, owner } = view;
        Self {
            id: profile.id.to_string(),
            user: ProfileOwnerDTO {
                id: owner.id.to_string(),
                name: owner.name,
                avatar: owner.avatar,
            },
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            githubusername: profile.githubusername,
            skills: profile.skills,
            social: profile.social,
            experience: profile.experience.into_iter().map(ExperienceDTO::from).collect(),
            education: profile.education.into_iter().map(EducationDTO::from).collect(),
            date: profile.date,
        }
    }
}
