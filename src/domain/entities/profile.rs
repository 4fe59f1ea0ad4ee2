use chrono::{DateTime, NaiveDate, Utc};

use crate::application::app_error::{AppError, AppResult};
use crate::domain::entities::{id::Id, user::User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Social {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub id: Id<Experience>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Education {
    pub id: Id<Education>,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Sparse set of profile attributes. `None` means "leave as is" on update
/// and "absent" on creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Social,
}

/// Profile joined with the owning user's public fields.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub owner: User,
}

impl Profile {
    pub fn new(user_id: Id<User>, patch: ProfilePatch) -> AppResult<Self> {
        let status = patch.status.ok_or(AppError::StatusRequired)?;
        Ok(Self {
            id: Id::generate(),
            user_id,
            company: patch.company,
            website: patch.website,
            location: patch.location,
            bio: patch.bio,
            status,
            githubusername: patch.githubusername,
            skills: patch.skills.unwrap_or_default(),
            social: patch.social,
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        })
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    /// Returns `false` when no entry carries `experience_id`; the list is left untouched.
    pub fn remove_experience(&mut self, experience_id: &Id<Experience>) -> bool {
        match self.experience.iter().position(|e| &e.id == experience_id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    pub fn remove_education(&mut self, education_id: &Id<Education>) -> bool {
        match self.education.iter().position(|e| &e.id == education_id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(field: &'static str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Splits a comma-delimited skill list, trimming each element and keeping order.
pub fn parse_skills(input: &str) -> Vec<String> {
    input.split(',').map(|skill| skill.trim().to_string()).collect()
}
