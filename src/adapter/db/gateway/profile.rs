use async_trait::async_trait;
use chrono::NaiveDate;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Postgres, Row, Transaction};
use tracing::warn;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, ProfilePatch, ProfileView, Social};
use crate::domain::entities::user::User;

const SELECT_PROFILE: &str = r#"
    SELECT
        p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status, p.githubusername,
        p.skills, p.social, p.experience, p.education, p.date,
        u.name AS user_name, u.avatar AS user_avatar
    FROM
        profiles p
        JOIN users u ON u.id = p.user_id
"#;

// JSONB shapes of the embedded columns. Absent social links are left out of
// the document so that `social || patch` only overwrites the keys sent.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SocialRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instagram: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ExperienceRecord {
    id: Uuid,
    title: String,
    company: String,
    location: Option<String>,
    from: NaiveDate,
    to: Option<NaiveDate>,
    #[serde(default)]
    current: bool,
    description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EducationRecord {
    id: Uuid,
    school: String,
    degree: String,
    fieldofstudy: String,
    from: NaiveDate,
    to: Option<NaiveDate>,
    #[serde(default)]
    current: bool,
    description: Option<String>,
}

impl From<Social> for SocialRecord {
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

impl From<SocialRecord> for Social {
    fn from(record: SocialRecord) -> Self {
        Self {
            youtube: record.youtube,
            twitter: record.twitter,
            facebook: record.facebook,
            linkedin: record.linkedin,
            instagram: record.instagram,
        }
    }
}

impl From<Experience> for ExperienceRecord {
    fn from(experience: Experience) -> Self {
        Self {
            id: experience.id.value,
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

impl From<ExperienceRecord> for Experience {
    fn from(record: ExperienceRecord) -> Self {
        Self {
            id: Id::new(record.id),
            title: record.title,
            company: record.company,
            location: record.location,
            from: record.from,
            to: record.to,
            current: record.current,
            description: record.description,
        }
    }
}

impl From<Education> for EducationRecord {
    fn from(education: Education) -> Self {
        Self {
            id: education.id.value,
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

impl From<EducationRecord> for Education {
    fn from(record: EducationRecord) -> Self {
        Self {
            id: Id::new(record.id),
            school: record.school,
            degree: record.degree,
            fieldofstudy: record.fieldofstudy,
            from: record.from,
            to: record.to,
            current: record.current,
            description: record.description,
        }
    }
}

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn get_profile_view(row: &PgRow) -> AppResult<ProfileView> {
        let user_id: Uuid = row.try_get("user_id")?;
        let Json(social): Json<SocialRecord> = row.try_get("social")?;
        let Json(experience): Json<Vec<ExperienceRecord>> = row.try_get("experience")?;
        let Json(education): Json<Vec<EducationRecord>> = row.try_get("education")?;

        Ok(ProfileView {
            profile: Profile {
                id: Id::new(row.try_get("id")?),
                user_id: Id::new(user_id),
                company: row.try_get("company")?,
                website: row.try_get("website")?,
                location: row.try_get("location")?,
                bio: row.try_get("bio")?,
                status: row.try_get("status")?,
                githubusername: row.try_get("githubusername")?,
                skills: row.try_get("skills")?,
                social: social.into(),
                experience: experience.into_iter().map(Experience::from).collect(),
                education: education.into_iter().map(Education::from).collect(),
                date: row.try_get("date")?,
            },
            owner: User {
                id: Id::new(user_id),
                name: row.try_get("user_name")?,
                avatar: row.try_get("user_avatar")?,
            },
        })
    }

    async fn fetch_by_user(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        for_update: bool,
    ) -> AppResult<Option<ProfileView>> {
        let lock = if for_update { "FOR UPDATE OF p" } else { "" };
        let query = format!("{} WHERE p.user_id = $1 {}", SELECT_PROFILE, lock);
        let result = sqlx::query(&query).bind(user_id).fetch_optional(tx.as_mut()).await?;

        result.as_ref().map(Self::get_profile_view).transpose()
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move { Self::fetch_by_user(tx, user_id, false).await }.boxed()
            })
            .await
    }

    async fn find_by_user_for_update(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move { Self::fetch_by_user(tx, user_id, true).await }.boxed()
            })
            .await
    }

    async fn list(&self) -> AppResult<Vec<ProfileView>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let query = format!("{} ORDER BY p.date, p.id", SELECT_PROFILE);
                    let rows = sqlx::query(&query).fetch_all(tx.as_mut()).await?;
                    rows.iter().map(Self::get_profile_view).collect()
                }
                .boxed()
            })
            .await
    }
}

/// A profile insert that trips `profiles.user_id -> users.id` means the token
/// belongs to an account that has since been deleted.
fn owner_missing(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            warn!(error = %db_err, "Profile owner no longer exists");
            AppError::InvalidToken
        }
        _ => AppError::DatabaseError(err),
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let experience: Vec<ExperienceRecord> =
                        profile.experience.into_iter().map(ExperienceRecord::from).collect();
                    let education: Vec<EducationRecord> =
                        profile.education.into_iter().map(EducationRecord::from).collect();
                    let result = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (
                                    id,
                                    user_id,
                                    company,
                                    website,
                                    location,
                                    bio,
                                    status,
                                    githubusername,
                                    skills,
                                    social,
                                    experience,
                                    education,
                                    date
                                )
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.user_id.value)
                    .bind(profile.company)
                    .bind(profile.website)
                    .bind(profile.location)
                    .bind(profile.bio)
                    .bind(profile.status)
                    .bind(profile.githubusername)
                    .bind(profile.skills)
                    .bind(Json(SocialRecord::from(profile.social)))
                    .bind(Json(experience))
                    .bind(Json(education))
                    .bind(profile.date)
                    .fetch_one(tx.as_mut())
                    .await
                    .map_err(owner_missing)?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, user_id: &Id<User>, patch: ProfilePatch) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                company = COALESCE($2, company),
                                website = COALESCE($3, website),
                                location = COALESCE($4, location),
                                bio = COALESCE($5, bio),
                                status = COALESCE($6, status),
                                githubusername = COALESCE($7, githubusername),
                                skills = COALESCE($8, skills),
                                social = social || $9
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .bind(patch.company)
                    .bind(patch.website)
                    .bind(patch.location)
                    .bind(patch.bio)
                    .bind(patch.status)
                    .bind(patch.githubusername)
                    .bind(patch.skills)
                    .bind(Json(SocialRecord::from(patch.social)))
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn update_entries(&self, profile: Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                async move {
                    let experience: Vec<ExperienceRecord> =
                        profile.experience.into_iter().map(ExperienceRecord::from).collect();
                    let education: Vec<EducationRecord> =
                        profile.education.into_iter().map(EducationRecord::from).collect();
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                experience = $2, education = $3
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(profile.user_id.value)
                    .bind(Json(experience))
                    .bind(Json(education))
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
                        .bind(user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
