use std::sync::Arc;

use tracing::{debug, info};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{AddEducationDTO, ProfileDTO, RemoveEntryDTO};
use crate::application::interactors::present;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, parse_date};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct AddEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let from = parse_date("from", &dto.from)?;
        let to = present(dto.to).map(|to| parse_date("to", &to)).transpose()?;

        let mut view = self
            .profile_reader
            .find_by_user_for_update(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let education = Education {
            id: Id::generate(),
            school: dto.school,
            degree: dto.degree,
            fieldofstudy: dto.fieldofstudy,
            from,
            to,
            current: dto.current,
            description: present(dto.description),
        };
        let education_id = education.id.clone();
        view.profile.add_education(education);

        self.profile_writer.update_entries(view.profile.clone()).await?;
        self.db_session.commit().await?;
        info!(user_id = %user_id, education_id = %education_id, "Education added");
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEntryDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut view = self
            .profile_reader
            .find_by_user_for_update(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let removed = match Id::<Education>::try_from(dto.entry_id.as_str()) {
            Ok(education_id) => view.profile.remove_education(&education_id),
            Err(_) => false,
        };

        if removed {
            self.profile_writer.update_entries(view.profile.clone()).await?;
            self.db_session.commit().await?;
            info!(user_id = %user_id, education_id = %dto.entry_id, "Education removed");
        } else {
            debug!(user_id = %user_id, education_id = %dto.entry_id, "No education entry to remove");
        }

        Ok(view.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::profile::{AddEducationDTO, RemoveEntryDTO};
    use crate::application::interactors::education::{AddEducationInteractor, RemoveEducationInteractor};
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{Education, Profile, ProfilePatch, ProfileView, Social};
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub ProfileReaderMock {}

        #[async_trait]
        impl ProfileReader for ProfileReaderMock {
            async fn find_by_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>>;
            async fn find_by_user_for_update(&self, user_id: &Id<User>) -> AppResult<Option<ProfileView>>;
            async fn list(&self) -> AppResult<Vec<ProfileView>>;
        }
    }

    mock! {
        pub ProfileWriterMock {}

        #[async_trait]
        impl ProfileWriter for ProfileWriterMock {
            async fn insert(&self, profile: Profile) -> AppResult<Id<Profile>>;
            async fn update(&self, user_id: &Id<User>, patch: ProfilePatch) -> AppResult<()>;
            async fn update_entries(&self, profile: Profile) -> AppResult<()>;
            async fn delete_by_user(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";
    const EDUCATION_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf30";

    #[fixture]
    fn view() -> ProfileView {
        let user_id: Id<User> = USER_ID.try_into().unwrap();
        ProfileView {
            profile: Profile {
                id: Id::generate(),
                user_id: user_id.clone(),
                company: None,
                website: None,
                location: None,
                bio: None,
                status: "Student".to_string(),
                githubusername: None,
                skills: vec!["c".to_string()],
                social: Social::default(),
                experience: vec![],
                education: vec![Education {
                    id: EDUCATION_ID.try_into().unwrap(),
                    school: "State University".to_string(),
                    degree: "BSc".to_string(),
                    fieldofstudy: "Computer Science".to_string(),
                    from: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
                    to: NaiveDate::from_ymd_opt(2018, 6, 30),
                    current: false,
                    description: None,
                }],
                date: Utc::now(),
            },
            owner: User {
                id: user_id,
                name: "Jane Doe".to_string(),
                avatar: None,
            },
        }
    }

    #[fixture]
    fn add_dto() -> AddEducationDTO {
        AddEducationDTO {
            user_id: USER_ID.to_string(),
            school: "Tech Institute".to_string(),
            degree: "MSc".to_string(),
            fieldofstudy: "Distributed Systems".to_string(),
            from: "2019-09-01".to_string(),
            to: Some("2021-06-30".to_string()),
            current: false,
            description: None,
        }
    }

    fn reader_returning(view: ProfileView) -> MockProfileReaderMock {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader
            .expect_find_by_user_for_update()
            .returning(move |_| Ok(Some(view.clone())));
        profile_reader
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_education_prepends_entry(add_dto: AddEducationDTO, view: ProfileView) {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(1).returning(|| Ok(()));
        let mut profile_writer = MockProfileWriterMock::new();
        profile_writer
            .expect_update_entries()
            .withf(|profile| profile.education.len() == 2 && profile.education[0].school == "Tech Institute")
            .times(1)
            .returning(|_| Ok(()));

        let result = AddEducationInteractor::new(Arc::new(db_session), Arc::new(reader_returning(view)), Arc::new(profile_writer))
            .execute(add_dto)
            .await
            .unwrap();

        assert_eq!(result.education[0].school, "Tech Institute");
        assert_eq!(result.education[0].to, NaiveDate::from_ymd_opt(2021, 6, 30));
        assert_eq!(result.education[1].id, EDUCATION_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_education_invalid_to_date(add_dto: AddEducationDTO) {
        let dto = AddEducationDTO {
            to: Some("June 2021".to_string()),
            ..add_dto
        };

        let result = AddEducationInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(MockProfileReaderMock::new()),
            Arc::new(MockProfileWriterMock::new()),
        )
        .execute(dto)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidDate { field: "to", .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_education_empty_optionals_are_absent(add_dto: AddEducationDTO, view: ProfileView) {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(1).returning(|| Ok(()));
        let mut profile_writer = MockProfileWriterMock::new();
        profile_writer
            .expect_update_entries()
            .withf(|profile| profile.education[0].description.is_none() && profile.education[0].to.is_none())
            .times(1)
            .returning(|_| Ok(()));
        let dto = AddEducationDTO {
            to: Some(String::new()),
            description: Some(String::new()),
            ..add_dto
        };

        let result = AddEducationInteractor::new(Arc::new(db_session), Arc::new(reader_returning(view)), Arc::new(profile_writer))
            .execute(dto)
            .await
            .unwrap();

        assert_eq!(result.education[0].description, None);
        assert_eq!(result.education[0].to, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_education(view: ProfileView) {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(1).returning(|| Ok(()));
        let mut profile_writer = MockProfileWriterMock::new();
        profile_writer
            .expect_update_entries()
            .withf(|profile| profile.education.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let result = RemoveEducationInteractor::new(Arc::new(db_session), Arc::new(reader_returning(view)), Arc::new(profile_writer))
            .execute(RemoveEntryDTO {
                user_id: USER_ID.to_string(),
                entry_id: EDUCATION_ID.to_string(),
            })
            .await
            .unwrap();

        assert!(result.education.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_unknown_education_is_noop(view: ProfileView) {
        let mut profile_writer = MockProfileWriterMock::new();
        profile_writer.expect_update_entries().never();

        let result = RemoveEducationInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(reader_returning(view)),
            Arc::new(profile_writer),
        )
        .execute(RemoveEntryDTO {
            user_id: USER_ID.to_string(),
            entry_id: Id::<Education>::generate().to_string(),
        })
        .await
        .unwrap();

        assert_eq!(result.education.len(), 1);
    }
}
