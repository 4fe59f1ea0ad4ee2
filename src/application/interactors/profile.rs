use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{ProfileDTO, UpsertProfileDTO};
use crate::application::interactors::present;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch, Social, parse_skills};
use crate::domain::entities::user::User;

impl From<UpsertProfileDTO> for ProfilePatch {
    fn from(dto: UpsertProfileDTO) -> Self {
        Self {
            company: present(dto.company),
            website: present(dto.website),
            location: present(dto.location),
            bio: present(dto.bio),
            status: present(dto.status),
            githubusername: present(dto.githubusername),
            skills: present(dto.skills).map(|skills| parse_skills(&skills)),
            social: Social {
                youtube: present(dto.youtube),
                twitter: present(dto.twitter),
                facebook: present(dto.facebook),
                linkedin: present(dto.linkedin),
                instagram: present(dto.instagram),
            },
        }
    }
}

#[derive(Clone)]
pub struct GetOwnProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetOwnProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let view = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct ListProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl ListProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<ProfileDTO>> {
        let views = self.profile_reader.list().await?;
        Ok(views.into_iter().map(ProfileDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct GetProfileByUserIdInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserIdInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileDTO> {
        // A malformed id cannot belong to any profile.
        let user_id: Id<User> = dto.id.try_into().map_err(|_| AppError::ProfileNotFound)?;
        let view = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct UpsertProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
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

    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.clone().try_into()?;
        let patch = ProfilePatch::from(dto);

        match self.profile_reader.find_by_user_for_update(&user_id).await? {
            Some(_) => {
                self.profile_writer.update(&user_id, patch).await?;
                info!(user_id = %user_id, "Profile updated");
            }
            None => {
                let profile = Profile::new(user_id.clone(), patch)?;
                let profile_id = self.profile_writer.insert(profile).await?;
                info!(user_id = %user_id, profile_id = %profile_id, "Profile created");
            }
        }

        let view = self
            .profile_reader
            .find_by_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        self.db_session.commit().await?;
        Ok(view.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::id::IdDTO;
    use crate::application::dto::profile::UpsertProfileDTO;
    use crate::application::interactors::profile::{
        GetOwnProfileInteractor, GetProfileByUserIdInteractor, ListProfilesInteractor, UpsertProfileInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{Profile, ProfilePatch, ProfileView, Social};
    use crate::domain::entities::user::User;

    // Mocks
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

    // Constants
    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";

    // Fixtures
    #[fixture]
    fn view() -> ProfileView {
        let user_id: Id<User> = USER_ID.try_into().unwrap();
        ProfileView {
            profile: Profile {
                id: Id::generate(),
                user_id: user_id.clone(),
                company: Some("Acme".to_string()),
                website: None,
                location: None,
                bio: None,
                status: "Developer".to_string(),
                githubusername: None,
                skills: vec!["rust".to_string()],
                social: Social::default(),
                experience: vec![],
                education: vec![],
                date: Utc::now(),
            },
            owner: User {
                id: user_id,
                name: "Jane Doe".to_string(),
                avatar: Some("//gravatar/jane".to_string()),
            },
        }
    }

    #[fixture]
    fn upsert_dto() -> UpsertProfileDTO {
        UpsertProfileDTO {
            user_id: USER_ID.to_string(),
            status: Some("Senior Developer".to_string()),
            skills: Some("a, b ,c".to_string()),
            twitter: Some("https://twitter.com/jane".to_string()),
            ..UpsertProfileDTO::default()
        }
    }

    // Helpers
    fn make_upsert_interactor(
        db_session: MockDBSessionMock,
        profile_reader: MockProfileReaderMock,
        profile_writer: MockProfileWriterMock,
    ) -> UpsertProfileInteractor {
        UpsertProfileInteractor::new(Arc::new(db_session), Arc::new(profile_reader), Arc::new(profile_writer))
    }

    // ProfilePatch conversion
    #[rstest]
    fn test_patch_skips_empty_and_missing_fields(upsert_dto: UpsertProfileDTO) {
        let dto = UpsertProfileDTO {
            company: Some(String::new()),
            ..upsert_dto
        };
        let patch = ProfilePatch::from(dto);

        assert_eq!(patch.company, None);
        assert_eq!(patch.website, None);
        assert_eq!(patch.status.as_deref(), Some("Senior Developer"));
        assert_eq!(
            patch.skills,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(patch.social.twitter.as_deref(), Some("https://twitter.com/jane"));
        assert_eq!(patch.social.youtube, None);
    }

    // UpsertProfileInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_upsert_creates_profile_when_missing(upsert_dto: UpsertProfileDTO, view: ProfileView) {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader.expect_find_by_user_for_update().returning(|_| Ok(None));
        profile_writer
            .expect_insert()
            .withf(|profile| {
                profile.status == "Senior Developer"
                    && profile.skills == vec!["a", "b", "c"]
                    && profile.company.is_none()
                    && profile.social.twitter.is_some()
            })
            .times(1)
            .returning(|profile| Ok(profile.id));
        profile_writer.expect_update().never();
        profile_reader
            .expect_find_by_user()
            .returning(move |_| Ok(Some(view.clone())));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let result = make_upsert_interactor(db_session, profile_reader, profile_writer)
            .execute(upsert_dto)
            .await
            .unwrap();

        assert_eq!(result.user.id, USER_ID);
        assert_eq!(result.user.name, "Jane Doe");
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_updates_existing_profile(upsert_dto: UpsertProfileDTO, view: ProfileView) {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        let existing = view.clone();
        profile_reader
            .expect_find_by_user_for_update()
            .returning(move |_| Ok(Some(existing.clone())));
        profile_writer.expect_insert().never();
        profile_writer
            .expect_update()
            .withf(|user_id, patch| {
                user_id.to_string() == USER_ID && patch.company.is_none() && patch.status.is_some()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        profile_reader
            .expect_find_by_user()
            .returning(move |_| Ok(Some(view.clone())));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let result = make_upsert_interactor(db_session, profile_reader, profile_writer)
            .execute(upsert_dto)
            .await
            .unwrap();

        assert_eq!(result.company.as_deref(), Some("Acme"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_invalid_user_id(upsert_dto: UpsertProfileDTO) {
        let dto = UpsertProfileDTO {
            user_id: "not-a-uuid".to_string(),
            ..upsert_dto
        };

        let result = make_upsert_interactor(
            MockDBSessionMock::new(),
            MockProfileReaderMock::new(),
            MockProfileWriterMock::new(),
        )
        .execute(dto)
        .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidId(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_does_not_commit_on_write_failure(upsert_dto: UpsertProfileDTO) {
        let mut db_session = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader.expect_find_by_user_for_update().returning(|_| Ok(None));
        profile_writer
            .expect_insert()
            .returning(|_| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));
        db_session.expect_commit().never();

        let result = make_upsert_interactor(db_session, profile_reader, profile_writer)
            .execute(upsert_dto)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DatabaseError(_)));
    }

    // GetOwnProfileInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_get_own_profile_success(view: ProfileView) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader
            .expect_find_by_user()
            .returning(move |_| Ok(Some(view.clone())));

        let result = GetOwnProfileInteractor::new(Arc::new(profile_reader))
            .execute(IdDTO {
                id: USER_ID.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, "Developer");
        assert_eq!(result.user.avatar.as_deref(), Some("//gravatar/jane"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_own_profile_not_found() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_user().returning(|_| Ok(None));

        let result = GetOwnProfileInteractor::new(Arc::new(profile_reader))
            .execute(IdDTO {
                id: USER_ID.to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }

    // ListProfilesInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_list_profiles(view: ProfileView) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader
            .expect_list()
            .returning(move || Ok(vec![view.clone(), view.clone()]));

        let result = ListProfilesInteractor::new(Arc::new(profile_reader))
            .execute()
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    // GetProfileByUserIdInteractor tests
    #[rstest]
    #[case("not-a-uuid")]
    #[case("5d7a514b5d2c12c7449be042")]
    #[case("")]
    #[tokio::test]
    async fn test_get_profile_by_malformed_user_id(#[case] id: &str) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_user().never();

        let result = GetProfileByUserIdInteractor::new(Arc::new(profile_reader))
            .execute(IdDTO { id: id.to_string() })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_by_unknown_user_id() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_user().returning(|_| Ok(None));

        let result = GetProfileByUserIdInteractor::new(Arc::new(profile_reader))
            .execute(IdDTO {
                id: Id::<User>::generate().to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }
}
