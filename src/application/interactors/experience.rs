use std::sync::Arc;

use tracing::{debug, info};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{AddExperienceDTO, ProfileDTO, RemoveEntryDTO};
use crate::application::interactors::present;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Experience, parse_date};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct AddExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
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

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let from = parse_date("from", &dto.from)?;
        let to = present(dto.to).map(|to| parse_date("to", &to)).transpose()?;

        let mut view = self
            .profile_reader
            .find_by_user_for_update(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let experience = Experience {
            id: Id::generate(),
            title: dto.title,
            company: dto.company,
            location: present(dto.location),
            from,
            to,
            current: dto.current,
            description: present(dto.description),
        };
        let experience_id = experience.id.clone();
        view.profile.add_experience(experience);

        self.profile_writer.update_entries(view.profile.clone()).await?;
        self.db_session.commit().await?;
        info!(user_id = %user_id, experience_id = %experience_id, "Experience added");
        Ok(view.into())
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
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

        let removed = match Id::<Experience>::try_from(dto.entry_id.as_str()) {
            Ok(experience_id) => view.profile.remove_experience(&experience_id),
            Err(_) => false,
        };

        if removed {
            self.profile_writer.update_entries(view.profile.clone()).await?;
            self.db_session.commit().await?;
            info!(user_id = %user_id, experience_id = %dto.entry_id, "Experience removed");
        } else {
            debug!(user_id = %user_id, experience_id = %dto.entry_id, "No experience entry to remove");
        }

        Ok(view.into())
    }
}
