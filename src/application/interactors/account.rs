use std::sync::Arc;

use tracing::info;

use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

// TODO: remove the user's posts as well once the posts gateway exists.
#[derive(Clone)]
pub struct DeleteAccountInteractor {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteAccountInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_writer: Arc<dyn ProfileWriter>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_writer,
            user_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_writer.delete_by_user(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;
        info!(user_id = %user_id, "Account deleted");
        Ok(())
    }
}
