//! ListActiveSessionsHandler - Query handler for who is in the gym right now.

use std::sync::Arc;

use crate::domain::attendance::{ActiveSession, AttendanceError};
use crate::ports::MemberStore;

/// Handler listing open sessions, earliest check-in first.
pub struct ListActiveSessionsHandler {
    store: Arc<dyn MemberStore>,
}

impl ListActiveSessionsHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<ActiveSession>, AttendanceError> {
        let sessions = self.store.active_sessions().await?;
        tracing::debug!(count = sessions.len(), "Active sessions listed");
        Ok(sessions)
    }
}
