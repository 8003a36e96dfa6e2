//! Convenience operations composed from the raw endpoints

use std::sync::Arc;

use chrono::{DateTime, Utc};
use geekbot_domain::constants::{DEFAULT_USER_REPORTS_LIMIT, REPORT_PAGE_SIZE};
use geekbot_domain::{
    Report, ReportQuery, Result, Standup, StandupDuplicate, StandupUpdate, User,
};
use tracing::{debug, instrument, warn};

use super::ports::StandupApi;

/// Higher-level standup and report helpers
///
/// Holds the endpoint port and never talks HTTP itself.
#[derive(Clone)]
pub struct StandupHelper {
    api: Arc<dyn StandupApi>,
}

impl StandupHelper {
    /// Create a new helper over the given endpoint implementation
    pub fn new(api: Arc<dyn StandupApi>) -> Self {
        Self { api }
    }

    /// The underlying endpoint implementation
    pub fn api(&self) -> &Arc<dyn StandupApi> {
        &self.api
    }

    /// Fetch every report matching `query`, following the `after` cursor.
    ///
    /// Pages are requested with the maximum page size. After each full page
    /// the cursor moves to the newest timestamp seen in that page. The walk
    /// ends on a short page, on a page without timestamps, or when the cursor
    /// would not move forward.
    #[instrument(skip(self))]
    pub async fn get_all_reports(&self, query: ReportQuery) -> Result<Vec<Report>> {
        let mut query = query.limit(REPORT_PAGE_SIZE);
        let mut all = Vec::new();

        loop {
            let batch = self.api.list_reports(&query).await?;
            let batch_len = batch.len();
            let cursor = batch.iter().filter_map(|report| report.timestamp).max();
            all.extend(batch);

            debug!(batch = batch_len, total = all.len(), "Fetched report page");

            if batch_len < REPORT_PAGE_SIZE as usize {
                break;
            }

            match cursor {
                None => {
                    warn!("Full report page without timestamps, stopping pagination");
                    break;
                }
                Some(next) if query.after.is_some_and(|after| next <= after) => {
                    warn!(cursor = next, "Report cursor did not advance, stopping pagination");
                    break;
                }
                Some(next) => query.after = Some(next),
            }
        }

        Ok(all)
    }

    /// Reports submitted by one user, newest page only.
    ///
    /// `limit` defaults to 30.
    pub async fn get_user_reports(
        &self,
        user_id: &str,
        limit: Option<u32>,
        after: Option<i64>,
        before: Option<i64>,
    ) -> Result<Vec<Report>> {
        let query = ReportQuery {
            user_id: Some(user_id.to_string()),
            limit: Some(limit.unwrap_or(DEFAULT_USER_REPORTS_LIMIT)),
            after,
            before,
            ..ReportQuery::default()
        };
        self.api.list_reports(&query).await
    }

    /// Reports for one standup submitted after `since`. `limit` defaults to 100.
    pub async fn get_standup_reports_since(
        &self,
        standup_id: u64,
        since: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<Report>> {
        let query = ReportQuery::new()
            .standup_id(standup_id)
            .after(since.timestamp())
            .limit(limit.unwrap_or(REPORT_PAGE_SIZE));
        self.api.list_reports(&query).await
    }

    /// First standup whose name matches case-insensitively.
    pub async fn find_standup_by_name(&self, name: &str) -> Result<Option<Standup>> {
        let wanted = name.to_lowercase();
        let standups = self.api.list_standups().await?;
        Ok(standups.into_iter().find(|standup| standup.name.to_lowercase() == wanted))
    }

    /// Team member whose email matches case-insensitively.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let team = self.api.get_team().await?;
        Ok(team.find_by_email(email).cloned())
    }

    /// Standups that list `user_id` among their participants.
    pub async fn get_user_standups(&self, user_id: &str) -> Result<Vec<Standup>> {
        let standups = self.api.list_standups().await?;
        Ok(standups.into_iter().filter(|standup| standup.has_participant(user_id)).collect())
    }

    /// Duplicate a standup under a new name, optionally in another channel.
    pub async fn clone_standup(
        &self,
        standup_id: u64,
        new_name: &str,
        new_channel: Option<&str>,
    ) -> Result<Standup> {
        let mut duplicate = StandupDuplicate::named(new_name);
        if let Some(channel) = new_channel {
            duplicate = duplicate.channel(channel);
        }
        self.api.duplicate_standup(standup_id, &duplicate).await
    }

    /// Pause a standup by clearing its wait time.
    pub async fn pause_standup(&self, standup_id: u64) -> Result<Standup> {
        let update = StandupUpdate::default().clear_wait_time();
        self.api.update_standup(standup_id, &update).await
    }
}

impl std::fmt::Debug for StandupHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandupHelper").finish_non_exhaustive()
    }
}
