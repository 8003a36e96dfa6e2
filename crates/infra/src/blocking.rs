//! Synchronous facade over [`GeekbotClient`]
//!
//! Each call drives the async client to completion on a private
//! current-thread runtime. Calling from inside an async context is
//! rejected with `GeekbotError::Config`; use [`GeekbotClient`] there.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use geekbot_core::StandupHelper;
use geekbot_domain::{
    ClientConfig, GeekbotError, Report, ReportCreate, ReportQuery, Result, Standup,
    StandupCreate, StandupDuplicate, StandupStart, StandupUpdate, Team, User,
};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::info;

use crate::api::GeekbotClient;
use crate::errors::InfraError;

/// How long `close` waits for the runtime's I/O drivers to stop
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Blocking Geekbot client
///
/// Owns its runtime and is not `Clone`. The facade is
/// non-reentrant: issue one call at a time from a single thread and do not
/// share it across threads. Code that needs concurrency should use
/// [`GeekbotClient`] directly.
pub struct BlockingGeekbotClient {
    runtime: Runtime,
    inner: GeekbotClient,
    helper: StandupHelper,
}

impl BlockingGeekbotClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(crate::config::load()?)
    }

    /// # Errors
    ///
    /// Returns `GeekbotError::Config` if the configuration does not validate
    /// or the runtime cannot be started.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GeekbotError::from(InfraError::from(e)))?;
        let inner = GeekbotClient::from_config(config)?;
        let helper = inner.helpers();
        Ok(Self { runtime, inner, helper })
    }

    /// The async client this facade drives.
    pub fn async_client(&self) -> &GeekbotClient {
        &self.inner
    }

    /// Release the connection pool and shut the runtime down before returning.
    pub fn close(self) {
        info!(base_url = %self.inner.base_url(), "Closing blocking Geekbot client");
        let Self { runtime, inner, helper } = self;
        drop(helper);
        drop(inner);
        runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    }

    fn block_on<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if Handle::try_current().is_ok() {
            return Err(GeekbotError::Config(
                "blocking client called from within an async runtime".into(),
            ));
        }
        self.runtime.block_on(future)
    }

    // Standups

    pub fn list_standups(&self) -> Result<Vec<Standup>> {
        self.block_on(self.inner.list_standups())
    }

    pub fn get_standup(&self, standup_id: u64) -> Result<Standup> {
        self.block_on(self.inner.get_standup(standup_id))
    }

    pub fn create_standup(&self, standup: &StandupCreate) -> Result<Standup> {
        self.block_on(self.inner.create_standup(standup))
    }

    pub fn update_standup(&self, standup_id: u64, update: &StandupUpdate) -> Result<Standup> {
        self.block_on(self.inner.update_standup(standup_id, update))
    }

    pub fn replace_standup(&self, standup_id: u64, standup: &StandupCreate) -> Result<Standup> {
        self.block_on(self.inner.replace_standup(standup_id, standup))
    }

    pub fn delete_standup(&self, standup_id: u64) -> Result<()> {
        self.block_on(self.inner.delete_standup(standup_id))
    }

    pub fn duplicate_standup(
        &self,
        standup_id: u64,
        duplicate: &StandupDuplicate,
    ) -> Result<Standup> {
        self.block_on(self.inner.duplicate_standup(standup_id, duplicate))
    }

    pub fn start_standup(&self, standup_id: u64, start: &StandupStart) -> Result<String> {
        self.block_on(self.inner.start_standup(standup_id, start))
    }

    // Reports

    pub fn list_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        self.block_on(self.inner.list_reports(query))
    }

    pub fn get_report(&self, report_id: u64) -> Result<Report> {
        self.block_on(self.inner.get_report(report_id))
    }

    pub fn create_report(&self, report: &ReportCreate) -> Result<Report> {
        self.block_on(self.inner.create_report(report))
    }

    // Teams

    pub fn get_team(&self) -> Result<Team> {
        self.block_on(self.inner.get_team())
    }

    // Helpers

    pub fn get_all_reports(&self, query: ReportQuery) -> Result<Vec<Report>> {
        self.block_on(self.helper.get_all_reports(query))
    }

    pub fn get_user_reports(
        &self,
        user_id: &str,
        limit: Option<u32>,
        after: Option<i64>,
        before: Option<i64>,
    ) -> Result<Vec<Report>> {
        self.block_on(self.helper.get_user_reports(user_id, limit, after, before))
    }

    pub fn get_standup_reports_since(
        &self,
        standup_id: u64,
        since: DateTime<Utc>,
        limit: Option<u32>,
    ) -> Result<Vec<Report>> {
        self.block_on(self.helper.get_standup_reports_since(standup_id, since, limit))
    }

    pub fn find_standup_by_name(&self, name: &str) -> Result<Option<Standup>> {
        self.block_on(self.helper.find_standup_by_name(name))
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.block_on(self.helper.find_user_by_email(email))
    }

    pub fn get_user_standups(&self, user_id: &str) -> Result<Vec<Standup>> {
        self.block_on(self.helper.get_user_standups(user_id))
    }

    pub fn clone_standup(
        &self,
        standup_id: u64,
        new_name: &str,
        new_channel: Option<&str>,
    ) -> Result<Standup> {
        self.block_on(self.helper.clone_standup(standup_id, new_name, new_channel))
    }

    pub fn pause_standup(&self, standup_id: u64) -> Result<Standup> {
        self.block_on(self.helper.pause_standup(standup_id))
    }
}

impl std::fmt::Debug for BlockingGeekbotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingGeekbotClient").field("inner", &self.inner).finish()
    }
}
