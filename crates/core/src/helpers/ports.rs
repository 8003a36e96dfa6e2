//! Port interface for the Geekbot REST surface
//!
//! The infra crate implements this over HTTP; tests implement it in memory.

use async_trait::async_trait;
use geekbot_domain::{
    Report, ReportCreate, ReportQuery, Result, Standup, StandupCreate, StandupDuplicate,
    StandupStart, StandupUpdate, Team,
};

/// One method per upstream endpoint
#[async_trait]
pub trait StandupApi: Send + Sync {
    /// `GET /standups`
    async fn list_standups(&self) -> Result<Vec<Standup>>;

    /// `GET /standups/{id}`
    async fn get_standup(&self, standup_id: u64) -> Result<Standup>;

    /// `POST /standups`
    async fn create_standup(&self, standup: &StandupCreate) -> Result<Standup>;

    /// `PATCH /standups/{id}`; only the fields set on `update` are sent
    async fn update_standup(&self, standup_id: u64, update: &StandupUpdate) -> Result<Standup>;

    /// `PUT /standups/{id}`
    async fn replace_standup(&self, standup_id: u64, standup: &StandupCreate) -> Result<Standup>;

    /// `DELETE /standups/{id}`
    async fn delete_standup(&self, standup_id: u64) -> Result<()>;

    /// `POST /standups/{id}/duplicate`
    async fn duplicate_standup(
        &self,
        standup_id: u64,
        duplicate: &StandupDuplicate,
    ) -> Result<Standup>;

    /// `POST /standups/{id}/start`; returns the server's plain-text reply
    async fn start_standup(&self, standup_id: u64, start: &StandupStart) -> Result<String>;

    /// `GET /reports`
    async fn list_reports(&self, query: &ReportQuery) -> Result<Vec<Report>>;

    /// `GET /reports/{id}`
    async fn get_report(&self, report_id: u64) -> Result<Report>;

    /// `POST /reports`
    async fn create_report(&self, report: &ReportCreate) -> Result<Report>;

    /// `GET /teams`
    async fn get_team(&self) -> Result<Team>;
}
