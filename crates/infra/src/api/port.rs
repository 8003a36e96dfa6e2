//! [`StandupApi`] over HTTP

use async_trait::async_trait;
use geekbot_core::StandupApi;
use geekbot_domain::{
    Report, ReportCreate, ReportQuery, Result, Standup, StandupCreate, StandupDuplicate,
    StandupStart, StandupUpdate, Team,
};

use super::client::GeekbotClient;

#[async_trait]
impl StandupApi for GeekbotClient {
    async fn list_standups(&self) -> Result<Vec<Standup>> {
        GeekbotClient::list_standups(self).await
    }

    async fn get_standup(&self, standup_id: u64) -> Result<Standup> {
        GeekbotClient::get_standup(self, standup_id).await
    }

    async fn create_standup(&self, standup: &StandupCreate) -> Result<Standup> {
        GeekbotClient::create_standup(self, standup).await
    }

    async fn update_standup(&self, standup_id: u64, update: &StandupUpdate) -> Result<Standup> {
        GeekbotClient::update_standup(self, standup_id, update).await
    }

    async fn replace_standup(&self, standup_id: u64, standup: &StandupCreate) -> Result<Standup> {
        GeekbotClient::replace_standup(self, standup_id, standup).await
    }

    async fn delete_standup(&self, standup_id: u64) -> Result<()> {
        GeekbotClient::delete_standup(self, standup_id).await
    }

    async fn duplicate_standup(
        &self,
        standup_id: u64,
        duplicate: &StandupDuplicate,
    ) -> Result<Standup> {
        GeekbotClient::duplicate_standup(self, standup_id, duplicate).await
    }

    async fn start_standup(&self, standup_id: u64, start: &StandupStart) -> Result<String> {
        GeekbotClient::start_standup(self, standup_id, start).await
    }

    async fn list_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        GeekbotClient::list_reports(self, query).await
    }

    async fn get_report(&self, report_id: u64) -> Result<Report> {
        GeekbotClient::get_report(self, report_id).await
    }

    async fn create_report(&self, report: &ReportCreate) -> Result<Report> {
        GeekbotClient::create_report(self, report).await
    }

    async fn get_team(&self) -> Result<Team> {
        GeekbotClient::get_team(self).await
    }
}
