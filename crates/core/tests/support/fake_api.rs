//! In-memory `StandupApi` for helper tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use geekbot_core::StandupApi;
use geekbot_domain::{
    GeekbotError, Report, ReportCreate, ReportQuery, Result, Standup, StandupCreate,
    StandupDuplicate, StandupStart, StandupUpdate, Team,
};

/// Calls observed by [`FakeStandupApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListStandups,
    ListReports(ReportQuery),
    UpdateStandup(u64, StandupUpdate),
    DuplicateStandup(u64, StandupDuplicate),
    GetTeam,
}

#[derive(Default)]
pub struct FakeStandupApi {
    standups: Vec<Standup>,
    team: Option<Team>,
    report_pages: Mutex<VecDeque<Vec<Report>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStandupApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standups(mut self, standups: Vec<Standup>) -> Self {
        self.standups = standups;
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    /// Pages returned by successive `list_reports` calls; empty afterwards.
    pub fn with_report_pages(self, pages: Vec<Vec<Report>>) -> Self {
        *self.report_pages.lock().unwrap() = pages.into();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn report_queries(&self) -> Vec<ReportQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListReports(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn find(&self, standup_id: u64) -> Result<Standup> {
        self.standups.iter().find(|s| s.id == standup_id).cloned().ok_or_else(|| {
            GeekbotError::NotFound { status: 404, message: format!("standup {standup_id}") }
        })
    }
}

#[async_trait]
impl StandupApi for FakeStandupApi {
    async fn list_standups(&self) -> Result<Vec<Standup>> {
        self.record(Call::ListStandups);
        Ok(self.standups.clone())
    }

    async fn get_standup(&self, standup_id: u64) -> Result<Standup> {
        self.find(standup_id)
    }

    async fn create_standup(&self, _standup: &StandupCreate) -> Result<Standup> {
        unimplemented!("not used by helper tests")
    }

    async fn update_standup(&self, standup_id: u64, update: &StandupUpdate) -> Result<Standup> {
        self.record(Call::UpdateStandup(standup_id, update.clone()));
        let mut standup = self.find(standup_id)?;
        if let Some(wait_time) = update.wait_time {
            standup.wait_time = wait_time;
        }
        Ok(standup)
    }

    async fn replace_standup(&self, _standup_id: u64, _standup: &StandupCreate) -> Result<Standup> {
        unimplemented!("not used by helper tests")
    }

    async fn delete_standup(&self, _standup_id: u64) -> Result<()> {
        unimplemented!("not used by helper tests")
    }

    async fn duplicate_standup(
        &self,
        standup_id: u64,
        duplicate: &StandupDuplicate,
    ) -> Result<Standup> {
        self.record(Call::DuplicateStandup(standup_id, duplicate.clone()));
        let mut standup = self.find(standup_id)?;
        standup.id += 1000;
        standup.name = duplicate.name.clone();
        if let Some(channel) = &duplicate.channel {
            standup.channel = channel.clone();
        }
        Ok(standup)
    }

    async fn start_standup(&self, _standup_id: u64, _start: &StandupStart) -> Result<String> {
        Ok("ok".to_string())
    }

    async fn list_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        self.record(Call::ListReports(query.clone()));
        Ok(self.report_pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn get_report(&self, _report_id: u64) -> Result<Report> {
        unimplemented!("not used by helper tests")
    }

    async fn create_report(&self, _report: &ReportCreate) -> Result<Report> {
        unimplemented!("not used by helper tests")
    }

    async fn get_team(&self) -> Result<Team> {
        self.record(Call::GetTeam);
        self.team.clone().ok_or_else(|| GeekbotError::NotFound {
            status: 404,
            message: "team".to_string(),
        })
    }
}
