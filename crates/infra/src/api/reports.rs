//! Report endpoints

use geekbot_domain::{Report, ReportCreate, ReportQuery, Result};
use reqwest::Method;

use super::client::GeekbotClient;

impl GeekbotClient {
    /// One page of reports matching `query`. Unset filters are not sent.
    pub async fn list_reports(&self, query: &ReportQuery) -> Result<Vec<Report>> {
        self.get_json("/reports", &query.to_query_pairs()).await
    }

    pub async fn get_report(&self, report_id: u64) -> Result<Report> {
        self.get_json(&format!("/reports/{report_id}"), &[]).await
    }

    /// Submit answers on behalf of the key's owner.
    pub async fn create_report(&self, report: &ReportCreate) -> Result<Report> {
        self.dispatch_json(Method::POST, "/reports", &[], Some(report)).await
    }
}
