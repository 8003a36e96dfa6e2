//! Team endpoint

use geekbot_domain::{Result, Team};

use super::client::GeekbotClient;

impl GeekbotClient {
    /// The team owning the key, with its members.
    pub async fn get_team(&self) -> Result<Team> {
        self.get_json("/teams", &[]).await
    }
}
