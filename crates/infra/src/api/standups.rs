//! Standup endpoints

use geekbot_domain::{
    Result, Standup, StandupCreate, StandupDuplicate, StandupStart, StandupUpdate,
};
use reqwest::Method;

use super::client::{decode_text, GeekbotClient};

impl GeekbotClient {
    /// List every standup visible to the key.
    pub async fn list_standups(&self) -> Result<Vec<Standup>> {
        self.get_json("/standups", &[]).await
    }

    pub async fn get_standup(&self, standup_id: u64) -> Result<Standup> {
        self.get_json(&format!("/standups/{standup_id}"), &[]).await
    }

    pub async fn create_standup(&self, standup: &StandupCreate) -> Result<Standup> {
        self.dispatch_json(Method::POST, "/standups", &[], Some(standup)).await
    }

    /// Partial update; unset fields are left untouched on the server.
    pub async fn update_standup(&self, standup_id: u64, update: &StandupUpdate) -> Result<Standup> {
        self.dispatch_json(Method::PATCH, &format!("/standups/{standup_id}"), &[], Some(update))
            .await
    }

    /// Full replacement of a standup's definition.
    pub async fn replace_standup(
        &self,
        standup_id: u64,
        standup: &StandupCreate,
    ) -> Result<Standup> {
        self.dispatch_json(Method::PUT, &format!("/standups/{standup_id}"), &[], Some(standup))
            .await
    }

    /// Delete a standup. Any response body is ignored.
    pub async fn delete_standup(&self, standup_id: u64) -> Result<()> {
        self.dispatch::<()>(Method::DELETE, &format!("/standups/{standup_id}"), &[], None)
            .await
            .map(|_| ())
    }

    pub async fn duplicate_standup(
        &self,
        standup_id: u64,
        duplicate: &StandupDuplicate,
    ) -> Result<Standup> {
        self.dispatch_json(
            Method::POST,
            &format!("/standups/{standup_id}/duplicate"),
            &[],
            Some(duplicate),
        )
        .await
    }

    /// Trigger a standup run now for everyone or for the listed users.
    ///
    /// The server replies with plain text; surrounding quotes are stripped.
    pub async fn start_standup(&self, standup_id: u64, start: &StandupStart) -> Result<String> {
        let bytes = self
            .dispatch(Method::POST, &format!("/standups/{standup_id}/start"), &[], Some(start))
            .await?;
        decode_text(&bytes)
    }
}
