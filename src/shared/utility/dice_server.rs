use async_trait::async_trait;

use crate::shared::structs::dice::{DiceServerReply, RollError, RollResult};

#[async_trait]
pub trait Roller: Send + Sync {
    async fn roll(&self, dice: &str, game: &str) -> Result<RollResult, RollError>;
}

/// Client for the BCDice HTTP server.
#[derive(Debug, Clone)]
pub struct DiceServerClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl DiceServerClient {
    pub fn new(http_client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        DiceServerClient {
            http_client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Roller for DiceServerClient {
    async fn roll(&self, dice: &str, game: &str) -> Result<RollResult, RollError> {
        // The dice server answers rejected rolls with a 400 and a JSON error, so the status is not checked.
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[("dice", dice), ("game", game)])
            .send()
            .await
            .map_err(RollError::Unreachable)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(RollError::Unreachable)?;

        let reply = serde_json::from_slice::<DiceServerReply>(&bytes).map_err(|e| {
            RollError::MalformedReply(format!(
                "status {status}, {e}: {}",
                String::from_utf8_lossy(&bytes)
            ))
        })?;

        reply.into_result()
    }
}
