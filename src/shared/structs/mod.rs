use std::sync::Arc;

use crate::shared::USER_AGENT;
use crate::shared::structs::config::{Configuration, Credentials};
use crate::shared::structs::dice::GameAliases;
use crate::shared::utility::dice_server::{DiceServerClient, Roller};

pub mod config;
pub mod dice;
pub mod discord;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub public_key: Arc<str>,
    pub game_aliases: Arc<GameAliases>,
    pub roller: Arc<dyn Roller>,
}

impl AppState {
    pub fn new(config: Configuration, credentials: &Credentials) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let roller = DiceServerClient::new(http_client, config.dice_server.endpoint.clone());

        Ok(Self::with_roller(
            config,
            &credentials.public_key,
            Arc::new(roller),
        ))
    }

    pub fn with_roller(config: Configuration, public_key: &str, roller: Arc<dyn Roller>) -> Self {
        AppState {
            game_aliases: Arc::new(config.game_aliases()),
            config: Arc::new(config),
            public_key: Arc::from(public_key),
            roller,
        }
    }
}
