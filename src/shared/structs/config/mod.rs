use std::collections::BTreeMap;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::shared::structs::dice::{DEFAULT_GAME_SYSTEM, GameAliases};
use crate::shared::structs::discord::command::CommandDescriptor;
use crate::shared::utility::signature::is_valid_public_key;

const PUBLIC_KEY_ENV: &str = "DISCORD_PUBLICKEY";
const APPLICATION_ID_ENV: &str = "DISCORD_APPLICATION_ID";
const BOT_TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server_bind_point: String,
    pub interaction_path: String,
    pub log_level: String,
    /// Prefix of every failure message sent back to the channel.
    pub failure_message: String,
    pub dice_server: DiceServerConfiguration,
    pub game_aliases: BTreeMap<String, String>,
    pub command: CommandDescriptor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceServerConfiguration {
    pub endpoint: String,
    pub default_game: String,
}

impl Default for DiceServerConfiguration {
    fn default() -> Self {
        DiceServerConfiguration {
            endpoint: "http://localhost:8081/".into(),
            default_game: DEFAULT_GAME_SYSTEM.into(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            server_bind_point: "0.0.0.0:8080".into(),
            interaction_path: "/dicebot/interactions".into(),
            log_level: "DEBUG".into(),
            failure_message: "ダイスロールに失敗".into(),
            dice_server: DiceServerConfiguration::default(),
            game_aliases: GameAliases::default_aliases(),
            command: CommandDescriptor::dicebot(),
        }
    }

    pub fn load_from_config_file() -> anyhow::Result<Self> {
        let config_directory_path = std::env::var("CONFIG_DIRECTORY")?;
        let config_directory = std::path::Path::new(&config_directory_path);
        if !config_directory.exists() {
            std::fs::create_dir_all(&config_directory_path)?;
        }

        let config_file_name = std::env::var("CONFIG_FILE_NAME")?;
        let configuration_path = config_directory.join(&config_file_name);
        if !configuration_path.exists() {
            let new_config = Configuration::new();
            let serialized = toml::to_string_pretty(&new_config)?;
            std::fs::write(configuration_path, serialized)?;
            Ok(new_config)
        } else {
            let raw_config = std::fs::read_to_string(&configuration_path)?;
            let deserialized: Configuration = toml::from_str(&raw_config)
                .with_context(|| format!("Invalid config file {}", configuration_path.display()))?;
            Ok(deserialized)
        }
    }

    pub fn game_aliases(&self) -> GameAliases {
        GameAliases::new(&self.game_aliases, self.dice_server.default_game.clone())
    }
}

/// Discord secrets. Loaded from the environment and checked before the server starts.
#[derive(Clone)]
pub struct Credentials {
    pub public_key: String,
    pub application_id: u64,
    pub bot_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("application_id", &self.application_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn from_env() -> anyhow::Result<Self> {
        let public_key = required_env(PUBLIC_KEY_ENV)?;
        let application_id = required_env(APPLICATION_ID_ENV)?;
        let bot_token = required_env(BOT_TOKEN_ENV)?;

        Self::new(public_key, &application_id, bot_token)
    }

    pub fn new(
        public_key: String,
        application_id: &str,
        bot_token: String,
    ) -> anyhow::Result<Self> {
        if !is_valid_public_key(public_key.trim()) {
            bail!("{PUBLIC_KEY_ENV} is not a hex encoded Ed25519 public key");
        }

        let application_id = application_id
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{APPLICATION_ID_ENV} is not a valid snowflake"))?;
        if application_id == 0 {
            bail!("{APPLICATION_ID_ENV} must not be zero");
        }

        if bot_token.trim().is_empty() {
            bail!("{BOT_TOKEN_ENV} is empty");
        }

        Ok(Credentials {
            public_key: public_key.trim().to_string(),
            application_id,
            bot_token: bot_token.trim().to_string(),
        })
    }
}

fn required_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set"))
}
