use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GAME_SYSTEM: &str = "DiceBot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollErrorKind {
    Unreachable,
    MalformedReply,
    RollRejected,
}

#[derive(Debug, Error)]
pub enum RollError {
    #[error("dice server is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("dice server sent a malformed reply: {0}")]
    MalformedReply(String),
    #[error("{0}")]
    RollRejected(String),
}

impl RollError {
    pub fn kind(&self) -> RollErrorKind {
        match self {
            RollError::Unreachable(_) => RollErrorKind::Unreachable,
            RollError::MalformedReply(_) => RollErrorKind::MalformedReply,
            RollError::RollRejected(_) => RollErrorKind::RollRejected,
        }
    }

    /// The dice server's own explanation, present only for rejected rolls.
    pub fn message(&self) -> Option<&str> {
        match self {
            RollError::RollRejected(message) => Some(message),
            _ => None,
        }
    }
}

/// Reply body of the dice server. Successful rolls fill `body`, rejected ones `error`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiceServerReply {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub error: String,
}

impl DiceServerReply {
    pub fn into_result(self) -> Result<RollResult, RollError> {
        if !self.error.is_empty() {
            Err(RollError::RollRejected(self.error))
        } else if self.body.is_empty() {
            Err(RollError::MalformedReply(
                "reply has neither a body nor an error".into(),
            ))
        } else {
            Ok(RollResult { text: self.body })
        }
    }
}

/// Short game codes mapped to BCDice game system ids. Lookups ignore case.
#[derive(Debug, Clone)]
pub struct GameAliases {
    aliases: HashMap<String, String>,
    default_game: String,
}

impl GameAliases {
    pub fn new(aliases: &BTreeMap<String, String>, default_game: impl Into<String>) -> Self {
        GameAliases {
            aliases: aliases
                .iter()
                .map(|(alias, game)| (alias.to_lowercase(), game.clone()))
                .collect(),
            default_game: default_game.into(),
        }
    }

    pub fn default_aliases() -> BTreeMap<String, String> {
        [
            ("coc", "Cthulhu"),
            ("coc7", "Cthulhu7th"),
            ("dx3", "DoubleCross"),
            ("emo", "Emoklore"),
            ("sg", "ShinobiGami"),
            ("sw25", "SwordWorld2_5"),
        ]
        .into_iter()
        .map(|(alias, game)| (alias.to_string(), game.to_string()))
        .collect()
    }

    pub fn default_game(&self) -> &str {
        &self.default_game
    }

    /// Unknown names are passed through untouched so full game system ids keep working.
    pub fn resolve<'a>(&'a self, game: Option<&'a str>) -> &'a str {
        match game {
            Some(game) => self
                .aliases
                .get(&game.to_lowercase())
                .map(String::as_str)
                .unwrap_or(game),
            None => &self.default_game,
        }
    }
}

impl Default for GameAliases {
    fn default() -> Self {
        GameAliases::new(&GameAliases::default_aliases(), DEFAULT_GAME_SYSTEM)
    }
}
