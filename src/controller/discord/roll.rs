use thiserror::Error;

use crate::shared::structs::AppState;
use crate::shared::structs::dice::{RollError, RollErrorKind, RollResult};
use crate::shared::structs::discord::interaction::{InteractionData, InteractionResponse, OptionError};

const DICE_OPTION: &str = "dice";
const GAME_OPTION: &str = "game";

/// Failures that end up in the channel as a message instead of an HTTP error.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("interaction has no command data")]
    MissingData,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    InvalidOption(#[from] OptionError),
    #[error(transparent)]
    Roll(#[from] RollError),
}

pub async fn roll(data: &InteractionData, app_state: &AppState) -> Result<RollResult, CommandError> {
    let dice = data.required_str(DICE_OPTION)?;
    let game = app_state
        .game_aliases
        .resolve(data.optional_str(GAME_OPTION)?);

    tracing::debug!("Rolling {} with game system {}", dice, game);

    Ok(app_state.roller.roll(dice, game).await?)
}

pub fn build_command_response(
    outcome: Result<RollResult, CommandError>,
    failure_message: &str,
) -> InteractionResponse {
    match outcome {
        Ok(result) => InteractionResponse::message(result.text),
        Err(e) => {
            match &e {
                CommandError::Roll(roll_error) if roll_error.kind() == RollErrorKind::RollRejected => {
                    tracing::info!("Dice server rejected roll: {}", roll_error);
                }
                CommandError::Roll(roll_error) => {
                    tracing::error!("Failed to roll dice: {:?}", roll_error);
                }
                _ => {
                    tracing::warn!("Invalid command invocation: {}", e);
                }
            }

            InteractionResponse::message(format!("{failure_message} {e}"))
        }
    }
}
