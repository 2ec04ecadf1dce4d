use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::controller::discord::roll::{CommandError, build_command_response, roll};
use crate::shared::structs::AppState;
use crate::shared::structs::dice::RollResult;
use crate::shared::structs::discord::interaction::{
    Interaction, InteractionResponse, InteractionType,
};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unsupported interaction type {0}")]
    UnsupportedInteraction(u8),
}

pub async fn handle_interaction(State(app_state): State<AppState>, request: Bytes) -> Response {
    let interaction = match Interaction::decode(&request) {
        Ok(interaction) => interaction,
        Err(e) => {
            tracing::error!("{}", e);
            return (StatusCode::BAD_REQUEST, "failed to parse request body").into_response();
        }
    };

    tracing::debug!("Received incoming interaction: {:?}", &interaction);

    match dispatch(&interaction, &app_state).await {
        Ok(response) => encode_response(&response),
        Err(e) => {
            tracing::warn!("Rejected interaction {}: {}", interaction.id, e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

pub async fn dispatch(
    interaction: &Interaction,
    app_state: &AppState,
) -> Result<InteractionResponse, DispatchError> {
    match interaction.r#type {
        InteractionType::Ping => Ok(InteractionResponse::pong()),
        InteractionType::ApplicationCommand => {
            let outcome = handle_command_interaction(interaction, app_state).await;
            Ok(build_command_response(
                outcome,
                &app_state.config.failure_message,
            ))
        }
        InteractionType::Other(kind) => Err(DispatchError::UnsupportedInteraction(kind)),
    }
}

async fn handle_command_interaction(
    interaction: &Interaction,
    app_state: &AppState,
) -> Result<RollResult, CommandError> {
    let data = interaction.data.as_ref().ok_or(CommandError::MissingData)?;

    if data.name != app_state.config.command.name {
        return Err(CommandError::UnknownCommand(data.name.clone()));
    }

    roll(data, app_state).await
}

fn encode_response(response: &InteractionResponse) -> Response {
    match serde_json::to_vec(response) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize interaction response {:?}: {}", response, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode response").into_response()
        }
    }
}
