use serenity::all::{ApplicationId, Command};
use serenity::http::Http;

use crate::shared::structs::config::Credentials;
use crate::shared::structs::discord::command::CommandDescriptor;

pub mod dice_server;
pub mod signature;

/// Creates or overwrites the global slash command. Discord treats a repeated
/// registration with the same name as an update.
pub async fn register_application_command(
    descriptor: &CommandDescriptor,
    credentials: &Credentials,
) -> anyhow::Result<()> {
    let http = Http::new(&credentials.bot_token);
    http.set_application_id(ApplicationId::new(credentials.application_id));

    let command = Command::create_global_command(&http, descriptor.to_create_command()).await?;
    tracing::info!(
        "Registered application command /{} with id {}",
        command.name,
        command.id
    );

    Ok(())
}
