use serde::{Deserialize, Serialize};
use serenity::all::{CommandOptionType, CommandType, CreateCommand, CreateCommandOption};

/// Slash command schema registered with Discord at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<OptionDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionDescriptor {
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    Number,
}

impl From<OptionKind> for CommandOptionType {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::String => CommandOptionType::String,
            OptionKind::Integer => CommandOptionType::Integer,
            OptionKind::Boolean => CommandOptionType::Boolean,
            OptionKind::Number => CommandOptionType::Number,
        }
    }
}

impl CommandDescriptor {
    pub fn dicebot() -> Self {
        CommandDescriptor {
            name: "dicebot".into(),
            description: "Dicebot based on BCDice.".into(),
            options: vec![
                OptionDescriptor {
                    kind: OptionKind::String,
                    name: "dice".into(),
                    description: "Dice string.".into(),
                    required: true,
                },
                OptionDescriptor {
                    kind: OptionKind::String,
                    name: "game".into(),
                    description: "Game system, e.g. coc or Cthulhu7th.".into(),
                    required: false,
                },
            ],
        }
    }

    pub fn to_create_command(&self) -> CreateCommand {
        let options = self
            .options
            .iter()
            .map(|option| {
                CreateCommandOption::new(
                    option.kind.into(),
                    option.name.clone(),
                    option.description.clone(),
                )
                .required(option.required)
            })
            .collect();

        CreateCommand::new(self.name.clone())
            .kind(CommandType::ChatInput)
            .description(self.description.clone())
            .set_options(options)
    }
}
