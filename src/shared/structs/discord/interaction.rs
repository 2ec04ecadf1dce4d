use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to decode interaction payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("missing required option `{0}`")]
    Missing(String),
    #[error("option `{name}` must be a {expected}, got {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Interaction {
    pub id: String,
    pub application_id: String,
    pub r#type: InteractionType,
    #[serde(default)]
    pub data: Option<InteractionData>,
}

impl Interaction {
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InteractionData {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub r#type: u8,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl InteractionData {
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|option| option.name == name)
    }

    pub fn required_str(&self, name: &str) -> Result<&str, OptionError> {
        self.option(name)
            .ok_or_else(|| OptionError::Missing(name.to_string()))?
            .as_str()
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<&str>, OptionError> {
        self.option(name).map(CommandOption::as_str).transpose()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub r#type: u8,
    #[serde(default)]
    pub value: Option<OptionValue>,
}

impl CommandOption {
    pub fn as_str(&self) -> Result<&str, OptionError> {
        match &self.value {
            Some(OptionValue::String(s)) => Ok(s),
            Some(other) => Err(OptionError::WrongType {
                name: self.name.clone(),
                expected: "string",
                found: other.type_name(),
            }),
            None => Err(OptionError::Missing(self.name.clone())),
        }
    }
}

/// Option values arrive as bare JSON scalars; the variant is picked from the JSON type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

impl OptionValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Boolean(_) => "boolean",
            OptionValue::Integer(_) => "integer",
            OptionValue::Double(_) => "double",
            OptionValue::String(_) => "string",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InteractionCallbackType {
    Pong = 1,
    ChannelMessageWithSource = 4,
}

impl Serialize for InteractionCallbackType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    pub r#type: InteractionCallbackType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionCallbackData {
    pub content: String,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            r#type: InteractionCallbackType::Pong,
            data: None,
        }
    }

    pub fn message(content: impl Into<String>) -> Self {
        let content = content.into();
        debug_assert!(!content.is_empty(), "message responses need content");

        InteractionResponse {
            r#type: InteractionCallbackType::ChannelMessageWithSource,
            data: Some(InteractionCallbackData { content }),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_ping() {
        let interaction =
            Interaction::decode(br#"{"id":"1","application_id":"2","type":1}"#).unwrap();

        assert_eq!(interaction.r#type, InteractionType::Ping);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn decodes_command_and_finds_options_by_name() {
        let payload = json!({
            "id": "10",
            "application_id": "20",
            "type": 2,
            "token": "ignored",
            "data": {
                "id": "30",
                "name": "dicebot",
                "type": 1,
                "options": [
                    { "name": "game", "type": 3, "value": "coc" },
                    { "name": "dice", "type": 3, "value": "1d100" }
                ]
            }
        });

        let interaction = Interaction::decode(payload.to_string().as_bytes()).unwrap();
        let data = interaction.data.unwrap();

        assert_eq!(interaction.r#type, InteractionType::ApplicationCommand);
        assert_eq!(data.required_str("dice"), Ok("1d100"));
        assert_eq!(data.optional_str("game"), Ok(Some("coc")));
        assert_eq!(data.optional_str("missing"), Ok(None));
    }

    #[test]
    fn keeps_unknown_interaction_types() {
        let interaction =
            Interaction::decode(br#"{"id":"1","application_id":"2","type":3}"#).unwrap();

        assert_eq!(interaction.r#type, InteractionType::Other(3));
    }

    #[test]
    fn decodes_every_option_value_shape() {
        let options: Vec<CommandOption> = serde_json::from_value(json!([
            { "name": "s", "type": 3, "value": "text" },
            { "name": "i", "type": 4, "value": 3 },
            { "name": "d", "type": 10, "value": 1.5 },
            { "name": "b", "type": 5, "value": true }
        ]))
        .unwrap();

        let values: Vec<_> = options.into_iter().map(|o| o.value.unwrap()).collect();
        assert_eq!(
            values,
            vec![
                OptionValue::String("text".into()),
                OptionValue::Integer(3),
                OptionValue::Double(1.5),
                OptionValue::Boolean(true),
            ]
        );
    }

    #[test]
    fn wrong_option_type_is_a_typed_error() {
        let data: InteractionData = serde_json::from_value(json!({
            "name": "dicebot",
            "options": [{ "name": "dice", "type": 4, "value": 100 }]
        }))
        .unwrap();

        assert_eq!(
            data.required_str("dice"),
            Err(OptionError::WrongType {
                name: "dice".into(),
                expected: "string",
                found: "integer",
            })
        );
    }

    #[test]
    fn missing_required_option() {
        let data: InteractionData =
            serde_json::from_value(json!({ "name": "dicebot", "options": [] })).unwrap();

        assert_eq!(
            data.required_str("dice"),
            Err(OptionError::Missing("dice".into()))
        );
    }

    #[test]
    fn rejects_truncated_payload() {
        assert!(Interaction::decode(br#"{"id":"1","application_id":"2","ty"#).is_err());
        assert!(Interaction::decode(b"").is_err());
    }

    #[test]
    fn pong_has_no_data_on_the_wire() {
        let value = serde_json::to_value(InteractionResponse::pong()).unwrap();

        assert_eq!(value, json!({ "type": 1 }));
    }

    #[test]
    fn message_serializes_content() {
        let value = serde_json::to_value(InteractionResponse::message("Result: 42")).unwrap();

        assert_eq!(value, json!({ "type": 4, "data": { "content": "Result: 42" } }));
    }
}
