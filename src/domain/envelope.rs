//! Webhook envelope types exchanged with the dialog platform.
//!
//! Only the members this service reads are modelled. Everything else the
//! platform sends is ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// One conversation turn as posted by the dialog platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// Opaque session identifier, used for logging only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub session: String,

    /// Opaque response identifier, used for logging only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub query_result: QueryResult,
}

impl TurnRequest {
    /// Display name of the matched intent (the dispatch key).
    pub fn intent_name(&self) -> &str {
        &self.query_result.intent.display_name
    }

    /// City parameter extracted by the platform. May be empty.
    pub fn city(&self) -> &str {
        &self.query_result.parameters.location.city
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub intent: IntentRef,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Parameters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: LocationParam,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationParam {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

/// Response returned to the dialog platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub fulfillment_messages: Vec<Message>,
}

impl TurnResponse {
    /// Builds the common shape: one message carrying one string.
    pub fn single_text(text: impl Into<String>) -> Self {
        Self {
            fulfillment_messages: vec![Message::text(text)],
        }
    }

    /// First string of the first message, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.fulfillment_messages
            .first()
            .and_then(|m| m.text.text.first())
            .map(String::as_str)
    }
}

/// A fulfillment message. Only the text variant is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: TextMessage,
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: TextMessage {
                text: vec![text.into()],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: Vec<String>,
}

/// Treats an explicit JSON `null` the same as a missing member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
