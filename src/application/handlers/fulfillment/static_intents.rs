//! Intents answered with a fixed message.

use crate::domain::{TurnRequest, TurnResponse};

pub const WELCOME_TEXT: &str = "Welcome from Dialogflow Go Webhook";
pub const AGENT_NAME_TEXT: &str = "My name is Dialogflow Go Webhook";

/// `Default Welcome Intent`.
pub fn welcome(_request: &TurnRequest) -> TurnResponse {
    TurnResponse::single_text(WELCOME_TEXT)
}

/// `get-agent-name`.
pub fn get_agent_name(_request: &TurnRequest) -> TurnResponse {
    TurnResponse::single_text(AGENT_NAME_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_text_is_stable() {
        let response = welcome(&TurnRequest::default());
        assert_eq!(response.fulfillment_messages.len(), 1);
        assert_eq!(response.first_text(), Some("Welcome from Dialogflow Go Webhook"));
    }

    #[test]
    fn agent_name_text_is_stable() {
        let response = get_agent_name(&TurnRequest::default());
        assert_eq!(response.fulfillment_messages[0].text.text, vec![AGENT_NAME_TEXT]);
    }
}
