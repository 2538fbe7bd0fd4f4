//! Envelope codec: request bytes in, response bytes out.

use super::FulfillmentError;
use crate::domain::{TurnRequest, TurnResponse};

/// Parses a webhook request body. Unknown members are ignored and missing
/// ones take their zero value, as does a bare `null` body. Malformed JSON,
/// a non-object body or a wrongly typed member is rejected.
pub fn decode_request(body: &[u8]) -> Result<TurnRequest, FulfillmentError> {
    serde_json::from_slice::<Option<TurnRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(FulfillmentError::Decode)
}

/// Serializes a response as `{"fulfillmentMessages": [...]}`.
pub fn encode_response(response: &TurnResponse) -> Result<Vec<u8>, FulfillmentError> {
    serde_json::to_vec(response).map_err(FulfillmentError::Encode)
}
