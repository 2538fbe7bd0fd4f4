//! FulfillTurnHandler - Dispatches a turn to its intent handler.

use std::time::Duration;

use crate::domain::{Intent, TurnRequest, TurnResponse};

use super::static_intents::{get_agent_name, welcome};
use super::{FulfillmentError, WeatherQueryHandler};

/// Default upper bound for a whole turn, external calls included.
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(10);

/// Routes a turn by intent display name and enforces the turn deadline.
///
/// Holds only shared, read-only capabilities, so one instance serves every
/// turn concurrently.
#[derive(Clone)]
pub struct FulfillTurnHandler {
    weather: WeatherQueryHandler,
    turn_timeout: Duration,
}

impl FulfillTurnHandler {
    pub fn new(weather: WeatherQueryHandler) -> Self {
        Self {
            weather,
            turn_timeout: DEFAULT_TURN_TIMEOUT,
        }
    }

    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }

    pub async fn handle(&self, request: &TurnRequest) -> Result<TurnResponse, FulfillmentError> {
        let intent = Intent::from_display_name(request.intent_name())?;

        // Dropping this future (client went away) abandons every pending
        // outbound call with it.
        tokio::time::timeout(self.turn_timeout, self.dispatch(intent, request))
            .await
            .map_err(|_| FulfillmentError::DeadlineExceeded {
                timeout_ms: self.turn_timeout.as_millis() as u64,
            })?
    }

    async fn dispatch(
        &self,
        intent: Intent,
        request: &TurnRequest,
    ) -> Result<TurnResponse, FulfillmentError> {
        match intent {
            Intent::Welcome => Ok(welcome(request)),
            Intent::GetAgentName => Ok(get_agent_name(request)),
            Intent::Weather => self.weather.handle(request).await,
        }
    }
}
