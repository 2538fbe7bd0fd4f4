//! Intents this webhook knows how to fulfil.

use std::fmt;
use thiserror::Error;

/// A recognized intent, keyed by the platform's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Welcome,
    GetAgentName,
    Weather,
}

/// Raised for any display name outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown intent: {0}")]
pub struct UnknownIntent(pub String);

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Welcome, Intent::GetAgentName, Intent::Weather];

    /// Exact, case-sensitive lookup of a display name.
    pub fn from_display_name(name: &str) -> Result<Self, UnknownIntent> {
        match name {
            "Default Welcome Intent" => Ok(Intent::Welcome),
            "get-agent-name" => Ok(Intent::GetAgentName),
            "weather" => Ok(Intent::Weather),
            other => Err(UnknownIntent(other.to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::Welcome => "Default Welcome Intent",
            Intent::GetAgentName => "get-agent-name",
            Intent::Weather => "weather",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn recognized_names_resolve() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_display_name(intent.display_name()), Ok(intent));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(Intent::from_display_name("Weather").is_err());
        assert!(Intent::from_display_name("default welcome intent").is_err());
        assert!(Intent::from_display_name(" weather").is_err());
    }

    #[test]
    fn unknown_intent_message_carries_name() {
        let err = Intent::from_display_name("unknown").unwrap_err();
        assert_eq!(err.to_string(), "Unknown intent: unknown");
    }

    proptest! {
        #[test]
        fn unrecognized_names_are_rejected(name in ".*") {
            prop_assume!(Intent::ALL.iter().all(|i| i.display_name() != name));
            prop_assert_eq!(
                Intent::from_display_name(&name),
                Err(UnknownIntent(name.clone()))
            );
        }
    }
}
