//! Single-subscriber interaction that acts on a stockpile when triggered.
use std::fmt;

use bevy::log::info;

use super::stockpile::Stockpile;

type InteractionAction = Box<dyn Fn(&mut Stockpile) + Send + Sync>;

/// Labels describing who triggers an interaction and who receives it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionSettings {
    /// Optional label for the trigger, logged as `unknown` when absent.
    pub source: Option<String>,
    pub receiver: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionError {
    MissingReceiver,
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReceiver => write!(f, "interaction receiver cannot be empty"),
        }
    }
}

impl std::error::Error for InteractionError {}

/// An action subscribed once and run on every invocation.
pub struct InteractionBinding {
    source: Option<String>,
    receiver: String,
    action: InteractionAction,
}

impl InteractionBinding {
    pub fn new(
        settings: InteractionSettings,
        action: impl Fn(&mut Stockpile) + Send + Sync + 'static,
    ) -> Result<Self, InteractionError> {
        if settings.receiver.trim().is_empty() {
            return Err(InteractionError::MissingReceiver);
        }

        Ok(Self {
            source: settings.source.filter(|source| !source.trim().is_empty()),
            receiver: settings.receiver,
            action: Box::new(action),
        })
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Runs the subscribed action once against `target`.
    pub fn invoke_once(&self, target: &mut Stockpile) {
        info!(
            "[Interaction] Invoked from {} to {}.",
            self.source().unwrap_or("unknown"),
            self.receiver()
        );
        (self.action)(target);
    }
}

impl fmt::Debug for InteractionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionBinding")
            .field("source", &self.source)
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::stockpile::StockpileSettings;

    #[test]
    fn empty_receiver_is_rejected() {
        let result = InteractionBinding::new(InteractionSettings::default(), |_| {});
        assert_eq!(result.unwrap_err(), InteractionError::MissingReceiver);
    }

    #[test]
    fn invoke_runs_action_exactly_once() {
        let binding = InteractionBinding::new(
            InteractionSettings {
                source: Some("Gather Button".to_string()),
                receiver: "Stone".to_string(),
            },
            |stockpile| {
                let _ = stockpile.add(5);
            },
        )
        .unwrap();

        let mut stone = Stockpile::from_settings(StockpileSettings {
            name: "Stone".to_string(),
            amount: 0,
            capacity: 100,
        });

        binding.invoke_once(&mut stone);
        assert_eq!(stone.get(), 5);
        binding.invoke_once(&mut stone);
        assert_eq!(stone.get(), 10);

        assert_eq!(binding.source(), Some("Gather Button"));
        assert_eq!(binding.receiver(), "Stone");
    }

    #[test]
    fn blank_source_is_reported_as_unknown() {
        let binding = InteractionBinding::new(
            InteractionSettings {
                source: Some("  ".to_string()),
                receiver: "Stone".to_string(),
            },
            |_| {},
        )
        .unwrap();
        assert_eq!(binding.source(), None);
        assert!(format!("{:?}", binding).contains("Stone"));
    }
}
