//! Error types for the screenplay core.

use std::error::Error as StdError;

use thiserror::Error;

/// Returned when an actor is asked to use an ability it does not hold.
///
/// Carries the actor's display name and the requested ability name, enough
/// to diagnose a misconfigured test from the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The actor \"{actor}\" does not have an ability named \"{ability}\"")]
pub struct MissingAbilityError {
    /// Display name of the actor that lacked the ability.
    pub actor: String,
    /// Name of the ability that was requested.
    pub ability: String,
}

impl MissingAbilityError {
    pub fn new(actor: impl Into<String>, ability: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            ability: ability.into(),
        }
    }
}

/// Any failure flowing out of a mediated interaction.
///
/// `MissingAbility` is the only error the core raises on its own. Whatever
/// a concrete task or question fails with travels in `Interaction`,
/// unchanged.
#[derive(Debug, Error)]
pub enum ScreenplayError {
    /// An actor was asked to use an ability it does not hold.
    #[error(transparent)]
    MissingAbility(#[from] MissingAbilityError),

    /// A failure raised by a concrete task or question implementation.
    #[error(transparent)]
    Interaction(Box<dyn StdError + Send + Sync + 'static>),
}

impl ScreenplayError {
    /// Wrap an implementation-defined failure for propagation.
    pub fn interaction(err: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self::Interaction(err.into())
    }

    /// The missing-ability payload, if that is what this error is.
    pub fn as_missing_ability(&self) -> Option<&MissingAbilityError> {
        match self {
            Self::MissingAbility(err) => Some(err),
            Self::Interaction(_) => None,
        }
    }
}

pub type ScreenplayResult<T> = Result<T, ScreenplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ability_message_format() {
        let err = MissingAbilityError::new("Andy", "browser");
        assert_eq!(
            err.to_string(),
            "The actor \"Andy\" does not have an ability named \"browser\""
        );
        assert_eq!(err.actor, "Andy");
        assert_eq!(err.ability, "browser");
    }

    #[test]
    fn test_missing_ability_converts_into_screenplay_error() {
        let err: ScreenplayError = MissingAbilityError::new("Andy", "browser").into();
        let missing = err.as_missing_ability().unwrap();
        assert_eq!(missing.ability, "browser");
        // Transparent: the umbrella renders exactly the inner message.
        assert_eq!(
            err.to_string(),
            "The actor \"Andy\" does not have an ability named \"browser\""
        );
    }

    #[test]
    fn test_interaction_error_renders_inner_message() {
        #[derive(Debug, Error)]
        #[error("connection refused")]
        struct ConnectionRefused;

        let err = ScreenplayError::interaction(ConnectionRefused);
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.as_missing_ability().is_none());
    }
}
