//! The actor: a per-test capability registry and interaction mediator.
//!
//! ## Overview
//!
//! An [`Actor`] is an explicit dependency-injection container keyed by
//! ability name rather than by type: multiple interchangeable
//! implementations of the same kind of ability can share a name, at the
//! cost of a caller-side downcast. All capability-dependent logic passes
//! through [`Actor::using`]; all interactions pass through
//! [`Actor::attempts_to`], [`Actor::asks_for`], or [`Actor::calls`], which
//! invoke back into the interaction with the actor itself.
//!
//! ## Usage
//!
//! ```rust
//! use screenplay_core::Actor;
//!
//! let mut actor = Actor::new("Andy");
//! actor.can_use("profile_url", "https://example.com/andy".to_string());
//!
//! let url = actor
//!     .using("profile_url")
//!     .unwrap()
//!     .downcast_ref::<String>()
//!     .expect("profile_url holds a String");
//! assert!(url.ends_with("/andy"));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::error::{MissingAbilityError, ScreenplayResult};
use crate::interaction::{Question, Task};

/// A named value an actor can use during interactions, opaque to the core.
///
/// Consumers downcast at the point of use; the concrete type expected for
/// a given ability name is a call-site contract.
pub type Ability = Box<dyn Any>;

/// The entity performing interactions in a test.
pub struct Actor {
    name: String,
    abilities: HashMap<String, Ability>,
}

impl Actor {
    /// Create an actor with the given display name and no abilities.
    ///
    /// The name is a display identity for diagnostics; uniqueness is not
    /// enforced.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: HashMap::new(),
        }
    }

    /// The actor's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register one ability, overwriting any existing entry with the same
    /// name.
    ///
    /// Callable any number of times to accumulate abilities; there is no
    /// way to remove one once added.
    pub fn can_use(&mut self, name: impl Into<String>, ability: impl Any) {
        let name = name.into();
        debug!(actor = %self.name, ability = %name, "actor can use ability");
        self.abilities.insert(name, Box::new(ability));
    }

    /// Merge a batch of already-boxed abilities into the registry.
    ///
    /// Same overwrite semantics as [`Actor::can_use`]: the last entry for a
    /// name wins, within the batch and across calls.
    pub fn register<S, I>(&mut self, abilities: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Ability)>,
    {
        for (name, ability) in abilities {
            let name = name.into();
            debug!(actor = %self.name, ability = %name, "actor can use ability");
            self.abilities.insert(name, ability);
        }
    }

    /// Whether an ability with the given name is currently registered.
    ///
    /// Never fails; false for any unregistered name.
    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.contains_key(name)
    }

    /// Sorted names of all registered abilities, for diagnostics.
    pub fn ability_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.abilities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up the ability registered under `name`.
    ///
    /// The single gate for capability lookup; there is no fallback or
    /// default-value path.
    pub fn using(&self, name: &str) -> Result<&dyn Any, MissingAbilityError> {
        match self.abilities.get(name) {
            Some(ability) => {
                debug!(actor = %self.name, ability = %name, "actor is using ability");
                Ok(ability.as_ref())
            }
            None => Err(MissingAbilityError::new(self.name.as_str(), name)),
        }
    }

    /// Like [`Actor::using`], with mutable access, so a task can
    /// communicate by mutating an ability's stored state.
    pub fn using_mut(&mut self, name: &str) -> Result<&mut dyn Any, MissingAbilityError> {
        match self.abilities.get_mut(name) {
            Some(ability) => {
                debug!(actor = %self.name, ability = %name, "actor is using ability");
                Ok(ability.as_mut())
            }
            None => Err(MissingAbilityError::new(self.name.as_str(), name)),
        }
    }

    /// Perform the given task as this actor.
    ///
    /// Any error raised during performance propagates unchanged; nothing
    /// is caught, wrapped, or retried.
    pub fn attempts_to<T>(&mut self, task: &T) -> ScreenplayResult<()>
    where
        T: Task + ?Sized,
    {
        info!(actor = %self.name, task = task.name(), "actor attempts task");
        task.perform_as(self)?;
        info!(actor = %self.name, task = task.name(), "actor performed task");
        Ok(())
    }

    /// Evaluate the given question as this actor and return its answer.
    pub fn asks_for<Q>(&mut self, question: &Q) -> ScreenplayResult<Q::Answer>
    where
        Q: Question + ?Sized,
    {
        info!(actor = %self.name, question = question.name(), "actor asks for question");
        let answer = question.request_as(self)?;
        info!(actor = %self.name, question = question.name(), "actor got an answer");
        Ok(answer)
    }

    /// Alias for [`Actor::asks_for`]; reads better at call sites that
    /// invoke a question rather than interrogate state.
    pub fn calls<Q>(&mut self, question: &Q) -> ScreenplayResult<Q::Answer>
    where
        Q: Question + ?Sized,
    {
        self.asks_for(question)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new("Actor")
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ability values are opaque `dyn Any`; only their names can print.
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("abilities", &self.ability_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_actor_has_no_abilities() {
        let actor = Actor::new("Andy");
        assert_eq!(actor.name(), "Andy");
        assert!(actor.ability_names().is_empty());
        assert!(!actor.has_ability("anything"));
    }

    #[test]
    fn test_default_actor_is_named_actor() {
        let actor = Actor::default();
        assert_eq!(actor.name(), "Actor");
        assert_eq!(actor.to_string(), "Actor");
        assert!(actor.ability_names().is_empty());
    }

    #[test]
    fn test_registering_twice_overwrites() {
        let mut actor = Actor::default();
        actor.can_use("thing", "tool1".to_string());
        actor.can_use("thing", "tool2".to_string());
        let thing = actor
            .using("thing")
            .unwrap()
            .downcast_ref::<String>()
            .unwrap();
        assert_eq!(thing, "tool2");
        assert_eq!(actor.ability_names(), vec!["thing"]);
    }

    #[test]
    fn test_register_merges_batch_entries() {
        let mut actor = Actor::default();
        actor.can_use("thing", "tool1".to_string());
        actor.register([
            ("other", Box::new("tool2".to_string()) as Ability),
            ("third", Box::new("tool3".to_string()) as Ability),
        ]);
        assert_eq!(actor.ability_names(), vec!["other", "thing", "third"]);
    }

    #[test]
    fn test_using_missing_ability_fails() {
        let actor = Actor::default();
        let err = actor.using("thing").unwrap_err();
        assert_eq!(err.actor, "Actor");
        assert_eq!(err.ability, "thing");
        assert_eq!(
            err.to_string(),
            "The actor \"Actor\" does not have an ability named \"thing\""
        );
    }

    #[test]
    fn test_using_mut_allows_in_place_mutation() {
        let mut actor = Actor::default();
        actor.can_use("counter", 41_i32);
        let counter = actor
            .using_mut("counter")
            .unwrap()
            .downcast_mut::<i32>()
            .unwrap();
        *counter += 1;
        let counter = actor
            .using("counter")
            .unwrap()
            .downcast_ref::<i32>()
            .unwrap();
        assert_eq!(*counter, 42);
    }

    #[test]
    fn test_debug_lists_ability_names_only() {
        let mut actor = Actor::new("Andy");
        actor.can_use("browser", ());
        let rendered = format!("{actor:?}");
        assert!(rendered.contains("Andy"));
        assert!(rendered.contains("browser"));
    }
}
