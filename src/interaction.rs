//! The `Task` and `Question` contracts for actor-mediated interactions.
//!
//! Concrete tasks and questions are independent implementers of these
//! traits, not subclasses sharing behavior. Whatever parameters an
//! interaction needs are fields of the implementing type, closed over at
//! construction. The [`FnTask`] and [`FnQuestion`] adapters cover ad-hoc
//! interactions where a named closure is enough.

use std::any::type_name;

use crate::actor::Actor;
use crate::error::ScreenplayResult;

/// An interaction performed for its side effect.
pub trait Task {
    /// Perform this task as the given actor.
    ///
    /// Implementations may pull capabilities with [`Actor::using`] or
    /// [`Actor::using_mut`] (a missing ability must propagate, not be
    /// swallowed) and may attempt sub-tasks or ask sub-questions through
    /// the actor. There is no return value; a task communicates by
    /// mutating an ability's stored state or registering a new ability.
    fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()>;

    /// Name used in diagnostic logs.
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}

/// An interaction performed to compute and return an answer.
///
/// Questions hold the same composition rights as tasks, but by convention
/// stay free of actor-state mutation. The convention is not enforced.
pub trait Question {
    /// The type of answer this question produces.
    type Answer;

    /// Evaluate this question as the given actor.
    fn request_as(&self, actor: &mut Actor) -> ScreenplayResult<Self::Answer>;

    /// Name used in diagnostic logs.
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}

/// A task that runs a closure.
pub struct FnTask<F> {
    name: String,
    func: F,
}

impl<F> FnTask<F>
where
    F: Fn(&mut Actor) -> ScreenplayResult<()>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Task for FnTask<F>
where
    F: Fn(&mut Actor) -> ScreenplayResult<()>,
{
    fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        (self.func)(actor)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A question that runs a closure.
pub struct FnQuestion<F> {
    name: String,
    func: F,
}

impl<F, A> FnQuestion<F>
where
    F: Fn(&mut Actor) -> ScreenplayResult<A>,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F, A> Question for FnQuestion<F>
where
    F: Fn(&mut Actor) -> ScreenplayResult<A>,
{
    type Answer = A;

    fn request_as(&self, actor: &mut Actor) -> ScreenplayResult<A> {
        (self.func)(actor)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
