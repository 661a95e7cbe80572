//! # Screenplay Core
//!
//! Actor, Task, and Question primitives for Screenplay Pattern test
//! automation.
//!
//! ## Overview
//!
//! The Screenplay Pattern models user-driven interactions through
//! composable objects rather than inheritance-based page objects. An
//! [`Actor`] holds named capabilities ("abilities") and mediates every
//! interaction: a [`Task`] is performed for its side effect, a
//! [`Question`] for a typed answer, and either may pull whatever abilities
//! it needs from the actor passed to it. Concrete abilities such as
//! browser drivers or HTTP clients are supplied by the consumer and stay
//! opaque to this crate.
//!
//! Everything is synchronous and in-memory. The actor owns its registry
//! outright; sharing one across threads is the consumer's concern.
//!
//! ## Module Organization
//!
//! - [`actor`] - The ability registry and interaction mediator
//! - [`interaction`] - The `Task` and `Question` contracts and closure adapters
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use screenplay_core::{Actor, FnQuestion, FnTask, ScreenplayError};
//!
//! # fn main() -> Result<(), ScreenplayError> {
//! let mut andy = Actor::new("Andy");
//! andy.can_use("start", 9_i32);
//!
//! let save_token = FnTask::new("save_token", |actor: &mut Actor| {
//!     actor.can_use("token", "cool".to_string());
//!     Ok(())
//! });
//! andy.attempts_to(&save_token)?;
//! assert!(andy.has_ability("token"));
//!
//! let next_number = FnQuestion::new("next_number", |actor: &mut Actor| {
//!     let start = actor
//!         .using("start")?
//!         .downcast_ref::<i32>()
//!         .copied()
//!         .expect("start holds an i32");
//!     Ok(start + 1)
//! });
//! assert_eq!(andy.asks_for(&next_number)?, 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! The actor emits [`tracing`] events around every registry mutation and
//! mediated call. No subscriber is installed by this crate; tests and
//! harnesses opt in with their own.

pub mod actor;
pub mod error;
pub mod interaction;

pub use actor::{Ability, Actor};
pub use error::{MissingAbilityError, ScreenplayError, ScreenplayResult};
pub use interaction::{FnQuestion, FnTask, Question, Task};
