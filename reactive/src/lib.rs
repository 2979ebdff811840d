//! A small fine-grained reactive runtime.
//!
//! [`RwSignal`] holds state, [`create_effect`] re-runs a closure whenever a
//! signal it read changes, and [`Scope`] owns signals, effects and cleanup
//! callbacks so that everything created for a component can be torn down with
//! a single [`Scope::dispose`].
//!
//! All state lives in a thread local runtime. Handles are `Copy` ids and must
//! only be used on the thread that created them.

mod effect;
mod id;
mod runtime;
mod scope;
mod signal;

pub use effect::create_effect;
pub use scope::{on_cleanup, with_scope, Scope};
pub use signal::RwSignal;
