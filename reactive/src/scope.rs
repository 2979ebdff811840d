use std::fmt;

use crate::{id::Id, runtime::RUNTIME};

/// Owner of signals, effects, cleanups and child scopes.
///
/// Disposing a scope disposes its children, stops its effects, drops its
/// signals and then runs its cleanups.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scope(pub(crate) Id);

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scope").field(&self.0).finish()
    }
}

impl Scope {
    /// A root scope, not owned by any other.
    pub fn new() -> Self {
        Self(Id::next())
    }

    /// The scope that currently owns newly created signals and effects.
    pub fn current() -> Scope {
        RUNTIME.with(|runtime| Scope(runtime.current_scope.get()))
    }

    /// A scope disposed together with this one.
    pub fn create_child(&self) -> Scope {
        let child = Id::next();
        RUNTIME.with(|runtime| {
            runtime
                .children
                .borrow_mut()
                .entry(self.0)
                .or_default()
                .insert(child);
        });
        Scope(child)
    }

    /// Runs `f` when this scope is disposed.
    pub fn on_cleanup(self, f: impl FnOnce() + 'static) {
        self.0.add_cleanup(Box::new(f));
    }

    pub fn dispose(&self) {
        self.0.dispose();
    }
}

/// Runs `f` with `scope` as the current scope.
pub fn with_scope<T>(scope: Scope, f: impl FnOnce() -> T) -> T {
    let prev_scope = RUNTIME.with(|runtime| runtime.current_scope.replace(scope.0));
    let result = f();
    RUNTIME.with(|runtime| runtime.current_scope.set(prev_scope));
    result
}

/// Registers `f` to run when the current scope is disposed.
///
/// Inside an effect the current scope is the effect itself, so the callback
/// also runs right before the effect's next run.
pub fn on_cleanup(f: impl FnOnce() + 'static) {
    Scope::current().on_cleanup(f);
}
