use std::{
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    effect::{observer_clean_up, EffectTrait},
    runtime::RUNTIME,
    signal::Signal,
};

/// A stable identifier for a signal, effect or scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub struct Id(u64);

impl Id {
    pub(crate) fn next() -> Id {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Id(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn signal(&self) -> Option<Signal> {
        RUNTIME.with(|runtime| runtime.signals.borrow().get(self).cloned())
    }

    pub(crate) fn effect(&self) -> Option<Rc<dyn EffectTrait>> {
        RUNTIME.with(|runtime| runtime.effects.borrow().get(self).cloned())
    }

    /// Registers this id as a child of the current scope.
    pub(crate) fn set_scope(&self) {
        RUNTIME.with(|runtime| {
            let scope = runtime.current_scope.get();
            runtime
                .children
                .borrow_mut()
                .entry(scope)
                .or_default()
                .insert(*self);
        });
    }

    pub(crate) fn add_cleanup(&self, cleanup: Box<dyn FnOnce()>) {
        RUNTIME.with(|runtime| {
            runtime
                .cleanups
                .borrow_mut()
                .entry(*self)
                .or_default()
                .push(cleanup);
        });
    }

    /// Removes this id from the runtime: children first, then the signal or
    /// effect stored under it, then its cleanups in registration order.
    ///
    /// Does nothing once the thread local runtime is being torn down.
    pub(crate) fn dispose(&self) {
        let Ok((signal, effect)) = RUNTIME.try_with(|runtime| {
            (
                runtime.signals.borrow_mut().remove(self),
                runtime.effects.borrow_mut().remove(self),
            )
        }) else {
            return;
        };

        self.dispose_children();
        // Subscribers keep only ids, so a dropped signal needs no detaching.
        drop(signal);
        if let Some(effect) = effect {
            observer_clean_up(effect.as_ref());
        }
        self.run_cleanups();
    }

    /// Disposes everything created under this id but keeps the id itself.
    pub(crate) fn reset(&self) {
        self.dispose_children();
        self.run_cleanups();
    }

    fn dispose_children(&self) {
        let Ok(children) = RUNTIME.try_with(|runtime| runtime.children.borrow_mut().remove(self))
        else {
            return;
        };
        for child in children.into_iter().flatten() {
            child.dispose();
        }
    }

    fn run_cleanups(&self) {
        let Ok(cleanups) = RUNTIME.try_with(|runtime| runtime.cleanups.borrow_mut().remove(self))
        else {
            return;
        };
        for cleanup in cleanups.into_iter().flatten() {
            cleanup();
        }
    }
}
