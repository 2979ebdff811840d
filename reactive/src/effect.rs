use std::{cell::RefCell, collections::HashSet, rc::Rc};

use crate::{
    id::Id,
    runtime::RUNTIME,
    scope::{with_scope, Scope},
};

pub(crate) trait EffectTrait {
    fn id(&self) -> Id;
    fn run(&self);
    fn add_observer(&self, signal: Id);
    fn take_observers(&self) -> HashSet<Id>;
}

struct Effect<T, F> {
    id: Id,
    f: F,
    value: RefCell<Option<T>>,
    observers: RefCell<HashSet<Id>>,
}

impl<T, F> EffectTrait for Effect<T, F>
where
    F: Fn(Option<T>) -> T,
{
    fn id(&self) -> Id {
        self.id
    }

    fn run(&self) {
        let prev_value = self.value.borrow_mut().take();
        let new_value = (self.f)(prev_value);
        *self.value.borrow_mut() = Some(new_value);
    }

    fn add_observer(&self, signal: Id) {
        self.observers.borrow_mut().insert(signal);
    }

    fn take_observers(&self) -> HashSet<Id> {
        self.observers.take()
    }
}

/// Runs `f` now, then again whenever a signal it read during its last run is
/// set. `f` receives the value it returned on the previous run.
///
/// The effect belongs to the current [`Scope`] and stops for good when that
/// scope is disposed, even if the signals it reads live elsewhere.
pub fn create_effect<T>(f: impl Fn(Option<T>) -> T + 'static)
where
    T: 'static,
{
    let id = Id::next();
    let effect: Rc<dyn EffectTrait> = Rc::new(Effect {
        id,
        f,
        value: RefCell::new(None),
        observers: RefCell::new(HashSet::new()),
    });
    id.set_scope();
    RUNTIME.with(|runtime| runtime.effects.borrow_mut().insert(id, effect.clone()));

    run_effect(effect);
}

pub(crate) fn run_effect(effect: Rc<dyn EffectTrait>) {
    let id = effect.id();
    // Whatever the previous run created is owned by it and goes away now.
    id.reset();
    observer_clean_up(effect.as_ref());

    let prev_effect =
        RUNTIME.with(|runtime| runtime.current_effect.replace(Some(effect.clone())));
    with_scope(Scope(id), || effect.run());
    RUNTIME.with(|runtime| {
        *runtime.current_effect.borrow_mut() = prev_effect;
    });
}

/// Unsubscribes the effect from every signal it read, so the next run tracks
/// from scratch.
pub(crate) fn observer_clean_up(effect: &dyn EffectTrait) {
    for signal in effect.take_observers() {
        if let Some(signal) = signal.signal() {
            signal.subscribers.borrow_mut().remove(&effect.id());
        }
    }
}
