use std::{any::Any, cell::RefCell, collections::HashSet, fmt, marker::PhantomData, rc::Rc};

use crate::{effect::run_effect, id::Id, runtime::RUNTIME};

/// Reactive state owned by the scope it was created in.
///
/// Reads through [`get`](Self::get) or [`with`](Self::with) inside an effect
/// subscribe that effect; [`set`](Self::set) re-runs every subscriber.
pub struct RwSignal<T> {
    id: Id,
    ty: PhantomData<T>,
}

impl<T> Copy for RwSignal<T> {}

impl<T> Clone for RwSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for RwSignal<T> {}

impl<T> PartialEq for RwSignal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> fmt::Debug for RwSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RwSignal").field("id", &self.id).finish()
    }
}

impl<T: 'static> RwSignal<T> {
    pub fn new(value: T) -> Self {
        let id = Id::next();
        let signal = Signal {
            id,
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::default(),
        };
        RUNTIME.with(|runtime| runtime.signals.borrow_mut().insert(id, signal));
        id.set_scope();
        Self {
            id,
            ty: PhantomData,
        }
    }

    /// `None` once the owning scope is disposed. Subscribes the running effect.
    pub fn try_with<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        let signal = self.id.signal()?;
        signal.track();
        let value = signal.value::<T>().borrow();
        Some(f(&value))
    }

    /// # Panics
    /// If the owning scope is disposed.
    pub fn with<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        self.try_with(f).expect("signal read after its scope was disposed")
    }

    /// Like [`with`](Self::with) without subscribing the running effect.
    pub fn with_untracked<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        let signal = self
            .id
            .signal()
            .expect("signal read after its scope was disposed");
        let value = signal.value::<T>().borrow();
        f(&value)
    }

    /// Replaces the value and re-runs subscribers. Ignored once disposed.
    pub fn set(&self, value: T) {
        if let Some(signal) = self.id.signal() {
            *signal.value::<T>().borrow_mut() = value;
            signal.notify();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.id.signal().is_none()
    }
}

impl<T: Clone + 'static> RwSignal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn try_get(&self) -> Option<T> {
        self.try_with(T::clone)
    }
}

/// Type-erased storage behind an [`RwSignal`]. Subscribers are effect ids,
/// resolved through the runtime when the signal changes.
#[derive(Clone)]
pub(crate) struct Signal {
    id: Id,
    value: Rc<dyn Any>,
    pub(crate) subscribers: Rc<RefCell<HashSet<Id>>>,
}

impl Signal {
    fn value<T: 'static>(&self) -> &RefCell<T> {
        self.value
            .downcast_ref::<RefCell<T>>()
            .expect("signal accessed with a different type")
    }

    fn track(&self) {
        RUNTIME.with(|runtime| {
            if let Some(effect) = runtime.current_effect.borrow().as_ref() {
                self.subscribers.borrow_mut().insert(effect.id());
                effect.add_observer(self.id);
            }
        });
    }

    fn notify(&self) {
        let subscribers: Vec<Id> = self.subscribers.borrow().iter().copied().collect();
        for id in subscribers {
            // An earlier subscriber may have disposed this one.
            if let Some(effect) = id.effect() {
                run_effect(effect);
            }
        }
    }
}
