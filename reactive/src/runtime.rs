use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    rc::Rc,
};

use smallvec::SmallVec;

use crate::{effect::EffectTrait, id::Id, signal::Signal};

thread_local! {
    pub(crate) static RUNTIME: Runtime = Runtime::new();
}

pub(crate) type Cleanups = SmallVec<[Box<dyn FnOnce()>; 2]>;

/// Per-thread owner of every signal, effect and cleanup, keyed by [`Id`].
///
/// Effects live here rather than in the signals they read, so disposing the
/// scope that created an effect is enough to stop it.
pub(crate) struct Runtime {
    pub(crate) current_effect: RefCell<Option<Rc<dyn EffectTrait>>>,
    pub(crate) current_scope: Cell<Id>,
    pub(crate) children: RefCell<HashMap<Id, HashSet<Id>>>,
    pub(crate) signals: RefCell<HashMap<Id, Signal>>,
    pub(crate) effects: RefCell<HashMap<Id, Rc<dyn EffectTrait>>>,
    pub(crate) cleanups: RefCell<HashMap<Id, Cleanups>>,
}

impl Runtime {
    fn new() -> Self {
        Self {
            current_effect: RefCell::new(None),
            current_scope: Cell::new(Id::next()),
            children: RefCell::default(),
            signals: RefCell::default(),
            effects: RefCell::default(),
            cleanups: RefCell::default(),
        }
    }
}
