use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use log::trace;

use crate::{Error, State};

/// Typed storage for the states of one application instance.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn Any>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any previous instance of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        trace!("add state {} ({})", T::TYPE, type_name::<T>());
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn get<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    pub fn get_mut<T: State>(&mut self) -> Option<&mut T> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
    }

    /// Like [`StateCtx::get`], but reports which state was missing.
    pub fn state<T: State>(&self) -> Result<&T, Error> {
        self.get::<T>()
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::state"))
    }

    /// Applies `f` to the registered `T`.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) -> Result<(), Error> {
        let state = self
            .get_mut::<T>()
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::update"))?;
        f(state);
        Ok(())
    }
}

#[cfg(test)]
mod state_ctx_test {
    use super::*;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Counter(u32);

    impl State for Counter {}

    #[derive(Debug, Default)]
    struct Label(&'static str);

    impl State for Label {}

    #[test]
    fn stores_states_by_type() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));
        ctx.add_state(Label("one"));

        assert_eq!(ctx.get::<Counter>(), Some(&Counter(1)));
        assert_eq!(ctx.get::<Label>().map(|l| l.0), Some("one"));
    }

    #[test]
    fn add_state_replaces_previous_instance() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));
        ctx.add_state(Counter(7));

        assert_eq!(ctx.get::<Counter>(), Some(&Counter(7)));
    }

    #[test]
    fn update_mutates_in_place() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));

        ctx.update::<Counter>(|c| c.0 += 2).unwrap();

        assert_eq!(ctx.state::<Counter>().unwrap(), &Counter(3));
    }

    #[test]
    fn missing_state_reports_type_name() {
        let mut ctx = StateCtx::new();

        let err = ctx.update::<Counter>(|c| c.0 += 1).unwrap_err();

        assert!(err.to_string().contains("Counter"), "got: {err}");
        assert!(ctx.state::<Label>().is_err());
    }
}
