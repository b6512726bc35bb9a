use std::any::Any;

/// Marker for values stored in a [`crate::StateCtx`].
///
/// The context keys entries by concrete type, so each `State` type has at most
/// one live instance per context.
pub trait State: Any {
    const TYPE: &'static str = "state";
}
