//! Entity event wiring
//!
//! Zero-payload notifications routed by kind. Emitting entities implement
//! [`Invoker`] and hold a [`Signal`] per supported kind; the [`EventRegistry`]
//! wires listeners into emitters regardless of registration order.

mod kind;
mod registry;
mod signal;

pub use kind::{EVENT_KIND_COUNT, EventKind};
pub use registry::{EmitterHandle, EventRegistry, Invoker};
pub use signal::{Listener, Signal};
