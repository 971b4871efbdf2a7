//! SAL network stack interface
//!
//! The crate defines what a network stack has to provide to be plugged into the socket
//! abstraction layer. Stack crates (lwIP, Nanostack, picoTCP bindings, ...) should depend on
//! this crate. SAL users should depend on the `sal` crate instead.
//!
//! A stack publishes itself as a [`SocketApi`]: a descriptor carrying the stack identifier,
//! the interface layout version it was built against, and a table of [`Capabilities`]. Every
//! capability is mandatory; a descriptor with an empty entry is refused by the registry.
//!
//! The descriptor is owned by the stack, usually as a `static`. The registry keeps a shared
//! reference to it and never copies or invokes it.

#![no_std]

pub mod api;
pub mod socket;

pub use api::{Capabilities, Capability, SocketApi};
pub use socket::{EventHandler, Socket, SocketEvent, SocketOption};
