//! # SAL
//!
//! Socket abstraction layer stack registry for no_std environments.
//!
//! Several network stacks (lwIP, Nanostack, picoTCP, ...) can be linked into one image. Each
//! describes itself with a [`SocketApi`](stack::SocketApi) descriptor and registers it under
//! a [`StackId`](core::StackId). Socket front-ends then fetch the descriptor by identifier.
//! The registry uses a fixed-size table, requires no dynamic memory allocation, and checks
//! descriptors when they are registered rather than when their entry points are called.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  register   ┌───────────────┐  get_api   ┌────────────────┐
//! │ Stack A    ├────────────►│               │◄───────────┤ Socket         │
//! │ (SocketApi)│             │ StackRegistry │            │ front-end      │
//! └────────────┘             │  [Entry; N]   ├───────────►│                │
//! ┌────────────┐  register   │               │ &SocketApi └────────────────┘
//! │ Stack B    ├────────────►│               │
//! │ (SocketApi)│             └───────────────┘
//! └────────────┘
//! ```
//! Components:
//! * _StackId_ identifies a stack. `UNINIT` and `MAX` bracket the valid range and are never
//!   registered.
//! * _SocketApi_ is the stack-owned descriptor: identifier, interface layout version and the
//!   table of entry points. Every entry point is mandatory.
//! * _StackRegistry_ keeps up to `N` descriptor references in registration order. Each
//!   identifier and each descriptor object is accepted at most once.
//! * _global_ is the single process-wide registry sized by [`config::MAX_STACKS`].
//!
//! ## Concurrency model
//!
//! The registry is generic over an `embassy_sync` raw mutex. Registration validates and
//! appends inside one critical section; lookups take the same lock for an O(N) scan.
//! Entries are never moved or removed, so a returned reference stays valid for the
//! registry's lifetime.
//!
//! ## Logging
//!
//! Enable either the `defmt` or the `log` feature to get registration traces.
#![no_std]

pub use sal_core as core;
pub use sal_stack as stack;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod global;
pub mod registry;

pub use registry::{RegistrationError, StackRegistry};
