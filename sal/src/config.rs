//! Compile-time registry configuration

/// Number of stacks the process-wide registry can hold
///
/// Sizes [`crate::global`]. Registries built with [`crate::registry::StackRegistry::new`]
/// choose their own capacity.
pub const MAX_STACKS: usize = 2;

pub use crate::core::ABSTRACTION_LAYER_VERSION;

const _: () = assert!(MAX_STACKS > 0);
