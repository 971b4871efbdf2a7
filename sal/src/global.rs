//! Process-wide stack registry
//!
//! Stacks linked into the firmware register here during start-up; socket front-ends look
//! them up by identifier afterwards. The table holds [`MAX_STACKS`] entries and is guarded by
//! a `CriticalSectionRawMutex`, so a `critical-section` implementation must be linked.
//!
//! Code that needs an isolated table (tests, multiple independent layers) should build its
//! own [`StackRegistry`] instead.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::MAX_STACKS;
use crate::core::StackId;
use crate::registry::{RegistrationError, StackRegistry};
use crate::stack::SocketApi;

pub type GlobalRegistry = StackRegistry<'static, CriticalSectionRawMutex, MAX_STACKS>;

static REGISTRY: GlobalRegistry = StackRegistry::new();

pub fn registry() -> &'static GlobalRegistry {
    &REGISTRY
}

/// Registers `api` in the process-wide registry, see [`StackRegistry::register`]
pub fn register_stack(api: &'static SocketApi) -> Result<(), RegistrationError> {
    REGISTRY.register(api)
}

/// Looks `stack` up in the process-wide registry, see [`StackRegistry::get_api`]
pub fn get_api(stack: StackId) -> Option<&'static SocketApi> {
    REGISTRY.get_api(stack)
}
