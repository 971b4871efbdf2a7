//! Stack API registry
//!
//! A fixed-capacity table of stack descriptors keyed by [`StackId`]. Entries are appended in
//! registration order and stay for the registry's lifetime; there is no removal.
//!
//! ## Examples
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use sal::core::{ABSTRACTION_LAYER_VERSION, StackId};
//! use sal::registry::{RegistrationError, StackRegistry};
//! use sal::stack::{Capabilities, Capability, SocketApi};
//!
//! let partial = SocketApi::new(
//!     StackId::LWIP_IPV4,
//!     ABSTRACTION_LAYER_VERSION,
//!     Capabilities::NONE,
//! );
//! let registry = StackRegistry::<NoopRawMutex, 2>::new();
//!
//! assert_eq!(
//!     registry.register(&partial),
//!     Err(RegistrationError::IncompleteInterface(Capability::Init))
//! );
//! assert!(registry.get_api(StackId::LWIP_IPV4).is_none());
//! ```
//!
//! A registry for the whole program can live in a `static`:
//! ```
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use sal::registry::StackRegistry;
//!
//! static REGISTRY: StackRegistry<'static, CriticalSectionRawMutex, 4> = StackRegistry::new();
//! assert!(REGISTRY.is_empty());
//! ```

use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::core::{ABSTRACTION_LAYER_VERSION, StackId};
use crate::stack::{Capability, SocketApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationError {
    /// The identifier is `UNINIT` or not below `MAX`
    InvalidIdentifier,
    /// The descriptor was built against another interface layout
    VersionMismatch,
    /// The descriptor lacks a mandatory entry point
    IncompleteInterface(Capability),
    /// Another descriptor is already registered under the identifier
    DuplicateIdentifier,
    /// The descriptor object is already registered, possibly under another identifier
    DuplicateObject,
    /// Every slot is occupied
    RegistryFull,
}

impl core::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistrationError::InvalidIdentifier => f.write_str("invalid stack identifier"),
            RegistrationError::VersionMismatch => f.write_str("abstraction layer version mismatch"),
            RegistrationError::IncompleteInterface(cap) => {
                write!(f, "stack interface lacks `{}`", cap)
            }
            RegistrationError::DuplicateIdentifier => {
                f.write_str("stack identifier already registered")
            }
            RegistrationError::DuplicateObject => f.write_str("descriptor already registered"),
            RegistrationError::RegistryFull => f.write_str("no stack slot left"),
        }
    }
}

impl core::error::Error for RegistrationError {}

/// Accepted registration
///
/// The identifier is captured at acceptance; the descriptor field may change afterwards.
#[derive(Clone, Copy)]
struct Entry<'a> {
    stack: StackId,
    api: &'a SocketApi,
}

/// Append-only slot table with an explicit occupancy counter
struct Inner<'a, const N: usize> {
    slots: [Option<Entry<'a>>; N],
    len: usize,
}

impl<'a, const N: usize> Inner<'a, N> {
    const fn new() -> Self {
        Self {
            slots: [None; N],
            len: 0,
        }
    }

    fn entries(&self) -> impl Iterator<Item = &Entry<'a>> {
        self.slots[..self.len].iter().flatten()
    }

    fn reg_register(
        &mut self,
        version: u32,
        api: &'a SocketApi,
    ) -> Result<StackId, RegistrationError> {
        let stack = api.stack();
        check_descriptor(stack, version, api)?;

        if self.find(stack).is_some() {
            return Err(RegistrationError::DuplicateIdentifier);
        }
        if self.entries().any(|entry| core::ptr::eq(entry.api, api)) {
            return Err(RegistrationError::DuplicateObject);
        }

        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(RegistrationError::RegistryFull)?;
        *slot = Some(Entry { stack, api });
        self.len += 1;
        Ok(stack)
    }

    fn find(&self, stack: StackId) -> Option<&'a SocketApi> {
        self.entries()
            .find(|entry| entry.stack == stack)
            .map(|entry| entry.api)
    }
}

/// Structural checks that do not depend on the table contents
fn check_descriptor(
    stack: StackId,
    version: u32,
    api: &SocketApi,
) -> Result<(), RegistrationError> {
    if !stack.is_valid() {
        return Err(RegistrationError::InvalidIdentifier);
    }
    if api.version != version {
        return Err(RegistrationError::VersionMismatch);
    }
    if let Some(cap) = api.ops.missing() {
        return Err(RegistrationError::IncompleteInterface(cap));
    }
    Ok(())
}

/// Registry of up to `N` stack descriptors
///
/// Registration runs validation and insertion in a single critical section of `M`, so the
/// uniqueness checks hold under concurrent registration. Critical sections are bounded by
/// `N` entry comparisons.
///
/// Use `CriticalSectionRawMutex` for a registry shared across threads or interrupt levels,
/// `NoopRawMutex` for a registry confined to a single context.
pub struct StackRegistry<'a, M: RawMutex, const N: usize> {
    version: u32,
    inner: Mutex<M, RefCell<Inner<'a, N>>>,
}

impl<'a, M: RawMutex, const N: usize> StackRegistry<'a, M, N> {
    /// Creates an empty registry expecting [`ABSTRACTION_LAYER_VERSION`]
    pub const fn new() -> Self {
        Self::with_version(ABSTRACTION_LAYER_VERSION)
    }

    /// Creates an empty registry expecting descriptors of `version`
    pub const fn with_version(version: u32) -> Self {
        Self {
            version,
            inner: Mutex::new(RefCell::new(Inner::new())),
        }
    }

    /// Registers a stack descriptor
    ///
    /// Checks run in order and the first failure is returned:
    /// identifier range, version, entry point completeness, identifier uniqueness,
    /// descriptor uniqueness (by address), free capacity.
    /// The table is left untouched on failure.
    ///
    /// The descriptor is borrowed for the registry's lifetime and returned as is by
    /// [`get_api`](Self::get_api).
    pub fn register(&self, api: &'a SocketApi) -> Result<(), RegistrationError> {
        let (stack, len) = self.inner.lock(|cell| {
            let mut inner = cell.borrow_mut();
            inner
                .reg_register(self.version, api)
                .map(|stack| (stack, inner.len))
        })?;
        debug!("registered stack {} ({}/{})", stack.into_u8(), len, N);
        Ok(())
    }

    /// Returns the descriptor registered under `stack`
    ///
    /// Never fails; sentinels and unregistered identifiers yield `None`.
    pub fn get_api(&self, stack: StackId) -> Option<&'a SocketApi> {
        let api = self.inner.lock(|cell| cell.borrow().find(stack));
        if api.is_none() {
            trace!("no stack registered as {}", stack.into_u8());
        }
        api
    }

    pub fn contains(&self, stack: StackId) -> bool {
        self.inner.lock(|cell| cell.borrow().find(stack).is_some())
    }

    /// Registered identifiers in registration order
    pub fn stacks(&self) -> heapless::Vec<StackId, N> {
        self.inner
            .lock(|cell| cell.borrow().entries().map(|entry| entry.stack).collect())
    }

    /// Calls `f` for every stack registered at the time of the call, in registration order
    ///
    /// `f` runs outside the critical section and may use the registry, including `register`.
    /// Stacks registered by `f` are not visited.
    pub fn for_each(&self, mut f: impl FnMut(StackId, &'a SocketApi)) {
        let (slots, len) = self.inner.lock(|cell| {
            let inner = cell.borrow();
            (inner.slots, inner.len)
        });
        for entry in slots[..len].iter().flatten() {
            f(entry.stack, entry.api);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock(|cell| cell.borrow().len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Interface layout version required from descriptors
    pub const fn version(&self) -> u32 {
        self.version
    }
}

impl<M: RawMutex, const N: usize> Default for StackRegistry<'_, M, N> {
    fn default() -> Self {
        Self::new()
    }
}
