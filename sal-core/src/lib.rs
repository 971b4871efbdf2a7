//! Socket abstraction layer core data types
//!
//! This crate provides basic data type definitions used by other SAL crates.
//! SAL users should not depend on this crate directly. Use `sal::core` reexport instead.
#![no_std]

mod addr;

pub use addr::SocketAddr;

/// Version of the socket abstraction layer interface layout.
///
/// A stack descriptor built against a different layout carries a different version and is
/// rejected at registration.
pub const ABSTRACTION_LAYER_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidValue;

impl core::fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("invalid value")
    }
}

impl core::error::Error for InvalidValue {}

/// Network stack identifier
///
/// The raw encoding has three zones: `UNINIT` (0) marks a descriptor that was never set up,
/// `1..MAX` are concrete stacks, and `MAX` is an exclusive upper bound. Neither sentinel may
/// be registered. Any raw value is representable so that foreign descriptors can be checked
/// rather than truncated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackId(u8);

impl StackId {
    pub const UNINIT: StackId = StackId(0);
    pub const LWIP_IPV4: StackId = StackId(1);
    pub const LWIP_IPV6: StackId = StackId(2);
    pub const RESERVED: StackId = StackId(3);
    pub const NANOSTACK_IPV6: StackId = StackId(4);
    pub const PICOTCP: StackId = StackId(5);
    pub const MAX: StackId = StackId(6);

    /// Returns a concrete stack identifier, `None` for sentinels and out-of-range values
    pub const fn new(value: u8) -> Option<Self> {
        let id = Self(value);
        if id.is_valid() { Some(id) } else { None }
    }

    /// Wraps any raw value, including sentinels
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    pub const fn into_u8(self) -> u8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != Self::UNINIT.0 && self.0 < Self::MAX.0
    }

    /// Next raw identifier, saturating at `u8::MAX`
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Iterates over all concrete stack identifiers in ascending order
    pub fn valid() -> impl Iterator<Item = StackId> {
        (Self::UNINIT.0 + 1..Self::MAX.0).map(StackId)
    }
}

impl Default for StackId {
    fn default() -> Self {
        Self::UNINIT
    }
}

impl From<StackId> for u8 {
    fn from(value: StackId) -> Self {
        value.into_u8()
    }
}

impl From<StackId> for usize {
    fn from(value: StackId) -> Self {
        u8::from(value).into()
    }
}

impl TryFrom<u8> for StackId {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidValue)
    }
}

/// Errors reported by stack operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocketError {
    Unknown,
    Unimplemented,
    Busy,
    NullPtr,
    BadFamily,
    Timeout,
    BadAlloc,
    NoConnection,
    Size,
    Stack,
    Unbound,
    BadArgument,
    BadAddress,
    DnsFailed,
    WouldBlock,
    Closed,
    AlreadyConnected,
}

impl core::fmt::Display for SocketError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SocketError::Unknown => "unknown error",
            SocketError::Unimplemented => "operation not implemented by the stack",
            SocketError::Busy => "stack busy",
            SocketError::NullPtr => "missing socket state",
            SocketError::BadFamily => "unsupported address or protocol family",
            SocketError::Timeout => "operation timed out",
            SocketError::BadAlloc => "stack out of memory",
            SocketError::NoConnection => "socket not connected",
            SocketError::Size => "buffer size error",
            SocketError::Stack => "internal stack error",
            SocketError::Unbound => "socket not bound",
            SocketError::BadArgument => "bad argument",
            SocketError::BadAddress => "bad address",
            SocketError::DnsFailed => "name resolution failed",
            SocketError::WouldBlock => "operation would block",
            SocketError::Closed => "socket closed",
            SocketError::AlreadyConnected => "socket already connected",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for SocketError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressFamily {
    #[default]
    Uninit,
    Ipv4,
    Ipv6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolFamily {
    #[default]
    Uninit,
    Udp,
    Tcp,
}
