//! Stack interface descriptor
//!
//! ## Examples
//!
//! A stack usually publishes its descriptor as a `static`, filling every entry point:
//! ```
//! use sal_core::{ABSTRACTION_LAYER_VERSION, SocketError, StackId};
//! use sal_stack::{Capabilities, Socket, SocketApi};
//!
//! fn init() -> Result<(), SocketError> {
//!     Ok(())
//! }
//!
//! fn close(_socket: &mut Socket) -> Result<(), SocketError> {
//!     Err(SocketError::Unimplemented)
//! }
//!
//! static LWIP_IPV4: SocketApi = SocketApi::new(
//!     StackId::LWIP_IPV4,
//!     ABSTRACTION_LAYER_VERSION,
//!     Capabilities {
//!         init: Some(init),
//!         close: Some(close),
//!         // the remaining entry points
//!         ..Capabilities::NONE
//!     },
//! );
//!
//! assert_eq!(LWIP_IPV4.stack(), StackId::LWIP_IPV4);
//! // Entries left at `NONE` make the descriptor incomplete
//! assert!(LWIP_IPV4.ops.missing().is_some());
//! ```

use core::sync::atomic::{AtomicU8, Ordering};
use sal_core::{AddressFamily, ProtocolFamily, SocketAddr, SocketError, StackId};

use crate::socket::{EventHandler, Socket, SocketOption};

pub type InitFn = fn() -> Result<(), SocketError>;
pub type CreateFn =
    fn(&mut Socket, AddressFamily, ProtocolFamily, EventHandler) -> Result<(), SocketError>;
pub type DestroyFn = fn(&mut Socket) -> Result<(), SocketError>;
pub type CloseFn = fn(&mut Socket) -> Result<(), SocketError>;
pub type PeriodicTaskFn = fn(&Socket);
/// Returns the period of `periodic_task` in milliseconds
pub type PeriodicIntervalFn = fn(&Socket) -> u32;
pub type ResolveFn = fn(&mut Socket, &str) -> Result<(), SocketError>;
pub type ConnectFn = fn(&mut Socket, &SocketAddr, u16) -> Result<(), SocketError>;
pub type Str2AddrFn = fn(&Socket, &str) -> Result<SocketAddr, SocketError>;
pub type BindFn = fn(&mut Socket, &SocketAddr, u16) -> Result<(), SocketError>;
pub type StartListenFn = fn(&mut Socket, u32) -> Result<(), SocketError>;
pub type StopListenFn = fn(&mut Socket) -> Result<(), SocketError>;
pub type AcceptFn = fn(&mut Socket, EventHandler) -> Result<Socket, SocketError>;
pub type StartSendFn = fn(&mut Socket) -> Result<(), SocketError>;
pub type StartRecvFn = fn(&mut Socket) -> Result<(), SocketError>;
pub type SendFn = fn(&mut Socket, &[u8]) -> Result<usize, SocketError>;
pub type SendToFn = fn(&mut Socket, &[u8], &SocketAddr, u16) -> Result<usize, SocketError>;
pub type RecvFn = fn(&mut Socket, &mut [u8]) -> Result<usize, SocketError>;
pub type RecvFromFn = fn(&mut Socket, &mut [u8]) -> Result<(usize, SocketAddr, u16), SocketError>;
pub type SetOptionFn = fn(&mut Socket, SocketOption, &[u8]) -> Result<(), SocketError>;
pub type GetOptionFn = fn(&Socket, SocketOption, &mut [u8]) -> Result<usize, SocketError>;
pub type IsConnectedFn = fn(&Socket) -> bool;
pub type IsBoundFn = fn(&Socket) -> bool;
pub type GetAddrFn = fn(&Socket) -> Result<SocketAddr, SocketError>;
pub type GetPortFn = fn(&Socket) -> Result<u16, SocketError>;

/// Mandatory stack entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    Init,
    Create,
    Destroy,
    Close,
    PeriodicTask,
    PeriodicInterval,
    Resolve,
    Connect,
    Str2Addr,
    Bind,
    StartListen,
    StopListen,
    Accept,
    StartSend,
    StartRecv,
    Send,
    SendTo,
    Recv,
    RecvFrom,
    SetOption,
    GetOption,
    IsConnected,
    IsBound,
    GetLocalAddr,
    GetRemoteAddr,
    GetLocalPort,
    GetRemotePort,
}

impl Capability {
    /// All entry points in descriptor order
    pub const ALL: [Capability; 27] = [
        Capability::Init,
        Capability::Create,
        Capability::Destroy,
        Capability::Close,
        Capability::PeriodicTask,
        Capability::PeriodicInterval,
        Capability::Resolve,
        Capability::Connect,
        Capability::Str2Addr,
        Capability::Bind,
        Capability::StartListen,
        Capability::StopListen,
        Capability::Accept,
        Capability::StartSend,
        Capability::StartRecv,
        Capability::Send,
        Capability::SendTo,
        Capability::Recv,
        Capability::RecvFrom,
        Capability::SetOption,
        Capability::GetOption,
        Capability::IsConnected,
        Capability::IsBound,
        Capability::GetLocalAddr,
        Capability::GetRemoteAddr,
        Capability::GetLocalPort,
        Capability::GetRemotePort,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Capability::Init => "init",
            Capability::Create => "create",
            Capability::Destroy => "destroy",
            Capability::Close => "close",
            Capability::PeriodicTask => "periodic_task",
            Capability::PeriodicInterval => "periodic_interval",
            Capability::Resolve => "resolve",
            Capability::Connect => "connect",
            Capability::Str2Addr => "str2addr",
            Capability::Bind => "bind",
            Capability::StartListen => "start_listen",
            Capability::StopListen => "stop_listen",
            Capability::Accept => "accept",
            Capability::StartSend => "start_send",
            Capability::StartRecv => "start_recv",
            Capability::Send => "send",
            Capability::SendTo => "send_to",
            Capability::Recv => "recv",
            Capability::RecvFrom => "recv_from",
            Capability::SetOption => "set_option",
            Capability::GetOption => "get_option",
            Capability::IsConnected => "is_connected",
            Capability::IsBound => "is_bound",
            Capability::GetLocalAddr => "get_local_addr",
            Capability::GetRemoteAddr => "get_remote_addr",
            Capability::GetLocalPort => "get_local_port",
            Capability::GetRemotePort => "get_remote_port",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack entry points
///
/// Every entry is mandatory. `Option` only exists so that an incomplete table can be
/// represented and refused at registration instead of failing at call time.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub init: Option<InitFn>,
    pub create: Option<CreateFn>,
    pub destroy: Option<DestroyFn>,
    pub close: Option<CloseFn>,
    pub periodic_task: Option<PeriodicTaskFn>,
    pub periodic_interval: Option<PeriodicIntervalFn>,
    pub resolve: Option<ResolveFn>,
    pub connect: Option<ConnectFn>,
    pub str2addr: Option<Str2AddrFn>,
    pub bind: Option<BindFn>,
    pub start_listen: Option<StartListenFn>,
    pub stop_listen: Option<StopListenFn>,
    pub accept: Option<AcceptFn>,
    pub start_send: Option<StartSendFn>,
    pub start_recv: Option<StartRecvFn>,
    pub send: Option<SendFn>,
    pub send_to: Option<SendToFn>,
    pub recv: Option<RecvFn>,
    pub recv_from: Option<RecvFromFn>,
    pub set_option: Option<SetOptionFn>,
    pub get_option: Option<GetOptionFn>,
    pub is_connected: Option<IsConnectedFn>,
    pub is_bound: Option<IsBoundFn>,
    pub get_local_addr: Option<GetAddrFn>,
    pub get_remote_addr: Option<GetAddrFn>,
    pub get_local_port: Option<GetPortFn>,
    pub get_remote_port: Option<GetPortFn>,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        init: None,
        create: None,
        destroy: None,
        close: None,
        periodic_task: None,
        periodic_interval: None,
        resolve: None,
        connect: None,
        str2addr: None,
        bind: None,
        start_listen: None,
        stop_listen: None,
        accept: None,
        start_send: None,
        start_recv: None,
        send: None,
        send_to: None,
        recv: None,
        recv_from: None,
        set_option: None,
        get_option: None,
        is_connected: None,
        is_bound: None,
        get_local_addr: None,
        get_remote_addr: None,
        get_local_port: None,
        get_remote_port: None,
    };

    pub const fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Init => self.init.is_some(),
            Capability::Create => self.create.is_some(),
            Capability::Destroy => self.destroy.is_some(),
            Capability::Close => self.close.is_some(),
            Capability::PeriodicTask => self.periodic_task.is_some(),
            Capability::PeriodicInterval => self.periodic_interval.is_some(),
            Capability::Resolve => self.resolve.is_some(),
            Capability::Connect => self.connect.is_some(),
            Capability::Str2Addr => self.str2addr.is_some(),
            Capability::Bind => self.bind.is_some(),
            Capability::StartListen => self.start_listen.is_some(),
            Capability::StopListen => self.stop_listen.is_some(),
            Capability::Accept => self.accept.is_some(),
            Capability::StartSend => self.start_send.is_some(),
            Capability::StartRecv => self.start_recv.is_some(),
            Capability::Send => self.send.is_some(),
            Capability::SendTo => self.send_to.is_some(),
            Capability::Recv => self.recv.is_some(),
            Capability::RecvFrom => self.recv_from.is_some(),
            Capability::SetOption => self.set_option.is_some(),
            Capability::GetOption => self.get_option.is_some(),
            Capability::IsConnected => self.is_connected.is_some(),
            Capability::IsBound => self.is_bound.is_some(),
            Capability::GetLocalAddr => self.get_local_addr.is_some(),
            Capability::GetRemoteAddr => self.get_remote_addr.is_some(),
            Capability::GetLocalPort => self.get_local_port.is_some(),
            Capability::GetRemotePort => self.get_remote_port.is_some(),
        }
    }

    /// Returns the first absent entry in descriptor order
    pub fn missing(&self) -> Option<Capability> {
        Capability::ALL.into_iter().find(|cap| !self.contains(*cap))
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_none()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::NONE
    }
}

/// Stack interface descriptor
///
/// The stack identifier is stored atomically so that a descriptor placed in a `static` can
/// still be (re)labelled by its owner. The registry records the identifier it saw at
/// registration and tracks the descriptor by address, so relabelling a registered
/// descriptor changes neither its table entry nor its identity.
#[derive(Debug)]
pub struct SocketApi {
    stack: AtomicU8,
    /// Interface layout version the stack was built against
    pub version: u32,
    pub ops: Capabilities,
}

impl SocketApi {
    pub const fn new(stack: StackId, version: u32, ops: Capabilities) -> Self {
        Self {
            stack: AtomicU8::new(stack.into_u8()),
            version,
            ops,
        }
    }

    pub fn stack(&self) -> StackId {
        StackId::from_u8(self.stack.load(Ordering::Relaxed))
    }

    pub fn set_stack(&self, stack: StackId) {
        self.stack.store(stack.into_u8(), Ordering::Relaxed);
    }
}
