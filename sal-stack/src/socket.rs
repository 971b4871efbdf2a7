//! Per-socket state shared between the abstraction layer and a stack

use sal_core::{AddressFamily, ProtocolFamily, SocketAddr, SocketError, StackId};

/// Asynchronous notification raised by a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocketEvent {
    /// Data is ready to be read with `recv`/`recv_from`
    Rx,
    /// A previous send completed
    TxDone { sent: usize },
    Connect,
    Disconnect,
    /// A pending connection can be taken with `accept`
    Accept,
    /// Name resolution finished
    Dns { addr: SocketAddr },
    Error(SocketError),
}

pub type EventHandler = fn(&Socket, &SocketEvent);

/// Socket handle
///
/// `handle` is reserved for the owning stack (a slot index, a pool offset, ...). The layer
/// never interprets it.
#[derive(Debug, Clone, Copy)]
pub struct Socket {
    pub stack: StackId,
    pub family: AddressFamily,
    pub protocol: ProtocolFamily,
    pub handler: Option<EventHandler>,
    pub handle: usize,
}

impl Socket {
    pub const fn new(stack: StackId) -> Self {
        Self {
            stack,
            family: AddressFamily::Uninit,
            protocol: ProtocolFamily::Uninit,
            handler: None,
            handle: 0,
        }
    }

    /// Delivers `event` to the registered handler, if any
    pub fn notify(&self, event: SocketEvent) {
        if let Some(handler) = self.handler {
            handler(self, &event);
        }
    }
}

/// Socket option selector for `set_option`/`get_option`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketOption {
    pub level: u32,
    pub name: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static SENT: AtomicUsize = AtomicUsize::new(0);

    fn record(_socket: &Socket, event: &SocketEvent) {
        if let SocketEvent::TxDone { sent } = event {
            SENT.fetch_add(*sent, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_notify_without_handler() {
        let socket = Socket::new(StackId::LWIP_IPV4);
        socket.notify(SocketEvent::Rx);
        assert_eq!(socket.family, AddressFamily::Uninit);
    }

    #[test]
    fn test_notify_dispatches_to_handler() {
        let mut socket = Socket::new(StackId::PICOTCP);
        socket.handler = Some(record);
        socket.notify(SocketEvent::TxDone { sent: 12 });
        socket.notify(SocketEvent::Connect);
        assert_eq!(SENT.load(Ordering::SeqCst), 12);
    }
}
