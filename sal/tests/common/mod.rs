#![allow(dead_code)]

use sal::core::{
    ABSTRACTION_LAYER_VERSION, AddressFamily, ProtocolFamily, SocketAddr, SocketError, StackId,
};
use sal::stack::{Capabilities, EventHandler, Socket, SocketApi, SocketOption};

fn init() -> Result<(), SocketError> {
    Ok(())
}

fn create(
    socket: &mut Socket,
    family: AddressFamily,
    protocol: ProtocolFamily,
    handler: EventHandler,
) -> Result<(), SocketError> {
    socket.family = family;
    socket.protocol = protocol;
    socket.handler = Some(handler);
    Ok(())
}

fn release(_: &mut Socket) -> Result<(), SocketError> {
    Ok(())
}

fn periodic_task(_: &Socket) {}

fn periodic_interval(_: &Socket) -> u32 {
    100
}

fn resolve(_: &mut Socket, _: &str) -> Result<(), SocketError> {
    Err(SocketError::DnsFailed)
}

fn connect(_: &mut Socket, _: &SocketAddr, _: u16) -> Result<(), SocketError> {
    Err(SocketError::NoConnection)
}

fn str2addr(_: &Socket, _: &str) -> Result<SocketAddr, SocketError> {
    Ok(SocketAddr::from_ipv4([127, 0, 0, 1]))
}

fn start_listen(_: &mut Socket, _: u32) -> Result<(), SocketError> {
    Ok(())
}

fn accept(socket: &mut Socket, handler: EventHandler) -> Result<Socket, SocketError> {
    let mut accepted = Socket::new(socket.stack);
    accepted.handler = Some(handler);
    Ok(accepted)
}

fn send(_: &mut Socket, buf: &[u8]) -> Result<usize, SocketError> {
    Ok(buf.len())
}

fn send_to(_: &mut Socket, buf: &[u8], _: &SocketAddr, _: u16) -> Result<usize, SocketError> {
    Ok(buf.len())
}

fn recv(_: &mut Socket, _: &mut [u8]) -> Result<usize, SocketError> {
    Err(SocketError::WouldBlock)
}

fn recv_from(_: &mut Socket, _: &mut [u8]) -> Result<(usize, SocketAddr, u16), SocketError> {
    Err(SocketError::WouldBlock)
}

fn set_option(_: &mut Socket, _: SocketOption, _: &[u8]) -> Result<(), SocketError> {
    Err(SocketError::Unimplemented)
}

fn get_option(_: &Socket, _: SocketOption, _: &mut [u8]) -> Result<usize, SocketError> {
    Err(SocketError::Unimplemented)
}

fn is_false(_: &Socket) -> bool {
    false
}

fn addr(_: &Socket) -> Result<SocketAddr, SocketError> {
    Err(SocketError::Unbound)
}

fn port(_: &Socket) -> Result<u16, SocketError> {
    Err(SocketError::Unbound)
}

/// Entry point table with every capability present
pub const COMPLETE: Capabilities = Capabilities {
    init: Some(init),
    create: Some(create),
    destroy: Some(release),
    close: Some(release),
    periodic_task: Some(periodic_task),
    periodic_interval: Some(periodic_interval),
    resolve: Some(resolve),
    connect: Some(connect),
    str2addr: Some(str2addr),
    bind: Some(connect),
    start_listen: Some(start_listen),
    stop_listen: Some(release),
    accept: Some(accept),
    start_send: Some(release),
    start_recv: Some(release),
    send: Some(send),
    send_to: Some(send_to),
    recv: Some(recv),
    recv_from: Some(recv_from),
    set_option: Some(set_option),
    get_option: Some(get_option),
    is_connected: Some(is_false),
    is_bound: Some(is_false),
    get_local_addr: Some(addr),
    get_remote_addr: Some(addr),
    get_local_port: Some(port),
    get_remote_port: Some(port),
};

/// Complete descriptor of the current layout version
pub fn api(stack: StackId) -> SocketApi {
    SocketApi::new(stack, ABSTRACTION_LAYER_VERSION, COMPLETE)
}

pub const fn valid_id(offset: u8) -> StackId {
    StackId::from_u8(StackId::UNINIT.into_u8() + 1 + offset)
}
