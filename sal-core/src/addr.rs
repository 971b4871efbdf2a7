/// Network address in big-endian IPv6 layout
///
/// IPv4 addresses are kept as IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`), so a single
/// representation serves both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketAddr([u8; 16]);

const IPV4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

impl SocketAddr {
    pub const UNSPECIFIED: SocketAddr = SocketAddr([0; 16]);

    pub const fn from_ipv6(octets: [u8; 16]) -> Self {
        Self(octets)
    }

    pub const fn from_ipv4(octets: [u8; 4]) -> Self {
        let mut bytes = [0u8; 16];
        bytes[10] = 0xff;
        bytes[11] = 0xff;
        bytes[12] = octets[0];
        bytes[13] = octets[1];
        bytes[14] = octets[2];
        bytes[15] = octets[3];
        Self(bytes)
    }

    pub fn is_ipv4(&self) -> bool {
        self.0[..12] == IPV4_MAPPED_PREFIX
    }

    pub fn ipv4(&self) -> Option<[u8; 4]> {
        if self.is_ipv4() {
            Some([self.0[12], self.0[13], self.0[14], self.0[15]])
        } else {
            None
        }
    }

    pub const fn octets(&self) -> [u8; 16] {
        self.0
    }
}
