// cargo watch -x 'fmt' -x 'test'

//! Utilities for raw IP address buffers.
//!
//! Addresses are fixed-length byte sequences in network byte order, 4 bytes
//! for IPv4 and 16 bytes for IPv6 (including IPv4-mapped addresses), as
//! produced by the `octets()` methods of the `std::net` address types.
//! Parsing and formatting remain with those types; this crate covers copying,
//! in-place increment with per-width maximum detection, three-way comparison,
//! network first/last derivation, and inclusive range iteration.

mod error;
pub mod models;
pub mod processing;

pub use error::IpRangeError;
pub use models::{
    compare_ips, copy_ip, next_ip, IPV4_SIZE, IPV6_SIZE, MAX_IPV4, MAX_IPV4_IN_V6, MAX_IPV6,
    V4_IN_V6_PREFIX,
};
pub use processing::{network_ip_range, IpRangeCursor, IpRangeIterator};
