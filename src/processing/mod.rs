//! Processing built on the address primitives.
//!
//! Derives network bounds from an address and mask, and provides the
//! [`IpRangeCursor`] for walking inclusive address ranges.

mod range;

pub use range::{network_ip_range, IpRangeCursor, IpRangeIterator};
