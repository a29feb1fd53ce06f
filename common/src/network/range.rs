//! # Host Range Model
//!
//! A contiguous run of IP addresses described by a starting address and a
//! host count. The range is enumerated lazily; element `i` is the starting
//! address plus `i` in the family's integer representation.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::SweepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    start: IpAddr,
    count: u64,
}

impl HostRange {
    /// Builds a range of `count` consecutive addresses starting at `start`.
    ///
    /// Rejects ranges whose last address would leave the family's address
    /// space; a zero-length range is always valid.
    pub fn new(start: IpAddr, count: u64) -> Result<Self, SweepError> {
        if count > 0 {
            let span = count - 1;
            let fits = match start {
                IpAddr::V4(v4) => u32::try_from(span)
                    .ok()
                    .and_then(|span| u32::from(v4).checked_add(span))
                    .is_some(),
                IpAddr::V6(v6) => u128::from(v6).checked_add(u128::from(span)).is_some(),
            };
            if !fits {
                return Err(SweepError::RangeOverflow { start, count });
            }
        }

        Ok(Self { start, count })
    }

    pub fn len(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Enumerates the range in address order.
    pub fn iter(&self) -> impl Iterator<Item = IpAddr> + '_ {
        let start = self.start;
        // new() guarantees every offset stays inside the address space.
        (0..self.count).map(move |offset| advance(start, offset))
    }
}

fn advance(start: IpAddr, offset: u64) -> IpAddr {
    match start {
        IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(u32::from(v4) + offset as u32)),
        IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(u128::from(v6) + u128::from(offset))),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
