use std::net::IpAddr;

use thiserror::Error;

/// Failures that abort a sweep before any address is probed.
///
/// Invalid interactive input is not represented here; the prompts recover
/// by re-asking. An unreachable host is a sweep outcome, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    #[error("no ping count flag is known for platform '{0}'")]
    UnsupportedPlatform(String),

    #[error("a range of {count} addresses starting at {start} overflows the address space")]
    RangeOverflow { start: IpAddr, count: u64 },
}
