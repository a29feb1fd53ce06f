//! # Range Sweeper
//!
//! Walks a sequence of hosts, probes each one exactly once, and partitions
//! the results into a [`SweepReport`]. One probe is in flight at a time;
//! each is awaited to completion before the next starts.

use std::net::IpAddr;

use sweepr_common::network::report::SweepReport;
use tracing::{info, warn};

use crate::probe::ReachabilityProbe;

/// Progress callback, handed the running total after each probe.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Probes every host in order and classifies it by the probe's verdict.
///
/// Emits one status line per address as a side effect. A single probe
/// attempt is authoritative; there are no retries.
pub async fn sweep<I>(
    hosts: I,
    probe: &dyn ReachabilityProbe,
    on_probed: Option<ProgressFn>,
) -> SweepReport
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut report = SweepReport::new();

    for host in hosts {
        if probe.ping(host).await {
            info!("{host}: reachable");
            report.record_reachable(host);
        } else {
            warn!("{host}: unreachable");
            report.record_unreachable(host);
        }

        if let Some(on_probed) = &on_probed {
            on_probed(report.total());
        }
    }

    report
}
