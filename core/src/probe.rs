//! Reachability probing through the operating system's `ping` utility.

use std::net::IpAddr;
use std::process::Stdio;

use async_trait::async_trait;
use sweepr_common::config::OsFamily;
use tokio::process::Command;

/// A single-attempt liveness check for one host.
///
/// The sweeper depends only on this seam; tests substitute scripted
/// implementations instead of shelling out.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Returns `true` when the host answered the probe.
    async fn ping(&self, host: IpAddr) -> bool;
}

/// Invokes the platform `ping` binary, one echo request per call.
///
/// The probe is authoritative on its own: no retries, and whatever timeout
/// the system utility enforces bounds the call. A failure to spawn the
/// binary reads as unreachable.
pub struct PingProbe {
    count_flag: &'static str,
}

impl PingProbe {
    pub fn new(family: OsFamily) -> Self {
        Self {
            count_flag: family.ping_count_flag(),
        }
    }
}

#[async_trait]
impl ReachabilityProbe for PingProbe {
    async fn ping(&self, host: IpAddr) -> bool {
        Command::new("ping")
            .arg(self.count_flag)
            .arg("1")
            .arg(host.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn flag_follows_the_configured_family() {
        assert_eq!(PingProbe::new(OsFamily::Windows).count_flag, "-n");
        assert_eq!(PingProbe::new(OsFamily::Unix).count_flag, "-c");
    }

    #[tokio::test]
    async fn probe_never_panics() {
        // Whatever the environment (no ping binary, no ICMP rights), the
        // probe resolves to a plain bool.
        let probe = PingProbe::new(OsFamily::detect().unwrap());
        let _ = probe.ping(IpAddr::V4(Ipv4Addr::LOCALHOST)).await;
    }
}
