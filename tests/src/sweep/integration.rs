#![cfg(test)]
use std::net::IpAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use sweepr_common::config::OsFamily;
use sweepr_common::error::SweepError;
use sweepr_common::network::range::HostRange;
use sweepr_common::network::report::SweepReport;
use sweepr_core::probe::ReachabilityProbe;
use sweepr_core::{sweeper, table};

/// Probe fake replaying a fixed verdict script, one entry per expected call.
struct ScriptedProbe {
    verdicts: Mutex<Vec<bool>>,
}

impl ScriptedProbe {
    fn new(verdicts: &[bool]) -> Self {
        Self {
            verdicts: Mutex::new(verdicts.to_vec()),
        }
    }
}

#[async_trait]
impl ReachabilityProbe for ScriptedProbe {
    async fn ping(&self, _host: IpAddr) -> bool {
        self.verdicts
            .lock()
            .unwrap()
            .remove(0)
    }
}

async fn run_sweep(start: &str, count: u64, verdicts: &[bool]) -> SweepReport {
    let range = HostRange::new(start.parse().unwrap(), count).unwrap();
    let probe = ScriptedProbe::new(verdicts);
    sweeper::sweep(range.iter(), &probe, None).await
}

/// The documented reference scenario: seven hosts starting at
/// 209.85.233.125, of which the second and sixth do not answer.
#[tokio::test]
async fn range_sweep_end_to_end() {
    let report = run_sweep(
        "209.85.233.125",
        7,
        &[true, false, true, true, true, false, true],
    )
    .await;

    assert_eq!(report.total(), 7);
    assert_eq!(
        report.reachable(),
        [
            "209.85.233.125",
            "209.85.233.127",
            "209.85.233.128",
            "209.85.233.129",
            "209.85.233.131",
        ]
    );
    assert_eq!(report.unreachable(), ["209.85.233.126", "209.85.233.130"]);

    let lines = table::render(&report);
    // 5 data rows framed by three borders and a header line.
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[3], "| 209.85.233.125  | 209.85.233.126  |");
    assert_eq!(lines[4], "| 209.85.233.127  | 209.85.233.130  |");
    for line in &lines[5..8] {
        assert!(
            line.ends_with("|                 |"),
            "expected a blank unreachable cell in {line:?}"
        );
    }
}

#[tokio::test]
async fn zero_hosts_renders_an_empty_table() {
    let report = run_sweep("192.168.0.1", 0, &[]).await;

    assert!(report.is_empty());

    let lines = table::render(&report);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| !line.contains("192.168")));
}

#[tokio::test]
async fn equal_partitions_pair_every_row() {
    let report = run_sweep("10.1.1.1", 4, &[true, false, true, false]).await;

    assert_eq!(report.reachable().len(), 2);
    assert_eq!(report.unreachable().len(), 2);

    let lines = table::render(&report);
    assert_eq!(lines.len(), 4 + 2);
    for line in &lines[3..5] {
        assert!(
            !line.contains(&" ".repeat(table::COLUMN_WIDTH)),
            "unexpected blank cell in {line:?}"
        );
    }
}

#[tokio::test]
async fn rendering_the_same_report_twice_is_identical() {
    let report = run_sweep("172.16.0.1", 3, &[false, true, false]).await;

    assert_eq!(table::render(&report), table::render(&report));
}

/// An unrecognized platform family must fail before any probe exists, so a
/// sweep can never partially classify.
#[test]
fn unknown_platform_family_aborts_before_probing() {
    assert_eq!(OsFamily::from_family("plan9"), None);

    // The detection path surfaces the abort as UnsupportedPlatform.
    let err = OsFamily::from_family("plan9")
        .ok_or_else(|| SweepError::UnsupportedPlatform("plan9".to_string()))
        .unwrap_err();
    assert_eq!(err, SweepError::UnsupportedPlatform("plan9".to_string()));
}

#[test]
fn host_platform_resolves_a_count_flag() {
    let family = OsFamily::detect().expect("test hosts are windows or unix");
    assert!(matches!(family.ping_count_flag(), "-n" | "-c"));
}
