use std::net::IpAddr;
use std::time::{Duration, Instant};

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::network::range::HostRange;
use sweepr_common::network::report::SweepReport;
use sweepr_common::{info, success};
use sweepr_core::probe::PingProbe;
use sweepr_core::{sweeper, table};

use crate::commands::CommandLine;
use crate::{
    mprint,
    terminal::{colors, print, prompt, spinner},
};

pub async fn run(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let interactive = commands.start.is_none() || commands.count.is_none();

    let Some((start, count)) = resolve_sweep_input(commands)? else {
        info!("Sweep cancelled before it started");
        return Ok(());
    };

    let range = HostRange::new(start, count)?;
    let unit = if range.len() == 1 {
        "address has"
    } else {
        "addresses have"
    };
    success!("{} {unit} been queued for probing", range.len());

    let probe = PingProbe::new(cfg.family);

    print::header("reachability sweep");
    let handle = spinner::start_sweep_spinner();
    let total = range.len() as usize;
    let on_probed: sweeper::ProgressFn =
        Box::new(move |probed| spinner::report_sweep_progress(probed, total));

    let started = Instant::now();
    let report = sweeper::sweep(range.iter(), &probe, Some(on_probed)).await;
    handle.finish_and_clear();

    sweep_ends(&report, started.elapsed());

    if interactive && !cfg.no_pause {
        prompt::pause_for_key()?;
    }
    Ok(())
}

/// Takes the start address and host count from the arguments, prompting for
/// whichever is missing. `None` means the user quit at a prompt.
fn resolve_sweep_input(commands: &CommandLine) -> std::io::Result<Option<(IpAddr, u64)>> {
    let start = match commands.start {
        Some(start) => start,
        None => match prompt::read_start_addr()? {
            Some(start) => start,
            None => return Ok(None),
        },
    };

    let count = match commands.count {
        Some(count) => count,
        None => match prompt::read_host_count()? {
            Some(count) => count,
            None => return Ok(None),
        },
    };

    Ok(Some((start, count)))
}

fn sweep_ends(report: &SweepReport, total_time: Duration) {
    mprint!();
    for line in table::render(report) {
        print::print(&line);
    }
    mprint!();
    print_summary(report, total_time);
}

fn print_summary(report: &SweepReport, total_time: Duration) {
    let reachable = format!("{} reachable", report.reachable().len())
        .bold()
        .green();
    let unreachable = format!("{} unreachable", report.unreachable().len())
        .bold()
        .yellow();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Sweep complete: {reachable}, {unreachable} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
