pub mod sweep;

use std::net::IpAddr;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "A sequential ICMP reachability sweeper.")]
pub struct CommandLine {
    /// First address of the range to sweep; prompted for when omitted
    pub start: Option<IpAddr>,

    /// How many consecutive addresses to probe; prompted for when omitted
    pub count: Option<u64>,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Skip the closing keypress pause after an interactive run
    #[arg(long)]
    pub no_pause: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
