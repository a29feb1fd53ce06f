mod commands;
mod terminal;

use commands::{CommandLine, sweep};
use sweepr_common::config::{Config, OsFamily};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.no_banner);

    let cfg = Config {
        family: OsFamily::detect()?,
        no_pause: commands.no_pause,
    };

    sweep::run(&commands, &cfg).await
}
