//! Interactive prompts for the sweep parameters.
//!
//! Invalid input is never fatal; every prompt re-asks until it gets a
//! usable value, the quit token, or end of input.

use std::io::{self, BufRead, Write};
use std::net::IpAddr;

use crossterm::event;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use sweepr_common::warn;

use crate::terminal::print;

/// Token that aborts the interactive flow at any prompt.
pub const QUIT_SENTINEL: &str = "q";

/// Asks for the first address of the range. `None` means the user quit.
pub fn read_start_addr() -> io::Result<Option<IpAddr>> {
    loop {
        let Some(input) = ask("Starting IP address (or 'q' to quit): ")? else {
            return Ok(None);
        };
        match input.parse::<IpAddr>() {
            Ok(start) => return Ok(Some(start)),
            Err(_) => warn!("'{input}' is not an IP address"),
        }
    }
}

/// Asks how many hosts to probe. `None` means the user quit.
pub fn read_host_count() -> io::Result<Option<u64>> {
    loop {
        let Some(input) = ask("Number of hosts to probe (or 'q' to quit): ")? else {
            return Ok(None);
        };
        match input.parse::<u64>() {
            Ok(count) => return Ok(Some(count)),
            Err(_) => warn!("'{input}' is not a host count"),
        }
    }
}

/// Blocks until any key is pressed.
pub fn pause_for_key() -> io::Result<()> {
    print::print("Press any key to exit...");

    enable_raw_mode()?;
    let result = event::read();
    disable_raw_mode()?;

    result.map(|_| ())
}

/// One prompt round trip. `None` on the quit token or a closed stdin.
fn ask(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let input = line.trim().to_string();
    if input.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return Ok(None);
    }
    Ok(Some(input))
}
