use std::io;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub struct SpinnerHandle {
    spinner: ProgressBar,
}

impl SpinnerHandle {
    pub fn println(&self, msg: &str) {
        self.spinner.println(msg);
    }

    pub fn set_message(&self, msg: String) {
        self.spinner.set_message(msg);
    }

    pub fn finish_and_clear(&self) {
        self.spinner.finish_and_clear();
    }

    fn is_active(&self) -> bool {
        !self.spinner.is_finished()
    }
}

static SPINNER: OnceLock<SpinnerHandle> = OnceLock::new();

/// Starts the sweep spinner; subsequent log lines print above it until
/// [`SpinnerHandle::finish_and_clear`] is called.
pub fn start_sweep_spinner() -> &'static SpinnerHandle {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Warming up...");

    SpinnerHandle { spinner: pb }
}

pub fn report_sweep_progress(probed: usize, total: usize) {
    if let Some(handle) = SPINNER.get() {
        handle.set_message(format!(
            "Probed {} of {} addresses...",
            probed.to_string().green().bold(),
            total
        ));
    }
}

/// Routes subscriber output through the active spinner so log lines are not
/// overdrawn by it; falls back to plain stdout when no sweep is running.
pub struct SpinnerWriter;

impl io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        match SPINNER.get() {
            Some(handle) if handle.is_active() => handle.println(msg),
            _ => println!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
