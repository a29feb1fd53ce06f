use crate::error::SweepError;

pub struct Config {
    /// Which `ping` flag spelling the reachability probe uses.
    pub family: OsFamily,
    /// Skips the closing keypress pause after an interactive run.
    pub no_pause: bool,
}

/// Platform family the probe is invoked on.
///
/// Carried as an explicit configuration value so the probe never reads
/// ambient process state and tests can pin either spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// Maps a `std::env::consts::FAMILY` string to a known family.
    pub fn from_family(family: &str) -> Option<Self> {
        match family {
            "windows" => Some(OsFamily::Windows),
            "unix" => Some(OsFamily::Unix),
            _ => None,
        }
    }

    /// Resolves the family of the running host, once, at startup.
    pub fn detect() -> Result<Self, SweepError> {
        Self::from_family(std::env::consts::FAMILY)
            .ok_or_else(|| SweepError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// The `ping` option selecting how many echo requests to send.
    ///
    /// `-n` on Windows; `-c` on the unix family, which covers both Linux
    /// and macOS.
    pub fn ping_count_flag(self) -> &'static str {
        match self {
            OsFamily::Windows => "-n",
            OsFamily::Unix => "-c",
        }
    }
}
