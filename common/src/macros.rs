/// Logs a confirmation line, rendered with a green `[✓]` by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::success", $($arg)*)
    };
}
