/// Render a millisecond duration as `minutes:seconds`, seconds zero-padded
/// to two digits. Milliseconds round half-up to whole seconds.
pub fn format_elapsed(ms: u64) -> String {
    let seconds = (ms + 500) / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
