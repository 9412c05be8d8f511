//! Display formatting helpers.

/// Format a playtime in minutes as a compact "12h 34m" string.
///
/// Zero playtime renders as a dash, sub-hour playtime as minutes only.
pub fn format_playtime(minutes: u64) -> String {
    if minutes == 0 {
        return "—".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{rest}m")
    } else if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}
