use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// "2 days, 3 hours, 4 minutes, 5 seconds", omitting leading zero units.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs / 3_600) % 24;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    for (value, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (seconds, "second"),
    ] {
        if value == 0 && parts.is_empty() && unit != "second" {
            continue;
        }
        let plural = if value == 1 { "" } else { "s" };
        parts.push(format!("{value} {unit}{plural}"));
    }
    parts.join(", ")
}

pub fn format_load(load: &[f64; 3]) -> String {
    format!("{:.2}, {:.2}, {:.2}", load[0], load[1], load[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_pick_a_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn uptime_spells_out_units() {
        assert_eq!(format_uptime(0), "0 seconds");
        assert_eq!(format_uptime(61), "1 minute, 1 second");
        assert_eq!(format_uptime(90_061), "1 day, 1 hour, 1 minute, 1 second");
        assert_eq!(
            format_uptime(2 * 86_400 + 30),
            "2 days, 0 hours, 0 minutes, 30 seconds"
        );
    }

    #[test]
    fn load_is_two_decimals() {
        assert_eq!(format_load(&[0.5, 0.255, 1.0]), "0.50, 0.26, 1.00");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_unicode("short", 10), "short");
        let truncated = truncate_unicode("/a/very/long/mount/path", 10);
        assert!(truncated.ends_with('\u{2026}'));
        assert!(truncated.width() <= 10);
    }
}
