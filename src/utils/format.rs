// Human-readable formatting of byte counts, rates, durations and ratios

/// Sentinel shown for unbounded values (no ETA, no limit)
pub const INFINITY: &str = "∞";

/// Durations at or above this many seconds (100 days) render as `∞`
pub const MAX_ETA: u64 = 8_640_000;

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Render a byte count using the largest binary unit
///
/// Plain bytes are whole (`"1023 B"`); scaled units get one decimal place
/// (`"1.5 KiB"`).
pub fn friendly_unit(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Render a transfer rate in bytes per second, e.g. `"120.0 KiB/s"`
pub fn friendly_rate(bytes_per_second: u64) -> String {
    format!("{}/s", friendly_unit(bytes_per_second))
}

/// Render a rate limit, where zero means unlimited
pub fn friendly_limit(limit: u64) -> String {
    if limit == 0 {
        INFINITY.to_string()
    } else {
        friendly_rate(limit)
    }
}

/// Render elapsed seconds as a compact duration
///
/// Under a minute collapses to `"< 1m"`; beyond 100 days is `∞`.
pub fn friendly_duration(seconds: u64) -> String {
    if seconds >= MAX_ETA {
        return INFINITY.to_string();
    }
    if seconds == 0 {
        return "0".to_string();
    }
    if seconds < 60 {
        return "< 1m".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    let minutes = minutes % 60;
    if hours < 24 {
        return format!("{}h{}m", hours, minutes);
    }

    let days = hours / 24;
    let hours = hours % 24;
    format!("{}d{}h", days, hours)
}

/// Render an optional ETA; `None` means the estimate is unbounded
pub fn friendly_eta(eta: Option<u64>) -> String {
    match eta {
        Some(seconds) => friendly_duration(seconds),
        None => INFINITY.to_string(),
    }
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}", ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_unit_zero() {
        assert_eq!(friendly_unit(0), "0 B");
    }

    #[test]
    fn test_friendly_unit_picks_largest_unit() {
        assert_eq!(friendly_unit(1), "1 B");
        assert_eq!(friendly_unit(1023), "1023 B");
        assert_eq!(friendly_unit(1024), "1.0 KiB");
        assert_eq!(friendly_unit(1536), "1.5 KiB");
        assert_eq!(friendly_unit(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(friendly_unit(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }

    #[test]
    fn test_friendly_unit_max_value() {
        // u64::MAX is just under 16 EiB
        assert_eq!(friendly_unit(u64::MAX), "16.0 EiB");
    }

    #[test]
    fn test_friendly_rate_suffix() {
        assert_eq!(friendly_rate(150_000), "146.5 KiB/s");
        assert_eq!(friendly_rate(0), "0 B/s");
    }

    #[test]
    fn test_friendly_limit_unlimited() {
        assert_eq!(friendly_limit(0), INFINITY);
        assert_eq!(friendly_limit(2048), "2.0 KiB/s");
    }

    #[test]
    fn test_friendly_duration_table() {
        assert_eq!(friendly_duration(0), "0");
        assert_eq!(friendly_duration(59), "< 1m");
        assert_eq!(friendly_duration(190), "3m");
        assert_eq!(friendly_duration(3600 + 5 * 60), "1h5m");
        assert_eq!(friendly_duration(2 * 86_400 + 3 * 3600 + 59), "2d3h");
    }

    #[test]
    fn test_friendly_duration_unbounded() {
        assert_eq!(friendly_duration(MAX_ETA - 1), "99d23h");
        assert_eq!(friendly_duration(MAX_ETA), INFINITY);
        assert_eq!(friendly_duration(u64::MAX), INFINITY);
    }

    #[test]
    fn test_friendly_eta() {
        assert_eq!(friendly_eta(None), INFINITY);
        assert_eq!(friendly_eta(Some(120)), "2m");
    }

    #[test]
    fn test_format_ratio_one_decimal() {
        assert_eq!(format_ratio(1.0), "1.0");
        assert_eq!(format_ratio(0.456), "0.5");
        assert_eq!(format_ratio(10.0), "10.0");
    }
}
