//! Small display formatting helpers shared by the views.

/// Human-readable byte count (binary units, one decimal).
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let sign = if bytes < 0 { "-" } else { "" };
    let magnitude = bytes.unsigned_abs();
    let mut value = magnitude as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{sign}{magnitude} B")
    } else {
        format!("{sign}{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GiB");
    }

    #[test]
    fn test_format_bytes_negative() {
        assert_eq!(format_bytes(-2048), "-2.0 KiB");
    }

    #[test]
    fn test_format_bytes_extremes_do_not_overflow() {
        // i64::MIN has no positive counterpart; 2^63 / 2^40 = 2^23 TiB.
        assert_eq!(format_bytes(i64::MIN), "-8388608.0 TiB");
        assert_eq!(format_bytes(i64::MAX), "8388608.0 TiB");
    }
}
