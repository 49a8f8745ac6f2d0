//! # Formatting Utilities
//!
//! Display formatting for the upload widget.

/// Format a byte count for display (e.g. 2_621_440 -> "2,5 MB").
///
/// Decimal units, one fraction digit, German decimal comma to match
/// the rest of the page copy.
///
/// # Examples
///
/// ```rust
/// use bildwerk_web::utils::format::format_file_size;
///
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(2_500_000), "2,5 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["kB", "MB", "GB"];

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1000.0 {
            break;
        }
        value /= 1000.0;
        unit = next;
    }

    // German locale: comma as decimal separator
    format!("{:.1} {}", value, unit).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(999), "999 B");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(1_000), "1,0 kB");
        assert_eq!(format_file_size(2_500_000), "2,5 MB");
        assert_eq!(format_file_size(1_300_000_000), "1,3 GB");
    }
}
