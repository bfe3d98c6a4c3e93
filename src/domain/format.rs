//! Pure normalization helpers shared by the catalog implementations and the
//! presentation boundary.

use chrono::{DateTime, Utc};

/// Render a byte count the way the dashboard displays it.
///
/// `<1024` bytes render as "{n} B", below a mebibyte as tenths of KB, and
/// everything else as tenths of MB. The suffix is always one of B/KB/MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Infer a human-readable camera label from an object filename.
///
/// Takes the substring before the first '_', inserts a space before each
/// internal capital letter, and trims. Filenames without an underscore map
/// to "Unknown". Kept exactly as the dashboard has always behaved; not
/// generalized beyond it.
pub fn source_label(filename: &str) -> String {
    match filename.split_once('_') {
        Some((prefix, _)) => {
            let mut label = String::with_capacity(prefix.len() + 4);
            for (i, c) in prefix.chars().enumerate() {
                if c.is_uppercase() && i > 0 {
                    label.push(' ');
                }
                label.push(c);
            }
            label.trim().to_string()
        }
        None => "Unknown".to_string(),
    }
}

/// Format a timestamp for display, e.g. "Jun 1, 2024, 03:30:42 PM".
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M:%S %p").to_string()
}
