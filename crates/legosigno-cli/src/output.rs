use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Visit scores are Unix nanoseconds
pub fn format_timestamp_ns(nanos: i64) -> String {
    format_timestamp(&DateTime::from_timestamp_nanos(nanos))
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_nanosecond_timestamps() {
        assert_eq!(format_timestamp_ns(0), "1970-01-01 00:00");
        assert_eq!(
            format_timestamp_ns(1_700_000_000_000_000_000),
            "2023-11-14 22:13"
        );
    }

    #[test]
    fn formats_byte_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MiB");
    }
}
