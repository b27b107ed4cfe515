use chrono::Local;

pub struct TimeUtils;

impl TimeUtils {
    /// Timestamp layout for export rows: local time, second precision.
    pub const LOOK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Current local time rendered in the export timestamp layout.
pub fn local_now_formatted() -> String {
    Local::now()
        .format(TimeUtils::LOOK_TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_second_precision() {
        let stamp = local_now_formatted();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[16..17], ":");
    }
}
