//! Compact human-readable durations

/// Default minutes glyph.
pub const MIN_SIGN: char = '′';
/// Default seconds glyph.
pub const SEC_SIGN: char = '″';

/// Render a second count with the default glyphs.
///
/// ```
/// use tracklist::utils::humanized_duration;
///
/// assert_eq!(humanized_duration(0), "0″");
/// assert_eq!(humanized_duration(3661), "1h1′");
/// ```
pub fn humanized_duration(secs: i64) -> String {
    humanized_duration_with(secs, MIN_SIGN, SEC_SIGN)
}

/// Render a second count with caller-chosen minute and second glyphs.
///
/// Deliberately lossy for long durations: seconds are dropped once minutes
/// pass 30, and both seconds and zero minutes are dropped once hours
/// appear. A positive duration under a minute never renders as zero.
pub fn humanized_duration_with(secs: i64, min_sign: char, sec_sign: char) -> String {
    if secs <= 0 {
        return format!("0{sec_sign}");
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let secs = secs % 60;
    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h{minutes}{min_sign}")
        } else {
            format!("{hours}h")
        }
    } else if minutes > 30 {
        format!("{minutes}{min_sign}")
    } else if minutes > 0 {
        format!("{minutes}{min_sign}{secs}{sec_sign}")
    } else {
        format!("{}{sec_sign}", secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(humanized_duration(0), "0″");
        assert_eq!(humanized_duration(-1), "0″");
    }

    #[test]
    fn test_under_a_minute_floors_at_one() {
        // A sub-second positive value is shown as at least one second.
        assert_eq!(humanized_duration(1), "1″");
        assert_eq!(humanized_duration(59), "59″");
    }

    #[test]
    fn test_minutes_keep_seconds_up_to_half_hour() {
        assert_eq!(humanized_duration(60), "1′0″");
        assert_eq!(humanized_duration(61), "1′1″");
        assert_eq!(humanized_duration(1850), "30′50″");
    }

    #[test]
    fn test_over_half_hour_drops_seconds() {
        assert_eq!(humanized_duration(1900), "31′");
        assert_eq!(humanized_duration(3599), "59′");
    }

    #[test]
    fn test_hours_drop_seconds_entirely() {
        assert_eq!(humanized_duration(3600), "1h");
        assert_eq!(humanized_duration(3661), "1h1′");
        assert_eq!(humanized_duration(7199), "1h59′");
        assert_eq!(humanized_duration(7200), "2h");
    }

    #[test]
    fn test_custom_glyphs() {
        assert_eq!(humanized_duration_with(61, 'm', 's'), "1m1s");
    }
}
