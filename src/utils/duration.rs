// ISO 8601 duration parsing
// YouTube reports contentDetails.duration as PT#H#M#S

use regex::Regex;
use std::sync::OnceLock;

static DURATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn duration_pattern() -> &'static Regex {
    DURATION_PATTERN.get_or_init(|| {
        Regex::new(r"^PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?$").expect("duration pattern is valid")
    })
}

/// Parse ISO 8601 duration (PT1H30M45S) to seconds.
///
/// Anything that does not match the `PT#H#M#S` shape is treated as 0,
/// so one malformed item never breaks a whole trending page.
pub fn parse_iso8601_duration(duration: &str) -> u64 {
    if duration.is_empty() {
        return 0;
    }

    let Some(caps) = duration_pattern().captures(duration) else {
        return 0;
    };

    let group = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        }
    };

    let total = (|| {
        let hours = group(1)?;
        let minutes = group(2)?;
        let seconds = group(3)?;
        hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)
    })();

    total.unwrap_or(0)
}
