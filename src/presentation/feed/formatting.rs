//! Display strings derived from feed items.

use crate::domain::feed::entity::FeedUser;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Wire format of the trending and import timestamps. They carry no zone
/// and are read as UTC.
pub const FEED_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait FeedItemFormatter: Send + Sync {
    /// `None` when `datetime` is empty or does not match [`FEED_DATETIME_FORMAT`].
    fn trending_date_time(&self, datetime: &str, now: DateTime<Utc>) -> Option<String>;

    /// `None` for anonymous uploads or a blank display name.
    fn author_name(&self, user: Option<&FeedUser>) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFeedItemFormatter;

impl FeedItemFormatter for DefaultFeedItemFormatter {
    fn trending_date_time(&self, datetime: &str, now: DateTime<Utc>) -> Option<String> {
        let parsed = NaiveDateTime::parse_from_str(datetime.trim(), FEED_DATETIME_FORMAT).ok()?;
        Some(format!(
            "Trending on: {}",
            relative_time(parsed.and_utc(), now)
        ))
    }

    fn author_name(&self, user: Option<&FeedUser>) -> Option<String> {
        let name = user?.display_name.trim();
        if name.is_empty() {
            return None;
        }
        Some(format!("Author: {name}"))
    }
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

const UNITS: [(i64, &str); 7] = [
    (365 * DAY, "year"),
    (30 * DAY, "month"),
    (7 * DAY, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
    (1, "second"),
];

/// Render the distance between `date` and `now` in its largest whole unit.
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(date).num_seconds();
    let magnitude = delta.abs();
    let Some((seconds, unit)) = UNITS.iter().find(|(seconds, _)| magnitude >= *seconds) else {
        return "now".to_string();
    };

    let amount = magnitude / seconds;
    let plural = if amount == 1 { "" } else { "s" };
    if delta >= 0 {
        format!("{amount} {unit}{plural} ago")
    } else {
        format!("in {amount} {unit}{plural}")
    }
}
