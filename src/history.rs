use chrono::{Datelike, Duration, NaiveDateTime};

use crate::common::time_utils::parse_timestamp;
use crate::common::types::UtmParameterSet;

/// History entries bucketed for display, newest bucket first. Entries with
/// unparseable timestamps land in `older` rather than being dropped.
#[derive(Debug, Default)]
pub struct GroupedHistory {
    pub today: Vec<UtmParameterSet>,
    pub yesterday: Vec<UtmParameterSet>,
    pub this_week: Vec<UtmParameterSet>,
    pub this_month: Vec<UtmParameterSet>,
    pub older: Vec<UtmParameterSet>,
}

impl GroupedHistory {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.today.len()
            + self.yesterday.len()
            + self.this_week.len()
            + self.this_month.len()
            + self.older.len()
    }

    /// Labeled buckets in display order, skipping empty ones.
    pub fn sections(&self) -> Vec<(&'static str, &[UtmParameterSet])> {
        [
            ("Today", self.today.as_slice()),
            ("Yesterday", self.yesterday.as_slice()),
            ("This week", self.this_week.as_slice()),
            ("This month", self.this_month.as_slice()),
            ("Older", self.older.as_slice()),
        ]
        .into_iter()
        .filter(|(_, sets)| !sets.is_empty())
        .collect()
    }
}

/// Bucket history entries by how recently they were created, relative to
/// `now`. The week starts on Monday; the month on the 1st.
pub fn group_by_recency(sets: Vec<UtmParameterSet>, now: NaiveDateTime) -> GroupedHistory {
    let today_start = now.date().and_hms_opt(0, 0, 0).unwrap();
    let yesterday_start = today_start - Duration::days(1);
    let week_start =
        today_start - Duration::days(now.date().weekday().num_days_from_monday() as i64);
    let month_start = now
        .date()
        .with_day(1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let mut grouped = GroupedHistory::default();
    for set in sets {
        let bucket = match parse_timestamp(&set.metadata.created_at) {
            Some(created) if created >= today_start => &mut grouped.today,
            Some(created) if created >= yesterday_start => &mut grouped.yesterday,
            Some(created) if created >= week_start => &mut grouped.this_week,
            Some(created) if created >= month_start => &mut grouped.this_month,
            _ => &mut grouped.older,
        };
        bucket.push(set);
    }
    grouped
}
