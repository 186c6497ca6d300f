use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::domain::VolunteerRecord;

/// Volunteers interviewed per time block.
pub const BLOCK_SIZE: usize = 30;
/// Length of one interview block in minutes.
pub const BLOCK_MINUTES: i64 = 30;

fn first_interview() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid interview start time")
}

/// One line of the waiting-list interview schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub name: String,
    pub phone_number: String,
    pub interval: String,
}

/// Build the interview schedule for the waiting list: volunteers sorted by
/// name, grouped into blocks of [`BLOCK_SIZE`], each block assigned the next
/// 30-minute interval starting at 09:00.
pub fn build_schedule(waiting: &[VolunteerRecord]) -> Vec<ScheduleRow> {
    let mut volunteers: Vec<&VolunteerRecord> = waiting.iter().collect();
    volunteers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    let start = first_interview();
    let mut rows = Vec::with_capacity(volunteers.len());

    for (block, members) in volunteers.chunks(BLOCK_SIZE).enumerate() {
        let from = start + Duration::minutes(BLOCK_MINUTES * block as i64);
        let until = from + Duration::minutes(BLOCK_MINUTES);
        let interval = format!("{}-{}", from.format("%H:%M"), until.format("%H:%M"));

        for volunteer in members {
            rows.push(ScheduleRow {
                name: volunteer.name.clone(),
                phone_number: volunteer.phone_number.clone(),
                interval: interval.clone(),
            });
        }
    }

    rows
}
