//! Availability matching: who can I have lunch with today?
//!
//! Everything here is pure. Callers fetch schedules first, then derive the
//! day's friend list, match flags, and map markers from that snapshot. No
//! function in this module fails; odd input (missing schedules, inverted
//! windows, neighborhoods missing from the catalog) degrades to "no match"
//! or is skipped.

use chrono::{Days, NaiveDate};

use super::neighborhood::{Neighborhood, find_neighborhood};
use super::schedule::{DayIndex, Schedule, ScheduleWithOwner};

/// Label prefix used for the current user's own marker.
pub const SELF_LABEL: &str = "나";

/// Furthest a week view may move from the current week, in either direction.
pub const MAX_WEEK_OFFSET: i64 = 520;

/// Whether `week_offset` lies within [`MAX_WEEK_OFFSET`] weeks of now.
pub fn is_valid_week_offset(week_offset: i64) -> bool {
    week_offset.unsigned_abs() <= MAX_WEEK_OFFSET.unsigned_abs()
}

fn shift_weeks(date: NaiveDate, week_offset: i64) -> NaiveDate {
    let days = Days::new(week_offset.unsigned_abs().saturating_mul(7));
    if week_offset >= 0 {
        date.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    }
}

/// Monday of the week containing `reference`, moved by `week_offset` weeks.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lunchmate::domain::week_anchor;
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date");
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 12).expect("valid date");
/// assert_eq!(week_anchor(thursday, 0), monday);
/// let previous = NaiveDate::from_ymd_opt(2026, 10, 5).expect("valid date");
/// assert_eq!(week_anchor(thursday, -1), previous);
/// ```
pub fn week_anchor(reference: NaiveDate, week_offset: i64) -> NaiveDate {
    let since_monday = u64::from(DayIndex::of_date(reference).get());
    let monday = reference
        .checked_sub_days(Days::new(since_monday))
        .unwrap_or(reference);
    shift_weeks(monday, week_offset)
}

/// The seven dates, Monday through Sunday, of the anchored week.
pub fn week_dates(reference: NaiveDate, week_offset: i64) -> [NaiveDate; 7] {
    let monday = week_anchor(reference, week_offset);
    let mut dates = [monday; 7];
    for (offset, slot) in (0u64..).zip(dates.iter_mut()) {
        *slot = monday.checked_add_days(Days::new(offset)).unwrap_or(monday);
    }
    dates
}

/// Canonical weekday index of `reference` moved by `week_offset` weeks.
///
/// Whole-week shifts never change the weekday, so the result equals the
/// weekday of `reference` itself.
pub fn resolve_weekday(reference: NaiveDate, week_offset: i64) -> DayIndex {
    DayIndex::of_date(shift_weeks(reference, week_offset))
}

/// Friend schedules that fall on `day`, in input order.
pub fn todays_friends(
    friend_schedules: &[ScheduleWithOwner],
    day: DayIndex,
) -> Vec<&ScheduleWithOwner> {
    friend_schedules
        .iter()
        .filter(|entry| entry.schedule.day == day)
        .collect()
}

/// The user's own schedule for `day`, if any.
pub fn schedule_for_day(schedules: &[Schedule], day: DayIndex) -> Option<&Schedule> {
    schedules.iter().find(|schedule| schedule.day == day)
}

/// Whether `other` shares `mine`'s neighborhood and strictly overlaps its window.
///
/// Touching endpoints do not overlap, and an empty or inverted window on
/// either side never matches.
///
/// # Examples
/// ```
/// use lunchmate::domain::{is_match, DayIndex, NeighborhoodId, Schedule, UserId};
///
/// let slot = |start: &str, end: &str| Schedule {
///     user_id: UserId::random(),
///     day: DayIndex::MONDAY,
///     neighborhood: NeighborhoodId::new("gangnam").expect("id"),
///     start: start.parse().expect("time"),
///     end: end.parse().expect("time"),
/// };
/// assert!(is_match(Some(&slot("10:00", "11:00")), &slot("10:30", "10:45")));
/// assert!(!is_match(Some(&slot("10:00", "11:00")), &slot("11:00", "12:00")));
/// assert!(!is_match(None, &slot("10:00", "11:00")));
/// ```
pub fn is_match(mine: Option<&Schedule>, other: &Schedule) -> bool {
    let Some(mine) = mine else {
        return false;
    };
    let well_formed = mine.start < mine.end && other.start < other.end;
    well_formed
        && mine.neighborhood == other.neighborhood
        && other.start < mine.end
        && other.end > mine.start
}

/// A friend's slot today and whether it lines up with the user's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendAvailability {
    pub entry: ScheduleWithOwner,
    pub is_match: bool,
}

/// Flag each of today's friend slots against the user's own slot.
pub fn match_friends(
    todays: &[&ScheduleWithOwner],
    mine: Option<&Schedule>,
) -> Vec<FriendAvailability> {
    todays
        .iter()
        .map(|entry| FriendAvailability {
            entry: (*entry).clone(),
            is_match: is_match(mine, &entry.schedule),
        })
        .collect()
}

/// A point to plot on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub is_self: bool,
}

/// Markers for the user (first, when scheduled) and every friend scheduled
/// today, matched or not.
///
/// Entries whose neighborhood is missing from `catalog` are dropped.
pub fn build_map_markers(
    todays: &[&ScheduleWithOwner],
    mine_today: Option<&Schedule>,
    catalog: &[Neighborhood],
) -> Vec<MapMarker> {
    let own = mine_today.and_then(|schedule| {
        find_neighborhood(catalog, &schedule.neighborhood).map(|hood| MapMarker {
            lat: hood.lat,
            lng: hood.lng,
            label: format!("{SELF_LABEL} ({})", hood.name),
            is_self: true,
        })
    });

    let friends = todays.iter().filter_map(|entry| {
        find_neighborhood(catalog, &entry.schedule.neighborhood).map(|hood| MapMarker {
            lat: hood.lat,
            lng: hood.lng,
            label: format!("{} ({})", entry.owner_nickname, hood.name),
            is_self: false,
        })
    });

    own.into_iter().chain(friends).collect()
}

#[cfg(test)]
mod tests;
