//! Behavioural coverage for the availability matcher.

use super::*;
use crate::domain::neighborhood::{NEIGHBORHOODS, NeighborhoodId};
use crate::domain::user::{Nickname, UserId};
use rstest::{fixture, rstest};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn day(index: i64) -> DayIndex {
    DayIndex::new(index).expect("day in range")
}

fn slot(day_index: i64, hood: &str, start: &str, end: &str) -> Schedule {
    Schedule {
        user_id: UserId::random(),
        day: day(day_index),
        neighborhood: NeighborhoodId::new(hood).expect("non-empty id"),
        start: start.parse().expect("valid start"),
        end: end.parse().expect("valid end"),
    }
}

fn owned(nickname: &str, schedule: Schedule) -> ScheduleWithOwner {
    ScheduleWithOwner {
        schedule,
        owner_nickname: Nickname::new(nickname).expect("valid nickname"),
    }
}

#[fixture]
fn friends_week() -> Vec<ScheduleWithOwner> {
    vec![
        owned("alice", slot(2, "gangnam", "12:00", "13:00")),
        owned("bora", slot(0, "gangnam", "12:00", "13:00")),
        owned("chul", slot(2, "yeouido", "11:30", "12:30")),
        owned("dana", slot(2, "gangnam", "12:30", "13:30")),
        owned("eun", slot(3, "pangyo", "12:00", "13:00")),
    ]
}

#[rstest]
#[case(date(2026, 10, 12))]
#[case(date(2026, 10, 14))]
#[case(date(2026, 10, 17))]
#[case(date(2026, 10, 18))]
fn every_day_of_a_week_shares_its_monday_anchor(#[case] reference: NaiveDate) {
    assert_eq!(week_anchor(reference, 0), date(2026, 10, 12));
}

#[rstest]
fn sunday_belongs_to_the_preceding_monday() {
    let sunday = date(2026, 10, 18);
    assert_eq!(resolve_weekday(sunday, 0).get(), 6);
    assert_eq!(week_anchor(sunday, 0), date(2026, 10, 12));
}

#[rstest]
#[case(-3)]
#[case(-1)]
#[case(1)]
#[case(4)]
fn week_offsets_shift_the_anchor_by_whole_weeks(#[case] offset: i64) {
    let reference = date(2026, 10, 15);
    let base = week_anchor(reference, 0);
    let shifted = week_anchor(reference, offset);
    assert_eq!((shifted - base).num_days(), 7 * offset);
    assert_eq!(resolve_weekday(reference, offset), resolve_weekday(reference, 0));
}

#[rstest]
fn week_dates_run_monday_to_sunday() {
    let dates = week_dates(date(2026, 12, 31), 0);
    assert_eq!(dates[0], date(2026, 12, 28));
    assert_eq!(dates[6], date(2027, 1, 3));
    for (index, value) in dates.iter().enumerate() {
        assert_eq!(usize::from(DayIndex::of_date(*value).get()), index);
    }
}

#[rstest]
fn extreme_offsets_saturate_instead_of_panicking() {
    let reference = date(2026, 10, 15);
    let _ = week_anchor(reference, i64::MAX);
    let _ = week_anchor(reference, i64::MIN);
    let _ = resolve_weekday(reference, i64::MIN);
}

#[rstest]
fn todays_friends_is_a_stable_filter(friends_week: Vec<ScheduleWithOwner>) {
    let today = todays_friends(&friends_week, day(2));
    let names: Vec<&str> = today.iter().map(|entry| entry.owner_nickname.as_ref()).collect();
    assert_eq!(names, ["alice", "chul", "dana"]);
}

#[rstest]
#[case("10:00", "11:00", "11:00", "12:00", false)]
#[case("11:00", "12:00", "10:00", "11:00", false)]
#[case("10:00", "11:00", "10:30", "10:45", true)]
#[case("10:30", "10:45", "10:00", "11:00", true)]
#[case("12:00", "13:00", "12:59", "14:00", true)]
#[case("12:00", "13:00", "13:01", "14:00", false)]
#[case("12:00", "12:00", "12:00", "12:00", false)]
#[case("12:00", "12:00", "11:00", "13:00", false)]
#[case("13:00", "12:00", "12:00", "13:00", false)]
#[case("12:00", "13:00", "13:00", "12:00", false)]
#[case("13:00", "12:00", "11:00", "14:00", false)]
fn overlap_is_strict_and_symmetric(
    #[case] mine_start: &str,
    #[case] mine_end: &str,
    #[case] other_start: &str,
    #[case] other_end: &str,
    #[case] expected: bool,
) {
    let mine = slot(1, "gangnam", mine_start, mine_end);
    let other = slot(1, "gangnam", other_start, other_end);
    assert_eq!(is_match(Some(&mine), &other), expected);
    assert_eq!(is_match(Some(&other), &mine), expected);
}

#[rstest]
fn different_neighborhoods_never_match() {
    let mine = slot(1, "gangnam", "12:00", "13:00");
    let other = slot(1, "yeoksam", "12:00", "13:00");
    assert!(!is_match(Some(&mine), &other));
}

#[rstest]
fn no_schedule_means_no_matches(friends_week: Vec<ScheduleWithOwner>) {
    let today = todays_friends(&friends_week, day(2));
    assert!(!today.is_empty());
    let flagged = match_friends(&today, None);
    assert!(flagged.iter().all(|entry| !entry.is_match));
}

#[rstest]
fn match_flags_follow_input_order(friends_week: Vec<ScheduleWithOwner>) {
    let mine = slot(2, "gangnam", "12:00", "13:00");
    let today = todays_friends(&friends_week, day(2));
    let flagged = match_friends(&today, Some(&mine));
    let flags: Vec<(&str, bool)> = flagged
        .iter()
        .map(|entry| (entry.entry.owner_nickname.as_ref(), entry.is_match))
        .collect();
    assert_eq!(flags, [("alice", true), ("chul", false), ("dana", true)]);
}

#[rstest]
fn markers_put_self_first_then_every_scheduled_friend() {
    let friends = vec![
        owned("A", slot(4, "gangnam", "12:00", "13:00")),
        owned("B", slot(4, "yeouido", "12:00", "13:00")),
        owned("C", slot(4, "gangnam", "12:30", "13:30")),
    ];
    let mine = slot(4, "gangnam", "12:00", "13:00");
    let today = todays_friends(&friends, day(4));

    let markers = build_map_markers(&today, Some(&mine), NEIGHBORHOODS);
    let labels: Vec<&str> = markers.iter().map(|marker| marker.label.as_str()).collect();
    assert_eq!(labels, ["나 (강남)", "A (강남)", "B (여의도)", "C (강남)"]);
    assert!(markers[0].is_self);
    assert!(markers[1..].iter().all(|marker| !marker.is_self));
}

#[rstest]
fn markers_without_own_schedule_only_list_friends(friends_week: Vec<ScheduleWithOwner>) {
    let today = todays_friends(&friends_week, day(2));
    let markers = build_map_markers(&today, None, NEIGHBORHOODS);
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|marker| !marker.is_self));
}

#[rstest]
fn unknown_neighborhoods_are_dropped_from_markers() {
    let friends = vec![
        owned("A", slot(1, "atlantis", "12:00", "13:00")),
        owned("B", slot(1, "jamsil", "12:00", "13:00")),
    ];
    let mine = slot(1, "retired-hood", "12:00", "13:00");
    let today = todays_friends(&friends, day(1));

    let markers = build_map_markers(&today, Some(&mine), NEIGHBORHOODS);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].label, "B (잠실)");
    assert!((markers[0].lat - 37.5133).abs() < f64::EPSILON);
}

#[rstest]
fn schedule_for_day_picks_the_matching_slot() {
    let mine = vec![
        slot(0, "gangnam", "12:00", "13:00"),
        slot(3, "seongsu", "11:30", "12:30"),
    ];
    let found = schedule_for_day(&mine, day(3)).expect("thursday slot");
    assert_eq!(found.neighborhood.as_ref(), "seongsu");
    assert!(schedule_for_day(&mine, day(5)).is_none());
}
