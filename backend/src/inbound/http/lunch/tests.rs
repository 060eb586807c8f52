//! Tests for lunch dashboard handlers.

use super::*;
use crate::domain::{
    DayIndex, NEIGHBORHOODS, NeighborhoodId, Nickname, Schedule, ScheduleWithOwner, UserId,
    build_map_markers, match_friends, todays_friends,
};
use crate::inbound::http::test_utils::{MockPorts, detail, init_app, json_body, signed_in};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(today).service(week);
}

fn slot(user_id: &UserId, day: i64, hood: &str, start: &str, end: &str) -> Schedule {
    Schedule {
        user_id: user_id.clone(),
        day: DayIndex::new(day).expect("day"),
        neighborhood: NeighborhoodId::new(hood).expect("hood"),
        start: start.parse().expect("start"),
        end: end.parse().expect("end"),
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).expect("valid date")
}

#[fixture]
fn wednesday_overview() -> TodayOverview {
    let me = UserId::random();
    let mine = slot(&me, 2, "gangnam", "12:00", "13:00");
    let friends = vec![
        ScheduleWithOwner {
            schedule: slot(&UserId::random(), 2, "gangnam", "12:30", "13:30"),
            owner_nickname: Nickname::new("alice").expect("nickname"),
        },
        ScheduleWithOwner {
            schedule: slot(&UserId::random(), 2, "yeouido", "12:00", "13:00"),
            owner_nickname: Nickname::new("bora").expect("nickname"),
        },
    ];
    let todays = todays_friends(&friends, DayIndex::new(2).expect("day"));
    TodayOverview {
        date: date(14),
        day: DayIndex::new(2).expect("day"),
        markers: build_map_markers(&todays, Some(&mine), NEIGHBORHOODS),
        friends: match_friends(&todays, Some(&mine)),
        my_schedule: Some(mine),
    }
}

#[rstest]
#[actix_web::test]
async fn today_renders_matches_and_markers(wednesday_overview: TodayOverview) {
    let me = UserId::random();
    let mut ports = MockPorts::default();
    ports
        .lunch
        .expect_today()
        .times(1)
        .return_once(move |_| Ok(wednesday_overview));
    let app = init_app(ports.into_state(), routes).await;
    let cookie = signed_in(&app, &me).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/lunch/today").cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["date"], "2026-10-14");
    assert_eq!(body["dayName"], "수");
    assert_eq!(body["matchCount"], 1);
    assert_eq!(body["mySchedule"]["neighborhood"], "gangnam");
    assert_eq!(body["friends"][0]["nickname"], "alice");
    assert_eq!(body["friends"][0]["isMatch"], true);
    assert_eq!(body["friends"][1]["isMatch"], false);
    let labels: Vec<&str> = body["markers"]
        .as_array()
        .expect("markers")
        .iter()
        .filter_map(|marker| marker["label"].as_str())
        .collect();
    assert_eq!(labels, ["나 (강남)", "alice (강남)", "bora (여의도)"]);
    assert_eq!(body["markers"][0]["isSelf"], true);
}

#[rstest]
#[actix_web::test]
async fn today_without_own_schedule_has_null_slot() {
    let me = UserId::random();
    let mut ports = MockPorts::default();
    ports.lunch.expect_today().return_once(|_| {
        Ok(TodayOverview {
            date: date(18),
            day: DayIndex::new(6).expect("sunday"),
            my_schedule: None,
            friends: Vec::new(),
            markers: Vec::new(),
        })
    });
    let app = init_app(ports.into_state(), routes).await;
    let cookie = signed_in(&app, &me).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/lunch/today").cookie(cookie).to_request(),
    )
    .await;

    let body = json_body(response).await;
    assert!(body["mySchedule"].is_null());
    assert_eq!(body["matchCount"], 0);
}

fn week_overview(offset: i64) -> WeekOverview {
    let days = DayIndex::all()
        .zip(12..)
        .map(|(day, dom)| WeekDay {
            day,
            date: date(dom),
            is_today: dom == 14,
            my_schedule: None,
            friend_count: usize::from(day.get() % 2),
        })
        .collect();
    WeekOverview {
        week_offset: offset,
        is_current_week: offset == 0,
        month_label: "2026년 10월".to_owned(),
        days,
    }
}

#[rstest]
#[case("/api/v1/lunch/week", 0)]
#[case("/api/v1/lunch/week?offset=-2", -2)]
#[case("/api/v1/lunch/week?offset=3", 3)]
#[actix_web::test]
async fn week_forwards_the_offset(#[case] uri: &str, #[case] expected: i64) {
    let me = UserId::random();
    let mut ports = MockPorts::default();
    ports
        .lunch
        .expect_week()
        .withf(move |_, offset| *offset == expected)
        .times(1)
        .return_once(|_, offset| Ok(week_overview(offset)));
    let app = init_app(ports.into_state(), routes).await;
    let cookie = signed_in(&app, &me).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(uri).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["weekOffset"], expected);
    assert_eq!(body["isCurrentWeek"], expected == 0);
    assert_eq!(body["monthLabel"], "2026년 10월");
    let days = body["days"].as_array().expect("days");
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["dayName"], "월");
    assert_eq!(days[2]["isToday"], true);
    assert_eq!(days[1]["friendCount"], 1);
}

#[rstest]
#[case("next")]
#[case("521")]
#[case("-100000")]
#[case("9223372036854775807")]
#[actix_web::test]
async fn week_rejects_malformed_or_far_off_offsets(#[case] offset: &str) {
    let me = UserId::random();
    let mut ports = MockPorts::default();
    ports.lunch.expect_week().never();
    let app = init_app(ports.into_state(), routes).await;
    let cookie = signed_in(&app, &me).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/lunch/week?offset={offset}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(detail(&body, "field"), Some("offset"));
    assert_eq!(detail(&body, "code"), Some("invalid_week_offset"));
}

#[rstest]
#[case("/api/v1/lunch/today")]
#[case("/api/v1/lunch/week")]
#[actix_web::test]
async fn dashboards_require_a_session(#[case] uri: &str) {
    let app = init_app(MockPorts::default().into_state(), routes).await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
fn overviews_convert_into_responses(wednesday_overview: TodayOverview) {
    let today_body = TodayResponse::from(&wednesday_overview);
    assert_eq!(today_body.date, "2026-10-14");
    assert_eq!(today_body.day_of_week, 2);
    assert_eq!(today_body.match_count, 1);
    assert_eq!(today_body.markers.len(), 3);

    let week_body = WeekResponse::from(&week_overview(-1));
    assert_eq!(week_body.week_offset, -1);
    assert!(!week_body.is_current_week);
    assert_eq!(week_body.days.len(), 7);
    assert_eq!(week_body.days[0].date, "2026-10-12");
}
