//! Tests for the schedule service.

use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockScheduleRepository;
use crate::domain::NeighborhoodId;
use rstest::rstest;

fn draft(day: i64, hood: &str) -> ScheduleDraft {
    ScheduleDraft {
        day: DayIndex::new(day).expect("day in range"),
        neighborhood: NeighborhoodId::new(hood).expect("non-empty id"),
        start: "12:00".parse().expect("valid time"),
        end: "13:00".parse().expect("valid time"),
    }
}

#[tokio::test]
async fn save_day_upserts_then_returns_the_fresh_week() {
    let user_id = UserId::random();
    let stored = draft(2, "seongsu").into_schedule(user_id.clone());
    let reloaded = vec![stored.clone()];

    let mut repo = MockScheduleRepository::new();
    repo.expect_upsert()
        .withf(move |schedule| *schedule == stored)
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_list_for_user()
        .times(1)
        .return_once(move |_| Ok(reloaded));

    let service = ScheduleService::new(Arc::new(repo));
    let week = service
        .save_day(&user_id, draft(2, "seongsu"))
        .await
        .expect("save succeeds");
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].neighborhood.as_ref(), "seongsu");
}

#[tokio::test]
async fn clear_day_deletes_then_reloads() {
    let user_id = UserId::random();
    let mut repo = MockScheduleRepository::new();
    repo.expect_delete()
        .withf(|_, day| day.get() == 4)
        .times(1)
        .returning(|_, _| Ok(()));
    repo.expect_list_for_user()
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let service = ScheduleService::new(Arc::new(repo));
    let week = service
        .clear_day(&user_id, DayIndex::new(4).expect("day in range"))
        .await
        .expect("clear succeeds");
    assert!(week.is_empty());
}

#[rstest]
#[case(ScheduleRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(ScheduleRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn failed_upserts_skip_the_reload(
    #[case] failure: ScheduleRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockScheduleRepository::new();
    repo.expect_upsert().return_once(move |_| Err(failure));
    repo.expect_list_for_user().never();

    let service = ScheduleService::new(Arc::new(repo));
    let err = service
        .save_day(&UserId::random(), draft(0, "gangnam"))
        .await
        .expect_err("upsert fails");
    assert_eq!(err.code(), expected);
}

/// Records the order of repository calls, pausing inside each upsert.
#[derive(Default)]
struct RecordingRepository {
    events: StdMutex<Vec<String>>,
}

impl RecordingRepository {
    fn record(&self, event: String) {
        self.events.lock().expect("events lock").push(event);
    }
}

#[async_trait]
impl ScheduleRepository for RecordingRepository {
    async fn list_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Schedule>, ScheduleRepositoryError> {
        self.record("reload".to_owned());
        Ok(Vec::new())
    }

    async fn upsert(&self, schedule: &Schedule) -> Result<(), ScheduleRepositoryError> {
        self.record(format!("upsert:start:{}", schedule.day));
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.record(format!("upsert:end:{}", schedule.day));
        Ok(())
    }

    async fn delete(
        &self,
        _user_id: &UserId,
        _day: DayIndex,
    ) -> Result<(), ScheduleRepositoryError> {
        Ok(())
    }

    async fn list_for_friends_of(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<ScheduleWithOwner>, ScheduleRepositoryError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn edits_by_the_same_user_do_not_interleave() {
    let repo = Arc::new(RecordingRepository::default());
    let service = ScheduleService::new(Arc::clone(&repo));
    let user_id = UserId::random();

    let (first, second) = tokio::join!(
        service.save_day(&user_id, draft(1, "gangnam")),
        service.save_day(&user_id, draft(3, "jamsil")),
    );
    first.expect("first save");
    second.expect("second save");

    let events = repo.events.lock().expect("events lock").clone();
    assert_eq!(events.len(), 6);
    for chunk in events.chunks(3) {
        assert!(chunk[0].starts_with("upsert:start"));
        assert!(chunk[1].starts_with("upsert:end"));
        assert_eq!(chunk[2], "reload");
    }
}

#[tokio::test]
async fn edits_by_different_users_run_concurrently() {
    let repo = Arc::new(RecordingRepository::default());
    let service = ScheduleService::new(Arc::clone(&repo));
    let (ada, bora) = (UserId::random(), UserId::random());

    let (first, second) = tokio::join!(
        service.save_day(&ada, draft(1, "gangnam")),
        service.save_day(&bora, draft(3, "jamsil")),
    );
    first.expect("first save");
    second.expect("second save");

    let events = repo.events.lock().expect("events lock").clone();
    assert!(events[0].starts_with("upsert:start"));
    assert!(events[1].starts_with("upsert:start"));
}

#[tokio::test]
async fn friend_schedule_failures_are_mapped() {
    let mut repo = MockScheduleRepository::new();
    repo.expect_list_for_friends_of()
        .return_once(|_| Err(ScheduleRepositoryError::connection("down")));

    let service = ScheduleService::new(Arc::new(repo));
    let err = service
        .friend_schedules(&UserId::random())
        .await
        .expect_err("store down");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
fn idle_locks_are_pruned() {
    let locks = UserLocks::default();
    let ada = UserId::random();
    drop(locks.lock_for(&ada));
    let _held = locks.lock_for(&UserId::random());
    let map = locks.locks.lock().expect("locks");
    assert_eq!(map.len(), 1);
    assert!(!map.contains_key(&ada));
}
