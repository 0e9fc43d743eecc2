//! Integration tests for the attendance service.
//!
//! Each scenario runs against both member store adapters (in-memory SQLite
//! and the in-memory store) through the public API, with a manual clock so
//! durations are exact.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use gym_attendance::adapters::{InMemoryCheckInLog, InMemoryMemberStore, ManualClock, SqliteMemberStore};
use gym_attendance::application::AttendanceService;
use gym_attendance::domain::attendance::{AttendanceError, RepeatCheckInPolicy};
use gym_attendance::domain::foundation::Timestamp;
use gym_attendance::domain::member::MemberName;
use gym_attendance::ports::{CheckInLog, MemberStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn start_time() -> Timestamp {
    Timestamp::from_unix_secs(1_705_312_800).unwrap()
}

struct Harness {
    service: AttendanceService,
    store: Arc<dyn MemberStore>,
    clock: Arc<ManualClock>,
}

impl Harness {
    fn with_store(store: Arc<dyn MemberStore>) -> Self {
        let clock = Arc::new(ManualClock::new(start_time()));
        let service = AttendanceService::new(store.clone(), clock.clone());
        Self {
            service,
            store,
            clock,
        }
    }

    async fn sqlite() -> Self {
        Self::with_store(Arc::new(SqliteMemberStore::in_memory().await.unwrap()))
    }

    fn memory() -> Self {
        Self::with_store(Arc::new(InMemoryMemberStore::new()))
    }

    async fn both() -> Vec<(&'static str, Self)> {
        vec![("sqlite", Self::sqlite().await), ("memory", Self::memory())]
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn register_check_in_wait_check_out() {
    for (label, h) in Harness::both().await {
        h.service.register("Alice", None, None).await.unwrap();
        h.service.check_in("Alice").await.unwrap();
        h.clock.advance_minutes(10);

        let out = h.service.check_out("Alice").await.unwrap();

        assert_eq!(out.duration_minutes, 10, "{label}");
        assert!(h.service.active_sessions().await.unwrap().is_empty(), "{label}");
        let profile = h.service.profile("Alice").await.unwrap();
        assert_eq!(profile.stats.total_visits, 1, "{label}");
        assert_eq!(profile.stats.total_duration_minutes, 10, "{label}");
        assert_eq!(profile.stats.last_visit, Some(start_time()), "{label}");
    }
}

#[tokio::test]
async fn check_in_unknown_name_auto_registers() {
    for (label, h) in Harness::both().await {
        let result = h.service.check_in("Bob").await.unwrap();

        assert!(result.auto_registered, "{label}");
        let bob = h
            .store
            .find_by_name(&MemberName::parse("Bob").unwrap())
            .await
            .unwrap()
            .unwrap();
        let active = h.service.active_sessions().await.unwrap();
        assert_eq!(active.len(), 1, "{label}");
        assert_eq!(active[0].member, bob, "{label}");
    }
}

#[tokio::test]
async fn check_out_unknown_name_fails_without_registering() {
    for (label, h) in Harness::both().await {
        let err = h.service.check_out("Carol").await.unwrap_err();

        assert_eq!(err, AttendanceError::member_not_found("Carol"), "{label}");
        assert!(h.service.list_members().await.unwrap().is_empty(), "{label}");
    }
}

#[tokio::test]
async fn check_out_without_check_in_fails() {
    for (label, h) in Harness::both().await {
        h.service.register("dave", None, None).await.unwrap();

        let err = h.service.check_out("dave").await.unwrap_err();

        assert_eq!(err, AttendanceError::no_active_session("Dave"), "{label}");
    }
}

#[tokio::test]
async fn registration_is_idempotent_across_spellings() {
    for (label, h) in Harness::both().await {
        let first = h.service.register("erin", None, None).await.unwrap();
        let second = h.service.register("  ERIN ", None, None).await.unwrap();

        assert!(first.created, "{label}");
        assert!(!second.created, "{label}");
        assert_eq!(first.member.id, second.member.id, "{label}");
        assert_eq!(h.service.list_members().await.unwrap().len(), 1, "{label}");
    }
}

#[tokio::test]
async fn multi_letter_capitals_do_not_create_duplicates() {
    for (label, h) in Harness::both().await {
        let first = h.service.register("ßen", None, None).await.unwrap();
        let second = h.service.register("Ssen", None, None).await.unwrap();

        assert!(!second.created, "{label}");
        assert_eq!(second.member.id, first.member.id, "{label}");
        assert_eq!(h.service.list_members().await.unwrap().len(), 1, "{label}");
    }
}

#[tokio::test]
async fn names_with_line_breaks_are_rejected() {
    for (label, h) in Harness::both().await {
        let err = h
            .service
            .check_in("al\nice,2020-01-01 00:00:00")
            .await
            .unwrap_err();

        assert!(matches!(err, AttendanceError::InvalidInput { .. }), "{label}");
        assert!(h.service.list_members().await.unwrap().is_empty(), "{label}");
    }
}

#[tokio::test]
async fn duplicate_email_surfaces_as_attendance_error() {
    for (label, h) in Harness::both().await {
        h.service
            .register("frank", Some("desk@gym.test"), None)
            .await
            .unwrap();

        let err = h
            .service
            .register("grace", Some("DESK@gym.test"), None)
            .await
            .unwrap_err();

        assert_eq!(err, AttendanceError::duplicate_email("desk@gym.test"), "{label}");
    }
}

#[tokio::test]
async fn repeat_check_in_is_rejected_by_default() {
    for (label, h) in Harness::both().await {
        h.service.check_in("heidi").await.unwrap();

        let err = h.service.check_in("heidi").await.unwrap_err();

        assert_eq!(err, AttendanceError::already_checked_in("Heidi"), "{label}");
        assert_eq!(h.service.active_sessions().await.unwrap().len(), 1, "{label}");
    }
}

#[tokio::test]
async fn shadowed_sessions_close_newest_first() {
    for (label, h) in Harness::both().await {
        let service = h.service.clone().with_policy(RepeatCheckInPolicy::Shadow);
        service.check_in("ivan").await.unwrap();
        h.clock.advance_minutes(20);
        service.check_in("ivan").await.unwrap();
        h.clock.advance_minutes(7);

        let out = service.check_out("ivan").await.unwrap();

        assert_eq!(out.duration_minutes, 7, "{label}");
        // The older session is orphaned but still counted.
        assert_eq!(service.active_sessions().await.unwrap().len(), 1, "{label}");
        assert_eq!(service.profile("ivan").await.unwrap().stats.total_visits, 2, "{label}");
    }
}

#[tokio::test]
async fn session_history_lists_newest_first() {
    for (label, h) in Harness::both().await {
        for minutes in [15, 40] {
            h.service.check_in("judy").await.unwrap();
            h.clock.advance_minutes(minutes);
            h.service.check_out("judy").await.unwrap();
            h.clock.advance_minutes(60);
        }

        let history = h.service.session_history("judy").await.unwrap();

        let durations: Vec<_> = history.sessions.iter().map(|s| s.duration_minutes).collect();
        assert_eq!(durations, vec![Some(40), Some(15)], "{label}");
    }
}

#[tokio::test]
async fn check_in_log_mirrors_successful_check_ins_only() {
    let h = Harness::memory();
    let log = Arc::new(InMemoryCheckInLog::new());
    let service = h.service.clone().with_check_in_log(log.clone());

    service.check_in("kim").await.unwrap();
    let _ = service.check_in("kim").await;
    h.clock.advance_minutes(3);
    service.check_in("lee").await.unwrap();

    let entries = log.read_all().await.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Kim", "Lee"]);
    assert_eq!(entries[1].checked_in_at, start_time().plus_minutes(3));
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    CheckIn(usize),
    CheckOut(usize),
    Wait(i64),
}

const NAMES: [&str; 3] = ["alice", "bob", "carol"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Op::CheckIn),
        (0..NAMES.len()).prop_map(Op::CheckOut),
        (0i64..600).prop_map(Op::Wait),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn duration_is_floor_of_elapsed_minutes(elapsed_secs in 0i64..200_000) {
        runtime().block_on(async {
            let h = Harness::sqlite().await;
            h.service.check_in("alice").await.unwrap();
            h.clock.advance_secs(elapsed_secs);

            let out = h.service.check_out("alice").await.unwrap();

            assert_eq!(out.duration_minutes, elapsed_secs / 60);
        });
    }

    #[test]
    fn active_sessions_and_visits_track_a_model(ops in proptest::collection::vec(op(), 1..40)) {
        runtime().block_on(async {
            let h = Harness::memory();
            let mut known: BTreeSet<&str> = BTreeSet::new();
            let mut inside: BTreeSet<&str> = BTreeSet::new();
            let mut visits: BTreeMap<&str, u64> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::CheckIn(i) => {
                        let result = h.service.check_in(NAMES[i]).await;
                        if inside.contains(NAMES[i]) {
                            assert!(matches!(result, Err(AttendanceError::AlreadyCheckedIn(_))));
                        } else {
                            result.unwrap();
                            known.insert(NAMES[i]);
                            inside.insert(NAMES[i]);
                            *visits.entry(NAMES[i]).or_default() += 1;
                        }
                    }
                    Op::CheckOut(i) => {
                        let result = h.service.check_out(NAMES[i]).await;
                        if inside.remove(NAMES[i]) {
                            assert!(result.unwrap().duration_minutes >= 0);
                        } else if known.contains(NAMES[i]) {
                            assert!(matches!(result, Err(AttendanceError::NoActiveSession(_))));
                        } else {
                            assert!(matches!(result, Err(AttendanceError::MemberNotFound(_))));
                        }
                    }
                    Op::Wait(secs) => h.clock.advance_secs(secs),
                }
            }

            let active: BTreeSet<String> = h
                .service
                .active_sessions()
                .await
                .unwrap()
                .into_iter()
                .map(|a| a.member.name.as_str().to_lowercase())
                .collect();
            let expected: BTreeSet<String> = inside.iter().map(|n| n.to_string()).collect();
            assert_eq!(active, expected);

            for (name, count) in visits {
                let profile = h.service.profile(name).await.unwrap();
                assert_eq!(profile.stats.total_visits, count);
            }
        });
    }
}
