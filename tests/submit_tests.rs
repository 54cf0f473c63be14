use hotellog::core::credentials::CredentialStore;
use hotellog::core::edit::EditLogic;
use hotellog::core::gate::RoleGate;
use hotellog::core::submit::SubmitLogic;
use hotellog::errors::{AppError, AppResult};
use hotellog::models::{AdminInfo, HotelInfo, Role, RoomEntry, Session};
use hotellog::notify::{Notifier, Summary};
use hotellog::store::{LogSnapshot, LogStore};
use std::cell::RefCell;

struct Recording {
    seen: RefCell<Vec<Summary>>,
}

impl Notifier for Recording {
    fn notify(&self, summary: &Summary) -> AppResult<()> {
        self.seen.borrow_mut().push(summary.clone());
        Ok(())
    }
}

struct Failing;

impl Notifier for Failing {
    fn notify(&self, _summary: &Summary) -> AppResult<()> {
        Err(AppError::Notification("relay down".into()))
    }
}

fn credentials() -> CredentialStore {
    CredentialStore::from_secrets([
        (Role::Admin, "letmein".to_string()),
        (Role::Employee, "employee123".to_string()),
    ])
}

fn session(role: Role) -> Session {
    Session {
        role,
        authenticated: true,
    }
}

fn form() -> (HotelInfo, AdminInfo, Vec<RoomEntry>) {
    let hotel = HotelInfo {
        name: "Sunrise Inn".into(),
        ..HotelInfo::default()
    };
    let admin = AdminInfo {
        prepared_by: "Pat".into(),
        date_prepared: "03/05/2025".into(),
        job_number: "J-1".into(),
    };
    let rooms = ["101", "102"]
        .iter()
        .map(|n| RoomEntry {
            room_number: n.to_string(),
            employee_day: "Ana".into(),
            employee_night: "Bo".into(),
            check_in: "03/01/2025".into(),
            check_out: "03/04/2025".into(),
            actual_cost: Some(120.5),
        })
        .collect();
    (hotel, admin, rooms)
}

#[test]
fn verify_scenarios() {
    let store = credentials();
    assert!(store.verify("admin", "letmein"));
    assert!(store.verify("employee", "employee123"));
    assert!(!store.verify("admin", "wrong"));
    assert!(!store.verify("admin", "employee123"));
    assert!(!store.verify("nosuchrole", "anything"));
    assert!(!store.verify("Admin", "letmein"));
}

#[test]
fn gate_yields_session_or_generic_auth_error() {
    let store = credentials();
    let gate = RoleGate::new(&store);

    let s = gate.login("employee", "employee123").unwrap();
    assert_eq!(s.role, Role::Employee);
    assert!(s.authenticated);

    let wrong = gate.login("admin", "nope").unwrap_err();
    let unknown = gate.login("root", "letmein").unwrap_err();
    assert!(matches!(wrong, AppError::Auth));
    assert_eq!(wrong.to_string(), unknown.to_string());
}

#[test]
fn role_without_secret_cannot_log_in() {
    let store = CredentialStore::from_secrets([(Role::Employee, "employee123".to_string())]);
    let gate = RoleGate::new(&store);

    assert!(!store.has_role(Role::Admin));
    assert!(matches!(gate.login("admin", ""), Err(AppError::Auth)));
    assert!(matches!(gate.login("admin", "letmein"), Err(AppError::Auth)));
    assert!(gate.login("employee", "employee123").is_ok());
}

#[test]
fn submit_appends_then_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("hotel_log.csv"));
    let (hotel, admin, rooms) = form();
    let recorder = Recording {
        seen: RefCell::new(Vec::new()),
    };

    let out = SubmitLogic::apply(
        &store,
        &session(Role::Employee),
        &hotel,
        &admin,
        &rooms,
        Some(&recorder as &dyn Notifier),
    )
    .unwrap();

    assert_eq!(out.rows_written, 2);
    assert_eq!(out.total_rows, 2);
    assert!(matches!(out.notification, Some(Ok(()))));

    let seen = recorder.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].rooms.len(), 2);
    assert!(seen[0].body().contains("Cost: $120.50"));
}

#[test]
fn notification_failure_does_not_undo_append() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("hotel_log.csv"));
    let (hotel, admin, rooms) = form();

    let out = SubmitLogic::apply(
        &store,
        &session(Role::Employee),
        &hotel,
        &admin,
        &rooms,
        Some(&Failing as &dyn Notifier),
    )
    .unwrap();

    assert!(matches!(out.notification, Some(Err(AppError::Notification(_)))));
    match store.read_all().unwrap() {
        LogSnapshot::Present(t) => assert_eq!(t.len(), 2),
        LogSnapshot::Missing => panic!("append was lost"),
    }
}

#[test]
fn submit_and_edit_are_gated_by_role() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("hotel_log.csv"));
    let (hotel, admin, rooms) = form();

    let err = SubmitLogic::apply(&store, &session(Role::Admin), &hotel, &admin, &rooms, None)
        .unwrap_err();
    assert!(matches!(err, AppError::Auth));
    assert_eq!(store.read_all().unwrap(), LogSnapshot::Missing);

    SubmitLogic::apply(&store, &session(Role::Employee), &hotel, &admin, &rooms, None).unwrap();

    let err = EditLogic::apply(&store, &session(Role::Employee), 0, "Job Number", "J-2")
        .unwrap_err();
    assert!(matches!(err, AppError::Auth));

    let unauthenticated = Session {
        role: Role::Admin,
        authenticated: false,
    };
    assert!(EditLogic::apply(&store, &unauthenticated, 0, "Job Number", "J-2").is_err());

    let old = EditLogic::apply(&store, &session(Role::Admin), 0, "Job Number", "J-42").unwrap();
    assert_eq!(old, "J-1");
}
