//! Tests for the login / registration / logout flows.
//!
//! The API is mocked with `mockall` for flow logic and served by `wiremock`
//! for the end-to-end path through the real HTTP client.

use async_trait::async_trait;
use fin_core::{
    AuthApi, FinError, KeyValueStore, Navigator, Notice, NoticeKind, NoticeLevel, Notifier,
    Registration, Screen, ScreenSet, Session, UserRecord,
};
use fin_session::{AuthActions, SessionHolder, FILL_ALL_FIELDS, LOGOUT_SUCCESS, REGISTER_SUCCESS};
use fin_storage::{load_session, save_session, MemoryStore, SESSION_KEY};
use mockall::mock;
use std::sync::{Arc, Mutex};

mock! {
    pub Api {}

    #[async_trait]
    impl AuthApi for Api {
        async fn login(&self, email: &str, password: &str) -> fin_core::Result<Session>;
        async fn register(&self, registration: &Registration) -> fin_core::Result<Option<String>>;
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
struct RecordingNavigator {
    screens: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    fn screens(&self) -> Vec<Screen> {
        self.screens.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen) {
        self.screens.lock().unwrap().push(screen);
    }
}

struct Harness {
    actions: AuthActions,
    holder: SessionHolder,
    store: MemoryStore,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(api: impl AuthApi + 'static) -> Harness {
    let holder = SessionHolder::with_session(Session::empty());
    let store = MemoryStore::new();
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());

    let actions = AuthActions::new(
        Arc::new(api),
        holder.clone(),
        Arc::new(store.clone()),
        notifier.clone(),
        navigator.clone(),
    );

    Harness {
        actions,
        holder,
        store,
        notifier,
        navigator,
    }
}

fn login_body(role: &str) -> Session {
    serde_json::from_value(serde_json::json!({
        "user": { "name": "Ada", "email": "ada@example.com", "role": role },
        "token": "jwt-from-server",
        "message": "Welcome back"
    }))
    .unwrap()
}

// =============================================================================
// Login Tests
// =============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn test_empty_fields_never_hit_network() {
        for (email, password) in [("", "x"), ("x", ""), ("", "")] {
            let mut api = MockApi::new();
            api.expect_login().never();
            let h = harness(api);

            let err = h.actions.login(email, password).await.unwrap_err();

            assert!(matches!(err, FinError::Validation(_)));
            assert_eq!(
                h.notifier.notices(),
                vec![Notice::toast(NoticeLevel::Warning, FILL_ALL_FIELDS)]
            );
            assert!(h.navigator.screens().is_empty());
            assert_eq!(h.holder.session(), Session::empty());
        }
    }

    #[tokio::test]
    async fn test_success_updates_holder_and_store() {
        let mut api = MockApi::new();
        api.expect_login()
            .times(1)
            .returning(|_, _| Ok(login_body("customer")));
        let h = harness(api);

        let session = h.actions.login("ada@example.com", "secret").await.unwrap();

        assert_eq!(h.holder.session().token, "jwt-from-server");
        assert_eq!(h.holder.session(), session);
        assert_eq!(load_session(&h.store).await, session);
        assert_eq!(h.holder.screen_set(), ScreenSet::UserDashboard);
        assert_eq!(h.navigator.screens(), vec![Screen::Dashboard]);
    }

    #[tokio::test]
    async fn test_whole_response_is_stored() {
        let mut api = MockApi::new();
        api.expect_login().returning(|_, _| Ok(login_body("customer")));
        let h = harness(api);

        h.actions.login("ada@example.com", "secret").await.unwrap();

        let raw = h.store.get(SESSION_KEY).await.unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored["message"], serde_json::json!("Welcome back"));
        assert_eq!(
            h.holder.session().extra.get("message"),
            Some(&serde_json::json!("Welcome back"))
        );

        // The server message doubles as the confirmation toast
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::toast(NoticeLevel::Success, "Welcome back")]
        );
    }

    #[tokio::test]
    async fn test_admin_lands_on_admin_dashboard() {
        let mut api = MockApi::new();
        api.expect_login().returning(|_, _| Ok(login_body("admin")));
        let h = harness(api);

        h.actions.login("ada@example.com", "secret").await.unwrap();

        assert_eq!(h.holder.screen_set(), ScreenSet::AdminDashboard);
        assert_eq!(h.navigator.screens(), vec![Screen::AdminDashboard]);
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let mut api = MockApi::new();
        api.expect_login().returning(|_, _| {
            Err(FinError::Server {
                status: 401,
                message: Some("Invalid credentials".into()),
            })
        });
        let h = harness(api);

        let err = h.actions.login("ada@example.com", "bad").await.unwrap_err();

        assert!(matches!(err, FinError::Server { status: 401, .. }));
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::toast(NoticeLevel::Error, "Invalid credentials")]
        );
        assert_eq!(h.holder.session(), Session::empty());
        assert_eq!(h.store.get(SESSION_KEY).await.unwrap(), None);
        assert!(h.navigator.screens().is_empty());
    }

    #[tokio::test]
    async fn test_network_error_gets_generic_message() {
        let mut api = MockApi::new();
        api.expect_login()
            .returning(|_, _| Err(FinError::Network("connection refused".into())));
        let h = harness(api);

        h.actions.login("ada@example.com", "pw").await.unwrap_err();

        let notices = h.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, fin_core::error::NETWORK_FAILURE_MESSAGE);
    }
}

// =============================================================================
// Registration Tests
// =============================================================================

mod register {
    use super::*;

    #[tokio::test]
    async fn test_empty_field_shows_alert_without_network() {
        let mut api = MockApi::new();
        api.expect_register().never();
        let h = harness(api);

        let err = h
            .actions
            .register("Bo", "bo@example.com", "", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, FinError::Validation(_)));
        let notices = h.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Alert);
        assert_eq!(notices[0].message, FILL_ALL_FIELDS);
    }

    #[tokio::test]
    async fn test_success_goes_to_login_without_signing_in() {
        let mut api = MockApi::new();
        api.expect_register()
            .times(1)
            .returning(|reg| {
                assert_eq!(reg.phone, "555-0100");
                Ok(Some("Account created".into()))
            });
        let h = harness(api);

        h.actions
            .register("Bo", "bo@example.com", "555-0100", "pw")
            .await
            .unwrap();

        assert_eq!(
            h.notifier.notices(),
            vec![Notice::alert(NoticeLevel::Success, "Account created")]
        );
        assert_eq!(h.navigator.screens(), vec![Screen::Login]);
        assert_eq!(h.holder.screen_set(), ScreenSet::Unauthenticated);
        assert_eq!(h.store.get(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let mut api = MockApi::new();
        api.expect_register().returning(|_| Ok(None));
        let h = harness(api);

        h.actions
            .register("Bo", "bo@example.com", "555-0100", "pw")
            .await
            .unwrap();

        assert_eq!(
            h.notifier.notices(),
            vec![Notice::alert(NoticeLevel::Success, REGISTER_SUCCESS)]
        );
    }

    #[tokio::test]
    async fn test_failure_alerts_server_message() {
        let mut api = MockApi::new();
        api.expect_register().returning(|_| {
            Err(FinError::Server {
                status: 409,
                message: Some("Email already registered".into()),
            })
        });
        let h = harness(api);

        h.actions
            .register("Bo", "bo@example.com", "555-0100", "pw")
            .await
            .unwrap_err();

        assert_eq!(
            h.notifier.notices(),
            vec![Notice::alert(NoticeLevel::Error, "Email already registered")]
        );
        assert!(h.navigator.screens().is_empty());
    }
}

// =============================================================================
// Logout Tests
// =============================================================================

mod logout {
    use super::*;

    #[tokio::test]
    async fn test_logout_clears_holder_and_store() {
        let h = harness(MockApi::new());
        let session = login_body("admin");
        h.holder.set_session(session.clone());
        save_session(&h.store, &session).await.unwrap();

        h.actions.logout().await;

        let cleared = h.holder.session();
        assert!(cleared.user.is_none());
        assert_eq!(cleared.token, "");
        assert_eq!(h.store.get(SESSION_KEY).await.unwrap(), None);
        assert_eq!(h.holder.screen_set(), ScreenSet::Unauthenticated);
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::toast(NoticeLevel::Success, LOGOUT_SUCCESS)]
        );
        assert_eq!(h.navigator.screens(), vec![Screen::Login]);
    }

    #[tokio::test]
    async fn test_logout_when_already_signed_out() {
        let h = harness(MockApi::new());

        h.actions.logout().await;

        assert_eq!(h.holder.session(), Session::empty());
        assert_eq!(h.navigator.screens(), vec![Screen::Login]);
    }
}

// =============================================================================
// End-to-end with the HTTP client
// =============================================================================

mod end_to_end {
    use super::*;
    use fin_server_client::{ClientConfig, FinServerClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_restart_logout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": { "name": "Ada", "email": "ada@example.com", "role": "admin" },
                "token": "e2e-token",
                "message": "Login successful"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FinServerClient::new(ClientConfig::new(mock_server.uri())).unwrap();
        let h = harness(client);

        h.actions.login("ada@example.com", "secret").await.unwrap();
        assert_eq!(h.holder.screen_set(), ScreenSet::AdminDashboard);

        // A fresh process restores the same session from the store
        let restarted = SessionHolder::new();
        assert!(restarted.is_loading());
        restarted.bootstrap(&h.store).await;
        assert!(!restarted.is_loading());
        assert_eq!(restarted.session(), h.holder.session());
        assert_eq!(
            restarted.session().user,
            Some(UserRecord::new("Ada", "ada@example.com", "admin"))
        );

        h.actions.logout().await;
        let after_logout = SessionHolder::new();
        after_logout.bootstrap(&h.store).await;
        assert_eq!(after_logout.screen_set(), ScreenSet::Unauthenticated);
    }
}
