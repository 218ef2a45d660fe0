//! Mounting the watch page end to end against mock backends.

use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use watch_page::auth::{AuthHandle, AuthUser};
use watch_page::config::PageConfig;
use watch_page::models::VideoId;
use watch_page::page::MainView;
use watch_page::session::RecordingNavigator;
use watch_page::storage::{KeyValueStore, MemoryStore, DARK_MODE_KEY, NEON_COLOR_KEY, TOKEN_KEY};
use watch_page::theme::style::{
    DARK_CLASS, NEON_PRIMARY_RGB_VAR, NEON_PRIMARY_VAR, NEON_SECONDARY_VAR,
};
use watch_page::theme::{AccentColor, StyleSheet};
use watch_page::{MountedPage, PageDeps, VideoPage};

mod common;

struct Harness {
    storage: Arc<MemoryStore>,
    auth: AuthHandle,
    navigator: Arc<RecordingNavigator>,
    style: Arc<StyleSheet>,
}

impl Harness {
    fn new(storage: MemoryStore, user: Option<&str>) -> Self {
        Self {
            storage: Arc::new(storage),
            auth: AuthHandle::new(user.map(AuthUser::new)),
            navigator: Arc::new(RecordingNavigator::new()),
            style: Arc::new(StyleSheet::new()),
        }
    }

    fn mount(&self, config: PageConfig, id: Option<&str>) -> MountedPage {
        VideoPage::mount(
            VideoId::from_route(id),
            PageDeps {
                config,
                storage: self.storage.clone(),
                auth: Arc::new(self.auth.clone()),
                navigator: self.navigator.clone(),
                style: self.style.clone(),
            },
        )
        .unwrap()
    }
}

async fn full_backend() -> common::MockBackend {
    common::start_json_backend(&[
        ("/api/videos/v1", 200, json!({"id": "v1", "title": "Fried fish"})),
        ("/api/videos/", 200, json!([{"id": "v2", "title": "Chips"}, {"_id": "v3"}])),
        ("/api/profile/u1", 200, json!({"displayName": "Ana"})),
        ("/api/profile/u2", 200, json!({"displayName": "Ben"})),
    ])
    .await
}

#[tokio::test]
async fn test_mount_loads_everything() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::with_entries([(TOKEN_KEY, "tok")]), Some("u1"));
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        Some("v1"),
    );
    page.settle().await;

    let state = page.state();
    assert!(state.is_video_loaded());
    assert_eq!(state.featured.as_ref().map(Vec::len), Some(2));
    assert_eq!(state.user.as_ref().and_then(|u| u.display_name()), Some("Ana"));

    let view = page.view();
    assert!(matches!(view.main, MainView::Video { .. }));
    assert_eq!(view.header.user_name.as_deref(), Some("Ana"));
    assert!(view.alert.is_none());
    assert!(page.is_subscribed());

    assert!(backend
        .requests()
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer tok")));
}

#[tokio::test]
async fn test_secondary_serves_video_when_primary_errors() {
    let primary = common::start_fixed_backend(500, "{}").await;
    let secondary = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), None);
    let page = harness.mount(
        common::test_config(primary.base_url(), secondary.base_url(), 50),
        Some("v1"),
    );
    page.settle().await;

    assert_eq!(page.state().video.map(|v| v.0), Some(json!({"id": "v1", "title": "Fried fish"})));
    assert!(page.session_notice().is_none());
}

#[tokio::test]
async fn test_total_failure_leaves_state_unset() {
    let harness = Harness::new(MemoryStore::new(), Some("u1"));
    let page = harness.mount(
        common::test_config(common::closed_base_url(), common::closed_base_url(), 50),
        Some("v1"),
    );
    page.settle().await;

    let state = page.state();
    assert!(state.video.is_none());
    assert!(state.featured.is_none());
    assert!(state.user.is_none());
    assert!(page.session_notice().is_none());
    assert!(matches!(page.view().main, MainView::Loading { .. }));
}

#[tokio::test]
async fn test_concurrent_401s_redirect_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let primary = common::start_programmable_backend(move |_| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            (401, r#"{"error":"expired"}"#.to_string())
        }
    })
    .await;
    let secondary = full_backend().await;

    let harness = Harness::new(MemoryStore::with_entries([(TOKEN_KEY, "old")]), Some("u1"));
    let page = harness.mount(
        common::test_config(primary.base_url(), secondary.base_url(), 100),
        Some("v1"),
    );
    page.settle().await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(secondary.total_hits(), 0);

    let notice = page.session_notice().unwrap();
    assert_eq!(notice.title, "Session Expired");
    assert!(page.view().alert.is_some());
    assert_eq!(harness.navigator.count(), 0);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.navigator.routes(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_redirect_still_fires_after_unmount() {
    let primary = common::start_fixed_backend(401, "{}").await;
    let harness = Harness::new(MemoryStore::new(), None);
    let page = harness.mount(
        common::test_config(primary.base_url(), common::closed_base_url(), 100),
        Some("v1"),
    );
    page.settle().await;
    assert!(page.session().is_expired());

    page.unmount();
    assert_eq!(harness.navigator.count(), 0);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(harness.navigator.routes(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_theme_round_trip_through_storage() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), None);
    let config = common::test_config(backend.base_url(), common::closed_base_url(), 50);

    let page = harness.mount(config.clone(), Some("v1"));
    assert!(!harness.style.has_class(DARK_CLASS));
    assert!(page.toggle_dark_mode());
    page.change_accent(AccentColor::Red);
    page.settle().await;
    page.unmount();

    assert_eq!(harness.storage.get(DARK_MODE_KEY).as_deref(), Some("true"));
    assert_eq!(harness.storage.get(NEON_COLOR_KEY).as_deref(), Some("red"));

    let reloaded = Harness {
        storage: harness.storage.clone(),
        auth: AuthHandle::signed_out(),
        navigator: Arc::new(RecordingNavigator::new()),
        style: Arc::new(StyleSheet::new()),
    };
    let page = reloaded.mount(config, Some("v1"));
    let theme = page.state().theme;
    assert!(theme.dark_mode);
    assert_eq!(theme.accent, AccentColor::Red);

    assert!(reloaded.style.has_class(DARK_CLASS));
    assert_eq!(reloaded.style.property(NEON_PRIMARY_VAR).as_deref(), Some("#ef4444"));
    assert!(reloaded.style.property(NEON_SECONDARY_VAR).is_some());
    assert_eq!(reloaded.style.property(NEON_PRIMARY_RGB_VAR).as_deref(), Some("239,68,68"));
}

#[tokio::test]
async fn test_profile_follows_auth_changes() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), None);
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        Some("v1"),
    );
    page.settle().await;
    assert!(page.state().user.is_none());
    assert_eq!(backend.hits("/api/profile/u1"), 0);

    harness.auth.sign_in(AuthUser::new("u1"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    page.settle().await;
    assert_eq!(page.state().user.as_ref().and_then(|u| u.display_name()), Some("Ana"));

    harness.auth.sign_in(AuthUser::new("u2"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    page.settle().await;
    assert_eq!(page.state().user.as_ref().and_then(|u| u.display_name()), Some("Ben"));

    harness.auth.sign_out();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(page.state().user.is_none());
    assert!(!page.view().header.signed_in);
}

#[tokio::test]
async fn test_late_profile_dropped_after_sign_out() {
    let backend = common::start_programmable_backend(|request| async move {
        match request.path.as_str() {
            "/api/profile/u1" => {
                tokio::time::sleep(Duration::from_millis(150)).await;
                (200, json!({"displayName": "Ana"}).to_string())
            }
            "/api/videos/" => (200, "[]".to_string()),
            _ => (404, "{}".to_string()),
        }
    })
    .await;
    let harness = Harness::new(MemoryStore::new(), Some("u1"));
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        None,
    );

    tokio::time::sleep(Duration::from_millis(30)).await;
    harness.auth.sign_out();
    tokio::time::sleep(Duration::from_millis(30)).await;

    page.settle().await;
    assert_eq!(backend.hits("/api/profile/u1"), 1);
    assert!(page.state().user.is_none());
    assert!(!page.view().header.signed_in);
}

#[tokio::test]
async fn test_auth_changes_ignored_after_unmount() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), None);
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        Some("v1"),
    );
    page.settle().await;
    assert_eq!(harness.auth.subscriber_count(), 1);

    drop(page);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(harness.auth.subscriber_count(), 0);

    harness.auth.sign_in(AuthUser::new("u1"));
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(backend.hits("/api/profile/u1"), 0);
}

#[tokio::test]
async fn test_missing_route_id_skips_video_fetch() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), None);
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        Some(""),
    );
    page.settle().await;

    let state = page.state();
    assert!(state.video.is_none());
    assert_eq!(state.featured.as_ref().map(Vec::len), Some(2));
    assert!(backend.requests().iter().all(|r| r.path == "/api/videos/"));
}

#[tokio::test]
async fn test_profile_dialog_toggles() {
    let backend = full_backend().await;
    let harness = Harness::new(MemoryStore::new(), Some("u1"));
    let page = harness.mount(
        common::test_config(backend.base_url(), common::closed_base_url(), 50),
        Some("v1"),
    );
    page.settle().await;

    page.open_profile_dialog();
    let view = page.view();
    assert!(view.profile_dialog.open);
    assert_eq!(
        view.profile_dialog.user.as_ref().and_then(|u| u.display_name()),
        Some("Ana")
    );

    page.close_profile_dialog();
    assert!(!page.view().profile_dialog.open);
}
