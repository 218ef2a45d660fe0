//! Page mount, toggles and unmount.

use futures_util::future::join_all;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::auth::{AuthProvider, AuthSubscription, AuthUser};
use crate::config::PageConfig;
use crate::fetch::{FetchError, ResilientFetcher, VideoApi};
use crate::models::{Credential, VideoId};
use crate::page::state::PageState;
use crate::page::view::PageView;
use crate::session::{Navigator, SessionMonitor, SessionNotice};
use crate::storage::{KeyValueStore, TOKEN_KEY};
use crate::theme::{apply_theme, AccentColor, StyleSink, ThemePreference};

/// Collaborators the page is mounted with.
pub struct PageDeps {
    pub config: PageConfig,
    pub storage: Arc<dyn KeyValueStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub navigator: Arc<dyn Navigator>,
    pub style: Arc<dyn StyleSink>,
}

/// The video watch page.
pub struct VideoPage;

impl VideoPage {
    /// Mount the page for `route_id`: apply the stored theme, subscribe to
    /// auth changes and start the video and featured fetches. Must be called
    /// within a tokio runtime.
    pub fn mount(route_id: Option<VideoId>, deps: PageDeps) -> Result<MountedPage, FetchError> {
        let session = Arc::new(SessionMonitor::new(
            deps.navigator.clone(),
            &deps.config.session,
        ));
        let fetcher = ResilientFetcher::new(
            &deps.config.endpoints,
            &deps.config.timeouts,
            session.clone(),
        )?;

        let theme = ThemePreference::load(deps.storage.as_ref());
        apply_theme(deps.style.as_ref(), &theme);

        let credential = Credential::new(deps.storage.get(TOKEN_KEY));
        tracing::info!(
            video_id = ?route_id.as_ref().map(|id| id.0.as_str()),
            authenticated = credential.is_present(),
            dark_mode = theme.dark_mode,
            accent = %theme.accent,
            "Mounting watch page"
        );

        let shared = Arc::new(PageShared {
            state: RwLock::new(PageState::with_theme(theme)),
            api: VideoApi::new(fetcher),
            credential,
            session,
            storage: deps.storage,
            style: deps.style,
            tasks: Mutex::new(Vec::new()),
            auth_generation: AtomicU64::new(0),
        });

        let listener = shared.clone();
        let subscription = AuthSubscription::subscribe(deps.auth.as_ref(), move |user| {
            listener.on_auth_change(user);
        });

        match route_id {
            Some(id) => shared.spawn_video_fetch(id),
            None => tracing::error!("Video id is undefined, skipping video fetch"),
        }
        shared.spawn_featured_fetch();

        Ok(MountedPage {
            shared,
            subscription: Some(subscription),
        })
    }
}

struct PageShared {
    state: RwLock<PageState>,
    api: VideoApi,
    credential: Credential,
    session: Arc<SessionMonitor>,
    storage: Arc<dyn KeyValueStore>,
    style: Arc<dyn StyleSink>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    /// Bumped on every auth notification so late profile responses for a
    /// previous user are dropped.
    auth_generation: AtomicU64,
}

impl PageShared {
    fn read<T>(&self, f: impl FnOnce(&PageState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn update<T>(&self, f: impl FnOnce(&mut PageState) -> T) -> T {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    fn track<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle);
    }

    fn on_auth_change(self: &Arc<Self>, user: Option<AuthUser>) {
        let generation = self.auth_generation.fetch_add(1, Ordering::AcqRel) + 1;
        match user {
            Some(user) => self.spawn_profile_fetch(user, generation),
            None => {
                tracing::debug!("Signed out, clearing profile");
                self.update(|state| state.user = None);
            }
        }
    }

    fn spawn_profile_fetch(self: &Arc<Self>, user: AuthUser, generation: u64) {
        let page = self.clone();
        self.track(async move {
            match page.api.fetch_profile(&user.uid, &page.credential).await {
                Ok(profile) => {
                    let applied = page.update(|state| {
                        let current = page.auth_generation.load(Ordering::Acquire) == generation;
                        if current {
                            state.user = Some(profile);
                        }
                        current
                    });
                    if !applied {
                        tracing::debug!(
                            uid = %user.uid,
                            "Dropping profile for superseded auth state"
                        );
                    }
                }
                Err(e) => {
                    tracing::error!(uid = %user.uid, error = %e, "Failed to fetch user details")
                }
            }
        });
    }

    fn spawn_video_fetch(self: &Arc<Self>, id: VideoId) {
        let page = self.clone();
        self.track(async move {
            match page.api.fetch_video(&id, &page.credential).await {
                Ok(video) => page.update(|state| state.video = Some(video)),
                Err(e) => tracing::error!(video_id = %id, error = %e, "Failed to fetch video"),
            }
        });
    }

    fn spawn_featured_fetch(self: &Arc<Self>) {
        let page = self.clone();
        self.track(async move {
            match page.api.fetch_featured(&page.credential).await {
                Ok(videos) => {
                    tracing::debug!(count = videos.len(), "Featured videos loaded");
                    page.update(|state| state.featured = Some(videos));
                }
                Err(e) => tracing::error!(error = %e, "Failed to fetch featured videos"),
            }
        });
    }
}

/// A mounted page. Dropping it unmounts.
pub struct MountedPage {
    shared: Arc<PageShared>,
    subscription: Option<AuthSubscription>,
}

impl MountedPage {
    /// Snapshot of the page state.
    pub fn state(&self) -> PageState {
        self.shared.read(|state| state.clone())
    }

    pub fn session(&self) -> &Arc<SessionMonitor> {
        &self.shared.session
    }

    pub fn session_notice(&self) -> Option<SessionNotice> {
        self.shared.session.notice()
    }

    pub fn view(&self) -> PageView {
        let notice = self.session_notice();
        self.shared.read(|state| PageView::compose(state, notice))
    }

    /// Flip dark mode, persist and apply it. Returns the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        let theme = self.shared.update(|state| {
            state.theme.toggle_dark_mode();
            state.theme
        });

        if let Err(e) = theme.save_dark_mode(self.shared.storage.as_ref()) {
            tracing::warn!(error = %e, "Failed to persist dark mode");
        }
        apply_theme(self.shared.style.as_ref(), &theme);
        theme.dark_mode
    }

    /// Select an accent color, persist and apply it.
    pub fn change_accent(&self, accent: AccentColor) {
        let theme = self.shared.update(|state| {
            state.theme.accent = accent;
            state.theme
        });

        if let Err(e) = theme.save_accent(self.shared.storage.as_ref()) {
            tracing::warn!(error = %e, "Failed to persist accent color");
        }
        apply_theme(self.shared.style.as_ref(), &theme);
    }

    pub fn open_profile_dialog(&self) {
        self.shared.update(|state| state.dialog_open = true);
    }

    pub fn close_profile_dialog(&self) {
        self.shared.update(|state| state.dialog_open = false);
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(AuthSubscription::is_active)
    }

    /// Wait for every fetch started so far, including profile fetches
    /// triggered by auth notifications while waiting.
    pub async fn settle(&self) {
        loop {
            let pending: Vec<_> = {
                let mut tasks = self.shared.tasks.lock().unwrap_or_else(|e| e.into_inner());
                tasks.drain(..).collect()
            };
            if pending.is_empty() {
                break;
            }
            for result in join_all(pending).await {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "Fetch task did not complete");
                }
            }
            tokio::task::yield_now().await;
        }
    }

    /// Tear down the auth subscription. In-flight fetches are left to finish
    /// on their own and a scheduled home redirect still fires.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("Watch page unmounted");
        }
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.teardown();
    }
}
