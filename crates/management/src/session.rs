//! Session context over an injected auth provider.
//!
//! A [`SessionContext`] subscribes to its provider when mounted, mirrors the
//! latest [`AuthState`], and unsubscribes when dropped.

use async_trait::async_trait;
use chrono::Utc;
use creator_core::types::User;
use creator_core::CreatorResult;
use dashmap::DashMap;
use parking_lot::{ReentrantMutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use tracing::{debug, info};
use uuid::Uuid;

/// Who is signed in, and whether the provider is still resolving that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub type AuthCallback = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Handle returned by [`AuthProvider::subscribe`]. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register `callback`. It is invoked once immediately with the current
    /// state, then on every change until the subscription is dropped.
    fn subscribe(&self, callback: AuthCallback) -> Subscription;

    async fn login(&self) -> CreatorResult<()>;

    async fn logout(&self) -> CreatorResult<()>;
}

// ─── Local provider ────────────────────────────────────────────────────────

struct LocalAuthInner {
    state: RwLock<AuthState>,
    /// Held across a state change and its delivery, and across a new
    /// subscriber's first callback and registration. Reentrant so callbacks
    /// may subscribe.
    dispatch: ReentrantMutex<()>,
    subscribers: DashMap<Uuid, AuthCallback>,
    demo_user: User,
}

impl LocalAuthInner {
    fn publish(&self, state: AuthState) {
        let _dispatch = self.dispatch.lock();
        *self.state.write() = state.clone();
        // Snapshot first so callbacks may subscribe or unsubscribe.
        let callbacks: Vec<AuthCallback> = self
            .subscribers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        for callback in callbacks {
            callback(&state);
        }
    }
}

/// In-process provider that signs in a single configured demo user.
#[derive(Clone)]
pub struct LocalAuthProvider {
    inner: Arc<LocalAuthInner>,
}

impl LocalAuthProvider {
    pub fn new(demo_user: User) -> Self {
        Self {
            inner: Arc::new(LocalAuthInner {
                state: RwLock::new(AuthState::default()),
                dispatch: ReentrantMutex::new(()),
                subscribers: DashMap::new(),
                demo_user,
            }),
        }
    }

    pub fn demo_user(email: &str, display_name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            display_name: Some(display_name.to_string()),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let id = Uuid::new_v4();
        {
            let _dispatch = self.inner.dispatch.lock();
            let current = self.inner.state.read().clone();
            callback(&current);
            self.inner.subscribers.insert(id, callback);
        }
        debug!(subscriber = %id, "Auth subscriber registered");

        let inner: Weak<LocalAuthInner> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.subscribers.remove(&id);
                debug!(subscriber = %id, "Auth subscriber removed");
            }
        })
    }

    async fn login(&self) -> CreatorResult<()> {
        self.inner.publish(AuthState::loading());
        let user = self.inner.demo_user.clone();
        info!(email = %user.email, "User signed in");
        self.inner.publish(AuthState {
            user: Some(user),
            is_loading: false,
        });
        Ok(())
    }

    async fn logout(&self) -> CreatorResult<()> {
        info!("User signed out");
        self.inner.publish(AuthState::default());
        Ok(())
    }
}

// ─── Session context ───────────────────────────────────────────────────────

pub struct SessionContext {
    state: Arc<RwLock<AuthState>>,
    provider: Arc<dyn AuthProvider>,
    _subscription: Subscription,
}

impl SessionContext {
    /// Subscribe to `provider`. The context starts loading until the
    /// provider's first callback lands.
    pub fn mount(provider: Arc<dyn AuthProvider>) -> Self {
        let state = Arc::new(RwLock::new(AuthState::loading()));
        let sink = Arc::clone(&state);
        let subscription = provider.subscribe(Arc::new(move |next: &AuthState| {
            *sink.write() = next.clone();
        }));
        Self {
            state,
            provider,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub async fn login(&self) -> CreatorResult<()> {
        self.provider.login().await
    }

    pub async fn logout(&self) -> CreatorResult<()> {
        self.provider.logout().await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn provider() -> LocalAuthProvider {
        LocalAuthProvider::new(LocalAuthProvider::demo_user(
            "creator@omnicreator.local",
            "Demo Creator",
        ))
    }

    #[test]
    fn test_subscribe_fires_immediately() {
        let provider = provider();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let _sub = provider.subscribe(Arc::new(move |state: &AuthState| {
            assert!(state.user.is_none());
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn test_context_tracks_login_and_logout() {
        let provider = Arc::new(provider());
        let session = SessionContext::mount(provider.clone());
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());

        session.login().await.unwrap();
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(
            session.user().map(|u| u.email),
            Some("creator@omnicreator.local".to_string())
        );

        provider.logout().await.unwrap();
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_dropping_subscription_stops_updates() {
        let provider = provider();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let sub = provider.subscribe(Arc::new(move |_: &AuthState| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        provider.login().await.unwrap();
        // immediate + loading + signed in
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        sub.unsubscribe();
        assert_eq!(provider.subscriber_count(), 0);
        provider.logout().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mount_racing_login_sees_final_state() {
        for _ in 0..50 {
            let provider = Arc::new(provider());
            let signer = Arc::clone(&provider);
            let login = tokio::spawn(async move { signer.login().await });
            let mounter = Arc::clone(&provider);
            let mounts = tokio::task::spawn_blocking(move || {
                (0..8)
                    .map(|_| SessionContext::mount(mounter.clone()))
                    .collect::<Vec<_>>()
            });

            login.await.unwrap().unwrap();
            let sessions = mounts.await.unwrap();
            for session in &sessions {
                assert!(session.is_authenticated());
                assert!(!session.is_loading());
            }
        }
    }

    #[test]
    fn test_callback_may_subscribe_during_delivery() {
        let provider = Arc::new(provider());
        let nested = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let inner_provider = Arc::clone(&provider);
        let sink = Arc::clone(&nested);
        let _outer = provider.subscribe(Arc::new(move |_: &AuthState| {
            let sub = inner_provider.subscribe(Arc::new(|_: &AuthState| {}));
            sink.lock().push(sub);
        }));
        assert_eq!(nested.lock().len(), 1);
        assert_eq!(provider.subscriber_count(), 2);
    }

    #[test]
    fn test_dropping_context_unsubscribes() {
        let provider = Arc::new(provider());
        let session = SessionContext::mount(provider.clone());
        assert_eq!(provider.subscriber_count(), 1);
        drop(session);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[test]
    fn test_context_is_loading_before_first_callback() {
        struct SilentProvider;

        #[async_trait]
        impl AuthProvider for SilentProvider {
            fn subscribe(&self, _callback: AuthCallback) -> Subscription {
                Subscription::new(|| {})
            }
            async fn login(&self) -> CreatorResult<()> {
                Ok(())
            }
            async fn logout(&self) -> CreatorResult<()> {
                Ok(())
            }
        }

        let session = SessionContext::mount(Arc::new(SilentProvider));
        assert!(session.is_loading());
        assert!(session.user().is_none());
    }
}
