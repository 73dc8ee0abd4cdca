//! In-memory state store using DashMap.
//!
//! Sessions live only in this process; there is no persistence. The crowd
//! simulation is owned here and driven by a loop task that exists only
//! while at least one navigation view is open.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pilgrim_assist::AssistClient;
use pilgrim_core::models::CrowdZone;
use pilgrim_core::{CrowdField, NavigationSession};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::loops::crowd_loop;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Pilgrim,
    Admin,
}

/// A logged-in visitor and their navigation view state.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub token: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub nav: NavigationSession,
}

/// Application state - thread-safe store for sessions and the crowd field.
pub struct AppState {
    config: Config,
    assist: AssistClient,
    sessions: DashMap<String, UserSession>,
    crowd: Mutex<CrowdField>,
    active_views: AtomicUsize,
    crowd_task: Mutex<Option<JoinHandle<()>>>,
    /// Zone snapshot fan-out for WebSocket subscribers.
    pub tx: broadcast::Sender<Arc<String>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assist = AssistClient::new(
            config.assist_base_url.clone(),
            config.assist_model.clone(),
            config.assist_api_key.clone(),
        );
        let (tx, _) = broadcast::channel(16);
        Self {
            config,
            assist,
            sessions: DashMap::new(),
            crowd: Mutex::new(CrowdField::new()),
            active_views: AtomicUsize::new(0),
            crowd_task: Mutex::new(None),
            tx,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assist(&self) -> &AssistClient {
        &self.assist
    }

    // ========== SESSIONS ==========

    /// Create a session and return it. The token is an opaque UUID.
    pub fn login(&self, email: &str, role: Role) -> UserSession {
        let session = UserSession {
            token: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            role,
            created_at: Utc::now(),
            nav: NavigationSession::default(),
        };
        self.sessions
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Discard a session. Returns false when the token was unknown.
    pub fn logout(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn session_role(&self, token: &str) -> Option<Role> {
        self.sessions.get(token).map(|s| s.role)
    }

    /// Run a closure against the session's navigation state.
    pub fn with_nav<T>(
        &self,
        token: &str,
        f: impl FnOnce(&mut NavigationSession) -> T,
    ) -> Option<T> {
        self.sessions.get_mut(token).map(|mut s| f(&mut s.nav))
    }

    /// Snapshot of the session's navigation state.
    pub fn nav(&self, token: &str) -> Option<NavigationSession> {
        self.sessions.get(token).map(|s| s.nav.clone())
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    // ========== CROWD SIMULATION ==========

    /// Snapshot of the current crowd zones.
    pub fn crowd_zones(&self) -> Vec<CrowdZone> {
        match self.crowd.lock() {
            Ok(field) => field.snapshot(),
            Err(_) => Vec::new(),
        }
    }

    /// Advance the simulation one step and return the new snapshot.
    pub fn tick_crowd(&self) -> Vec<CrowdZone> {
        match self.crowd.lock() {
            Ok(mut field) => {
                field.tick(&mut rand::rng());
                field.snapshot()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn view_is_active(&self) -> bool {
        self.active_views.load(Ordering::SeqCst) > 0
    }

    /// A navigation view opened. The first viewer starts the simulation
    /// loop; its task handle is kept so the last viewer can stop it.
    pub fn enter_view(self: &Arc<Self>) -> usize {
        let previous = self.active_views.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            let handle = tokio::spawn(crowd_loop::run_crowd_loop(self.clone()));
            if let Ok(mut task) = self.crowd_task.lock() {
                *task = Some(handle);
            }
            tracing::info!("Crowd simulation started");
        }
        previous + 1
    }

    /// A navigation view closed. Stopping the loop with the last viewer
    /// guarantees no timer outlives the views it serves.
    pub fn exit_view(&self) -> usize {
        let previous = self
            .active_views
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                Some(count.saturating_sub(1))
            })
            .unwrap_or(0);
        if previous == 1 {
            if let Ok(mut task) = self.crowd_task.lock() {
                if let Some(handle) = task.take() {
                    handle.abort();
                }
            }
            tracing::info!("Crowd simulation stopped");
        }
        previous.saturating_sub(1)
    }

    /// Fan a zone snapshot out to WebSocket subscribers.
    pub fn broadcast_zones(&self, zones: &[CrowdZone]) {
        let payload = serde_json::json!({
            "type": "zones",
            "zones": zones,
        });
        // Send errors only mean nobody is listening right now.
        let _ = self.tx.send(Arc::new(payload.to_string()));
    }
}
