//! In-memory profile dialog sessions with idle expiry
//!
//! A session lives from the `/profile` command until the nickname is
//! submitted or it sits idle longer than the timeout. Expired sessions are
//! dropped without saving anything.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::ProfileError;
use crate::metrics::Metrics;
use crate::models::{ProfileFlow, ProfileInput, ProfileStage};

#[derive(Debug, Clone)]
struct ProfileSession {
    owner: String,
    flow: ProfileFlow,
    touched: Instant,
}

pub struct ProfileSessions {
    ttl: Duration,
    sessions: RwLock<HashMap<String, ProfileSession>>,
}

impl ProfileSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Open a dialog for `owner`, replacing any session with the same id
    pub async fn start(&self, session_id: &str, owner: &str) -> ProfileFlow {
        self.start_at(session_id, owner, Instant::now()).await
    }

    pub async fn start_at(&self, session_id: &str, owner: &str, now: Instant) -> ProfileFlow {
        let flow = ProfileFlow::new();
        self.sessions.write().await.insert(
            session_id.to_string(),
            ProfileSession {
                owner: owner.to_string(),
                flow: flow.clone(),
                touched: now,
            },
        );
        debug!(session_id = %session_id, user_id = %owner, "Profile dialog started");
        flow
    }

    pub async fn advance<F>(
        &self,
        session_id: &str,
        user_id: &str,
        read_input: F,
    ) -> Result<ProfileFlow, ProfileError>
    where
        F: FnOnce(ProfileStage) -> Result<ProfileInput, ProfileError>,
    {
        self.advance_at(session_id, user_id, read_input, Instant::now())
            .await
    }

    /// Apply the next input. A rejected input leaves the session and its idle
    /// clock untouched; a completed flow is removed.
    pub async fn advance_at<F>(
        &self,
        session_id: &str,
        user_id: &str,
        read_input: F,
        now: Instant,
    ) -> Result<ProfileFlow, ProfileError>
    where
        F: FnOnce(ProfileStage) -> Result<ProfileInput, ProfileError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(session_id).ok_or(ProfileError::Expired)?;

        if now.saturating_duration_since(session.touched) > self.ttl {
            sessions.remove(session_id);
            debug!(session_id = %session_id, "Profile dialog expired");
            return Err(ProfileError::Expired);
        }
        if session.owner != user_id {
            return Err(ProfileError::NotOwner);
        }

        let input = read_input(session.flow.stage())?;
        let next = session.flow.advance(input)?;

        if next.stage() == ProfileStage::Complete {
            sessions.remove(session_id);
        } else if let Some(session) = sessions.get_mut(session_id) {
            session.flow = next.clone();
            session.touched = now;
        }
        Ok(next)
    }

    /// Drop every session idle for longer than the timeout
    pub async fn sweep_at(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.touched) <= self.ttl);
        before - sessions.len()
    }
}

/// Background task that periodically purges expired sessions
pub struct SessionSweeper {
    sessions: Arc<ProfileSessions>,
    metrics: Option<Arc<Metrics>>,
    interval: Duration,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl SessionSweeper {
    pub fn new(sessions: Arc<ProfileSessions>, interval: Duration) -> Self {
        Self {
            sessions,
            metrics: None,
            interval,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn start(&self) {
        let sessions = self.sessions.clone();
        let metrics = self.metrics.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let removed = sessions.sweep_at(Instant::now()).await;
                if removed > 0 {
                    debug!(removed = removed, "SessionSweeper: dropped expired profile dialogs");
                }
                if let Some(metrics) = &metrics {
                    metrics.profile_sessions_active.set(sessions.len().await as i64);
                }
            }
        });

        *self.handle.write().await = Some(handle);
        info!(interval_secs = interval.as_secs(), "SessionSweeper: started");
    }

    pub async fn stop(&self) {
        if let Some(h) = self.handle.write().await.take() {
            h.abort();
            info!("SessionSweeper: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
