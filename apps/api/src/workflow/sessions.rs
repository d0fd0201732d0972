//! In-memory session store. One workflow per browser session; nothing is
//! persisted and nothing is shared between sessions.
//!
//! Sessions idle for longer than the store's TTL are purged, either on the
//! next `create` or by the background sweeper. A session whose model call is
//! still in flight is never purged.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::workflow::machine::{Phase, Workflow};

/// Handle to one session. Cloning shares the same workflow.
#[derive(Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub workflow: Arc<Mutex<Workflow>>,
}

struct Entry {
    session: Session,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn create(&self) -> Session {
        self.purge_expired().await;

        let session = Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            workflow: Arc::new(Mutex::new(Workflow::new())),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );
        info!("Session {} created ({} active)", session.id, sessions.len());
        session
    }

    /// Looks a session up and marks it as seen.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    /// Drops the session. A call still in flight for it completes into a
    /// workflow nobody can reach any more.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} discarded");
        }
        removed
    }

    /// Removes every session idle for at least the TTL. Sessions in
    /// `Optimizing`, or whose workflow is locked right now, are kept.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let idle_ttl = self.idle_ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|id, entry| {
            if now.duration_since(entry.last_seen) < idle_ttl {
                return true;
            }
            match entry.session.workflow.try_lock() {
                Ok(workflow) if workflow.phase() != Phase::Optimizing => {
                    info!("Session {id} expired after {}s idle", idle_ttl.as_secs());
                    false
                }
                _ => true,
            }
        });

        before - sessions.len()
    }

    /// Runs `purge_expired` every `period` until the runtime shuts down.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let purged = store.purge_expired().await;
                if purged > 0 {
                    info!("Session sweep removed {purged} idle sessions");
                }
            }
        })
    }
}
