use std::sync::{Arc, Mutex};
use std::time::Duration;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::errors::DashboardError;
use crate::models::{FilterCriteria, PayloadRange, SiteSelection};
use crate::store::RecordStore;
use super::view::{render, DashboardView};

#[derive(Debug, Clone)]
struct SessionState {
    criteria: FilterCriteria,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

impl SessionState {
    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        (now - self.last_seen).to_std().is_ok_and(|elapsed| elapsed > ttl)
    }
}

/// Bounds on how many sessions a registry holds and how long they live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    /// Sessions not read or changed for longer than this are dropped.
    pub idle_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_ttl: Duration::from_secs(30 * 60),
        }
    }
}

/// A session's current selection together with the freshly rendered charts.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub criteria: FilterCriteria,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view: DashboardView,
}

/// Per-session selection state over a shared, read-only record store.
///
/// Each selection change is validated and rendered before it is stored, so a
/// rejected change leaves the session's previous criteria in place. Idle
/// sessions are pruned whenever a new one is opened, and opening fails once
/// `max_sessions` live sessions remain.
#[derive(Clone)]
pub struct SessionRegistry {
    store: Arc<RecordStore>,
    sessions: Arc<DashMap<String, SessionState>>,
    limits: SessionLimits,
    // serializes prune + capacity check + insert
    create_lock: Arc<Mutex<()>>,
}

impl SessionRegistry {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_limits(store, SessionLimits::default())
    }

    pub fn with_limits(store: Arc<RecordStore>, limits: SessionLimits) -> Self {
        Self {
            store,
            sessions: Arc::new(DashMap::new()),
            limits,
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open a session with the default selection: all sites, full payload bounds.
    pub fn create(&self) -> Result<SessionSnapshot, DashboardError> {
        let now = Utc::now();
        let state = SessionState {
            criteria: FilterCriteria::all_sites(self.store.payload_bounds()),
            created_at: now,
            updated_at: now,
            last_seen: now,
        };
        let view = render(&self.store, &state.criteria)?;

        let _guard = self
            .create_lock
            .lock()
            .map_err(|_| DashboardError::Internal("Session registry lock poisoned".into()))?;
        self.prune_idle_at(now);
        if self.sessions.len() >= self.limits.max_sessions {
            warn!(max_sessions = self.limits.max_sessions, "Session limit reached");
            return Err(DashboardError::SessionLimit(self.limits.max_sessions));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let snapshot = snapshot(&id, &state, view);
        self.sessions.insert(id.clone(), state);
        info!(session_id = %id, open = self.sessions.len(), "Opened dashboard session");
        Ok(snapshot)
    }

    pub fn get(&self, id: &str) -> Result<SessionSnapshot, DashboardError> {
        let state = {
            let mut entry = self.live_entry(id, Utc::now())?;
            entry.last_seen = Utc::now();
            entry.value().clone()
        };
        let view = render(&self.store, &state.criteria)?;
        Ok(snapshot(id, &state, view))
    }

    /// Drop sessions idle for longer than the configured TTL.
    /// Returns how many were removed.
    pub fn prune_idle(&self) -> usize {
        self.prune_idle_at(Utc::now())
    }

    fn prune_idle_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let ttl = self.limits.idle_ttl;
        self.sessions.retain(|_, state| !state.is_idle(now, ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            debug!(removed, "Pruned idle dashboard sessions");
        }
        removed
    }

    /// Entry for a session that exists and has not gone idle. An idle
    /// session found here is removed and reported as missing.
    fn live_entry(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<dashmap::mapref::one::RefMut<'_, String, SessionState>, DashboardError> {
        let entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| DashboardError::SessionNotFound(id.to_string()))?;
        if entry.is_idle(now, self.limits.idle_ttl) {
            drop(entry);
            self.sessions.remove(id);
            debug!(session_id = %id, "Dropped idle dashboard session");
            return Err(DashboardError::SessionNotFound(id.to_string()));
        }
        Ok(entry)
    }

    pub fn select_site(&self, id: &str, site: SiteSelection) -> Result<SessionSnapshot, DashboardError> {
        self.update(id, |criteria| criteria.site = site)
    }

    pub fn select_payload(&self, id: &str, range: PayloadRange) -> Result<SessionSnapshot, DashboardError> {
        self.update(id, |criteria| criteria.payload_range = range)
    }

    pub fn remove(&self, id: &str) -> Result<(), DashboardError> {
        match self.sessions.remove(id) {
            Some(_) => {
                info!(session_id = %id, "Closed dashboard session");
                Ok(())
            }
            None => Err(DashboardError::SessionNotFound(id.to_string())),
        }
    }

    fn update(
        &self,
        id: &str,
        change: impl FnOnce(&mut FilterCriteria),
    ) -> Result<SessionSnapshot, DashboardError> {
        let now = Utc::now();
        let mut entry = self.live_entry(id, now)?;
        entry.last_seen = now;

        let mut criteria = entry.criteria.clone();
        change(&mut criteria);

        let view = render(&self.store, &criteria).inspect_err(|e| {
            warn!(session_id = %id, error = %e, "Rejected selection change");
        })?;

        entry.criteria = criteria;
        entry.updated_at = now;
        debug!(
            session_id = %id,
            site = %entry.criteria.site,
            min = entry.criteria.payload_range.min,
            max = entry.criteria.payload_range.max,
            "Updated session selection"
        );
        Ok(snapshot(id, &entry, view))
    }
}

fn snapshot(id: &str, state: &SessionState, view: DashboardView) -> SessionSnapshot {
    SessionSnapshot {
        id: id.to_string(),
        criteria: state.criteria.clone(),
        created_at: state.created_at,
        updated_at: state.updated_at,
        view,
    }
}
