// A fully wired application over in-memory adapters, for HTTP and GraphQL tests.

use crate::modules::shifts::core::break_policy::BreakPolicy;
use crate::modules::shifts::core::driver::Driver;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::audit_log::AuditLogEntry;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use crate::shared::infrastructure::identity::{IdentityError, IdentityProvider, Session};
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::router;
use crate::shell::state::{AppState, Stores, relate_drivers_and_shifts};
use axum::Router;
use std::sync::Arc;

pub const BOSS_EMAIL: &str = "boss@example.com";
pub const BOSS_PASSWORD: &str = "secret-password";

pub struct TestApp {
    pub state: AppState,
    pub identity: Arc<InMemoryIdentityProvider>,
    pub time_entries: Arc<InMemoryRecordStore<TimeEntry>>,
    pub drivers: Arc<InMemoryRecordStore<Driver>>,
    pub shifts: Arc<InMemoryRecordStore<Shift>>,
    pub audit_logs: Arc<InMemoryRecordStore<AuditLogEntry>>,
}

impl TestApp {
    /// Signs the boss up on first use and in again afterwards.
    pub async fn session(&self) -> Session {
        match self.identity.sign_up(BOSS_EMAIL, BOSS_PASSWORD).await {
            Ok(session) => session,
            Err(IdentityError::EmailTaken(_)) => self
                .identity
                .sign_in(BOSS_EMAIL, BOSS_PASSWORD)
                .await
                .unwrap(),
            Err(err) => panic!("test sign up failed: {err}"),
        }
    }

    pub async fn sign_in(&self) -> String {
        self.session().await.access_token
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }
}

#[derive(Default)]
pub struct TestAppBuilder {
    time_entries: Vec<TimeEntry>,
    drivers: Vec<Driver>,
    shifts: Vec<Shift>,
    offline_time_entries: bool,
    offline_shifts: bool,
    offline_audit_logs: bool,
    audit_required: bool,
    break_policy: BreakPolicy,
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_entries(mut self, rows: Vec<TimeEntry>) -> Self {
        self.time_entries = rows;
        self
    }

    pub fn drivers(mut self, rows: Vec<Driver>) -> Self {
        self.drivers = rows;
        self
    }

    pub fn shifts(mut self, rows: Vec<Shift>) -> Self {
        self.shifts = rows;
        self
    }

    pub fn offline_time_entries(mut self) -> Self {
        self.offline_time_entries = true;
        self
    }

    pub fn offline_shifts(mut self) -> Self {
        self.offline_shifts = true;
        self
    }

    pub fn offline_audit_logs(mut self) -> Self {
        self.offline_audit_logs = true;
        self
    }

    pub fn audit_required(mut self) -> Self {
        self.audit_required = true;
        self
    }

    pub fn break_policy(mut self, policy: BreakPolicy) -> Self {
        self.break_policy = policy;
        self
    }

    pub fn build(self) -> TestApp {
        let mut time_entries = InMemoryRecordStore::with_rows(self.time_entries);
        if self.offline_time_entries {
            time_entries.toggle_offline();
        }
        let (drivers, mut shifts) = relate_drivers_and_shifts(
            InMemoryRecordStore::with_rows(self.drivers),
            InMemoryRecordStore::with_rows(self.shifts),
        );
        if self.offline_shifts {
            shifts.toggle_offline();
        }
        let mut audit_logs = InMemoryRecordStore::<AuditLogEntry>::new();
        if self.offline_audit_logs {
            audit_logs.toggle_offline();
        }

        let identity = Arc::new(InMemoryIdentityProvider::new());
        let time_entries = Arc::new(time_entries);
        let drivers = Arc::new(drivers);
        let shifts = Arc::new(shifts);
        let audit_logs = Arc::new(audit_logs);

        let state = AppState::new(
            identity.clone(),
            Stores {
                time_entries: time_entries.clone(),
                drivers: drivers.clone(),
                shifts: shifts.clone(),
                audit_logs: audit_logs.clone(),
            },
            self.break_policy,
            self.audit_required,
        );

        TestApp {
            state,
            identity,
            time_entries,
            drivers,
            shifts,
            audit_logs,
        }
    }
}
