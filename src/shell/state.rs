use crate::modules::shifts::core::break_policy::BreakPolicy;
use crate::modules::shifts::core::driver::Driver;
use crate::modules::shifts::core::shift::Shift;
use crate::modules::shifts::use_cases::delete_shift::handler::DeleteShiftHandler;
use crate::modules::shifts::use_cases::list_audit_logs::handler::ListAuditLogsHandler;
use crate::modules::shifts::use_cases::list_shifts::handler::ListShiftsHandler;
use crate::modules::shifts::use_cases::manage_drivers::handler::ManageDriversHandler;
use crate::modules::shifts::use_cases::record_shift::handler::RecordShiftHandler;
use crate::modules::shifts::use_cases::shift_report::handler::ShiftReportHandler;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::add_time_entry::handler::AddTimeEntryHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::driver_leaderboard::handler::DriverLeaderboardHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::monthly_report::handler::MonthlyReportHandler;
use crate::shared::infrastructure::audit_log::{AuditLogEntry, AuditTrail};
use crate::shared::infrastructure::identity::IdentityProvider;
use crate::shared::infrastructure::record_store::SharedStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

/// One store per table.
#[derive(Clone)]
pub struct Stores {
    pub time_entries: SharedStore<TimeEntry>,
    pub drivers: SharedStore<Driver>,
    pub shifts: SharedStore<Shift>,
    pub audit_logs: SharedStore<AuditLogEntry>,
}

impl Stores {
    pub fn in_memory() -> Self {
        let (drivers, shifts) =
            relate_drivers_and_shifts(InMemoryRecordStore::new(), InMemoryRecordStore::new());
        Self {
            time_entries: Arc::new(InMemoryRecordStore::<TimeEntry>::new()),
            drivers: Arc::new(drivers),
            shifts: Arc::new(shifts),
            audit_logs: Arc::new(InMemoryRecordStore::<AuditLogEntry>::new()),
        }
    }
}

/// `shifts.driver_id` references `drivers.id`, deleting a driver deletes their shifts.
pub fn relate_drivers_and_shifts(
    drivers: InMemoryRecordStore<Driver>,
    shifts: InMemoryRecordStore<Shift>,
) -> (InMemoryRecordStore<Driver>, InMemoryRecordStore<Shift>) {
    let shifts = shifts.references("driver_id", &drivers);
    let drivers = drivers.cascades_to("driver_id", &shifts);
    (drivers, shifts)
}

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub add_time_entry: Arc<AddTimeEntryHandler>,
    pub list_time_entries: Arc<ListTimeEntriesHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub driver_leaderboard: Arc<DriverLeaderboardHandler>,
    pub monthly_report: Arc<MonthlyReportHandler>,
    pub manage_drivers: Arc<ManageDriversHandler>,
    pub record_shift: Arc<RecordShiftHandler>,
    pub delete_shift: Arc<DeleteShiftHandler>,
    pub list_shifts: Arc<ListShiftsHandler>,
    pub shift_report: Arc<ShiftReportHandler>,
    pub list_audit_logs: Arc<ListAuditLogsHandler>,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        stores: Stores,
        break_policy: BreakPolicy,
        audit_required: bool,
    ) -> Self {
        let audit = Arc::new(AuditTrail::new(stores.audit_logs.clone(), audit_required));

        Self {
            identity,
            add_time_entry: Arc::new(AddTimeEntryHandler::new(stores.time_entries.clone())),
            list_time_entries: Arc::new(ListTimeEntriesHandler::new(stores.time_entries.clone())),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(stores.time_entries.clone())),
            driver_leaderboard: Arc::new(DriverLeaderboardHandler::new(stores.time_entries.clone())),
            monthly_report: Arc::new(MonthlyReportHandler::new(stores.time_entries)),
            manage_drivers: Arc::new(ManageDriversHandler::new(stores.drivers.clone(), audit.clone())),
            record_shift: Arc::new(RecordShiftHandler::new(
                stores.shifts.clone(),
                stores.drivers.clone(),
                audit.clone(),
                break_policy,
            )),
            delete_shift: Arc::new(DeleteShiftHandler::new(
                stores.shifts.clone(),
                stores.drivers.clone(),
                audit,
            )),
            list_shifts: Arc::new(ListShiftsHandler::new(stores.shifts.clone(), stores.drivers.clone())),
            shift_report: Arc::new(ShiftReportHandler::new(stores.shifts, stores.drivers)),
            list_audit_logs: Arc::new(ListAuditLogsHandler::new(stores.audit_logs)),
        }
    }
}
