// Dashboard view state for the shift client.
//
// Purpose
// - One immutable value per screen state, advanced by a pure reducer.
// - Tell the client which fetch a state needs instead of keeping ad hoc flags.

use crate::shared::core::month::Month;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Audit,
    Reports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: View,
    pub report_driver: Option<String>,
    pub report_month: Month,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewAction {
    ShowView { view: View },
    SelectReportDriver { driver_id: Option<String> },
    SelectReportMonth { month: Month },
    FetchStarted,
    FetchFinished,
}

impl ViewState {
    pub fn new(report_month: Month) -> Self {
        Self {
            view: View::Dashboard,
            report_driver: None,
            report_month,
            loading: false,
        }
    }

    pub fn reduce(self, action: ViewAction) -> Self {
        match action {
            ViewAction::ShowView { view } => Self { view, ..self },
            ViewAction::SelectReportDriver { driver_id } => Self {
                report_driver: driver_id,
                ..self
            },
            ViewAction::SelectReportMonth { month } => Self {
                report_month: month,
                ..self
            },
            ViewAction::FetchStarted => Self {
                loading: true,
                ..self
            },
            ViewAction::FetchFinished => Self {
                loading: false,
                ..self
            },
        }
    }

    pub fn needs_report_fetch(&self) -> bool {
        self.view == View::Reports && !self.loading
    }

    pub fn needs_audit_fetch(&self) -> bool {
        self.view == View::Audit && !self.loading
    }
}
