//! Dashboard projection service.
//!
//! # Responsibility
//! - Turn each company's overview into a display-ready row: history chips,
//!   next scheduled label and row highlight.
//!
//! # Invariants
//! - Rows follow the store's company order.
//! - All labels are formatted in the configured calendar zone, the same zone
//!   used for the due-today check.

use crate::model::communication::CommunicationId;
use crate::model::company::{Company, CompanyId};
use crate::model::method::{MethodId, EMAIL_METHOD_NAME, PHONE_CALL_METHOD_NAME};
use crate::schedule::aggregator::company_overview;
use crate::schedule::urgency::Urgency;
use crate::store::record_store::RecordStore;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::debug;
use serde::Serialize;

/// Chip label format, e.g. `01/08`.
pub const HISTORY_CHIP_FORMAT: &str = "%m/%d";
/// Next scheduled label format, e.g. `Jan 08, 2025`.
pub const NEXT_SCHEDULED_FORMAT: &str = "%b %d, %Y";

/// Dashboard settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Zone in which calendar dates are read and formatted.
    ///
    /// A fixed offset does not follow daylight saving time; callers in a DST
    /// zone pass the offset that is currently in effect.
    pub zone: FixedOffset,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { zone: Utc.fix() }
    }
}

/// Icon shown next to a history chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodIcon {
    Email,
    Phone,
}

impl MethodIcon {
    /// Matches the exact method display name; other methods get no icon.
    pub fn for_method_name(name: &str) -> Option<Self> {
        match name {
            EMAIL_METHOD_NAME => Some(Self::Email),
            PHONE_CALL_METHOD_NAME => Some(Self::Phone),
            _ => None,
        }
    }
}

/// Row highlight; rows without one render plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHighlight {
    Overdue,
    DueToday,
}

impl RowHighlight {
    /// Only overdue and due-today rows are highlighted.
    pub fn for_urgency(urgency: Urgency) -> Option<Self> {
        match urgency {
            Urgency::Overdue => Some(Self::Overdue),
            Urgency::DueToday => Some(Self::DueToday),
            Urgency::Scheduled => None,
        }
    }
}

/// One past communication on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryChip {
    pub communication_id: CommunicationId,
    pub date: DateTime<FixedOffset>,
    /// `MM/dd`.
    pub label: String,
    /// `None` when the method no longer exists.
    pub method_name: Option<String>,
    pub icon: Option<MethodIcon>,
    /// Tooltip text.
    pub notes: String,
}

/// Next contact as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextScheduledCell {
    pub date: DateTime<FixedOffset>,
    /// `MMM dd, yyyy`.
    pub label: String,
    pub method_id: Option<MethodId>,
    pub urgency: Urgency,
}

/// One company row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRow {
    pub company_id: CompanyId,
    pub name: String,
    pub location: String,
    pub history: Vec<HistoryChip>,
    pub next_scheduled: Option<NextScheduledCell>,
    pub highlight: Option<RowHighlight>,
}

/// Read-only dashboard over a borrowed store.
pub struct DashboardService<'s, S: RecordStore + ?Sized> {
    store: &'s S,
    config: DashboardConfig,
}

impl<'s, S: RecordStore + ?Sized> DashboardService<'s, S> {
    /// Creates a read-only dashboard view over `store`.
    pub fn new(store: &'s S, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    /// Builds every company row evaluated at `now`.
    pub fn dashboard(&self, now: DateTime<Utc>) -> Vec<DashboardRow> {
        let rows: Vec<DashboardRow> = self
            .store
            .companies()
            .iter()
            .map(|company| self.build_row(company, now))
            .collect();

        debug!(
            "event=dashboard_build module=service status=ok rows={} overdue={} due_today={}",
            rows.len(),
            count_highlight(&rows, RowHighlight::Overdue),
            count_highlight(&rows, RowHighlight::DueToday)
        );
        rows
    }

    /// Builds one row; `None` when the company does not exist.
    pub fn row(&self, company_id: CompanyId, now: DateTime<Utc>) -> Option<DashboardRow> {
        self.store
            .company(company_id)
            .map(|company| self.build_row(company, now))
    }

    fn build_row(&self, company: &Company, now: DateTime<Utc>) -> DashboardRow {
        let zone = self.config.zone;
        let overview = company_overview(
            company,
            self.store.communications(),
            self.store.communication_methods(),
            now,
            zone,
        );

        let history = overview
            .recent
            .iter()
            .map(|communication| {
                let method_name = self
                    .store
                    .communication_method(communication.method_id)
                    .map(|method| method.name.clone());
                let date = communication.date.with_timezone(&zone);
                HistoryChip {
                    communication_id: communication.id,
                    date,
                    label: date.format(HISTORY_CHIP_FORMAT).to_string(),
                    icon: method_name.as_deref().and_then(MethodIcon::for_method_name),
                    method_name,
                    notes: communication.notes.clone(),
                }
            })
            .collect();

        let next_scheduled = overview
            .next
            .zip(overview.urgency)
            .map(|(next, urgency)| NextScheduledCell {
                date: next.date,
                label: next.date.format(NEXT_SCHEDULED_FORMAT).to_string(),
                method_id: next.method_id,
                urgency,
            });

        DashboardRow {
            company_id: company.id,
            name: company.name.clone(),
            location: company.location.clone(),
            history,
            highlight: overview.urgency.and_then(RowHighlight::for_urgency),
            next_scheduled,
        }
    }
}

fn count_highlight(rows: &[DashboardRow], highlight: RowHighlight) -> usize {
    rows.iter()
        .filter(|row| row.highlight == Some(highlight))
        .count()
}
