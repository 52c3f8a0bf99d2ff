//! Per-company history and next-contact computation.
//!
//! # Invariants
//! - Inputs are only read; the same inputs always give the same output.
//! - History is newest first; equal timestamps keep insertion order.
//! - A company with no communications has no next scheduled date.

use crate::model::communication::Communication;
use crate::model::company::{Company, CompanyId};
use crate::model::method::{CommunicationMethod, MethodId};
use crate::schedule::urgency::{classify_urgency, Urgency};
use chrono::{DateTime, Days, FixedOffset, Utc};
use std::iter::Copied;
use std::slice::Iter;

/// Maximum number of communications in a company's recent history.
pub const RECENT_HISTORY_LIMIT: usize = 5;

/// At most [`RECENT_HISTORY_LIMIT`] communications of one company, newest
/// first. Iterating does not consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHistory<'a> {
    items: Vec<&'a Communication>,
}

impl<'a> RecentHistory<'a> {
    /// Iterates newest first.
    pub fn iter(&self) -> Copied<Iter<'_, &'a Communication>> {
        self.items.iter().copied()
    }

    /// Number of communications kept, at most [`RECENT_HISTORY_LIMIT`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the company has no communications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent communication, if any.
    pub fn newest(&self) -> Option<&'a Communication> {
        self.items.first().copied()
    }
}

impl<'r, 'a> IntoIterator for &'r RecentHistory<'a> {
    type Item = &'a Communication;
    type IntoIter = Copied<Iter<'r, &'a Communication>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Suggested next contact for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextScheduled {
    /// Last contact plus the company periodicity, in the calendar zone.
    pub date: DateTime<FixedOffset>,
    /// Always the first method of the method list; `None` when the list is
    /// empty.
    pub method_id: Option<MethodId>,
}

/// History, next date and urgency of one company at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyOverview<'a> {
    pub company: &'a Company,
    pub recent: RecentHistory<'a>,
    pub next: Option<NextScheduled>,
    /// `None` exactly when `next` is `None`.
    pub urgency: Option<Urgency>,
}

/// Returns the company's most recent communications, newest first.
pub fn recent_history(communications: &[Communication], company_id: CompanyId) -> RecentHistory<'_> {
    let mut items: Vec<&Communication> = communications
        .iter()
        .filter(|communication| communication.company_id == company_id)
        .collect();
    // Stable sort: ties stay in insertion order.
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(RECENT_HISTORY_LIMIT);
    RecentHistory { items }
}

/// Returns the company's latest communication; the earliest inserted one
/// wins a timestamp tie.
pub fn last_communication(
    communications: &[Communication],
    company_id: CompanyId,
) -> Option<&Communication> {
    communications
        .iter()
        .filter(|communication| communication.company_id == company_id)
        .reduce(|latest, candidate| {
            if candidate.date > latest.date {
                candidate
            } else {
                latest
            }
        })
}

/// Computes the next contact date for `company`.
///
/// The date is the last communication moved forward by
/// `communication_periodicity` calendar days in `zone`, keeping the time of
/// day. Returns `None` when the company has no communications.
pub fn next_scheduled(
    communications: &[Communication],
    methods: &[CommunicationMethod],
    company: &Company,
    zone: FixedOffset,
) -> Option<NextScheduled> {
    let last = last_communication(communications, company.id)?;
    let date = last
        .date
        .with_timezone(&zone)
        .checked_add_days(Days::new(u64::from(company.communication_periodicity)))?;

    Some(NextScheduled {
        date,
        method_id: methods.first().map(|method| method.id),
    })
}

/// Builds the full overview of `company` evaluated at `now`.
pub fn company_overview<'a>(
    company: &'a Company,
    communications: &'a [Communication],
    methods: &[CommunicationMethod],
    now: DateTime<Utc>,
    zone: FixedOffset,
) -> CompanyOverview<'a> {
    let next = next_scheduled(communications, methods, company, zone);
    CompanyOverview {
        company,
        recent: recent_history(communications, company.id),
        next,
        urgency: next.map(|next| classify_urgency(next.date, now)),
    }
}
