//! Plain-text rendering of command results.

use outreach_core::{
    Company, CommunicationMethod, DashboardRow, HistoryChip, MethodIcon, RowHighlight,
};
use std::fmt::Write;

pub fn render_dashboard(rows: &[DashboardRow]) -> String {
    if rows.is_empty() {
        return "No companies yet.\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        let marker = match row.highlight {
            Some(RowHighlight::Overdue) => "[overdue]  ",
            Some(RowHighlight::DueToday) => "[due today]",
            None => "           ",
        };
        let _ = writeln!(out, "{marker} {} ({})", row.name, row.location);

        let history = if row.history.is_empty() {
            "-".to_string()
        } else {
            row.history
                .iter()
                .map(render_chip)
                .collect::<Vec<_>>()
                .join("  ")
        };
        let _ = writeln!(out, "            recent: {history}");

        let next = row
            .next_scheduled
            .as_ref()
            .map_or("-", |next| next.label.as_str());
        let _ = writeln!(out, "            next:   {next}");
    }
    out
}

fn render_chip(chip: &HistoryChip) -> String {
    match chip.icon {
        Some(MethodIcon::Email) => format!("[email {}]", chip.label),
        Some(MethodIcon::Phone) => format!("[phone {}]", chip.label),
        None => format!("[{}]", chip.label),
    }
}

pub fn render_companies(companies: &[Company]) -> String {
    if companies.is_empty() {
        return "No companies yet.\n".to_string();
    }

    let mut out = String::new();
    for company in companies {
        let _ = writeln!(
            out,
            "{}  {} ({})  every {} day(s)",
            company.id, company.name, company.location, company.communication_periodicity
        );
    }
    out
}

pub fn render_methods(methods: &[&CommunicationMethod]) -> String {
    let mut out = String::new();
    for method in methods {
        let mandatory = if method.is_mandatory { "mandatory" } else { "optional" };
        let _ = writeln!(
            out,
            "{}  {:>2}. {} ({mandatory})",
            method.id, method.sequence, method.name
        );
    }
    out
}
