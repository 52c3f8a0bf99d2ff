//! Command handlers.
//!
//! Every command loads the snapshot, runs against an explicit store and
//! writes the snapshot back only after a successful mutation.

use crate::cli::{Cli, Command, CompanyAction, CompanyAddArgs, CompanyUpdateArgs, MethodAction};
use crate::render::{render_companies, render_dashboard, render_methods};
use crate::snapshot_file::{load_store, save_store};
use anyhow::Context;
use chrono::Utc;
use log::info;
use outreach_core::{
    core_version, Company, CompanyDraft, DashboardConfig, DashboardService, InMemoryRecordStore,
    LogCommunicationRequest, MethodDraft, OutreachService,
};
use serde::Serialize;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Version = cli.command {
        println!("outreach_core version={}", core_version());
        return Ok(());
    }

    let store = load_store(&cli.data)?;
    let mut service = OutreachService::new(store);
    let output = Output { json: cli.json };

    let mutated = match cli.command {
        Command::Version => false,
        Command::Dashboard => {
            let config = DashboardConfig {
                zone: cli.utc_offset,
            };
            let now = cli.now.unwrap_or_else(Utc::now);
            let rows = DashboardService::new(service.store(), config).dashboard(now);
            output.print(&rows, || render_dashboard(&rows))?;
            false
        }
        Command::Company { action } => run_company(&mut service, action, output)?,
        Command::Log {
            companies,
            method,
            at,
            notes,
        } => {
            let logged = service.log_communication(LogCommunicationRequest {
                company_ids: companies,
                method_id: method,
                date: at.unwrap_or_else(Utc::now),
                notes,
            })?;
            output.print(&logged, || {
                format!("Logged {} communication(s).\n", logged.len())
            })?;
            !logged.is_empty()
        }
        Command::Method { action } => run_method(&mut service, action, output)?,
    };

    if mutated {
        save_store(&cli.data, service.store())?;
    }
    info!("event=command_done module=cli status=ok mutated={mutated}");
    Ok(())
}

fn run_company(
    service: &mut OutreachService<InMemoryRecordStore>,
    action: CompanyAction,
    output: Output,
) -> anyhow::Result<bool> {
    match action {
        CompanyAction::Add(args) => {
            let company = service.add_company(draft_from_args(args))?;
            output.print(&company, || format!("Added company {}\n", company.id))?;
            Ok(true)
        }
        CompanyAction::Update { id, fields } => {
            let current = service
                .get_company(id)
                .cloned()
                .with_context(|| format!("company not found: {id}"))?;
            let company = service.update_company(apply_update(current, fields))?;
            output.print(&company, || format!("Updated company {}\n", company.id))?;
            Ok(true)
        }
        CompanyAction::Delete { id } => {
            let removed = service.delete_company(id)?;
            output.print(&removed, || format!("Deleted company {}\n", removed.id))?;
            Ok(true)
        }
        CompanyAction::List => {
            let companies = service.list_companies();
            output.print(companies, || render_companies(companies))?;
            Ok(false)
        }
    }
}

fn run_method(
    service: &mut OutreachService<InMemoryRecordStore>,
    action: MethodAction,
    output: Output,
) -> anyhow::Result<bool> {
    match action {
        MethodAction::List => {
            let methods = service.list_communication_methods();
            output.print(&methods, || render_methods(&methods))?;
            Ok(false)
        }
        MethodAction::Add {
            name,
            description,
            sequence,
            mandatory,
        } => {
            let method = service.add_communication_method(MethodDraft {
                name,
                description,
                sequence,
                is_mandatory: mandatory,
            })?;
            output.print(&method, || format!("Added method {}\n", method.id))?;
            Ok(true)
        }
    }
}

fn draft_from_args(args: CompanyAddArgs) -> CompanyDraft {
    let mut draft = CompanyDraft::new(args.name, args.location);
    draft.linkedin_profile = args.linkedin;
    draft.emails = args.emails;
    draft.phone_numbers = args.phone_numbers;
    draft.comments = args.comments;
    draft.communication_periodicity = args.periodicity;
    draft
}

fn apply_update(mut company: Company, fields: CompanyUpdateArgs) -> Company {
    if let Some(name) = fields.name {
        company.name = name;
    }
    if let Some(location) = fields.location {
        company.location = location;
    }
    if let Some(linkedin) = fields.linkedin {
        company.linkedin_profile = Some(linkedin);
    }
    if let Some(emails) = fields.emails {
        company.emails = emails;
    }
    if let Some(phone_numbers) = fields.phone_numbers {
        company.phone_numbers = phone_numbers;
    }
    if let Some(comments) = fields.comments {
        company.comments = comments;
    }
    if let Some(periodicity) = fields.periodicity {
        company.communication_periodicity = periodicity;
    }
    company
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn print<T: Serialize + ?Sized>(
        self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> anyhow::Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(value).context("failed to serialize output")?
            );
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}
