//! Command-line interface definition.
//!
//! Global flags fall back to `OUTREACH_*` environment variables, then to
//! built-in defaults.

use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use outreach_core::LogLevel;
use std::path::PathBuf;
use uuid::Uuid;

/// Track outreach to companies and see who is due for contact.
#[derive(Parser, Debug)]
#[command(name = "outreach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON snapshot holding companies, communications and methods
    #[arg(
        long,
        global = true,
        env = "OUTREACH_DATA",
        default_value = "outreach.json",
        value_name = "PATH"
    )]
    pub data: PathBuf,

    /// UTC offset used for calendar dates, e.g. +02:00. The offset is fixed
    /// and does not follow daylight saving time; pass the offset currently in
    /// effect
    #[arg(
        long,
        global = true,
        env = "OUTREACH_UTC_OFFSET",
        default_value = "+00:00",
        value_parser = parse_utc_offset,
        allow_hyphen_values = true,
        value_name = "OFFSET"
    )]
    pub utc_offset: FixedOffset,

    /// Evaluate the dashboard at this RFC 3339 instant instead of now
    #[arg(long, global = true, value_parser = parse_instant, value_name = "RFC3339")]
    pub now: Option<DateTime<Utc>>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "OUTREACH_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "OUTREACH_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every company with recent history and next contact date
    Dashboard,

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Log a communication with one or more companies
    Log {
        /// Target company id (repeatable)
        #[arg(long = "company", required = true, value_name = "ID")]
        companies: Vec<Uuid>,

        /// Communication method id
        #[arg(long, value_name = "ID")]
        method: Uuid,

        /// When the contact happened (default: now)
        #[arg(long, value_parser = parse_instant, value_name = "RFC3339")]
        at: Option<DateTime<Utc>>,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Manage communication methods
    Method {
        #[command(subcommand)]
        action: MethodAction,
    },

    /// Print the core library version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum CompanyAction {
    /// Add a company
    Add(CompanyAddArgs),

    /// Replace fields of an existing company
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: CompanyUpdateArgs,
    },

    /// Delete a company and its communication history
    Delete { id: Uuid },

    /// List companies
    List,
}

#[derive(Args, Debug)]
pub struct CompanyAddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    /// LinkedIn profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Email address (repeatable)
    #[arg(long = "email")]
    pub emails: Vec<String>,

    /// Phone number (repeatable)
    #[arg(long = "phone")]
    pub phone_numbers: Vec<String>,

    #[arg(long, default_value = "")]
    pub comments: String,

    /// Days between expected contacts
    #[arg(long, default_value_t = outreach_core::DEFAULT_COMMUNICATION_PERIODICITY)]
    pub periodicity: u32,
}

/// Fields left out keep their current value; list flags replace the list.
#[derive(Args, Debug, Default)]
pub struct CompanyUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// LinkedIn profile URL; pass an empty string to clear it
    #[arg(long)]
    pub linkedin: Option<String>,

    #[arg(long = "email")]
    pub emails: Option<Vec<String>>,

    #[arg(long = "phone")]
    pub phone_numbers: Option<Vec<String>>,

    #[arg(long)]
    pub comments: Option<String>,

    #[arg(long)]
    pub periodicity: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum MethodAction {
    /// List methods in sequence order
    List,

    /// Add a custom method
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Display order (default: after the last method)
        #[arg(long)]
        sequence: Option<u32>,

        #[arg(long)]
        mandatory: bool,
    },
}

/// Parses `Z`, `+HH:MM` or `-HH:MM`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(|| "invalid zero offset".to_string());
    }

    let invalid = || format!("invalid UTC offset `{value}`; expected +HH:MM or -HH:MM");
    let (sign, rest) = if let Some(rest) = value.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = value.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("invalid RFC 3339 timestamp `{value}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{parse_instant, parse_utc_offset, Cli, Command, CompanyAction};
    use chrono::{TimeZone, Utc};
    use clap::{CommandFactory, Parser};

    #[test]
    fn utc_offset_parses_signed_hours_and_minutes() {
        assert_eq!(parse_utc_offset("+02:00").unwrap().local_minus_utc(), 7200);
        assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -19800);
        assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset("02:00").is_err());
        assert!(parse_utc_offset("+02:75").is_err());
        assert!(parse_utc_offset("+30:00").is_err());
    }

    #[test]
    fn utc_offset_help_states_fixed_offset() {
        let command = Cli::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "utc_offset")
            .and_then(|arg| arg.get_help())
            .unwrap()
            .to_string();
        assert!(help.contains("daylight saving time"));
    }

    #[test]
    fn instant_is_converted_to_utc() {
        assert_eq!(
            parse_instant("2025-01-08T02:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap()
        );
        assert!(parse_instant("2025-01-08").is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "outreach",
            "company",
            "add",
            "--name",
            "Acme",
            "--location",
            "Berlin",
            "--email",
            "a@acme.test",
            "--email",
            "b@acme.test",
            "--utc-offset",
            "-03:00",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.utc_offset.local_minus_utc(), -3 * 3600);
        match cli.command {
            Command::Company {
                action: CompanyAction::Add(args),
            } => {
                assert_eq!(args.emails.len(), 2);
                assert_eq!(args.periodicity, 14);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_requires_at_least_one_company() {
        let result = Cli::try_parse_from([
            "outreach",
            "log",
            "--method",
            "00000000-0000-0000-0000-000000000003",
        ]);
        assert!(result.is_err());
    }
}
