use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use outreach_core::{
    classify_urgency, company_overview, next_scheduled, recent_history,
    seed_communication_methods, seed_method_id, Communication, Company, CompanyDraft, Urgency,
    MAX_COMMUNICATION_PERIODICITY, RECENT_HISTORY_LIMIT,
};
use uuid::Uuid;

fn utc_zone() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn company(periodicity: u32) -> Company {
    let mut draft = CompanyDraft::new("Acme", "Berlin");
    draft.communication_periodicity = periodicity;
    draft.into_company(Uuid::new_v4())
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn log(company: &Company, date: DateTime<Utc>, notes: &str) -> Communication {
    Communication::new(company.id, seed_method_id(3), date, notes)
}

#[test]
fn company_without_history_has_no_next_date() {
    let target = company(7);
    let other = company(7);
    let comms = vec![log(&other, utc(2025, 1, 1, 0, 0), "")];
    let methods = seed_communication_methods();

    assert_eq!(next_scheduled(&comms, &methods, &target, utc_zone()), None);

    let overview = company_overview(&target, &comms, &methods, utc(2025, 1, 2, 0, 0), utc_zone());
    assert!(overview.recent.is_empty());
    assert_eq!(overview.next, None);
    assert_eq!(overview.urgency, None);
}

#[test]
fn recent_history_returns_at_most_five_newest_first() {
    let target = company(7);
    let other = company(7);
    let mut comms = Vec::new();
    for day in [3, 9, 1, 7, 5, 2, 8] {
        comms.push(log(&target, utc(2025, 2, day, 12, 0), &format!("day-{day}")));
        comms.push(log(&other, utc(2025, 2, day, 13, 0), "other"));
    }

    let history = recent_history(&comms, target.id);
    assert_eq!(history.len(), RECENT_HISTORY_LIMIT);
    let notes: Vec<&str> = history.iter().map(|c| c.notes.as_str()).collect();
    assert_eq!(notes, vec!["day-9", "day-8", "day-7", "day-5", "day-3"]);
    assert!(history.iter().all(|c| c.company_id == target.id));

    let short = vec![
        log(&target, utc(2025, 2, 1, 0, 0), "a"),
        log(&target, utc(2025, 2, 4, 0, 0), "b"),
    ];
    let history = recent_history(&short, target.id);
    let notes: Vec<&str> = history.iter().map(|c| c.notes.as_str()).collect();
    assert_eq!(notes, vec!["b", "a"]);
}

#[test]
fn next_date_adds_periodicity_across_month_and_year_rollover() {
    let methods = seed_communication_methods();

    let biweekly = company(14);
    let comms = vec![log(&biweekly, utc(2025, 1, 25, 10, 30), "")];
    let next = next_scheduled(&comms, &methods, &biweekly, utc_zone()).unwrap();
    assert_eq!(next.date, utc_zone().with_ymd_and_hms(2025, 2, 8, 10, 30, 0).unwrap());

    let weekly = company(7);
    let comms = vec![log(&weekly, utc(2024, 12, 28, 0, 0), "")];
    let next = next_scheduled(&comms, &methods, &weekly, utc_zone()).unwrap();
    assert_eq!(next.date, utc_zone().with_ymd_and_hms(2025, 1, 4, 0, 0, 0).unwrap());

    let leap = company(1);
    let comms = vec![log(&leap, utc(2024, 2, 28, 8, 0), "")];
    let next = next_scheduled(&comms, &methods, &leap, utc_zone()).unwrap();
    assert_eq!(next.date, utc_zone().with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap());
}

#[test]
fn next_date_uses_latest_communication_not_last_inserted() {
    let target = company(10);
    let methods = seed_communication_methods();
    let comms = vec![
        log(&target, utc(2025, 3, 20, 9, 0), "latest"),
        log(&target, utc(2025, 3, 1, 9, 0), "older, inserted later"),
    ];

    let next = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();
    assert_eq!(next.date, utc_zone().with_ymd_and_hms(2025, 3, 30, 9, 0, 0).unwrap());
}

#[test]
fn next_method_is_always_the_first_method() {
    let target = company(7);
    let methods = seed_communication_methods();
    let comms = vec![Communication::new(
        target.id,
        seed_method_id(4),
        utc(2025, 1, 1, 0, 0),
        "phone call",
    )];

    let next = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();
    assert_eq!(next.method_id, Some(methods[0].id));

    let next = next_scheduled(&comms, &[], &target, utc_zone()).unwrap();
    assert_eq!(next.method_id, None);
}

#[test]
fn weekly_company_moves_from_scheduled_to_due_today_to_overdue() {
    let target = company(7);
    let methods = seed_communication_methods();
    let comms = vec![log(&target, utc(2025, 1, 1, 0, 0), "kickoff")];

    let next = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();
    assert_eq!(next.date.date_naive().to_string(), "2025-01-08");

    assert_eq!(classify_urgency(next.date, utc(2025, 1, 8, 0, 0)), Urgency::DueToday);
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 9, 0, 0)), Urgency::Overdue);
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 5, 0, 0)), Urgency::Scheduled);
}

#[test]
fn later_time_on_due_date_is_overdue() {
    let target = company(7);
    let methods = seed_communication_methods();
    let comms = vec![log(&target, utc(2025, 1, 1, 9, 0), "")];
    let next = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();

    assert_eq!(classify_urgency(next.date, utc(2025, 1, 8, 8, 59)), Urgency::DueToday);
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 8, 9, 0)), Urgency::DueToday);
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 8, 9, 1)), Urgency::Overdue);
}

#[test]
fn calendar_zone_shifts_due_today_boundary() {
    let target = company(1);
    let methods = seed_communication_methods();
    // 2025-01-01 23:00 UTC is already 2025-01-02 in UTC+3.
    let comms = vec![log(&target, utc(2025, 1, 1, 23, 0), "")];
    let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();

    let next = next_scheduled(&comms, &methods, &target, plus_three).unwrap();
    assert_eq!(next.date.date_naive().to_string(), "2025-01-03");
    // 2025-01-02 21:30 UTC is 2025-01-03 00:30 in UTC+3.
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 2, 21, 30)), Urgency::DueToday);
    assert_eq!(classify_urgency(next.date, utc(2025, 1, 2, 10, 0)), Urgency::Scheduled);

    let next_utc = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();
    assert_eq!(next_utc.date.with_timezone(&Utc), next.date.with_timezone(&Utc));
    assert_eq!(next_utc.date.date_naive().to_string(), "2025-01-02");
    assert_eq!(classify_urgency(next_utc.date, utc(2025, 1, 2, 10, 0)), Urgency::DueToday);
}

#[test]
fn repeated_evaluation_is_identical_and_leaves_input_untouched() {
    let target = company(3);
    let methods = seed_communication_methods();
    let comms = vec![
        log(&target, utc(2025, 4, 2, 0, 0), "b"),
        log(&target, utc(2025, 4, 1, 0, 0), "a"),
        log(&target, utc(2025, 4, 3, 0, 0), "c"),
    ];
    let before = comms.clone();
    let now = utc(2025, 4, 7, 0, 0);

    let first = company_overview(&target, &comms, &methods, now, utc_zone());
    let second = company_overview(&target, &comms, &methods, now, utc_zone());
    assert_eq!(first, second);
    assert_eq!(first.urgency, Some(Urgency::Overdue));
    assert_eq!(comms, before);
}

#[test]
fn longest_accepted_periodicity_still_gives_next_date() {
    let target = company(MAX_COMMUNICATION_PERIODICITY);
    target.validate().unwrap();
    let comms = vec![log(&target, utc(2025, 1, 1, 9, 0), "")];
    let methods = seed_communication_methods();

    let next = next_scheduled(&comms, &methods, &target, utc_zone()).unwrap();
    assert_eq!(next.date, utc(2124, 12, 8, 9, 0));

    let overview = company_overview(&target, &comms, &methods, utc(2025, 1, 2, 0, 0), utc_zone());
    assert_eq!(overview.urgency, Some(Urgency::Scheduled));
}
