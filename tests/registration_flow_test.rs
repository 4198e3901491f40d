use anyhow::Result;
use chrono::{Duration, NaiveDate};
use event_calendar::core::report::{participant_report, person_agenda, render};
use event_calendar::{CalendarError, Controller, FixedClock, Person, ReportFormat};

/// Launch 活動上限 1 人：P1 報名、P2 被拒、P1 取消後 P2 才能報名
#[test]
fn test_launch_capacity_walkthrough() -> Result<()> {
    let now = NaiveDate::from_ymd_opt(2031, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut controller = Controller::with_clock(FixedClock(now));
    let host = Person::new("Huber", "Hannah");
    let p1 = Person::new("Adams", "Zoe");
    let p2 = Person::new("Brown", "Amy");

    assert!(controller.create_event(Some(&host), "Launch", now + Duration::weeks(1), 1));

    assert!(controller.register_person_for_event(Some(&p1), "Launch"));
    assert!(!controller.register_person_for_event(Some(&p2), "Launch"));
    assert!(controller.unregister_person_for_event(Some(&p1), "Launch"));
    assert!(controller.register_person_for_event(Some(&p2), "Launch"));

    let participants = controller.get_participators_for_event("Launch").unwrap();
    assert_eq!(participants, vec![&p2]);
    assert_eq!(controller.count_events_for_person(Some(&p1)), 0);
    assert_eq!(controller.count_events_for_person(Some(&p2)), 1);

    let err = controller
        .try_register_person_for_event(Some(&p1), "Launch")
        .unwrap_err();
    assert!(err.is_rule_violation());
    assert!(matches!(err, CalendarError::CapacityReached { capacity: 1, .. }));

    Ok(())
}

#[test]
fn test_reports_follow_controller_state() -> Result<()> {
    let now = NaiveDate::from_ymd_opt(2031, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut controller = Controller::with_clock(FixedClock(now));
    let host = Person::new("Huber", "Hannah");
    let zoe = Person::new("Adams", "Zoe");
    let amy = Person::new("Brown", "Amy");

    controller.create_event(Some(&host), "Launch", now + Duration::days(7), 10);
    controller.create_event(Some(&host), "Warm-up", now + Duration::days(5), 0);
    controller.register_person_for_event(Some(&amy), "Launch");
    controller.register_person_for_event(Some(&zoe), "Launch");
    controller.register_person_for_event(Some(&amy), "Warm-up");

    let rows = participant_report(&controller, "Launch").unwrap();
    let csv = render(&rows, ReportFormat::Csv)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "rank,full_name,event_count,mail_address,phone_number",
            "1,Brown Amy,2,,",
            "2,Adams Zoe,1,,",
        ]
    );

    let agenda = person_agenda(&controller, Some(&amy)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&render(&agenda, ReportFormat::Json)?)?;
    assert_eq!(json[0]["title"], "Warm-up");
    assert_eq!(json[0]["max_participators"], -1);
    assert_eq!(json[1]["title"], "Launch");

    Ok(())
}

#[test]
fn test_contact_change_after_registration_reaches_queries() -> Result<()> {
    let now = NaiveDate::from_ymd_opt(2031, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut controller = Controller::with_clock(FixedClock(now));
    let host = Person::new("Huber", "Hannah");
    let amy = Person::new("Brown", "Amy");

    controller.create_event(Some(&host), "Launch", now + Duration::days(7), 0);
    assert!(controller.register_person_for_event(Some(&amy), "Launch"));

    amy.set_phone_number("+43 1");
    host.set_mail_address("hannah@example.com");

    let participants = controller.get_participators_for_event("Launch").unwrap();
    assert_eq!(participants[0].phone_number().as_deref(), Some("+43 1"));

    let rows = participant_report(&controller, "Launch").unwrap();
    assert_eq!(rows[0].phone_number.as_deref(), Some("+43 1"));

    let event = controller.get_event("Launch").unwrap();
    assert_eq!(
        event.invitor().mail_address().as_deref(),
        Some("hannah@example.com")
    );

    Ok(())
}
