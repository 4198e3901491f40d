use anyhow::Context;
use chrono::{Duration, Local};
use clap::Parser;
use event_calendar::core::report::{participant_report, person_agenda, render};
use event_calendar::utils::{logger, validation::Validate};
use event_calendar::{CalendarConfig, CliConfig, Controller, Person};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => CalendarConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalendarConfig::default(),
    };

    // 初始化日誌
    if cli.config.is_some() {
        logger::init_from_config(&config.logging, cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let format = cli.format.unwrap_or(config.report.format);
    tracing::debug!("CLI config: {:?}, report format: {:?}", cli, format);

    let mut controller = Controller::new();
    let host = Person::new("Huber", "Hannah");
    host.set_mail_address("hannah.huber@example.com");
    let first = Person::new("Adams", "Zoe");
    let second = Person::new("Brown", "Amy");

    let launch_at = Local::now().naive_local() + Duration::days(7);
    let warmup_at = launch_at - Duration::days(2);

    anyhow::ensure!(
        controller.create_event(Some(&host), "Launch", launch_at, 1),
        "could not create 'Launch'"
    );
    anyhow::ensure!(
        controller.create_event(Some(&host), "Warm-up", warmup_at, 0),
        "could not create 'Warm-up'"
    );

    let steps = [
        ("register", "Launch", &first),
        ("register", "Launch", &second),
        ("unregister", "Launch", &first),
        ("register", "Launch", &second),
        ("register", "Warm-up", &first),
        ("register", "Warm-up", &second),
    ];

    for (action, title, person) in steps {
        let outcome = match action {
            "register" => controller.try_register_person_for_event(Some(person), title),
            _ => controller.try_unregister_person_for_event(Some(person), title),
        };
        match outcome {
            Ok(()) => println!("✅ {} {} for '{}'", action, person, title),
            Err(e) => println!("⛔ {} {} for '{}': {}", action, person, title, e),
        }
    }

    for event in controller.events() {
        let rows = participant_report(&controller, event.title()).unwrap_or_default();
        println!("\n📋 {}", event);
        println!("{}", render(&rows, format)?);
    }

    let agenda = person_agenda(&controller, Some(&second)).unwrap_or_default();
    println!(
        "\n🗓  Agenda of {} ({} events)",
        second,
        controller.count_events_for_person(Some(&second))
    );
    println!("{}", render(&agenda, format)?);

    Ok(())
}
