//! `atlnav` - CLI for atl-navigator
//!
//! This binary prints the navigator's boards, directories and maps, and can
//! run the live views against the real clock.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::Context;
use chrono::{Timelike, Utc};
use clap::Parser;
use tracing::info;

use atl_navigator::carousel::{AutoCarousel, Carousel};
use atl_navigator::cli::{
    AnalyticsCommand, Cli, Command, ConfigCommand, FlightsCommand, GateCommand, GatesCommand,
    MapCommand, ServicesCommand, WalkCommand, WatchCommand,
};
use atl_navigator::content::{FEATURES, SEARCH_PLACEHOLDERS, TESTIMONIALS};
use atl_navigator::dashboard::{
    busiest_concourse, concourse_chart, format_thousands, hour_clock_label, hourly_chart,
    stat_cards, Trend,
};
use atl_navigator::lookup::{gates_by_concourse, status_label};
use atl_navigator::schedule::{spawn_periodic, TaskGroup};
use atl_navigator::search::{directory_items, search_directory, FlightQuery, MapItem};
use atl_navigator::{
    estimate_walking_time, init_logging, AirportData, Analytics, AnalyticsGenerator, Config,
    Direction, Error, FlightBoard, LiveFeed, TerminalMap,
};

/// Width of the text bar charts.
const BAR_WIDTH: f64 = 30.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    match cli.command {
        Command::Flights(cmd) => handle_flights(&config, &load_data()?, cmd),
        Command::Gates(cmd) => handle_gates(&load_data()?, &cmd),
        Command::Services(cmd) => handle_services(&load_data()?, &cmd),
        Command::Map(cmd) => handle_map(&config, &load_data()?, cmd),
        Command::Gate(cmd) => handle_gate(&config, &load_data()?, &cmd),
        Command::Walk(cmd) => handle_walk(&load_data()?, &cmd),
        Command::Analytics(cmd) => handle_analytics(&config, &cmd),
        Command::Watch(cmd) => handle_watch(&config, &load_data()?, &cmd).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_data() -> anyhow::Result<AirportData> {
    AirportData::load().context("failed to load airport data")
}

fn handle_flights(
    config: &Config,
    data: &AirportData,
    cmd: FlightsCommand,
) -> anyhow::Result<()> {
    let query = FlightQuery::new(cmd.query, cmd.airline);
    let now = Utc::now();
    let board =
        FlightBoard::from_flights(data.flights(), config.board.max_rows, now).filtered(&query);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    for direction in [Direction::Departure, Direction::Arrival] {
        println!("{}", board.tab_caption(direction));
        println!("{}", "-".repeat(56));
        let rows = board.rows(direction);
        if rows.is_empty() {
            println!("  No flights match your search.");
        }
        for row in rows {
            println!(
                "  {:<8} {:<12} {:<6} {:<5} {}",
                row.flight_number, row.route, row.time, row.gate, row.status
            );
        }
        println!();
    }
    println!("{}", board.updated_label(now));
    Ok(())
}

fn handle_gates(data: &AirportData, cmd: &GatesCommand) -> anyhow::Result<()> {
    let gates: Vec<_> = match cmd.concourse {
        Some(concourse) => gates_by_concourse(data.gates(), concourse),
        None => data.gates().iter().collect(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&gates)?);
        return Ok(());
    }

    for gate in &gates {
        println!(
            "  {:<5} {:<9} {:>3} min  {}",
            gate.number,
            gate.concourse.code(),
            gate.walking_time_from_center,
            gate.amenities.join(", ")
        );
    }
    println!("{} gates", gates.len());
    Ok(())
}

fn handle_services(data: &AirportData, cmd: &ServicesCommand) -> anyhow::Result<()> {
    let items = directory_items(data);
    let results = search_directory(&items, &cmd.query, cmd.filter);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{} ({})", cmd.filter.label(), results.len());
    println!("{}", "-".repeat(72));
    for item in results {
        println!(
            "  {:<36} {:<10} {:<9} {:<6} {}",
            item.name(),
            item.category(),
            item.concourse().code(),
            item.gate(),
            item.hours()
        );
    }
    Ok(())
}

fn handle_map(config: &Config, data: &AirportData, cmd: MapCommand) -> anyhow::Result<()> {
    let mut map = TerminalMap::with_settings(data, cmd.concourse, config.zoom_limits());
    let items = match cmd.query {
        Some(query) => {
            map.set_query(query);
            map.search()
        }
        None => map.visible_markers(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!(
        "{} - {}",
        map.concourse().name(),
        map.concourse().description()
    );
    println!("{}", "-".repeat(64));
    for item in &items {
        print_map_item(item);
    }
    println!("{} items", items.len());
    Ok(())
}

fn print_map_item(item: &MapItem) {
    let position = item.coordinates();
    println!(
        "  {:<9} {:<40} ({:>3.0}, {:>3.0})",
        item.kind(),
        item.name(),
        position.x,
        position.y
    );
}

fn handle_gate(config: &Config, data: &AirportData, cmd: &GateCommand) -> anyhow::Result<()> {
    let mut map =
        TerminalMap::with_settings(data, config.map.default_concourse, config.zoom_limits());
    let selection = map
        .select_gate(cmd.number.trim())
        .ok_or_else(|| Error::gate_not_found(cmd.number.trim()))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(selection)?);
        return Ok(());
    }

    if let MapItem::Gate(gate) = &selection.item {
        println!("Gate {} ({})", gate.number, gate.concourse.name());
        println!("  Walk from center: {} min", gate.walking_time_from_center);
        println!("  Amenities:        {}", gate.amenities.join(", "));
    }
    match &selection.current_flight {
        Some(flight) => println!(
            "  Current flight:   {} {} → {} at {} ({})",
            flight.flight_number,
            flight.origin_code,
            flight.destination_code,
            flight.display_time(),
            status_label(flight.status)
        ),
        None => println!("  Current flight:   none"),
    }
    Ok(())
}

fn handle_walk(data: &AirportData, cmd: &WalkCommand) -> anyhow::Result<()> {
    match estimate_walking_time(data.gates(), cmd.from.trim(), cmd.to.trim()) {
        Ok(estimate) => {
            println!("{}", estimate.notice());
            Ok(())
        }
        Err(err) if err.is_gate_not_found() => {
            eprintln!("Invalid gate numbers: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_analytics(config: &Config, cmd: &AnalyticsCommand) -> anyhow::Result<()> {
    let analytics = AnalyticsGenerator::from_seed(config.data.seed).generate();
    let current_hour = u8::try_from(analytics.timestamp.hour()).unwrap_or_default();

    if cmd.json {
        let report = serde_json::json!({
            "analytics": &analytics,
            "stat_cards": stat_cards(&analytics),
            "hourly": hourly_chart(&analytics, current_hour),
            "concourses": concourse_chart(&analytics),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_analytics(&analytics, current_hour);
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(percent: f64) -> String {
    "#".repeat((percent / 100.0 * BAR_WIDTH).round() as usize)
}

fn print_analytics(analytics: &Analytics, current_hour: u8) {
    for card in stat_cards(analytics) {
        let arrow = match card.trend() {
            Trend::Up => '↑',
            Trend::Down => '↓',
        };
        println!(
            "  {:<20} {:>10}  {arrow} {} {}",
            card.title,
            card.value,
            card.change_text(),
            card.change_label
        );
    }
    println!();

    println!("Hourly traffic");
    for entry in hourly_chart(analytics, current_hour) {
        let marker = if entry.current { '*' } else { ' ' };
        println!(
            " {marker}{:>3} {:<30} {}",
            entry.label,
            bar(entry.height),
            format_thousands(u64::from(entry.count))
        );
    }
    if let Some(peak) = analytics.peak_hour() {
        println!(
            "  Peak: {} ({} passengers)",
            hour_clock_label(peak.hour),
            format_thousands(u64::from(peak.count))
        );
    }
    println!();

    println!("Concourse traffic");
    for entry in concourse_chart(analytics) {
        println!(
            "  {:<24} {:<30} {}",
            entry.label,
            bar(entry.width),
            entry.count_text
        );
    }
    if let Some(busiest) = busiest_concourse(analytics) {
        println!("  Busiest: {}", busiest.name());
    }
}

async fn handle_watch(
    config: &Config,
    data: &AirportData,
    cmd: &WatchCommand,
) -> anyhow::Result<()> {
    let flights = data.flight_generator();
    let max_rows = config.board.max_rows;
    let board = LiveFeed::mount(
        "flight-board",
        config.flights_interval(),
        config.refresh_delay(),
        move || FlightBoard::from_flights(&flights(), max_rows, Utc::now()),
    );

    let generator = AnalyticsGenerator::from_seed(config.data.seed);
    let analytics = LiveFeed::mount(
        "analytics",
        config.analytics_interval(),
        config.refresh_delay(),
        move || generator.generate(),
    );

    let features = AutoCarousel::start("features", FEATURES.len(), config.carousel_interval());
    let testimonials =
        AutoCarousel::start("testimonials", TESTIMONIALS.len(), config.carousel_interval());

    let placeholders = Arc::new(Carousel::new(SEARCH_PLACEHOLDERS.len()));
    let mut tasks = TaskGroup::new();
    let rotating = Arc::clone(&placeholders);
    tasks.add(spawn_periodic(
        "search-placeholder",
        config.placeholder_interval(),
        move || {
            rotating.advance();
        },
    ));

    let initial = board.current();
    println!(
        "Watching: {}, {}",
        initial.tab_caption(Direction::Departure),
        initial.tab_caption(Direction::Arrival)
    );
    println!(
        "Passenger volume: {}",
        format_thousands(u64::from(analytics.current().passenger_volume))
    );

    let mut board_rx = board.subscribe();
    let mut analytics_rx = analytics.subscribe();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut refreshes = 0_u64;

    while cmd.ticks.map_or(true, |limit| refreshes < limit) {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("Interrupted");
                break;
            }
            changed = board_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = board_rx.borrow_and_update().clone();
                println!(
                    "[{}] flight board refreshed: {} departures, {} arrivals",
                    snapshot.last_updated().format("%H:%M:%S"),
                    snapshot.departures().len(),
                    snapshot.arrivals().len()
                );
            }
            changed = analytics_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = analytics_rx.borrow_and_update().clone();
                println!(
                    "[{}] analytics refreshed: {} passengers, {} min security",
                    snapshot.timestamp.format("%H:%M:%S"),
                    format_thousands(u64::from(snapshot.passenger_volume)),
                    snapshot.security_queue_time
                );
            }
        }
        refreshes += 1;
        println!(
            "  feature: {} | testimonial: {} | search hint: {}",
            FEATURES[features.current()].title,
            TESTIMONIALS[testimonials.current()].author,
            SEARCH_PLACEHOLDERS[placeholders.current()]
        );
    }

    board.unmount();
    analytics.unmount();
    features.cancel_autoplay();
    testimonials.cancel_autoplay();
    tasks.stop_all();
    info!(refreshes, "Stopped live views");
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Refresh]");
                println!("  Flights (ms):       {}", config.refresh.flights_interval_ms);
                println!("  Analytics (ms):     {}", config.refresh.analytics_interval_ms);
                println!("  Simulated delay:    {}", config.refresh.simulated_delay_ms);
                println!();
                println!("[Carousel]");
                println!("  Interval (ms):      {}", config.carousel.interval_ms);
                println!(
                    "  Placeholder (ms):   {}",
                    config.carousel.placeholder_interval_ms
                );
                println!();
                println!("[Board]");
                println!("  Max rows:           {}", config.board.max_rows);
                println!();
                println!("[Map]");
                println!("  Default concourse:  {}", config.map.default_concourse);
                println!(
                    "  Zoom:               {} - {} (step {})",
                    config.map.min_zoom, config.map.max_zoom, config.map.zoom_step
                );
                println!();
                println!("[Data]");
                match config.data.seed {
                    Some(seed) => println!("  Seed:               {seed}"),
                    None => println!("  Seed:               (entropy)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
