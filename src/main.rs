//! SkyCast — weather lookup from the command line.
//!
//! `skycast <city>` fetches current weather and a one-day forecast, prints
//! it, and records the search in the local history. `skycast` alone prints
//! the saved history. When built without the `network` feature, runs a
//! console demo of the history subsystem instead.

use skycast::managers::history_view_model::HistoryViewModel;
use skycast::types::weather::{format_temperature, TemperatureUnit};

#[cfg(feature = "network")]
#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut app = match skycast::app::App::new(None) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.is_empty() {
        print_history(&app.history, TemperatureUnit::Celsius);
        return;
    }

    let query = args.join(" ");
    let units = app.weather.units();
    match app.search(&query).await {
        Ok(snapshot) => {
            print_weather(&snapshot, units);
            print_history(&app.history, units);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "network")]
fn print_weather(snapshot: &skycast::types::weather::WeatherSnapshot, units: TemperatureUnit) {
    use skycast::types::weather::{format_pressure, format_visibility, format_wind_speed};

    let location = &snapshot.location;
    println!();
    if location.region.is_empty() {
        println!("  {} — {}", location.name, location.country);
    } else {
        println!("  {} — {}, {}", location.name, location.region, location.country);
    }
    println!(
        "  {}  {}",
        format_temperature(snapshot.current_temp(units), units),
        snapshot.current.condition.text
    );
    println!(
        "  feels like {}",
        format_temperature(snapshot.feels_like(units), units)
    );
    let (min, max) = snapshot.min_max_temp(units);
    println!(
        "  min {} / max {}",
        format_temperature(min, units),
        format_temperature(max, units)
    );
    println!(
        "  wind {}  pressure {}  visibility {}",
        format_wind_speed(snapshot.current.wind_kph),
        format_pressure(snapshot.current.pressure_mb),
        format_visibility(snapshot.current.vis_km)
    );
    let (sunrise, sunset) = snapshot.sun_times();
    println!("  sunrise {}  sunset {}", sunrise, sunset);
}

fn print_history(history: &HistoryViewModel, units: TemperatureUnit) {
    println!();
    if history.search_history().is_empty() {
        println!("  No searches yet.");
        return;
    }
    println!("  Recent searches:");
    for entry in history.search_history() {
        let temp = entry
            .weather_snapshot
            .as_ref()
            .map(|s| format!("  {}", format_temperature(s.current_temp(units), units)))
            .unwrap_or_default();
        println!(
            "    {}  {}, {}{}",
            entry.search_date.format("%Y-%m-%d %H:%M"),
            entry.city_name,
            entry.country,
            temp
        );
    }
    if !history.removed_items().is_empty() {
        println!("  Recently removed ({}):", history.removed_items().len());
        for entry in history.removed_items() {
            println!("    {}, {}", entry.city_name, entry.country);
        }
    }
}

#[cfg(not(feature = "network"))]
fn main() {
    use skycast::managers::history_repository::HistoryRepository;
    use skycast::storage::{MemoryStore, StoreAdapter};

    println!();
    println!("  SkyCast v{} — offline demo", env!("CARGO_PKG_VERSION"));
    println!("  (built without the `network` feature; exercising the history subsystem)");
    println!();

    let store = MemoryStore::new();
    let repository = HistoryRepository::new(StoreAdapter::new(Box::new(store)));
    let mut history = HistoryViewModel::new(repository);

    history.add_to_history("London", "United Kingdom", "City of London", None);
    history.add_to_history("Paris", "France", "Ile-de-France", None);
    history.add_to_history("Tokyo", "Japan", "Tokyo", None);
    println!("  Added 3 searches");
    print_history(&history, TemperatureUnit::Celsius);

    let id = history.search_history()[0].id.clone();
    history.remove_from_history(&id);
    println!();
    println!("  Removed the most recent search");
    print_history(&history, TemperatureUnit::Celsius);

    let removed_id = history.removed_items()[0].id.clone();
    history.restore_item(&removed_id);
    println!();
    println!("  Restored it");
    print_history(&history, TemperatureUnit::Celsius);

    history.clear_history();
    println!();
    println!("  Cleared everything");
    print_history(&history, TemperatureUnit::Celsius);
}
