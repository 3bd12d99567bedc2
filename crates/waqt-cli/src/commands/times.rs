//! Prayer timetable commands: fetch, manual entry, show.

use clap::Subcommand;
use waqt_core::integrations::{method_for_country, AladhanClient, GeocodeClient, DEFAULT_METHOD};
use waqt_core::{Config, PlannerDb, PrayerBoundary, PrayerName, Timetable, WallClock};

use super::common;

#[derive(Subcommand)]
pub enum TimesAction {
    /// Fetch today's timetable from the prayer times service and cache it
    Fetch {
        /// Latitude override; saved to the config for next time
        #[arg(long)]
        latitude: Option<f64>,
        /// Longitude override; saved to the config for next time
        #[arg(long)]
        longitude: Option<f64>,
        /// Calculation method id override (default: per country, ISNA
        /// when unknown)
        #[arg(long)]
        method: Option<u8>,
    },
    /// Enter today's timetable by hand, without a network round trip
    Set {
        /// Fajr time (HH:MM)
        #[arg(long)]
        fajr: String,
        /// Sunrise time (HH:MM)
        #[arg(long)]
        sunrise: String,
        /// Dhuhr time (HH:MM)
        #[arg(long)]
        dhuhr: String,
        /// Asr time (HH:MM)
        #[arg(long)]
        asr: String,
        /// Maghrib time (HH:MM)
        #[arg(long)]
        maghrib: String,
        /// Isha time (HH:MM)
        #[arg(long)]
        isha: String,
    },
    /// Show today's cached timetable
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TimesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimesAction::Fetch {
            latitude,
            longitude,
            method,
        } => fetch(latitude, longitude, method),
        TimesAction::Set {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        } => set(&[
            (PrayerName::Fajr, fajr),
            (PrayerName::Sunrise, sunrise),
            (PrayerName::Dhuhr, dhuhr),
            (PrayerName::Asr, asr),
            (PrayerName::Maghrib, maghrib),
            (PrayerName::Isha, isha),
        ]),
        TimesAction::Show { json } => show(json),
    }
}

fn fetch(
    latitude: Option<f64>,
    longitude: Option<f64>,
    method: Option<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    if let Some(latitude) = latitude {
        config.location.latitude = latitude;
    }
    if let Some(longitude) = longitude {
        config.location.longitude = longitude;
    }
    let (latitude, longitude) = (config.location.latitude, config.location.longitude);
    let school = config.prayer.school;
    let configured_method = method.or(config.prayer.method);

    let runtime = tokio::runtime::Runtime::new()?;
    let (timetable, place) = runtime.block_on(async {
        // Geocoding is best effort; without it the method falls back to
        // the configured one or ISNA.
        let place = match GeocodeClient::new().reverse(latitude, longitude).await {
            Ok(place) => Some(place),
            Err(err) => {
                log::warn!("reverse geocoding failed: {err}");
                None
            }
        };
        let method = configured_method.unwrap_or_else(|| {
            place
                .as_ref()
                .map_or(DEFAULT_METHOD, |p| method_for_country(&p.country_code))
        });
        let timetable = AladhanClient::new()
            .fetch_timetable(latitude, longitude, method, school)
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((timetable, place))
    })?;

    let db = PlannerDb::open()?;
    db.cache_timetable(&common::today_key(), &timetable)?;

    if let Some(place) = place {
        let label = place.label();
        if !label.is_empty() {
            config.location.label = Some(label);
        }
    }
    config.save()?;

    match &config.location.label {
        Some(label) => println!("Prayer times for {label} ({})", common::today_key()),
        None => println!("Prayer times for {latitude}, {longitude} ({})", common::today_key()),
    }
    print_timetable(&timetable);
    Ok(())
}

fn set(times: &[(PrayerName, String)]) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = Vec::with_capacity(times.len());
    for (name, text) in times {
        entries.push(PrayerBoundary {
            name: *name,
            time: WallClock::parse(text)?,
        });
    }
    let timetable = Timetable::from_entries(entries)?;

    let db = PlannerDb::open()?;
    db.cache_timetable(&common::today_key(), &timetable)?;

    println!("Prayer times for {}", common::today_key());
    print_timetable(&timetable);
    Ok(())
}

fn show(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlannerDb::open()?;
    let timetable = common::load_timetable(&db)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timetable)?);
        return Ok(());
    }
    print_timetable(&timetable);
    Ok(())
}

fn print_timetable(timetable: &Timetable) {
    for boundary in timetable.boundaries() {
        println!("{:<8} {}", boundary.name.as_str(), boundary.time);
    }
}
