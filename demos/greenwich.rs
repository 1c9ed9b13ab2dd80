#![allow(missing_docs, clippy::unwrap_used)]
use chrono_tz::Europe::London;
use solunar::time::{now_utc, today_utc};
use solunar::{
    phase, CalculationError, Config, Depression, LunarCalculator, Observer, SolarCalculator, SunDirection, Visibility,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The Royal Observatory, Greenwich
    let latitude = 51.4733;
    let longitude: f64 = -0.0008333;
    let elevation = 46.0; // meters above sea level

    let observer = Observer::new(latitude, longitude, elevation)?;
    let date = today_utc();

    println!("Sun and Moon - Greenwich, London");
    println!("Location: {:.4}°N, {:.4}°W", latitude, longitude.abs());
    println!("Date: {}", date.format("%B %d, %Y"));
    println!("Elevation: {:.1} meters", elevation);
    println!("{:=<60}", "");

    let sun = SolarCalculator::new(observer, Config::default());

    let now = now_utc();
    let position = sun.get_solar_position(&now);
    println!("Current Solar Position (at {} UTC):", now.format("%H:%M:%S"));
    println!("  Zenith angle: {:.2}°", position.zenith);
    println!("  Azimuth angle: {:.2}°", position.azimuth);
    println!("  Elevation angle: {:.2}°", position.elevation());
    println!();

    match sun.get_sun(date, &London) {
        Ok(times) => {
            println!("Dawn:    {}", times.dawn.format("%H:%M:%S %Z"));
            println!("Sunrise: {}", times.sunrise.format("%H:%M:%S %Z"));
            println!("Noon:    {}", times.noon.format("%H:%M:%S %Z"));
            println!("Sunset:  {}", times.sunset.format("%H:%M:%S %Z"));
            println!("Dusk:    {}", times.dusk.format("%H:%M:%S %Z"));
        }
        Err(CalculationError::NoTransit {
            visibility: Visibility::AlwaysAbove,
            ..
        }) => println!("Sun never sets (midnight sun)"),
        Err(CalculationError::NoTransit {
            visibility: Visibility::AlwaysBelow,
            ..
        }) => println!("Sun never rises (polar night)"),
        Err(e) => return Err(e.into()),
    }
    println!();

    // Twilight
    for (name, depression) in [
        ("Civil", Depression::Civil),
        ("Nautical", Depression::Nautical),
        ("Astronomical", Depression::Astronomical),
    ] {
        match (sun.get_dawn_at(date, depression, &London), sun.get_dusk_at(date, depression, &London)) {
            (Ok(dawn), Ok(dusk)) => println!(
                "{name} twilight: {} - {}",
                dawn.format("%H:%M:%S"),
                dusk.format("%H:%M:%S")
            ),
            (Err(e), _) | (_, Err(e)) => println!("{name} twilight: {e}"),
        }
    }

    if let Ok((start, end)) = sun.get_golden_hour(date, SunDirection::Setting, &London) {
        println!("Evening golden hour: {} - {}", start.format("%H:%M:%S"), end.format("%H:%M:%S"));
    }
    if let Ok((start, end)) = sun.get_blue_hour(date, SunDirection::Setting, &London) {
        println!("Evening blue hour:   {} - {}", start.format("%H:%M:%S"), end.format("%H:%M:%S"));
    }
    println!();

    let moon = LunarCalculator::new(observer);
    match moon.get_moonrise(date, &London) {
        Ok(rise) => println!("Moonrise: {} (azimuth {:.1}°)", rise.time.format("%H:%M %Z"), rise.azimuth),
        Err(e) => println!("Moonrise: {e}"),
    }
    match moon.get_moonset(date, &London) {
        Ok(set) => println!("Moonset:  {} (azimuth {:.1}°)", set.time.format("%H:%M %Z"), set.azimuth),
        Err(e) => println!("Moonset:  {e}"),
    }
    println!("Moon elevation now: {:.2}°", moon.get_elevation(&now));

    let p = phase(date);
    println!("Phase: {:.2} ({})", p.value(), p.name());

    Ok(())
}
