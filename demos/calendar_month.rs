use airquality::{AirQuality, AirQualityError, CalendarStatus, DateWindow, Polygon};
use chrono::{Datelike, Local};

#[tokio::main]
async fn main() -> Result<(), AirQualityError> {
    env_logger::init();
    let client = AirQuality::new().await?;

    // A rough outline of central Delhi, as GeoJSON [lon, lat] pairs.
    let area = Polygon::from_lon_lat_ring(&[
        [77.15, 28.58],
        [77.28, 28.58],
        [77.28, 28.68],
        [77.15, 28.68],
    ]);
    let centroid = AirQuality::locate(&area)?;

    let today = Local::now().date_naive();
    let current = DateWindow::month(today.year(), today.month());
    let window = current.previous().unwrap_or(current);

    match client.calendar().location(centroid).window(window).call().await {
        CalendarStatus::Loaded(calendar) => {
            println!("{}", window);
            println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
            for week in calendar.weeks() {
                let row: Vec<String> = week
                    .iter()
                    .map(|cell| match cell.and_then(|day| day.max_aqi) {
                        Some(aqi) => format!("{:>4.0}", aqi),
                        None if cell.is_some() => "   -".to_string(),
                        None => "    ".to_string(),
                    })
                    .collect();
                println!("{}", row.join(" "));
            }
            if let Some(message) = calendar.weather_error {
                println!("Weather: {}", message);
            }
            if let Some((date, aqi)) = calendar.worst_day() {
                println!("Worst day: {} (AQI {:.0})", date, aqi);
            }
        }
        status => println!("{:?}", status.message()),
    }

    Ok(())
}
