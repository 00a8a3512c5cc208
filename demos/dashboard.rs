use airquality::{AirQuality, AirQualityError, DashboardView, GeoPoint, ViewMode};

#[tokio::main]
async fn main() -> Result<(), AirQualityError> {
    env_logger::init();
    let client = AirQuality::new().await?;
    let london = GeoPoint::new(51.5074, -0.1278);

    for mode in [ViewMode::Live, ViewMode::Daily, ViewMode::Weekly] {
        let view = match client.dashboard().location(london).mode(mode).call().await {
            Ok(view) => view,
            Err(e) => {
                println!("{:?}: {}", mode, e.status_message());
                continue;
            }
        };

        match view {
            DashboardView::Live(snapshot) => {
                let band = snapshot.band.map(|b| b.label()).unwrap_or("unknown");
                println!("Now: AQI {:?} ({})", snapshot.aqi.aqi, band);
                if let Some(weather) = snapshot.weather {
                    println!("     {:?} °C", weather.temperature);
                }
            }
            DashboardView::Daily(series) => {
                for point in series.points {
                    println!("{}  AQI {:?}  {:?} °C", point.time, point.aqi, point.temperature);
                }
            }
            DashboardView::Weekly(series) | DashboardView::Monthly(series) => {
                for point in &series.points {
                    println!(
                        "{}  avg {:?}  max {:?}",
                        point.date, point.average_aqi, point.max_aqi
                    );
                }
                if let Some(worst) = series.worst_day() {
                    println!("Worst day: {}", worst.date);
                }
            }
        }
    }

    Ok(())
}
