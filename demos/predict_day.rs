use climatecast::{Climatecast, LatLon};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = Climatecast::new()?;

    let result = client
        .predict_day()
        .location(LatLon(45.5, -73.56)) // Montreal
        .date("2026-01-01")
        .call()
        .await?;

    println!(
        "High of {:.1} °C ± {:.1} °C, {}% chance of rain",
        result.point_estimate(),
        result.uncertainty(),
        result.rain_probability_percent()
    );
    if let Some(trend) = result.trend() {
        println!("Trend: {:+.3} °C per year", trend.slope);
    }
    println!(
        "Based on {} years ({} with rain data)",
        result.sample_size(),
        result.rain_sample_size()
    );

    Ok(())
}
