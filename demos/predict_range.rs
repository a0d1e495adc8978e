use climatecast::{Climatecast, ClimatecastConfig, LatLon};
use std::error::Error;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ClimatecastConfig::builder()
        .timeout(Duration::from_secs(60))
        .build();
    let client = Climatecast::with_config(config)?;

    let result = client
        .predict_range()
        .location(LatLon(52.52, 13.40)) // Berlin
        .start("20260801")
        .end("20260814")
        .call()
        .await?;

    println!(
        "Average high {:.1} °C ± {:.1} °C over {} historical days",
        result.point_estimate(),
        result.uncertainty(),
        result.sample_size()
    );
    println!("{}% chance of rain", result.rain_probability_percent());

    Ok(())
}
