use crate::climatecast::LatLon;
use crate::config::ClimatecastConfig;
use crate::power_data::error::PowerDataError;
use crate::power_data::response::PowerResponse;
use crate::types::date_key::DateKey;
use crate::types::power_parameter::PowerParameter;
use crate::types::series::HistoricalRecord;
use log::{info, warn};
use reqwest::Client;

/// Retrieves daily maximum temperature and precipitation for one point from
/// the NASA POWER API.
///
/// Each call is a single GET request. Nothing is cached: dropping the returned
/// future cancels the request and leaves no state behind.
pub struct PowerFetcher {
    client: Client,
    base_url: String,
    community: String,
}

impl PowerFetcher {
    pub fn new(config: &ClimatecastConfig) -> Result<Self, PowerDataError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PowerDataError::ClientBuild)?;
        Ok(Self::with_client(config, client))
    }

    pub(crate) fn with_client(config: &ClimatecastConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            community: config.community.clone(),
        }
    }

    /// Fetches `[start, end]` (inclusive) for `location` and decodes it into a
    /// [`HistoricalRecord`]. Days NASA marks as missing are left out.
    pub async fn fetch(
        &self,
        location: LatLon,
        start: DateKey,
        end: DateKey,
    ) -> Result<HistoricalRecord, PowerDataError> {
        let url = &self.base_url;
        info!(
            "Requesting NASA POWER daily data for ({}, {}) from {} to {}",
            location.0, location.1, start, end
        );

        let response = self
            .client
            .get(url)
            .query(&[
                ("parameters", PowerParameter::query_value()),
                ("community", self.community.clone()),
                ("longitude", location.1.to_string()),
                ("latitude", location.0.to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("format", "JSON".to_string()),
            ])
            .send()
            .await
            .map_err(|e| PowerDataError::from_transport(url, e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(PowerDataError::from_transport(url, e));
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| PowerDataError::from_transport(url, e))?;
        let record = PowerResponse::from_slice(&body)?.into_record()?;
        info!(
            "Received {} temperature and {} precipitation days ({} bytes)",
            record.temperature.len(),
            record.precipitation.len(),
            body.len()
        );
        Ok(record)
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! A one-shot HTTP responder on localhost for exercising the fetch path
    //! without touching the real API.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Client that talks to localhost directly, whatever proxy the
    /// environment configures.
    pub(crate) fn local_client(timeout: std::time::Duration) -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .unwrap()
    }

    pub(crate) struct OneShotServer {
        pub base_url: String,
        /// Resolves to the request line of the first request received.
        pub request_line: JoinHandle<String>,
    }

    /// Serves one request, answering with `status` and `body` after `delay`.
    pub(crate) async fn serve_once(
        status: &'static str,
        body: String,
        delay: std::time::Duration,
    ) -> OneShotServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let request_line = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received: Vec<u8> = Vec::new();
            let mut buffer = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buffer).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buffer[..n]);
            }
            tokio::time::sleep(delay).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            // The client may already have given up; that's fine.
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&received)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        OneShotServer {
            base_url: format!("http://{address}/api/temporal/daily/point"),
            request_line,
        }
    }
}
