use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    params::OsrmClientParams,
    responses::{OsrmRouteResponse, OsrmTableResponse},
};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Query has no coordinates")]
    EmptyQuery,

    #[error("Invalid OSRM port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub const OSRM_ROUTE_SERVICE: &str = "route";
pub const OSRM_TABLE_SERVICE: &str = "table";

pub const OSRM_ROUTE_ARGS: &str =
    "alternatives=false&steps=false&overview=full&continue_straight=false";
pub const OSRM_TABLE_ARGS: &str = "annotations=duration,distance";

/// Read-only OSRM HTTP client. Failures are returned as is, nothing is
/// retried.
pub struct OsrmClient {
    params: OsrmClientParams,
    client: reqwest::Client,
}

impl OsrmClient {
    pub fn new(params: OsrmClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// `http://host:port/{service}/v1/{profile}/x,y;x,y`
    pub fn service_url<P>(&self, service: &str, points: &[P]) -> Result<String, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        if points.is_empty() {
            return Err(OsrmError::EmptyQuery);
        }

        let mut url = self.params.base_url();
        url.push('/');
        url.push_str(service);
        url.push_str("/v1/");
        url.push_str(&self.params.profile);
        url.push('/');

        for (i, point) in points.iter().enumerate() {
            let point: geo_types::Point = point.into();
            url.push_str(&format!("{},{}", point.x(), point.y()));

            if i < points.len() - 1 {
                url.push(';');
            }
        }

        Ok(url)
    }

    /// Fastest route through `points`, without alternatives and with the
    /// full geometry. `extra_args` is appended verbatim to the query string
    /// (e.g. `&geometries=geojson`).
    pub async fn route<P>(
        &self,
        points: &[P],
        extra_args: &str,
    ) -> Result<OsrmRouteResponse, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let mut url = self.service_url(OSRM_ROUTE_SERVICE, points)?;
        url.push('?');
        url.push_str(OSRM_ROUTE_ARGS);
        url.push_str(extra_args);

        self.get(url).await
    }

    /// Durations and distances between every pair of `points`.
    pub async fn table<P>(&self, points: &[P]) -> Result<OsrmTableResponse, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let mut url = self.service_url(OSRM_TABLE_SERVICE, points)?;
        url.push('?');
        url.push_str(OSRM_TABLE_ARGS);

        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, OsrmError> {
        debug!("OsrmClient: GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(OsrmError::Api { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::location::Location;

    use super::*;

    fn points() -> Vec<Location> {
        vec![Location::new(2.35, 48.85), Location::new(2.2945, 48.8584)]
    }

    #[test]
    fn test_table_url() {
        let client = OsrmClient::new(OsrmClientParams::default());

        let url = client.service_url(OSRM_TABLE_SERVICE, &points()).unwrap();

        assert_eq!(
            url,
            "http://0.0.0.0:5000/table/v1/car/2.35,48.85;2.2945,48.8584"
        );
    }

    #[test]
    fn test_url_without_port() {
        let client = OsrmClient::new(OsrmClientParams {
            host: "router.project-osrm.org".to_owned(),
            port: None,
            profile: "foot".to_owned(),
        });

        let url = client.service_url(OSRM_ROUTE_SERVICE, &points()).unwrap();

        assert_eq!(
            url,
            "http://router.project-osrm.org/route/v1/foot/2.35,48.85;2.2945,48.8584"
        );
    }

    #[test]
    fn test_empty_query() {
        let client = OsrmClient::new(OsrmClientParams::default());
        let result = client.service_url::<Location>(OSRM_TABLE_SERVICE, &[]);

        assert!(matches!(result, Err(OsrmError::EmptyQuery)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_returned() {
        let client = OsrmClient::new(OsrmClientParams {
            host: "127.0.0.1".to_owned(),
            port: Some(1),
            profile: "car".to_owned(),
        });

        let result = client.table(&points()).await;

        assert!(matches!(result, Err(OsrmError::Request(_))));
    }
}
