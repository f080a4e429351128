use reqwest::Client;

use crate::clients::TravelEstimator;
use crate::error::ApiError;
use crate::models::travel::{DistanceMatrixResponse, TravelEstimate};

const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Client for the mapping service's distance-matrix API.
pub struct DistanceMatrixClient {
    client: Client,
    api_key: String,
}

impl DistanceMatrixClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

impl TravelEstimator for DistanceMatrixClient {
    async fn estimate(&self, origin: &str, destination: &str) -> Result<TravelEstimate, ApiError> {
        let response: DistanceMatrixResponse = self
            .client
            .get(DISTANCE_MATRIX_URL)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_estimate()
    }
}
