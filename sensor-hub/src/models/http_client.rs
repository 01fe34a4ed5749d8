use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

use crate::models::errors::HubError;

const CLIENT_TIMEOUT_DEFAULT: u64 = 5;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: String) -> Result<Self, HubError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_DEFAULT))
            .build()
            .map_err(|e| HubError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value, HubError> {
        // Example of data returned by the handset for
        // /get?prox_time=2.04&prox=2.04|prox_time :
        // {"buffer":{"prox":{"buffer":[5.0,5.0,0.0],"size":0,"updateMode":"partial"},
        //            "prox_time":{"buffer":[2.5,3.0,3.5],"size":0,"updateMode":"partial"}},
        //  "status":{"measuring":true,"session":"11114880","timedRun":false}}
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HubError::FetchData(e.to_string()))?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| HubError::FetchData(e.to_string()))?;
        Ok(json)
    }
}
