// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the [`Transport`] trait.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::wire::{ControlRequest, DeviceList, Envelope, RawStateData};
use super::Transport;
use crate::command::Command;
use crate::config::ApiConfig;
use crate::descriptor::DeviceDescriptor;
use crate::error::{AuthError, Error, Result, TransportError};
use crate::state::StateProperty;

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "Govee-API-Key";

const DEVICES_PATH: &str = "/v1/devices";
const STATE_PATH: &str = "/v1/devices/state";
const CONTROL_PATH: &str = "/v1/devices/control";

/// HTTP client for the Govee developer API.
///
/// Stateless: each operation is an independent request carrying the API
/// key header. The base URL comes from [`ApiConfig`], so tests can point
/// the client at a local mock server.
///
/// # Examples
///
/// ```no_run
/// use govee_lib::protocol::{GoveeClient, Transport};
/// use govee_lib::ApiConfig;
///
/// # async fn example() -> govee_lib::Result<()> {
/// let client = GoveeClient::new(ApiConfig::new("my-api-key"))?;
/// let devices = client.list_devices().await?;
/// println!("found {} devices", devices.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoveeClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl GoveeClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn new(config: ApiConfig) -> std::result::Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            api_key: config.api_key().to_string(),
            client,
        })
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn state_url(&self, device_id: &str, model: &str) -> String {
        // Device ids are MAC-like and contain ':', so encode explicitly.
        format!(
            "{}{}?device={}&model={}",
            self.base_url,
            STATE_PATH,
            urlencoding::encode(device_id),
            urlencoding::encode(model),
        )
    }

    /// Reads a 2xx response body, mapping credential rejection and other
    /// unexpected statuses to their error kinds.
    async fn success_body(response: Response) -> Result<String> {
        let status = response.status();
        if is_auth_failure(status) {
            return Err(Error::Auth(AuthError::Rejected {
                status: status.as_u16(),
            }));
        }

        let body = response.text().await.map_err(TransportError::Http)?;
        if !status.is_success() {
            return Err(Error::Transport(TransportError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }));
        }

        tracing::debug!(body = %body, "received API response");
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "sending API request");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let body = Self::success_body(response).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(TransportError::Json)?;
        Ok(envelope.data)
    }
}

impl Transport for GoveeClient {
    async fn list_devices(&self) -> Result<Vec<DeviceDescriptor>> {
        let url = format!("{}{DEVICES_PATH}", self.base_url);
        let list: DeviceList = self.get_json(&url).await?;
        Ok(list.devices.into_iter().map(Into::into).collect())
    }

    async fn fetch_state(&self, device_id: &str, model: &str) -> Result<Vec<StateProperty>> {
        let url = self.state_url(device_id, model);
        let data: RawStateData = self.get_json(&url).await?;
        Ok(data.into_properties())
    }

    async fn send_command(&self, device_id: &str, model: &str, command: &Command) -> Result<bool> {
        let url = format!("{}{CONTROL_PATH}", self.base_url);
        let request = ControlRequest {
            device: device_id,
            model,
            cmd: command,
        };

        tracing::debug!(url = %url, command = %command.kind(), "sending control command");

        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        if is_auth_failure(status) {
            return Err(Error::Auth(AuthError::Rejected {
                status: status.as_u16(),
            }));
        }
        if status.is_success() {
            return Ok(true);
        }

        // Vendor-side rejection is a boolean failure, not an error.
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "command rejected by vendor");
        Ok(false)
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_url_encodes_query_values() {
        let config = ApiConfig::new("key").with_base_url("http://localhost:9000");
        let client = GoveeClient::new(config).unwrap();

        let url = client.state_url("99:E5:A4:C1", "H6159");
        assert_eq!(
            url,
            "http://localhost:9000/v1/devices/state?device=99%3AE5%3AA4%3AC1&model=H6159"
        );
    }

    #[test]
    fn auth_failure_statuses() {
        assert!(is_auth_failure(StatusCode::UNAUTHORIZED));
        assert!(is_auth_failure(StatusCode::FORBIDDEN));
        assert!(!is_auth_failure(StatusCode::BAD_REQUEST));
        assert!(!is_auth_failure(StatusCode::OK));
    }
}
