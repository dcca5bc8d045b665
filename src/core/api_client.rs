use crate::camera_models::{
    fill_defaults, flatten_for_wire, Camera, CameraSettings, DefaultCameraConfig,
    DefaultCameraConfigWire,
};
use crate::errors::AppError;
use log::debug;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

/// Per-camera settings arrive wrapped in an envelope object.
#[derive(Debug, Deserialize)]
struct CameraSettingsEnvelope {
    settings: CameraSettings,
}

/// Typed client for the grabber service's HTTP API.
///
/// Each method performs exactly one outbound request and maps any non-2xx
/// status, connection failure, or undecodable body to `AppError::Network`.
/// There are no retries and no timeouts at this layer; recovery belongs to
/// the caller.
#[derive(Debug)]
pub struct GrabberClient {
    http: Client,
    base_url: Url,
}

impl GrabberClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        Ok(GrabberClient {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Config(format!("Invalid endpoint path '{}': {}", path, e)))
    }

    /// GET `/default_camera_settings`, normalized so that explicit nulls and
    /// missing keys both read back as unset fields.
    pub async fn fetch_default_config(&self) -> Result<DefaultCameraConfig, AppError> {
        let url = self.endpoint("/default_camera_settings")?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch default config: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("Failed to fetch default config".to_string()));
        }
        let wire: DefaultCameraConfigWire = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to decode default config: {}", e)))?;
        Ok(fill_defaults(wire))
    }

    /// POST `/default_camera_settings`. The record is flattened first: every
    /// field is sent, unset ones as explicit `null`.
    pub async fn save_default_config(&self, config: &DefaultCameraConfig) -> Result<(), AppError> {
        let url = self.endpoint("/default_camera_settings")?;
        let wire = flatten_for_wire(config);
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(&wire)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to save default config: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("Failed to save default config".to_string()));
        }
        Ok(())
    }

    /// GET `/available_gige_cameras`.
    pub async fn fetch_available_cameras(&self) -> Result<Vec<Camera>, AppError> {
        let url = self.endpoint("/available_gige_cameras")?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch cameras: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("Failed to fetch cameras".to_string()));
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to decode camera list: {}", e)))
    }

    /// GET `/camera-settings/{ip}`. Returns the envelope's `settings` field
    /// as-is: no normalization, so callers still see which keys the service
    /// left out.
    pub async fn fetch_camera_settings(&self, ip_address: &str) -> Result<CameraSettings, AppError> {
        let url = self.endpoint(&format!("/camera-settings/{}", ip_address))?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch camera settings: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("Failed to fetch camera settings".to_string()));
        }
        let envelope: CameraSettingsEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to decode camera settings: {}", e)))?;
        Ok(envelope.settings)
    }

    /// POST `/camera-settings/{ip}`. Unlike the default-config write, the
    /// settings go out verbatim: unset fields are omitted, explicit nulls
    /// are kept, so a partial record is a partial update.
    pub async fn save_camera_settings(
        &self,
        ip_address: &str,
        settings: &CameraSettings,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&format!("/camera-settings/{}", ip_address))?;
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(settings)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to save camera settings: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("Failed to save camera settings".to_string()));
        }
        Ok(())
    }

    /// GET `/config`: the service's raw configuration document, no shape
    /// contract.
    pub async fn fetch_config(&self) -> Result<Value, AppError> {
        let url = self.endpoint("/config")?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("network error: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network("network error".to_string()));
        }
        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("network error: {}", e)))
    }

    /// POST `/config` with the document verbatim. Resolves to `true` so the
    /// caller can chain on an explicit acknowledgement.
    pub async fn save_config(&self, data: &Value) -> Result<bool, AppError> {
        let url = self.endpoint("/config")?;
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(data)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("server error: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "server error: {}",
                response.status().as_u16()
            )));
        }
        Ok(true)
    }
}
