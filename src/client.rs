//! REST client for the employee backend.

use crate::config::ApiConfig;
use crate::error::{Result, StoreError};
use crate::models::{Employee, EmployeePayload};
use crate::store::EmployeeStore;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Envelope every backend endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(StoreError::Rejected { message: self.message });
        }
        self.data.ok_or(StoreError::MissingData)
    }

    /// Check success, keeping the payload if one was sent.
    pub fn into_optional(self) -> Result<Option<T>> {
        if !self.success {
            return Err(StoreError::Rejected { message: self.message });
        }
        Ok(self.data)
    }

    /// Check success, ignoring any payload.
    pub fn into_unit(self) -> Result<()> {
        if !self.success {
            return Err(StoreError::Rejected { message: self.message });
        }
        Ok(())
    }
}

/// Employee backend HTTP client.
///
/// Talks to a collection resource such as `https://host/api/Employee`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client instance.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Collection URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{base}/{id}", base = self.base_url)
    }
}

/// Decode an envelope, turning error statuses into rejections.
///
/// Error bodies that carry an envelope forward its message.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<ApiResponse<T>>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
        .ok()
        .and_then(|envelope| envelope.message)
        .or_else(|| status.canonical_reason().map(|reason| format!("{} {reason}", status.as_u16())));

    tracing::warn!("Backend returned {}: {:?}", status, message);
    Err(StoreError::Rejected { message })
}

impl EmployeeStore for ApiClient {
    async fn list(&self) -> Result<Vec<Employee>> {
        tracing::debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;
        read_envelope::<Vec<Employee>>(response).await?.into_data()
    }

    async fn get(&self, id: i64) -> Result<Employee> {
        let url = self.item_url(id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_envelope::<Employee>(response).await?.into_data()
    }

    async fn create(&self, payload: &EmployeePayload) -> Result<Option<Employee>> {
        tracing::debug!("POST {}", self.base_url);
        let response = self.client.post(&self.base_url).json(payload).send().await?;
        read_envelope::<Employee>(response).await?.into_optional()
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<Option<Employee>> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(payload).send().await?;
        read_envelope::<Employee>(response).await?.into_optional()
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        read_envelope::<serde_json::Value>(response).await?.into_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new(&config("http://localhost:5000/api/Employee/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api/Employee");
        assert_eq!(client.item_url(12), "http://localhost:5000/api/Employee/12");
    }

    #[test]
    fn test_envelope_success() {
        let json = r#"{"success": true, "message": "ok", "data": [{"id": 1, "name": "Ann"}]}"#;
        let envelope: ApiResponse<Vec<Employee>> = serde_json::from_str(json).unwrap();
        let employees = envelope.into_data().unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Ann");
    }

    #[test]
    fn test_envelope_rejection_keeps_message() {
        let json = r#"{"success": false, "message": "Employee not found", "data": null}"#;
        let envelope: ApiResponse<Employee> = serde_json::from_str(json).unwrap();
        let err = envelope.into_data().unwrap_err();

        assert_eq!(err.server_message(), Some("Employee not found"));
    }

    #[test]
    fn test_envelope_success_without_data() {
        let envelope: ApiResponse<Employee> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(StoreError::MissingData)));
    }

    #[test]
    fn test_save_envelope_without_data_is_success() {
        let json = r#"{"success": true, "message": "Employee added"}"#;
        let envelope: ApiResponse<Employee> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_optional().unwrap().is_none());

        let json = r#"{"success": false, "message": "Duplicate employee"}"#;
        let envelope: ApiResponse<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_optional().unwrap_err().server_message(), Some("Duplicate employee"));
    }

    #[test]
    fn test_list_envelope_with_decimal_salary() {
        let json = r#"{"success": true, "data": [
            {"id": 1, "name": "Ann", "salary": 45000.00},
            {"id": 2, "name": "Ben", "salary": 50000}
        ]}"#;
        let envelope: ApiResponse<Vec<Employee>> = serde_json::from_str(json).unwrap();
        let employees = envelope.into_data().unwrap();

        assert_eq!(employees[0].salary, 45000);
        assert_eq!(employees[1].salary, 50000);
    }

    #[test]
    fn test_delete_envelope_ignores_data() {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "Deleted", "data": null}"#).unwrap();
        assert!(envelope.into_unit().is_ok());

        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(envelope.into_unit().unwrap_err().server_message(), Some("nope"));
    }
}
