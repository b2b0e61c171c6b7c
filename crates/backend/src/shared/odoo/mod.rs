pub mod error;
pub mod records;

use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::config::{OdooConfig, OdooTarget};
use error::OdooError;

/// JSON-RPC client for Odoo's external API.
///
/// One instance is bound to one upstream database; the API key is read
/// from the environment at construction time, i.e. per request.
pub struct OdooClient {
    client: reqwest::Client,
    endpoint: String,
    database: String,
    uid: i64,
    api_key: String,
}

impl OdooClient {
    pub fn for_target(odoo: &OdooConfig, target: &OdooTarget) -> Result<Self, OdooError> {
        let api_key =
            std::env::var(&target.api_key_env).map_err(|_| OdooError::MissingApiKey {
                var: target.api_key_env.clone(),
            })?;

        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(odoo.timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: format!("{}/jsonrpc", odoo.url.trim_end_matches('/')),
            database: target.database.clone(),
            uid: odoo.uid,
            api_key,
        })
    }

    /// Call a model method through the `execute_kw` envelope.
    ///
    /// `args` is the positional argument list after the credentials
    /// (domain for `search_read`, id list for `read`), `options` the
    /// trailing keyword map (fields, limit, order).
    pub async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Value,
        options: Value,
    ) -> Result<Value, OdooError> {
        let request_id: u32 = rand::thread_rng().gen_range(0..1000);
        let body = json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "service": "object",
                "method": "execute_kw",
                "args": [self.database, self.uid, self.api_key, model, method, args, options],
            },
            "id": request_id,
        });

        tracing::debug!("Odoo RPC: {}.{} via {}", model, method, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Odoo RPC failed: HTTP {} for {}.{}", status, model, method);
            return Err(OdooError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RpcEnvelope = response.json().await?;
        envelope.into_result()
    }

    /// `search_read` on a model with a domain filter
    pub async fn search_read(
        &self,
        model: &str,
        domain: Value,
        options: Value,
    ) -> Result<Value, OdooError> {
        self.execute_kw(model, "search_read", json!([domain]), options)
            .await
    }

    /// `read` specific record ids
    pub async fn read(
        &self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Value, OdooError> {
        self.execute_kw(model, "read", json!([ids]), json!({ "fields": fields }))
            .await
    }
}

/// Response envelope: `{result}` on success, `{error}` on failure
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    data: Option<RpcErrorData>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorData {
    message: Option<String>,
}

impl RpcEnvelope {
    /// A missing result on a non-error envelope is an empty record set.
    fn into_result(self) -> Result<Value, OdooError> {
        if let Some(error) = self.error {
            let message = error
                .data
                .and_then(|data| data.message)
                .unwrap_or_else(|| "Odoo API error".to_string());
            return Err(OdooError::Protocol { message });
        }
        Ok(self.result.unwrap_or_else(|| Value::Array(Vec::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_surfaces_upstream_message() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "error": { "data": { "message": "boom" } }
        }))
        .unwrap();

        match envelope.into_result() {
            Err(OdooError::Protocol { message }) => assert_eq!(message, "boom"),
            _ => panic!("expected protocol error"),
        }
    }

    #[test]
    fn test_error_envelope_without_message() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "error": {}
        }))
        .unwrap();

        match envelope.into_result() {
            Err(OdooError::Protocol { message }) => assert_eq!(message, "Odoo API error"),
            _ => panic!("expected protocol error"),
        }
    }

    #[test]
    fn test_success_envelope() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [{"id": 5}]
        }))
        .unwrap();
        let result = envelope.into_result().unwrap();
        assert_eq!(result[0]["id"], 5);
    }

    #[test]
    fn test_empty_envelope_is_empty_record_set() {
        let envelope: RpcEnvelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(envelope.into_result().unwrap(), json!([]));
    }
}
