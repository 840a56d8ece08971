use crate::error::GatewayError;
use crate::gateway::ConnectivityClient;
use serde_json::{json, Value};

/// One spreadsheet row as returned by the values API: an ordered list of
/// string cells, typically one or two of them.
pub type Row = Vec<String>;

/// Reads and appends rows in a fixed spreadsheet range, going through the
/// connectivity gateway. Gateway errors propagate untranslated.
pub struct SheetClient {
    gateway: ConnectivityClient,
    connection_id: String,
    sheet_id: String,
    range: String,
}

impl SheetClient {
    pub fn new(gateway: ConnectivityClient, connection_id: &str, sheet_id: &str, range: &str) -> Self {
        Self {
            gateway,
            connection_id: connection_id.to_string(),
            sheet_id: sheet_id.to_string(),
            range: range.to_string(),
        }
    }

    /// Reads every row in the configured range. A response without a usable
    /// `values` field yields an empty list, not an error.
    pub async fn read_rows(&self) -> Result<Vec<Row>, GatewayError> {
        let path = format!("/v4/spreadsheets/{}/values/{}", self.sheet_id, self.range);
        let resp = self
            .gateway
            .call(&self.connection_id, "get", &path, None, None)
            .await?;

        let rows = resp
            .get("values")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        Ok(rows)
    }

    /// Appends one row after the configured range and returns the raw
    /// gateway response for the caller to log.
    pub async fn append_row(&self, row: &[String]) -> Result<Value, GatewayError> {
        let path = format!(
            "/v4/spreadsheets/{}/values/{}:append",
            self.sheet_id, self.range
        );
        let body = json!({
            "values": [row],
            "valueInputOption": "RAW",
        });

        self.gateway
            .call(&self.connection_id, "post", &path, Some(body), None)
            .await
    }
}
