use crate::error::NotifyError;
use crate::sheets::Row;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Message {
    text: String,
}

/// Posts row summaries to a Slack incoming webhook.
pub struct SlackNotifier {
    webhook_url: String,
    client: Client,
}

impl SlackNotifier {
    pub fn new(webhook_url: &str) -> Self {
        Self {
            webhook_url: webhook_url.to_string(),
            client: Client::new(),
        }
    }

    /// Sends all rows as one bulleted message. With no rows there is no
    /// network call at all, just a notice on stdout.
    pub async fn notify(&self, rows: &[Row]) -> Result<(), NotifyError> {
        if rows.is_empty() {
            println!("No rows to send to Slack.");
            return Ok(());
        }

        let message = Message {
            text: format_rows(rows),
        };
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        println!("Sent {} rows to Slack successfully!", rows.len());
        Ok(())
    }
}

/// Renders rows as bullet lines joined with newlines. A one-cell row shows
/// its single cell; wider rows show the first two cells separated by an em
/// dash, and any further cells are dropped. Empty rows are skipped.
pub fn format_rows(rows: &[Row]) -> String {
    rows.iter()
        .filter_map(|row| match row.as_slice() {
            [] => None,
            [only] => Some(format!("- {}", only)),
            [first, second, ..] => Some(format!("- {} — {}", first, second)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
