use crate::config::Config;
use crate::error::RelayError;
use crate::gateway::ConnectivityClient;
use crate::notify::SlackNotifier;
use crate::sheets::SheetClient;

/// Row appended at the start of a run when the demo append is enabled.
pub const DEMO_ROW: [&str; 2] = ["Demo Name", "demo@example.com"];

/// Ties the sheet accessor and the notifier together into the
/// append → read → notify sequence.
pub struct Relay {
    sheets: SheetClient,
    notifier: SlackNotifier,
    append_demo_row: bool,
}

impl Relay {
    pub fn new(sheets: SheetClient, notifier: SlackNotifier, append_demo_row: bool) -> Self {
        Self {
            sheets,
            notifier,
            append_demo_row,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let gateway = ConnectivityClient::new(&config.alloy_api_key);
        let sheets = SheetClient::new(
            gateway,
            &config.connection_id,
            &config.sheet_id,
            &config.sheet_range,
        );
        let notifier = SlackNotifier::new(&config.slack_webhook_url);
        Self::new(sheets, notifier, config.append_demo_row)
    }

    /// Appends the demo row (when enabled), re-reads the full range and
    /// forwards whatever came back to Slack. The first failed step aborts
    /// the run.
    pub async fn run(&self) -> Result<(), RelayError> {
        if self.append_demo_row {
            let row: Vec<String> = DEMO_ROW.iter().map(|s| s.to_string()).collect();
            let resp = self.sheets.append_row(&row).await?;
            println!("Added new row: {}", resp);
        }

        let rows = self.sheets.read_rows().await?;
        println!("Read {} rows from Google Sheet.", rows.len());

        self.notifier.notify(&rows).await?;
        Ok(())
    }
}
