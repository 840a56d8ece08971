pub mod config;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod relay;
pub mod sheets;

// Re-export the main components
pub use config::Config;
pub use error::{GatewayError, NotifyError, RelayError};
pub use gateway::ConnectivityClient;
pub use notify::SlackNotifier;
pub use relay::Relay;
pub use sheets::{Row, SheetClient};
