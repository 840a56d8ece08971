use sheet_relay::{Config, Relay};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Failures are reported on stdout; the process still exits 0.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    let relay = Relay::from_config(&config);
    if let Err(e) = relay.run().await {
        println!("Error: {}", e);
    }
}
