//! Sends a single message through the FCM legacy endpoint.
//!
//! Usage:
//!   FCM_SERVER_KEY=<39-char server key> cargo run --example send -- <device-token>

use std::env;

use fcm_client::{FcmClient, FcmConfig, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = env::args()
        .nth(1)
        .ok_or("usage: send <device-token> (FCM_SERVER_KEY must be set)")?;

    let config = FcmConfig::from_env()?;
    let client = FcmClient::from_config(&config)?;

    let mut message = Message::new(token);
    message.time_to_live = 25;
    message.data.insert("title", "Title demo");
    message.data.insert("message", "Hello world!");
    message.data.insert("some-var", 1);

    let response = client.send(&message).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
