//! Bot service - Gateway receive loop and shutdown

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::errors::{BotError, PlatformError};
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::ChatPlatformClient;
use crate::infrastructure::config::Config;

/// Capacity of the gateway -> dispatcher message channel
const EVENT_BUFFER: usize = 64;

/// Connect `client`, dispatch every inbound message on its own task and
/// close the connection once `shutdown` resolves.
///
/// Returns `Ok(())` only when stopped by `shutdown`. If the gateway drops
/// its event stream first, the connection is closed and an error returned.
pub async fn serve<F>(config: Config, client: Arc<dyn ChatPlatformClient>, shutdown: F) -> Result<(), BotError>
where
    F: Future<Output = ()>,
{
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
    let info = client.connect(tx).await?;

    if let Err(e) = client.set_presence(&config.discord.status).await {
        tracing::warn!("Failed to set activity: {}", e);
    }

    let dispatcher = Arc::new(MessageDispatcher::new(Arc::new(config.bot), client.clone(), info.id));
    tracing::info!("Bot connected as {}! Press Ctrl-C to shutdown", info.name);

    tokio::pin!(shutdown);

    let result: Result<(), BotError> = loop {
        tokio::select! {
            message = rx.recv() => {
                let Some(message) = message else {
                    tracing::error!("Gateway event stream ended");
                    break Err(PlatformError::Network("gateway event stream ended".to_string()).into());
                };
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    dispatcher.dispatch(message).await;
                });
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received");
                break Ok(());
            }
        }
    };

    client.close().await;
    result
}
