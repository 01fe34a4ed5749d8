use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::Notify;

/// Fires the abort signal on ctrl-c, or after `run_for_millis` when set.
pub(crate) fn listen_for_shutdown(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match run_for_millis {
            Some(time_to_live_millis) => {
                tokio::time::sleep(Duration::from_millis(time_to_live_millis)).await;
            }
            None => {
                if let Err(e) = signal::ctrl_c().await {
                    error!("Error while waiting for Ctrl+C: {}", e);
                }
                info!("Ctrl+C received. Sending stop signal...");
            }
        }
        notify.notify_one();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_shutdown_signal_with_timeout() {
        let notify = Arc::new(Notify::new());
        let handle = listen_for_shutdown(Arc::clone(&notify), Some(100));

        // Wait for the notify to be called
        let result = timeout(Duration::from_millis(300), notify.notified()).await;
        assert!(result.is_ok(), "Shutdown signal was not received in time");

        handle.await.unwrap();
    }
}
