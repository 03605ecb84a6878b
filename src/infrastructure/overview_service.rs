use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{core::raw_msg::RawMsg, infrastructure::api::OverviewClient};

/// Fetch operations accepted by [`OverviewService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewOperation {
    Fetch { generation: u64 },
}

/// OverviewService owns the HTTP client and performs overview fetches in a
/// background task. Completions are delivered as raw messages whenever they
/// arrive; the update layer decides what is current and what is stale.
pub struct OverviewService {
    client: OverviewClient,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<OverviewOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewOverviewService = (
    mpsc::UnboundedSender<OverviewOperation>, // op_tx - fetches to run
    CancellationToken,                        // shutdown signal
    OverviewService,
);

impl OverviewService {
    /// Create a new OverviewService
    pub fn new(
        client: OverviewClient,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Result<NewOverviewService> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the OverviewService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            let result = self.run_service().await;
            if let Err(e) = result {
                log::error!("OverviewService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("OverviewService error: {e}")));
            }
        });
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                // Handle fetch operations
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op).await,
                        None => {
                            log::info!("OverviewService operation channel closed");
                            break;
                        }
                    }
                }

                // Check for termination signal
                _ = self.cancel_token.cancelled() => {
                    log::info!("OverviewService received cancellation signal");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run a single fetch and report its outcome as a raw message.
    async fn handle_operation(&mut self, op: OverviewOperation) {
        match op {
            OverviewOperation::Fetch { generation } => {
                log::debug!("Fetching overview (generation {generation})");
                match self.client.get_overview().await {
                    Ok(overview) => {
                        let _ = self.raw_tx.send(RawMsg::OverviewLoaded {
                            generation,
                            overview: Box::new(overview),
                        });
                    }
                    Err(e) => {
                        // Every failure cause collapses into one load
                        // failure; the cause only goes to the log.
                        log::error!("Overview fetch failed (generation {generation}): {e}");
                        let _ = self.raw_tx.send(RawMsg::OverviewFailed { generation });
                    }
                }
            }
        }
    }
}
