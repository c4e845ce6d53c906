use dioxus::prelude::*;
use duels_api::prelude::*;
use futures::StreamExt;

use crate::WalletState;

use super::{alert, BrowserTimer, DuelsClient, QueryClient};

/// One write operation and its lifecycle.
///
/// Each call site owns its own handle, so creating a duel and joining one
/// never block each other.
#[derive(Clone, Copy)]
pub struct WriteHandle {
    status: Signal<WriteStatus>,
    queue: Coroutine<WriteCall>,
}

impl WriteHandle {
    pub fn status(&self) -> WriteStatus {
        self.status.read().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.status.read().is_busy()
    }

    /// Starts `call` unless this operation is already in flight.
    pub fn submit(&self, call: WriteCall) {
        let mut status = self.status;
        if let Err(e) = status.write().begin() {
            tracing::warn!(%call, "write refused while busy");
            alert(&e.to_string());
            return;
        }
        self.queue.send(call);
    }
}

pub fn use_write() -> WriteHandle {
    let mut status = use_signal(WriteStatus::default);
    let client = use_context::<DuelsClient>();
    let wallet = use_context::<Signal<WalletState>>();
    let query = use_context::<QueryClient>();

    let queue = use_coroutine(move |mut rx: UnboundedReceiver<WriteCall>| {
        let client = client.clone();
        async move {
            while let Some(call) = rx.next().await {
                let from = wallet.peek().account();
                let result = client
                    .submit(from, &call, &BrowserTimer, |hash| {
                        tracing::info!(?hash, %call, "transaction submitted");
                        status.write().submitted(hash);
                    })
                    .await;
                status.write().finish(result.clone());

                match result {
                    Ok(_) => {
                        let client = client.clone();
                        spawn(async move {
                            let rules = client.settle(&call, &BrowserTimer).await;
                            query.invalidate(&rules);
                        });
                    }
                    Err(e) => {
                        tracing::error!(%call, error = %e, "write failed");
                        alert(&e.to_string());
                    }
                }
            }
        }
    });

    WriteHandle { status, queue }
}
