use dioxus::prelude::*;

use crate::connection::{toggle_connection, ConnectionState};
use crate::wallet::{DetectOptions, WalletError, WalletHandle};

/// Connection state of one mounted bar plus what its toggle needs.
#[derive(Clone)]
pub struct WalletConnection {
    pub state: Signal<ConnectionState>,
    wallet: WalletHandle,
    on_error: Option<EventHandler<WalletError>>,
}

/// Owns the connection signal and runs the silent probe once per mount.
pub fn use_wallet_connection(on_error: Option<EventHandler<WalletError>>) -> WalletConnection {
    let wallet = use_context::<WalletHandle>();
    let mut state = use_signal(ConnectionState::default);

    let probe = wallet.clone();
    use_future(move || {
        let probe = probe.clone();
        async move {
            let found = probe.detect(DetectOptions::silent()).await;
            tracing::debug!("wallet provider detected: {}", found);
            state.write().provider_available = found;
        }
    });

    WalletConnection {
        state,
        wallet,
        on_error,
    }
}

impl WalletConnection {
    /// One press of the sign-in button. The result is applied to the live
    /// signal, so a probe finishing meanwhile is not overwritten.
    pub async fn toggle(mut self) {
        let current = self.state.peek().clone();
        match toggle_connection(&current, &*self.wallet).await {
            Ok(transition) => self.state.write().apply(transition),
            Err(e) => {
                tracing::warn!("wallet connect failed: {}", e);
                if let Some(handler) = self.on_error {
                    handler.call(e);
                }
            }
        }
    }
}
