//! Wallet connection state and the sign-in/sign-out toggle.

use serde_json::Value;

use crate::config::{ELLIPSIS, TRUNCATE_LEN};
use crate::wallet::{RpcMethod, WalletError, WalletProvider};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    /// Empty while disconnected.
    pub wallet_address: String,
    pub provider_available: bool,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        !self.wallet_address.is_empty()
    }

    /// Text of the sign-in button.
    pub fn label(&self) -> String {
        if self.is_connected() {
            format!("Sign Out \n {}", truncate_display(&self.wallet_address))
        } else {
            "Sign In".to_string()
        }
    }
}

/// Shortens `input` to its first few characters followed by an ellipsis.
pub fn truncate_display(input: &str) -> String {
    match input.char_indices().nth(TRUNCATE_LEN) {
        Some((cut, _)) => format!("{}{}", &input[..cut], ELLIPSIS),
        None => input.to_string(),
    }
}

/// What the wallet reported when access was granted. Network and chain ids
/// are observed only.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectInfo {
    pub address: String,
    pub accounts: Vec<String>,
    pub network_id: Option<String>,
    pub chain_id: Option<String>,
}

/// Requests account access and collects the network diagnostics.
pub async fn connect<P>(provider: &P) -> Result<ConnectInfo, WalletError>
where
    P: WalletProvider + ?Sized,
{
    let reply = provider.request(RpcMethod::RequestAccounts, vec![]).await?;
    let accounts: Vec<String> = serde_json::from_value(reply)?;
    let address = accounts.first().cloned().ok_or(WalletError::NoAccounts)?;

    let network_id = observe(provider, RpcMethod::NetVersion).await;
    let chain_id = observe(provider, RpcMethod::ChainId).await;

    let info = ConnectInfo {
        address,
        accounts,
        network_id,
        chain_id,
    };
    tracing::info!(
        address = %info.address,
        accounts = ?info.accounts,
        network_id = info.network_id.as_deref().unwrap_or("unknown"),
        chain_id = info.chain_id.as_deref().unwrap_or("unknown"),
        "wallet connected"
    );
    Ok(info)
}

async fn observe<P>(provider: &P, method: RpcMethod) -> Option<String>
where
    P: WalletProvider + ?Sized,
{
    match provider.request(method, vec![]).await {
        Ok(Value::String(s)) => Some(s),
        Ok(Value::Null) => None,
        Ok(other) => Some(other.to_string()),
        Err(e) => {
            tracing::warn!("{} failed: {}", method, e);
            None
        }
    }
}

/// Change produced by one press of the sign-in button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Access granted; only the address changes.
    Connected(String),
    /// Local sign-out; the whole state resets.
    Disconnected,
}

impl ConnectionState {
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Connected(address) => self.wallet_address = address,
            Transition::Disconnected => *self = ConnectionState::default(),
        }
    }
}

/// Decides what one press of the sign-in button does.
///
/// Signing out is local and never touches the provider. On error the caller
/// keeps its current state.
pub async fn toggle_connection<P>(
    state: &ConnectionState,
    provider: &P,
) -> Result<Transition, WalletError>
where
    P: WalletProvider + ?Sized,
{
    if state.is_connected() {
        tracing::debug!("wallet disconnected");
        return Ok(Transition::Disconnected);
    }

    let info = connect(provider).await?;
    Ok(Transition::Connected(info.address))
}
