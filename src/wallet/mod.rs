pub mod injected;
#[cfg(test)]
pub mod mock;

pub use injected::InjectedProvider;

use futures::future::LocalBoxFuture;
use serde_json::Value;
use std::ops::Deref;
use std::rc::Rc;
use thiserror::Error;

use crate::config::DETECT_TIMEOUT_MS;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED: i64 = 4001;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    #[error("no wallet provider is available")]
    ProviderMissing,
    #[error("request rejected by the user ({code}): {message}")]
    Rejected { code: i64, message: String },
    #[error("wallet RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("wallet returned no accounts")]
    NoAccounts,
    #[error("malformed wallet response: {0}")]
    Malformed(String),
    #[error("wallet bridge error: {0}")]
    Bridge(String),
}

impl WalletError {
    /// Maps a thrown provider error onto the matching variant.
    pub fn from_rpc(code: i64, message: String) -> Self {
        if code == USER_REJECTED {
            WalletError::Rejected { code, message }
        } else {
            WalletError::Rpc { code, message }
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Malformed(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    RequestAccounts,
    NetVersion,
    ChainId,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::RequestAccounts => "eth_requestAccounts",
            RpcMethod::NetVersion => "net_version",
            RpcMethod::ChainId => "eth_chainId",
        }
    }
}

impl std::fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the provider presence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// Never prompt or print anything when no provider is found.
    pub silent: bool,
    /// How long to wait for a provider injected after page load.
    pub timeout_ms: u32,
    /// Only accept a provider that identifies itself as MetaMask.
    pub must_be_metamask: bool,
}

impl DetectOptions {
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            silent: false,
            timeout_ms: DETECT_TIMEOUT_MS,
            must_be_metamask: false,
        }
    }
}

/// A request-based wallet provider.
///
/// Futures are local because the browser provider lives on the UI thread.
pub trait WalletProvider {
    fn detect(&self, options: DetectOptions) -> LocalBoxFuture<'_, bool>;

    fn request(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
    ) -> LocalBoxFuture<'_, Result<Value, WalletError>>;
}

/// Shared handle to the provider, handed to components through context.
#[derive(Clone)]
pub struct WalletHandle(Rc<dyn WalletProvider>);

impl WalletHandle {
    pub fn new(provider: impl WalletProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl Deref for WalletHandle {
    type Target = dyn WalletProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_method_wire_names() {
        assert_eq!(RpcMethod::RequestAccounts.as_str(), "eth_requestAccounts");
        assert_eq!(RpcMethod::NetVersion.to_string(), "net_version");
        assert_eq!(RpcMethod::ChainId.as_str(), "eth_chainId");
    }

    #[test]
    fn test_from_rpc_distinguishes_user_rejection() {
        assert!(matches!(
            WalletError::from_rpc(4001, "User rejected the request.".into()),
            WalletError::Rejected { code: 4001, .. }
        ));
        assert!(matches!(
            WalletError::from_rpc(-32002, "Request already pending".into()),
            WalletError::Rpc { code: -32002, .. }
        ));
    }

    #[test]
    fn test_silent_detect_options() {
        let options = DetectOptions::silent();
        assert!(options.silent);
        assert!(!options.must_be_metamask);
        assert_eq!(options.timeout_ms, DETECT_TIMEOUT_MS);
        assert!(!DetectOptions::default().silent);
    }
}
