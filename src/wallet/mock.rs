use futures::future::{FutureExt, LocalBoxFuture};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

use super::{DetectOptions, RpcMethod, WalletError, WalletProvider};

/// Scripted provider that records every call it receives.
#[derive(Clone)]
pub struct MockProvider {
    pub present: bool,
    pub accounts: Result<Vec<String>, WalletError>,
    pub network_id: Option<Value>,
    pub chain_id: Option<Value>,
    log: Rc<RefCell<CallLog>>,
}

#[derive(Debug, Default)]
pub struct CallLog {
    pub probes: Vec<DetectOptions>,
    pub requests: Vec<RpcMethod>,
}

impl MockProvider {
    /// A provider that approves and returns the given accounts.
    pub fn approving(accounts: &[&str]) -> Self {
        Self {
            present: true,
            accounts: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            network_id: Some(json!("1")),
            chain_id: Some(json!("0x1")),
            log: Rc::default(),
        }
    }

    pub fn failing(err: WalletError) -> Self {
        Self {
            present: true,
            accounts: Err(err),
            network_id: None,
            chain_id: None,
            log: Rc::default(),
        }
    }

    pub fn absent() -> Self {
        Self::failing(WalletError::ProviderMissing).with_presence(false)
    }

    pub fn with_presence(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    pub fn probes(&self) -> Vec<DetectOptions> {
        self.log.borrow().probes.clone()
    }

    pub fn requests(&self) -> Vec<RpcMethod> {
        self.log.borrow().requests.clone()
    }
}

impl WalletProvider for MockProvider {
    fn detect(&self, options: DetectOptions) -> LocalBoxFuture<'_, bool> {
        self.log.borrow_mut().probes.push(options);
        let present = self.present;
        async move { present }.boxed_local()
    }

    fn request(
        &self,
        method: RpcMethod,
        _params: Vec<Value>,
    ) -> LocalBoxFuture<'_, Result<Value, WalletError>> {
        self.log.borrow_mut().requests.push(method);
        let reply = match method {
            RpcMethod::RequestAccounts => self.accounts.clone().map(|a| json!(a)),
            RpcMethod::NetVersion => self
                .network_id
                .clone()
                .ok_or_else(|| WalletError::from_rpc(-32601, "method not supported".into())),
            RpcMethod::ChainId => self
                .chain_id
                .clone()
                .ok_or_else(|| WalletError::from_rpc(-32601, "method not supported".into())),
        };
        async move { reply }.boxed_local()
    }
}
