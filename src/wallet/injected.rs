//! Provider backed by the `window.ethereum` object a wallet extension injects.
//!
//! Calls cross into the page through `document::eval`; each script resolves
//! to a JSON value that is decoded on the Rust side.

use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};
use serde::Deserialize;
use serde_json::Value;

use super::{DetectOptions, RpcMethod, WalletError, WalletProvider};

/// JSON-RPC "internal error", used when a thrown error carries no usable code.
const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, Default, Clone, Copy)]
pub struct InjectedProvider;

impl InjectedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl WalletProvider for InjectedProvider {
    fn detect(&self, options: DetectOptions) -> LocalBoxFuture<'_, bool> {
        async move {
            match document::eval(&detect_script(&options)).join::<bool>().await {
                Ok(found) => found,
                Err(e) => {
                    tracing::debug!("wallet probe failed: {}", e);
                    false
                }
            }
        }
        .boxed_local()
    }

    fn request(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
    ) -> LocalBoxFuture<'_, Result<Value, WalletError>> {
        async move {
            let script = request_script(method, &params)?;
            let reply = document::eval(&script)
                .join::<Value>()
                .await
                .map_err(|e| WalletError::Bridge(e.to_string()))?;
            decode_reply(reply)
        }
        .boxed_local()
    }
}

/// Script resolving to `true` once a provider is present, or `false` after
/// the timeout. Late injection is announced with `ethereum#initialized`.
fn detect_script(options: &DetectOptions) -> String {
    format!(
        r#"
const silent = {silent};
const mustBeMetaMask = {must_be_metamask};
const timeout = {timeout};
return await new Promise((resolve) => {{
    let handled = false;
    const handle = () => {{
        if (handled) {{ return; }}
        handled = true;
        window.removeEventListener("ethereum#initialized", handle);
        const provider = window.ethereum;
        if (provider && (!mustBeMetaMask || provider.isMetaMask)) {{
            resolve(true);
            return;
        }}
        if (!silent) {{
            console.error(mustBeMetaMask && provider
                ? "Non-MetaMask window.ethereum detected."
                : "Unable to detect window.ethereum.");
        }}
        resolve(false);
    }};
    if (window.ethereum) {{
        handle();
    }} else {{
        window.addEventListener("ethereum#initialized", handle, {{ once: true }});
        setTimeout(handle, timeout);
    }}
}});
"#,
        silent = options.silent,
        must_be_metamask = options.must_be_metamask,
        timeout = options.timeout_ms,
    )
}

/// Script forwarding one request to the provider. Method and params are
/// embedded as JSON literals.
fn request_script(method: RpcMethod, params: &[Value]) -> Result<String, WalletError> {
    let method = serde_json::to_string(method.as_str())?;
    let params = serde_json::to_string(params)?;
    Ok(format!(
        r#"
const provider = window.ethereum;
if (!provider) {{ return "missing"; }}
try {{
    const result = await provider.request({{ method: {method}, params: {params} }});
    return {{ ok: result ?? null }};
}} catch (e) {{
    const code = Number.isInteger(e && e.code) ? e.code : {INTERNAL_ERROR};
    const message = String((e && e.message) ?? e);
    return {{ error: {{ code, message }} }};
}}
"#
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Reply {
    Ok(Value),
    Error { code: i64, message: String },
    Missing,
}

fn decode_reply(reply: Value) -> Result<Value, WalletError> {
    match serde_json::from_value::<Reply>(reply)? {
        Reply::Ok(value) => Ok(value),
        Reply::Error { code, message } => Err(WalletError::from_rpc(code, message)),
        Reply::Missing => Err(WalletError::ProviderMissing),
    }
}
