use duels_api::prelude::*;
use serde_json::Value;

/// The EIP-1193 provider a browser wallet injects as `window.ethereum`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedWallet;

impl Transport for InjectedWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        tracing::debug!(method, "wallet request");
        provider_request(method, &params).await
    }
}

#[cfg(feature = "web")]
async fn provider_request(method: &str, params: &Value) -> Result<Value, ClientError> {
    use js_sys::{Object, Promise, Reflect, JSON};
    use wasm_bindgen::prelude::*;

    let ethereum = provider().map_err(ClientError::Transport)?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(|_| ClientError::Transport("Failed to set method".to_string()))?;
    let params = JSON::parse(&params.to_string())
        .map_err(|e| ClientError::Transport(format!("Invalid params: {:?}", e)))?;
    Reflect::set(&args, &JsValue::from_str("params"), &params)
        .map_err(|_| ClientError::Transport("Failed to set params".to_string()))?;

    let request_fn = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(|_| ClientError::Transport("No request method".to_string()))?;
    let request_fn: js_sys::Function = request_fn
        .dyn_into()
        .map_err(|_| ClientError::Transport("request is not a function".to_string()))?;

    let promise = request_fn
        .call1(&ethereum, &args.into())
        .map_err(provider_error)?;
    let promise: Promise = promise
        .dyn_into()
        .map_err(|_| ClientError::Transport("Not a promise".to_string()))?;

    let result = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(provider_error)?;

    js_to_json(&result).map_err(ClientError::Transport)
}

#[cfg(not(feature = "web"))]
async fn provider_request(_method: &str, _params: &Value) -> Result<Value, ClientError> {
    Err(ClientError::Transport(
        "Browser wallet only available in web mode".to_string(),
    ))
}

#[cfg(feature = "web")]
fn provider() -> Result<wasm_bindgen::JsValue, String> {
    use js_sys::Reflect;
    use wasm_bindgen::prelude::*;

    let window = web_sys::window().ok_or("No window")?;
    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| "Wallet not found")?;
    if ethereum.is_undefined() {
        return Err("No Ethereum wallet found. Please install MetaMask and refresh.".to_string());
    }
    Ok(ethereum)
}

/// EIP-1193 rejections carry `code` and `message`.
#[cfg(feature = "web")]
fn provider_error(error: wasm_bindgen::JsValue) -> ClientError {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let code = Reflect::get(&error, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64());
    let message = Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error));
    match code {
        Some(code) => ClientError::from_rpc(code as i64, message),
        None => ClientError::Transport(message),
    }
}

#[cfg(feature = "web")]
fn js_to_json(value: &wasm_bindgen::JsValue) -> Result<Value, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(value)
        .map_err(|e| format!("Unserializable wallet response: {:?}", e))?;
    let text = String::from(text);
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Wallet notifications the app follows.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletEvent {
    AccountsChanged(Vec<Address>),
    ChainChanged(u64),
}

/// Subscribes `handler` to `accountsChanged` and `chainChanged` for the
/// lifetime of the page.
#[cfg(feature = "web")]
pub fn listen(handler: impl FnMut(WalletEvent) + 'static) -> Result<(), String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Reflect;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;

    let ethereum = provider()?;
    let on_fn = Reflect::get(&ethereum, &JsValue::from_str("on"))
        .map_err(|_| "No on method")?;
    let on_fn: js_sys::Function = on_fn.dyn_into().map_err(|_| "on is not a function")?;

    let handler = Rc::new(RefCell::new(handler));

    let accounts_handler = handler.clone();
    let on_accounts = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
        let accounts = js_to_json(&accounts)
            .ok()
            .and_then(|value| serde_json::from_value::<Vec<Address>>(value).ok())
            .unwrap_or_default();
        (&mut *accounts_handler.borrow_mut())(WalletEvent::AccountsChanged(accounts));
    });

    let chain_handler = handler;
    let on_chain = Closure::<dyn FnMut(JsValue)>::new(move |chain: JsValue| {
        let parsed = js_to_json(&chain)
            .ok()
            .and_then(|value| parse_chain_id(&value).ok());
        match parsed {
            Some(chain_id) => (&mut *chain_handler.borrow_mut())(WalletEvent::ChainChanged(chain_id)),
            None => tracing::warn!("unreadable chainChanged payload"),
        }
    });

    on_fn
        .call2(&ethereum, &JsValue::from_str("accountsChanged"), on_accounts.as_ref())
        .map_err(|e| format!("Subscribe failed: {:?}", e))?;
    on_fn
        .call2(&ethereum, &JsValue::from_str("chainChanged"), on_chain.as_ref())
        .map_err(|e| format!("Subscribe failed: {:?}", e))?;

    on_accounts.forget();
    on_chain.forget();
    Ok(())
}

#[cfg(not(feature = "web"))]
pub fn listen(_handler: impl FnMut(WalletEvent) + 'static) -> Result<(), String> {
    Err("Wallet events only available in web mode".to_string())
}

/// Blocking browser alert, the app's surface for write failures.
#[cfg(feature = "web")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(feature = "web"))]
pub fn alert(message: &str) {
    tracing::error!("{}", message);
}
