//! 検証バックエンド連携
//!
//! POST /verify を1回だけ発行する。リトライなし。
//! 非2xx・ボディのデコード不能はすべてErrにまとめ、
//! フォールバック合成は呼び出し側（app）の責務とする。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use sat_verify_common::{VerificationRequest, VerificationResult};

const VERIFY_URL: &str = "https://ghost-project-backend.onrender.com/verify";

/// 検証リクエストを送信し、レスポンスを厳密デコードする
pub async fn post_verification(
    request: &VerificationRequest,
) -> Result<VerificationResult, JsValue> {
    let body = request
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(VERIFY_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("verify error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let result: VerificationResult = serde_wasm_bindgen::from_value(json)?;
    Ok(result)
}
