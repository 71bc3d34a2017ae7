//! Mapbox GL JS のCDNロード
//!
//! スクリプトとスタイルシートを<head>へ注入し、スクリプトのloadを待つ

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// グローブ投影に対応したバージョンを固定で使う
pub const SCRIPT_URL: &str = "https://api.mapbox.com/mapbox-gl-js/v2.15.0/mapbox-gl.js";
pub const STYLESHEET_URL: &str = "https://api.mapbox.com/mapbox-gl-js/v2.15.0/mapbox-gl.css";

/// ウィジェットのスクリプトとCSSを注入し、スクリプトのload完了まで待つ
///
/// 失敗時はErrを返すだけで再試行しない。地図は出ないが画面は操作可能なまま
pub async fn load_widget() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;

    // CSSの完了は待たない（初期描画の乱れはウィジェット側が吸収する）
    let link = document.create_element("link")?;
    link.set_attribute("rel", "stylesheet")?;
    link.set_attribute("href", STYLESHEET_URL)?;
    head.append_child(&link)?;

    let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(SCRIPT_URL);
    script.set_attribute("async", "")?;

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)?;
    JsFuture::from(loaded).await?;
    Ok(())
}
