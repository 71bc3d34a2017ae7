//! Mapbox GL JS バインディング
//!
//! CDNからロードされるmapboxglグローバル名前空間へのextern宣言。
//! importグルーは呼び出し時に名前解決されるため、スクリプトの
//! load完了後に呼ぶ限り安全。windowへの直接参照はこのモジュールに閉じ込める。

use wasm_bindgen::prelude::*;

/// デモ用の公開アクセストークン
pub const ACCESS_TOKEN: &str =
    "pk.eyJ1IjoiZmF2b3VyYWNoYXJhIiwiYSI6ImNtaXhweHBsNTA2dnUzanNrbWpnZTBkcTMifQ.FvD15f-8u19kmBPP2Z2WIA";

#[wasm_bindgen]
extern "C" {
    /// mapboxgl.Map
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = setFog)]
    pub fn set_fog(this: &Map, fog: &JsValue);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> LngLat;

    #[wasm_bindgen(method, js_name = easeTo)]
    pub fn ease_to(this: &Map, options: &JsValue);

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &Map, options: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// mapboxgl.Marker
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    /// mapboxgl.LngLat
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type LngLat;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LngLat) -> f64;
}

/// mapboxgl.accessToken を設定する
///
/// 名前空間上の代入はexternでは表現できないためReflect経由で書く
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let namespace = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("mapboxgl"))?;
    js_sys::Reflect::set(
        &namespace,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}
