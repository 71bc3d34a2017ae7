//! ウィジェットAPIに渡すオプションオブジェクトの型定義
//!
//! serde構造体として持つことで、JS側に渡す形をネイティブテストで検証できる。
//! JsValueへの変換はserde-wasm-bindgenが行う。

use serde::Serialize;

use sat_verify_common::{CameraView, IDLE_VIEW, ROTATE_EASE_MS};

/// 衛星写真ベースのスタイル
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/satellite-streets-v12";

/// new mapboxgl.Map(...) に渡すオプション
#[derive(Debug, Clone, Serialize)]
pub struct MapOptions {
    pub container: String,
    pub style: String,
    pub projection: String,
    /// [lng, lat]
    pub center: [f64; 2],
    pub zoom: f64,
    pub pitch: f64,
}

impl MapOptions {
    /// 初期表示: グローブ投影の地球全景
    pub fn globe(container_id: &str) -> Self {
        Self {
            container: container_id.to_string(),
            style: MAP_STYLE.to_string(),
            projection: "globe".to_string(),
            center: [IDLE_VIEW.lng, IDLE_VIEW.lat],
            zoom: IDLE_VIEW.zoom,
            pitch: IDLE_VIEW.pitch,
        }
    }
}

/// setFogに渡す大気・宇宙スタイル
///
/// キーはウィジェットAPIどおりケバブケース
#[derive(Debug, Clone, Serialize)]
pub struct FogStyle {
    pub color: String,
    #[serde(rename = "high-color")]
    pub high_color: String,
    #[serde(rename = "horizon-blend")]
    pub horizon_blend: f64,
    #[serde(rename = "space-color")]
    pub space_color: String,
    #[serde(rename = "star-intensity")]
    pub star_intensity: f64,
}

impl FogStyle {
    pub fn space() -> Self {
        Self {
            color: "rgb(186, 210, 235)".to_string(),
            high_color: "rgb(36, 92, 223)".to_string(),
            horizon_blend: 0.02,
            space_color: "rgb(11, 11, 25)".to_string(),
            star_intensity: 0.6,
        }
    }
}

/// flyToに渡すオプション
#[derive(Debug, Clone, Serialize)]
pub struct FlyToOptions {
    /// [lng, lat]
    pub center: [f64; 2],
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub duration: u32,
    pub essential: bool,
}

impl From<&CameraView> for FlyToOptions {
    fn from(view: &CameraView) -> Self {
        Self {
            center: [view.lng, view.lat],
            zoom: view.zoom,
            pitch: view.pitch,
            bearing: view.bearing,
            duration: view.duration_ms,
            essential: true,
        }
    }
}

/// 自動回転1ステップ分のeaseToオプション
///
/// easing関数はserdeで表現できないため、呼び出し側がReflectで差し込む
#[derive(Debug, Clone, Serialize)]
pub struct EaseToOptions {
    /// [lng, lat]
    pub center: [f64; 2],
    pub duration: u32,
}

impl EaseToOptions {
    pub fn rotation_step(lng: f64, lat: f64) -> Self {
        Self {
            center: [lng, lat],
            duration: ROTATE_EASE_MS,
        }
    }
}

/// new mapboxgl.Marker(...) に渡すオプション
#[derive(Debug, Clone, Serialize)]
pub struct MarkerOptions {
    pub color: String,
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_fly_to_options_convert_to_plain_object() {
        let options =
            serde_wasm_bindgen::to_value(&FlyToOptions::from(&IDLE_VIEW)).expect("conversion failed");
        assert!(options.is_object());

        let zoom = js_sys::Reflect::get(&options, &"zoom".into()).expect("zoom missing");
        assert_eq!(zoom.as_f64(), Some(1.5));

        let center = js_sys::Reflect::get(&options, &"center".into()).expect("center missing");
        assert!(js_sys::Array::is_array(&center));
    }

    #[wasm_bindgen_test]
    fn wasm_fog_style_keeps_kebab_keys() {
        let fog = serde_wasm_bindgen::to_value(&FogStyle::space()).expect("conversion failed");
        let high = js_sys::Reflect::get(&fog, &"high-color".into()).expect("high-color missing");
        assert_eq!(high.as_string().as_deref(), Some("rgb(36, 92, 223)"));
    }
}
