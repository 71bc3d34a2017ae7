//! Mapbox GL JSを包むサーフェス実装

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use sat_verify_common::{rotate_westward, CameraView, MapSurface};

use super::bindings::{self, Map, Marker, ACCESS_TOKEN};
use super::options::{EaseToOptions, FlyToOptions, FogStyle, MapOptions, MarkerOptions};

/// 地図ウィジェット1枚分のハンドル
///
/// loadイベント用とイージング関数用のClosureをウィジェットと
/// 同じ寿命で保持する。破棄はdetachで明示的に行う
pub struct GlobeSurface {
    map: Map,
    easing: Closure<dyn Fn(f64) -> f64>,
    _on_load: Closure<dyn FnMut()>,
}

impl GlobeSurface {
    /// ウィジェットを生成し、load完了時にon_loadedを呼ぶ
    ///
    /// スクリプトのロード完了後に呼ぶこと（load_widget参照）。
    /// フォグの適用はウィジェット自身のloadイベントまで遅延される
    pub fn attach(container_id: &str, on_loaded: impl Fn() + 'static) -> Result<Self, JsValue> {
        bindings::set_access_token(ACCESS_TOKEN)?;

        let options =
            serde_wasm_bindgen::to_value(&MapOptions::globe(container_id)).map_err(JsValue::from)?;
        let map = Map::new(&options);

        let fog = serde_wasm_bindgen::to_value(&FogStyle::space()).map_err(JsValue::from)?;
        let map_on_load = map.clone();
        let on_load = Closure::wrap(Box::new(move || {
            map_on_load.set_fog(&fog);
            on_loaded();
        }) as Box<dyn FnMut()>);
        map.on("load", on_load.as_ref().unchecked_ref());

        // 自動回転用の線形イージング
        let easing: Closure<dyn Fn(f64) -> f64> = Closure::new(|t: f64| t);

        Ok(Self {
            map,
            easing,
            _on_load: on_load,
        })
    }

    /// 1ステップ西へ回す（自動回転のタイマーから呼ばれる）
    pub fn rotate_step(&self) {
        let center = self.map.get_center();
        let step = EaseToOptions::rotation_step(rotate_westward(center.lng()), center.lat());
        if let Ok(options) = serde_wasm_bindgen::to_value(&step) {
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str("easing"), self.easing.as_ref());
            self.map.ease_to(&options);
        }
    }

    /// ウィジェットを破棄する（設置済みマーカーも一緒に消える）
    pub fn detach(&self) {
        self.map.remove();
    }
}

impl MapSurface for GlobeSurface {
    fn fly_to(&self, view: &CameraView) {
        if let Ok(options) = serde_wasm_bindgen::to_value(&FlyToOptions::from(view)) {
            self.map.fly_to(&options);
        }
    }

    fn place_marker(&self, lat: f64, lon: f64, color: &str) {
        let marker = MarkerOptions {
            color: color.to_string(),
        };
        let Ok(options) = serde_wasm_bindgen::to_value(&marker) else {
            return;
        };
        let lng_lat = js_sys::Array::of2(&JsValue::from_f64(lon), &JsValue::from_f64(lat));
        Marker::new(&options).set_lng_lat(&lng_lat).add_to(&self.map);
    }
}
