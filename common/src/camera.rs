//! カメラ目標値と自動回転の定数
//!
//! flyTo/easeToに渡す値を純粋データとして持ち、wasm側は変換だけを行う

use serde::{Deserialize, Serialize};

/// カメラ移動の目標値
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub lng: f64,
    pub lat: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub duration_ms: u32,
}

/// 起動時・リセット時の地球全景
pub const IDLE_VIEW: CameraView = CameraView {
    lng: 0.0,
    lat: 20.0,
    zoom: 1.5,
    pitch: 0.0,
    bearing: 0.0,
    duration_ms: 2000,
};

/// 検証対象への接近ビュー
pub fn target_view(lat: f64, lon: f64) -> CameraView {
    CameraView {
        lng: lon,
        lat,
        zoom: 14.0,
        pitch: 60.0,
        bearing: 0.0,
        duration_ms: 3000,
    }
}

/// 自動回転: 1ステップで西へ動かす度数
pub const ROTATE_STEP_DEG: f64 = 0.2;

/// 自動回転の刻み（ミリ秒）
pub const ROTATE_INTERVAL_MS: u32 = 50;

/// 自動回転1ステップのeaseTo所要時間（ミリ秒）
pub const ROTATE_EASE_MS: u32 = 100;

/// 現在の経度から1ステップ西回りした経度
///
/// ±180°の正規化はウィジェット側に任せる
pub fn rotate_westward(lng: f64) -> f64 {
    lng - ROTATE_STEP_DEG
}
