//! 地図サーフェス抽象
//!
//! カメラ移動とマーカー設置だけを外へ要求する能力トレイト。
//! wasm側の実装とテスト用フェイクの両方がこれを実装するので、
//! カメラの振り付けはブラウザなしで検証できる。

use crate::camera::{target_view, CameraView, IDLE_VIEW};

/// マーカーの色
pub const MARKER_COLOR: &str = "#ef4444";

/// 地図ウィジェットへ出すコマンドの能力
pub trait MapSurface {
    /// カメラを指定ビューへ移動する
    fn fly_to(&self, view: &CameraView);

    /// 指定座標にマーカーを置く
    ///
    /// マーカーは蓄積される。撤去はウィジェット破棄時のみ
    fn place_marker(&self, lat: f64, lon: f64, color: &str);
}

/// 検証対象へ接近する
///
/// flyToを1回、マーカー設置を1回だけ発行する。通信より先に呼ぶこと
pub fn approach<S: MapSurface + ?Sized>(surface: &S, lat: f64, lon: f64) {
    surface.fly_to(&target_view(lat, lon));
    surface.place_marker(lat, lon, MARKER_COLOR);
}

/// 地球全景へ戻る
pub fn return_to_idle<S: MapSurface + ?Sized>(surface: &S) {
    surface.fly_to(&IDLE_VIEW);
}
