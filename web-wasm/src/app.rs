//! メインアプリケーションコンポーネント
//!
//! フォーム入力 → 検証リクエスト → 結果表示の振り付けをここで束ねる。
//! 状態遷移そのものはsat_verify_common::ViewStateが持ち、
//! このモジュールはタイマー・fetch・地図ウィジェットとの接続だけを行う

use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use sat_verify_common::{
    approach, demo_result, parse_coordinate, return_to_idle, ProjectType, VerificationRequest,
    ViewState, CONNECTION_FAILED, REVEAL_DELAY_MS, ROTATE_INTERVAL_MS,
};

use crate::api;
use crate::components::{
    control_bar::ControlBar, decision_legend::DecisionLegend, error_banner::ErrorBanner,
    loading_overlay::LoadingOverlay, results_panel::ResultsPanel,
};
use crate::map::loader;
use crate::map::surface::GlobeSurface;

/// 地図ウィジェットを載せるコンテナ要素のid
const MAP_CONTAINER_ID: &str = "map";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(ViewState::new());

    // フォーム初期値（デモ既定の検証対象: ナイジェリア・ナイジャーデルタ）
    let (project_id, _set_project_id) = signal("OL-RD-2025-001".to_string());
    let (latitude, set_latitude) = signal("5.9667".to_string());
    let (longitude, set_longitude) = signal("5.6667".to_string());
    let (project_type, set_project_type) = signal(ProjectType::OilSpillRemediation);

    // ウィジェットハンドルと回転タイマーは!Sendなのでローカル保持
    let surface: StoredValue<Option<GlobeSurface>, LocalStorage> = StoredValue::new_local(None);
    let rotation: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    // 初期化: CDNスクリプトのロード完了後にウィジェットを生成する。
    // 失敗はコンソールに残すだけで、画面は地図なしのまま操作可能
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(err) = loader::load_widget().await {
                leptos::logging::error!("map script load failed: {err:?}");
                return;
            }
            let attached = GlobeSurface::attach(MAP_CONTAINER_ID, move || {
                set_state.update(|s| s.map_ready());
            });
            match attached {
                Ok(globe) => surface.set_value(Some(globe)),
                Err(err) => leptos::logging::error!("map init failed: {err:?}"),
            }
        });
    });

    // 自動回転: rotating && map_loaded の間だけタイマーを張る。
    // Intervalのdropがそのままキャンセルになる
    Effect::new(move |_| {
        let spinning = state.with(|s| s.rotating && s.map_loaded);
        rotation.set_value(if spinning {
            Some(Interval::new(ROTATE_INTERVAL_MS, move || {
                surface.with_value(|globe| {
                    if let Some(globe) = globe {
                        globe.rotate_step();
                    }
                });
            }))
        } else {
            None
        });
    });

    on_cleanup(move || {
        rotation.set_value(None);
        surface.update_value(|slot| {
            if let Some(globe) = slot.take() {
                globe.detach();
            }
        });
    });

    // 検証実行
    let on_verify = move |_: ()| {
        let mut generation = 0;
        set_state.update(|s| generation = s.begin_verification());

        let lat = parse_coordinate(&latitude.get_untracked());
        let lon = parse_coordinate(&longitude.get_untracked());
        let selected = project_type.get_untracked();

        // 通信の成否に関わらず、先にカメラ接近とマーカー設置を行う
        surface.with_value(|globe| {
            if let Some(globe) = globe {
                approach(globe, lat, lon);
            }
        });

        let request = VerificationRequest {
            project_id: project_id.get_untracked(),
            project_type: selected,
            latitude: lat,
            longitude: lon,
        };

        spawn_local(async move {
            match api::post_verification(&request).await {
                Ok(result) => {
                    // 演出ディレイ後に表示。追い越されていたら世代照合で破棄される
                    TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    set_state.update(|s| {
                        s.apply_success(generation, result);
                    });
                }
                Err(err) => {
                    leptos::logging::error!("verification request failed: {err:?}");
                    set_state.update(|s| {
                        s.apply_failure(generation, CONNECTION_FAILED);
                    });

                    // デモ用フォールバック: 同じディレイの後、合成結果でバナーを覆い隠す
                    TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    let fallback = demo_result(selected, lat, lon);
                    set_state.update(|s| {
                        s.apply_fallback(generation, fallback);
                    });
                }
            }
        });
    };

    // 結果パネルを閉じて地球全景へ戻る
    let on_reset = move |_: ()| {
        set_state.update(|s| s.reset());
        surface.with_value(|globe| {
            if let Some(globe) = globe {
                return_to_idle(globe);
            }
        });
    };

    // 派生ビュー状態
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let bar_hidden = Signal::derive(move || state.with(|s| s.show_results));
    let error_message = Signal::derive(move || {
        state.with(|s| {
            if s.has_error() {
                s.error.clone()
            } else {
                String::new()
            }
        })
    });
    let shown_result = Signal::derive(move || {
        state.with(|s| if s.show_results { s.result.clone() } else { None })
    });

    view! {
        <div class="app">
            <div id=MAP_CONTAINER_ID class="map-container"></div>

            <ControlBar
                project_type=project_type
                set_project_type=set_project_type
                latitude=latitude
                set_latitude=set_latitude
                longitude=longitude
                set_longitude=set_longitude
                loading=loading
                hidden=bar_hidden
                on_verify=on_verify
            />

            <DecisionLegend />

            <LoadingOverlay loading=loading />

            <ResultsPanel result=shown_result project_type=project_type on_reset=on_reset />

            <ErrorBanner message=error_message />
        </div>
    }
}
