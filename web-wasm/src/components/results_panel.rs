//! 検証結果パネルコンポーネント
//!
//! 判定バナー・理由・NDVI指数・座標を表示する。
//! アイコンは元ページ同様、現在のフォーム選択種別で出し分ける

use leptos::prelude::*;

use sat_verify_common::{ProjectType, VerificationResult};

#[component]
pub fn ResultsPanel<FR>(
    result: Signal<Option<VerificationResult>>,
    project_type: ReadSignal<ProjectType>,
    on_reset: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    view! {
        {move || {
            result.get().map(|result| {
                let analysis = result.satellite_analysis;
                let risk = analysis.risk_flag;

                let icon = if risk {
                    if project_type.get() == ProjectType::OilSpillRemediation {
                        "💧"
                    } else {
                        "⚠️"
                    }
                } else {
                    "✅"
                };
                let verdict_class = if risk { "verdict risk" } else { "verdict clear" };
                let header_class = if risk {
                    "result-header risk"
                } else {
                    "result-header clear"
                };
                let model = if analysis.model_used.is_empty() {
                    "ResNet50_v1".to_string()
                } else {
                    analysis.model_used
                };

                let on_close = on_reset.clone();
                let on_return = on_reset.clone();
                view! {
                    <div class="results-panel">
                        <button class="close-button" on:click=move |_| on_close(())>
                            "×"
                        </button>

                        <div class=header_class>
                            <div class="verdict-row">
                                <span class="verdict-icon">{icon}</span>
                                <div>
                                    <h2 class=verdict_class>{analysis.verdict}</h2>
                                    <p class="model-name">{model}</p>
                                </div>
                            </div>
                            <p class="reason">{analysis.reason}</p>
                        </div>

                        <div class="result-metric">
                            <span class="metric-label">"NDVI Index"</span>
                            <div class="metric-value">
                                {format!("{:.4}", analysis.calculated_index)}
                            </div>
                        </div>

                        <div class="result-metric">
                            <span class="metric-label">"Coordinates"</span>
                            <div class="metric-coords">
                                {format!("{:.4}, {:.4}", result.location.lat, result.location.lon)}
                            </div>
                        </div>

                        <button class="return-button" on:click=move |_| on_return(())>
                            "← Return to Globe"
                        </button>
                    </div>
                }
            })
        }}
    }
}
