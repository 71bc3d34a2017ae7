//! AI判定ロジックの凡例HUD

use leptos::prelude::*;

#[component]
pub fn DecisionLegend() -> impl IntoView {
    view! {
        <div class="decision-legend">
            <h3>"AI Decision Logic"</h3>

            <div class="legend-row">
                <span class="legend-icon">"🌿"</span>
                <div>
                    <div class="legend-threshold">"NDVI > 0.4"</div>
                    <div class="legend-note">"Vegetation Detected (Ghost Project Risk)"</div>
                </div>
            </div>

            <div class="legend-row">
                <span class="legend-icon">"🏗️"</span>
                <div>
                    <div class="legend-threshold">"NDVI < 0.2"</div>
                    <div class="legend-note">"Construction/Infrastructure Confirmed"</div>
                </div>
            </div>

            <div class="legend-row">
                <span class="legend-icon">"💧"</span>
                <div>
                    <div class="legend-threshold">"NDVI < 0.1"</div>
                    <div class="legend-note">"Water Body / Spill Detected"</div>
                </div>
            </div>
        </div>
    }
}
