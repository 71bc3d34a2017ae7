//! 解析中オーバーレイコンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading-overlay">
                <div class="loading-card">
                    <div class="spinner"></div>
                    <p class="loading-title">"Analyzing Satellite Imagery..."</p>
                    <p class="loading-subtitle">"Processing NDVI & AI Models"</p>
                </div>
            </div>
        </Show>
    }
}
