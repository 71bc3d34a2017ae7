//! 通信失敗バナーコンポーネント
//!
//! 文言が空のときは何も描画しない。フォールバック結果が出た後は
//! app側で文言が空になるため自然に消える

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner">
                <span class="error-icon">"⚠️"</span>
                <p>{move || message.get()}</p>
            </div>
        </Show>
    }
}
