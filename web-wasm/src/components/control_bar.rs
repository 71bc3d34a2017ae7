//! 操作バーコンポーネント
//!
//! プロジェクト種別・座標の入力と検証ボタン。結果表示中はフェードアウトする

use leptos::prelude::*;

use sat_verify_common::ProjectType;

#[component]
pub fn ControlBar<FV>(
    project_type: ReadSignal<ProjectType>,
    set_project_type: WriteSignal<ProjectType>,
    latitude: ReadSignal<String>,
    set_latitude: WriteSignal<String>,
    longitude: ReadSignal<String>,
    set_longitude: WriteSignal<String>,
    loading: Signal<bool>,
    hidden: Signal<bool>,
    on_verify: FV,
) -> impl IntoView
where
    FV: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="control-bar" class:hidden=move || hidden.get()>
            <select
                on:change=move |ev| {
                    // optionのvalueはワイヤ文字列なのでFromStrで戻せる
                    if let Ok(selected) = event_target_value(&ev).parse::<ProjectType>() {
                        set_project_type.set(selected);
                    }
                }
            >
                <optgroup label="🌊 Environmental">
                    <option
                        value=ProjectType::OilSpillRemediation.as_str()
                        selected=move || project_type.get() == ProjectType::OilSpillRemediation
                    >
                        {ProjectType::OilSpillRemediation.label()}
                    </option>
                </optgroup>
                <optgroup label="🏗️ Infrastructure">
                    <option
                        value=ProjectType::Road.as_str()
                        selected=move || project_type.get() == ProjectType::Road
                    >
                        {ProjectType::Road.label()}
                    </option>
                    <option
                        value=ProjectType::Building.as_str()
                        selected=move || project_type.get() == ProjectType::Building
                    >
                        {ProjectType::Building.label()}
                    </option>
                    <option
                        value=ProjectType::Factory.as_str()
                        selected=move || project_type.get() == ProjectType::Factory
                    >
                        {ProjectType::Factory.label()}
                    </option>
                </optgroup>
            </select>

            <input
                type="number"
                step="0.0001"
                placeholder="Latitude"
                prop:value=move || latitude.get()
                on:input=move |ev| {
                    set_latitude.set(event_target_value(&ev));
                }
            />

            <input
                type="number"
                step="0.0001"
                placeholder="Longitude"
                prop:value=move || longitude.get()
                on:input=move |ev| {
                    set_longitude.set(event_target_value(&ev));
                }
            />

            <button
                class="verify-button"
                disabled=move || loading.get()
                on:click={
                    let on_verify = on_verify.clone();
                    move |_| on_verify(())
                }
            >
                {move || if loading.get() { "Analyzing..." } else { "Verify" }}
            </button>
        </div>
    }
}
