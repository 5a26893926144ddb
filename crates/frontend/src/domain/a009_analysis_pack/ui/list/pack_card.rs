use contracts::domain::a009_analysis_pack::aggregate::{AnalysisPack, UpdateAnalysisPackInput};
use leptos::prelude::*;
use thaw::*;

use super::versions::{sorted_versions, version_action};
use crate::shared::date_utils::format_datetime;

/// One pack: its contents, the version picker and the enabled switch
#[component]
pub fn PackCard(
    pack: AnalysisPack,
    on_update: Callback<UpdateAnalysisPackInput>,
    /// An update of this pack is in flight
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let versions = sorted_versions(&pack);
    let current = pack.pack_version.clone();
    let enabled = pack.enabled;
    let selected = RwSignal::new(versions.first().cloned().unwrap_or_else(|| current.clone()));
    let choices = StoredValue::new(versions.clone());

    let action = Memo::new(move |_| selected.with(|s| version_action(enabled, &current, s)));

    let title = pack.title().to_string();
    let description = pack.description.clone();
    let counts = pack.pack_types.counts();
    let update_available = pack.update_available;
    let modified = format_datetime(&pack.last_modified);
    let for_version = pack.clone();
    let for_toggle = pack;

    let on_version_change = move |ev| {
        let id = event_target_value(&ev);
        let choice = choices.with_value(|vs| vs.iter().find(|v| v.id.to_string() == id).cloned());
        if let Some(version) = choice {
            selected.set(version);
        }
    };

    view! {
        <section class="pack-card" class:pack-card--busy=move || busy.get()>
            <div class="pack-card__header">
                <h2 class="pack-card__title">{title}</h2>
                <Show when=move || update_available>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        "UPDATE AVAILABLE"
                    </Badge>
                </Show>
            </div>
            <div class="pack-card__types">
                {counts
                    .into_iter()
                    .map(|(count, label)| view! {
                        <span class="pack-card__type">{format!("{} {}", count, label)}</span>
                    })
                    .collect_view()}
            </div>
            <p class="pack-card__description">{description}</p>
            <div class="pack-card__footer">
                <label class="form__group">
                    <span class="form__label">"Version"</span>
                    <select
                        class="form__select"
                        disabled=move || !enabled || busy.get()
                        prop:value=move || selected.with(|v| v.id.to_string())
                        on:change=on_version_change
                    >
                        {versions
                            .into_iter()
                            .map(|v| view! { <option value=v.id.to_string()>{v.sem_ver}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !action.get().1 || busy.get())
                    on_click=move |_| {
                        let version = selected.get_untracked();
                        on_update.run(UpdateAnalysisPackInput::to_version(&for_version, &version));
                    }
                >
                    {move || action.get().0.label()}
                </Button>
                <span class="pack-card__modified">{modified}</span>
                <label class="pack-card__switch">
                    <input
                        type="checkbox"
                        prop:checked=enabled
                        disabled=move || busy.get()
                        on:change=move |_| {
                            on_update.run(UpdateAnalysisPackInput::toggle_enabled(&for_toggle))
                        }
                    />
                    "Enabled"
                </label>
            </div>
        </section>
    }
}
