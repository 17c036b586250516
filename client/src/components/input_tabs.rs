//! Upload / paste tab switcher.

use leptos::prelude::*;

use crate::state::ui::{InputTab, UiState};

/// Tab buttons for the input panels. Switching tabs never clears either panel.
#[component]
pub fn InputTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="input-tabs" role="tablist">
            {InputTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="input-tabs__tab"
                            class:input-tabs__tab--active=move || ui.get().input_tab == tab
                            on:click=move |_| ui.update(|u| u.input_tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
