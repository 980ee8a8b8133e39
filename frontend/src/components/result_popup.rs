use yew::prelude::*;
use wheel_shared::SpinOutcome;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultPopupProps {
    pub outcome: Option<SpinOutcome>,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ResultPopup)]
pub fn result_popup(props: &ResultPopupProps) -> Html {
    let outcome = match &props.outcome {
        Some(outcome) => outcome,
        None => return html! {},
    };

    html! {
        <div class={styles::POPUP_BACKDROP}>
            <div class={styles::POPUP}>
                <h2 class="text-2xl font-bold mb-3 text-gray-900 dark:text-white">{"The wheel has spoken!"}</h2>
                <p class={classes!("mb-5", styles::TEXT_BODY)}>
                    {"Today's lunch is "}
                    <span class="font-bold text-xl text-orange-500">{outcome.label.clone()}</span>
                    {"!"}
                </p>
                <button class={styles::BUTTON_SECONDARY} onclick={props.on_dismiss.clone()}>
                    {"Pick something else"}
                </button>
            </div>
        </div>
    }
}
