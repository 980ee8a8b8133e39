use yew::prelude::*;
use yew_router::prelude::*;
use wheel_shared::constants::SPIN_DURATION_MS;
use wheel_shared::WheelVariant;

use crate::components::{ResultPopup, SpinButton, WheelCanvas};
use crate::hooks::use_wheel;
use crate::{Route, styles};

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub variant: WheelVariant,
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    let wheel = use_wheel(props.variant);
    let snapshot = &wheel.snapshot;

    let onclick = {
        let spin = wheel.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };

    let on_dismiss = {
        let dismiss = wheel.dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    let (other_route, other_label) = match props.variant {
        WheelVariant::Classic => (Route::Adaptive, "Try the no-repeat wheel"),
        WheelVariant::Adaptive => (Route::Classic, "Back to the classic wheel"),
    };

    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{wheel.title.clone()}</span>
            </h1>

            <div class={styles::CARD}>
                if let Some(error) = &snapshot.error {
                    <div class={classes!("mb-6", styles::CARD_ERROR)}>{error.clone()}</div>
                }

                <div class="relative mx-auto mb-8 flex justify-center items-center">
                    <WheelCanvas
                        sectors={snapshot.sectors.clone()}
                        rotation={snapshot.rotation}
                        is_spinning={snapshot.is_spinning}
                        duration_ms={SPIN_DURATION_MS}
                        on_missing_anchor={wheel.disable.clone()}
                    />
                </div>

                <div class="max-w-xs mx-auto">
                    <SpinButton
                        is_spinning={snapshot.is_spinning}
                        is_inert={snapshot.is_inert}
                        {onclick}
                    />
                </div>

                <p class={classes!("mt-6", "text-center", "text-sm", styles::TEXT_BODY)}>
                    <Link<Route> to={other_route} classes={classes!(styles::TEXT_LINK)}>{other_label}</Link<Route>>
                </p>
            </div>

            <ResultPopup outcome={wheel.outcome.clone()} {on_dismiss} />
        </div>
    }
}
