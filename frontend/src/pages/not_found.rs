use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, styles};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_H1}>{"Page not found"}</h1>
            <p class={classes!("text-center", styles::TEXT_BODY)}>
                <Link<Route> to={Route::Classic} classes={classes!(styles::TEXT_LINK)}>{"Back to the wheel"}</Link<Route>>
            </p>
        </div>
    }
}
