pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use wheel_shared::WheelVariant;
use crate::pages::{not_found::NotFound, wheel_page::WheelPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Classic,
    #[at("/adaptive")]
    Adaptive,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    // Keys keep each variant's wheel in its own component instance
    match route {
        Route::Classic => html! { <WheelPage key="classic" variant={WheelVariant::Classic} /> },
        Route::Adaptive => html! { <WheelPage key="adaptive" variant={WheelVariant::Adaptive} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
