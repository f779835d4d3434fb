use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #1c1917; color: #f5f5f4; font-family: Georgia, serif;">
            <h1 style="font-size: 4rem; color: #fde68a; margin: 0 0 1rem;">{"Lost in the ashes"}</h1>
            <p style="color: #a8a29e; margin: 0 0 2rem;">{"This page was buried in 79 AD."}</p>
            <Link<Route> to={Route::Home}>
                <span style="color: #fde68a;">{"Back to the studio"}</span>
            </Link<Route>>
        </div>
    }
}
