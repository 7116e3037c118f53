use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page page-not-found">
            <div class="section-heading">
                <h2>{"Page not found"}</h2>
                <p>{"The page you were looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </div>
    }
}
