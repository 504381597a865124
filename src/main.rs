use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod catalog;
mod cep;
mod checkout;
mod components;
mod config;
mod pages;
mod reviews;
mod sticky;
mod utils;

use pages::product::ProductPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Product,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Product => html! { <ProductPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Product} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
