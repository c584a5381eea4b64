use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod settings;

use components::dashboard::Dashboard;
use components::upload::UploadView;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Upload page");
            html! { <UploadView /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <main class="min-h-screen bg-base-200 flex items-center justify-center">
                    <h1 class="text-3xl font-bold">{"404 Not Found"}</h1>
                </main>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SalesDash Frontend Starting ===");
    log::debug!("API base URL: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
