pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod fw;
pub(crate) mod model;
pub(crate) mod page;
pub(crate) mod service;

use crate::page::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/user/:username")]
    User { username: String },
    #[at("/badge/:username")]
    Badge { username: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::User { username } => html! { <UserPage {username} /> },
        Route::Badge { username } => html! { <BadgePage {username} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("stats api at {}", config::api::ApiConfig::load().base_url);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(
            Route::User {
                username: "octocat".to_string()
            }
            .to_path(),
            "/user/octocat"
        );
        assert_eq!(
            Route::Badge {
                username: "octocat".to_string()
            }
            .to_path(),
            "/badge/octocat"
        );
    }

    #[test]
    fn test_route_recognize() {
        assert_eq!(
            Route::recognize("/user/rust-lang"),
            Some(Route::User {
                username: "rust-lang".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/badge/rust-lang"),
            Some(Route::Badge {
                username: "rust-lang".to_string()
            })
        );
    }
}
