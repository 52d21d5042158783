use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Value for bootstrap's `data-bs-theme` attribute.
    pub fn bs_theme(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// System color scheme, kept in sync with the `prefers-color-scheme` media
/// query while the calling component is mounted.
#[hook]
pub fn use_color_scheme() -> ColorScheme {
    let scheme = use_state(|| {
        dark_scheme_query()
            .map(|query| ColorScheme::from_prefers_dark(query.matches()))
            .unwrap_or_default()
    });

    {
        let scheme = scheme.clone();
        use_effect_with((), move |_| {
            let listener = dark_scheme_query().map(|query| {
                EventListener::new(&query, "change", move |event| {
                    if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                        scheme.set(ColorScheme::from_prefers_dark(event.matches()));
                    }
                })
            });

            move || drop(listener)
        });
    }

    *scheme
}
