use std::fmt::Display;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    component::*,
    fw::*,
    model::{
        badge::{BadgeOption, BadgeOptions, BadgeQuery},
        github::RepositoriesPage,
    },
    service::github::{FetchError, GitHubService, DEFAULT_PAGE},
    Route,
};

/// GitHub rejects logins longer than this.
const USERNAME_MAX_LENGTH: usize = 39;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Repositories,
    Badge,
}

impl SearchMode {
    const ALL: [SearchMode; 2] = [SearchMode::Repositories, SearchMode::Badge];

    fn title(self) -> &'static str {
        match self {
            SearchMode::Repositories => "Repository List",
            SearchMode::Badge => "Profile Badge",
        }
    }

    fn description(self) -> &'static str {
        match self {
            SearchMode::Repositories => "View user's repositories",
            SearchMode::Badge => "Generate embeddable badge",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            SearchMode::Repositories => "bi-list-ul",
            SearchMode::Badge => "bi-award",
        }
    }
}

/// Where a submitted search leads once the username is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTarget {
    Repositories { username: String },
    Badge { username: String, query: BadgeQuery },
}

impl SearchTarget {
    /// Returns `None` for a blank username.
    pub fn plan(username: &str, mode: SearchMode, options: &BadgeOptions) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }

        let username = username.to_string();
        Some(match mode {
            SearchMode::Repositories => SearchTarget::Repositories { username },
            SearchMode::Badge => SearchTarget::Badge {
                username,
                query: BadgeQuery::from(options),
            },
        })
    }

    pub fn username(&self) -> &str {
        match self {
            SearchTarget::Repositories { username } | SearchTarget::Badge { username, .. } => {
                username
            }
        }
    }

    pub fn route(&self) -> Route {
        match self {
            SearchTarget::Repositories { username } => Route::User {
                username: username.clone(),
            },
            SearchTarget::Badge { username, .. } => Route::Badge {
                username: username.clone(),
            },
        }
    }

    pub fn href(&self) -> String {
        let path = self.route().to_path();
        match self {
            SearchTarget::Badge { query, .. } if !query.is_empty() => {
                format!("{path}?{}", query.to_query_string())
            }
            _ => path,
        }
    }

    fn navigate(&self, navigator: &Navigator) {
        log::info!("navigate to {}", self.href());
        match self {
            SearchTarget::Badge { query, .. } if !query.is_empty() => {
                if let Err(e) = navigator.push_with_query(&self.route(), query) {
                    log::error!("navigate error: {e}");
                }
            }
            _ => navigator.push(&self.route()),
        }
    }
}

fn lookup_error_message(username: impl Display) -> String {
    format!("Could not load GitHub user \"{username}\". Check the name and try again.")
}

/// What a search does once the validation request settles.
#[derive(Debug, Clone, PartialEq)]
enum SearchOutcome {
    Navigate,
    Failed(String),
}

impl SearchOutcome {
    fn resolve(target: &SearchTarget, result: Result<RepositoriesPage, FetchError>) -> Self {
        match result {
            Ok(page) => {
                let pagination = &page.pagination;
                log::debug!(
                    "resolved {}: {} repositories on page {} ({} per page, previous: {}, next: {})",
                    page.username,
                    page.repositories.as_ref().map_or(0, Vec::len),
                    pagination.current_page,
                    pagination.per_page,
                    pagination.has_previous_page,
                    pagination.has_next_page
                );
                SearchOutcome::Navigate
            }
            Err(e) => {
                log::error!("Error: {e}");
                SearchOutcome::Failed(lookup_error_message(target.username()))
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct SearchForm {
    username: String,
    mode: SearchMode,
    options: BadgeOptions,
}

#[function_component]
pub fn HomePage() -> Html {
    let scheme = use_color_scheme();
    let navigator = use_navigator();
    let form = use_state(SearchForm::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let pending = use_mut_ref(|| None::<FetchGuard>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| move || drop(pending.borrow_mut().take()));
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_form = (*form).clone();
            new_form.username = input.value();
            form.set(new_form);
        })
    };

    let on_select_mode = |mode: SearchMode| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_form = (*form).clone();
            new_form.mode = mode;
            form.set(new_form);
        })
    };

    let on_toggle_option = |option: BadgeOption| {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut new_form = (*form).clone();
            new_form.options.toggle(option);
            form.set(new_form);
        })
    };

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(target) = SearchTarget::plan(&form.username, form.mode, &form.options) else {
                return;
            };

            loading.set(true);
            error.set(None);

            let guard = FetchGuard::new();
            let signal = guard.signal();
            let token = guard.token();
            *pending.borrow_mut() = Some(guard);

            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = GitHubService::default()
                    .get_user_repositories(target.username(), DEFAULT_PAGE, signal.as_ref())
                    .await;
                if token.is_cancelled() {
                    return;
                }

                loading.set(false);
                match (SearchOutcome::resolve(&target, result), navigator) {
                    (SearchOutcome::Navigate, Some(navigator)) => target.navigate(&navigator),
                    (SearchOutcome::Navigate, None) => log::error!("navigator not found"),
                    (SearchOutcome::Failed(msg), _) => error.set(Some(msg)),
                }
            });
        })
    };

    let is_loading = *loading;

    html! {
        <>
            <Title title="" />
            <div data-bs-theme={scheme.bs_theme()} class="bg-body text-body min-vh-100 d-flex align-items-center">
                <div class="container" style="max-width: 28rem; text-align: center; padding-top: 2em; padding-bottom: 2em;">
                    <i class="bi bi-github" style="font-size: 6rem;"></i>
                    <h1 class="h3" style="margin-top: 0.5em;">{"GitHub User Explorer"}</h1>
                    <p class="text-body-secondary">
                        {"Enter a GitHub username and choose what you want to explore"}
                    </p>

                    {
                        (*error).clone().map(|msg| html! {
                            <ErrorAlert message={msg} />
                        })
                    }

                    <form onsubmit={on_submit}>
                        <div class="input-group mb-4">
                            <input type="text" class="form-control" placeholder="Enter GitHub username"
                                maxlength={USERNAME_MAX_LENGTH.to_string()} disabled={is_loading}
                                value={form.username.clone()} oninput={on_input} />
                            <button type="submit" class="btn btn-outline-secondary" disabled={is_loading} aria-label="Search">
                                {
                                    if is_loading {
                                        html! { <span class="spinner-border spinner-border-sm" role="status"></span> }
                                    } else {
                                        html! { <i class="bi bi-search"></i> }
                                    }
                                }
                            </button>
                        </div>

                        <div class="row g-3 mb-4">
                            {SearchMode::ALL.into_iter().map(|mode| {
                                let mut card_class = classes!("btn", "w-100", "h-100");
                                if form.mode == mode {
                                    card_class.push("btn-outline-primary");
                                    card_class.push("active");
                                } else {
                                    card_class.push("btn-outline-secondary");
                                }
                                html! {
                                    <div class="col-6">
                                        <button type="button" class={card_class} onclick={on_select_mode(mode)}>
                                            <i class={classes!("bi", mode.icon())} style="font-size: 1.5rem;"></i>
                                            <div class="fw-semibold">{mode.title()}</div>
                                            <small>{mode.description()}</small>
                                        </button>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>

                        {
                            if form.mode == SearchMode::Badge {
                                html! {
                                    <div class="card text-start">
                                        <div class="card-body">
                                            <h6 class="card-title">{"Badge Options"}</h6>
                                            <div class="row">
                                                {BadgeOption::ALL.into_iter().map(|option| {
                                                    let id = format!("badge-{}", option.key());
                                                    html! {
                                                        <div class="col-6">
                                                            <div class="form-check">
                                                                <input class="form-check-input" type="checkbox" id={id.clone()}
                                                                    checked={form.options.get(option)}
                                                                    onchange={on_toggle_option(option)} />
                                                                <label class="form-check-label" for={id}>{option.label()}</label>
                                                            </div>
                                                        </div>
                                                    }
                                                }).collect::<Html>()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </form>
                </div>
            </div>
        </>
    }
}
