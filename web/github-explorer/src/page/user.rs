use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

use crate::{
    component::*,
    fw::*,
    model::github::{Repository, Stats},
    service::github::GitHubService,
};

const FALLBACK_LOCALE: &str = "en-US";

fn localized_date(repo: &Repository) -> String {
    let locale = window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
    js_sys::Date::new(&JsValue::from_f64(repo.updated_at_millis()))
        .to_locale_date_string(&locale, &JsValue::UNDEFINED)
        .into()
}

#[derive(PartialEq, Properties)]
struct RepositoryCardProps {
    repo: Repository,
}

#[function_component]
fn RepositoryCard(props: &RepositoryCardProps) -> Html {
    let repo = &props.repo;

    html! {
        <div class="card" style="margin-bottom: 1em;">
            <div class="card-body">
                <h5 class="card-title">
                    <a href={repo.html_url.clone()} target="_blank" rel="noopener noreferrer">
                        {repo.name.clone()}
                    </a>
                </h5>
                {
                    repo.description.clone().map(|description| html! {
                        <p class="card-text">{description}</p>
                    })
                }
                <div class="d-flex flex-wrap text-body-secondary small" style="gap: 1.5em;">
                    {
                        repo.language.clone().map(|language| html! {
                            <span>
                                <span class="badge rounded-pill text-bg-secondary" style="margin-right: 0.5em;">{" "}</span>
                                {language}
                            </span>
                        })
                    }
                    {repo.visible_counters().into_iter().map(|(counter, count)| html! {
                        <span title={counter.title()}>
                            <i class={classes!("bi", counter.icon())} style="margin-right: 0.25em;"></i>
                            {count}
                        </span>
                    }).collect::<Html>()}
                    <span>{format!("Updated {}", localized_date(repo))}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(PartialEq, Properties)]
struct StatsSummaryProps {
    username: AttrValue,
    stats: Stats,
}

#[function_component]
fn StatsSummary(props: &StatsSummaryProps) -> Html {
    let Stats {
        total_stars,
        total_forks,
        total_repos,
    } = props.stats;

    html! {
        <p class="text-body-secondary" style="margin-bottom: 1.5em;">
            {format!(
                "{} owns {total_repos} repositories · {total_stars} stars · {total_forks} forks",
                props.username
            )}
        </p>
    }
}

#[derive(PartialEq, Properties)]
pub struct UserPageProps {
    pub username: AttrValue,
}

#[function_component]
pub fn UserPage(props: &UserPageProps) -> Html {
    let user_stats = use_cancellable_fetch(props.username.clone(), |username, signal| async move {
        GitHubService::default()
            .get_user_stats(&username, signal.as_ref())
            .await
    });

    let content = match &*user_stats {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed => html! { <ErrorAlert message="Failed to load user repositories" /> },
        FetchState::Loaded(user_stats) => html! {
            <>
                <StatsSummary username={user_stats.username.clone()} stats={user_stats.stats.clone()} />
                {
                    if user_stats.repositories().is_empty() {
                        html! { <p class="text-center text-body-secondary">{"No public repositories"}</p> }
                    } else {
                        user_stats.repositories().iter().map(|repo| html! {
                            <RepositoryCard key={repo.id} repo={repo.clone()} />
                        }).collect::<Html>()
                    }
                }
            </>
        },
    };

    let title = format!("{}'s Repositories", props.username);

    html! {
        <>
            <Title title={title.clone()} />
            <NavBar active="user" username={props.username.clone()} />
            <div class="container-md" style="padding-top: 1em; padding-bottom: 1em;">
                <h3 style="margin-bottom: 1em;">{title}</h3>
                {content}
            </div>
        </>
    }
}
