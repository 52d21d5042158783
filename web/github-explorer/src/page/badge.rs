use yew::prelude::*;

use crate::{
    component::*,
    fw::*,
    model::badge::BadgeData,
    service::github::{FetchError, GitHubService, DEFAULT_PAGE},
};

#[derive(PartialEq, Properties)]
struct SnippetProps {
    title: AttrValue,
    code: AttrValue,
}

#[function_component]
fn Snippet(props: &SnippetProps) -> Html {
    html! {
        <div style="margin-bottom: 1.5em;">
            <h5>{props.title.clone()}</h5>
            <div class="position-relative">
                <pre class="bg-body-tertiary rounded" style="padding: 1em; padding-right: 6em; white-space: pre-wrap; word-break: break-all;">
                    <code>{props.code.clone()}</code>
                </pre>
                <CopyButton text={props.code.clone()} />
            </div>
        </div>
    }
}

#[derive(PartialEq, Properties)]
pub struct BadgePageProps {
    pub username: AttrValue,
}

#[function_component]
pub fn BadgePage(props: &BadgePageProps) -> Html {
    let badge = use_cancellable_fetch(props.username.clone(), |username, signal| async move {
        let service = GitHubService::default();
        // the page only exists for accounts the API can resolve
        service
            .get_user_repositories(&username, DEFAULT_PAGE, signal.as_ref())
            .await?;
        Ok::<_, FetchError>(BadgeData::new(&service, &username))
    });

    let content = match &*badge {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed => html! { <ErrorAlert message="Failed to load user badge" /> },
        FetchState::Loaded(badge) => html! {
            <>
                <div class="text-center" style="margin-bottom: 2em;">
                    <img src={badge.image_url.clone()} alt={format!("{}'s GitHub Stats", props.username)}
                        width="495" height="195" class="img-fluid shadow rounded" />
                </div>
                <Snippet title="Markdown" code={badge.markdown_code.clone()} />
                <Snippet title="HTML" code={badge.html_code.clone()} />
            </>
        },
    };

    let title = format!("GitHub Stats Badge for {}", props.username);

    html! {
        <>
            <Title title={title.clone()} />
            <NavBar active="badge" username={props.username.clone()} />
            <div class="container-md" style="max-width: 48rem; padding-top: 1em; padding-bottom: 1em;">
                <h3 class="text-center" style="margin-bottom: 1em;">{title}</h3>
                {content}
            </div>
        </>
    }
}
