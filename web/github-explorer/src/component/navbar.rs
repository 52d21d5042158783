use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_TITLE: &str = "GitHub User Explorer";

#[derive(PartialEq, Properties)]
pub struct NavBarProps {
    pub active: &'static str,
    /// Username the current page is about, shown as extra links.
    #[prop_or_default]
    pub username: Option<AttrValue>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let mut nav_items = vec![Item {
        id: "home",
        title: "Search",
        href: Route::Home,
    }];
    if let Some(username) = &props.username {
        nav_items.push(Item {
            id: "user",
            title: "Repositories",
            href: Route::User {
                username: username.to_string(),
            },
        });
        nav_items.push(Item {
            id: "badge",
            title: "Badge",
            href: Route::Badge {
                username: username.to_string(),
            },
        });
    }

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary" style="margin-bottom: 1em;">
            <div class="container-fluid">
                <Link<Route> classes={classes!("navbar-brand")} to={Route::Home}>
                    <i class="bi bi-github" style="margin-right: 0.5em;"></i>
                    {NAV_TITLE}
                </Link<Route>>
                <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav" aria-controls="navbarNav" aria-expanded="false" aria-label="Menu">
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" id="navbarNav">
                    <ul class="navbar-nav">
                        {nav_items.into_iter().map(|item| html! {
                            <NavItem item={item} active={props.active}/>
                        }).collect::<Html>()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[derive(PartialEq, Clone)]
struct Item {
    id: &'static str,
    title: &'static str,
    href: Route,
}

#[derive(PartialEq, Properties)]
struct NavItemProps {
    item: Item,
    active: &'static str,
}

#[function_component]
fn NavItem(props: &NavItemProps) -> Html {
    let mut link_class = classes!("nav-link");
    if props.item.id == props.active {
        link_class.push("active")
    }

    html! {
        <li class="nav-item">
            <Link<Route> classes={link_class} to={props.item.href.clone()}>{props.item.title}</Link<Route>>
        </li>
    }
}
