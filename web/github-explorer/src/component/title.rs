use anyhow::*;
use web_sys::window;
use yew::prelude::*;

const APP_NAME: &str = "GitHub User Explorer";

#[derive(PartialEq, Properties)]
pub struct TitleProps {
    pub title: AttrValue,
}

#[function_component]
pub fn Title(props: &TitleProps) -> Html {
    if let Err(e) = set_title(&document_title(&props.title)) {
        log::error!("set title error: {e}");
    }

    html! {
        <></>
    }
}

fn document_title(title: &str) -> String {
    if title.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{title} - {APP_NAME}")
    }
}

fn set_title(title: &str) -> Result<(), Error> {
    window()
        .ok_or(anyhow!("window not found"))?
        .document()
        .ok_or(anyhow!("document not found"))?
        .set_title(title);
    Ok(())
}
