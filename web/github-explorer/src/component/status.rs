use yew::prelude::*;

#[function_component]
pub fn Loading() -> Html {
    html! {
        <div class="d-flex justify-content-center" style="padding-top: 4em; padding-bottom: 4em;">
            <div class="spinner-border" role="status" style="width: 3rem; height: 3rem;">
                <span class="visually-hidden">{"Loading..."}</span>
            </div>
        </div>
    }
}

#[derive(PartialEq, Properties)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
}

#[function_component]
pub fn ErrorAlert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="alert alert-danger text-center" role="alert">
            {props.message.clone()}
        </div>
    }
}
