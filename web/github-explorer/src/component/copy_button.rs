use anyhow::{anyhow, Result};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;
use yew::prelude::*;

/// How long "Copied!" stays on a button after a successful copy.
pub const COPIED_DURATION_MS: u32 = 2000;

fn copy_label(copied: bool) -> &'static str {
    if copied {
        "Copied!"
    } else {
        "Copy"
    }
}

async fn write_clipboard(text: &str) -> Result<()> {
    let clipboard = window()
        .ok_or(anyhow!("window not found"))?
        .navigator()
        .clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| anyhow!("clipboard rejected write: {e:?}"))?;
    Ok(())
}

#[derive(PartialEq, Properties)]
pub struct CopyButtonProps {
    pub text: AttrValue,
}

/// Copies `text` to the clipboard. Each button tracks its own
/// acknowledgement; clicking again restarts the window.
#[function_component]
pub fn CopyButton(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    // dropping the handle cancels the pending reset
    let reset = use_mut_ref(|| None::<Timeout>);

    let on_click = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let reset = reset.clone();
            let text = text.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        let copied = copied.clone();
                        *reset.borrow_mut() = Some(Timeout::new(COPIED_DURATION_MS, move || {
                            copied.set(false)
                        }));
                    }
                    Err(e) => log::error!("Failed to copy: {e}"),
                }
            });
        })
    };

    html! {
        <button type="button" class="btn btn-sm btn-primary position-absolute top-0 end-0 m-2" onclick={on_click}>
            {copy_label(*copied)}
        </button>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_copy_label() {
        assert_eq!(copy_label(false), "Copy");
        assert_eq!(copy_label(true), "Copied!");
    }
}
