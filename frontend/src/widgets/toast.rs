use gloo_timers::callback::Timeout;
use log::{debug, warn};
use url::Url;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config;
use crate::dom;

/// If `href` carries `{param}=1`, returns the same URL without that
/// parameter. Other parameters and the fragment are kept.
pub fn take_flag(href: &str, param: &str) -> Option<String> {
    let mut url = Url::parse(href).ok()?;
    if !url.query_pairs().any(|(key, value)| key == param && value == "1") {
        return None;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    Some(url.into())
}

/// Consume the flag from the live location, rewriting the address bar.
fn consume_sent_flag() -> bool {
    let Ok(window) = dom::window() else {
        return false;
    };
    let Ok(href) = window.location().href() else {
        return false;
    };
    let Some(stripped) = take_flag(&href, config::SENT_PARAM) else {
        return false;
    };

    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&stripped)) {
                warn!("Could not strip {} from url: {:?}", config::SENT_PARAM, err);
            }
        }
        Err(err) => warn!("No history object: {:?}", err),
    }
    true
}

#[derive(Properties, PartialEq)]
pub struct SentToastProps {
    #[prop_or(AttrValue::from("Thanks! Your message is on its way."))]
    pub message: AttrValue,
}

#[function_component(SentToast)]
pub fn sent_toast(props: &SentToastProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut timeout = None;
                if consume_sent_flag() {
                    debug!("Showing sent toast");
                    visible.set(true);
                    let visible = visible.clone();
                    timeout = Some(Timeout::new(config::TOAST_DURATION_MS, move || {
                        visible.set(false);
                    }));
                }
                move || drop(timeout)
            },
            (),
        );
    }

    let dismiss = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div
            class={classes!("toast", (*visible).then(|| "is-visible"))}
            role="status"
            aria-live="polite"
            aria-hidden={(!*visible).to_string()}
        >
            <span class="toast-message">{props.message.clone()}</span>
            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
