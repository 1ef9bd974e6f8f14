use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

/// `HH:MM:SS` in `tz`, followed by the zone abbreviation.
pub fn format_clock(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%H:%M:%S %Z").to_string()
}

#[derive(Properties, PartialEq)]
pub struct ClockProps {
    #[prop_or(config::CLOCK_TIMEZONE)]
    pub timezone: Tz,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Clock)]
pub fn clock(props: &ClockProps) -> Html {
    let tz = props.timezone;
    let now = use_state(|| format_clock(Utc::now(), tz));

    {
        let now = now.clone();
        use_interval(
            move || now.set(format_clock(Utc::now(), tz)),
            config::CLOCK_TICK_MS,
        );
    }

    html! {
        <div class="clock" title={tz.name()}>
            if let Some(label) = props.label.clone() {
                <span class="clock-label">{label}</span>
            }
            <time class="clock-time">{(*now).clone()}</time>
        </div>
    }
}
