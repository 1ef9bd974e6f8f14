use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::dom;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub href: AttrValue,
    pub label: AttrValue,
}

impl NavItem {
    pub fn new(href: &'static str, label: &'static str) -> Self {
        Self {
            href: AttrValue::Static(href),
            label: AttrValue::Static(label),
        }
    }

    /// Fragment id when the link points into this page.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// Index of the last section whose top edge has crossed `line`. Sections are
/// in document order; `None` entries are sections missing from the page.
/// At the bottom of the document the last present section wins, since short
/// trailing sections never reach the line.
pub fn current_section(tops: &[Option<f64>], line: f64, at_bottom: bool) -> Option<usize> {
    let present = tops.iter().enumerate().filter_map(|(i, top)| top.map(|top| (i, top)));
    if at_bottom {
        return present.map(|(i, _)| i).last();
    }
    present.filter(|(_, top)| *top <= line).map(|(i, _)| i).last()
}

/// True once the viewport's bottom edge is within a pixel of the document end.
pub fn scrolled_to_bottom(scroll_y: f64, viewport_height: f64, scroll_height: f64) -> bool {
    scroll_height > viewport_height && scroll_y + viewport_height >= scroll_height - 1.0
}

fn page_at_bottom() -> bool {
    let (Ok(window), Ok(document)) = (dom::window(), dom::document()) else {
        return false;
    };
    let Some(root) = document.document_element() else {
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    scrolled_to_bottom(scroll_y, viewport_height, root.scroll_height() as f64)
}

fn spy(items: &[NavItem]) -> Option<usize> {
    current_section(&section_tops(items), config::NAV_ACTIVATION_LINE, page_at_bottom())
}

fn section_tops(items: &[NavItem]) -> Vec<Option<f64>> {
    let Ok(document) = dom::document() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            item.fragment()
                .and_then(|id| document.get_element_by_id(id))
                .map(|section| section.get_bounding_client_rect().top())
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: Vec<NavItem>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let active = use_state(|| None::<usize>);

    // Pages opened at a fragment get their link highlighted before any scroll.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |items: &Vec<NavItem>| {
                active.set(spy(items));
                || ()
            },
            props.items.clone(),
        );
    }

    {
        let active = active.clone();
        let items = props.items.clone();
        use_event_with_window("scroll", move |_: Event| {
            let current = spy(&items);
            if *active != current {
                active.set(current);
            }
        });
    }

    let links = props.items.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let active = active.clone();
            let item = item.clone();
            Callback::from(move |event: MouseEvent| {
                let Some(id) = item.fragment() else {
                    return;
                };
                let Some(target) = dom::document().ok().and_then(|d| d.get_element_by_id(id)) else {
                    return;
                };
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
                active.set(Some(index));
            })
        };

        html! {
            <a
                href={item.href.clone()}
                class={classes!("nav-link", (*active == Some(index)).then(|| "is-active"))}
                onclick={onclick}
            >
                {item.label.clone()}
            </a>
        }
    });

    html! {
        <nav class="nav">
            { for links }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_active_above_the_first_section() {
        let tops = [Some(300.0), Some(900.0), Some(1600.0)];
        assert_eq!(current_section(&tops, 120.0, false), None);
    }

    #[test]
    fn last_crossed_section_wins() {
        let tops = [Some(-700.0), Some(100.0), Some(700.0)];
        assert_eq!(current_section(&tops, 120.0, false), Some(1));

        let tops = [Some(-2000.0), Some(-1200.0), Some(120.0)];
        assert_eq!(current_section(&tops, 120.0, false), Some(2));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let tops = [Some(-400.0), None, Some(500.0)];
        assert_eq!(current_section(&tops, 120.0, false), Some(0));
        assert_eq!(current_section(&[None, None], 120.0, false), None);
        assert_eq!(current_section(&[], 120.0, false), None);
    }

    #[test]
    fn bottom_of_page_activates_the_last_section() {
        // Contact is too short to reach the line once the page runs out.
        let tops = [Some(-2400.0), Some(-1500.0), Some(-300.0), Some(400.0)];
        assert_eq!(current_section(&tops, 120.0, false), Some(2));
        assert_eq!(current_section(&tops, 120.0, true), Some(3));

        let tops = [Some(-900.0), Some(200.0), None];
        assert_eq!(current_section(&tops, 120.0, true), Some(1));
        assert_eq!(current_section(&[None, None], 120.0, true), None);
    }

    #[test]
    fn bottom_detection_allows_a_pixel_of_slack() {
        assert!(scrolled_to_bottom(3200.0, 800.0, 4000.0));
        assert!(scrolled_to_bottom(3199.5, 800.0, 4000.0));
        assert!(!scrolled_to_bottom(3100.0, 800.0, 4000.0));
        assert!(!scrolled_to_bottom(0.0, 800.0, 4000.0));
    }

    #[test]
    fn page_shorter_than_viewport_is_never_at_bottom() {
        assert!(!scrolled_to_bottom(0.0, 900.0, 900.0));
        assert!(!scrolled_to_bottom(0.0, 900.0, 600.0));
    }

    #[test]
    fn only_fragment_links_scroll() {
        assert_eq!(NavItem::new("#work", "Work").fragment(), Some("work"));
        assert_eq!(NavItem::new("#", "Top").fragment(), None);
        assert_eq!(NavItem::new("/blog", "Blog").fragment(), None);
        assert_eq!(NavItem::new("https://x.dev/#a", "Ext").fragment(), None);
    }
}
