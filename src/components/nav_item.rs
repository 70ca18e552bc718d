use crate::analytics::{track_event, CTA_EVENT};
use crate::components::Icon;
use crate::navigation::{classes, LinkKind, NavEntry, NavIcon, NavState, Variant};
use crate::scroll::scroll_to_section;
use leptos::*;

/// One navigation entry in one layout.
///
/// Plain `<a>` elements are enough for route and cross-page links: the
/// router intercepts same-origin anchor clicks and navigates client-side.
/// Same-page anchors scroll themselves, since the router does nothing when
/// the clicked hash is already the current one.
#[component]
pub fn NavItem(entry: NavEntry, variant: Variant, state: NavState) -> impl IntoView {
    let on_click = move |_| {
        if entry.kind == LinkKind::Button {
            track_event(CTA_EVENT);
        }
        if let Some(id) = state.activate(&entry) {
            scroll_to_section(id);
        }
    };

    if entry.kind == LinkKind::Button {
        return view! {
            <a href=entry.href() class=classes::call_to_action(variant) on:click=on_click>
                <Icon icon=NavIcon::GraduationCap class=classes::icon_size(variant)/>
                <span>{entry.label}</span>
            </a>
        }
        .into_view();
    }

    let active = move || state.is_active(&entry);
    let class = move || classes::link(variant, active());
    let aria_current = move || active().then_some("location");

    match variant {
        Variant::Desktop => view! {
            <a href=entry.href() class=class aria-current=aria_current on:click=on_click>
                {entry.label}
            </a>
        }
        .into_view(),
        Variant::Mobile => view! {
            <a href=entry.href() class=class aria-current=aria_current on:click=on_click>
                <Icon icon=NavIcon::for_label(entry.label) class=classes::icon_size(variant)/>
                <span>{entry.label}</span>
            </a>
        }
        .into_view(),
    }
}
