use crate::navigation::NavIcon;
use leptos::*;

#[component]
pub fn Icon(
    #[prop(into)] icon: MaybeSignal<NavIcon>,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {move || {
                icon.get()
                    .paths()
                    .iter()
                    .map(|d| view! { <path d=*d></path> })
                    .collect_view()
            }}
        </svg>
    }
}
