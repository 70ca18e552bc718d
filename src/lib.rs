pub mod analytics;
pub mod components;
pub mod config;
pub mod console;
pub mod navigation;
pub mod pages;
pub mod scroll;
pub mod sections;

use components::NavBar;
use config::{ADMISSION_PATH, HOME_PATH, NEWS_LIST_PATH, STUDENT_LIFE_PATH};
use leptos::*;
use leptos_router::*;
use navigation::NavContext;
use pages::{AdmissionPage, HomePage, NewsListPage, NotFoundPage, StudentLifePage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// On `popstate`, the router updates its internal location signal but doesn't
/// always trigger the `<Routes>` component to re-evaluate which view to show.
/// A full reload re-initializes the app at the correct URL; scroll position
/// survives through session storage.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container mx-auto px-6 py-24">
                <h2 class="text-2xl font-bold">"Une erreur est survenue"</h2>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Recharger la page"</button>
            </main>
        }>
            <Router>
                <RoutedNavBar/>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=STUDENT_LIFE_PATH view=StudentLifePage/>
                    <Route path=ADMISSION_PATH view=AdmissionPage/>
                    <Route path=NEWS_LIST_PATH view=NewsListPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Navigation bar whose context follows the current route.
#[component]
fn RoutedNavBar() -> impl IntoView {
    let location = use_location();
    let context =
        Signal::derive(move || location.pathname.with(|path| NavContext::for_path(path)));

    view! { <NavBar context=context/> }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    scroll::setup_scroll_restoration();
    setup_popstate_reload();
    mount_to_body(Root);
    // Restore scroll after a brief delay to ensure content has rendered
    scroll::restore_scroll_after_delay(50);
}
