use std::rc::Rc;

use crate::components::{Icon, MobileDrawer, NavItem};
use crate::config::{INSTITUTION_NAME, LOGO_ALT, LOGO_SRC, TAGLINE};
use crate::navigation::{classes, NavContext, NavIcon, NavState, Variant};
use crate::scroll::watch_scroll_offset;
use crate::sections::{ObserverSlot, SectionObserver};
use leptos::*;
use leptos_router::A;

/// Sticky site header with desktop links and the mobile drawer.
///
/// `context` selects the link set. It may change while mounted (the root
/// view derives it from the current route); each change resets the active
/// anchor and restarts section tracking.
#[component]
pub fn NavBar(#[prop(optional, into)] context: MaybeSignal<NavContext>) -> impl IntoView {
    let state = NavState::new(context.get_untracked());
    watch_scroll_offset(move |offset| state.record_scroll(offset));
    track_sections(context, state);

    let compact = state.compact;
    let menu_open = state.menu_open;
    let toggle_icon = Signal::derive(move || {
        if menu_open.get() {
            NavIcon::Close
        } else {
            NavIcon::Menu
        }
    });

    view! {
        <header
            class=move || classes::header(compact.get())
            data-nav-context=move || context.get().as_str()
        >
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between h-20">
                    <A href="/" class="flex items-center gap-3 group">
                        <div class=move || classes::logo_frame(compact.get())>
                            <div class="absolute inset-0 bg-blue-600 opacity-0 group-hover:opacity-20 rounded-full blur-xl transition-opacity duration-300"></div>
                            <img
                                src=LOGO_SRC
                                alt=LOGO_ALT
                                class="relative w-full h-auto transition-transform duration-300 group-hover:scale-110"
                            />
                        </div>
                        <div>
                            <h1 class=move || classes::title(compact.get())>{INSTITUTION_NAME}</h1>
                            <p class=move || classes::tagline(compact.get())>{TAGLINE}</p>
                        </div>
                    </A>

                    <button
                        class="lg:hidden p-2 text-blue-600 dark:text-blue-400 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-lg transition-colors duration-300"
                        aria-label="Toggle menu"
                        data-nav-toggle=""
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        <Icon icon=toggle_icon class="w-7 h-7"/>
                    </button>

                    <nav class="hidden lg:flex items-center gap-2" data-nav="desktop">
                        {move || {
                            context.get()
                                .entries()
                                .iter()
                                .map(|entry| view! {
                                    <div>
                                        <NavItem entry=*entry variant=Variant::Desktop state=state/>
                                    </div>
                                })
                                .collect_view()
                        }}
                    </nav>
                </div>
            </div>

            <MobileDrawer context=context state=state/>
        </header>
    }
}

/// Follow which in-page section is centered in the viewport.
///
/// Runs on mount and on every context change: the previous observer is
/// disconnected first, then sections of the new context are observed on
/// the next animation frame. Contexts without in-page anchors observe
/// nothing and keep an empty active anchor.
fn track_sections(context: MaybeSignal<NavContext>, state: NavState) {
    let slot = Rc::new(ObserverSlot::default());

    create_effect({
        let slot = Rc::clone(&slot);
        move |previous: Option<NavContext>| {
            let current = context.get();
            let generation = slot.reset();
            if previous.is_some_and(|previous| previous != current) {
                state.reset_for(current);
            }
            if !current.tracks_sections() {
                return current;
            }

            let slot = Rc::clone(&slot);
            request_animation_frame(move || {
                if !slot.is_current(generation) {
                    return;
                }
                let observer = SectionObserver::observe(&current.observed_sections(), move |id| {
                    state.section_visible(id)
                });
                slot.install(generation, observer);
            });
            current
        }
    });

    on_cleanup(move || {
        slot.reset();
    });
}
