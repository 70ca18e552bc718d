use crate::components::{Icon, NavItem};
use crate::config::{
    DRAWER_TRANSITION, INSTITUTION_NAME, INSTITUTION_SHORT_NAME, LOGO_ALT, LOGO_SRC, TAGLINE,
};
use crate::navigation::{NavContext, NavIcon, NavState, Variant};
use leptos::*;

/// Slide-out menu for small screens. Mounted only while the menu is open,
/// plus the length of the exit transition.
#[component]
pub fn MobileDrawer(context: MaybeSignal<NavContext>, state: NavState) -> impl IntoView {
    let close = move |_| state.close_menu();

    view! {
        <AnimatedShow
            when=state.menu_open
            show_class="fixed inset-0 z-40 lg:hidden bg-black/60 backdrop-blur-sm nav-backdrop-enter"
            hide_class="fixed inset-0 z-40 lg:hidden bg-black/60 backdrop-blur-sm nav-backdrop-exit"
            hide_delay=DRAWER_TRANSITION
        >
            <div class="w-full h-full" data-nav-backdrop="" on:click=close></div>
        </AnimatedShow>

        <AnimatedShow
            when=state.menu_open
            show_class="fixed right-0 top-0 bottom-0 w-[85%] max-w-sm z-50 lg:hidden nav-drawer-enter"
            hide_class="fixed right-0 top-0 bottom-0 w-[85%] max-w-sm z-50 lg:hidden nav-drawer-exit"
            hide_delay=DRAWER_TRANSITION
        >
            <aside
                class="flex flex-col h-full bg-white dark:bg-gray-900 shadow-2xl overflow-y-auto"
                aria-label="Menu principal"
            >
                <div class="flex items-center justify-between p-6 border-b border-gray-200 dark:border-gray-700">
                    <div class="flex items-center gap-3">
                        <div class="relative">
                            <div class="absolute inset-0 bg-blue-600 opacity-20 blur-xl rounded-full"></div>
                            <img src=LOGO_SRC alt=LOGO_ALT class="relative w-12 h-12 rounded-lg"/>
                        </div>
                        <div>
                            <h2 class="font-bold text-blue-600 dark:text-blue-400 text-lg">{INSTITUTION_SHORT_NAME}</h2>
                            <p class="text-xs text-gray-500 dark:text-gray-400 uppercase font-semibold">"Menu"</p>
                        </div>
                    </div>
                    <button
                        class="p-2 text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-xl transition-colors"
                        aria-label="Fermer le menu"
                        on:click=close
                    >
                        <Icon icon=NavIcon::Close class="w-6 h-6"/>
                    </button>
                </div>

                <nav class="flex-1 p-6 space-y-2 overflow-y-auto" data-nav="drawer">
                    {move || {
                        context.get()
                            .entries()
                            .iter()
                            .map(|entry| view! {
                                <div>
                                    <NavItem entry=*entry variant=Variant::Mobile state=state/>
                                </div>
                            })
                            .collect_view()
                    }}
                </nav>

                <div class="p-6 border-t border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-800">
                    <p class="text-xs text-center text-gray-500 dark:text-gray-400">{INSTITUTION_NAME}</p>
                    <p class="text-xs text-center text-blue-600 dark:text-blue-400 font-semibold mt-1">{TAGLINE}</p>
                </div>
            </aside>
        </AnimatedShow>
    }
}
