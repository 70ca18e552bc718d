use crate::config::{ADMISSION_PATH, INSTITUTION_NAME, STUDENT_LIFE_PATH, TAGLINE};
use crate::scroll::scroll_to_section;
use leptos::*;
use leptos_router::{use_location, A};

/// Scroll to the section named by the URL hash when arriving from another
/// page through a `/#section` link.
fn scroll_to_hash_target() {
    let location = use_location();
    create_effect(move |_| {
        let hash = location.hash.get();
        let id = hash.trim_start_matches('#').to_string();
        if id.is_empty() {
            return;
        }
        request_animation_frame(move || {
            scroll_to_section(&id);
        });
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    scroll_to_hash_target();

    view! {
        <main>
            <section id="accueil" class="min-h-[80vh] flex items-center bg-gradient-to-br from-blue-50 to-white dark:from-gray-900 dark:to-gray-800">
                <div class="container mx-auto px-6 py-24">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white">{INSTITUTION_NAME}</h2>
                    <p class="mt-4 text-lg uppercase tracking-widest text-blue-600 dark:text-blue-400">{TAGLINE}</p>
                    <p class="mt-6 max-w-2xl text-gray-600 dark:text-gray-300">
                        "Une formation exigeante et ouverte sur le monde, au cœur d'Ambohidratrimo."
                    </p>
                    <div class="mt-10 flex flex-wrap gap-4">
                        <A href=ADMISSION_PATH class="px-6 py-3 rounded-lg bg-blue-600 text-white font-semibold">"S'inscrire"</A>
                        <A href=STUDENT_LIFE_PATH class="px-6 py-3 rounded-lg border border-blue-600 text-blue-600 font-semibold">"Vie étudiante"</A>
                    </div>
                </div>
            </section>

            <section id="a-propos" class="min-h-[60vh] py-24">
                <div class="container mx-auto px-6">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"À propos"</h2>
                    <p class="mt-6 max-w-3xl text-gray-600 dark:text-gray-300">
                        "L'UPA accompagne ses étudiants de la licence au master avec un corps "
                        "enseignant issu du monde académique et professionnel."
                    </p>
                </div>
            </section>

            <section id="programmes" class="min-h-[60vh] py-24 bg-gray-50 dark:bg-gray-800">
                <div class="container mx-auto px-6">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Programmes"</h2>
                    <ul class="mt-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-3 text-gray-700 dark:text-gray-300">
                        <li>"Droit"</li>
                        <li>"Gestion et économie"</li>
                        <li>"Informatique"</li>
                        <li>"Communication"</li>
                        <li>"Sciences de l'éducation"</li>
                    </ul>
                </div>
            </section>

            <section id="partenariat" class="min-h-[60vh] py-24">
                <div class="container mx-auto px-6">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Partenaires"</h2>
                    <p class="mt-6 max-w-3xl text-gray-600 dark:text-gray-300">
                        "Entreprises, institutions et universités partenaires accueillent nos "
                        "étudiants en stage et en échange."
                    </p>
                </div>
            </section>
        </main>
    }
}
