use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container mx-auto px-6 py-24 text-center">
            <h2 class="text-5xl font-bold text-gray-900 dark:text-white">"404"</h2>
            <p class="mt-4 text-gray-600 dark:text-gray-300">"Page introuvable"</p>

            <nav class="mt-8">
                <A href="/" class="text-blue-600 dark:text-blue-400">"< Retour à l'accueil"</A>
            </nav>
        </main>
    }
}
