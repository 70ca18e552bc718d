use leptos::*;

#[component]
pub fn NewsListPage() -> impl IntoView {
    view! {
        <main class="container mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Actualités"</h2>
            <p class="mt-6 text-gray-600 dark:text-gray-300">"Aucune actualité pour le moment."</p>
        </main>
    }
}
