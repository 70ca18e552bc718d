use leptos::*;

#[component]
pub fn StudentLifePage() -> impl IntoView {
    view! {
        <main class="container mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Vie étudiante"</h2>
            <p class="mt-6 max-w-3xl text-gray-600 dark:text-gray-300">
                "Clubs, associations, sport et événements culturels rythment l'année "
                "universitaire sur le campus."
            </p>
        </main>
    }
}
