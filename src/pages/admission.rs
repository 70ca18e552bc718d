use leptos::*;

#[component]
pub fn AdmissionPage() -> impl IntoView {
    view! {
        <main class="container mx-auto px-6 py-24">
            <h2 class="text-3xl font-bold text-gray-900 dark:text-white">"Admission"</h2>
            <ol class="mt-6 max-w-3xl list-decimal pl-6 space-y-2 text-gray-600 dark:text-gray-300">
                <li>"Retirez et complétez le dossier de candidature."</li>
                <li>"Joignez vos relevés de notes et une copie de votre diplôme."</li>
                <li>"Déposez le dossier au service de la scolarité."</li>
            </ol>
        </main>
    }
}
