//! Landing page: hero, feature cards, and the call to action.

use crate::components::{AppShell, DisclaimerBanner};
use leptos::prelude::*;
use leptos_router::components::A;

/// Icon, title, description, and target path for each feature card.
const FEATURES: [(&str, &str, &str, &str); 4] = [
    (
        "\u{1F50D}",
        "Find Blood Donors",
        "Quickly locate blood donors in your area with our advanced search system.",
        "/search",
    ),
    (
        "\u{2764}\u{FE0F}",
        "Donate Blood",
        "Register as a blood donor and help save lives in your community.",
        "/donate",
    ),
    (
        "\u{1F6A8}",
        "Emergency Response",
        "24/7 emergency blood request system for urgent medical needs.",
        "/search",
    ),
    (
        "\u{1F4CA}",
        "Track Donations",
        "Keep track of your blood donation history and impact.",
        "/donors",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <DisclaimerBanner />

            <section class="bg-gradient-to-br from-red-600 to-red-800 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight">
                        "Save Lives Through"
                        <span class="block text-red-200 mt-2">"Blood Donation"</span>
                    </h1>
                    <p class="text-xl md:text-2xl mb-8 text-gray-100 max-w-3xl mx-auto leading-relaxed">
                        "Connect blood donors with those in need. Every drop counts, every donor matters."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center mt-8">
                        <A
                            href="/search"
                            {..}
                            class="inline-block bg-white text-red-600 font-semibold text-lg px-8 py-3 rounded-lg hover:bg-gray-100 shadow-lg"
                        >
                            "Find Blood Donors"
                        </A>
                        <A
                            href="/donate"
                            {..}
                            class="inline-block border-2 border-white text-white font-semibold text-lg px-8 py-3 rounded-lg hover:bg-white hover:text-red-600"
                        >
                            "Become a Donor"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50 dark:bg-gray-900">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                            "How We Help Save Lives"
                        </h2>
                        <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto leading-relaxed">
                            "Our platform connects blood donors with patients in need, making the process simple and efficient."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES
                            .into_iter()
                            .map(|(icon, title, description, path)| {
                                view! {
                                    <A
                                        href=path
                                        {..}
                                        class="group bg-white dark:bg-gray-800 p-6 rounded-xl shadow-md hover:shadow-xl transition-shadow border border-gray-100 dark:border-gray-700"
                                    >
                                        <div class="text-4xl mb-4 text-center">{icon}</div>
                                        <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-3 group-hover:text-red-600 text-center">
                                            {title}
                                        </h3>
                                        <p class="text-gray-600 dark:text-gray-300 text-center leading-relaxed">
                                            {description}
                                        </p>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 bg-red-600 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">
                        "Ready to Make a Difference?"
                    </h2>
                    <p class="text-xl mb-8 text-gray-100 max-w-2xl mx-auto leading-relaxed">
                        "Join thousands of donors who are saving lives every day. Your donation can make all the difference."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <A
                            href="/donate"
                            {..}
                            class="inline-block bg-white text-red-600 font-semibold text-lg px-8 py-3 rounded-lg hover:bg-gray-100 shadow-lg"
                        >
                            "Start Donating Today"
                        </A>
                        <A
                            href="/search"
                            {..}
                            class="inline-block border-2 border-white text-white font-semibold text-lg px-8 py-3 rounded-lg hover:bg-white hover:text-red-600"
                        >
                            "Find Blood Now"
                        </A>
                    </div>
                </div>
            </section>
        </AppShell>
    }
}
