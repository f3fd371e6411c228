//! Signed-in profile page showing the identity returned by the OTP
//! verification, plus the sign-out action.

use crate::components::{AppShell, Spinner};
use crate::features::auth::{state::use_auth, RequireAuth};
use crate::flow::Identity;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <RequireAuth>
                <div class="py-8">
                    <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 space-y-6">
                        {move || match auth.identity.get() {
                            Some(identity) => render_profile(identity).into_any(),
                            None => view! {
                                <div class="py-12 flex justify-center"><Spinner /></div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </RequireAuth>
        </AppShell>
    }
}

fn render_profile(identity: Identity) -> impl IntoView {
    let auth = use_auth();

    let initial = identity
        .email
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |first| first.to_uppercase().to_string());
    let last_sign_in = identity
        .last_sign_in_at
        .map_or_else(|| "Never".to_string(), |at| {
            at.format("%b %-d, %Y %H:%M UTC").to_string()
        });
    let email_confirmed = if identity.email_confirmed_at.is_some() { "Yes" } else { "No" };
    let phone_confirmed = if identity.phone_confirmed_at.is_some() { "Yes" } else { "No" };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
            <div class="flex items-center gap-4">
                <div class="w-16 h-16 rounded-full bg-red-100 dark:bg-red-900/30 flex items-center justify-center text-red-600 dark:text-red-400 text-2xl font-bold">
                    {initial}
                </div>
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        {identity.email.clone()}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Blood Bank Member"</p>
                </div>
            </div>
        </div>

        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                "Account Information"
            </h2>
            <dl class="divide-y divide-gray-200 dark:divide-gray-700">
                <div class="py-3 flex justify-between gap-4">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">"User ID"</dt>
                    <dd class="text-sm font-mono text-gray-900 dark:text-white truncate">
                        {identity.id.clone()}
                    </dd>
                </div>
                <div class="py-3 flex justify-between gap-4">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">"Last Sign In"</dt>
                    <dd class="text-sm text-gray-900 dark:text-white">{last_sign_in}</dd>
                </div>
                <div class="py-3 flex justify-between gap-4">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">"Email Confirmed"</dt>
                    <dd class="text-sm text-gray-900 dark:text-white">{email_confirmed}</dd>
                </div>
                <div class="py-3 flex justify-between gap-4">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">"Phone Confirmed"</dt>
                    <dd class="text-sm text-gray-900 dark:text-white">{phone_confirmed}</dd>
                </div>
            </dl>
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <div class="bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-xl p-6">
                <h3 class="text-lg font-semibold text-blue-900 dark:text-blue-100 mb-3">
                    "Security Tips"
                </h3>
                <ul class="text-blue-800 dark:text-blue-200 space-y-2 text-sm">
                    <li>"\u{2022} Never share your OTP with anyone"</li>
                    <li>"\u{2022} Sign out when using a shared device"</li>
                    <li>"\u{2022} Keep your email account secure"</li>
                </ul>
            </div>
            <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-xl p-6">
                <h3 class="text-lg font-semibold text-red-900 dark:text-red-100 mb-3">
                    "Blood Bank Features"
                </h3>
                <ul class="text-red-800 dark:text-red-200 space-y-2 text-sm">
                    <li>"\u{2022} Register as a blood donor"</li>
                    <li>"\u{2022} Search donors by blood group and city"</li>
                    <li>"\u{2022} Browse the full donor directory"</li>
                </ul>
            </div>
        </div>

        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                "Account Actions"
            </h2>
            <button
                type="button"
                class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-lg transition-colors"
                on:click=move |_| auth.sign_out()
            >
                "Sign Out"
            </button>
        </div>
    }
}
