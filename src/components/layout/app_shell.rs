//! Shared layout wrapper with navigation, content container, and the footer
//! disclaimer. It centralizes header markup and the mobile menu toggle so
//! routes can focus on content. Navigation stays client-side; the directory
//! itself is readable without signing in.

use super::DisclaimerFooter;
use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-red-600 md:p-0 dark:text-white md:dark:hover:text-red-400 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let commit = build_info::git_commit_hash();
    let short_commit = &commit[..commit.len().min(8)];

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-2xl">"\u{1FA78}"</span>
                        <span class="font-semibold text-xl whitespace-nowrap text-red-600 dark:text-red-400">
                            "DonorLink"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700 md:items-center">
                            <li>
                                <A href="/" {..} class=LINK_CLASS on:click=move |_| set_menu_open.set(false)>
                                    "Home"
                                </A>
                            </li>
                            <li>
                                <A href="/search" {..} class=LINK_CLASS on:click=move |_| set_menu_open.set(false)>
                                    "Find Donors"
                                </A>
                            </li>
                            <li>
                                <A href="/donate" {..} class=LINK_CLASS on:click=move |_| set_menu_open.set(false)>
                                    "Donate Blood"
                                </A>
                            </li>
                            <li>
                                <A href="/donors" {..} class=LINK_CLASS on:click=move |_| set_menu_open.set(false)>
                                    "Donors"
                                </A>
                            </li>
                            <li>
                                <Show
                                    when=move || is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <A
                                                href="/auth"
                                                {..}
                                                class=LINK_CLASS
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        }
                                    }
                                >
                                    <div class="flex flex-col md:flex-row md:items-center md:space-x-8">
                                        <A
                                            href="/profile"
                                            {..}
                                            class=LINK_CLASS
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Profile"
                                        </A>
                                        <button
                                            type="button"
                                            class=LINK_CLASS
                                            on:click=move |_| {
                                                auth.sign_out();
                                                set_menu_open.set(false);
                                            }
                                        >
                                            "Sign Out"
                                        </button>
                                    </div>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                {children()}
            </main>
            <footer>
                <DisclaimerFooter />
                <div class="bg-gray-100 dark:bg-gray-800 pb-3 text-center">
                    <span class="text-xs text-gray-400 dark:text-gray-500 font-mono">
                        {format!("build {short_commit}")}
                    </span>
                </div>
            </footer>
        </div>
    }
}
