//! Standalone sign-in route. Runs the same one-time-code flow as the donor
//! gate, then stores the returned identity and heads home.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::flow::{BrowserSessionStore, FlowState, VerificationFlow};
use crate::routes::notice_alert_kind;
use crate::supabase::SupabaseAuth;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Delay before leaving the page after a successful sign-in, long enough to
/// read the confirmation.
const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flow = RwSignal::new(VerificationFlow::new());
    let (email, set_email) = signal(String::new());
    let (otp, set_otp) = signal(String::new());

    let request_action = Action::new_local(move |address: &String| {
        let address = address.clone();
        async move {
            let mut current = flow.get_untracked();
            let _ = current.request_code(&SupabaseAuth, &address).await;
            flow.set(current);
        }
    });

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move {
            let mut current = flow.get_untracked();
            let result = current
                .verify_code(&SupabaseAuth, &BrowserSessionStore, &code)
                .await;
            flow.set(current);
            result.ok()
        }
    });

    Effect::new(move |_| {
        if let Some(Some(identity)) = verify_action.value().get() {
            auth.set_identity(identity);
            let navigate = navigate.clone();
            Timeout::new(REDIRECT_DELAY_MS, move || {
                navigate("/", Default::default());
            })
            .forget();
        }
    });

    let pending = Signal::derive(move || {
        request_action.pending().get() || verify_action.pending().get()
    });
    let awaiting_code = move || flow.with(|current| current.state() == FlowState::CodeSent);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if flow.with_untracked(|current| current.state() == FlowState::CodeSent) {
            verify_action.dispatch(otp.get_untracked());
        } else {
            request_action.dispatch(email.get_untracked());
        }
    };

    let on_resend = move |_| {
        request_action.dispatch(flow.with_untracked(|current| current.email().to_string()));
    };

    let on_change_email = move |_| {
        flow.update(|current| current.change_email());
        set_otp.set(String::new());
    };

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-md w-full space-y-8">
                    <div>
                        <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900 dark:text-white">
                            "Welcome to DonorLink"
                        </h2>
                        <p class="mt-2 text-center text-sm text-gray-600 dark:text-gray-400">
                            "Enter your email to receive a verification code"
                        </p>
                    </div>

                    <form class="mt-8 space-y-6" on:submit=on_submit>
                        <Show when=move || !awaiting_code()>
                            <div>
                                <label
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                                    for="email"
                                >
                                    "Email Address"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="mt-1 appearance-none relative block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 placeholder-gray-500 dark:placeholder-gray-400 text-gray-900 dark:text-white rounded-md focus:outline-none focus:ring-red-500 focus:border-red-500 sm:text-sm bg-white dark:bg-gray-700"
                                    autocomplete="email"
                                    placeholder="user@example.com"
                                    prop:value=email
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                        </Show>

                        <Show when=awaiting_code>
                            <div>
                                <label
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300"
                                    for="otp"
                                >
                                    "Enter OTP"
                                </label>
                                <input
                                    id="otp"
                                    type="text"
                                    class="mt-1 appearance-none relative block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 placeholder-gray-500 dark:placeholder-gray-400 text-gray-900 dark:text-white rounded-md focus:outline-none focus:ring-red-500 focus:border-red-500 sm:text-sm bg-white dark:bg-gray-700"
                                    placeholder="Enter 6-digit code"
                                    maxlength="6"
                                    prop:value=otp
                                    on:input=move |event| set_otp.set(event_target_value(&event))
                                />
                                <div class="mt-2 flex justify-between items-center">
                                    <button
                                        type="button"
                                        class="text-sm text-red-600 hover:text-red-500 dark:text-red-400 dark:hover:text-red-300 disabled:opacity-50"
                                        disabled=pending
                                        on:click=on_resend
                                    >
                                        "Resend OTP"
                                    </button>
                                    <button
                                        type="button"
                                        class="text-sm text-gray-600 hover:text-gray-500 dark:text-gray-400 dark:hover:text-gray-300"
                                        on:click=on_change_email
                                    >
                                        "Change Email"
                                    </button>
                                </div>
                            </div>
                        </Show>

                        {move || {
                            if flow.with(|current| current.state() == FlowState::Verified) {
                                Some(view! {
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Authentication successful! Taking you home.".to_string()
                                    />
                                })
                            } else {
                                flow.with(|current| current.last_message().cloned()).map(|notice| {
                                    view! {
                                        <Alert
                                            kind=notice_alert_kind(&notice)
                                            message=notice.text
                                        />
                                    }
                                })
                            }
                        }}

                        <Button button_type="submit" disabled=pending>
                            {move || if awaiting_code() { "Verify OTP" } else { "Send OTP to Email" }}
                        </Button>
                        {move || {
                            pending
                                .get()
                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                        }}
                    </form>

                    <div class="mt-6 p-4 bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-md">
                        <h3 class="text-sm font-medium text-blue-800 dark:text-blue-200 mb-2">
                            "Demo Information"
                        </h3>
                        <p class="text-xs text-blue-700 dark:text-blue-300">
                            "For testing purposes, you can use any valid email address. A real \
                             one-time code will be sent to it."
                        </p>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
