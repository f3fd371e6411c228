//! Donor registration behind the email verification gate. The page renders
//! one of three screens from the flow state: the verification gate
//! (`Idle`/`CodeSent`), the registration form (`Verified`), and the
//! completion screen (`Completed`).

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::donors::{BloodType, DirectoryStore, DonorForm, FieldErrors, NewDonor};
use crate::features::auth::state::use_auth;
use crate::flow::{BrowserSessionStore, FlowState, VerificationFlow};
use crate::routes::notice_alert_kind;
use crate::supabase::{SupabaseAuth, SupabaseDirectory};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 focus:border-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";

#[component]
pub fn DonatePage() -> impl IntoView {
    let auth = use_auth();
    let flow = RwSignal::new(VerificationFlow::restore_from_session(&BrowserSessionStore));

    let (email, set_email) = signal(flow.with_untracked(|current| current.email().to_string()));
    let (otp, set_otp) = signal(String::new());

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (blood_type, set_blood_type) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (submit_error, set_submit_error) = signal(Option::<String>::None);

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

    let register_action = Action::new_local(move |donor: &NewDonor| {
        let donor = donor.clone();
        async move { SupabaseDirectory.insert(&donor).await }
    });

    // Verifying here signs the user in as well, same as on the auth page.
    Effect::new(move |_| {
        if let Some(Some(identity)) = verify_action.value().get() {
            auth.set_identity(identity);
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    flow.update(|current| current.complete(&BrowserSessionStore));
                    set_field_errors.set(FieldErrors::default());
                    set_submit_error.set(None);
                    set_name.set(String::new());
                    set_phone.set(String::new());
                    set_blood_type.set(String::new());
                    set_city.set(String::new());
                    set_location.set(String::new());
                    set_otp.set(String::new());
                }
                Err(err) => {
                    leptos::logging::error!("failed to add donor: {err}");
                    set_submit_error.set(Some("Failed to register. Please try again.".to_string()));
                }
            }
        }
    });

    let gate_pending = Signal::derive(move || {
        request_action.pending().get() || verify_action.pending().get()
    });

    let on_send_code = move |event: SubmitEvent| {
        event.prevent_default();
        request_action.dispatch(email.get_untracked());
    };

    let on_verify_code = move |event: SubmitEvent| {
        event.prevent_default();
        verify_action.dispatch(otp.get_untracked());
    };

    let on_resend = move |_| {
        request_action.dispatch(flow.with_untracked(|current| current.email().to_string()));
    };

    let on_change_email = move |_| {
        flow.update(|current| current.change_email());
        set_otp.set(String::new());
    };

    let on_register = move |event: SubmitEvent| {
        event.prevent_default();
        let form = DonorForm {
            name: name.get_untracked(),
            email: flow.with_untracked(|current| current.email().to_string()),
            phone: phone.get_untracked(),
            blood_type: blood_type.get_untracked().parse().ok(),
            city: city.get_untracked(),
            location: location.get_untracked(),
        };
        match form.validate() {
            Ok(donor) => {
                set_field_errors.set(FieldErrors::default());
                set_submit_error.set(None);
                register_action.dispatch(donor);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    let on_register_another = move |_| {
        flow.update(|current| current.complete_and_reset(&BrowserSessionStore));
        set_email.set(String::new());
    };

    let notice_view = move || {
        flow.with(|current| current.last_message().cloned()).map(|notice| {
            view! {
                <Alert kind=notice_alert_kind(&notice) message=notice.text />
            }
        })
    };

    view! {
        <AppShell>
            {move || match flow.with(|current| current.state()) {
                FlowState::Idle => view! {
                    <div class="py-8">
                        <div class="max-w-md mx-auto px-4 sm:px-6 lg:px-8">
                            <div class="text-center mb-8">
                                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                                    "Email Verification Required"
                                </h1>
                                <p class="text-gray-600 dark:text-gray-300">
                                    "Please verify your email address to continue with donor registration."
                                </p>
                            </div>
                            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
                                <form class="space-y-6" on:submit=on_send_code>
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            "Email Address *"
                                        </label>
                                        <input
                                            type="email"
                                            class=INPUT_CLASS
                                            placeholder="Enter your email"
                                            prop:value=email
                                            on:input=move |event| set_email.set(event_target_value(&event))
                                        />
                                    </div>
                                    {notice_view}
                                    <Button button_type="submit" disabled=gate_pending>
                                        {move || if request_action.pending().get() {
                                            "Sending OTP..."
                                        } else {
                                            "Send OTP"
                                        }}
                                    </Button>
                                </form>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
                FlowState::CodeSent => view! {
                    <div class="py-8">
                        <div class="max-w-md mx-auto px-4 sm:px-6 lg:px-8">
                            <div class="text-center mb-8">
                                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                                    "Email Verification Required"
                                </h1>
                                <p class="text-gray-600 dark:text-gray-300">
                                    "Please verify your email address to continue with donor registration."
                                </p>
                            </div>
                            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
                                <form class="space-y-6" on:submit=on_verify_code>
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            "Enter OTP"
                                        </label>
                                        <input
                                            type="text"
                                            class=INPUT_CLASS
                                            placeholder="Enter 6-digit code"
                                            maxlength="6"
                                            prop:value=otp
                                            on:input=move |event| set_otp.set(event_target_value(&event))
                                        />
                                    </div>
                                    <Alert
                                        kind=AlertKind::Info
                                        message=flow.with_untracked(|current| {
                                            format!("We've sent a 6-digit code to {}", current.email())
                                        })
                                    />
                                    {notice_view}
                                    <div class="space-y-3">
                                        <Button button_type="submit" disabled=gate_pending>
                                            {move || if verify_action.pending().get() {
                                                "Verifying..."
                                            } else {
                                                "Verify OTP"
                                            }}
                                        </Button>
                                        <button
                                            type="button"
                                            class="w-full px-4 py-2 text-sm text-red-600 hover:text-red-500 dark:text-red-400 dark:hover:text-red-300 disabled:opacity-50"
                                            disabled=gate_pending
                                            on:click=on_resend
                                        >
                                            "Resend OTP"
                                        </button>
                                        <button
                                            type="button"
                                            class="w-full px-4 py-2 text-sm text-gray-600 hover:text-gray-500 dark:text-gray-400 dark:hover:text-gray-300"
                                            on:click=on_change_email
                                        >
                                            "Change Email"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
                FlowState::Verified => view! {
                    <div class="py-8">
                        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                            <div class="text-center mb-8">
                                <h1 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                                    "Become a Blood Donor"
                                </h1>
                                <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                                    "Join our network of lifesavers. Your donation can make all the difference for someone in need."
                                </p>
                            </div>

                            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
                                <div class="mb-6">
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Email verified successfully! You can now complete your donor registration.".to_string()
                                    />
                                </div>

                                <form class="space-y-6" on:submit=on_register>
                                    <div>
                                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                            "Personal Information"
                                        </h3>
                                        <div class="grid md:grid-cols-2 gap-4">
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "Full Name *"
                                                </label>
                                                <input
                                                    type="text"
                                                    class=INPUT_CLASS
                                                    class:border-red-500=move || field_errors.with(|errors| errors.name.is_some())
                                                    placeholder="Enter your full name"
                                                    prop:value=name
                                                    on:input=move |event| set_name.set(event_target_value(&event))
                                                />
                                                <FieldError message=Signal::derive(move || {
                                                    field_errors.with(|errors| errors.name.clone())
                                                }) />
                                            </div>
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "Email Address *"
                                                </label>
                                                <div class="relative">
                                                    <input
                                                        type="email"
                                                        class=INPUT_CLASS
                                                        readonly=true
                                                        prop:value=move || flow.with(|current| current.email().to_string())
                                                    />
                                                    <div class="absolute inset-y-0 right-0 flex items-center pr-3">
                                                        <span class="text-green-500 text-sm">"\u{2713} Verified"</span>
                                                    </div>
                                                </div>
                                            </div>
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "Phone Number *"
                                                </label>
                                                <input
                                                    type="tel"
                                                    class=INPUT_CLASS
                                                    class:border-red-500=move || field_errors.with(|errors| errors.phone.is_some())
                                                    placeholder="Enter your 10-digit phone number"
                                                    maxlength="10"
                                                    prop:value=phone
                                                    on:input=move |event| set_phone.set(event_target_value(&event))
                                                />
                                                <FieldError message=Signal::derive(move || {
                                                    field_errors.with(|errors| errors.phone.clone())
                                                }) />
                                            </div>
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "Blood Type *"
                                                </label>
                                                <select
                                                    class=INPUT_CLASS
                                                    class:border-red-500=move || field_errors.with(|errors| errors.blood_type.is_some())
                                                    prop:value=blood_type
                                                    on:change=move |event| set_blood_type.set(event_target_value(&event))
                                                >
                                                    <option value="">"Select blood type"</option>
                                                    {BloodType::ALL
                                                        .into_iter()
                                                        .map(|group| view! {
                                                            <option value=group.label()>{group.label()}</option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <FieldError message=Signal::derive(move || {
                                                    field_errors.with(|errors| errors.blood_type.clone())
                                                }) />
                                            </div>
                                        </div>
                                    </div>

                                    <div>
                                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                            "Location Information"
                                        </h3>
                                        <div class="grid md:grid-cols-2 gap-4">
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "City *"
                                                </label>
                                                <input
                                                    type="text"
                                                    class=INPUT_CLASS
                                                    class:border-red-500=move || field_errors.with(|errors| errors.city.is_some())
                                                    placeholder="Enter your city"
                                                    prop:value=city
                                                    on:input=move |event| set_city.set(event_target_value(&event))
                                                />
                                                <FieldError message=Signal::derive(move || {
                                                    field_errors.with(|errors| errors.city.clone())
                                                }) />
                                            </div>
                                            <div>
                                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                                    "Location/Address"
                                                </label>
                                                <input
                                                    type="text"
                                                    class=INPUT_CLASS
                                                    placeholder="Enter your address or location"
                                                    prop:value=location
                                                    on:input=move |event| set_location.set(event_target_value(&event))
                                                />
                                            </div>
                                        </div>
                                    </div>

                                    <div class="pt-6 border-t border-gray-200 dark:border-gray-700">
                                        {move || {
                                            submit_error.get().map(|message| {
                                                view! {
                                                    <div class="mb-4">
                                                        <Alert kind=AlertKind::Error message=message />
                                                    </div>
                                                }
                                            })
                                        }}
                                        <Button button_type="submit" disabled=register_action.pending()>
                                            {move || if register_action.pending().get() {
                                                "Registering..."
                                            } else {
                                                "Register as Blood Donor"
                                            }}
                                        </Button>
                                        {move || {
                                            register_action
                                                .pending()
                                                .get()
                                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                                        }}
                                    </div>
                                </form>
                            </div>

                            <div class="mt-8 grid md:grid-cols-2 gap-6">
                                <div class="bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-xl p-6">
                                    <h3 class="text-lg font-semibold text-blue-900 dark:text-blue-100 mb-3">
                                        "Donation Requirements"
                                    </h3>
                                    <ul class="text-blue-800 dark:text-blue-200 space-y-2 text-sm">
                                        <li>"\u{2022} Age between 18-65 years"</li>
                                        <li>"\u{2022} Weight at least 50kg (110 lbs)"</li>
                                        <li>"\u{2022} Good general health"</li>
                                        <li>"\u{2022} No recent surgeries or illnesses"</li>
                                        <li>"\u{2022} Not pregnant or recently given birth"</li>
                                    </ul>
                                </div>
                                <div class="bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-xl p-6">
                                    <h3 class="text-lg font-semibold text-green-900 dark:text-green-100 mb-3">
                                        "Benefits of Donating"
                                    </h3>
                                    <ul class="text-green-800 dark:text-green-200 space-y-2 text-sm">
                                        <li>"\u{2022} Save up to 3 lives per donation"</li>
                                        <li>"\u{2022} Free health checkup"</li>
                                        <li>"\u{2022} Reduce risk of heart disease"</li>
                                        <li>"\u{2022} Help maintain healthy iron levels"</li>
                                        <li>"\u{2022} Feel good about helping others"</li>
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
                FlowState::Completed => view! {
                    <div class="min-h-[60vh] flex items-center justify-center py-8">
                        <div class="max-w-md mx-auto px-4">
                            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6 text-center">
                                <div class="text-6xl mb-4">"\u{2764}\u{FE0F}"</div>
                                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                                    "Thank You for Your Generosity!"
                                </h2>
                                <p class="text-gray-600 dark:text-gray-300 mb-6">
                                    "Your blood donation registration has been successfully completed. \
                                     You are now part of our lifesaving network and will be contacted \
                                     when there's a need for your blood type in your area."
                                </p>
                                <div class="bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-lg p-4 mb-6 text-left">
                                    <p class="text-green-800 dark:text-green-200 text-sm">
                                        <strong>"What happens next?"</strong><br />
                                        "\u{2022} You'll receive a confirmation email"<br />
                                        "\u{2022} We'll contact you when there's a need for your blood type"<br />
                                        "\u{2022} You can update your information anytime"
                                    </p>
                                </div>
                                <Button button_type="button" {..} on:click=on_register_another>
                                    "Register Another Donor"
                                </Button>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </AppShell>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="text-red-500 text-sm mt-1">{text}</p> })
    }
}
