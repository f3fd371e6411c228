//! Find-donors page: exact blood group and city substring filters over the
//! fetched directory, rendered as contact cards.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::donors::{filter_donors, BloodType, DirectoryStore, DonorRecord};
use crate::supabase::SupabaseDirectory;
use leptos::prelude::*;

#[component]
pub fn SearchPage() -> impl IntoView {
    let donors = LocalResource::new(move || async move { SupabaseDirectory.list().await });

    let (blood_filter, set_blood_filter) = signal(String::new());
    let (city_filter, set_city_filter) = signal(String::new());

    let on_clear = move |_| {
        set_blood_filter.set(String::new());
        set_city_filter.set(String::new());
    };

    view! {
        <AppShell>
            <div class="py-8">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-6">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                                "Find Blood Donors"
                            </h1>
                            <p class="text-gray-600 dark:text-gray-300 mt-1">
                                "Search for available donors by blood group and city."
                            </p>
                        </div>
                        <button
                            type="button"
                            class="self-start px-4 py-2 text-sm font-medium text-red-600 dark:text-red-400 border border-red-200 dark:border-red-800 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                            on:click=move |_| donors.refetch()
                        >
                            "Refresh"
                        </button>
                    </div>

                    <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
                        <div class="grid md:grid-cols-3 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "Blood Group"
                                </label>
                                <select
                                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                                    prop:value=blood_filter
                                    on:change=move |event| set_blood_filter.set(event_target_value(&event))
                                >
                                    <option value="">"All Blood Types"</option>
                                    {BloodType::ALL
                                        .into_iter()
                                        .map(|group| view! {
                                            <option value=group.label()>{group.label()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                    "City"
                                </label>
                                <input
                                    type="text"
                                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                                    placeholder="Enter city name"
                                    prop:value=city_filter
                                    on:input=move |event| set_city_filter.set(event_target_value(&event))
                                />
                            </div>
                            <div class="flex items-end">
                                <button
                                    type="button"
                                    class="w-full px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
                                    on:click=on_clear
                                >
                                    "Clear Filters"
                                </button>
                            </div>
                        </div>
                    </div>

                    <Suspense fallback=move || view! {
                        <div class="py-12 flex justify-center"><Spinner /></div>
                    }>
                        {move || match donors.get() {
                            Some(Ok(list)) => {
                                render_results(list, blood_filter, city_filter).into_any()
                            }
                            Some(Err(err)) => view! {
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            }
                            .into_any(),
                            None => view! {
                                <div class="py-12 flex justify-center"><Spinner /></div>
                            }
                            .into_any(),
                        }}
                    </Suspense>
                </div>
            </div>
        </AppShell>
    }
}

fn render_results(
    list: Vec<DonorRecord>,
    blood_filter: ReadSignal<String>,
    city_filter: ReadSignal<String>,
) -> impl IntoView {
    let filtered = Signal::derive(move || {
        let wanted = blood_filter.with(|value| value.parse::<BloodType>().ok());
        city_filter.with(|city| filter_donors(&list, wanted, city))
    });

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                {move || format!("Available Donors ({})", filtered.with(Vec::len))}
            </h2>
            <Show when=move || filtered.with(|rows| rows.is_empty())>
                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-12 text-center text-gray-500 dark:text-gray-400">
                    "No donors found matching your criteria. Try adjusting your filters."
                </div>
            </Show>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || filtered.get()
                    key=|record| record.id
                    children=render_donor_card
                />
            </div>
        </div>
    }
}

fn render_donor_card(record: DonorRecord) -> impl IntoView {
    let initial = record
        .name
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |first| first.to_uppercase().to_string());
    let blood_label = record.blood_type.map_or("Unknown", |group| group.label());
    let phone = if record.phone.is_empty() {
        "N/A".to_string()
    } else {
        record.phone.clone()
    };
    let location = (!record.location.is_empty()).then_some(record.location.clone());

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6 hover:shadow-lg transition-shadow">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 rounded-full bg-red-100 dark:bg-red-900/30 flex items-center justify-center text-red-600 dark:text-red-400 text-lg font-semibold">
                        {initial}
                    </div>
                    <div>
                        <h3 class="font-semibold text-gray-900 dark:text-white">
                            {record.name.clone()}
                        </h3>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {record.city.clone()}
                        </p>
                    </div>
                </div>
                <span class="inline-flex px-3 py-1 rounded-full text-sm font-bold bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300">
                    {blood_label}
                </span>
            </div>
            <div class="border-t border-gray-200 dark:border-gray-700 pt-4 space-y-2 text-sm">
                <div class="flex justify-between gap-2">
                    <span class="text-gray-500 dark:text-gray-400">"Email:"</span>
                    <span class="text-gray-900 dark:text-white truncate">{record.email.clone()}</span>
                </div>
                <div class="flex justify-between gap-2">
                    <span class="text-gray-500 dark:text-gray-400">"Phone:"</span>
                    <span class="text-gray-900 dark:text-white">{phone}</span>
                </div>
                {location.map(|address| view! {
                    <div class="flex justify-between gap-2">
                        <span class="text-gray-500 dark:text-gray-400">"Location:"</span>
                        <span class="text-gray-900 dark:text-white truncate">{address}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
