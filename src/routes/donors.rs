//! Donor directory table with client-side search, sorting, and the blood
//! group distribution summary. The whole list is fetched once and reshaped
//! locally on every control change.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::donors::{
    distribution, registered_on, search_and_sort, stats, DirectoryStore, DonorRecord, SortKey,
};
use crate::supabase::SupabaseDirectory;
use leptos::prelude::*;

#[component]
pub fn DonorsPage() -> impl IntoView {
    let donors = LocalResource::new(move || async move { SupabaseDirectory.list().await });

    let (search, set_search) = signal(String::new());
    let (sort_key, set_sort_key) = signal(SortKey::default());

    view! {
        <AppShell>
            <div class="py-8">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-6">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                                "Blood Donors Directory"
                            </h1>
                            <p class="text-gray-600 dark:text-gray-300 mt-1">
                                "Browse our network of registered blood donors ready to help save lives."
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

                    <div class="flex flex-col md:flex-row gap-4">
                        <input
                            type="text"
                            class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                            placeholder="Search by name, blood group, or city..."
                            prop:value=search
                            on:input=move |event| set_search.set(event_target_value(&event))
                        />
                        <select
                            class="px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                            prop:value=move || sort_key.get().key()
                            on:change=move |event| {
                                set_sort_key
                                    .set(SortKey::from_key(&event_target_value(&event)).unwrap_or_default());
                            }
                        >
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| view! {
                                    <option value=key.key()>{format!("Sort by {}", key.label())}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <Suspense fallback=move || view! {
                        <div class="py-12 flex justify-center"><Spinner /></div>
                    }>
                        {move || match donors.get() {
                            Some(Ok(list)) if list.is_empty() => view! {
                                <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-12 text-center text-gray-500 dark:text-gray-400">
                                    "No donors registered yet. Be the first to donate!"
                                </div>
                            }
                            .into_any(),
                            Some(Ok(list)) => {
                                render_directory(list, search, sort_key).into_any()
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

fn render_directory(
    list: Vec<DonorRecord>,
    search: ReadSignal<String>,
    sort_key: ReadSignal<SortKey>,
) -> impl IntoView {
    let summary = stats(&list);
    let spread = distribution(&list);
    let filtered =
        Signal::derive(move || search.with(|term| search_and_sort(&list, term, sort_key.get())));

    let cards = [
        ("Total Donors", summary.total),
        ("Available", summary.total),
        ("Cities", summary.cities),
        ("Blood Groups", summary.blood_types),
    ];

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {cards
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6 text-center">
                            <div class="text-3xl font-bold text-red-600 dark:text-red-400">
                                {value}
                            </div>
                            <div class="text-sm text-gray-500 dark:text-gray-400 mt-1">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-md rounded-xl">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Donor"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Blood Group"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Location"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Contact"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Status"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Registered"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Show when=move || filtered.with(|rows| rows.is_empty())>
                            <tr>
                                <td colspan="6" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                    "No donors match your search."
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || filtered.get()
                            key=|record| record.id
                            children=render_donor_row
                        />
                    </tbody>
                </table>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-md p-6">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                    "Blood Group Distribution"
                </h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {spread
                        .into_iter()
                        .map(|(group, count, percent)| view! {
                            <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                                <div class="flex items-center justify-between mb-2">
                                    <span class="text-lg font-bold text-red-600 dark:text-red-400">
                                        {group.label()}
                                    </span>
                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                        {format!("{percent}%")}
                                    </span>
                                </div>
                                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2 mb-2">
                                    <div
                                        class="bg-red-600 h-2 rounded-full"
                                        style:width=format!("{percent}%")
                                    ></div>
                                </div>
                                <div class="text-sm text-gray-600 dark:text-gray-300">
                                    {format!("{count} donors")}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn render_donor_row(record: DonorRecord) -> impl IntoView {
    let initial = record
        .name
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |first| first.to_uppercase().to_string());
    let blood_label = record
        .blood_type
        .map_or("Unknown", |group| group.label());
    let badge_class = if record.blood_type.is_some() {
        "inline-flex px-2.5 py-0.5 rounded-full text-sm font-semibold bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300"
    } else {
        "inline-flex px-2.5 py-0.5 rounded-full text-sm font-semibold bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-300"
    };
    let phone = if record.phone.is_empty() {
        "N/A".to_string()
    } else {
        record.phone.clone()
    };
    let registered = registered_on(&record);
    let location = (!record.location.is_empty()).then_some(record.location.clone());

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-red-100 dark:bg-red-900/30 flex items-center justify-center text-red-600 dark:text-red-400 font-semibold">
                        {initial}
                    </div>
                    <div>
                        <div class="text-sm font-medium text-gray-900 dark:text-white">
                            {record.name.clone()}
                        </div>
                        <div class="text-sm text-gray-500 dark:text-gray-400">
                            {record.email.clone()}
                        </div>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=badge_class>{blood_label}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm text-gray-900 dark:text-white">{record.city.clone()}</div>
                {location.map(|address| view! {
                    <div class="text-xs text-gray-500 dark:text-gray-400">{address}</div>
                })}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                {phone}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="inline-flex px-2.5 py-0.5 rounded-full text-xs font-semibold bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300">
                    "Available"
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {registered}
            </td>
        </tr>
    }
}
