mod auth;
mod donate;
mod donors;
mod home;
mod not_found;
mod profile;
mod search;

pub(crate) use auth::AuthPage;
pub(crate) use donate::DonatePage;
pub(crate) use donors::DonorsPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use search::SearchPage;

use crate::components::AlertKind;
use crate::flow::{Notice, NoticeKind};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Maps a flow notice onto the alert styling used across the pages.
pub(crate) fn notice_alert_kind(notice: &Notice) -> AlertKind {
    match notice.kind {
        NoticeKind::Success => AlertKind::Success,
        NoticeKind::Error => AlertKind::Error,
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/auth") view=AuthPage />
            <Route path=path!("/donate") view=DonatePage />
            <Route path=path!("/donors") view=DonorsPage />
            <Route path=path!("/search") view=SearchPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
