//! Layout components shared across routes.

mod app_shell;
mod disclaimer;

pub(crate) use app_shell::AppShell;
pub(crate) use disclaimer::{DisclaimerBanner, DisclaimerFooter};
