//! Routed Pages
//!
//! One panel per navigation entry.

mod analytics;
mod dashboard;
mod gaming;
mod members;
mod placeholders;
mod rewards;
mod settings;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use gaming::GamingPage;
pub use members::MembersPage;
pub use placeholders::{
    AdvancedAnalyticsPage, CasinoFloorPage, HelpPage, MarketingPage, NotFound, SearchPage, StaffPage, TravelPage,
};
pub use rewards::RewardsPage;
pub use settings::SettingsPage;

/// Panel data fetched from the API
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> From<Result<T, String>> for Loadable<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(message) => Loadable::Failed(message),
        }
    }
}

/// Reset `target` to loading and fill it when `request` settles.
///
/// A result arriving after the panel is gone is dropped.
pub fn load_into<T, F>(target: WriteSignal<Loadable<T>>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, String>> + 'static,
{
    target.set(Loadable::Loading);
    spawn_local(async move {
        let _ = target.try_set(request.await.into());
    });
}

/// Error line with a retry button
#[component]
fn LoadError(message: String, on_retry: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="panel load-error" role="alert">
            <p>{message}</p>
            <button class="secondary-btn" on:click=move |_| on_retry()>"Retry"</button>
        </div>
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `1520` -> `1,520`
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Whole dollars with separators; negative amounts keep their sign
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// `1250.5` -> `1,251 pts`
pub fn format_points(points: f64) -> String {
    format!("{} pts", group_thousands(&format!("{:.0}", points.round().max(0.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_520), "1,520");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(18_250.0), "$18,250");
        assert_eq!(format_money(96_400.5), "$96,401");
        assert_eq!(format_money(-1_500.0), "-$1,500");
        assert_eq!(format_money(0.2), "$0");
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(1250.5), "1,251 pts");
        assert_eq!(format_points(2500.0), "2,500 pts");
    }

    #[test]
    fn test_loadable_from_result() {
        assert_eq!(Loadable::from(Ok::<_, String>(3)), Loadable::Ready(3));
        assert_eq!(
            Loadable::<u8>::from(Err("Failed to load rewards".to_string())),
            Loadable::Failed("Failed to load rewards".to_string())
        );
    }
}
