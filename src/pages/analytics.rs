use leptos::prelude::*;

use crate::components::ComingSoon;

const REPORT_CARDS: &[(&str, &str, &[&str])] = &[
    (
        "Revenue Analytics",
        "Track revenue trends across gaming areas.",
        &["Daily and monthly revenue", "Revenue by game type"],
    ),
    (
        "Customer Insights",
        "Understand member behaviour and preferences.",
        &["Visit frequency", "Tier movement"],
    ),
    (
        "Performance Metrics",
        "Monitor table and machine utilisation.",
        &["Occupancy by hour", "Hold percentage"],
    ),
];

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Analytics & Reports"</h1>
                <p class="muted">"Scheduled reports and operational analytics"</p>
            </div>
            <div class="card-grid">
                {REPORT_CARDS.iter().map(|&(title, description, features)| view! {
                    <ComingSoon title=title description=description features=features />
                }).collect_view()}
            </div>
        </div>
    }
}
