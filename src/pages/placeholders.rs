//! Areas without a dedicated screen yet.

use leptos::prelude::*;

use crate::components::ComingSoon;

#[component]
pub fn CasinoFloorPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Casino Floor"
                description="Live view of tables, machines and floor staff."
                features=&["Table occupancy", "Machine status", "Pit assignments"]
            />
        </div>
    }
}

#[component]
pub fn MarketingPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Marketing"
                description="Campaigns and promotions for members."
                features=&["Campaign scheduling", "Segment targeting"]
            />
        </div>
    }
}

#[component]
pub fn TravelPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Travel & VIP"
                description="Flights, hotel stays and host assignments for VIP guests."
            />
        </div>
    }
}

#[component]
pub fn StaffPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Staff"
                description="Rosters, training records and access levels."
                features=&["Shift planning", "Training tracker", "Role assignment"]
            />
        </div>
    }
}

#[component]
pub fn AdvancedAnalyticsPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Advanced Analytics"
                description="Forecasting and player value modelling."
            />
        </div>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Search"
                description="Find members, sessions and rewards from one place."
            />
        </div>
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="page">
            <ComingSoon
                title="Help"
                description="Guides for floor managers and support contacts."
            />
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <section class="panel">
                <h2>"Page not found"</h2>
                <p class="muted">"The page you are looking for does not exist."</p>
                <a class="primary-btn" href="/dashboard">"Back to dashboard"</a>
            </section>
        </div>
    }
}
