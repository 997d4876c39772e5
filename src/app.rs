//! Casino Admin App
//!
//! Root component: session bootstrap, theme, and the routed dashboard layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{Header, LoginForm, RouteGuard, Sidebar, Toaster};
use crate::context::provide_theme_context;
use crate::pages::{
    AdvancedAnalyticsPage, AnalyticsPage, CasinoFloorPage, DashboardPage, GamingPage, HelpPage, MarketingPage,
    MembersPage, NotFound, RewardsPage, SearchPage, SettingsPage, StaffPage, TravelPage,
};
use crate::store::{store_sidebar_open, store_user, use_app_store, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_theme_context();

    // Snapshot first so a reload lands straight on the dashboard
    if api::restore_session(&store) {
        spawn_local(api::verify_session(store));
    }

    view! {
        <Toaster />
        <Show
            when=move || store_user(&store).is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Router>
                <Shell />
            </Router>
        </Show>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-brand">
                    <span class="login-logo">"🎰"</span>
                    <h1>"Bally's Admin"</h1>
                    <p class="muted">"Sign in to the management console"</p>
                </div>
                <LoginForm />
            </div>
        </div>
    }
}

/// Sidebar, header and the guarded page routes
#[component]
fn Shell() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class=move || if store_sidebar_open(&store) { "app-layout" } else { "app-layout sidebar-collapsed" }>
            <Sidebar />
            <div class="main-column">
                <Header />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path=path!("/dashboard") view=DashboardPage />
                        <Route
                            path=path!("/casino-floor")
                            view=|| view! { <RouteGuard path="/casino-floor"><CasinoFloorPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/members")
                            view=|| view! { <RouteGuard path="/members"><MembersPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/gaming")
                            view=|| view! { <RouteGuard path="/gaming"><GamingPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/rewards")
                            view=|| view! { <RouteGuard path="/rewards"><RewardsPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/marketing")
                            view=|| view! { <RouteGuard path="/marketing"><MarketingPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/travel")
                            view=|| view! { <RouteGuard path="/travel"><TravelPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/staff")
                            view=|| view! { <RouteGuard path="/staff"><StaffPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/advanced-analytics")
                            view=|| view! { <RouteGuard path="/advanced-analytics"><AdvancedAnalyticsPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/analytics")
                            view=|| view! { <RouteGuard path="/analytics"><AnalyticsPage /></RouteGuard> }
                        />
                        <Route
                            path=path!("/settings")
                            view=|| view! { <RouteGuard path="/settings"><SettingsPage /></RouteGuard> }
                        />
                        <Route path=path!("/search") view=SearchPage />
                        <Route path=path!("/help") view=HelpPage />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
