//! Dashboard Page
//!
//! Live metrics from `/api/dashboard/metrics` and shortcuts into the
//! visible areas.

use leptos::prelude::*;

use casino_access::{catalog, filter_navigation, DashboardMetrics};

use super::{format_count, format_money, load_into, LoadError, Loadable};
use crate::api;
use crate::components::icon_glyph;
use crate::store::{store_user, use_app_store};

/// Headline cards: label, value, hint
fn summary_cards(metrics: &DashboardMetrics) -> Vec<(&'static str, String, String)> {
    vec![
        (
            "Active Members",
            format_count(metrics.total_members),
            format!("{} registered today", format_count(metrics.recent_registrations)),
        ),
        (
            "Gaming Sessions",
            format_count(metrics.active_sessions),
            "Open sessions across the floor".to_string(),
        ),
        (
            "Daily Revenue",
            format_money(metrics.daily_revenue),
            format!("{} this week", format_money(metrics.weekly_revenue)),
        ),
        (
            "Monthly Revenue",
            format_money(metrics.monthly_revenue),
            "Completed sessions this month".to_string(),
        ),
    ]
}

#[component]
fn MetricsView(metrics: DashboardMetrics) -> impl IntoView {
    let tiers = metrics.members_by_tier.clone();
    let games = metrics.top_games.clone();

    view! {
        <div class="card-grid">
            {summary_cards(&metrics).into_iter().map(|(label, value, hint)| view! {
                <div class="stat-card">
                    <p class="stat-label">{label}</p>
                    <p class="stat-value">{value}</p>
                    <p class="stat-hint">{hint}</p>
                </div>
            }).collect_view()}
        </div>

        <div class="split-grid">
            <section class="panel">
                <h2>"Members by tier"</h2>
                <dl class="detail-list">
                    {tiers.into_iter().map(|(tier, count)| view! {
                        <dt>{tier}</dt>
                        <dd>{format_count(count)}</dd>
                    }).collect_view()}
                </dl>
            </section>

            <section class="panel">
                <h2>"Top games"</h2>
                {if games.is_empty() {
                    view! { <p class="muted">"No completed sessions yet."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr><th>"Game"</th><th>"Sessions"</th><th>"Revenue"</th></tr>
                            </thead>
                            <tbody>
                                {games.into_iter().map(|game| view! {
                                    <tr>
                                        <td>{game.game_type}</td>
                                        <td>{format_count(game.sessions)}</td>
                                        <td>{format_money(game.revenue)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </section>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let (metrics, set_metrics) = signal(Loadable::<DashboardMetrics>::Loading);
    let reload = move || load_into(set_metrics, api::dashboard_metrics(store));
    reload();

    // Shortcuts mirror the sidebar, minus the dashboard itself
    let shortcuts = Memo::new(move |_| {
        filter_navigation(store_user(&store).as_ref(), &catalog())
            .into_iter()
            .flat_map(|section| section.items)
            .filter(|item| item.path != "/dashboard")
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="muted">"Overview of today's casino operations"</p>
            </div>

            {move || match metrics.get() {
                Loadable::Loading => view! { <p class="muted">"Loading metrics..."</p> }.into_any(),
                Loadable::Ready(data) => view! { <MetricsView metrics=data /> }.into_any(),
                Loadable::Failed(message) => view! { <LoadError message=message on_retry=reload /> }.into_any(),
            }}

            <section class="panel">
                <h2>"Quick access"</h2>
                <div class="shortcut-grid">
                    <For
                        each=move || shortcuts.get()
                        key=|item| item.path.clone()
                        children=|item| view! {
                            <a class="shortcut" href=item.path.clone()>
                                <span class="nav-icon">{icon_glyph(item.icon)}</span>
                                <span>{item.name}</span>
                            </a>
                        }
                    />
                </div>
            </section>
        </div>
    }
}
