use leptos::prelude::*;

use casino_access::{GamingPackage, GamingSession, GamingSessionPage, SessionQuery};

use super::{format_count, format_money, load_into, LoadError, Loadable};
use crate::api;
use crate::components::{ComingSoon, TabBar};
use crate::store::{store_user, use_app_store};

const TABS: &[(&str, &str)] = &[
    ("sessions", "Gaming Sessions"),
    ("packages", "Gaming Packages"),
    ("analytics", "Analytics"),
];

/// Net result from the house's side: a player loss is revenue
fn house_result(session: &GamingSession) -> String {
    match session.net_result {
        Some(net) => format_money(-net),
        None => "In play".to_string(),
    }
}

#[component]
fn SessionList() -> impl IntoView {
    let store = use_app_store();
    let (sessions, set_sessions) = signal(Loadable::<GamingSessionPage>::Loading);
    let reload = move || load_into(set_sessions, api::gaming_sessions(store, SessionQuery::default()));
    reload();

    view! {
        <section class="panel">
            {move || match sessions.get() {
                Loadable::Loading => view! { <p class="muted">"Loading sessions..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <LoadError message=message on_retry=reload /> }.into_any(),
                Loadable::Ready(page) if page.sessions.is_empty() => {
                    view! { <p class="muted">"No gaming sessions recorded."</p> }.into_any()
                }
                Loadable::Ready(page) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Member"</th>
                                <th>"Game"</th>
                                <th>"Location"</th>
                                <th>"Started"</th>
                                <th>"Buy-in"</th>
                                <th>"House result"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page.sessions.into_iter().map(|session| {
                                let result = house_result(&session);
                                let location = session.location().unwrap_or("-").to_string();
                                view! {
                                    <tr>
                                        <td>{session.member_name.clone().unwrap_or_else(|| session.member_id.clone())}</td>
                                        <td>{session.game_type.clone()}</td>
                                        <td>{location}</td>
                                        <td>{session.session_start.format("%Y-%m-%d %H:%M").to_string()}</td>
                                        <td>{format_money(session.buy_in_amount)}</td>
                                        <td>{result}</td>
                                        <td><span class=format!("status-pill {}", session.status)>{session.status.clone()}</span></td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <p class="muted">{format!("{} sessions in total", format_count(page.total))}</p>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PackageList() -> impl IntoView {
    let store = use_app_store();
    let (packages, set_packages) = signal(Loadable::<Vec<GamingPackage>>::Loading);
    let reload = move || load_into(set_packages, api::gaming_packages(store));
    reload();

    let can_manage = move || {
        store_user(&store)
            .map(|user| user.permissions.allows_any(&["gaming:write"]))
            .unwrap_or(false)
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2>"Gaming Packages"</h2>
                <Show when=can_manage>
                    <button class="primary-btn" disabled=true title="Package editing is not available yet">
                        "+ New Package"
                    </button>
                </Show>
            </div>
            {move || match packages.get() {
                Loadable::Loading => view! { <p class="muted">"Loading packages..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <LoadError message=message on_retry=reload /> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => {
                    view! { <p class="muted">"No packages configured."</p> }.into_any()
                }
                Loadable::Ready(list) => view! {
                    <div class="card-grid">
                        {list.into_iter().map(|package| view! {
                            <div class="stat-card">
                                <p class="stat-label">{package.name.clone()}</p>
                                <p class="stat-value">{format_money(package.price)}</p>
                                <p class="stat-hint">
                                    {format!("{} credits, valid {}h", format_money(package.credits), package.validity_hours)}
                                </p>
                                <p class="stat-hint">{package.tier_access.join(", ")}</p>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn GamingPage() -> impl IntoView {
    let (active, set_active) = signal("sessions");

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Gaming Management"</h1>
                <p class="muted">"Sessions, packages and table performance"</p>
            </div>

            <TabBar tabs=TABS active=active set_active=set_active />

            {move || match active.get() {
                "packages" => view! { <PackageList /> }.into_any(),
                "analytics" => view! {
                    <ComingSoon
                        title="Gaming analytics"
                        description="Hold percentage and drop by table and game type."
                    />
                }.into_any(),
                _ => view! { <SessionList /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session(net_result: Option<f64>) -> GamingSession {
        GamingSession {
            id: "s-1".to_string(),
            member_id: "m-1".to_string(),
            member_name: None,
            session_start: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(20, 0, 0))
                .unwrap(),
            session_end: None,
            game_type: "Baccarat".to_string(),
            table_number: None,
            machine_number: None,
            buy_in_amount: 500.0,
            cash_out_amount: None,
            net_result,
            points_earned: 0.0,
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_house_result_flips_player_net() {
        assert_eq!(house_result(&session(Some(-250.0))), "$250");
        assert_eq!(house_result(&session(Some(1_200.0))), "-$1,200");
        assert_eq!(house_result(&session(None)), "In play");
    }
}
