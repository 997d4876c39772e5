use leptos::prelude::*;
use leptos::task::spawn_local;

use casino_access::{Member, MemberPage, MemberQuery};

use super::{format_count, format_money, format_points, LoadError, Loadable};
use crate::api;
use crate::components::{ComingSoon, TabBar};
use crate::store::{store_user, use_app_store};

const TABS: &[(&str, &str)] = &[
    ("directory", "Directory"),
    ("tiers", "Tiers"),
    ("verification", "Verification"),
];

const TIERS: &[(&str, &str)] = &[
    ("Ruby", "Entry tier for new members"),
    ("Sapphire", "Regular players with steady activity"),
    ("Diamond", "High-value members with host access"),
    ("VIP", "Invitation only"),
];

/// Members fetched per page
const PAGE_SIZE: u32 = 50;

fn directory_query(search: &str, tier: &str) -> MemberQuery {
    let mut query = MemberQuery::default().page(0, PAGE_SIZE).search(search);
    if !tier.is_empty() {
        query = query.tier(tier);
    }
    query
}

fn member_status(member: &Member) -> &'static str {
    if member.self_excluded {
        "Self-excluded"
    } else if member.kyc_verified {
        "Verified"
    } else {
        "Pending KYC"
    }
}

#[component]
fn MemberTable(page: MemberPage) -> impl IntoView {
    if page.members.is_empty() {
        return view! { <p class="muted">"No members match these filters."</p> }.into_any();
    }

    let summary = format!(
        "Showing {} of {} members",
        format_count(page.members.len() as u64),
        format_count(page.total)
    );
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Member"</th>
                    <th>"Number"</th>
                    <th>"Tier"</th>
                    <th>"Points"</th>
                    <th>"Lifetime spend"</th>
                    <th>"Last visit"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {page.members.into_iter().map(|member| {
                    let status = member_status(&member);
                    let last_visit = member
                        .last_visit
                        .map(|at| at.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "Never".to_string());
                    view! {
                        <tr>
                            <td>
                                <div>{member.full_name()}</div>
                                <div class="muted">{member.email.clone()}</div>
                            </td>
                            <td>{member.member_number.clone()}</td>
                            <td>{member.tier.clone()}</td>
                            <td>{format_points(member.points_balance)}</td>
                            <td>{format_money(member.lifetime_spend)}</td>
                            <td>{last_visit}</td>
                            <td>{status}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
        <p class="muted">{summary}</p>
    }
    .into_any()
}

#[component]
fn MemberDirectory() -> impl IntoView {
    let store = use_app_store();
    let (search, set_search) = signal(String::new());
    let (tier, set_tier) = signal(String::new());
    let (members, set_members) = signal(Loadable::<MemberPage>::Loading);

    // Bumped on every request so an older response cannot overwrite a newer one
    let generation = StoredValue::new(0u32);
    let reload = move || {
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        let query = directory_query(&search.get_untracked(), &tier.get_untracked());
        set_members.set(Loadable::Loading);
        spawn_local(async move {
            let result = api::members(store, query).await;
            if generation.try_get_value() == Some(mine) {
                let _ = set_members.try_set(result.into());
            }
        });
    };
    reload();

    view! {
        <section class="panel">
            <form
                class="filter-row"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    reload();
                }
            >
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name, member number or email"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        set_tier.set(event_target_value(&ev));
                        reload();
                    }
                >
                    <option value="">"All tiers"</option>
                    {TIERS.iter().map(|&(name, _)| view! { <option value=name>{name}</option> }).collect_view()}
                </select>
                <button type="submit" class="secondary-btn">"Search"</button>
            </form>

            {move || match members.get() {
                Loadable::Loading => view! { <p class="muted">"Loading members..."</p> }.into_any(),
                Loadable::Ready(page) => view! { <MemberTable page=page /> }.into_any(),
                Loadable::Failed(message) => view! { <LoadError message=message on_retry=reload /> }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    let store = use_app_store();
    let (active, set_active) = signal("directory");

    let can_edit = move || {
        store_user(&store)
            .map(|user| user.permissions.allows_any(&["members:write"]))
            .unwrap_or(false)
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Member Management"</h1>
                <Show when=can_edit>
                    <button class="primary-btn" disabled=true title="Member editing is not available yet">
                        "+ Add Member"
                    </button>
                </Show>
            </div>

            <TabBar tabs=TABS active=active set_active=set_active />

            {move || match active.get() {
                "tiers" => view! {
                    <div class="card-grid">
                        {TIERS.iter().map(|&(tier, blurb)| view! {
                            <div class="stat-card">
                                <p class="stat-value">{tier}</p>
                                <p class="stat-hint">{blurb}</p>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any(),
                "verification" => view! {
                    <ComingSoon
                        title="Identity verification"
                        description="NIC and passport checks for new registrations."
                    />
                }.into_any(),
                _ => view! { <MemberDirectory /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_query_filters() {
        let query = directory_query("perera", "VIP");
        assert_eq!(query.search.as_deref(), Some("perera"));
        assert_eq!(query.tier.as_deref(), Some("VIP"));
        assert_eq!(query.limit, Some(PAGE_SIZE));

        assert_eq!(directory_query("", "").tier, None);
    }

    #[test]
    fn test_member_status_precedence() {
        let mut member = Member {
            id: "m-1".to_string(),
            member_number: "BC000001".to_string(),
            first_name: "Ayesha".to_string(),
            last_name: "Fernando".to_string(),
            email: String::new(),
            phone: String::new(),
            tier: "Ruby".to_string(),
            points_balance: 0.0,
            lifetime_spend: 0.0,
            last_visit: None,
            kyc_verified: false,
            self_excluded: false,
        };
        assert_eq!(member_status(&member), "Pending KYC");
        member.kyc_verified = true;
        assert_eq!(member_status(&member), "Verified");
        member.self_excluded = true;
        assert_eq!(member_status(&member), "Self-excluded");
    }
}
