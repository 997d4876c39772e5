use leptos::prelude::*;

use casino_access::RewardItem;

use super::{format_money, format_points, load_into, LoadError, Loadable};
use crate::api;
use crate::components::TabBar;
use crate::store::use_app_store;

const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Categories"),
    ("dining", "Dining"),
    ("accommodation", "Accommodation"),
    ("gaming", "Gaming"),
    ("merchandise", "Merchandise"),
];

fn rewards_in(rewards: &[RewardItem], category: &str) -> Vec<RewardItem> {
    rewards
        .iter()
        .filter(|reward| category == "all" || reward.category == category)
        .cloned()
        .collect()
}

fn stock_label(reward: &RewardItem) -> String {
    match reward.stock_quantity {
        None => "Unlimited".to_string(),
        Some(0) => "Out of stock".to_string(),
        Some(left) => format!("{left} left"),
    }
}

#[component]
pub fn RewardsPage() -> impl IntoView {
    let store = use_app_store();
    let (active, set_active) = signal("all");
    let (rewards, set_rewards) = signal(Loadable::<Vec<RewardItem>>::Loading);
    let reload = move || load_into(set_rewards, api::rewards(store));
    reload();

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Rewards Catalogue"</h1>
                <p class="muted">"Points redemptions available to members"</p>
            </div>

            <TabBar tabs=CATEGORIES active=active set_active=set_active />

            {move || match rewards.get() {
                Loadable::Loading => view! { <p class="muted">"Loading rewards..."</p> }.into_any(),
                Loadable::Failed(message) => view! { <LoadError message=message on_retry=reload /> }.into_any(),
                Loadable::Ready(list) => {
                    let shown = rewards_in(&list, active.get());
                    if shown.is_empty() {
                        return view! { <p class="muted">"No rewards in this category."</p> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {shown.into_iter().map(|reward| {
                                let stock = stock_label(&reward);
                                view! {
                                    <div class="stat-card">
                                        <p class="stat-label">{reward.name.clone()}</p>
                                        <p class="stat-value">{format_points(reward.points_required)}</p>
                                        <p class="stat-hint">{reward.description.clone()}</p>
                                        <p class="stat-hint">
                                            {format!("Worth {}, {stock}", format_money(reward.cash_value))}
                                        </p>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(name: &str, category: &str, stock_quantity: Option<u32>) -> RewardItem {
        RewardItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            points_required: 2_500.0,
            cash_value: 50.0,
            tier_access: vec!["Ruby".to_string()],
            stock_quantity,
        }
    }

    fn catalogue() -> Vec<RewardItem> {
        vec![
            reward("Buffet", "dining", None),
            reward("Steakhouse", "dining", Some(4)),
            reward("Suite upgrade", "accommodation", Some(0)),
        ]
    }

    #[test]
    fn all_lists_every_reward() {
        assert_eq!(rewards_in(&catalogue(), "all").len(), 3);
    }

    #[test]
    fn category_filters_rewards() {
        let dining = rewards_in(&catalogue(), "dining");
        assert_eq!(dining.len(), 2);
        assert!(dining.iter().all(|reward| reward.category == "dining"));
        assert!(rewards_in(&catalogue(), "gaming").is_empty());
    }

    #[test]
    fn stock_label_reads_quantity() {
        let rewards = catalogue();
        assert_eq!(stock_label(&rewards[0]), "Unlimited");
        assert_eq!(stock_label(&rewards[1]), "4 left");
        assert_eq!(stock_label(&rewards[2]), "Out of stock");
    }
}
