//! Navigation Catalog
//!
//! The static list of console sections and the pure filter that decides
//! which of them a user may see.

use crate::models::{Role, User};

/// Visual reference for a navigation entry; the UI maps it to a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Building,
    Users,
    Puzzle,
    Gift,
    Megaphone,
    Calendar,
    Academic,
    ChartPie,
    ChartBar,
    Cog,
    Search,
    Help,
}

/// Who may see a navigation item.
///
/// An item carries exactly one rule, so role and permission checks never
/// compete on the same item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRule {
    Unrestricted,
    Role(Role),
    AnyRole(Vec<Role>),
    /// Any one listed permission, or the wildcard
    AnyPermission(Vec<String>),
}

impl AccessRule {
    pub fn allows(&self, user: &User) -> bool {
        match self {
            AccessRule::Role(role) => user.role == *role,
            AccessRule::AnyRole(roles) => roles.contains(&user.role),
            AccessRule::AnyPermission(required) => user.permissions.allows_any(required),
            AccessRule::Unrestricted => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub name: String,
    pub icon: Icon,
    pub path: String,
    pub rule: AccessRule,
}

impl NavigationItem {
    pub fn new(name: impl Into<String>, icon: Icon, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: path.into(),
            rule: AccessRule::Unrestricted,
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.rule = AccessRule::Role(role);
        self
    }

    pub fn any_role(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.rule = AccessRule::AnyRole(roles.into_iter().collect());
        self
    }

    pub fn any_permission<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule = AccessRule::AnyPermission(tokens.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_visible_to(&self, user: &User) -> bool {
        self.rule.allows(user)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSection {
    pub title: String,
    pub items: Vec<NavigationItem>,
}

impl NavigationSection {
    pub fn new(title: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self { title: title.into(), items }
    }
}

/// Every section and item the console can show.
pub fn catalog() -> Vec<NavigationSection> {
    let leadership = [Role::SuperAdmin, Role::GeneralAdmin, Role::Manager];

    vec![
        NavigationSection::new("Overview", vec![
            NavigationItem::new("Dashboard", Icon::Home, "/dashboard"),
            NavigationItem::new("Casino Floor", Icon::Building, "/casino-floor")
                .any_permission(["casino_floor_access", "gaming:read"]),
        ]),
        NavigationSection::new("Management", vec![
            NavigationItem::new("Members", Icon::Users, "/members")
                .any_permission(["members:read", "members:write"]),
            NavigationItem::new("Gaming", Icon::Puzzle, "/gaming")
                .any_permission(["gaming:read", "gaming:write"]),
            NavigationItem::new("Rewards", Icon::Gift, "/rewards")
                .any_permission(["rewards:read", "members:write"]),
        ]),
        NavigationSection::new("Engagement", vec![
            NavigationItem::new("Marketing", Icon::Megaphone, "/marketing")
                .any_role(leadership.clone()),
            NavigationItem::new("Travel & VIP", Icon::Calendar, "/travel")
                .any_role(leadership),
            NavigationItem::new("Staff", Icon::Academic, "/staff")
                .any_role([Role::SuperAdmin, Role::GeneralAdmin]),
        ]),
        NavigationSection::new("Insights", vec![
            NavigationItem::new("Advanced Analytics", Icon::ChartPie, "/advanced-analytics")
                .any_permission(["analytics:read"]),
            NavigationItem::new("Reports", Icon::ChartBar, "/analytics")
                .any_permission(["reports:read"]),
        ]),
        NavigationSection::new("System", vec![
            NavigationItem::new("Settings", Icon::Cog, "/settings")
                .role(Role::SuperAdmin),
        ]),
    ]
}

/// Links pinned under the sections: search and help.
///
/// Open to every signed-in operator, so they sit outside the filtered
/// catalog and [`can_access`] treats their paths as unrestricted.
pub fn utility_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("Search", Icon::Search, "/search"),
        NavigationItem::new("Help", Icon::Help, "/help"),
    ]
}

/// Sections visible to `user`, keeping catalog order.
///
/// Sections left without items are dropped; an absent user gets nothing.
pub fn filter_navigation(user: Option<&User>, sections: &[NavigationSection]) -> Vec<NavigationSection> {
    let Some(user) = user else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<NavigationItem> = section
                .items
                .iter()
                .filter(|item| item.is_visible_to(user))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(NavigationSection { title: section.title.clone(), items })
            }
        })
        .collect()
}

/// Whether `user` may open `path`.
///
/// Paths the catalog doesn't list are open to any signed-in user.
pub fn can_access(user: Option<&User>, sections: &[NavigationSection], path: &str) -> bool {
    let Some(user) = user else {
        return false;
    };

    let mut matching = sections
        .iter()
        .flat_map(|section| section.items.iter())
        .filter(|item| item.path == path)
        .peekable();

    if matching.peek().is_none() {
        return true;
    }
    matching.any(|item| item.is_visible_to(user))
}
