use leptos::prelude::*;

use casino_access::{can_access, catalog};

use crate::store::{store_user, use_app_store};

/// Renders `children` only when the operator may open `path`
#[component]
pub fn RouteGuard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let sections = catalog();
    let allowed = move || can_access(store_user(&store).as_ref(), &sections, path);

    view! {
        <Show
            when=allowed
            fallback=|| view! {
                <div class="panel access-denied">
                    <h2>"Access denied"</h2>
                    <p>"Your role does not include access to this area. Contact a Super Admin if you need it."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
