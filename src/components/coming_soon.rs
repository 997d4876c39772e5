use leptos::prelude::*;

/// Panel for areas that are not built yet
#[component]
pub fn ComingSoon(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Planned capabilities listed under the description
    #[prop(optional)] features: &'static [&'static str],
) -> impl IntoView {
    view! {
        <section class="panel coming-soon">
            <h2>{title}</h2>
            <p class="muted">{description}</p>
            <span class="coming-soon-badge">"Coming soon"</span>
            <ul class="feature-list">
                {features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
        </section>
    }
}
