use leptos::prelude::*;

/// Section component - titled block of page content with a § anchor link
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="section">
            <h2 class="section-title">
                {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", title)}
                <a href=anchor_href class="section-anchor">" \u{00A7}"</a>
            </h2>
            <div class="section-body">
                {children()}
            </div>
        </section>
    }
}
