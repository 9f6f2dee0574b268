use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::Section;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", CONFIG.name, CONFIG.tagline) />
        <Meta name="description" content="Current orders and their status." />
        <main class="page">
            <header class="page-header">
                <h1>"\u{2500}\u{2524} " {CONFIG.name} " \u{251C}\u{2500}"</h1>
                <div class="muted">{CONFIG.tagline}</div>
            </header>

            <Section id="orders" title="Orders">
                <p class="muted">"No orders yet."</p>
            </Section>
        </main>
    }
}
