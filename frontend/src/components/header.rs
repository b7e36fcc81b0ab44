//! Site header with nav links, theme toggle and mobile menu

use leptos::prelude::*;

use super::ThemeToggle;
use crate::UPLOAD_PATH;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Techies", "#"),
    ("Learn", "#"),
    ("Trends", "#"),
    ("Upload", UPLOAD_PATH),
];

#[component]
pub fn SiteHeader(dark: RwSignal<bool>, menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="brand">
                <span class="brand-dot"></span>
                " Pied Piper"
            </h1>

            <div class="header-actions">
                // desktop links
                <nav class="desktop-nav">
                    {NAV_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href class="nav-link">{*label}</a>
                    }).collect::<Vec<_>>()}
                </nav>

                <ThemeToggle dark=dark />

                // hidden above the breakpoint by css
                <button
                    class="menu-button"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="mobile-menu">
                {NAV_LINKS.iter().map(|(label, href)| view! {
                    <a href=*href on:click=move |_| menu_open.set(false)>{*label}</a>
                }).collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
