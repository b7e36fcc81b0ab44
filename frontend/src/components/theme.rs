//! Dark / light mode toggle

use leptos::prelude::*;

#[component]
pub fn ThemeToggle(dark: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| dark.update(|d| *d = !*d)
        >
            {move || if dark.get() { "☀️" } else { "🌙" }}
        </button>
    }
}

/// page wrapper class for the current theme
pub fn theme_class(base: &str, dark: bool) -> String {
    format!("{base} {}", if dark { "dark" } else { "light" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_class() {
        assert_eq!(theme_class("page home", true), "page home dark");
        assert_eq!(theme_class("page upload", false), "page upload light");
    }
}
