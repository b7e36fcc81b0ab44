//! Landing page: post list

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{ApiConfig, BlogFeed, BlogPost, FeedPhase};

use crate::api;
use crate::components::{theme_class, use_toaster, PostCard, SiteHeader, Toaster};
use crate::hooks::{use_is_desktop, MountGuard};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let toaster = use_toaster();
    let guard = MountGuard::new();

    let feed = RwSignal::new(BlogFeed::new());
    let dark = RwSignal::new(true);
    let grid = RwSignal::new(true);
    let menu_open = RwSignal::new(false);
    let is_desktop = use_is_desktop();

    // fetch once on mount
    feed.update(BlogFeed::start_fetch);
    spawn_local(load_feed(config, feed, toaster, guard));

    view! {
        <div class=move || theme_class("page home", dark.get())>
            <SiteHeader dark=dark menu_open=menu_open />

            <section class="hero">
                <h2>"Welcome to Pied Piper!"</h2>
                <p class="muted">
                    "This is Pied Piper's (un)official blog. Among many other things, "
                    "Pied Piper offers a middle-out compression solution making data "
                    "storage problems smaller. Subscribe for updates!"
                </p>
            </section>

            <section class="posts">
                <div class="posts-header">
                    <h3>"Latest Posts"</h3>
                    <Show when=move || is_desktop.get()>
                        <div class="view-toggle">
                            <button
                                class=move || toggle_class(!grid.get())
                                on:click=move |_| grid.set(false)
                            >
                                "☰ List View"
                            </button>
                            <button
                                class=move || toggle_class(grid.get())
                                on:click=move |_| grid.set(true)
                            >
                                "▦ Grid View"
                            </button>
                        </div>
                    </Show>
                </div>

                <Show when=move || feed.with(|f| f.phase() == FeedPhase::Fetching)>
                    <p class="muted">"Loading posts..."</p>
                </Show>

                <div class=move || grid_class(is_desktop.get(), grid.get())>
                    <For
                        each=move || feed.with(|f| {
                            f.visible_posts().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                        key=|(i, post)| (*i, post.file.clone())
                        children=move |(_, post): (usize, BlogPost)| {
                            let file = post.file.clone();
                            let body = Signal::derive(move || feed.with(|f| f.body(&file)));
                            view! { <PostCard post=post body=body /> }
                        }
                    />
                </div>

                <div class="more">
                    {move || if feed.with(BlogFeed::can_expand) {
                        view! {
                            <button on:click=move |_| feed.update(BlogFeed::view_more)>"View More"</button>
                        }.into_any()
                    } else {
                        view! {
                            <button on:click=move |_| feed.update(BlogFeed::view_less)>"View Less"</button>
                        }.into_any()
                    }}
                </div>
            </section>
        </div>
    }
}

/// list request, then one body request per post, each settling on its own
async fn load_feed(config: ApiConfig, feed: RwSignal<BlogFeed>, toaster: Toaster, guard: MountGuard) {
    let posts = match api::fetch_blogs(&config).await {
        Ok(posts) => posts,
        Err(e) => {
            error!("error fetching blogs: {e}");
            if !guard.is_alive() {
                return;
            }
            if let Some(Some((kind, message))) = feed.try_update(BlogFeed::list_failed) {
                toaster.push(kind, message);
            }
            return;
        }
    };

    if !guard.is_alive() {
        return;
    }
    let files = feed.try_update(|f| f.list_loaded(posts)).unwrap_or_default();

    for file in files {
        let config = config.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::fetch_body(&config, &file).await;
            if let Err(e) = &result {
                error!("error loading {file}: {e}");
            }
            if guard.is_alive() {
                feed.try_update(|f| f.body_resolved(&file, result));
            }
        });
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active { "toggle active" } else { "toggle" }
}

/// two columns only on desktop in grid mode
fn grid_class(is_desktop: bool, grid: bool) -> &'static str {
    if is_desktop && grid { "post-grid two-col" } else { "post-grid one-col" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_class() {
        assert_eq!(grid_class(true, true), "post-grid two-col");
        assert_eq!(grid_class(true, false), "post-grid one-col");
        // mobile ignores the grid setting
        assert_eq!(grid_class(false, true), "post-grid one-col");
    }

    #[test]
    fn test_toggle_class() {
        assert_eq!(toggle_class(true), "toggle active");
        assert_eq!(toggle_class(false), "toggle");
    }
}
