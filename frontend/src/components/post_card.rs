//! Post card for the landing page grid

use leptos::prelude::*;
use shared::markdown;
use shared::{BlogPost, BodyState, BODY_ERROR_TEXT};

const THUMBNAIL_URL: &str = "https://iotvnaw69daj.i.optimole.com/cb:Amyz.6583c/w:auto/h:auto/q:75/f:best/https://www.bloggingpro.com/wp-content/uploads/2023/10/Best-Tech-Blogs-featured-image.webp";

/// teaser length for collapsed cards
const TEASER_CHARS: usize = 140;

#[component]
pub fn PostCard(post: BlogPost, #[prop(into)] body: Signal<BodyState>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let category = post.category_label().to_string();

    view! {
        <article class="post-card">
            <img src=THUMBNAIL_URL alt="Post Thumbnail" class="post-thumb" />
            <div class="post-content">
                <p class="post-meta">"Author: "{post.author}</p>
                <h4 class="post-title">{post.title}</h4>
                <p class="post-category">{category}</p>
                <p class="post-description">{post.description}</p>

                // collapsed: short plain-text teaser once the body is in
                {move || body.with(|state| match state {
                    BodyState::Loaded(md) if !expanded.get() => Some(view! {
                        <p class="post-teaser">{markdown::excerpt(md, TEASER_CHARS)}</p>
                    }),
                    _ => None,
                })}

                <Show when=move || expanded.get()>
                    {move || body_view(body.get())}
                </Show>

                <button class="read-more" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "Show less ↑" } else { "Read more →" }}
                </button>
            </div>
        </article>
    }
}

fn body_view(state: BodyState) -> impl IntoView {
    match state {
        BodyState::Pending => view! { <p class="post-body muted">"Loading…"</p> }.into_any(),
        BodyState::Loaded(md) => view! {
            <div class="post-body markdown" inner_html=markdown::render_html(&md)></div>
        }
        .into_any(),
        BodyState::Failed(_) => view! { <p class="post-body error">{BODY_ERROR_TEXT}</p> }.into_any(),
    }
}
