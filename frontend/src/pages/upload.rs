//! Upload page: metadata plus a markdown file

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{ApiConfig, Author, Category, SubmitBlocked, SubmitOutcome, UploadState};
use web_sys::{File, HtmlInputElement};

use crate::api;
use crate::components::{theme_class, use_toaster, ThemeToggle};
use crate::hooks::MountGuard;
use crate::HOME_PATH;

/// value of the disabled "Select ..." option shown while nothing is chosen
const PLACEHOLDER_VALUE: &str = "";

/// value a select shows for the current choice
fn select_value(choice: Option<&'static str>) -> &'static str {
    choice.unwrap_or(PLACEHOLDER_VALUE)
}

/// empty the file picker, unless the page has already been torn down
fn clear_file_input(file_input: NodeRef<html::Input>, guard: &MountGuard) {
    if !guard.is_alive() {
        return;
    }
    if let Some(input) = file_input.try_get_untracked().flatten() {
        input.set_value("");
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let toaster = use_toaster();
    let guard = MountGuard::new();

    // file handles are not Send, so the form lives in local storage
    let state = RwSignal::new_local(UploadState::<File>::new());
    let dark = RwSignal::new(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    // show the result after the outcome's pacing delay and return to editing
    let settle = move |outcome: SubmitOutcome| {
        let delay = outcome.settle_delay();
        let guard = guard.clone();
        let finish = move || {
            let (kind, message) = outcome.notice();
            toaster.push(kind, message);
            if outcome.clears_form() {
                clear_file_input(file_input, &guard);
            }
            state.try_update(|s| s.finish(&outcome));
        };
        if delay.is_zero() {
            finish();
        } else {
            set_timeout(finish, delay);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let started = state.try_update(|s| s.begin_submit().map(api::multipart));
        match started {
            None => {}
            Some(Err(SubmitBlocked::InFlight)) => {
                warn!("upload already in progress, ignoring submit");
            }
            Some(Err(blocked)) => toaster.error(blocked.to_string()),
            Some(Ok(Err(e))) => {
                error!("could not build upload payload: {e}");
                settle(SubmitOutcome::Failed);
            }
            Some(Ok(Ok(body))) => {
                let config = config.clone();
                let settle = settle.clone();
                spawn_local(async move {
                    let outcome = match api::upload_post(&config, body).await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            error!("upload failed: {e}");
                            SubmitOutcome::Failed
                        }
                    };
                    settle(outcome);
                });
            }
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|list| list.get(0));
        state.update(|s| s.form_mut().set_file(file));
    };

    view! {
        <div class=move || theme_class("page upload", dark.get())>
            <div class="corner">
                <a href=HOME_PATH class="back-link">"← All posts"</a>
                <ThemeToggle dark=dark />
            </div>

            <div class="card upload-card">
                <h2 class="card-title">"TechBoy Blog Content"</h2>

                <form class="upload-form" on:submit=on_submit>
                    <input
                        type="text"
                        name="title"
                        placeholder="Title"
                        required
                        prop:value=move || state.with(|s| s.form().title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().set_title(value));
                        }
                    />

                    <textarea
                        name="description"
                        placeholder="Description"
                        required
                        prop:value=move || state.with(|s| s.form().description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().set_description(value));
                        }
                    ></textarea>

                    <select
                        name="author"
                        required
                        prop:value=move || state.with(|s| select_value(s.form().author.map(Author::as_str)))
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().set_author(value.parse().ok()));
                        }
                    >
                        <option value=PLACEHOLDER_VALUE disabled selected>"Select Author"</option>
                        {Author::ALL.into_iter().map(|a| view! {
                            <option value=a.as_str()>{a.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>

                    <select
                        name="category"
                        required
                        prop:value=move || state.with(|s| select_value(s.form().category.map(Category::as_str)))
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut().set_category(value.parse().ok()));
                        }
                    >
                        <option value=PLACEHOLDER_VALUE disabled selected>"Select Category"</option>
                        {Category::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str()>{c.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>

                    <div class="file-field">
                        <p>"Upload Md File"</p>
                        <input
                            type="file"
                            accept=".md"
                            required
                            node_ref=file_input
                            on:change=on_file
                        />
                    </div>

                    <button
                        type="submit"
                        class="submit"
                        disabled=move || state.with(|s| s.is_submitting())
                    >
                        {move || state.with(|s| s.button_label())}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_selects_open_on_placeholder() {
        let state = UploadState::<File>::new();
        assert_eq!(select_value(state.form().author.map(Author::as_str)), PLACEHOLDER_VALUE);
        assert_eq!(select_value(state.form().category.map(Category::as_str)), PLACEHOLDER_VALUE);

        // no real choice shares the placeholder value
        assert!(Author::ALL.iter().all(|a| a.as_str() != PLACEHOLDER_VALUE));
        assert!(Category::ALL.iter().all(|c| c.as_str() != PLACEHOLDER_VALUE));
        assert_eq!(select_value(Some(Author::Neeraj.as_str())), "Neeraj");
    }

    #[test]
    fn test_clear_file_input_after_page_teardown() {
        let owner = Owner::new();
        let (file_input, guard) = owner.with(|| (NodeRef::<html::Input>::new(), MountGuard::new()));
        owner.cleanup();

        assert!(!guard.is_alive());
        // late success callback after navigating away must be a no-op
        clear_file_input(file_input, &guard);
    }

    #[test]
    fn test_clear_file_input_before_mount() {
        let owner = Owner::new();
        owner.with(|| {
            let file_input = NodeRef::<html::Input>::new();
            let guard = MountGuard::new();
            clear_file_input(file_input, &guard);
        });
    }
}
