//! Toast notifications

use leptos::prelude::*;
use shared::config::TOAST_TIMEOUT;
use shared::{Toast, ToastKind, ToastList};

/// handle for pushing notifications from any view
#[derive(Clone, Copy)]
pub struct Toaster {
    list: RwSignal<ToastList>,
}

impl Toaster {
    /// show a toast and schedule its dismissal
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let list = self.list;
        if let Some(id) = list.try_update(|l| l.push(kind, message)) {
            set_timeout(
                move || {
                    list.try_update(|l| l.dismiss(id));
                },
                TOAST_TIMEOUT,
            );
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster { list: RwSignal::new(ToastList::new()) };
    provide_context(toaster);
    toaster
}

/// the app-wide toaster, created on first use if nothing provided one
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-container top-center">
            <For
                each=move || toaster.list.with(|l| l.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| view! {
                    <div class=toast.kind.css_class() role="alert">
                        {toast.message}
                    </div>
                }
            />
        </div>
    }
}
