//! ==============================================================================
//! lib.rs - TechBoy blog front end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app with two screens: a landing page listing posts from
//!     the blog api, and a form that uploads a new post with its markdown
//!     file.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - state machines live in the `shared` crate
//!     - calls the php api via fetch (gloo-net)
//!
//! routes:
//!     /        -> HomePage
//!     /Upload  -> UploadPage
//!     *        -> HomePage
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shared::ApiConfig;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod hooks;
mod pages;

use components::{provide_toaster, ToastHost};
use pages::{HomePage, UploadPage};

pub const HOME_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/Upload";

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::default());
    provide_toaster();

    view! {
        <Title text="TechBoy Blog" />
        <Router>
            <main>
                <Routes fallback=|| view! { <HomePage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/Upload") view=UploadPage />
                </Routes>
            </main>
        </Router>
        <ToastHost />
    }
}
