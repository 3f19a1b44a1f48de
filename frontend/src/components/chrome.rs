use crate::auth::use_session;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let user_label = move || {
        session
            .current_user
            .with(|u| u.as_ref().map(|u| u.label().to_string()))
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm px-4 md:px-8">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl">"RentalHub"</Link>
            </div>
            <div class="flex-none gap-2">
                <Link to="/all-products" class="btn btn-ghost btn-sm">"All Products"</Link>
                <Link to="/list-your-item" class="btn btn-ghost btn-sm">"List Your Item"</Link>
                {move || match user_label() {
                    Some(label) => view! {
                        <Link to="/account" class="btn btn-primary btn-sm">{label}</Link>
                    }
                    .into_any(),
                    None => view! {
                        <Link to="/auth" class="btn btn-primary btn-sm">"Sign In"</Link>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-300 text-base-content">
            <p>"RentalHub · Rent what you need, list what you don't"</p>
        </footer>
    }
}
