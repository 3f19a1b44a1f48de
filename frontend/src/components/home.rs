use crate::auth::use_session;
use crate::components::product_card::ProductGrid;
use crate::web::router::Link;
use crate::web::spawn_scoped;
use leptos::prelude::*;
use rentalhub::logic::CatalogueLogic;
use rentalhub::shared::Product;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let (featured, set_featured) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    let store = session.store();
    spawn_scoped(async move {
        match CatalogueLogic::new(&store).featured().await {
            Ok(list) => set_featured.set(list),
            Err(e) => web_sys::console::error_1(&format!("[Home] {}", e).into()),
        }
        set_loading.set(false);
    });

    let greeting = move || {
        session
            .current_user
            .with(|u| u.as_ref().map(|u| format!("Welcome back, {}", u.label())))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <section class="hero bg-base-200 rounded-box py-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-4xl font-bold">{greeting}</h1>
                    <p class="text-base-content/70">"Rent cameras, tools and gear from people nearby."</p>
                    <div class="flex gap-2">
                        <Link to="/all-products" class="btn btn-primary">"Browse Products"</Link>
                        <Link to="/list-your-item" class="btn btn-outline">"List Your Item"</Link>
                    </div>
                </div>
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Featured Rentals"</h2>
                <ProductGrid
                    products=featured.into()
                    loading=loading.into()
                    loading_text="Loading products..."
                    empty_text="No products available yet"
                />
            </section>
        </div>
    }
}
