use crate::auth::use_session;
use crate::components::product_card::ProductGrid;
use crate::web::spawn_scoped;
use leptos::prelude::*;
use rentalhub::logic::{CatalogueLogic, filter_by_category};
use rentalhub::shared::{CATALOGUE_CATEGORIES, Product};

#[component]
pub fn AllProductsPage() -> impl IntoView {
    let session = use_session();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let selected = RwSignal::new(Option::<String>::None);

    let store = session.store();
    spawn_scoped(async move {
        match CatalogueLogic::new(&store).list_all().await {
            Ok(list) => set_products.set(list),
            Err(e) => web_sys::console::error_1(&format!("[AllProducts] {}", e).into()),
        }
        set_loading.set(false);
    });

    // 分类筛选只在客户端进行
    let visible = Signal::derive(move || {
        products.with(|list| filter_by_category(list, selected.get().as_deref()))
    });

    let chip = move |label: &'static str, value: Option<&'static str>| {
        let is_active = move || selected.get().as_deref() == value;
        view! {
            <button
                class=move || if is_active() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }
                on:click=move |_| selected.set(value.map(str::to_string))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"All Products"</h1>
            <div class="flex flex-wrap gap-2">
                {chip("All", None)}
                {CATALOGUE_CATEGORIES
                    .iter()
                    .map(|&c| chip(c, Some(c)))
                    .collect_view()}
            </div>
            <ProductGrid
                products=visible
                loading=loading.into()
                loading_text="Loading products..."
                empty_text="No products in this category"
            />
        </div>
    }
}
