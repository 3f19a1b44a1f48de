use crate::web::router::Link;
use leptos::prelude::*;
use rentalhub::shared::Product;
use rentalhub::shared::gallery::ImageSource;
use rentalhub::shared::route::AppRoute;

/// 加载失败时切换到默认图的图片，只切换一次
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(Some(src.as_str()).filter(|s| !s.is_empty())));

    view! {
        <img
            src=move || source.with(|s| s.src().to_string())
            alt=alt
            class=class
            on:error=move |_| source.update(|s| {
                s.on_error();
            })
        />
    }
}

/// 商品卡片，点击进入详情页
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = AppRoute::Product(product.id.clone()).to_path();
    let image = product.card_image().to_string();
    let name = product.name_or_default().to_string();
    let category = product.category_or_default().to_string();
    let price = product.price_label();

    view! {
        <Link to=href class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <figure class="aspect-square bg-base-200">
                <FallbackImage src=image alt=name.clone() class="object-contain h-full w-full" />
            </figure>
            <div class="card-body p-4">
                <p class="text-sm text-primary">{category}</p>
                <h3 class="card-title text-base">{name}</h3>
                <p class="font-semibold text-primary">{price}</p>
            </div>
        </Link>
    }
}

/// 商品网格，空列表时显示提示文字
#[component]
pub fn ProductGrid(
    products: Signal<Vec<Product>>,
    loading: Signal<bool>,
    #[prop(into)] loading_text: String,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    move || {
        if loading.get() {
            return view! {
                <div class="flex items-center gap-2 py-8 text-base-content/60">
                    <span class="loading loading-spinner"></span>
                    {loading_text.clone()}
                </div>
            }
            .into_any();
        }
        let list = products.get();
        if list.is_empty() {
            return view! { <p class="py-8 text-base-content/60">{empty_text.clone()}</p> }.into_any();
        }
        view! {
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {list
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
