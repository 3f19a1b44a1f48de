//! 商品详情页 (/product/:id)
//!
//! 先取商品，拿到后再取推荐集合；两步都在页面的 owner 下运行，
//! 切换到其他商品或离开页面时自动中止。

use crate::auth::use_session;
use crate::components::product_card::{FallbackImage, ProductGrid};
use crate::web::router::Link;
use crate::web::spawn_scoped;
use leptos::prelude::*;
use rentalhub::detail::{DetailView, load_product, load_suggestions};
use rentalhub::shared::Product;
use rentalhub::shared::gallery::Gallery;

#[component]
pub fn ProductDetailPage(id: String) -> impl IntoView {
    let session = use_session();
    let (detail, set_detail) = signal(DetailView::Loading);
    let (suggestions, set_suggestions) = signal(Vec::<Product>::new());
    let (suggestions_loading, set_suggestions_loading) = signal(true);
    let gallery = RwSignal::new(Gallery::new(Vec::new()));

    let store = session.store();
    spawn_scoped(async move {
        let view = DetailView::from(load_product(&store, &id).await);
        let subject = match &view {
            DetailView::Ready(product) => Some(product.clone()),
            _ => None,
        };
        if let Some(product) = &subject {
            gallery.set(Gallery::new(product.image_links.clone()));
        }
        set_detail.set(view);

        if let Some(product) = subject {
            set_suggestions.set(load_suggestions(&store, &product).await);
        }
        set_suggestions_loading.set(false);
    });

    move || match detail.get() {
        DetailView::Loading => view! {
            <div class="flex items-center justify-center min-h-[50vh] gap-2">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                "Loading product details..."
            </div>
        }
        .into_any(),
        DetailView::NotFound => view! {
            <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
                <h1 class="text-3xl font-bold">"Product not found"</h1>
                <Link to="/all-products" class="btn btn-primary">"Browse all products"</Link>
            </div>
        }
        .into_any(),
        DetailView::Ready(product) => view! {
            <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-12">
                <ProductInfo product=product gallery=gallery />
                <section class="space-y-4">
                    <h2 class="text-2xl font-bold">"You Might Also Like"</h2>
                    <ProductGrid
                        products=suggestions.into()
                        loading=suggestions_loading.into()
                        loading_text="Loading suggestions..."
                        empty_text="No suggested products available"
                    />
                </section>
            </div>
        }
        .into_any(),
    }
}

/// 图库 + 商品信息 + 规格表
#[component]
fn ProductInfo(product: Product, gallery: RwSignal<Gallery>) -> impl IntoView {
    let name = product.name_or_default().to_string();
    let alt = name.clone();

    let main_image = move || {
        let src = gallery.with(|g| g.main_image().unwrap_or_default().to_string());
        view! { <FallbackImage src=src alt=alt.clone() class="object-contain w-full h-full" /> }
    };

    let thumbnails = move || {
        if !gallery.with(Gallery::has_thumbnails) {
            return view! {
                <p class="text-center text-base-content/60">"No additional images available"</p>
            }
            .into_any();
        }
        let (thumbs, selected) = gallery.with(|g| {
            let thumbs: Vec<String> = g.thumbnails().into_iter().map(str::to_string).collect();
            (thumbs, g.selected())
        });
        thumbs
            .into_iter()
            .enumerate()
            .map(|(index, src)| {
                let class = if index == selected {
                    "w-20 h-20 rounded-box border-2 border-primary overflow-hidden"
                } else {
                    "w-20 h-20 rounded-box border border-base-300 overflow-hidden"
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| gallery.update(|g| {
                            g.select(index);
                        })
                    >
                        <FallbackImage src=src alt="thumbnail" class="object-cover w-full h-full" />
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let product_id = product.id.clone();
    let on_add_to_cart = move |_| {
        web_sys::console::log_1(&format!("[Detail] add to cart: {}", product_id).into());
    };

    let spec_rows = product
        .spec_rows()
        .into_iter()
        .map(|(key, value)| {
            view! {
                <tr>
                    <th class="w-1/3">{key}</th>
                    <td>{value}</td>
                </tr>
            }
        })
        .collect_view();

    let tags = product
        .tag_labels()
        .into_iter()
        .map(|tag| view! { <span class="badge badge-outline">{tag}</span> })
        .collect_view();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="space-y-4">
                <div class="aspect-square bg-base-200 rounded-box overflow-hidden">{main_image}</div>
                <div class="flex gap-2">{thumbnails}</div>
            </div>

            <div class="space-y-4">
                <p class="text-sm uppercase text-base-content/60">{product.brand_or_default().to_string()}</p>
                <h1 class="text-3xl font-bold">{name}</h1>
                <p class="text-2xl font-semibold text-primary">{product.price_label()}</p>
                <p class="text-success">{product.availability_label()}</p>
                <p>{product.description_or_default().to_string()}</p>
                <div class="text-sm text-base-content/60 space-y-1">
                    <p>"SKU: " {product.sku_label()}</p>
                    <p>"Location: " {product.warehouse_or_default().to_string()}</p>
                </div>
                <div class="flex flex-wrap gap-2">{tags}</div>
                <button class="btn btn-primary" on:click=on_add_to_cart>"Add to Cart"</button>

                <table class="table table-zebra">
                    <tbody>{spec_rows}</tbody>
                </table>
            </div>
        </div>
    }
}
