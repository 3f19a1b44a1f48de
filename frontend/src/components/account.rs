use crate::auth::use_session;
use crate::components::product_card::ProductGrid;
use crate::web::spawn_scoped;
use leptos::prelude::*;
use rentalhub::logic::CatalogueLogic;
use rentalhub::shared::Product;

/// 账户页：用户信息、注销和自己发布的商品
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();
    let (listings, set_listings) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    if let Some(user) = session.current_user.get_untracked() {
        let store = session.store();
        spawn_scoped(async move {
            match CatalogueLogic::new(&store).listings_of(&user).await {
                Ok(list) => set_listings.set(list),
                Err(e) => web_sys::console::error_1(&format!("[Account] {}", e).into()),
            }
            set_loading.set(false);
        });
    } else {
        set_loading.set(false);
    }

    let email = move || session.current_user.with(|u| u.as_ref().map(|u| u.email.clone()));
    let uid = move || session.current_user.with(|u| u.as_ref().map(|u| u.uid.clone()));

    // 注销后路由服务会把受保护页面重定向到 /auth
    let on_sign_out = move |_| session.sign_out();

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"My Account"</h1>
                    <p><span class="font-semibold">"Email: "</span>{email}</p>
                    <p class="text-sm text-base-content/60">"User ID: " {uid}</p>
                    <div class="card-actions justify-end">
                        <button class="btn btn-outline btn-error" on:click=on_sign_out>"Sign Out"</button>
                    </div>
                </div>
            </div>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"My Listings"</h2>
                <ProductGrid
                    products=listings.into()
                    loading=loading.into()
                    loading_text="Loading your listings..."
                    empty_text="You haven't listed any items yet"
                />
            </section>
        </div>
    }
}
