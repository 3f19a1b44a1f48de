mod form_state;

use crate::auth::use_session;
use crate::web::router::use_router;
use crate::web::spawn_scoped_in;
use form_state::FormState;
use leptos::prelude::*;
use rentalhub::logic::CatalogueLogic;
use rentalhub::shared::CATALOGUE_CATEGORIES;
use rentalhub::shared::route::AppRoute;

/// 单行文本输入
#[component]
fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id.clone() class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// 多行文本输入
#[component]
fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id.clone() class="label">
                <span class="label-text">{label}</span>
            </label>
            <textarea
                id=id
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="textarea textarea-bordered w-full"
                rows="3"
            ></textarea>
        </div>
    }
}

/// 发布商品页 (/list-your-item)
#[component]
pub fn UploadPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let state = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // 离开页面时中止未完成的发布，不再跳转到新商品
    let owner = Owner::current();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session.current_user.get_untracked() else {
            set_error_msg.set(Some("Please sign in first".to_string()));
            return;
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let draft = state.to_draft();
        let store = session.store();
        spawn_scoped_in(owner.as_ref(), async move {
            let result = CatalogueLogic::new(&store).create_listing(&draft, &user).await;
            set_is_submitting.set(false);
            match result {
                Ok(product) => {
                    state.reset();
                    router.navigate(&AppRoute::Product(product.id).to_path());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Upload] {}", e).into());
                    set_error_msg.set(Some(e.message().to_string()));
                }
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <h1 class="card-title text-2xl">"List Your Item"</h1>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField id="name" label="Product Name" placeholder="Canon EOS R6" value=state.name />
                        <TextField id="brand" label="Brand" placeholder="Canon" value=state.brand />
                        <div class="form-control">
                            <label for="category" class="label">
                                <span class="label-text">"Category"</span>
                            </label>
                            <select
                                id="category"
                                class="select select-bordered w-full"
                                on:change=move |ev| state.category.set(event_target_value(&ev))
                                prop:value=move || state.category.get()
                            >
                                {CATALOGUE_CATEGORIES
                                    .iter()
                                    .map(|&c| view! { <option value=c>{c}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <TextField id="price" label="Price (per day)" placeholder="25.00" input_type="number" value=state.price />
                        <TextField id="stock" label="Stock Quantity" input_type="number" value=state.stock />
                    </div>

                    <TextArea id="description" label="Description" value=state.description />
                    <TextArea
                        id="image_links"
                        label="Image Links (one per line)"
                        placeholder="https://example.com/photo.jpg"
                        value=state.image_links
                    />
                    <TextArea
                        id="specifications"
                        label="Specifications (key: value per line)"
                        placeholder="Sensor: Full frame"
                        value=state.specifications
                    />
                    <TextField id="tags" label="Tags (comma separated)" placeholder="camera, mirrorless" value=state.tags />

                    <div class="card-actions justify-end mt-4">
                        <button type="button" class="btn btn-ghost" on:click=move |_| state.reset()>"Reset"</button>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Publishing..." }.into_any()
                            } else {
                                "Publish Listing".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
