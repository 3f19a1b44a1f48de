use crate::auth::use_session;
use crate::web::spawn_scoped_in;
use leptos::prelude::*;

/// 登录 / 注册页
///
/// 成功后不手动跳转：会话变化会让路由服务把 `/auth` 重定向到首页。
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();

    let (is_sign_up, set_is_sign_up) = signal(false);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let owner = Owner::current();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let services = session.services();
        let (email, password, sign_up) = (email.get(), password.get(), is_sign_up.get());
        spawn_scoped_in(owner.as_ref(), async move {
            let result = if sign_up {
                services.auth.sign_up(&email, &password).await
            } else {
                services.auth.sign_in(&email, &password).await
            };
            if let Err(e) = result {
                web_sys::console::error_1(&format!("[Auth] {}", e).into());
                set_error_msg.set(Some(e.message().to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_is_sign_up.update(|v| *v = !*v);
        set_error_msg.set(None);
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"RentalHub"</h1>
                    <p class="text-base-content/70">
                        {move || if is_sign_up.get() {
                            "Create an account to start renting"
                        } else {
                            "Sign in to continue"
                        }}
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || match (is_submitting.get(), is_sign_up.get()) {
                                    (true, _) => view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any(),
                                    (false, true) => "Sign Up".into_any(),
                                    (false, false) => "Sign In".into_any(),
                                }}
                            </button>
                        </div>
                        <button type="button" class="btn btn-link btn-sm" on:click=toggle_mode>
                            {move || if is_sign_up.get() {
                                "Already have an account? Sign in"
                            } else {
                                "New here? Create an account"
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
