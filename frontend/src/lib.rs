//! RentalHub 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `auth`: 会话上下文（会话闸门 -> 信号）
//! - `web::router`: 路由服务（History API + 决策表）
//! - `components`: 页面与 UI 组件
//!
//! 业务规则都在 `rentalhub` 核心 crate 中，这里只做接线和渲染。

mod auth;
mod components {
    pub mod account;
    pub mod all_products;
    pub mod auth_page;
    pub mod chrome;
    pub mod home;
    pub mod product_card;
    pub mod product_detail;
    pub mod upload;
}

use crate::auth::provide_session;
use crate::components::account::AccountPage;
use crate::components::all_products::AllProductsPage;
use crate::components::auth_page::AuthPage;
use crate::components::chrome::{Footer, Navbar};
use crate::components::home::HomePage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::upload::UploadPage;

use leptos::prelude::*;
use rentalhub::shared::route::Page;

// 浏览器 API 封装模块：实现核心层的 HttpClient / SessionPersistence，
// 以及路由和任务的生命周期管理。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    mod task;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
    pub use task::{spawn_scoped, spawn_scoped_in};
}

use web::router::{Router, RouterOutlet, use_router};

/// 页面匹配函数
fn page_matcher(page: Page) -> AnyView {
    match page {
        Page::Auth => view! { <AuthPage /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Account => view! { <AccountPage /> }.into_any(),
        Page::Upload => view! { <UploadPage /> }.into_any(),
        Page::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        Page::AllProducts => view! { <AllProductsPage /> }.into_any(),
    }
}

/// 页面外壳：登录页之外都显示导航栏和页脚
#[component]
fn Shell() -> impl IntoView {
    let chrome = use_router().shows_chrome();

    view! {
        <div class="min-h-screen flex flex-col bg-base-200 font-sans">
            <Show when=move || chrome.get()>
                <Navbar />
            </Show>
            <main class="flex-1">
                <RouterOutlet matcher=page_matcher />
            </main>
            <Show when=move || chrome.get()>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文（订阅认证服务并恢复本地会话）
    let session = provide_session();

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = session.is_authenticated_signal();
    let auth_checked = session.auth_checked;

    view! {
        // 3. 首次判定之前只渲染加载占位，路由在判定之后才创建
        <Show
            when=move || auth_checked.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <span class="ml-2">"Loading..."</span>
                </div>
            }
        >
            <Router is_authenticated=is_authenticated>
                <Shell />
            </Router>
        </Show>
    }
}
