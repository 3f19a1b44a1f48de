//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次导航、后退/前进和会话变化都会用决策表重新求值当前路径。

use leptos::prelude::*;
use rentalhub::shared::route::{AppRoute, Page, Settled};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn log_redirect(from: &str, settled: &Settled) {
    web_sys::console::log_1(
        &format!("[Router] {} redirected to {}", from, settled.route).into(),
    );
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证状态通过注入的信号读取，与会话模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 求值后的当前路由与页面（只读信号）
    current: ReadSignal<Settled>,
    set_current: WriteSignal<Settled>,
    /// 认证状态（注入的信号）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建路由服务。只在会话闸门就绪后调用，因此首个求值已经使用了确定的认证状态
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let settled = AppRoute::from_path(&path).settle(is_authenticated.get_untracked());
        if settled.redirected {
            log_redirect(&path, &settled);
            replace_history_state(&settled.route.to_path());
        }
        let (current, set_current) = signal(settled);

        Self {
            current,
            set_current,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current(&self) -> ReadSignal<Settled> {
        self.current
    }

    /// 导航栏和页脚是否显示
    pub fn shows_chrome(&self) -> Signal<bool> {
        let current = self.current;
        Signal::derive(move || current.with(|s| s.route.shows_chrome()))
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.apply(path, true);
    }

    /// 求值目标路径并更新 History 与路由信号
    ///
    /// `use_push` 为 false 时（如 popstate）只替换当前记录。
    fn apply(&self, path: &str, use_push: bool) {
        let settled = AppRoute::from_path(path).settle(self.is_authenticated.get_untracked());
        if settled.redirected {
            log_redirect(path, &settled);
        }

        let target = settled.route.to_path();
        if use_push {
            push_history_state(&target);
        } else if settled.redirected {
            replace_history_state(&target);
        }

        if self.current.get_untracked() != settled {
            self.set_current.set(settled);
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话变化时重新求值当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let path = router.current.get_untracked().route.to_path();
            web_sys::console::log_1(
                &format!("[Router] session changed (signed in: {}), re-evaluating {}", is_auth, path)
                    .into(),
            );
            router.apply(&path, false);
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前页面渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前页面，返回对应视图
    matcher: fn(Page) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let page = router.current().with(|s| s.page.clone());
        matcher(page)
    }
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
