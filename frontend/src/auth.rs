//! 会话上下文
//!
//! 应用根组件创建会话闸门，把闸门状态写进信号后通过 Context 共享。
//! 路由服务只拿到派生的 `is_authenticated` 信号。

use crate::web::{BrowserStorage, FetchClient};
use leptos::prelude::*;
use rentalhub::auth::{AuthClient, AuthUser};
use rentalhub::config::{EnvAdapter, RuntimeConfig};
use rentalhub::firestore::FirestoreGateway;
use rentalhub::session::{SessionGate, SessionState};
use std::rc::Rc;

/// 构建期捕获的环境变量
struct BuildEnv;

impl EnvAdapter for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            "RENTALHUB_PROJECT_ID" => option_env!("RENTALHUB_PROJECT_ID"),
            "RENTALHUB_API_KEY" => option_env!("RENTALHUB_API_KEY"),
            "RENTALHUB_FIRESTORE_BASE" => option_env!("RENTALHUB_FIRESTORE_BASE"),
            "RENTALHUB_AUTH_BASE" => option_env!("RENTALHUB_AUTH_BASE"),
            "RENTALHUB_SESSION_KEY" => option_env!("RENTALHUB_SESSION_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

/// 外部服务的客户端集合
pub struct Services {
    pub config: RuntimeConfig,
    pub auth: AuthClient<FetchClient, BrowserStorage>,
}

impl Services {
    fn new() -> Self {
        let config = RuntimeConfig::new(&BuildEnv);
        let auth = AuthClient::new(FetchClient, BrowserStorage, config.clone());
        Self { config, auth }
    }

    /// 商品库客户端，已登录时携带用户令牌
    pub fn store(&self, user: Option<&AuthUser>) -> FirestoreGateway<FetchClient> {
        FirestoreGateway::new(FetchClient, &self.config)
            .with_id_token(user.map(|u| u.id_token.clone()))
    }
}

/// 会话上下文
///
/// 只包含信号和存储句柄，可以 Copy 到任意闭包里。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 是否已收到认证服务的第一次通知
    pub auth_checked: ReadSignal<bool>,
    /// 当前用户
    pub current_user: ReadSignal<Option<AuthUser>>,
    services: StoredValue<Rc<Services>, LocalStorage>,
}

impl SessionContext {
    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let current_user = self.current_user;
        Signal::derive(move || current_user.with(Option::is_some))
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.get_value()
    }

    pub fn store(&self) -> FirestoreGateway<FetchClient> {
        let user = self.current_user.get_untracked();
        self.services().store(user.as_ref())
    }

    pub fn sign_out(&self) {
        self.services().auth.sign_out();
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 创建服务、订阅会话闸门并恢复持久化的会话
///
/// 闸门在当前 owner 清理时注销订阅。
pub fn provide_session() -> SessionContext {
    let services = Rc::new(Services::new());
    let (auth_checked, set_auth_checked) = signal(false);
    let (current_user, set_current_user) = signal(None::<AuthUser>);

    let gate = SessionGate::init(&services.auth, move |state: &SessionState| {
        set_auth_checked.set(state.auth_checked);
        set_current_user.set(state.current_user.clone());
    });
    let gate = StoredValue::new_local(Some(gate));
    on_cleanup(move || {
        let _ = gate.try_update_value(|gate| {
            if let Some(mut gate) = gate.take() {
                gate.dispose();
            }
        });
    });

    services.auth.restore();

    let ctx = SessionContext {
        auth_checked,
        current_user,
        services: StoredValue::new_local(services),
    };
    provide_context(ctx);
    ctx
}
