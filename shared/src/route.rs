//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、守卫规则以及 (认证状态, 路径) -> 页面 的决策表。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// 登录 / 注册页
    Auth,
    /// 首页 (需要认证)
    Home,
    /// 我的账户 (需要认证)
    Account,
    /// 发布商品表单 (需要认证)
    ListItem,
    /// 商品详情 (公开)
    Product(String),
    /// 全部商品 (公开)
    AllProducts,
    /// 未匹配的路径，保留原始值用于日志
    Unknown(String),
}

/// 路由解析出的页面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Auth,
    Home,
    Account,
    Upload,
    ProductDetail(String),
    AllProducts,
}

/// 单步解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(AppRoute),
}

/// 跟随重定向后的最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub route: AppRoute,
    pub page: Page,
    /// 是否经过了至少一次重定向（决定用 replaceState 还是 pushState）
    pub redirected: bool,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串和片段；除根路径外忽略一个结尾斜杠。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/auth" => Self::Auth,
            "/" => Self::Home,
            "/account" => Self::Account,
            "/list-your-item" => Self::ListItem,
            "/all-products" => Self::AllProducts,
            other => match other.strip_prefix("/product/") {
                // 解码后不是合法 UTF-8 的 id 视为未匹配
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    match urlencoding::decode(id) {
                        Ok(decoded) => Self::Product(decoded.into_owned()),
                        Err(_) => Self::Unknown(path.to_string()),
                    }
                }
                _ => Self::Unknown(path.to_string()),
            },
        }
    }

    /// 获取路由对应的 URL path，商品 id 按路径段编码
    pub fn to_path(&self) -> String {
        match self {
            Self::Auth => "/auth".to_string(),
            Self::Home => "/".to_string(),
            Self::Account => "/account".to_string(),
            Self::ListItem => "/list-your-item".to_string(),
            Self::Product(id) => format!("/product/{}", urlencoding::encode(id)),
            Self::AllProducts => "/all-products".to_string(),
            Self::Unknown(path) => path.clone(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Home | Self::Account | Self::ListItem)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Auth
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }

    /// 决策表的单步求值，首条命中即返回
    pub fn resolve(&self, is_authenticated: bool) -> Resolution {
        if self.requires_auth() && !is_authenticated {
            return Resolution::Redirect(Self::auth_failure_redirect());
        }
        if self.should_redirect_when_authenticated() && is_authenticated {
            return Resolution::Redirect(Self::auth_success_redirect());
        }

        match self {
            Self::Auth => Resolution::Render(Page::Auth),
            Self::Home => Resolution::Render(Page::Home),
            Self::Account => Resolution::Render(Page::Account),
            Self::ListItem => Resolution::Render(Page::Upload),
            Self::Product(id) => Resolution::Render(Page::ProductDetail(id.clone())),
            Self::AllProducts => Resolution::Render(Page::AllProducts),
            Self::Unknown(_) if is_authenticated => Resolution::Redirect(Self::Home),
            Self::Unknown(_) => Resolution::Redirect(Self::Auth),
        }
    }

    /// 跟随重定向直到落到一个可渲染页面
    ///
    /// 重定向目标只会是 `/` 或 `/auth`，二者在同一认证状态下必然可渲染，
    /// 所以最多两跳。
    pub fn settle(self, is_authenticated: bool) -> Settled {
        let mut route = self;
        let mut redirected = false;
        loop {
            match route.resolve(is_authenticated) {
                Resolution::Render(page) => {
                    return Settled {
                        route,
                        page,
                        redirected,
                    };
                }
                Resolution::Redirect(next) => {
                    route = next;
                    redirected = true;
                }
            }
        }
    }

    /// 导航栏和页脚只在登录页隐藏
    pub fn shows_chrome(&self) -> bool {
        self.to_path() != "/auth"
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(path: &str, auth: bool) -> Settled {
        AppRoute::from_path(path).settle(auth)
    }

    #[test]
    fn test_decision_table_authenticated() {
        assert_eq!(
            AppRoute::from_path("/auth").resolve(true),
            Resolution::Redirect(AppRoute::Home)
        );
        assert_eq!(
            AppRoute::from_path("/").resolve(true),
            Resolution::Render(Page::Home)
        );
        assert_eq!(
            AppRoute::from_path("/account").resolve(true),
            Resolution::Render(Page::Account)
        );
        assert_eq!(
            AppRoute::from_path("/list-your-item").resolve(true),
            Resolution::Render(Page::Upload)
        );
        assert_eq!(
            AppRoute::from_path("/product/P1").resolve(true),
            Resolution::Render(Page::ProductDetail("P1".into()))
        );
        assert_eq!(
            AppRoute::from_path("/all-products").resolve(true),
            Resolution::Render(Page::AllProducts)
        );
        assert_eq!(
            AppRoute::from_path("/nowhere").resolve(true),
            Resolution::Redirect(AppRoute::Home)
        );
    }

    #[test]
    fn test_decision_table_anonymous() {
        assert_eq!(
            AppRoute::from_path("/auth").resolve(false),
            Resolution::Render(Page::Auth)
        );
        assert_eq!(
            AppRoute::from_path("/").resolve(false),
            Resolution::Redirect(AppRoute::Auth)
        );
        assert_eq!(
            AppRoute::from_path("/account").resolve(false),
            Resolution::Redirect(AppRoute::Auth)
        );
        assert_eq!(
            AppRoute::from_path("/list-your-item").resolve(false),
            Resolution::Redirect(AppRoute::Auth)
        );
        assert_eq!(
            AppRoute::from_path("/product/P1").resolve(false),
            Resolution::Render(Page::ProductDetail("P1".into()))
        );
        assert_eq!(
            AppRoute::from_path("/all-products").resolve(false),
            Resolution::Render(Page::AllProducts)
        );
        assert_eq!(
            AppRoute::from_path("/nowhere").resolve(false),
            Resolution::Redirect(AppRoute::Auth)
        );
    }

    #[test]
    fn test_settle_follows_redirects() {
        let s = settle("/nowhere", false);
        assert_eq!(s.route, AppRoute::Auth);
        assert_eq!(s.page, Page::Auth);
        assert!(s.redirected);

        let s = settle("/auth", true);
        assert_eq!(s.route, AppRoute::Home);
        assert_eq!(s.page, Page::Home);

        let s = settle("/all-products", false);
        assert!(!s.redirected);
    }

    #[test]
    fn test_chrome_hidden_only_on_auth() {
        assert!(!settle("/auth", false).route.shows_chrome());
        assert!(settle("/auth", true).route.shows_chrome());
        // 未登录访问受保护页面，最终落在 /auth
        assert!(!settle("/account", false).route.shows_chrome());
        for path in ["/", "/account", "/list-your-item", "/product/x", "/all-products"] {
            assert!(settle(path, true).route.shows_chrome(), "{}", path);
        }
        assert!(settle("/product/x", false).route.shows_chrome());
    }

    #[test]
    fn test_path_normalisation() {
        assert_eq!(AppRoute::from_path("/account/"), AppRoute::Account);
        assert_eq!(AppRoute::from_path("/auth?next=/"), AppRoute::Auth);
        assert_eq!(AppRoute::from_path("/all-products#top"), AppRoute::AllProducts);
        assert_eq!(
            AppRoute::from_path("/product/a%20b"),
            AppRoute::Product("a b".into())
        );
        assert_eq!(
            AppRoute::from_path("/product/"),
            AppRoute::Unknown("/product/".into())
        );
        assert_eq!(
            AppRoute::from_path("/product/a/b"),
            AppRoute::Unknown("/product/a/b".into())
        );
    }

    #[test]
    fn test_product_id_decoding() {
        assert_eq!(AppRoute::from_path("/product/100%"), AppRoute::Product("100%".into()));
        assert_eq!(AppRoute::from_path("/product/%41"), AppRoute::Product("A".into()));
        // %FF 解码后不是合法 UTF-8
        assert_eq!(
            AppRoute::from_path("/product/%FF"),
            AppRoute::Unknown("/product/%FF".into())
        );
    }

    #[test]
    fn test_product_path_round_trip() {
        for id in ["P1", "a/b", "x?pageSize=1", "frag#1", "two words", "100%", "相机"] {
            let route = AppRoute::Product(id.to_string());
            let path = route.to_path();
            assert!(!path[1..].contains(['?', '#', ' ']), "{}", path);
            assert_eq!(AppRoute::from_path(&path), route, "{}", path);
        }
        assert_eq!(AppRoute::Product("a/b".into()).to_path(), "/product/a%2Fb");
        assert_eq!(
            AppRoute::from_path("/product/a%2Fb").to_path(),
            "/product/a%2Fb"
        );
    }
}
