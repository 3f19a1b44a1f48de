//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心层的 `HttpClient`。

use async_trait::async_trait;
use rentalhub::HubError;
use rentalhub::HubResult;
use rentalhub::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> HubError {
    HubError::transport(format!("{}: {:?}", context, e))
}

/// 基于浏览器 fetch 的客户端
#[derive(Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> HubResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("请求构建失败", e))?;

        let window =
            web_sys::window().ok_or_else(|| HubError::transport("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("Response 类型转换失败", e))?;

        let promise = response
            .text()
            .map_err(|e| js_error("响应解析失败", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("响应解析失败", e))?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
