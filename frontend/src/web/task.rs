//! 与视图生命周期绑定的异步任务

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentalhub::task::cancellable;
use std::future::Future;

/// 在当前 owner 下启动任务，owner 清理时中止
///
/// 被中止的任务不会再执行后续的信号写入。
pub fn spawn_scoped<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let (task, guard) = cancellable(fut);
    on_cleanup(move || guard.cancel());
    spawn_local(async move {
        if task.await.is_none() {
            web_sys::console::log_1(&"[Task] cancelled with its view".into());
        }
    });
}

/// 在组件创建时捕获的 owner 下启动任务
///
/// 事件回调运行时没有当前 owner，直接调用 `spawn_scoped` 注册的清理不会随页面触发。
pub fn spawn_scoped_in<F>(owner: Option<&Owner>, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    match owner {
        Some(owner) => owner.with(|| spawn_scoped(fut)),
        None => spawn_scoped(fut),
    }
}
