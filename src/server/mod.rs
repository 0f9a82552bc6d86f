//! HTTP 服务模块
//!
//! 页面路由、预测表单、JSON API 与内嵌静态文件

mod assets;
mod handlers;
mod middleware;
mod router;
pub mod types;

pub use middleware::AppState;
pub use router::create_router;
