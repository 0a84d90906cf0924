//! 适配模块：把名录片段挂载到宿主页面
pub mod page_adapter;

pub use self::page_adapter::PageAdapter;
