//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum DirectoryError {
    // 载入相关错误（可恢复，渲染为错误面板）
    #[error("無法載入會員資料檔案：{0}")]
    NotFound(String),
    #[error("會員資料格式錯誤：{0}")]
    MalformedSchema(String),

    // 宿主页面相关错误
    #[error("宿主頁面缺少容器：#{0}")]
    MissingMount(String),

    // 序列化/反序列化错误
    #[error("JSON解析失敗：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失敗：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失敗：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("無效輸入：{0}")]
    InvalidInput(String),
}

impl DirectoryError {
    /// 是否属于会员资料载入失败（资源不可达或结构错误）
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MalformedSchema(_))
    }
}

// 全局Result类型
pub type DirResult<T> = Result<T, DirectoryError>;
