//! 会员资料载入
//! 从单一固定位置（本地路径或 http(s) URL）读取 members.json，只尝试一次

use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::DirectoryConfig;
use crate::error::{DirResult, DirectoryError};
use crate::member::{Member, MemberDocument, MemberNormalizer};

/// 会员资料载入器
pub struct DirectoryLoader;

impl DirectoryLoader {
    /// 载入并正规化会员资料
    pub async fn load(config: &DirectoryConfig) -> DirResult<Vec<Member>> {
        let source = config.data_source.as_str();

        // 1. 读取原始内容
        let body = match Self::remote_url(source) {
            Some(url) => Self::fetch_remote(config, url).await?,
            None => Self::read_local(source).await?,
        };

        // 2. 解析 + 正规化
        let members = Self::parse(&body)?;
        debug!("會員資料載入成功：來源={}，會員數={}", source, members.len());
        Ok(members)
    }

    /// 解析 members.json 内容并正规化每位会员
    pub fn parse(body: &str) -> DirResult<Vec<Member>> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            DirectoryError::MalformedSchema(format!("JSON 解析失敗：{}", e))
        })?;

        if !matches!(value.get("members"), Some(Value::Array(_))) {
            return Err(DirectoryError::MalformedSchema("找不到 members 陣列".to_string()));
        }

        let document: MemberDocument = serde_json::from_value(value).map_err(|e| {
            DirectoryError::MalformedSchema(format!("會員記錄無法解析：{}", e))
        })?;

        Ok(MemberNormalizer::normalize_all(document.members))
    }

    /// 来源为 http(s) URL 时返回解析后的 URL
    fn remote_url(source: &str) -> Option<Url> {
        Url::parse(source)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    /// HTTP 客户端，https 走 rustls
    fn http_client(config: &DirectoryConfig) -> reqwest::Result<Client> {
        Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()
    }

    /// 通过 HTTP 拉取
    async fn fetch_remote(config: &DirectoryConfig, url: Url) -> DirResult<String> {
        let not_found = |detail: String| {
            DirectoryError::NotFound(format!(
                "請確認檔案存在於 {}，或使用 HTTP 伺服器開啟網站（{}）",
                config.data_source, detail
            ))
        };

        let client = Self::http_client(config)
            .map_err(|e| not_found(format!("HTTP 客戶端建立失敗：{}", e)))?;

        debug!("開始拉取會員資料，URL：{}", url);
        let response = client
            .get(url.clone())
            .header("User-Agent", concat!("member-directory/", env!("CARGO_PKG_VERSION")))
            .send()
            .await
            .map_err(|e| not_found(format!("網路請求失敗：{}", e)))?;

        if !response.status().is_success() {
            return Err(not_found(format!("返回狀態碼 {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| not_found(format!("讀取回應內容失敗：{}", e)))
    }

    /// 读取本地文件
    async fn read_local(path: &str) -> DirResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            DirectoryError::NotFound(format!(
                "請確認檔案存在於 {}，或使用 HTTP 伺服器開啟網站（{}）",
                path, e
            ))
        })
    }
}
