//! 社群连结：平台标签/图示对照与网址协定补全

use once_cell::sync::Lazy;
use regex::Regex;

/// 平台显示信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMeta<'a> {
    pub label: &'a str,
    pub icon: &'a str,
}

/// 已知平台
const KNOWN_PLATFORMS: &[(&str, PlatformMeta<'static>)] = &[
    ("website", PlatformMeta { label: "官方網站", icon: "🌐" }),
    ("facebook", PlatformMeta { label: "Facebook", icon: "📘" }),
    ("instagram", PlatformMeta { label: "Instagram", icon: "📸" }),
    ("linkedin", PlatformMeta { label: "LinkedIn", icon: "💼" }),
    ("youtube", PlatformMeta { label: "YouTube", icon: "▶️" }),
    ("threads", PlatformMeta { label: "Threads", icon: "💬" }),
];

/// 未知平台的通用图示
pub const GENERIC_ICON: &str = "🔗";

static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(https?:)?//").unwrap());

/// 平台键 -> 显示信息（未知平台以键名为标签）
pub fn platform_meta(platform: &str) -> PlatformMeta<'_> {
    KNOWN_PLATFORMS
        .iter()
        .find(|(key, _)| *key == platform)
        .map(|(_, meta)| *meta)
        .unwrap_or(PlatformMeta {
            label: platform,
            icon: GENERIC_ICON,
        })
}

/// 补全网址协定：已带 http(s):// 、// 或 mailto: 者原样返回，否则加上 https://
pub fn ensure_url_protocol(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if SCHEME_PREFIX.is_match(url) || url.starts_with("mailto:") {
        return url.to_string();
    }
    format!("https://{}", url)
}
