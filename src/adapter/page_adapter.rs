//! 宿主页面适配
//! 只负责把渲染好的片段放进宿主页面既有的容器，不建立任何容器

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::MountPoints;
use crate::directory::RenderedDirectory;
use crate::error::{DirResult, DirectoryError};
use crate::extractor::HtmlExtractor;

/// 注释开头或一个完整标签（属性值内的 > 不截断）
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!--|<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#).unwrap()
});

/// 单个属性：名称与可选的值
static ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap()
});

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// 内容不解析为标签的元素
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

/// 扫描到的标签
struct ScannedTag<'a> {
    start: usize,
    end: usize,
    closing: bool,
    self_closing: bool,
    name: String,
    attrs: &'a str,
}

impl ScannedTag<'_> {
    fn id(&self) -> Option<&str> {
        ATTR.captures_iter(self.attrs)
            .find(|caps| caps[1].eq_ignore_ascii_case("id"))
            .and_then(|caps| caps.get(2).or(caps.get(3)).or(caps.get(4)))
            .map(|m| m.as_str())
    }
}

/// 从 pos 起找下一个标签，跳过注释
fn next_tag(html: &str, mut pos: usize) -> Option<ScannedTag<'_>> {
    loop {
        let caps = TAG.captures_at(html, pos)?;
        let whole = caps.get(0)?;
        if whole.as_str() == "<!--" {
            pos = whole.end() + html[whole.end()..].find("-->")? + 3;
            continue;
        }
        let attrs = caps.get(3).map_or("", |m| m.as_str());
        return Some(ScannedTag {
            start: whole.start(),
            end: whole.end(),
            closing: !caps[1].is_empty(),
            self_closing: attrs.trim_end().ends_with('/'),
            name: caps[2].to_ascii_lowercase(),
            attrs,
        });
    }
}

/// 跳到原始文本元素的结束标签
fn skip_raw_text(html: &str, pos: usize, name: &str) -> usize {
    html[pos..]
        .to_ascii_lowercase()
        .find(&format!("</{}", name))
        .map_or(html.len(), |offset| pos + offset)
}

/// 容器内容的字节区间（开始标签之后到对应结束标签之前）
fn container_span(html: &str, id: &str) -> DirResult<(usize, usize)> {
    let mut pos = 0;
    let mut container: Option<(String, usize)> = None;
    let mut depth = 0usize;

    while let Some(tag) = next_tag(html, pos) {
        pos = tag.end;
        match &container {
            Some((name, content_start)) => {
                if tag.name == *name && !tag.self_closing {
                    if tag.closing {
                        depth -= 1;
                        if depth == 0 {
                            return Ok((*content_start, tag.start));
                        }
                    } else {
                        depth += 1;
                    }
                }
            }
            None if !tag.closing && tag.id() == Some(id) => {
                if tag.self_closing || VOID_TAGS.contains(&tag.name.as_str()) {
                    return Err(DirectoryError::InvalidInput(format!("容器 #{} 不能是空元素", id)));
                }
                depth = 1;
                container = Some((tag.name.clone(), tag.end));
            }
            None => {}
        }
        if !tag.closing && RAW_TEXT_TAGS.contains(&tag.name.as_str()) {
            pos = skip_raw_text(html, pos, &tag.name);
        }
    }

    match container {
        Some(_) => Err(DirectoryError::InvalidInput(format!("容器 #{} 缺少結束標籤", id))),
        None => Err(DirectoryError::MissingMount(id.to_string())),
    }
}

/// 宿主页面适配器
pub struct PageAdapter;

impl PageAdapter {
    /// 把名录片段挂载到宿主页面，容器原有内容会被取代
    pub fn mount(host_html: &str, rendered: &RenderedDirectory, mounts: &MountPoints) -> DirResult<String> {
        // 1. 检查容器是否存在
        let page = HtmlExtractor::new().extract(host_html);
        let ids = page.ids();
        let require = |id: &str| -> DirResult<()> {
            if ids.iter().any(|existing| existing == id) {
                Ok(())
            } else {
                Err(DirectoryError::MissingMount(id.to_string()))
            }
        };
        require(&mounts.filter_buttons)?;
        require(&mounts.members_grid)?;

        // 2. 决定错误面板位置
        let mut grid = rendered.members_grid.clone();
        let mut region_fill = None;
        if let Some(panel) = &rendered.error_panel {
            match &mounts.error_region {
                Some(region) if ids.iter().any(|existing| existing == region) => {
                    region_fill = Some((region.as_str(), panel.clone()));
                }
                _ => grid.push_str(panel),
            }
        }

        let mut fills = vec![
            (mounts.filter_buttons.as_str(), rendered.filter_buttons.clone()),
            (mounts.members_grid.as_str(), grid),
        ];
        fills.extend(region_fill);

        // 3. 取代容器内容
        let mut html = host_html.to_string();
        for (id, fragment) in fills {
            html = Self::replace_content(&html, id, &fragment)?;
            debug!("已填入容器 #{}，片段長度={}", id, fragment.len());
        }
        Ok(html)
    }

    /// 以片段取代指定 id 元素的内容
    fn replace_content(html: &str, id: &str, fragment: &str) -> DirResult<String> {
        let (start, end) = container_span(html, id)?;
        let mut out = String::with_capacity(html.len() - (end - start) + fragment.len());
        out.push_str(&html[..start]);
        out.push_str(fragment);
        out.push_str(&html[end..]);
        Ok(out)
    }
}
