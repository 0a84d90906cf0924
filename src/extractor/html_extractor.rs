//! HTML元素提取器
//! 负责从HTML中提取开始标签（标签名、id、class、属性），供宿主页面检查与标记验证使用

use std::cell::RefCell;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 提取到的单个元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementInfo {
    /// 读取属性
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// 行内样式未设置 display: none
    pub fn is_visible(&self) -> bool {
        !self.attr("style").is_some_and(|style| {
            style
                .split(';')
                .any(|decl| decl.replace(' ', "").eq_ignore_ascii_case("display:none"))
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct HtmlExtractor {
    elements: RefCell<Vec<ElementInfo>>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name,
            attrs,
            ..
        }) = token
        {
            self.extract_element(name.as_ref(), &attrs);
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从HTML字符串提取元素
    pub fn extract(&self, html: &str) -> Self {
        let tokenizer = Tokenizer::new(self.clone(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink
    }

    /// 记录开始标签
    fn extract_element(&self, tag: &str, attrs: &[Attribute]) {
        let attrs = attrs
            .iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();
        self.elements.borrow_mut().push(ElementInfo {
            tag: tag.to_string(),
            attrs,
        });
    }

    /// 获取全部元素（文件顺序）
    pub fn elements(&self) -> Vec<ElementInfo> {
        self.elements.borrow().clone()
    }

    /// 按 id 查找
    pub fn element_by_id(&self, id: &str) -> Option<ElementInfo> {
        self.elements.borrow().iter().find(|e| e.id() == Some(id)).cloned()
    }

    /// 带有指定 class 的全部元素
    pub fn with_class(&self, class: &str) -> Vec<ElementInfo> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }

    pub fn first_with_class(&self, class: &str) -> Option<ElementInfo> {
        self.with_class(class).into_iter().next()
    }

    /// 统计标签数量
    pub fn count_tag(&self, tag: &str) -> usize {
        self.elements.borrow().iter().filter(|e| e.tag == tag).count()
    }

    /// 页面中出现的全部 id
    pub fn ids(&self) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .filter_map(|e| e.id().map(str::to_string))
            .collect()
    }
}
