//! 提取模块：HTML标签提取
pub mod html_extractor;

pub use self::html_extractor::{ElementInfo, HtmlExtractor};
