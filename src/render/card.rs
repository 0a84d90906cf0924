//! 会员卡片渲染
//! Member + CardView -> 标记树，不接触任何 DOM

use super::markup::{Element, Node};
use super::social::{ensure_url_protocol, platform_meta};
use crate::directory::state::CardView;
use crate::member::{Contact, Member, SocialEntry};

/// 首字占位图（data URI）
/// 内部引号编码为 %27，才能放进 onerror 的单引号字串
pub fn placeholder_svg(member: &Member) -> String {
    let initial = member.initial().map(|c| c.to_string()).unwrap_or_default();
    format!(
        "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 width=%27150%27 height=%27150%27%3E%3Crect width=%27150%27 height=%27150%27 rx=%2712%27 fill=%27%23001933%27/%3E%3Ctext x=%2750%25%27 y=%2750%25%27 text-anchor=%27middle%27 dy=%27.3em%27 fill=%27%234ca8df%27 font-family=%27Arial%27 font-size=%2750%27%3E{}%3C/text%3E%3C/svg%3E",
        urlencoding::encode(&initial)
    )
}

fn toggle_icon(expanded: bool) -> &'static str {
    if expanded { "▲" } else { "▼" }
}

/// 渲染单张会员卡片
pub fn render_card(member: &Member, view: CardView) -> Element {
    let id = member.id.as_str();
    let placeholder = placeholder_svg(member);
    let photo_src = member.photo.clone().unwrap_or_else(|| placeholder.clone());

    let header = Element::new("div")
        .class(&["member-header"])
        .child(
            Element::new("div").class(&["member-photo-container"]).child(
                Element::new("img")
                    .attr("src", photo_src)
                    .attr("alt", member.name.clone())
                    .class(&["member-photo"])
                    .attr("onerror", format!("this.src='{}';", placeholder)),
            ),
        )
        .child(
            Element::new("div")
                .class(&["member-basic-info"])
                .child(
                    Element::new("div")
                        .class(&["member-name-industry"])
                        .child(Element::new("h3").class(&["member-name"]).text(member.name.clone()))
                        .child(
                            Element::new("span")
                                .class(&["member-industry"])
                                .text(member.industry.clone().unwrap_or_default()),
                        ),
                )
                .child(
                    Element::new("button")
                        .class(&["member-toggle-btn", if view.expanded { "expanded" } else { "" }])
                        .attr("aria-label", "展開/摺疊會員資訊")
                        .attr("data-target", id)
                        .child(Element::new("span").class(&["toggle-icon"]).text(toggle_icon(view.expanded))),
                ),
        );

    let short = Element::new("div")
        .class(&["member-short-description"])
        .hidden_if(view.expanded)
        .child(Element::new("p").text(member.short_description.clone()));

    let info = Element::new("div")
        .class(&["member-info"])
        .child(Element::new("p").class(&["member-description"]).text(member.full_description.clone()))
        .maybe_child(build_services(&member.services))
        .maybe_child(build_hashtags(&member.hashtags))
        .maybe_child(build_social(&member.social))
        .maybe_child(member.contact.as_ref().and_then(build_contact));

    let details = Element::new("div")
        .class(&["member-details", if view.expanded { "expanded" } else { "" }])
        .id(format!("{}-details", id))
        .child(info);

    Element::new("div")
        .class(&["member-card", if view.expanded { "expanded-full" } else { "collapsed" }])
        .attr("data-member-id", id)
        .hidden_if(view.hidden)
        .child(header)
        .child(short)
        .child(details)
}

/// 服务项目（为空时省略）
pub fn build_services(services: &[String]) -> Option<Element> {
    if services.is_empty() {
        return None;
    }
    let items = services
        .iter()
        .map(|service| Node::from(Element::new("li").text(service.clone())));
    Some(
        Element::new("div")
            .class(&["member-services"])
            .child(Element::new("h4").text("服務項目"))
            .child(Element::new("ul").class(&["member-services-list"]).children(items)),
    )
}

/// Hashtag 标签（为空时省略）
pub fn build_hashtags(hashtags: &[String]) -> Option<Element> {
    if hashtags.is_empty() {
        return None;
    }
    let chips = hashtags
        .iter()
        .map(|tag| Node::from(Element::new("span").class(&["hashtag-chip"]).text(tag.clone())));
    Some(Element::new("div").class(&["member-hashtags"]).children(chips))
}

/// 社群连结（为空时省略）
pub fn build_social(social: &[SocialEntry]) -> Option<Element> {
    if social.is_empty() {
        return None;
    }
    let links = social.iter().map(|entry| {
        let meta = platform_meta(&entry.platform);
        Node::from(
            Element::new("a")
                .class(&["member-social-link"])
                .attr("href", ensure_url_protocol(&entry.value))
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("aria-label", format!("{} - {}", meta.label, entry.value))
                .child(Element::new("span").class(&["social-icon"]).text(meta.icon))
                .child(Element::new("span").class(&["social-label"]).text(meta.label)),
        )
    });
    Some(Element::new("div").class(&["member-social"]).children(links))
}

/// 联络方式（全部缺省时省略）
pub fn build_contact(contact: &Contact) -> Option<Element> {
    if contact.is_empty() {
        return None;
    }
    let mut block = Element::new("div").class(&["member-contact"]);
    if let Some(email) = &contact.email {
        block = block.child(
            Element::new("p")
                .child(Element::new("strong").text("Email"))
                .child(
                    Element::new("a")
                        .class(&["contact-link"])
                        .attr("href", format!("mailto:{}", email))
                        .text(email.clone()),
                ),
        );
    }
    if let Some(phone) = &contact.phone {
        block = block.child(
            Element::new("p")
                .child(Element::new("strong").text("電話"))
                .child(Element::new("span").text(phone.clone())),
        );
    }
    if let Some(line) = &contact.line {
        block = block.child(
            Element::new("p")
                .child(Element::new("strong").text("Line"))
                .child(Element::new("span").text(line.clone())),
        );
    }
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::HtmlExtractor;
    use crate::member::{MemberNormalizer, MemberRecord};
    use serde_json::json;

    fn member(value: serde_json::Value) -> Member {
        let record: MemberRecord = serde_json::from_value(value).unwrap();
        MemberNormalizer::normalize(record)
    }

    #[test]
    fn test_collapsed_card_structure() {
        let m = member(json!({ "name": "王大明", "industry": "律師", "shortDescription": "簡介" }));
        let html = render_card(&m, CardView::default()).to_html();
        let page = HtmlExtractor::new().extract(&html);

        let card = page.first_with_class("member-card").unwrap();
        assert!(card.has_class("collapsed"));
        assert_eq!(card.attr("data-member-id"), Some("member-王大明"));
        assert!(page.first_with_class("member-short-description").unwrap().is_visible());
        assert!(page.element_by_id("member-王大明-details").is_some());
        assert!(html.contains("<p>簡介</p>"));
        assert!(html.contains("▼"));
    }

    #[test]
    fn test_expanded_card_hides_short_description() {
        let m = member(json!({ "name": "Amy" }));
        let view = CardView { expanded: true, hidden: false };
        let page = HtmlExtractor::new().extract(&render_card(&m, view).to_html());
        let card = page.first_with_class("member-card").unwrap();
        assert!(card.has_class("expanded-full"));
        assert!(!card.has_class("collapsed"));
        assert!(!page.first_with_class("member-short-description").unwrap().is_visible());
        assert!(page.first_with_class("member-details").unwrap().has_class("expanded"));
    }

    #[test]
    fn test_placeholder_uses_first_character() {
        let m = member(json!({ "name": "林小華" }));
        let svg = placeholder_svg(&m);
        assert!(svg.contains("%E6%9E%97%3C/text%3E"));
        let page = HtmlExtractor::new().extract(&render_card(&m, CardView::default()).to_html());
        let img = page.first_with_class("member-photo").unwrap();
        assert_eq!(img.attr("src"), Some(svg.as_str()));
    }

    #[test]
    fn test_onerror_handler_is_single_string_literal() {
        let m = member(json!({ "name": "林", "photo": "x.jpg" }));
        let page = HtmlExtractor::new().extract(&render_card(&m, CardView::default()).to_html());
        let img = page.first_with_class("member-photo").unwrap();
        assert_eq!(img.attr("src"), Some("x.jpg"));

        let handler = img.attr("onerror").unwrap();
        assert_eq!(handler.matches('\'').count(), 2);
        assert!(handler.starts_with("this.src='data:image/svg+xml,"));
        assert!(handler.ends_with("';"));
        assert_eq!(handler, format!("this.src='{}';", placeholder_svg(&m)));
        assert!(!placeholder_svg(&m).contains(['\'', '"']));
    }

    #[test]
    fn test_services_drop_blank_entries() {
        let m = member(json!({ "name": "A", "services": ["", "  ", "Valid"] }));
        let page = HtmlExtractor::new().extract(&render_card(&m, CardView::default()).to_html());
        assert_eq!(page.count_tag("li"), 1);
    }

    #[test]
    fn test_optional_blocks_omitted() {
        let m = member(json!({ "name": "A", "services": [], "hashtags": [" "], "social": {}, "contact": {} }));
        let page = HtmlExtractor::new().extract(&render_card(&m, CardView::default()).to_html());
        for class in ["member-services", "member-hashtags", "member-social", "member-contact"] {
            assert!(page.first_with_class(class).is_none(), "{}", class);
        }
    }

    #[test]
    fn test_social_and_contact() {
        let m = member(json!({
            "name": "B",
            "hashtags": ["#法律"],
            "social": { "website": "law.example.com", "podcast": "https://pod.example.com" },
            "contact": { "email": "b@example.com", "line": "@lawb" }
        }));
        let html = render_card(&m, CardView::default()).to_html();
        let page = HtmlExtractor::new().extract(&html);

        let links = page.with_class("member-social-link");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].attr("href"), Some("https://law.example.com"));
        assert_eq!(links[0].attr("aria-label"), Some("官方網站 - law.example.com"));
        assert_eq!(links[1].attr("href"), Some("https://pod.example.com"));
        assert!(html.contains("🔗"));
        assert!(html.contains("<span class=\"social-label\">podcast</span>"));

        assert_eq!(page.with_class("hashtag-chip").len(), 1);
        let mail = page.first_with_class("contact-link").unwrap();
        assert_eq!(mail.attr("href"), Some("mailto:b@example.com"));
        assert!(html.contains("<strong>Line</strong><span>@lawb</span>"));
        assert!(!html.contains("電話"));
    }

    #[test]
    fn test_text_is_escaped() {
        let m = member(json!({ "name": "<script>", "shortDescription": "a & b" }));
        let html = render_card(&m, CardView::default()).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("a &amp; b"));
    }
}
