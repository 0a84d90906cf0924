//! 分组与排序
//! 依分类分组，排除「其他」，按人数由多到少排列（同数保持首次出现顺序）

use std::collections::HashMap;

use crate::category::Category;
use crate::member::Member;

/// 单一分类分组
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub members: Vec<&'a Member>,
}

impl CategoryGroup<'_> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// 分组并排序（不含「其他」）
pub fn group_and_order(members: &[Member]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    let mut index: HashMap<Category, usize> = HashMap::new();

    for member in members {
        let idx = *index.entry(member.category).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: member.category,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].members.push(member);
    }

    groups.retain(|group| group.category.is_listed());
    // 稳定排序：同数分类维持首次出现顺序
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}

/// 各分类人数（含「其他」，首次出现顺序）
pub fn category_counts(members: &[Member]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for member in members {
        match counts.iter_mut().find(|(c, _)| *c == member.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((member.category, 1)),
        }
    }
    counts
}

/// 筛选按钮用的分类顺序
pub fn ordered_categories(members: &[Member]) -> Vec<Category> {
    group_and_order(members)
        .into_iter()
        .map(|group| group.category)
        .collect()
}

/// 单一分类的会员（保持资料顺序）
pub fn members_in(members: &[Member], category: Category) -> Vec<&Member> {
    members.iter().filter(|m| m.category == category).collect()
}
