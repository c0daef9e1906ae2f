//! 清单渲染 - 业务能力层
//!
//! 把服务返回的清单转换为可勾选的分组，并能从已渲染内容导出纯文本

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::infrastructure::{CategoryGroup, ChecklistDocument, CheckboxItem, View};
use crate::models::ChecklistResponse;

/// 导出文本中的复选框符号，不反映勾选状态
pub const UNCHECKED_GLYPH: &str = "☐";

/// 无法解析的日期显示文本
pub const INVALID_DATE: &str = "Invalid Date";

/// 把响应转换为渲染用的清单
pub fn build_document(response: &ChecklistResponse) -> ChecklistDocument {
    let groups = response
        .categories()
        .iter()
        .map(|category| CategoryGroup {
            title: category.name.clone(),
            items: category
                .items
                .iter()
                .enumerate()
                .map(|(index, label)| CheckboxItem {
                    id: item_id(&category.name, index),
                    label: label.clone(),
                    checked: false,
                })
                .collect(),
        })
        .collect();

    ChecklistDocument {
        destination_line: format!("Destination: {}", response.destination),
        dates_line: format!(
            "Travel Dates: {} - {}",
            format_display_date(&response.start_date),
            format_display_date(&response.end_date)
        ),
        groups,
    }
}

/// 渲染清单，替换之前显示的内容
pub fn render<V: View + ?Sized>(view: &mut V, response: &ChecklistResponse) {
    let document = build_document(response);
    debug!(
        "渲染清单: {} 个分类, {} 个条目",
        document.groups.len(),
        document.item_count()
    );
    view.render_checklist(document);
}

/// 从当前已渲染的清单导出纯文本
///
/// # 返回
/// 尚未渲染任何清单时返回 `None`
pub fn export_as_text<V: View + ?Sized>(view: &V) -> Option<String> {
    view.checklist().map(document_to_text)
}

/// 清单的纯文本形式
pub fn document_to_text(document: &ChecklistDocument) -> String {
    let mut text = String::from("TRAVEL CHECKLIST\n");
    text.push_str("================\n\n");
    text.push_str(&format!("{}\n", document.destination_line));
    text.push_str(&format!("{}\n\n", document.dates_line));

    for group in &document.groups {
        text.push_str(&format!("\n{}\n", group.title));
        text.push_str(&format!("{}\n", "-".repeat(underline_len(&group.title))));

        for item in &group.items {
            text.push_str(&format!("{} {}\n", UNCHECKED_GLYPH, item.label));
        }
    }

    text
}

/// 下划线长度按 UTF-16 码元计算，与浏览器端字符串长度一致
fn underline_len(title: &str) -> usize {
    title.encode_utf16().count()
}

/// 复选框 id：`item-<分类>-<序号>`
pub fn item_id(category: &str, index: usize) -> String {
    format!("item-{}-{}", category, index)
}

/// 把 ISO 日期转换为 `M/D/YYYY`
///
/// 接受 `YYYY-MM-DD`、RFC 3339 时间戳以及不带时区的 `YYYY-MM-DDTHH:MM:SS`
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        });

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
