//! 行程表单
//!
//! 保存表单字段和日期控件的最小可选日期

use chrono::NaiveDate;

use crate::infrastructure::View;
use crate::models::TripFields;

/// 日期控件的最小可选日期
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBounds {
    pub min_start: String,
    pub min_end: String,
}

impl DateBounds {
    fn from_today(today: NaiveDate) -> Self {
        let today = today.format("%Y-%m-%d").to_string();
        Self {
            min_start: today.clone(),
            min_end: today,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TripForm {
    fields: TripFields,
    today: NaiveDate,
    bounds: DateBounds,
}

impl TripForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fields: TripFields::default(),
            today,
            bounds: DateBounds::from_today(today),
        }
    }

    pub fn fields(&self) -> &TripFields {
        &self.fields
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.fields.destination = destination.into();
    }

    /// 修改开始日期，结束日期的下限随之更新
    ///
    /// 已填写的结束日期即使早于新的开始日期也保持不变
    pub fn set_start_date<V: View + ?Sized>(&mut self, view: &mut V, start_date: impl Into<String>) {
        self.fields.start_date = start_date.into();
        self.bounds.min_end = self.fields.start_date.clone();
        self.sync_bounds(view);
    }

    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        self.fields.end_date = end_date.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.fields.notes = notes.into();
    }

    /// 一次性填写全部字段
    pub fn fill<V: View + ?Sized>(&mut self, view: &mut V, fields: TripFields) {
        let TripFields {
            destination,
            start_date,
            end_date,
            notes,
        } = fields;
        self.set_destination(destination);
        self.set_start_date(view, start_date);
        self.set_end_date(end_date);
        self.set_notes(notes);
    }

    /// 清空字段，日期下限恢复为今天
    pub fn reset<V: View + ?Sized>(&mut self, view: &mut V) {
        self.fields = TripFields::default();
        self.bounds = DateBounds::from_today(self.today);
        view.reset_form();
        self.sync_bounds(view);
    }

    pub fn sync_bounds<V: View + ?Sized>(&self, view: &mut V) {
        view.set_date_bounds(&self.bounds.min_start, &self.bounds.min_end);
    }
}
