//! 页面状态机
//!
//! ```text
//! Upload ──submit(≥1 文件)──▶ Loading ──成功──▶ Checklist
//!   ▲                           │                 │
//!   └───────────失败────────────┘                 │
//!   └──────────────────返回（清空会话）────────────┘
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{AppError, Result};
use crate::infrastructure::View;

/// 三个互斥的页面，任一时刻只有一个处于激活状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageState {
    #[default]
    Upload,
    Loading,
    Checklist,
}

impl PageState {
    pub fn title(&self) -> &'static str {
        match self {
            PageState::Upload => "Upload",
            PageState::Loading => "Generating checklist...",
            PageState::Checklist => "Travel Checklist",
        }
    }

    /// 状态机允许的切换
    pub fn can_transition_to(self, to: PageState) -> bool {
        matches!(
            (self, to),
            (PageState::Upload, PageState::Loading)
                | (PageState::Loading, PageState::Checklist)
                | (PageState::Loading, PageState::Upload)
                | (PageState::Checklist, PageState::Upload)
        )
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageState::Upload => "upload",
            PageState::Loading => "loading",
            PageState::Checklist => "checklist",
        };
        f.write_str(name)
    }
}

/// 页面导航
#[derive(Debug, Default)]
pub struct PageNavigator {
    current: PageState,
}

impl PageNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PageState {
        self.current
    }

    /// 显示当前页面（用于初始化）
    pub fn show<V: View + ?Sized>(&self, view: &mut V) {
        view.show_page(self.current);
    }

    /// 切换到目标页面
    ///
    /// 非法切换返回 `InvalidTransition`，状态不变
    pub fn go<V: View + ?Sized>(&mut self, view: &mut V, to: PageState) -> Result<()> {
        if !self.current.can_transition_to(to) {
            return Err(AppError::InvalidTransition {
                from: self.current,
                to,
            });
        }

        debug!("页面切换: {} -> {}", self.current, to);
        self.current = to;
        view.show_page(to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryView;

    #[test]
    fn test_allowed_transitions() {
        use PageState::*;

        assert!(Upload.can_transition_to(Loading));
        assert!(Loading.can_transition_to(Checklist));
        assert!(Loading.can_transition_to(Upload));
        assert!(Checklist.can_transition_to(Upload));

        assert!(!Upload.can_transition_to(Checklist));
        assert!(!Upload.can_transition_to(Upload));
        assert!(!Checklist.can_transition_to(Loading));
        assert!(!Loading.can_transition_to(Loading));
    }

    #[test]
    fn test_full_cycle() {
        let mut view = MemoryView::new();
        let mut nav = PageNavigator::new();
        nav.show(&mut view);

        nav.go(&mut view, PageState::Loading).unwrap();
        nav.go(&mut view, PageState::Checklist).unwrap();
        nav.go(&mut view, PageState::Upload).unwrap();
        nav.go(&mut view, PageState::Loading).unwrap();

        assert_eq!(nav.current(), PageState::Loading);
        assert_eq!(view.active_page(), Some(PageState::Loading));
        assert_eq!(view.page_history().len(), 5);
    }

    #[test]
    fn test_invalid_transition_keeps_state() {
        let mut view = MemoryView::new();
        let mut nav = PageNavigator::new();

        let err = nav.go(&mut view, PageState::Checklist).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: PageState::Upload,
                to: PageState::Checklist
            }
        ));
        assert_eq!(nav.current(), PageState::Upload);
        assert!(view.page_history().is_empty());
    }
}
