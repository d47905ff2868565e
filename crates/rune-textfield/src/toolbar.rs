//! Floating toolbar bookkeeping.

use rune_text::Rect;

use crate::host::{TextToolbar, ToolbarStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Copy,
    Paste,
    Cut,
    SelectAll,
}

/// Actions offered by the toolbar for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolbarActions {
    pub copy: bool,
    pub paste: bool,
    pub cut: bool,
    pub select_all: bool,
}

impl ToolbarActions {
    pub fn contains(&self, action: ToolbarAction) -> bool {
        match action {
            ToolbarAction::Copy => self.copy,
            ToolbarAction::Paste => self.paste,
            ToolbarAction::Cut => self.cut,
            ToolbarAction::SelectAll => self.select_all,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.copy || self.paste || self.cut || self.select_all)
    }

    /// Offered actions in menu order.
    pub fn iter(&self) -> impl Iterator<Item = ToolbarAction> + '_ {
        [
            ToolbarAction::Copy,
            ToolbarAction::Paste,
            ToolbarAction::Cut,
            ToolbarAction::SelectAll,
        ]
        .into_iter()
        .filter(|action| self.contains(*action))
    }
}

/// Turns toolbar target changes into `show_menu` / `hide` calls.
///
/// Only a change of target reaches the toolbar, so re-evaluating after
/// unrelated state changes never makes the menu flicker.
#[derive(Debug, Default)]
pub(crate) struct ToolbarReactor {
    last: Option<Option<Rect>>,
}

impl ToolbarReactor {
    pub(crate) fn react(
        &mut self,
        toolbar: &dyn TextToolbar,
        target: Option<Rect>,
        actions: impl FnOnce() -> ToolbarActions,
    ) {
        if self.last == Some(target) {
            return;
        }
        self.last = Some(target);

        match target {
            Some(rect) => {
                let actions = actions();
                tracing::debug!(?rect, ?actions, "show text toolbar");
                toolbar.show_menu(rect, actions);
            }
            None => hide_toolbar(toolbar),
        }
    }

    /// Forget the last decision so the next evaluation reaches the toolbar.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }
}

pub(crate) fn hide_toolbar(toolbar: &dyn TextToolbar) {
    if toolbar.status() == ToolbarStatus::Shown {
        tracing::debug!("hide text toolbar");
        toolbar.hide();
    }
}
