#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    UrlBar,
    TabBar,
    Editor,
    ResponseViewer,
}

impl Focus {
    /// Cycle order: UrlBar → TabBar → Editor → ResponseViewer → UrlBar
    pub fn next(&self) -> Focus {
        match self {
            Focus::UrlBar => Focus::TabBar,
            Focus::TabBar => Focus::Editor,
            Focus::Editor => Focus::ResponseViewer,
            Focus::ResponseViewer => Focus::UrlBar,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::UrlBar => Focus::ResponseViewer,
            Focus::TabBar => Focus::UrlBar,
            Focus::Editor => Focus::TabBar,
            Focus::ResponseViewer => Focus::Editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_are_inverse() {
        for focus in [Focus::UrlBar, Focus::TabBar, Focus::Editor, Focus::ResponseViewer] {
            assert_eq!(focus.next().prev(), focus);
        }
    }
}
