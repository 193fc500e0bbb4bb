//! UI state - presentation state separate from domain data
//!
//! Note: Most UI state lives on HomeComponent which owns presentation state.

/// Tab selection in the main UI
///
/// Exactly one tab is active at a time; the default is Overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Assignments,
    Schedule,
    Progress,
    Resources,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![
            Tab::Overview,
            Tab::Assignments,
            Tab::Schedule,
            Tab::Progress,
            Tab::Resources,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Overview => "Overview",
            Tab::Assignments => "Assignments",
            Tab::Schedule => "Schedule",
            Tab::Progress => "Progress",
            Tab::Resources => "Resources",
        }
    }

    /// The number key that jumps straight to this tab
    pub fn hotkey(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Assignments => '2',
            Tab::Schedule => '3',
            Tab::Progress => '4',
            Tab::Resources => '5',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Tab> {
        Tab::all().into_iter().find(|t| t.hotkey() == c)
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_all_tabs_have_unique_hotkeys() {
        let tabs = Tab::all();
        assert_eq!(tabs.len(), 5);
        for tab in &tabs {
            assert_eq!(Tab::from_hotkey(tab.hotkey()), Some(*tab));
        }
        assert_eq!(Tab::from_hotkey('9'), None);
    }
}
