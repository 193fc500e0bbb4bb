//! Home component - Main application screen
//!
//! Displays the profile header, tab bar, and whichever tab body is active.
//! Owns the two pieces of interactive view state: the assignment search
//! query and the active tab.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    assignments, calculate_main_layout, overview, progress, resources, schedule,
};
use crate::model::student::Assignment;
use crate::model::ui::Tab;
use crate::model::Dataset;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListState, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main dashboard view
///
/// Rendering is a pure function of this state plus the static dataset;
/// both fields reset to their defaults on every launch (no persistence).
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    /// Assignment search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,

    /// Selection state for the assignment list
    pub list_state: ListState,

    /// Scroll offset for the non-list tabs
    pub scroll: u16,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            active_tab: Tab::default(),
            search_query: String::new(),
            search_mode: false,
            list_state,
            scroll: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Assignment Filtering
    // ─────────────────────────────────────────────────────────────────────────

    /// Get assignments whose title contains the search query,
    /// case-insensitively
    ///
    /// An empty query returns the full list. Original order is preserved;
    /// the result is recomputed from current state on every draw.
    pub fn filtered_assignments<'a>(&self, assignments: &'a [Assignment]) -> Vec<&'a Assignment> {
        if self.search_query.is_empty() {
            return assignments.iter().collect();
        }
        let query = self.search_query.to_lowercase();
        assignments
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&query))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Jump directly to a tab
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.reset_position();
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_index = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        let next_index = (current_index + 1) % tabs.len();
        self.select_tab(tabs[next_index]);
    }

    /// Switch to the previous tab
    pub fn previous_tab(&mut self) {
        let tabs = Tab::all();
        let current_index = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        let prev_index = if current_index == 0 {
            tabs.len() - 1
        } else {
            current_index - 1
        };
        self.select_tab(tabs[prev_index]);
    }

    fn reset_position(&mut self) {
        self.list_state.select(Some(0));
        self.scroll = 0;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the active tab renders the plain scroll offset
    ///
    /// Overview and Progress have fixed layouts; only the long text tabs
    /// scroll, so j/k must not silently move state anywhere else.
    fn scrollable(&self) -> bool {
        matches!(self.active_tab, Tab::Schedule | Tab::Resources)
    }

    /// Select the next item in the active panel
    pub fn next(&mut self, dataset: &Dataset) {
        match self.active_tab {
            Tab::Assignments => {
                let count = self.filtered_assignments(&dataset.assignments).len();
                if count == 0 {
                    self.list_state.select(None);
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let next = (current + 1) % count;
                self.list_state.select(Some(next));
            }
            _ if self.scrollable() => {
                self.scroll = self.scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Select the previous item in the active panel
    pub fn previous(&mut self, dataset: &Dataset) {
        match self.active_tab {
            Tab::Assignments => {
                let count = self.filtered_assignments(&dataset.assignments).len();
                if count == 0 {
                    self.list_state.select(None);
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let prev = if current == 0 { count - 1 } else { current - 1 };
                self.list_state.select(Some(prev));
            }
            _ if self.scrollable() => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Jump to the first item
    pub fn select_first(&mut self, dataset: &Dataset) {
        match self.active_tab {
            Tab::Assignments => {
                let count = self.filtered_assignments(&dataset.assignments).len();
                self.list_state
                    .select(if count > 0 { Some(0) } else { None });
            }
            _ => self.scroll = 0,
        }
    }

    /// Jump to the last item
    pub fn select_last(&mut self, dataset: &Dataset) {
        if self.active_tab == Tab::Assignments {
            let count = self.filtered_assignments(&dataset.assignments).len();
            if count > 0 {
                self.list_state.select(Some(count - 1));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter search mode; search always applies to the assignment list,
    /// so the assignments tab becomes active
    pub fn enter_search_mode(&mut self) {
        self.active_tab = Tab::Assignments;
        self.search_mode = true;
    }

    /// Exit search mode, keeping the current query applied
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Add character to search query
    pub fn search_input(&mut self, c: char, dataset: &Dataset) {
        self.search_query.push(c);
        self.select_first(dataset);
    }

    /// Remove last character from search query
    pub fn search_backspace(&mut self, dataset: &Dataset) {
        self.search_query.pop();
        self.select_first(dataset);
    }

    /// Clear the whole search query
    pub fn clear_search(&mut self, dataset: &Dataset) {
        self.search_query.clear();
        self.select_first(dataset);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(c) if Tab::from_hotkey(c).is_some() => {
                Tab::from_hotkey(c).map(Action::SelectTab)
            }

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Esc if !self.search_query.is_empty() => Some(Action::ClearSearch),

            // Modals
            KeyCode::Char('n') => Some(Action::OpenNotifications),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            // Data
            KeyCode::Char('R') => Some(Action::ReloadData),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the dataset;
        // App calls the navigation methods directly
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub dataset: &'a Dataset,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let has_status = ctx.error.is_some() || ctx.status_message.is_some();
    let layout = calculate_main_layout(area, has_status);

    render_header(frame, layout.header, ctx.dataset);
    render_tabs(frame, layout.tabs, home);

    match home.active_tab {
        Tab::Overview => overview::render(frame, layout.body, ctx.dataset),
        Tab::Assignments => assignments::render(frame, layout.body, home, ctx.dataset),
        Tab::Schedule => schedule::render(frame, layout.body, ctx.dataset, home.scroll),
        Tab::Progress => progress::render(frame, layout.body, ctx.dataset),
        Tab::Resources => resources::render(frame, layout.body, ctx.dataset, home.scroll),
    }

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let profile = &dataset.profile;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    // Avatar badge
    let avatar = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", profile.avatar),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(avatar, chunks[0]);

    let unread = dataset.unread_count();
    let mut first_line = vec![
        Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  <{}>", profile.email),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if unread > 0 {
        first_line.push(Span::styled(
            format!("  ({} unread)", unread),
            Style::default().fg(Color::Yellow),
        ));
    }

    let lines = vec![
        Line::from(""),
        Line::from(first_line),
        Line::from(vec![
            Span::styled(profile.course.clone(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {}  joined {}", profile.id, profile.join_date.format("%b %e, %Y")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), chunks[1]);

    // Clock in the top-right corner of the header
    let clock = Paragraph::new(Line::from(Span::styled(
        chrono::Local::now().format("%a %b %e  %H:%M ").to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(ratatui::layout::Alignment::Right);
    let clock_area = Rect {
        height: 1,
        ..chunks[1]
    };
    frame.render_widget(clock, clock_area);
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<String> = all_tabs
        .iter()
        .map(|t| format!("{} {}", t.hotkey(), t.name()))
        .collect();
    let selected = all_tabs
        .iter()
        .position(|t| *t == home.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::BOTTOM),
        )
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let help_spans = if home.search_mode {
        vec![
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Confirm  "),
            Span::styled(
                format!("Search: {}_", home.search_query),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        vec![
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit "),
            Span::styled(
                " Tab/1-5 ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Switch tab "),
            Span::styled(
                " / ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Search "),
            Span::styled(
                " n ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Notifications "),
            Span::styled(
                " R ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Reload "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help"),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_with_query(query: &str) -> HomeComponent {
        let mut home = HomeComponent::new();
        home.search_query = query.to_string();
        home
    }

    #[test]
    fn test_empty_query_returns_all_assignments() {
        let dataset = Dataset::sample();
        let home = HomeComponent::new();
        let filtered = home.filtered_assignments(&dataset.assignments);
        assert_eq!(filtered.len(), dataset.assignments.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let dataset = Dataset::sample();
        let home = home_with_query("react");
        let filtered = home.filtered_assignments(&dataset.assignments);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "React Hooks Implementation");
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let dataset = Dataset::sample();
        let home = home_with_query("zzz");
        let filtered = home.filtered_assignments(&dataset.assignments);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_only_returns_matching_titles() {
        let dataset = Dataset::sample();
        let home = home_with_query("a");
        for assignment in home.filtered_assignments(&dataset.assignments) {
            assert!(assignment.title.to_lowercase().contains('a'));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = Dataset::sample();
        let home = home_with_query("project");
        let once: Vec<Assignment> = home
            .filtered_assignments(&dataset.assignments)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&Assignment> = home.filtered_assignments(&once);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let dataset = Dataset::sample();
        let home = home_with_query("i");
        let filtered = home.filtered_assignments(&dataset.assignments);
        let ids: Vec<u32> = filtered.iter().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_default_tab_is_overview() {
        let home = HomeComponent::new();
        assert_eq!(home.active_tab, Tab::Overview);
    }

    #[test]
    fn test_select_tab_sets_active_tab() {
        let mut home = HomeComponent::new();
        home.select_tab(Tab::Schedule);
        assert_eq!(home.active_tab, Tab::Schedule);
        home.select_tab(Tab::Resources);
        assert_eq!(home.active_tab, Tab::Resources);
    }

    #[test]
    fn test_tab_cycling_wraps_both_ways() {
        let mut home = HomeComponent::new();
        for _ in 0..Tab::all().len() {
            home.next_tab();
        }
        assert_eq!(home.active_tab, Tab::Overview);

        home.previous_tab();
        assert_eq!(home.active_tab, Tab::Resources);
    }

    #[test]
    fn test_enter_search_mode_activates_assignments_tab() {
        let mut home = HomeComponent::new();
        home.enter_search_mode();
        assert!(home.search_mode);
        assert_eq!(home.active_tab, Tab::Assignments);
    }

    #[test]
    fn test_search_input_and_backspace() {
        let dataset = Dataset::sample();
        let mut home = HomeComponent::new();
        home.enter_search_mode();
        home.search_input('q', &dataset);
        home.search_input('u', &dataset);
        assert_eq!(home.search_query, "qu");
        home.search_backspace(&dataset);
        assert_eq!(home.search_query, "q");
        home.clear_search(&dataset);
        assert!(home.search_query.is_empty());
    }

    #[test]
    fn test_selection_clamps_to_filtered_list() {
        let dataset = Dataset::sample();
        let mut home = HomeComponent::new();
        home.select_tab(Tab::Assignments);
        home.select_last(&dataset);
        assert_eq!(home.list_state.selected(), Some(3));

        // Narrowing the filter to no matches drops the selection
        for c in "zzz".chars() {
            home.search_input(c, &dataset);
        }
        assert_eq!(home.list_state.selected(), None);
    }

    #[test]
    fn test_scroll_only_moves_on_scrolling_tabs() {
        let dataset = Dataset::sample();
        let mut home = HomeComponent::new();

        // Overview and Progress have fixed layouts
        home.next(&dataset);
        assert_eq!(home.scroll, 0);
        home.select_tab(Tab::Progress);
        home.next(&dataset);
        assert_eq!(home.scroll, 0);

        home.select_tab(Tab::Schedule);
        home.next(&dataset);
        home.next(&dataset);
        assert_eq!(home.scroll, 2);
        home.previous(&dataset);
        assert_eq!(home.scroll, 1);

        home.select_tab(Tab::Resources);
        home.next(&dataset);
        assert_eq!(home.scroll, 1);
    }

    #[test]
    fn test_next_wraps_around_assignment_list() {
        let dataset = Dataset::sample();
        let mut home = HomeComponent::new();
        home.select_tab(Tab::Assignments);
        home.select_last(&dataset);
        home.next(&dataset);
        assert_eq!(home.list_state.selected(), Some(0));
        home.previous(&dataset);
        assert_eq!(home.list_state.selected(), Some(3));
    }
}
