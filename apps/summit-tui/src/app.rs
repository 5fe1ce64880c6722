// app.rs — Application state machine for the goal board.
//
// All key handling lives in pure methods on App so the whole interaction
// surface is unit-testable without a terminal. The rendering layer (ui.rs)
// only reads this state; the event loop in main.rs feeds it key events and
// ticks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use summit_goal::{
    Category, ColorTag, CompletionEvent, FilterMode, Goal, GoalDraft, GoalStore,
};

/// How many ticks a celebration overlay stays on screen (~1.8 s at the
/// 60 ms poll interval in main.rs).
pub const CELEBRATION_TICKS: u8 = 30;

/// Which surface currently has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    AddGoal,
}

/// A completion event being played back as an overlay.
///
/// Holding the event here *is* the acknowledgement protocol: the store hands
/// it over by value, the overlay counts down, and dropping it ends the
/// celebration. Nothing can re-fire.
pub struct Celebration {
    pub event: CompletionEvent,
    pub ticks_left: u8,
}

/// Focusable fields of the add-goal form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Category,
    Color,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Category,
            FormField::Category => FormField::Color,
            FormField::Color => FormField::Title,
        }
    }

    pub fn previous(&self) -> FormField {
        match self {
            FormField::Title => FormField::Color,
            FormField::Description => FormField::Title,
            FormField::Category => FormField::Description,
            FormField::Color => FormField::Category,
        }
    }
}

/// State of the add-goal modal form.
pub struct AddForm {
    pub title: String,
    pub description: String,
    pub category_idx: usize,
    pub color_idx: usize,
    pub focus: FormField,
    pub error: Option<String>,
}

impl AddForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category_idx: 0,
            color_idx: 0,
            focus: FormField::Title,
            error: None,
        }
    }

    pub fn category(&self) -> Category {
        Category::ALL[self.category_idx]
    }

    pub fn color(&self) -> ColorTag {
        ColorTag::ALL[self.color_idx]
    }

    pub fn draft(&self) -> GoalDraft {
        GoalDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category(),
            color: self.color(),
        }
    }

    /// Cycle the focused picker field; text fields ignore left/right.
    fn cycle(&mut self, delta: isize) {
        match self.focus {
            FormField::Category => {
                let len = Category::ALL.len() as isize;
                self.category_idx =
                    ((self.category_idx as isize + delta).rem_euclid(len)) as usize;
            }
            FormField::Color => {
                let len = ColorTag::ALL.len() as isize;
                self.color_idx = ((self.color_idx as isize + delta).rem_euclid(len)) as usize;
            }
            FormField::Title | FormField::Description => {}
        }
    }

    fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Category | FormField::Color => {}
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Category | FormField::Color => {}
        }
    }
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state: the store plus everything presentational
/// (selection, modal form, celebration countdown).
pub struct App {
    pub store: GoalStore,
    pub selected: usize,
    pub mode: Mode,
    pub form: AddForm,
    pub celebration: Option<Celebration>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: GoalStore) -> Self {
        Self {
            store,
            selected: 0,
            mode: Mode::Browse,
            form: AddForm::new(),
            celebration: None,
            should_quit: false,
        }
    }

    /// The goal the selection cursor is on, under the active filter.
    pub fn selected_goal(&self) -> Option<&Goal> {
        self.store.visible_goals().get(self.selected).copied()
    }

    fn visible_len(&self) -> usize {
        self.store.visible_goals().len()
    }

    /// Keep the selection inside the visible list after it shrinks
    /// (filter change, or a toggle that moved a goal out of view).
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected >= len - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    /// Toggle the selected goal. An incomplete → complete transition starts
    /// the celebration countdown.
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_goal().map(|g| g.id.clone()) else {
            return;
        };
        if let Some(event) = self.store.toggle(&id) {
            self.celebration = Some(Celebration {
                event,
                ticks_left: CELEBRATION_TICKS,
            });
        }
        self.clamp_selection();
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.store.set_filter(mode);
        self.selected = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.store.filter().next());
    }

    /// Advance time-based state by one poll interval.
    pub fn on_tick(&mut self) {
        if let Some(celebration) = &mut self.celebration {
            celebration.ticks_left = celebration.ticks_left.saturating_sub(1);
            if celebration.ticks_left == 0 {
                self.celebration = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::AddGoal => self.handle_form_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => {
                self.form = AddForm::new();
                self.mode = Mode::AddGoal;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Tab => self.cycle_filter(),
            KeyCode::Char('1') => self.set_filter(FilterMode::All),
            KeyCode::Char('2') => self.set_filter(FilterMode::Active),
            KeyCode::Char('3') => self.set_filter(FilterMode::Completed),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.form = AddForm::new();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form.focus = self.form.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus = self.form.focus.previous(),
            KeyCode::Left => self.form.cycle(-1),
            KeyCode::Right => self.form.cycle(1),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c);
            }
            _ => {}
        }
    }

    /// Submit the form. On rejection the modal stays open with the input
    /// unchanged so the user can fix the title.
    fn submit_form(&mut self) {
        match self.store.add(self.form.draft()) {
            Ok(goal) => {
                tracing::debug!(goal_id = %goal.id, "goal added from form");
                self.form = AddForm::new();
                self.mode = Mode::Browse;
                // The new goal is prepended; put the cursor on it.
                self.selected = 0;
            }
            Err(e) => {
                self.form.error = Some(e.to_string());
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_goal::{GoalId, SequentialIds};

    fn visible_ids(app: &App) -> Vec<GoalId> {
        app.store
            .visible_goals()
            .iter()
            .map(|g| g.id.clone())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_app() -> App {
        App::new(GoalStore::seeded(Box::new(SequentialIds::new())))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = seeded_app();
        assert_eq!(app.selected, 0);

        app.select_previous();
        assert_eq!(app.selected, 2);

        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn space_toggles_selected_goal_and_starts_celebration() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(app.store.progress().completed, 1);
        let celebration = app.celebration.as_ref().expect("celebration started");
        assert_eq!(celebration.event.goal_id, GoalId::from("2"));
        assert_eq!(celebration.ticks_left, CELEBRATION_TICKS);
    }

    #[test]
    fn reopening_does_not_celebrate() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Enter));
        app.celebration = None;

        app.handle_key(key(KeyCode::Enter));
        assert!(app.celebration.is_none());
        assert_eq!(app.store.progress().completed, 0);
    }

    #[test]
    fn celebration_decays_and_clears() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.celebration.is_some());

        for _ in 0..CELEBRATION_TICKS {
            app.on_tick();
        }
        assert!(app.celebration.is_none());
    }

    #[test]
    fn filter_keys_switch_views_and_reset_selection() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Enter)); // complete goal "1"
        app.handle_key(key(KeyCode::Char('3')));

        assert_eq!(app.store.filter(), FilterMode::Completed);
        assert_eq!(app.selected, 0);
        assert_eq!(visible_ids(&app), [GoalId::from("1")]);

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.store.filter(), FilterMode::Active);
        assert_eq!(visible_ids(&app), [GoalId::from("2"), GoalId::from("3")]);
    }

    #[test]
    fn tab_cycles_filter_modes() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.store.filter(), FilterMode::Active);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.store.filter(), FilterMode::Completed);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.store.filter(), FilterMode::All);
    }

    #[test]
    fn toggle_under_active_filter_keeps_selection_in_bounds() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('2'))); // Active filter
        app.select_previous(); // last visible goal
        app.handle_key(key(KeyCode::Char(' '))); // completing removes it from view

        assert_eq!(app.store.progress().completed, 1);
        assert!(app.selected < app.store.visible_goals().len());
    }

    #[test]
    fn add_form_flow_creates_goal_at_front() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::AddGoal);

        type_str(&mut app, "Read 12 books");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "One per month");
        app.handle_key(key(KeyCode::Tab)); // Category
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right)); // Learning
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.selected, 0);
        let goals = app.store.goals();
        assert_eq!(goals.len(), 4);
        assert_eq!(goals[0].title, "Read 12 books");
        assert_eq!(goals[0].category, Category::Learning);
        assert!(!goals[0].completed);
    }

    #[test]
    fn empty_title_keeps_form_open_with_input_unchanged() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "details without a title");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::AddGoal);
        assert_eq!(app.form.description, "details without a title");
        assert!(app.form.error.is_some());
        assert_eq!(app.store.progress().total, 3);
    }

    #[test]
    fn esc_cancels_form_without_adding() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        type_str(&mut app, "Half-typed");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Browse);
        assert!(!app.should_quit);
        assert_eq!(app.store.progress().total, 3);
        // Re-opening starts from a blank form.
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.form.title.is_empty());
    }

    #[test]
    fn form_focus_cycles_through_all_fields() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.form.focus, FormField::Title);

        for expected in [
            FormField::Description,
            FormField::Category,
            FormField::Color,
            FormField::Title,
        ] {
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.form.focus, expected);
        }

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.form.focus, FormField::Color);
    }

    #[test]
    fn picker_fields_wrap_in_both_directions() {
        let mut form = AddForm::new();
        form.focus = FormField::Color;
        form.cycle(-1);
        assert_eq!(form.color(), ColorTag::ALL[ColorTag::ALL.len() - 1]);
        form.cycle(1);
        assert_eq!(form.color(), ColorTag::ALL[0]);
    }

    #[test]
    fn q_quits_from_browse_only() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.form.title, "q");

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
