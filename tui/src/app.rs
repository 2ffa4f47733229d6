//! Application state for the terminal front end.
//!
//! # Overview
//! [`App`] is a pure state machine. Key presses go in through
//! [`App::handle_key`] and come out as [`Action`]s; finished store calls are
//! folded back in through [`App::apply`]. Nothing here touches the terminal
//! or the store, which keeps every transition unit-testable.
//!
//! # Design
//! - One modal popup at a time, tracked by [`Mode`].
//! - In-flight calls are tracked per row (`updating` / `deleting`) so a busy
//!   row cannot be toggled, edited, or deleted twice.
//! - Store failures surface verbatim: in the open form when one is up,
//!   otherwise in the dismissable banner. Dispatching a new call clears the
//!   banner first.

use crossterm::event::KeyCode;
use todo_store::{StoreError, Todo, TodoPatch};
use tui::widgets::ListState;

// ---------------------------------------------------------------------------
// Commands and outcomes
// ---------------------------------------------------------------------------

/// A store call the shell should run on behalf of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchAll,
    Create { title: String, description: String },
    Update { id: u64, patch: TodoPatch },
    Delete { id: u64 },
}

/// The result of a finished store call, tagged with enough context to fold
/// it back into the state without re-fetching.
#[derive(Debug)]
pub enum StoreOutcome {
    Fetched(Result<Vec<Todo>, StoreError>),
    Added(Result<Todo, StoreError>),
    Updated { id: u64, result: Result<Todo, StoreError> },
    Removed { id: u64, result: Result<(), StoreError> },
}

/// What the shell should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Dispatch(Command),
}

// ---------------------------------------------------------------------------
// Modal state
// ---------------------------------------------------------------------------

/// Text entry state for the add and edit popups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub description: String,
    pub focus: Field,
    pub error: Option<String>,
}

impl Form {
    pub fn from_todo(todo: &Todo) -> Form {
        Form {
            title: todo.title.clone(),
            description: todo.description.clone(),
            focus: Field::Title,
            error: None,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Title,
    Description,
}

impl Field {
    pub fn toggled(self) -> Field {
        match self {
            Field::Title => Field::Description,
            Field::Description => Field::Title,
        }
    }
}

/// Which popup is open. Exactly one (or none) at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Adding(Form),
    Editing { id: u64, form: Form },
    ConfirmDelete { id: u64 },
}

/// Which slice of the collection the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub todos: Vec<Todo>,
    pub list_state: ListState,
    pub mode: Mode,
    pub filter: Filter,
    pub fetching: bool,
    pub adding: bool,
    pub updating: Vec<u64>,
    pub deleting: Vec<u64>,
    pub banner: Option<String>,
}

impl App {
    pub fn new() -> App {
        App {
            todos: Vec::new(),
            list_state: ListState::default(),
            mode: Mode::Normal,
            filter: Filter::All,
            fetching: false,
            adding: false,
            updating: Vec::new(),
            deleting: Vec::new(),
            banner: None,
        }
    }

    /// Mark the list as loading and hand back the fetch command. Used for
    /// the initial load and for manual refreshes.
    pub fn begin_fetch(&mut self) -> Command {
        self.fetching = true;
        Command::FetchAll
    }

    /// The rows the current filter lets through, newest first.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn is_busy(&self, id: u64) -> bool {
        self.updating.contains(&id) || self.deleting.contains(&id)
    }

    fn selected_todo(&self) -> Option<&Todo> {
        let index = self.list_state.selected()?;
        self.visible().into_iter().nth(index)
    }

    fn selected_id(&self) -> Option<u64> {
        self.selected_todo().map(|t| t.id)
    }

    /// Keep the selection valid after the visible rows changed.
    fn reselect(&mut self) {
        let len = self.visible().len();
        let next = match self.list_state.selected() {
            _ if len == 0 => None,
            None => Some(0),
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
        };
        self.list_state.select(next);
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn dispatch(&mut self, command: Command) -> Action {
        // A fresh call always starts with a clean slate, like clearing the
        // page-level error before each request.
        self.banner = None;
        Action::Dispatch(command)
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match &self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Adding(_) => self.handle_add_key(key),
            Mode::Editing { .. } => self.handle_edit_key(key),
            Mode::ConfirmDelete { id } => {
                let id = *id;
                self.handle_confirm_key(key, id)
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => {
                if self.fetching {
                    return Action::None;
                }
                let command = self.begin_fetch();
                self.dispatch(command)
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Adding(Form::default());
                Action::None
            }
            KeyCode::Char('e') => {
                if let Some(todo) = self.selected_todo() {
                    if !self.is_busy(todo.id) {
                        let (id, form) = (todo.id, Form::from_todo(todo));
                        self.mode = Mode::Editing { id, form };
                    }
                }
                Action::None
            }
            KeyCode::Char(' ') => {
                if let Some(todo) = self.selected_todo() {
                    let (id, completed) = (todo.id, todo.completed);
                    if !self.is_busy(id) {
                        self.updating.push(id);
                        return self.dispatch(Command::Update {
                            id,
                            patch: TodoPatch {
                                completed: Some(!completed),
                                ..TodoPatch::default()
                            },
                        });
                    }
                }
                Action::None
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    if !self.is_busy(id) {
                        self.mode = Mode::ConfirmDelete { id };
                    }
                }
                Action::None
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.reselect();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Esc => {
                self.banner = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_add_key(&mut self, key: KeyCode) -> Action {
        // While the create call runs the popup stays up but only Esc works;
        // the outcome still lands once the call finishes.
        if self.adding {
            if key == KeyCode::Esc {
                self.mode = Mode::Normal;
            }
            return Action::None;
        }
        let form = match &mut self.mode {
            Mode::Adding(form) => form,
            _ => return Action::None,
        };
        match key {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                Action::None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                form.focus = form.focus.toggled();
                Action::None
            }
            KeyCode::Backspace => {
                form.active_field_mut().pop();
                Action::None
            }
            KeyCode::Char(c) => {
                form.active_field_mut().push(c);
                Action::None
            }
            KeyCode::Enter => {
                let title = form.title.trim().to_string();
                if title.is_empty() {
                    form.error = Some("Title is required".to_string());
                    return Action::None;
                }
                form.error = None;
                let description = form.description.trim().to_string();
                self.adding = true;
                self.dispatch(Command::Create { title, description })
            }
            _ => Action::None,
        }
    }

    fn handle_edit_key(&mut self, key: KeyCode) -> Action {
        let id = match &self.mode {
            Mode::Editing { id, .. } => *id,
            _ => return Action::None,
        };
        if self.updating.contains(&id) {
            if key == KeyCode::Esc {
                self.mode = Mode::Normal;
            }
            return Action::None;
        }
        let form = match &mut self.mode {
            Mode::Editing { form, .. } => form,
            _ => return Action::None,
        };
        match key {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                Action::None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                form.focus = form.focus.toggled();
                Action::None
            }
            KeyCode::Backspace => {
                form.active_field_mut().pop();
                Action::None
            }
            KeyCode::Char(c) => {
                form.active_field_mut().push(c);
                Action::None
            }
            KeyCode::Enter => {
                let title = form.title.trim().to_string();
                if title.is_empty() {
                    form.error = Some("Title required".to_string());
                    return Action::None;
                }
                form.error = None;
                let description = form.description.trim().to_string();
                self.updating.push(id);
                self.dispatch(Command::Update {
                    id,
                    patch: TodoPatch {
                        title: Some(title),
                        description: Some(description),
                        ..TodoPatch::default()
                    },
                })
            }
            _ => Action::None,
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode, id: u64) -> Action {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.mode = Mode::Normal;
                self.deleting.push(id);
                self.dispatch(Command::Delete { id })
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Normal;
                Action::None
            }
            _ => Action::None,
        }
    }

    // -----------------------------------------------------------------------
    // Folding outcomes back in
    // -----------------------------------------------------------------------

    pub fn apply(&mut self, outcome: StoreOutcome) {
        match outcome {
            StoreOutcome::Fetched(Ok(todos)) => {
                self.fetching = false;
                self.todos = todos;
                self.reselect();
            }
            StoreOutcome::Fetched(Err(err)) => {
                self.fetching = false;
                self.banner = Some(err.to_string());
            }
            StoreOutcome::Added(Ok(todo)) => {
                self.adding = false;
                self.todos.insert(0, todo);
                if matches!(self.mode, Mode::Adding(_)) {
                    self.mode = Mode::Normal;
                }
                self.reselect();
            }
            StoreOutcome::Added(Err(err)) => {
                self.adding = false;
                if let Mode::Adding(form) = &mut self.mode {
                    form.error = Some(err.to_string());
                } else {
                    self.banner = Some(err.to_string());
                }
            }
            StoreOutcome::Updated { id, result: Ok(todo) } => {
                self.updating.retain(|&u| u != id);
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                    *slot = todo;
                }
                if matches!(&self.mode, Mode::Editing { id: open, .. } if *open == id) {
                    self.mode = Mode::Normal;
                }
                self.reselect();
            }
            StoreOutcome::Updated { id, result: Err(err) } => {
                self.updating.retain(|&u| u != id);
                let message = err.to_string();
                match &mut self.mode {
                    Mode::Editing { id: open, form } if *open == id => {
                        form.error = Some(message);
                    }
                    _ => self.banner = Some(message),
                }
            }
            StoreOutcome::Removed { id, result: Ok(()) } => {
                self.deleting.retain(|&d| d != id);
                self.todos.retain(|t| t.id != id);
                self.reselect();
            }
            StoreOutcome::Removed { id, result: Err(err) } => {
                self.deleting.retain(|&d| d != id);
                self.banner = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use todo_store::Operation;

    fn todo(id: u64, title: &str, completed: bool) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Three rows, newest first, the oldest one already completed.
    fn seeded_app() -> App {
        let mut app = App::new();
        app.apply(StoreOutcome::Fetched(Ok(vec![
            todo(3, "third", false),
            todo(2, "second", false),
            todo(1, "first", true),
        ])));
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn fetch_populates_the_list_and_selects_the_first_row() {
        let mut app = App::new();
        assert_eq!(app.begin_fetch(), Command::FetchAll);
        assert!(app.fetching);

        app.apply(StoreOutcome::Fetched(Ok(vec![todo(1, "only", false)])));
        assert!(!app.fetching);
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn fetch_failure_lands_in_the_banner() {
        let mut app = App::new();
        app.begin_fetch();
        app.apply(StoreOutcome::Fetched(Err(StoreError::Unavailable(
            Operation::List,
        ))));
        assert!(!app.fetching);
        assert_eq!(
            app.banner.as_deref(),
            Some("Network error: failed to fetch todos")
        );
    }

    #[test]
    fn refreshing_clears_the_banner() {
        let mut app = seeded_app();
        app.banner = Some("Network error: failed to fetch todos".to_string());

        let action = app.handle_key(KeyCode::Char('r'));
        assert_eq!(action, Action::Dispatch(Command::FetchAll));
        assert!(app.banner.is_none());
        assert!(app.fetching);

        // A second refresh while one is running does nothing.
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::None);
    }

    #[test]
    fn escape_dismisses_the_banner() {
        let mut app = seeded_app();
        app.banner = Some("Todo not found".to_string());
        app.handle_key(KeyCode::Esc);
        assert!(app.banner.is_none());
    }

    #[test]
    fn add_form_validates_the_title() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('a'));
        assert!(matches!(app.mode, Mode::Adding(_)));

        // Whitespace only is still empty.
        type_text(&mut app, "   ");
        let action = app.handle_key(KeyCode::Enter);
        assert_eq!(action, Action::None);
        match &app.mode {
            Mode::Adding(form) => {
                assert_eq!(form.error.as_deref(), Some("Title is required"));
            }
            other => panic!("expected add form, got {other:?}"),
        }
    }

    #[test]
    fn add_form_submits_trimmed_fields() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "Buy milk ");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "2 liters");

        let action = app.handle_key(KeyCode::Enter);
        assert_eq!(
            action,
            Action::Dispatch(Command::Create {
                title: "Buy milk".to_string(),
                description: "2 liters".to_string(),
            })
        );
        assert!(app.adding);
    }

    #[test]
    fn add_success_prepends_and_closes_the_form() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        app.handle_key(KeyCode::Enter);

        app.apply(StoreOutcome::Added(Ok(todo(4, "Buy milk", false))));
        assert!(!app.adding);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.todos[0].id, 4);
        assert_eq!(app.todos.len(), 4);
    }

    #[test]
    fn add_failure_keeps_the_form_open_with_the_message() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        app.handle_key(KeyCode::Enter);

        app.apply(StoreOutcome::Added(Err(StoreError::Unavailable(
            Operation::Create,
        ))));
        assert!(!app.adding);
        match &app.mode {
            Mode::Adding(form) => {
                assert_eq!(form.title, "Buy milk");
                assert_eq!(
                    form.error.as_deref(),
                    Some("Network error: failed to create todo")
                );
            }
            other => panic!("expected add form, got {other:?}"),
        }
    }

    #[test]
    fn toggle_dispatches_an_update_and_blocks_repeats() {
        let mut app = seeded_app();
        let action = app.handle_key(KeyCode::Char(' '));
        assert_eq!(
            action,
            Action::Dispatch(Command::Update {
                id: 3,
                patch: TodoPatch {
                    completed: Some(true),
                    ..TodoPatch::default()
                },
            })
        );
        assert!(app.is_busy(3));

        // The row is busy until the outcome lands.
        assert_eq!(app.handle_key(KeyCode::Char(' ')), Action::None);
        assert_eq!(app.handle_key(KeyCode::Char('e')), Action::None);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn update_success_replaces_the_record_and_clears_busy() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char(' '));
        app.apply(StoreOutcome::Updated {
            id: 3,
            result: Ok(todo(3, "third", true)),
        });
        assert!(app.todos[0].completed);
        assert!(!app.is_busy(3));
    }

    #[test]
    fn update_failure_sets_the_banner_and_leaves_the_record_alone() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char(' '));
        app.apply(StoreOutcome::Updated {
            id: 3,
            result: Err(StoreError::Unavailable(Operation::Update)),
        });
        assert_eq!(
            app.banner.as_deref(),
            Some("Network error: failed to update todo")
        );
        assert!(!app.todos[0].completed);
        assert!(!app.is_busy(3));
    }

    #[test]
    fn edit_form_submits_a_title_and_description_patch() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('e'));
        assert!(matches!(app.mode, Mode::Editing { id: 3, .. }));

        type_text(&mut app, " act");
        let action = app.handle_key(KeyCode::Enter);
        assert_eq!(
            action,
            Action::Dispatch(Command::Update {
                id: 3,
                patch: TodoPatch {
                    title: Some("third act".to_string()),
                    description: Some(String::new()),
                    completed: None,
                },
            })
        );
        assert!(app.is_busy(3));

        app.apply(StoreOutcome::Updated {
            id: 3,
            result: Ok(todo(3, "third act", false)),
        });
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.todos[0].title, "third act");
    }

    #[test]
    fn empty_edit_title_is_rejected() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('e'));
        for _ in 0..5 {
            app.handle_key(KeyCode::Backspace);
        }
        let action = app.handle_key(KeyCode::Enter);
        assert_eq!(action, Action::None);
        match &app.mode {
            Mode::Editing { form, .. } => {
                assert_eq!(form.error.as_deref(), Some("Title required"));
            }
            other => panic!("expected edit form, got {other:?}"),
        }
    }

    #[test]
    fn edit_failure_shows_the_message_in_the_form() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('e'));
        app.handle_key(KeyCode::Enter);

        app.apply(StoreOutcome::Updated {
            id: 3,
            result: Err(StoreError::Unavailable(Operation::Update)),
        });
        match &app.mode {
            Mode::Editing { form, .. } => {
                assert_eq!(
                    form.error.as_deref(),
                    Some("Network error: failed to update todo")
                );
            }
            other => panic!("expected edit form, got {other:?}"),
        }
        assert!(app.banner.is_none());
        assert!(!app.is_busy(3));
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::ConfirmDelete { id: 3 });

        // Backing out leaves everything untouched.
        assert_eq!(app.handle_key(KeyCode::Char('n')), Action::None);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.is_busy(3));

        app.handle_key(KeyCode::Char('x'));
        let action = app.handle_key(KeyCode::Char('y'));
        assert_eq!(action, Action::Dispatch(Command::Delete { id: 3 }));
        assert!(app.is_busy(3));

        app.apply(StoreOutcome::Removed { id: 3, result: Ok(()) });
        assert_eq!(
            app.todos.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(!app.is_busy(3));
    }

    #[test]
    fn delete_failure_reports_and_keeps_the_record() {
        let mut app = seeded_app();
        app.handle_key(KeyCode::Char('x'));
        app.handle_key(KeyCode::Char('y'));

        app.apply(StoreOutcome::Removed {
            id: 3,
            result: Err(StoreError::NotFound),
        });
        assert_eq!(app.banner.as_deref(), Some("Todo not found"));
        assert_eq!(app.todos.len(), 3);
        assert!(!app.is_busy(3));
    }

    #[test]
    fn filter_cycles_and_narrows_the_list() {
        let mut app = seeded_app();
        assert_eq!(app.visible().len(), 3);

        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::Active);
        assert_eq!(
            app.visible().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![3, 2]
        );

        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::Completed);
        assert_eq!(
            app.visible().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn navigation_wraps_around_the_visible_rows() {
        let mut app = seeded_app();
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(2));
        app.handle_key(KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_key(KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn keys_do_nothing_on_an_empty_list() {
        let mut app = App::new();
        assert_eq!(app.handle_key(KeyCode::Char(' ')), Action::None);
        assert_eq!(app.handle_key(KeyCode::Char('e')), Action::None);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Action::None);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn keys_outside_the_help_line_are_ignored() {
        // 'd' in particular: it must not double as a toggle while the help
        // footer advertises 'x' for delete.
        let mut app = seeded_app();
        assert_eq!(app.handle_key(KeyCode::Char('d')), Action::None);
        assert_eq!(app.handle_key(KeyCode::Char('z')), Action::None);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.is_busy(3));
    }
}
