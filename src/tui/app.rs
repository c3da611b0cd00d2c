//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which hosts the task list adapter:
//! it owns the caller-side task list, feeds the visible sequence to the
//! adapter, drains the adapter's change notifications into its own table
//! selection state, and routes row activation through the adapter's click
//! listener before opening the per-task options screen.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::adapter::{ListEdit, RefreshStrategy, TaskAdapter};
use crate::fields::{format_category, format_priority};
use crate::task::Task;
use crate::tui::{
    colors::Theme,
    enums::{AppState, InputMode},
    input::InputField,
    task_form::{TaskForm, CATEGORY_FIELD, DESCRIPTION_FIELD, PRIORITY_FIELD, TITLE_FIELD},
    utils::centered_rect,
};

/// Shared slot the adapter's click listener writes into. The app reads it
/// back out after routing a row activation through the adapter.
type ClickSink = Rc<RefCell<Option<(u64, usize)>>>;

/// Main application state for the terminal user interface.
///
/// The app plays the host list widget: the adapter owns the visible row
/// sequence, and every mutation is followed by draining the adapter's edit
/// script into the table selection so it keeps tracking the same item.
pub struct App {
    state: AppState,
    tasks: Vec<Task>,
    adapter: TaskAdapter,
    table_state: TableState,
    task_form: TaskForm,
    input_mode: InputMode,
    status_message: String,
    filter_text: String,
    filter_active: bool,
    editing_row: Option<usize>,
    pending_delete: Option<usize>,
    options_row: Option<usize>,
    options_choice: usize,
    theme: Theme,
    clicked: ClickSink,
}

impl App {
    /// Create a new App seeded with the caller's task list.
    pub fn new(tasks: Vec<Task>) -> Self {
        let clicked: ClickSink = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&clicked);
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_on_task_click(move |task, index| {
            *sink.borrow_mut() = Some((task.id, index));
        });

        let mut app = App {
            state: AppState::TaskList,
            tasks,
            adapter,
            table_state: TableState::default(),
            task_form: TaskForm::new(),
            input_mode: InputMode::None,
            status_message: String::new(),
            filter_text: String::new(),
            filter_active: false,
            editing_row: None,
            pending_delete: None,
            options_row: None,
            options_choice: 0,
            theme: Theme::Dark,
            clicked,
        };
        app.resync();
        if !app.adapter.is_empty() {
            app.table_state.select(Some(0));
        }
        app
    }

    /// The caller-side list narrowed by the current filter text.
    fn filtered(&self) -> Vec<Task> {
        if self.filter_text.is_empty() {
            return self.tasks.clone();
        }
        let needle = self.filter_text.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Hand the current filtered list to the adapter and apply whatever
    /// edit script it computes.
    fn resync(&mut self) {
        let visible = self.filtered();
        self.adapter.set_tasks(Some(visible));
        self.apply_pending_edits();
    }

    /// Drain the adapter's notifications and walk the table selection
    /// through them, so the highlight follows the same item across
    /// inserts, removals and moves.
    fn apply_pending_edits(&mut self) {
        let mut selected = self.table_state.selected();
        for edit in self.adapter.take_edits() {
            selected = shift_selection(selected, &edit);
        }
        let len = self.adapter.len();
        let clamped = match selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(clamped);
    }

    /// Next free task id across the caller-side list.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append the task described by the form.
    fn commit_add(&mut self) {
        let task = self.task_form.build(self.next_id());
        let title = task.title.clone();
        self.tasks.push(task.clone());

        let matches_filter = self.filter_text.is_empty()
            || self.filtered().iter().any(|t| t.id == task.id);
        if matches_filter {
            self.adapter.add_task(task);
            self.apply_pending_edits();
            self.table_state.select(Some(self.adapter.len() - 1));
        }
        self.set_status_message(format!("Added task '{title}'"));
    }

    /// Replace the task behind the row being edited.
    fn commit_edit(&mut self, row: usize) {
        let Some(id) = self.adapter.get(row).map(|t| t.id) else {
            return;
        };
        let updated = self.task_form.build(id);
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }

        let still_visible = self.filter_text.is_empty()
            || self.filtered().iter().any(|t| t.id == id);
        if still_visible {
            self.adapter.update_task_at(row, updated);
            self.apply_pending_edits();
        } else {
            // The edit made the row fall out of the filter.
            self.resync();
        }
        self.set_status_message(format!("Updated task #{id}"));
    }

    /// Delete the task behind the given row.
    fn perform_delete(&mut self, row: usize) {
        if let Some(removed) = self.adapter.remove_task_at(row) {
            self.tasks.retain(|t| t.id != removed.id);
            self.apply_pending_edits();
            self.set_status_message(format!("Deleted task '{}'", removed.title));
        }
    }

    /// Route the selected row through the adapter's click listener, then
    /// open the options screen for whatever the listener reported.
    fn click_selected_row(&mut self) {
        if let Some(row) = self.table_state.selected() {
            self.adapter.click(row);
            if let Some((_id, index)) = self.clicked.borrow_mut().take() {
                self.options_row = Some(index);
                self.options_choice = 0;
                self.state = AppState::TaskOptions;
            }
        }
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Open the add-task form.
    fn open_add_form(&mut self) {
        self.task_form = TaskForm::new();
        self.state = AppState::AddTask;
        self.input_mode = InputMode::Text;
    }

    /// Open the edit form for a row.
    fn open_edit_form(&mut self, row: usize) {
        if let Some(task) = self.adapter.get(row) {
            self.task_form = TaskForm::from_task(task);
            self.editing_row = Some(row);
            self.state = AppState::EditTask;
            self.input_mode = InputMode::Text;
        }
    }

    /// Ask for confirmation before deleting a row.
    fn request_delete(&mut self, row: usize) {
        if self.adapter.get(row).is_some() {
            self.pending_delete = Some(row);
            self.state = AppState::Confirm;
        }
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        if self.filter_active {
            match key {
                KeyCode::Esc => {
                    self.filter_active = false;
                    self.filter_text.clear();
                    self.input_mode = InputMode::None;
                    self.resync();
                }
                KeyCode::Enter => {
                    self.filter_active = false;
                    self.input_mode = InputMode::None;
                    if self.filter_text.is_empty() {
                        self.set_status_message("Filter cleared".to_string());
                    } else {
                        self.set_status_message(format!(
                            "Filter applied: '{}' ({} tasks)",
                            self.filter_text,
                            self.adapter.len()
                        ));
                    }
                }
                KeyCode::Backspace => {
                    if !self.filter_text.is_empty() {
                        self.filter_text.pop();
                        self.resync();
                    }
                }
                KeyCode::Char(c) => {
                    self.filter_text.push(c);
                    self.resync();
                }
                _ => {}
            }
            return Ok(false);
        }

        match key {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                if !self.filter_text.is_empty() {
                    self.filter_text.clear();
                    self.resync();
                } else {
                    return Ok(true);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected > 0 {
                        self.table_state.select(Some(selected - 1));
                    }
                } else if !self.adapter.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected + 1 < self.adapter.len() {
                        self.table_state.select(Some(selected + 1));
                    }
                } else if !self.adapter.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click_selected_row(),
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') => {
                if let Some(row) = self.table_state.selected() {
                    self.open_edit_form(row);
                }
            }
            KeyCode::Char('d') => {
                if let Some(row) = self.table_state.selected() {
                    self.request_delete(row);
                }
            }
            KeyCode::Char('/') => {
                self.filter_active = true;
                self.input_mode = InputMode::Text;
            }
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                self.set_status_message(format!("Theme: {}", self.theme.name()));
            }
            KeyCode::Char('h') | KeyCode::F(1) => self.state = AppState::Help,
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the task options screen (Edit / Delete).
    fn handle_options_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j')
            | KeyCode::Tab => {
                self.options_choice = 1 - self.options_choice;
            }
            KeyCode::Enter => {
                let row = self.options_row.take();
                self.state = AppState::TaskList;
                if let Some(row) = row {
                    if self.options_choice == 0 {
                        self.open_edit_form(row);
                    } else {
                        self.request_delete(row);
                    }
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.options_row = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input while an add or edit form is open.
    fn handle_form_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        editing: bool,
    ) -> io::Result<bool> {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                self.editing_row = None;
                self.state = AppState::TaskList;
                self.input_mode = InputMode::None;
            }
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Enter => {
                if self.task_form.validate() {
                    if editing {
                        if let Some(row) = self.editing_row.take() {
                            self.commit_edit(row);
                        }
                    } else {
                        self.commit_add();
                    }
                    self.state = AppState::TaskList;
                    self.input_mode = InputMode::None;
                }
                // A failed validation keeps the form open; the error is
                // rendered inline.
            }
            KeyCode::Left => {
                if self.task_form.on_text_field() {
                    if let Some(input) = self.task_form.active_input() {
                        input.move_cursor_left();
                    }
                } else {
                    self.task_form.cycle_selector(false);
                }
            }
            KeyCode::Right => {
                if self.task_form.on_text_field() {
                    if let Some(input) = self.task_form.active_input() {
                        input.move_cursor_right();
                    }
                } else {
                    self.task_form.cycle_selector(true);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.task_form.active_input() {
                    input.handle_backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(input) = self.task_form.active_input() {
                    input.handle_delete();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.task_form.active_input() {
                    input.handle_char(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the delete confirmation dialog.
    fn handle_confirm_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(row) = self.pending_delete.take() {
                    self.perform_delete(row);
                }
                self.state = AppState::TaskList;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Any key leaves the help screen.
    fn handle_help_input(&mut self, _key: KeyCode) -> io::Result<bool> {
        self.state = AppState::TaskList;
        Ok(false)
    }

    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.clear_status_message();

                let should_quit = match self.state {
                    AppState::TaskList => self.handle_task_list_input(key.code, key.modifiers)?,
                    AppState::TaskOptions => self.handle_options_input(key.code)?,
                    AppState::AddTask => self.handle_form_input(key.code, key.modifiers, false)?,
                    AppState::EditTask => self.handle_form_input(key.code, key.modifiers, true)?,
                    AppState::Help => self.handle_help_input(key.code)?,
                    AppState::Confirm => self.handle_confirm_input(key.code)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the main task list table: one row per bound task with the
    /// four bound columns.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let header_cells = ["Title", "Description", "Priority", "Category"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(self.theme.accent()).fg(Color::Black))
            .height(1);

        let rows: Vec<Row> = self
            .adapter
            .tasks()
            .iter()
            .map(|task| {
                Row::new(vec![
                    Cell::from(task.title.clone()),
                    Cell::from(task.description.clone()),
                    Cell::from(format_priority(task.priority)),
                    Cell::from(format_category(task.category)),
                ])
                .style(Style::default().fg(self.theme.priority_color(task.priority)))
            })
            .collect();

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Length(10),
            Constraint::Length(10),
        ];

        let title = if self.filter_text.is_empty() {
            format!("Tasks ({}) - Press 'h' for help", self.adapter.len())
        } else {
            format!(
                "Tasks ({}/{}) - filtered by '{}'",
                self.adapter.len(),
                self.tasks.len(),
                self.filter_text
            )
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent()))
                    .title(title),
            )
            .row_highlight_style(
                Style::default()
                    .bg(self.theme.selection_bg())
                    .fg(self.theme.fg())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    /// Render the task options popup (the row-click target): Edit / Delete.
    fn render_options(&mut self, f: &mut Frame, area: Rect) {
        let Some(task) = self.options_row.and_then(|row| self.adapter.get(row)) else {
            return;
        };

        let popup = centered_rect(40, 25, area);
        f.render_widget(Clear, popup);

        let options = ["Edit", "Delete"];
        let mut text = vec![
            Line::from(Span::styled(
                task.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (i, option) in options.iter().enumerate() {
            let style = if i == self.options_choice {
                Style::default()
                    .bg(self.theme.selection_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            text.push(Line::from(Span::styled(format!("  {option}  "), style)));
        }

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent()))
                    .title("Select an option"),
            );
        f.render_widget(paragraph, popup);
    }

    /// Render the add/edit form.
    fn render_form(&mut self, f: &mut Frame, area: Rect, editing: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Priority
                Constraint::Length(3), // Category
                Constraint::Length(2), // Error line
                Constraint::Min(0),
            ])
            .split(area);

        let form_title = if editing { "Edit Task" } else { "Add Task" };
        render_text_field(f, chunks[0], "Title", &self.task_form.title, self.theme);
        render_text_field(f, chunks[1], "Description", &self.task_form.description, self.theme);
        render_selector_field(
            f,
            chunks[2],
            "Priority",
            format_priority(self.task_form.selected_priority()),
            self.task_form.current_field == PRIORITY_FIELD,
            self.theme,
        );
        render_selector_field(
            f,
            chunks[3],
            "Category",
            format_category(self.task_form.selected_category()),
            self.task_form.current_field == CATEGORY_FIELD,
            self.theme,
        );

        if let Some(error) = self.task_form.error {
            let error_line = Paragraph::new(Span::styled(
                error,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(error_line, chunks[4]);
        }

        let hint = Paragraph::new(
            "Tab/Up/Down fields  Left/Right change selectors  Enter save  Esc cancel",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).title(form_title));
        f.render_widget(hint, chunks[5]);

        // Put the terminal cursor into the focused text input.
        if self.input_mode == InputMode::Text && self.task_form.on_text_field() {
            let (chunk, input) = match self.task_form.current_field {
                TITLE_FIELD => (chunks[0], &self.task_form.title),
                DESCRIPTION_FIELD => (chunks[1], &self.task_form.description),
                _ => unreachable!(),
            };
            f.set_cursor_position((chunk.x + 1 + input.cursor as u16, chunk.y + 1));
        }
    }

    /// Render a confirmation dialog for deletions.
    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let title = self
            .pending_delete
            .and_then(|row| self.adapter.get(row))
            .map(|t| t.title.clone())
            .unwrap_or_default();

        let popup = centered_rect(50, 20, area);
        f.render_widget(Clear, popup);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Delete task '{title}'?"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("y/Enter to confirm, n/Esc to cancel"),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(Color::Rgb(114, 0, 0)).fg(Color::White))
                    .title("Confirm Action"),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, popup);
    }

    /// Render the help screen.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(Span::styled(
                "Task List:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Up/Down, j/k   Move selection"),
            Line::from("  Enter/Space    Open options for the selected task"),
            Line::from("  a              Add a task"),
            Line::from("  e              Edit the selected task"),
            Line::from("  d              Delete the selected task (with confirmation)"),
            Line::from("  /              Filter by title/description"),
            Line::from("  t              Toggle dark/light theme"),
            Line::from("  h/F1           Show this help"),
            Line::from("  q/Esc/Ctrl+C   Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Forms:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Tab/Up/Down    Navigate between fields"),
            Line::from("  Left/Right     Change priority/category selectors"),
            Line::from("  Enter          Save task"),
            Line::from("  Esc            Cancel and return"),
            Line::from(""),
            Line::from("Tasks live in memory only; nothing is written to disk."),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// Render the bottom status bar.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else if self.filter_active {
            format!("Search: {} (Esc to clear, Enter to confirm)", self.filter_text)
        } else {
            match self.state {
                AppState::TaskList => {
                    format!("Tasks: {} | Press 'h' for help", self.adapter.len())
                }
                AppState::TaskOptions => "Select an option".to_string(),
                AppState::AddTask => "Add New Task".to_string(),
                AppState::EditTask => "Edit Task".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(self.theme.fg()));
        f.render_widget(status, area);
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::TaskOptions => {
                self.render_task_list(f, chunks[0]);
                self.render_options(f, chunks[0]);
            }
            AppState::AddTask => self.render_form(f, chunks[0], false),
            AppState::EditTask => self.render_form(f, chunks[0], true),
            AppState::Help => self.render_help(f, chunks[0]),
            AppState::Confirm => {
                self.render_task_list(f, chunks[0]);
                self.render_confirm(f, chunks[0]);
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Walk a selection index through one list edit so the highlight keeps
/// pointing at the same item.
fn shift_selection(selected: Option<usize>, edit: &ListEdit) -> Option<usize> {
    let sel = selected?;
    let shifted = match *edit {
        ListEdit::Reset | ListEdit::Changed { .. } => sel,
        ListEdit::Inserted { index } => {
            if sel >= index {
                sel + 1
            } else {
                sel
            }
        }
        ListEdit::Removed { index } => {
            if sel > index {
                sel - 1
            } else {
                sel
            }
        }
        ListEdit::Moved { from, to } => {
            if sel == from {
                to
            } else if from < sel && sel <= to {
                sel - 1
            } else if to <= sel && sel < from {
                sel + 1
            } else {
                sel
            }
        }
    };
    Some(shifted)
}

fn render_text_field(f: &mut Frame, area: Rect, label: &str, input: &InputField, theme: Theme) {
    let style = if input.active {
        Style::default().fg(theme.accent())
    } else {
        Style::default().fg(theme.fg())
    };
    let widget = Paragraph::new(input.value.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(label),
    );
    f.render_widget(widget, area);
}

fn render_selector_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    active: bool,
    theme: Theme,
) {
    let style = if active {
        Style::default().fg(theme.accent())
    } else {
        Style::default().fg(theme.fg())
    };
    let widget = Paragraph::new(format!("< {value} >")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(label),
    );
    f.render_widget(widget, area);
}
