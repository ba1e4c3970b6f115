use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
};
use ratatui::{Frame, Terminal};
use std::collections::BTreeMap;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use ao_core::{AppItem, Category, ItemRepository};
use ao_engine::{generate_suggestions, share_text, suggest_home_screen_layout};
use ao_store::{resolve_library_path, set_config_path, FsLibrary};

const TICK_RATE: Duration = Duration::from_millis(200);
const PLAN_FILE_NAME: &str = "organization-plan.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Browse,
    MyApps,
    Organize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    None,
    Init,
    Filter,
    CategoryPick,
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Up,
    Down,
    First,
    Last,
}

#[derive(Debug)]
struct App {
    tab: Tab,
    focus: Focus,
    items: Vec<AppItem>,
    browse_state: ListState,
    my_apps_state: ListState,
    organize_state: ListState,
    picker_state: ListState,
    browse_category_index: usize,
    input_mode: InputMode,
    input: TextInput,
    filter_input: TextInput,
    active_filter: Option<String>,
    status: Option<String>,
    show_help: bool,
}

#[derive(Debug, Default, Clone)]
struct TextInput {
    content: String,
}

impl TextInput {
    fn from(content: String) -> Self {
        Self { content }
    }

    fn insert(&mut self, c: char) {
        self.content.push(c);
    }

    fn delete_back(&mut self) {
        self.content.pop();
    }

    fn reset(&mut self) {
        self.content.clear();
    }
}

impl App {
    fn new() -> Self {
        let mut browse_state = ListState::default();
        browse_state.select(Some(0));
        let mut my_apps_state = ListState::default();
        my_apps_state.select(Some(0));
        let mut organize_state = ListState::default();
        organize_state.select(Some(0));
        let mut picker_state = ListState::default();
        picker_state.select(Some(0));
        Self {
            tab: Tab::Overview,
            focus: Focus::List,
            items: Vec::new(),
            browse_state,
            my_apps_state,
            organize_state,
            picker_state,
            browse_category_index: 0,
            input_mode: InputMode::None,
            input: TextInput::default(),
            filter_input: TextInput::default(),
            active_filter: None,
            status: None,
            show_help: false,
        }
    }

    /// Category filter tabs shown on the Browse screen: "All" plus the
    /// taxonomy in declaration order.
    fn browse_categories() -> Vec<&'static str> {
        let mut all = vec!["All"];
        all.extend(Category::ALL.iter().map(|category| category.name()));
        all
    }

    fn next_category(&mut self) {
        let count = Self::browse_categories().len();
        self.browse_category_index = (self.browse_category_index + 1) % count;
        self.browse_state.select(Some(0));
    }

    fn prev_category(&mut self) {
        let count = Self::browse_categories().len();
        if self.browse_category_index == 0 {
            self.browse_category_index = count - 1;
        } else {
            self.browse_category_index -= 1;
        }
        self.browse_state.select(Some(0));
    }

    fn filtered_browse(&self) -> Vec<&AppItem> {
        let categories = Self::browse_categories();
        let current = categories
            .get(self.browse_category_index)
            .copied()
            .unwrap_or("All");

        let mut items: Vec<&AppItem> = self
            .items
            .iter()
            .filter(|item| current == "All" || item.default_category == current)
            .filter(|item| match &self.active_filter {
                Some(query) => item.name.to_lowercase().contains(&query.to_lowercase()),
                None => true,
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    fn added_items(&self) -> Vec<&AppItem> {
        let mut items: Vec<&AppItem> =
            self.items.iter().filter(|item| item.is_added).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    fn added_snapshot(&self) -> Vec<AppItem> {
        self.added_items().into_iter().cloned().collect()
    }

    fn next_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Overview => Tab::Browse,
            Tab::Browse => Tab::MyApps,
            Tab::MyApps => Tab::Organize,
            Tab::Organize => Tab::Overview,
        };
        self.focus = Focus::List;
    }

    fn prev_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Overview => Tab::Organize,
            Tab::Browse => Tab::Overview,
            Tab::MyApps => Tab::Browse,
            Tab::Organize => Tab::MyApps,
        };
        self.focus = Focus::List;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Detail,
            Focus::Detail => Focus::List,
        };
    }

    fn select_move(list_state: &mut ListState, len: usize, movement: Move) {
        if len == 0 {
            return;
        }
        let current = list_state.selected().unwrap_or(0);
        let next = match movement {
            Move::Down => {
                if current + 1 >= len {
                    0
                } else {
                    current + 1
                }
            }
            Move::Up => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
            Move::First => 0,
            Move::Last => len - 1,
        };
        list_state.select(Some(next));
    }
}

pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut library = FsLibrary::new(resolve_library_path()?);
    let mut app = App::new();

    if library.exists() {
        load_data(&library, &mut app)?;
    } else {
        app.input_mode = InputMode::Init;
        app.input = TextInput::from(library.path().to_string_lossy().to_string());
    }

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render_app(frame, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut library, &mut app, key)? {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

fn restore_terminal(mut terminal: Terminal<ratatui::backend::CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn load_data(library: &FsLibrary, app: &mut App) -> Result<()> {
    library.seed_if_empty(ao_catalog::catalog())?;
    app.items = library.load_all()?;
    if app.browse_state.selected().is_none() && !app.items.is_empty() {
        app.browse_state.select(Some(0));
    }
    Ok(())
}

fn handle_key(library: &mut FsLibrary, app: &mut App, key: KeyEvent) -> Result<bool> {
    if matches!(app.input_mode, InputMode::Init) {
        return handle_init_input(library, app, key);
    }
    if matches!(app.input_mode, InputMode::Filter) {
        return handle_filter_input(app, key);
    }
    if matches!(app.input_mode, InputMode::CategoryPick) {
        return handle_picker_input(library, app, key);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
        }
        KeyCode::Char('/') => {
            if matches!(app.tab, Tab::Browse | Tab::MyApps) {
                app.input_mode = InputMode::Filter;
                app.filter_input.reset();
                if let Some(current) = &app.active_filter {
                    app.filter_input = TextInput::from(current.clone());
                }
            }
        }
        KeyCode::Esc => {
            app.active_filter = None;
            app.filter_input.reset();
        }
        KeyCode::Right => app.next_tab(),
        KeyCode::Left => app.prev_tab(),
        KeyCode::Char('h') => {
            if app.tab == Tab::Browse {
                app.prev_category();
            } else {
                app.prev_tab();
            }
        }
        KeyCode::Char('l') => {
            if app.tab == Tab::Browse {
                app.next_category();
            } else {
                app.next_tab();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_list_move(app, Move::Down),
        KeyCode::Char('k') | KeyCode::Up => handle_list_move(app, Move::Up),
        KeyCode::Home | KeyCode::Char('g') => handle_list_move(app, Move::First),
        KeyCode::End | KeyCode::Char('G') => handle_list_move(app, Move::Last),
        KeyCode::Char('a') | KeyCode::Char(' ') => {
            if app.tab == Tab::Browse {
                handle_toggle_added(library, app)?;
            }
        }
        KeyCode::Char('x') => {
            if app.tab == Tab::MyApps {
                handle_remove(library, app)?;
            }
        }
        KeyCode::Char('c') => {
            if app.tab == Tab::MyApps && current_my_app_id(app).is_some() {
                app.input_mode = InputMode::CategoryPick;
                app.picker_state.select(Some(0));
            }
        }
        KeyCode::Char('e') => {
            if app.tab == Tab::Organize {
                handle_export(app)?;
            }
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => {
            if app.tab != Tab::Overview {
                app.toggle_focus();
            }
        }
        _ => {}
    }

    Ok(false)
}

fn handle_init_input(library: &mut FsLibrary, app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Enter => {
            let path = std::path::PathBuf::from(app.input.content.trim());
            let created = FsLibrary::new(path.clone());
            created.init()?;
            set_config_path(&path)?;
            *library = created;
            load_data(library, app)?;
            app.input_mode = InputMode::None;
            app.input.reset();
            app.status = Some(format!("Library initialized at {}", path.display()));
        }
        KeyCode::Backspace => app.input.delete_back(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
    Ok(false)
}

fn handle_filter_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::None;
            app.filter_input.reset();
        }
        KeyCode::Enter => {
            let query = app.filter_input.content.trim().to_string();
            app.active_filter = if query.is_empty() { None } else { Some(query) };
            app.input_mode = InputMode::None;
            app.browse_state.select(Some(0));
            app.my_apps_state.select(Some(0));
        }
        KeyCode::Backspace => app.filter_input.delete_back(),
        KeyCode::Char(c) => app.filter_input.insert(c),
        _ => {}
    }
    Ok(false)
}

fn handle_picker_input(library: &mut FsLibrary, app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            App::select_move(&mut app.picker_state, Category::ALL.len(), Move::Down);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::select_move(&mut app.picker_state, Category::ALL.len(), Move::Up);
        }
        KeyCode::Enter => {
            let picked = app
                .picker_state
                .selected()
                .and_then(|index| Category::ALL.get(index).copied());
            if let (Some(category), Some(id)) = (picked, current_my_app_id(app)) {
                library.set_category(id, category)?;
                app.items = library.load_all()?;
                app.status = Some(format!("Moved app to {}", category.name()));
            }
            app.input_mode = InputMode::None;
        }
        _ => {}
    }
    Ok(false)
}

fn handle_list_move(app: &mut App, movement: Move) {
    match app.tab {
        Tab::Browse => {
            let len = app.filtered_browse().len();
            App::select_move(&mut app.browse_state, len, movement);
        }
        Tab::MyApps => {
            let len = app.added_items().len();
            App::select_move(&mut app.my_apps_state, len, movement);
        }
        Tab::Organize => {
            let len = generate_suggestions(&app.added_snapshot()).len();
            App::select_move(&mut app.organize_state, len, movement);
        }
        Tab::Overview => {}
    }
}

fn current_browse_id(app: &App) -> Option<uuid::Uuid> {
    app.browse_state
        .selected()
        .and_then(|index| app.filtered_browse().get(index).map(|item| item.id))
}

fn current_my_app_id(app: &App) -> Option<uuid::Uuid> {
    app.my_apps_state
        .selected()
        .and_then(|index| app.added_items().get(index).map(|item| item.id))
}

fn handle_toggle_added(library: &FsLibrary, app: &mut App) -> Result<()> {
    let Some(id) = current_browse_id(app) else {
        return Ok(());
    };
    let is_added = app
        .items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.is_added)
        .unwrap_or(false);
    let updated = if is_added {
        library.remove_app(id)?
    } else {
        library.add_app(id)?
    };
    app.status = Some(if updated.is_added {
        format!("Added {}", updated.name)
    } else {
        format!("Removed {}", updated.name)
    });
    app.items = library.load_all()?;
    Ok(())
}

fn handle_remove(library: &FsLibrary, app: &mut App) -> Result<()> {
    let Some(id) = current_my_app_id(app) else {
        return Ok(());
    };
    let removed = library.remove_app(id)?;
    app.items = library.load_all()?;
    app.status = Some(format!("Removed {}", removed.name));

    let len = app.added_items().len();
    if let Some(selected) = app.my_apps_state.selected() {
        if selected >= len && len > 0 {
            app.my_apps_state.select(Some(len - 1));
        } else if len == 0 {
            app.my_apps_state.select(None);
        }
    }
    Ok(())
}

fn handle_export(app: &mut App) -> Result<()> {
    let text = share_text(&app.added_snapshot());
    std::fs::write(PLAN_FILE_NAME, text)?;
    app.status = Some(format!("Wrote {PLAN_FILE_NAME}"));
    Ok(())
}

fn category_color(category: Category) -> Color {
    match category.color() {
        "blue" => Color::Blue,
        "orange" | "yellow" => Color::Yellow,
        "purple" | "indigo" => Color::Magenta,
        "red" | "pink" => Color::Red,
        "green" | "mint" => Color::Green,
        "cyan" => Color::Cyan,
        _ => Color::Gray,
    }
}

fn render_app(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(size);

    let titles = vec!["Overview", "Browse", "My Apps", "Organize"]
        .iter()
        .map(|title| Line::from(Span::styled(*title, Style::default())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(match app.tab {
            Tab::Overview => 0,
            Tab::Browse => 1,
            Tab::MyApps => 2,
            Tab::Organize => 3,
        })
        .block(Block::default().borders(Borders::ALL).title("App Organizer"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, chunks[0]);

    match app.tab {
        Tab::Overview => render_overview(frame, chunks[1], app),
        Tab::Browse => render_browse(frame, chunks[1], app),
        Tab::MyApps => render_my_apps(frame, chunks[1], app),
        Tab::Organize => render_organize(frame, chunks[1], app),
    }

    render_guide_bar(frame, chunks[2], app);

    if matches!(app.input_mode, InputMode::Init) {
        render_init_popup(frame, size, &app.input);
    }
    if matches!(app.input_mode, InputMode::Filter) {
        render_filter_popup(frame, size, &app.filter_input);
    }
    if matches!(app.input_mode, InputMode::CategoryPick) {
        render_picker_popup(frame, size, app);
    }
    if app.show_help {
        render_help_popup(frame, size);
    }
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(area);

    let summary_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[0]);

    let added = app.added_snapshot();
    let suggestions = generate_suggestions(&added);
    let folder_count = suggestions.len();
    let avg = added.len() / folder_count.max(1);

    let s1 = Paragraph::new(format!("\n{}", added.len()))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Apps Added"))
        .style(Style::default().fg(Color::Cyan));
    let s2 = Paragraph::new(format!("\n{folder_count}"))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Suggested Folders"))
        .style(Style::default().fg(Color::Yellow));
    let s3 = Paragraph::new(format!("\n{avg}"))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Avg / Folder"))
        .style(Style::default().fg(Color::Green));

    frame.render_widget(s1, summary_chunks[0]);
    frame.render_widget(s2, summary_chunks[1]);
    frame.render_widget(s3, summary_chunks[2]);

    // Center: category breakdown for the collection.
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for item in &added {
        *counts.entry(item.effective_category()).or_insert(0) += 1;
    }
    let mut counts_vec: Vec<(&str, u64)> = counts.into_iter().collect();
    counts_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let bars_data: Vec<(&str, u64)> = counts_vec.iter().take(5).copied().collect();
    let barchart = BarChart::default()
        .block(Block::default().title("Top Categories").borders(Borders::ALL))
        .data(&bars_data)
        .bar_width(12)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    frame.render_widget(barchart, chunks[1]);

    // Bottom: most recent additions.
    let mut recent: Vec<&AppItem> = added.iter().collect();
    recent.sort_by(|a, b| b.date_added.cmp(&a.date_added));
    let recent_items = recent
        .iter()
        .take(5)
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", item.effective_category()),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw(item.name.clone()),
            ]))
        })
        .collect::<Vec<_>>();
    let recent_list = List::new(recent_items)
        .block(Block::default().title("Recently Added").borders(Borders::ALL));
    frame.render_widget(recent_list, chunks[2]);
}

fn render_browse(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let categories = App::browse_categories();
    let category_titles: Vec<Line> =
        categories.iter().map(|name| Line::from(*name)).collect();
    let selected_index = if app.browse_category_index >= categories.len() {
        0
    } else {
        app.browse_category_index
    };
    let category_tabs = Tabs::new(category_titles)
        .select(selected_index)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(category_tabs, chunks[0]);

    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(chunks[1]);

    let items = app
        .filtered_browse()
        .iter()
        .map(|item| {
            let marker = if item.is_added { "[x]" } else { "[ ]" };
            ListItem::new(format!("{marker} {}", item.name))
        })
        .collect::<Vec<_>>();
    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(if let Some(filter) = &app.active_filter {
            format!("Catalog (Filtered: {filter})")
        } else {
            "Catalog".into()
        })
        .border_style(if app.focus == Focus::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, list_chunks[0], &mut app.browse_state.clone());

    let detail = match app
        .browse_state
        .selected()
        .and_then(|index| app.filtered_browse().get(index).copied())
    {
        Some(item) => {
            let mut lines = Vec::new();
            lines.push(Line::from(Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("Bundle: {}", item.bundle_id)));
            lines.push(Line::from(format!("Category: {}", item.default_category)));
            lines.push(Line::from(format!("Icon: {}", item.icon_name)));
            if let Some(added_at) = item.date_added {
                lines.push(Line::from(format!(
                    "Added: {}",
                    added_at.format("%Y-%m-%d %H:%M")
                )));
            }
            lines
        }
        None => vec![Line::from("No app selected")],
    };
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(if app.focus == Focus::Detail {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let paragraph = Paragraph::new(detail)
        .block(detail_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, list_chunks[1]);
}

fn render_my_apps(frame: &mut Frame, area: Rect, app: &App) {
    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(area);

    let items = app
        .added_items()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::raw(item.name.clone()),
                Span::styled(
                    format!("  ({})", item.effective_category()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect::<Vec<_>>();
    let list_block = Block::default()
        .borders(Borders::ALL)
        .title("My Apps")
        .border_style(if app.focus == Focus::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, list_chunks[0], &mut app.my_apps_state.clone());

    let detail = match app
        .my_apps_state
        .selected()
        .and_then(|index| app.added_items().get(index).copied())
    {
        Some(item) => {
            let mut lines = Vec::new();
            lines.push(Line::from(Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "Effective category: {}",
                item.effective_category()
            )));
            lines.push(Line::from(format!(
                "Default category: {}",
                item.default_category
            )));
            if let Some(user_category) = &item.user_category {
                lines.push(Line::from(format!("Your override: {user_category}")));
            }
            if let Some(added_at) = item.date_added {
                lines.push(Line::from(format!(
                    "Added: {}",
                    added_at.format("%Y-%m-%d %H:%M")
                )));
            }
            lines
        }
        None => vec![Line::from("No app selected")],
    };
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .title("Details")
        .border_style(if app.focus == Focus::Detail {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let paragraph = Paragraph::new(detail)
        .block(detail_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, list_chunks[1]);
}

fn render_organize(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)].as_ref())
        .split(area);

    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(chunks[0]);

    let added = app.added_snapshot();
    let suggestions = generate_suggestions(&added);

    let items = suggestions
        .iter()
        .map(|suggestion| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    suggestion.folder_name.clone(),
                    Style::default().fg(category_color(suggestion.category)),
                ),
                Span::raw(format!(" ({} apps)", suggestion.apps.len())),
            ]))
        })
        .collect::<Vec<_>>();
    let list_block = Block::default()
        .borders(Borders::ALL)
        .title("Suggested Folders")
        .border_style(if app.focus == Focus::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, list_chunks[0], &mut app.organize_state.clone());

    let detail = match app
        .organize_state
        .selected()
        .and_then(|index| suggestions.get(index))
    {
        Some(suggestion) => {
            let mut lines = Vec::new();
            lines.push(Line::from(Span::styled(
                suggestion.folder_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if let Some(tip) = suggestion.tip {
                lines.push(Line::from(Span::styled(
                    format!("Tip: {tip}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines.push(Line::from(""));
            for item in &suggestion.apps {
                lines.push(Line::from(format!("  - {}", item.name)));
            }
            lines
        }
        None => vec![Line::from("Add apps to your collection to see suggestions")],
    };
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .title("Folder")
        .border_style(if app.focus == Focus::Detail {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let paragraph = Paragraph::new(detail)
        .block(detail_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, list_chunks[1]);

    let layout = suggest_home_screen_layout(&added);
    let summary = Paragraph::new(layout.summary())
        .block(Block::default().borders(Borders::ALL).title("Home Screen"))
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, chunks[1]);
}

fn render_guide_bar(frame: &mut Frame, area: Rect, app: &App) {
    let guide = match app.tab {
        Tab::Overview => "q quit | \u{2190}\u{2192} tabs | ? help",
        Tab::Browse => "q quit | h/l category | j/k move | a/space toggle | / filter | ? help",
        Tab::MyApps => "q quit | j/k move | x remove | c category | / filter | ? help",
        Tab::Organize => "q quit | j/k move | e export plan | ? help",
    };
    let mut line = vec![Span::raw(guide)];
    if let Some(status) = &app.status {
        line.push(Span::styled(
            format!("  |  {status}"),
            Style::default().fg(Color::Green),
        ));
    }
    let paragraph =
        Paragraph::new(Line::from(line)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_init_popup(frame: &mut Frame, area: Rect, input: &TextInput) {
    let popup = centered_rect(60, 5, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(format!("{}_", input.content))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Initialize library at (Enter to confirm, Esc to quit)"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}

fn render_filter_popup(frame: &mut Frame, area: Rect, input: &TextInput) {
    let popup = centered_rect(40, 3, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(format!("{}_", input.content))
        .block(Block::default().borders(Borders::ALL).title("Filter by name"));
    frame.render_widget(paragraph, popup);
}

fn render_picker_popup(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(34, (Category::ALL.len() + 2) as u16, area);
    frame.render_widget(Clear, popup);
    let items = Category::ALL
        .iter()
        .map(|category| {
            ListItem::new(Span::styled(
                category.name(),
                Style::default().fg(category_color(*category)),
            ))
        })
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Move to category"))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, popup, &mut app.picker_state.clone());
}

fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(56, 14, area);
    frame.render_widget(Clear, popup);
    let text = "Browse: a or space toggles an app in your collection.\n\
                My Apps: x removes, c reassigns the category.\n\
                Organize: suggestions update as your collection changes;\n\
                e exports the share plan to a text file.\n\
                \n\
                h/l switch category or tab, j/k move, / filters,\n\
                Esc clears the filter, q quits.";
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use uuid::Uuid;

    fn item(name: &str, category: &str, added: bool) -> AppItem {
        let mut item = AppItem::new(
            Uuid::new_v4(),
            name,
            format!("com.example.{}", name.to_lowercase()),
            "app.fill",
            category,
        )
        .unwrap();
        if added {
            item.mark_added(chrono::Utc::now());
        }
        item
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render_app(frame, app)).expect("render");
        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer.get(x, y).symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn browse_render_lists_catalog_items() {
        let mut app = App::new();
        app.tab = Tab::Browse;
        app.items = vec![
            item("Spotify", "Music", true),
            item("Netflix", "Entertainment", false),
        ];
        let screen = render_to_string(&app);
        assert!(screen.contains("App Organizer"));
        assert!(screen.contains("[x] Spotify"));
        assert!(screen.contains("[ ] Netflix"));
    }

    #[test]
    fn organize_render_shows_suggestions_and_layout() {
        let mut app = App::new();
        app.tab = Tab::Organize;
        app.items = vec![
            item("Instagram", "Social Media", true),
            item("X", "Social Media", true),
            item("Calculator", "Utilities", true),
        ];
        let screen = render_to_string(&app);
        assert!(screen.contains("Social Media"));
        assert!(screen.contains("(2 apps)"));
        assert!(screen.contains("Suggested Home Screen Layout:"));
    }

    #[test]
    fn category_filter_narrows_the_browse_list() {
        let mut app = App::new();
        app.items = vec![
            item("Spotify", "Music", false),
            item("Netflix", "Entertainment", false),
        ];
        // Index of "Music" among the tabs: "All" is first.
        let index = App::browse_categories()
            .iter()
            .position(|name| *name == "Music")
            .unwrap();
        app.browse_category_index = index;
        let filtered = app.filtered_browse();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Spotify");
    }
}
