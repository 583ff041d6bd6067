use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use toolbox::calculator::Operation;
use toolbox::clipboard::Clipboard;
use toolbox::shell::all_tools;
use toolbox::{
    ActiveTool, Calculator, Category, ColorPicker, Config, Currency, CurrencyConverter,
    MockRateSource, PasswordGenerator, RateRequest, RateResponse, Shell, Side, ToolId,
    UnitConverter, WordCounter,
};

/// Which currency selector the arrow keys move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyField {
    From,
    To,
}

pub struct App {
    pub shell: Shell,
    pub catalog_state: TableState,
    pub unit_side: Side,
    pub currency_field: CurrencyField,
    pub notice: Option<String>,
    pub should_quit: bool,
    tools: Vec<ToolId>,
    rates: MockRateSource,
    runtime: Handle,
    // Each opening of the currency tool is a new epoch; lookups from an older one are dropped
    currency_epoch: u64,
    lookup_tx: mpsc::UnboundedSender<(u64, RateResponse)>,
    lookup_rx: mpsc::UnboundedReceiver<(u64, RateResponse)>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: Config, runtime: Handle, clipboard: Box<dyn Clipboard>) -> Self {
        let mut catalog_state = TableState::default();
        catalog_state.select(Some(0));

        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();

        Self {
            rates: MockRateSource::new(config.currency_delay),
            shell: Shell::new(config),
            catalog_state,
            unit_side: Side::From,
            currency_field: CurrencyField::From,
            notice: None,
            should_quit: false,
            tools: all_tools(),
            runtime,
            currency_epoch: 0,
            lookup_tx,
            lookup_rx,
            clipboard,
        }
    }

    pub fn highlighted_tool(&self) -> Option<ToolId> {
        self.catalog_state.selected().and_then(|i| self.tools.get(i)).copied()
    }

    pub fn next(&mut self) {
        let len = self.tools.len();
        let i = match self.catalog_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.catalog_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.tools.len();
        let i = match self.catalog_state.selected() {
            Some(0) | None => len.saturating_sub(1),
            Some(i) => i - 1,
        };
        self.catalog_state.select(Some(i));
    }

    /// Open the highlighted catalog entry
    pub fn open_highlighted(&mut self) {
        let Some(tool) = self.highlighted_tool() else {
            return;
        };

        if !self.shell.select(tool) {
            return;
        }

        self.unit_side = Side::From;
        self.currency_field = CurrencyField::From;

        // The currency tool converts its default amount as soon as it opens
        if let Some(ActiveTool::CurrencyConverter(converter)) = self.shell.active_mut() {
            self.currency_epoch += 1;
            let request = converter.request();
            self.dispatch(request);
        }
    }

    pub fn back(&mut self) {
        self.shell.back();
    }

    fn dispatch(&self, request: Option<RateRequest>) {
        let Some(request) = request else {
            return;
        };

        let source = self.rates.clone();
        let tx = self.lookup_tx.clone();
        let epoch = self.currency_epoch;
        self.runtime.spawn(async move {
            let response = source.lookup(request).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send((epoch, response));
        });
    }

    /// Apply finished lookups; call once per frame
    pub fn drain_lookups(&mut self) {
        while let Ok((epoch, response)) = self.lookup_rx.try_recv() {
            if epoch != self.currency_epoch {
                continue;
            }
            if let Some(ActiveTool::CurrencyConverter(converter)) = self.shell.active_mut() {
                converter.apply(response);
            }
        }
    }

    fn copy(&mut self, text: &str, label: &str) {
        if text.is_empty() {
            return;
        }
        self.notice = Some(match self.clipboard.copy(text) {
            Ok(()) => format!("Copied! {} copied to clipboard", label),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                e.to_string()
            }
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Any key dismisses the last notice
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.shell.active().is_none() {
            self.handle_catalog_key(key);
            return;
        }

        if key.code == KeyCode::Esc {
            self.back();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(active) = self.shell.active_mut() else {
            return;
        };

        match active {
            ActiveTool::Calculator(calc) => handle_calculator_key(calc, key.code),
            ActiveTool::UnitConverter(converter) => {
                handle_unit_key(converter, &mut self.unit_side, key.code)
            }
            ActiveTool::CurrencyConverter(converter) => {
                converter.dismiss_notice();
                let request = handle_currency_key(converter, &mut self.currency_field, key.code);
                self.dispatch(request);
            }
            ActiveTool::PasswordGenerator(generator) => {
                if let Some(password) = handle_password_key(generator, key.code) {
                    self.copy(&password, "Password");
                }
            }
            ActiveTool::WordCounter(counter) => handle_word_counter_key(counter, key.code, ctrl),
            ActiveTool::ColorPicker(picker) => {
                if let Some((value, label)) = handle_color_key(picker, key.code) {
                    self.copy(&value, label);
                }
            }
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => self.catalog_state.select(Some(0)),
            KeyCode::End => self.catalog_state.select(Some(self.tools.len().saturating_sub(1))),
            KeyCode::Enter => self.open_highlighted(),
            _ => {}
        }
    }
}

// ============================================================================
// PER-TOOL KEY HANDLING
// ============================================================================

fn handle_calculator_key(calc: &mut Calculator, code: KeyCode) {
    match code {
        KeyCode::Char(c @ '0'..='9') => calc.input_digit(c),
        KeyCode::Char('.') => calc.input_decimal(),
        KeyCode::Char('=') | KeyCode::Enter => calc.calculate(),
        KeyCode::Char('c') | KeyCode::Delete => calc.clear(),
        KeyCode::Char(c) => {
            if let Some(op) = Operation::from_char(c) {
                calc.input_operation(op);
            }
        }
        _ => {}
    }
}

fn handle_unit_key(converter: &mut UnitConverter, side: &mut Side, code: KeyCode) {
    match code {
        KeyCode::Tab => {
            *side = match side {
                Side::From => Side::To,
                Side::To => Side::From,
            }
        }
        KeyCode::Right => converter.set_category(converter.category.next()),
        KeyCode::Left => converter.set_category(converter.category.previous()),
        KeyCode::Down => converter.cycle_unit(*side, true),
        KeyCode::Up => converter.cycle_unit(*side, false),
        KeyCode::Char('s') => converter.swap(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' || c == 'e' => {
            let mut value = converter.value(*side).to_string();
            value.push(c);
            converter.set_value(*side, &value);
        }
        KeyCode::Backspace => {
            let mut value = converter.value(*side).to_string();
            value.pop();
            converter.set_value(*side, &value);
        }
        _ => {}
    }
}

fn handle_currency_key(
    converter: &mut CurrencyConverter,
    field: &mut CurrencyField,
    code: KeyCode,
) -> Option<RateRequest> {
    match code {
        KeyCode::Tab => {
            *field = match field {
                CurrencyField::From => CurrencyField::To,
                CurrencyField::To => CurrencyField::From,
            };
            None
        }
        KeyCode::Down | KeyCode::Up => {
            let forward = code == KeyCode::Down;
            match field {
                CurrencyField::From => converter.set_from(converter.from.step(forward)),
                CurrencyField::To => converter.set_to(converter.to.step(forward)),
            }
        }
        KeyCode::Char('s') => converter.swap(),
        KeyCode::Char('r') => converter.request(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            let amount = format!("{}{}", converter.amount, c);
            converter.set_amount(&amount)
        }
        KeyCode::Backspace => {
            let mut amount = converter.amount.clone();
            amount.pop();
            converter.set_amount(&amount)
        }
        _ => None,
    }
}

/// Returns the password when the user asked to copy it
fn handle_password_key(generator: &mut PasswordGenerator, code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Left => generator.shorten(),
        KeyCode::Right => generator.lengthen(),
        KeyCode::Char('u') => generator.toggle_uppercase(),
        KeyCode::Char('l') => generator.toggle_lowercase(),
        KeyCode::Char('n') => generator.toggle_digits(),
        KeyCode::Char('s') => generator.toggle_symbols(),
        KeyCode::Enter | KeyCode::Char('g') => {
            // Failure leaves a notice on the generator; nothing else to do
            let _ = generator.regenerate();
        }
        KeyCode::Char('c') => return Some(generator.password.clone()),
        _ => {}
    }
    None
}

fn handle_word_counter_key(counter: &mut WordCounter, code: KeyCode, ctrl: bool) {
    match code {
        KeyCode::Char('u') if ctrl => counter.uppercase(),
        KeyCode::Char('l') if ctrl => counter.lowercase(),
        KeyCode::Char('t') if ctrl => counter.title_case(),
        KeyCode::Char('x') if ctrl => counter.clear(),
        KeyCode::Char(c) if !ctrl => counter.push(c),
        KeyCode::Enter => counter.push('\n'),
        KeyCode::Tab => counter.push('\t'),
        KeyCode::Backspace => counter.backspace(),
        _ => {}
    }
}

/// Returns (value, label) when the user asked to copy a representation
fn handle_color_key(picker: &mut ColorPicker, code: KeyCode) -> Option<(String, &'static str)> {
    match code {
        KeyCode::Char(c) if c.is_ascii_hexdigit() || c == '#' => picker.push(c),
        KeyCode::Backspace => picker.backspace(),
        KeyCode::Char('x') => return Some((picker.hex_display(), "HEX")),
        KeyCode::Char('r') => return picker.rgb().map(|rgb| (rgb.css(), "RGB")),
        KeyCode::Char('h') => return picker.hsl().map(|hsl| (hsl.css(), "HSL")),
        _ => {}
    }
    None
}

// ============================================================================
// EVENT LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.drain_lookups();
        terminal.draw(|f| ui(f, app))?;

        // Poll so finished currency lookups get drawn without a keypress
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.shell.active() {
        None => render_catalog(f, chunks[1], app),
        Some(ActiveTool::Calculator(calc)) => render_calculator(f, chunks[1], calc),
        Some(ActiveTool::UnitConverter(converter)) => {
            render_unit_converter(f, chunks[1], converter, app.unit_side)
        }
        Some(ActiveTool::CurrencyConverter(converter)) => {
            render_currency_converter(f, chunks[1], converter, app.currency_field)
        }
        Some(ActiveTool::PasswordGenerator(generator)) => {
            render_password_generator(f, chunks[1], generator)
        }
        Some(ActiveTool::WordCounter(counter)) => render_word_counter(f, chunks[1], counter),
        Some(ActiveTool::ColorPicker(picker)) => render_color_picker(f, chunks[1], picker),
    }

    render_status_bar(f, chunks[2], app);
}

fn key_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn label_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn tool_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", title))
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Toolbox",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let Some(tool) = app.shell.selected() {
        spans.push(Span::raw("  ›  "));
        spans.push(Span::styled(
            tool.name(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
    } else {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            "Everyday utilities in one place",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_catalog(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Category", "Tool", "Description", ""].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = toolbox::CATALOG.iter().flat_map(|category| {
        category.tools.iter().enumerate().map(move |(i, tool)| {
            let color = if tool.is_available() {
                Color::White
            } else {
                Color::DarkGray
            };
            let category_cell = if i == 0 { category.title } else { "" };
            let badge = if tool.is_available() { "" } else { "Coming Soon" };

            Row::new(vec![
                Cell::from(category_cell).style(Style::default().fg(Color::Cyan)),
                Cell::from(tool.name()).style(Style::default().fg(color)),
                Cell::from(tool.description()).style(Style::default().fg(color)),
                Cell::from(badge).style(Style::default().fg(Color::DarkGray)),
            ])
            .height(1)
        })
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(22),
            Constraint::Min(30),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(tool_block("Tools"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.catalog_state);
}

fn render_calculator(f: &mut Frame, area: Rect, calc: &Calculator) {
    let pending = calc
        .pending()
        .map(|op| format!("pending {}", op.symbol()))
        .unwrap_or_default();

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:>24}", calc.display),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:>24}", pending), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from("  ┌─────┬─────┬─────┬─────┐"),
        Line::from("  │  C  │     │  ÷  │  ×  │"),
        Line::from("  │  7  │  8  │  9  │  -  │"),
        Line::from("  │  4  │  5  │  6  │  +  │"),
        Line::from("  │  1  │  2  │  3  │  =  │"),
        Line::from("  │     0     │  .  │     │"),
        Line::from("  └───────────┴─────┴─────┘"),
    ];

    f.render_widget(Paragraph::new(content).block(tool_block("Calculator")), area);
}

fn render_unit_converter(f: &mut Frame, area: Rect, converter: &UnitConverter, side: Side) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let selected = Category::ALL
        .iter()
        .position(|c| *c == converter.category)
        .unwrap_or(0);
    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.name()).collect::<Vec<_>>())
        .select(selected)
        .block(tool_block("Convert Between Units"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[0]);

    let unit_name = |key: &str| {
        converter
            .category
            .unit(key)
            .map(|u| u.name)
            .unwrap_or("Select unit")
    };

    let field = |label: &str, unit: &str, value: &str, focused: bool| {
        let marker = if focused { "▶ " } else { "  " };
        vec![
            Line::from(vec![
                Span::styled(marker, focus_style(focused)),
                Span::styled(format!("{:<6}", label), label_style()),
                Span::styled(format!("{:<20}", unit_name(unit)), focus_style(focused)),
            ]),
            Line::from(vec![
                Span::raw("        Value: "),
                Span::styled(
                    if value.is_empty() { "—".to_string() } else { value.to_string() },
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::from(""),
        ]
    };

    let mut content = vec![Line::from("")];
    content.extend(field("From", converter.from_unit, &converter.from_value, side == Side::From));
    content.push(Line::from(Span::styled("        ⇅", Style::default().fg(Color::DarkGray))));
    content.push(Line::from(""));
    content.extend(field("To", converter.to_unit, &converter.to_value, side == Side::To));

    f.render_widget(Paragraph::new(content).block(tool_block("Units")), chunks[1]);
}

fn render_currency_converter(
    f: &mut Frame,
    area: Rect,
    converter: &CurrencyConverter,
    field: CurrencyField,
) {
    let currency_line = |label: &str, currency: Currency, focused: bool| {
        Line::from(vec![
            Span::styled(if focused { "▶ " } else { "  " }, focus_style(focused)),
            Span::styled(format!("{:<6}", label), label_style()),
            Span::styled(
                format!("{} {} - {}", currency.symbol(), currency.code(), currency.name()),
                focus_style(focused),
            ),
        ])
    };

    let converted = if converter.loading {
        Span::styled("…", Style::default().fg(Color::DarkGray))
    } else if converter.converted.is_empty() {
        Span::styled("Converted amount", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(converter.converted.clone(), Style::default().fg(Color::Green))
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Amount ", label_style()),
            Span::raw(converter.amount.clone()),
        ]),
        Line::from(""),
        currency_line("From", converter.from, field == CurrencyField::From),
        currency_line("To", converter.to, field == CurrencyField::To),
        Line::from(""),
        Line::from(vec![Span::styled("  Result ", label_style()), converted]),
        Line::from(""),
    ];

    if let Some(summary) = converter.summary() {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(summary, Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    if let Some(rate_line) = converter.rate_line() {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(rate_line, Style::default().fg(Color::DarkGray)),
        ]));
    }
    if let Some(updated) = converter.last_updated {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("Updated: {}", updated.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if let Some(notice) = &converter.notice {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("  Error: {}", notice),
            Style::default().fg(Color::Red),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Rates are mock values for demonstration purposes.",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(content).block(tool_block("Convert Currencies")), area);
}

fn render_password_generator(f: &mut Frame, area: Rect, generator: &PasswordGenerator) {
    let check = |enabled: bool| if enabled { "[x]" } else { "[ ]" };
    let classes = generator.policy.classes;

    let password = if generator.password.is_empty() {
        Span::styled(
            "Press Enter to create password",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            generator.password.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    let option = |key: &'static str, label: &'static str, enabled: bool| {
        Line::from(vec![
            Span::raw("  "),
            Span::raw(check(enabled)),
            Span::raw(" "),
            Span::styled(key, key_style()),
            Span::raw(" "),
            Span::raw(label),
        ])
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  Generated Password ", label_style()), password]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Length ", label_style()),
            Span::raw(format!("{}", generator.policy.length)),
            Span::styled("  (←/→)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        option("u", "Uppercase Letters (A-Z)", classes.uppercase),
        option("l", "Lowercase Letters (a-z)", classes.lowercase),
        option("n", "Numbers (0-9)", classes.digits),
        option("s", "Symbols (!@#$%^&*)", classes.symbols),
    ];

    if let Some(notice) = &generator.notice {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("  Error: {}", notice),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(content).block(tool_block("Password Generator")), area);
}

fn render_word_counter(f: &mut Frame, area: Rect, counter: &WordCounter) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let text = if counter.text.is_empty() {
        Paragraph::new(Span::styled(
            "Start typing or paste your text here...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(counter.text.as_str())
    };
    f.render_widget(
        text.wrap(Wrap { trim: false }).block(tool_block("Enter Your Text")),
        chunks[0],
    );

    let stats = counter.stats();
    let stat = |label: &str, value: usize| {
        Line::from(vec![
            Span::styled(format!("  {:<22}", label), label_style()),
            Span::styled(format!("{:>8}", value), Style::default().fg(Color::Green)),
        ])
    };

    let content = vec![
        Line::from(""),
        stat("Words", stats.words),
        stat("Characters", stats.characters),
        stat("Characters (no spaces)", stats.characters_no_spaces),
        stat("Sentences", stats.sentences),
        stat("Paragraphs", stats.paragraphs),
        stat("Reading time (min)", stats.reading_time),
    ];
    f.render_widget(Paragraph::new(content).block(tool_block("Statistics")), chunks[1]);
}

fn render_color_picker(f: &mut Frame, area: Rect, picker: &ColorPicker) {
    let rgb = picker.rgb();
    let hsl = picker.hsl();

    let swatch = match rgb {
        Some(rgb) => Span::styled("        ", Style::default().bg(Color::Rgb(rgb.r, rgb.g, rgb.b))),
        None => Span::styled("invalid", Style::default().fg(Color::Red)),
    };

    let value_line = |label: &str, value: Option<String>, key: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<6}", label), label_style()),
            Span::raw(format!("{:<24}", value.unwrap_or_else(|| "—".to_string()))),
            Span::styled(key, key_style()),
            Span::styled(" copy", Style::default().fg(Color::DarkGray)),
        ])
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  Preview ", label_style()), swatch]),
        Line::from(""),
        value_line("HEX", Some(picker.hex_display()), "x"),
        value_line("RGB", rgb.map(|c| c.css()), "r"),
        value_line("HSL", hsl.map(|c| c.css()), "h"),
    ];

    f.render_widget(Paragraph::new(content).block(tool_block("Color Picker")), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!(" {} ", notice),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw(" | "));
    }

    let hints: &[(&str, &str)] = match app.shell.active() {
        None => &[("↑/↓", "Nav"), ("Enter", "Open"), ("q", "Quit")],
        Some(ActiveTool::Calculator(_)) => &[("0-9 . + - * /", "Input"), ("Enter", "="), ("c", "Clear")],
        Some(ActiveTool::UnitConverter(_)) => &[
            ("←/→", "Category"),
            ("↑/↓", "Unit"),
            ("Tab", "Side"),
            ("s", "Swap"),
        ],
        Some(ActiveTool::CurrencyConverter(_)) => &[
            ("↑/↓", "Currency"),
            ("Tab", "From/To"),
            ("s", "Swap"),
            ("r", "Refresh"),
        ],
        Some(ActiveTool::PasswordGenerator(_)) => &[("Enter", "Generate"), ("c", "Copy")],
        Some(ActiveTool::WordCounter(_)) => &[
            ("^U", "UPPER"),
            ("^L", "lower"),
            ("^T", "Title"),
            ("^X", "Clear"),
        ],
        Some(ActiveTool::ColorPicker(_)) => &[("0-9 a-f #", "Edit"), ("x/r/h", "Copy")],
    };

    for (key, label) in hints {
        spans.push(Span::styled(*key, key_style()));
        spans.push(Span::raw(format!(" {} | ", label)));
    }

    if app.shell.active().is_some() {
        spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Back to Tools"));
    }

    let status_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// TESTS
// ============================================================================
