//! Interactive Wishlist Form Example
//!
//! A console rendering surface for the form-sync controller: three input
//! fields, a flash line, and the search-result table, with one key per
//! action. The surface reads the form state after every action and
//! redraws; it never mutates widgets from response data itself.
//!
//! Run: WISHLIST_BASE_URL=http://localhost:8080 cargo run --example form_console

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use tokio::runtime::Runtime;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use wishlist_client::form::{RESULT_HEADER, result_rows};
use wishlist_client::{ClientConfig, FormController};

const HELP: &str =
    " F2 create | F3 update | F4 retrieve | F5 delete | F6 search | F7 count | F8 clear | Esc quit";

const FIELD_TITLES: [&str; 3] = ["Wishlist ID", "Name", "Customer Email"];

enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Search,
    Count,
}

struct App {
    form: FormController,
    inputs: [Input; 3],
    focus: usize,
}

impl App {
    fn new(form: FormController) -> Self {
        Self {
            form,
            inputs: [Input::default(), Input::default(), Input::default()],
            focus: 0,
        }
    }

    fn run(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        rt: &Runtime,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => self.focus = (self.focus + 1) % self.inputs.len(),
                KeyCode::BackTab => self.focus = (self.focus + 2) % self.inputs.len(),
                KeyCode::F(2) => self.action(rt, Action::Create),
                KeyCode::F(3) => self.action(rt, Action::Update),
                KeyCode::F(4) => self.action(rt, Action::Retrieve),
                KeyCode::F(5) => self.action(rt, Action::Delete),
                KeyCode::F(6) => self.action(rt, Action::Search),
                KeyCode::F(7) => self.action(rt, Action::Count),
                KeyCode::F(8) => {
                    self.push_fields();
                    self.form.clear();
                    self.pull_fields();
                }
                _ => {
                    self.inputs[self.focus].handle_event(&Event::Key(key));
                }
            }
        }
    }

    /// Run one controller action: field text in, one request, state back out
    fn action(&mut self, rt: &Runtime, action: Action) {
        self.push_fields();
        rt.block_on(async {
            match action {
                Action::Create => self.form.create().await,
                Action::Update => self.form.update().await,
                Action::Retrieve => self.form.retrieve().await,
                Action::Delete => self.form.delete().await,
                Action::Search => self.form.search().await,
                Action::Count => self.form.count().await,
            }
        });
        self.pull_fields();
    }

    fn push_fields(&mut self) {
        let state = self.form.state_mut();
        state.wishlist_id = self.inputs[0].value().to_string();
        state.name = self.inputs[1].value().to_string();
        state.email = self.inputs[2].value().to_string();
    }

    fn pull_fields(&mut self) {
        let state = self.form.state();
        self.inputs[0] = Input::new(state.wishlist_id.clone());
        self.inputs[1] = Input::new(state.name.clone());
        self.inputs[2] = Input::new(state.email.clone());
    }

    fn draw(&self, frame: &mut Frame) {
        let [help, id_area, name_area, email_area, flash, results] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(HELP).style(Style::default().add_modifier(Modifier::REVERSED)),
            help,
        );

        for (idx, area) in [id_area, name_area, email_area].into_iter().enumerate() {
            self.draw_input(frame, area, idx);
        }

        frame.render_widget(Paragraph::new(self.form.state().flash.as_str()), flash);

        let rows: Vec<Row> = result_rows(&self.form.state().results)
            .into_iter()
            .map(Row::new)
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(46),
                Constraint::Percentage(46),
            ],
        )
        .header(Row::new(RESULT_HEADER.to_vec()).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().borders(Borders::ALL).title("Search Results"));
        frame.render_widget(table, results);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect, idx: usize) {
        let input = &self.inputs[idx];
        let focused = self.focus == idx;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let scroll = input.visual_scroll(inner_width);
        let paragraph = Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(FIELD_TITLES[idx])
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, area);

        if focused {
            let cursor_x = area.x + 1 + input.visual_cursor().saturating_sub(scroll) as u16;
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep the terminal for the form; logs go to stderr for redirection
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::var("WISHLIST_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    let rt = Runtime::new()?;
    let config = ClientConfig::new(base_url);
    let mut app = App::new(FormController::new(config.build_http_client()));

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, &rt);
    ratatui::restore();
    result
}
