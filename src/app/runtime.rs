use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use crate::{
    domain::{User, UserField},
    form::{FormEvent, form_event},
    presentation::{self, UiContext, table_rows},
    remote::UserRemote,
};

use super::{
    controller::Controller,
    input::{Focus, KeyCommand, classify, classify_mouse},
    options::UiOptions,
    pagination::{ScrollStep, TableCursor},
    request::{Outcome, Request},
    status::StatusLine,
    terminal::TerminalSession,
};

const TABLE_HELP: &str =
    "↑/↓ PgUp/PgDn scroll • e/Enter edit • d/Del delete • Tab form • Ctrl+Q quit";
const FORM_HELP: &str = concat!(
    "Tab/↓ next field • Shift+Tab/↑ previous • ",
    "Enter/Ctrl+S save • Esc table • Ctrl+Q quit"
);

pub(crate) struct App {
    controller: Controller,
    options: UiOptions,
    title: String,
    status: StatusLine,
    focus: Focus,
    field: UserField,
    table: TableCursor,
    should_quit: bool,
}

impl App {
    pub fn new(controller: Controller, title: String, options: UiOptions) -> Self {
        Self {
            controller,
            options,
            title,
            status: StatusLine::new(),
            focus: Focus::Table,
            field: UserField::FirstName,
            table: TableCursor::default(),
            should_quit: false,
        }
    }

    /// Drive the screen until the user quits. The scroll subscription is
    /// cancelled on every way out, errors included.
    pub async fn run(&mut self) -> Result<()> {
        let result = self.event_loop().await;
        self.finish(result)
    }

    async fn event_loop(&mut self) -> Result<()> {
        let mut terminal = TerminalSession::enter()?;
        let (outcomes, mut settled) = mpsc::unbounded_channel();
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(self.options.tick_rate);

        if let Some(request) = self.controller.startup() {
            self.dispatch(request, &outcomes);
        }

        while !self.should_quit {
            self.table.set_height(table_rows(terminal.viewport()?));
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                Some(outcome) = settled.recv() => self.on_outcome(outcome),
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(request) = self.handle_event(event) {
                            self.dispatch(request, &outcomes);
                        }
                    }
                    Some(Err(err)) => {
                        return Err(err).context("failed to read terminal event");
                    }
                    None => self.should_quit = true,
                },
                _ = tick.tick() => {}
            }
        }

        Ok(())
    }

    fn finish(&mut self, result: Result<()>) -> Result<()> {
        self.controller.teardown();
        if let Err(err) = &result {
            warn!(error = %format!("{err:#}"), "event loop stopped with an error");
        }
        result
    }

    fn dispatch(&self, request: Request, outcomes: &UnboundedSender<Outcome>) {
        debug!(?request, "dispatching remote request");
        let remote: Arc<dyn UserRemote> = self.controller.remote();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let outcome = request.execute(remote.as_ref()).await;
            let _ = outcomes.send(outcome);
        });
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let help = self.options.show_help.then(|| self.help_text());
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                state: self.controller.state(),
                focus: self.focus,
                focused_field: self.field,
                table: self.table,
                status_message: self.status.message(),
                help,
            },
        );
    }

    fn help_text(&self) -> &'static str {
        match self.focus {
            Focus::Form => FORM_HELP,
            Focus::Table => TABLE_HELP,
        }
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        match &outcome {
            Outcome::Saved { result: Ok(_), .. } => self.status.saved(),
            Outcome::Deleted { result: Ok(()), .. } => self.status.deleted(),
            Outcome::Saved { result: Err(_), .. } | Outcome::Deleted { result: Err(_), .. } => {
                self.status.ready()
            }
            Outcome::Fetched { .. } => {}
        }
        self.controller.settle(outcome);
        self.table.clamp(self.controller.state().users().len());
    }

    fn handle_event(&mut self, event: Event) -> Option<Request> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => classify_mouse(&mouse).and_then(|step| self.scroll(step)),
            Event::Resize(_, _) => None,
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match classify(&key, self.focus) {
            KeyCommand::Quit => {
                self.should_quit = true;
                None
            }
            KeyCommand::ToggleFocus => {
                match self.focus {
                    Focus::Form => self.leave_form(),
                    Focus::Table => self.enter_form(self.field),
                }
                None
            }
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::NextField => {
                self.enter_form(self.field.next());
                None
            }
            KeyCommand::PrevField => {
                self.enter_form(self.field.prev());
                None
            }
            KeyCommand::LeaveForm => {
                self.leave_form();
                None
            }
            KeyCommand::Scroll(step) => self.scroll(step),
            KeyCommand::EditSelected => {
                if let Some(user) = self.selected_user().cloned() {
                    self.status.editing(&user);
                    self.controller.edit(user);
                    self.focus = Focus::Form;
                    self.field = UserField::FirstName;
                }
                None
            }
            KeyCommand::DeleteSelected => {
                let user = self.selected_user()?.clone();
                let request = self.controller.delete_user(&user);
                if request.is_some() {
                    self.status.deleting(&user.id_label());
                }
                request
            }
            KeyCommand::Edit(key) => {
                match form_event(self.controller.state().form(), self.field, &key)? {
                    FormEvent::Changed { field, value } => {
                        self.controller.change_field(field, value);
                        None
                    }
                    FormEvent::Submit => self.on_submit(),
                }
            }
            KeyCommand::None => None,
        }
    }

    fn on_submit(&mut self) -> Option<Request> {
        match self.controller.submit() {
            Some(request) => {
                self.status.saving();
                Some(request)
            }
            None => {
                let issues = self.controller.state().validation().len();
                if issues > 0 {
                    self.status.issues_remaining(issues);
                }
                None
            }
        }
    }

    /// Move the cursor. The paginator sees the viewport only when it
    /// scrolled, or on a downward step over content taller than it; cursor
    /// moves inside a table that fits on screen are not scrolls.
    fn scroll(&mut self, step: ScrollStep) -> Option<Request> {
        let len = self.controller.state().users().len();
        let offset = self.table.offset();
        self.table.scroll(step, len);
        let metrics = self.table.metrics(len);
        let downward = matches!(
            step,
            ScrollStep::Down(_) | ScrollStep::PageDown | ScrollStep::Bottom
        );
        let overflows = metrics.content_height > metrics.viewport_height;
        if self.table.offset() != offset || (downward && overflows) {
            self.controller.on_scroll(metrics)
        } else {
            None
        }
    }

    fn enter_form(&mut self, field: UserField) {
        self.focus = Focus::Form;
        self.field = field;
        self.status.composing(field.label());
    }

    fn leave_form(&mut self) {
        self.focus = Focus::Table;
        self.status.ready();
    }

    fn selected_user(&self) -> Option<&User> {
        let index = self.table.selected()?;
        self.controller.state().users().get(index)
    }
}
