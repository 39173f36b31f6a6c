use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::collector::Collector;
use crate::model::{Participant, Question, SubmissionRecord};
use crate::persist;
use crate::session::{Phase, Session, REVEAL_DELAY_MS};
use crate::submit::{self, Persistence};
use crate::timer::{self, TimerEvent, TimerHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Registration,
    Quiz,
    Submitting,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormFocus {
    Name,
    RollNo,
    MobileNo,
    Email,
    Ok,
    Cancel,
}

#[derive(Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub roll_no: String,
    pub mobile_no: String,
    pub email: String,
    pub focus: FormFocus,
    pub error: Option<String>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            roll_no: String::new(),
            mobile_no: String::new(),
            email: String::new(),
            focus: FormFocus::Name,
            error: None,
        }
    }
}

#[derive(Debug)]
pub enum SubmitEvent {
    Finished(Result<String, String>),
}

pub struct App {
    pub screen: Screen,
    pub title: String,
    pub form: RegistrationForm,
    pub pending_questions: Vec<Question>,
    pub seconds_per_question: u32,
    pub session: Option<Session>,
    pub choice_cursor: usize,
    pub advance_at: Option<Instant>,
    pub record: Option<SubmissionRecord>,
    pub persistence: Option<Persistence>,
    pub collector: Option<Collector>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        title: String,
        questions: Vec<Question>,
        collector: Option<Collector>,
        seconds_per_question: u32,
    ) -> Self {
        Self {
            screen: Screen::Registration,
            title,
            form: RegistrationForm::default(),
            pending_questions: questions,
            seconds_per_question,
            session: None,
            choice_cursor: 0,
            advance_at: None,
            record: None,
            persistence: None,
            collector,
            should_quit: false,
        }
    }
}

pub fn run_tui(
    title: String,
    questions: Vec<Question>,
    collector: Option<Collector>,
    seconds_per_question: u32,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let mut app = App::new(title, questions, collector, seconds_per_question);

    let (timer_tx, timer_rx) = mpsc::channel::<TimerEvent>();
    let (submit_tx, submit_rx) = mpsc::channel::<SubmitEvent>();

    let result = main_loop(
        &mut terminal,
        &mut app,
        &timer_tx,
        &timer_rx,
        &submit_tx,
        &submit_rx,
    );

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    timer_tx: &mpsc::Sender<TimerEvent>,
    timer_rx: &mpsc::Receiver<TimerEvent>,
    submit_tx: &mpsc::Sender<SubmitEvent>,
    submit_rx: &mpsc::Receiver<SubmitEvent>,
) -> Result<(), String> {
    let mut timer_handle: Option<TimerHandle> = None;

    loop {
        terminal
            .draw(|f| crate::ui::draw(f, app))
            .map_err(|e| format!("Draw error: {}", e))?;

        if app.should_quit {
            if let Some(handle) = &timer_handle {
                handle.disarm();
            }
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) => {
                    handle_key(key, app, &mut timer_handle, timer_tx)?;
                }
                _ => {}
            }
        }

        // Handle timer events
        while let Ok(ev) = timer_rx.try_recv() {
            handle_timer(ev, app);
        }

        // Handle submission events
        while let Ok(ev) = submit_rx.try_recv() {
            handle_submit(ev, app);
        }

        maybe_advance(app, &mut timer_handle, timer_tx, submit_tx);
    }

    Ok(())
}

fn handle_key(
    key: KeyEvent,
    app: &mut App,
    timer_handle: &mut Option<TimerHandle>,
    timer_tx: &mpsc::Sender<TimerEvent>,
) -> Result<(), String> {
    match app.screen {
        Screen::Registration => handle_registration_key(key, app, timer_handle, timer_tx),
        Screen::Quiz => handle_quiz_key(key, app, timer_handle),
        Screen::Submitting => Ok(()),
        Screen::Results => {
            if key.code == KeyCode::Enter || key.code == KeyCode::Char('q') {
                app.should_quit = true;
            }
            Ok(())
        }
    }
}

fn handle_registration_key(
    key: KeyEvent,
    app: &mut App,
    timer_handle: &mut Option<TimerHandle>,
    timer_tx: &mpsc::Sender<TimerEvent>,
) -> Result<(), String> {
    if key.code == KeyCode::Esc {
        app.should_quit = true;
        return Ok(());
    }
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = next_focus(app.form.focus);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = prev_focus(app.form.focus);
        }
        KeyCode::Enter => match app.form.focus {
            FormFocus::Ok => return start_session(app, timer_handle, timer_tx),
            FormFocus::Cancel => app.should_quit = true,
            _ => app.form.focus = next_focus(app.form.focus),
        },
        KeyCode::Backspace => {
            if let Some(field) = focused_field(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = focused_field(app) {
                field.push(c);
            }
        }
        _ => {}
    }

    Ok(())
}

fn focused_field(app: &mut App) -> Option<&mut String> {
    match app.form.focus {
        FormFocus::Name => Some(&mut app.form.name),
        FormFocus::RollNo => Some(&mut app.form.roll_no),
        FormFocus::MobileNo => Some(&mut app.form.mobile_no),
        FormFocus::Email => Some(&mut app.form.email),
        FormFocus::Ok | FormFocus::Cancel => None,
    }
}

fn next_focus(focus: FormFocus) -> FormFocus {
    match focus {
        FormFocus::Name => FormFocus::RollNo,
        FormFocus::RollNo => FormFocus::MobileNo,
        FormFocus::MobileNo => FormFocus::Email,
        FormFocus::Email => FormFocus::Ok,
        FormFocus::Ok => FormFocus::Cancel,
        FormFocus::Cancel => FormFocus::Name,
    }
}

fn prev_focus(focus: FormFocus) -> FormFocus {
    match focus {
        FormFocus::Name => FormFocus::Cancel,
        FormFocus::RollNo => FormFocus::Name,
        FormFocus::MobileNo => FormFocus::RollNo,
        FormFocus::Email => FormFocus::MobileNo,
        FormFocus::Ok => FormFocus::Email,
        FormFocus::Cancel => FormFocus::Ok,
    }
}

/// Registration complete: validate identity, build the session, arm the
/// first countdown.
fn start_session(
    app: &mut App,
    timer_handle: &mut Option<TimerHandle>,
    timer_tx: &mpsc::Sender<TimerEvent>,
) -> Result<(), String> {
    let participant = Participant {
        name: app.form.name.trim().to_string(),
        roll_no: app.form.roll_no.trim().to_uppercase(),
        mobile_no: app.form.mobile_no.trim().to_string(),
        email: app.form.email.trim().to_string(),
    };

    if let Err(msg) = participant.validate() {
        app.form.error = Some(msg);
        return Ok(());
    }

    let questions = std::mem::take(&mut app.pending_questions);
    let session = Session::new(participant, questions, app.seconds_per_question)?;

    *timer_handle = Some(timer::arm(timer_tx.clone(), 0, app.seconds_per_question));
    app.session = Some(session);
    app.choice_cursor = 0;
    app.screen = Screen::Quiz;

    Ok(())
}

fn handle_quiz_key(
    key: KeyEvent,
    app: &mut App,
    timer_handle: &mut Option<TimerHandle>,
) -> Result<(), String> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Abandoning the session discards in-memory state; nothing to clean up.
        app.should_quit = true;
        return Ok(());
    }

    let (answered, option_count) = match app.session.as_ref() {
        Some(session) => (
            session.is_answered(),
            session
                .current_question()
                .map(|q| q.options.len())
                .unwrap_or(0),
        ),
        None => return Ok(()),
    };

    match key.code {
        KeyCode::Up if !answered => {
            app.choice_cursor = app.choice_cursor.saturating_sub(1);
        }
        KeyCode::Down if !answered => {
            if app.choice_cursor + 1 < option_count {
                app.choice_cursor += 1;
            }
        }
        KeyCode::Enter => {
            select(app, timer_handle, None);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as u8 - b'1') as usize;
            select(app, timer_handle, Some(idx));
        }
        _ => {}
    }

    Ok(())
}

/// Record a selection for the current position. First answer wins; a locked
/// position swallows the input.
fn select(app: &mut App, timer_handle: &mut Option<TimerHandle>, idx: Option<usize>) {
    let Some(session) = app.session.as_mut() else {
        return;
    };

    let idx = idx.unwrap_or(app.choice_cursor);
    if session.select_option(idx) {
        app.choice_cursor = idx;
        if let Some(handle) = timer_handle {
            handle.disarm();
        }
        app.advance_at = Some(Instant::now() + Duration::from_millis(REVEAL_DELAY_MS));
    }
}

fn handle_timer(ev: TimerEvent, app: &mut App) {
    let Some(session) = app.session.as_mut() else {
        return;
    };

    match ev {
        TimerEvent::Tick { position, remaining } if position == session.position() => {
            session.tick(remaining);
        }
        TimerEvent::Expired { position } if position == session.position() => {
            if session.expire_current() {
                app.advance_at = Some(Instant::now() + Duration::from_millis(REVEAL_DELAY_MS));
            }
        }
        // Stale event from a position already left
        _ => {}
    }
}

/// Reveal delay elapsed: move to the next position, or complete the session
/// and hand the record off.
fn maybe_advance(
    app: &mut App,
    timer_handle: &mut Option<TimerHandle>,
    timer_tx: &mpsc::Sender<TimerEvent>,
    submit_tx: &mpsc::Sender<SubmitEvent>,
) {
    let due = app
        .advance_at
        .map(|at| Instant::now() >= at)
        .unwrap_or(false);
    if !due {
        return;
    }
    app.advance_at = None;

    let (phase, position, seconds) = {
        let Some(session) = app.session.as_mut() else {
            return;
        };
        session.advance();
        (
            session.phase(),
            session.position(),
            session.seconds_per_question(),
        )
    };

    match phase {
        Phase::InProgress => {
            app.choice_cursor = 0;
            *timer_handle = Some(timer::arm(timer_tx.clone(), position, seconds));
        }
        Phase::Completed => begin_submission(app, submit_tx),
    }
}

fn begin_submission(app: &mut App, submit_tx: &mpsc::Sender<SubmitEvent>) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let record = submit::build_record(session);
    app.record = Some(record.clone());

    match app.collector.clone() {
        Some(collector) => {
            app.screen = Screen::Submitting;
            let tx = submit_tx.clone();
            thread::spawn(move || {
                let _ = tx.send(SubmitEvent::Finished(collector.submit(&record)));
            });
        }
        None => {
            let persistence = submit::resolve_persistence(
                &record,
                Err("no collector configured".to_string()),
                &persist::results_dir(),
            );
            app.persistence = Some(persistence);
            app.screen = Screen::Results;
        }
    }
}

fn handle_submit(ev: SubmitEvent, app: &mut App) {
    let SubmitEvent::Finished(result) = ev;
    let Some(record) = app.record.as_ref() else {
        return;
    };

    let persistence = submit::resolve_persistence(record, result, &persist::results_dir());
    app.persistence = Some(persistence);
    app.screen = Screen::Results;
}
