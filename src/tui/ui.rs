//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::features::session::{Phase, TimedPhase};
use crate::features::timer::{format_duration_mmss, TimerSnapshot, TimerStatus};
use crate::output::theme::{exercise_badge, exercise_rgb, rest_rgb, section_rgb};
use crate::tui::app::App;
use crate::workout::{Exercise, RepsExercise};

const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn mmss(seconds: u32) -> String {
    format_duration_mmss(chrono::Duration::seconds(i64::from(seconds)))
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, progress, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Workout progress
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);

    match app.runner.session().phase() {
        Phase::Idle => render_ready(frame, app, chunks[2]),
        Phase::Exercising => render_exercise(frame, app, chunks[2]),
        Phase::Resting => render_rest(frame, app, chunks[2]),
        Phase::Completed => render_completed(frame, app, chunks[2]),
    }

    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.runner.session();
    let section_color = rgb(section_rgb(session.state().section_index));

    let mut spans = vec![Span::styled(
        format!(" {} ", session.workout().name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    let section = session.current_section_name();
    if !section.is_empty() && session.phase() != Phase::Idle {
        spans.push(Span::raw("· "));
        spans.push(Span::styled(
            section.to_string(),
            Style::default().fg(section_color),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render overall workout progress.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.runner.session().progress();
    let label = format!(
        "{}/{} exercises",
        progress.completed_exercises, progress.total_exercises
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.fraction().clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

/// Split a body area into text on top and a countdown gauge below.
fn body_with_gauge(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render a countdown gauge.
fn render_countdown(frame: &mut Frame<'_>, timer: &TimerSnapshot, color: Color, area: Rect) {
    let mut label = mmss(timer.time_remaining);
    match timer.status {
        TimerStatus::Paused => label.push_str("  (paused)"),
        TimerStatus::Finished => label.push_str("  (done)"),
        TimerStatus::Idle | TimerStatus::Running => {}
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(timer.progress.clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

/// Lines describing the work for one set.
fn work_lines(exercise: &Exercise) -> Vec<Line<'static>> {
    match exercise {
        Exercise::Timer(timed) => vec![Line::from(format!(
            "Hold for {}",
            mmss(timed.duration.resolve())
        ))],
        Exercise::Reps(RepsExercise { reps, .. }) => vec![
            Line::from(Span::styled(
                format!("{reps} reps"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press space when the set is done",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    }
}

/// Render the screen shown before starting.
fn render_ready(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.runner.session();
    let workout = session.workout();

    let mut lines = vec![
        Line::from(Span::styled(
            workout.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(description) = &workout.description {
        lines.push(Line::from(description.clone()));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(format!(
        "{} sections · {} exercises",
        workout.sections.len(),
        session.total_exercises()
    )));
    if let Some(first) = session.current_exercise() {
        lines.push(Line::from(format!("First up: {}", first.name())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press space to start",
        Style::default().fg(Color::Green),
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

/// Render the current set.
fn render_exercise(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.runner.session();
    let Some(exercise) = session.current_exercise() else {
        return;
    };
    let accent = rgb(exercise_rgb(exercise));
    let state = session.state();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", exercise_badge(exercise)),
                Style::default().fg(accent),
            ),
            Span::styled(
                exercise.name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Set {} of {}", state.current_set, exercise.sets())),
        Line::from(""),
    ];
    lines.extend(work_lines(exercise));

    let info = exercise.info();
    if let Some(description) = &info.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }
    if app.show_tips {
        if let Some(tip) = &info.tip {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Tip: ", Style::default().fg(Color::Yellow)),
                Span::raw(tip.clone()),
            ]));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    match (app.runner.timer(), app.runner.timed_phase()) {
        (Some(timer), Some(TimedPhase::Work)) => {
            let (text_area, gauge_area) = body_with_gauge(area);
            let body = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, text_area);
            render_countdown(frame, &timer, accent, gauge_area);
        }
        _ => {
            let body = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, area);
        }
    }
}

/// Render a rest interval.
fn render_rest(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.runner.session();
    let accent = rgb(rest_rgb());

    let mut lines = vec![
        Line::from(Span::styled(
            "Rest",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(next) = session.current_exercise() {
        lines.push(Line::from(format!(
            "Up next: {} (set {} of {})",
            next.name(),
            session.state().current_set,
            next.sets()
        )));
        lines.push(Line::from(Span::styled(
            next.target_label(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press s to skip",
        Style::default().fg(Color::DarkGray),
    )));

    let (text_area, gauge_area) = body_with_gauge(area);
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(body, text_area);

    if let Some(timer) = app.runner.timer() {
        render_countdown(frame, &timer, accent, gauge_area);
    }
}

/// Render the completion screen.
fn render_completed(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.runner.session();

    let mut lines = vec![
        Line::from(Span::styled(
            "Workout complete!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} exercises finished",
            session.completed_exercises()
        )),
    ];
    if let Some(elapsed) = app.runner.elapsed() {
        let seconds = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
        lines.push(Line::from(format!("Time: {}", mmss(seconds))));
    }
    if let Some(last) = session.current_exercise() {
        lines.push(Line::from(Span::styled(
            format!("Last exercise: {}", last.name()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "r to go again · q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/done | s:skip rest | p:pause | r:restart | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
