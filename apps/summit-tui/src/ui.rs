// ui.rs — ratatui rendering for the goal board.
//
// Pure view code: reads App state, draws widgets, mutates nothing.
// Layout: header, progress gauge, filter tabs, goal list, status bar,
// with the add-goal form and the celebration as centered overlays.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use summit_goal::{ColorTag, FilterMode, Goal};

use crate::app::{App, FormField, Mode};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress gauge
            Constraint::Length(3), // Filter tabs
            Constraint::Min(0),    // Goal list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_progress(frame, chunks[1], app);
    render_filter_tabs(frame, chunks[2], app);
    render_goal_list(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.mode == Mode::AddGoal {
        render_add_form(frame, app);
    }

    if let Some(celebration) = &app.celebration {
        render_celebration(frame, &celebration.event.title);
    }
}

/// Terminal color for a goal's palette tag.
fn palette_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Sunset => Color::LightRed,
        ColorTag::Ocean => Color::Cyan,
        ColorTag::Ember => Color::Yellow,
        ColorTag::Meadow => Color::Green,
        ColorTag::Blossom => Color::LightMagenta,
        ColorTag::Twilight => Color::Magenta,
        ColorTag::Sky => Color::Blue,
        ColorTag::Lime => Color::LightGreen,
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("🏆 ", Style::default().fg(Color::Yellow)),
        Span::styled(
            "Summit",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " · make this year your best year yet",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.store.progress();
    let label = format!(
        "{} / {} · {:.0}% complete",
        progress.completed, progress.total, progress.percent
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Your Progress"))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(progress.percent / 100.0)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let modes = [FilterMode::All, FilterMode::Active, FilterMode::Completed];
    let selected = modes
        .iter()
        .position(|m| *m == app.store.filter())
        .unwrap_or(0);

    let titles: Vec<Line> = ["All [1]", "Active [2]", "Completed [3]"]
        .iter()
        .map(|t| Line::from(*t))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("View"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn goal_row(goal: &Goal) -> ListItem<'_> {
    let checkbox = if goal.completed { "[x] " } else { "[ ] " };
    let title_style = if goal.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(Line::from(vec![
        Span::styled("▌ ", Style::default().fg(palette_color(goal.color))),
        Span::raw(checkbox),
        Span::styled(goal.title.clone(), title_style),
        Span::styled(
            format!("  · {}", goal.category),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn render_goal_list(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.store.visible_goals();

    if visible.is_empty() {
        let hint = match app.store.filter() {
            FilterMode::Completed => "Nothing completed yet — go finish something!",
            _ => "No goals here. Press 'a' to add one.",
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Goals"));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|g| goal_row(g)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Goals"))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(Some(app.selected.min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.mode {
        Mode::Browse => "j/k move · space toggle · a add goal · tab/1/2/3 filter · q quit",
        Mode::AddGoal => "tab next field · ←/→ pick · enter save · esc cancel",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

fn render_add_form(frame: &mut Frame, app: &App) {
    let area = centered_rect(56, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add New Goal ")
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Description
            Constraint::Length(3), // Category
            Constraint::Length(3), // Color
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let form = &app.form;
    render_form_field(frame, inner[0], "Goal Title", &form.title, form.focus == FormField::Title);
    render_form_field(
        frame,
        inner[1],
        "Description",
        &form.description,
        form.focus == FormField::Description,
    );
    render_form_picker(
        frame,
        inner[2],
        "Category",
        &form.category().to_string(),
        form.focus == FormField::Category,
        Color::White,
    );
    render_form_picker(
        frame,
        inner[3],
        "Color",
        &form.color().to_string(),
        form.focus == FormField::Color,
        palette_color(form.color()),
    );

    if let Some(error) = &form.error {
        let line = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(line, inner[4]);
    }
}

fn render_form_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    // A trailing block cursor marks the insertion point on the focused field.
    let text = if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn render_form_picker(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    value_color: Color,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(value_color)),
        Span::styled(" ›", Style::default().fg(Color::DarkGray)),
    ]);
    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn render_celebration(frame: &mut Frame, title: &str) {
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "✨ 🏆 ✨",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Goal completed!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(title.to_string(), Style::default().fg(Color::White))),
    ];
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(banner, area);
}

/// A rect of at most `width` x `height` cells, centered in `base`.
fn centered_rect(width: u16, height: u16, base: Rect) -> Rect {
    let width = width.min(base.width);
    let height = height.min(base.height);
    Rect {
        x: base.x + (base.width - width) / 2,
        y: base.y + (base.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let base = Rect::new(0, 0, 100, 40);
        let r = centered_rect(56, 16, base);
        assert_eq!(r.width, 56);
        assert_eq!(r.height, 16);
        assert_eq!(r.x, 22);
        assert_eq!(r.y, 12);

        // Never larger than the terminal.
        let tiny = Rect::new(0, 0, 20, 6);
        let r = centered_rect(56, 16, tiny);
        assert!(r.width <= tiny.width && r.height <= tiny.height);
    }

    #[test]
    fn every_palette_tag_has_a_distinct_color() {
        let colors: std::collections::HashSet<_> =
            ColorTag::ALL.iter().map(|t| palette_color(*t)).collect();
        assert_eq!(colors.len(), ColorTag::ALL.len());
    }
}
