// UI module for rendering the TUI.
// Draws a render model: category bar, repository list or loading/error state, status bar.

mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use popular::{CategoryView, RenderModel};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, model: &RenderModel, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Category bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, model.selected, chunks[0]);

    match model.view() {
        CategoryView::Loading => list::render_loading(frame, chunks[1], "Fetching Repos"),
        CategoryView::Errored(error) => list::render_error(frame, chunks[1], error),
        CategoryView::Loaded(repos) => list::render_repos_list(frame, repos, list_state, chunks[1]),
    }

    draw_status_bar(frame, model, chunks[2]);
}

/// Draw the key hints and list summary.
fn draw_status_bar(frame: &mut Frame, model: &RenderModel, area: Rect) {
    let hints = vec![
        Span::raw(" ←→ "),
        Span::styled("Language", Style::default().fg(Color::DarkGray)),
        Span::raw("  1-6 "),
        Span::styled("Jump", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let summary = if model.is_loading {
        Span::styled("loading ", Style::default().fg(Color::Yellow))
    } else {
        let fetched = model
            .fetched_at
            .map(|at| format!("  fetched {}", at.format("%H:%M:%S")))
            .unwrap_or_default();
        Span::styled(
            format!("{} repos{} ", model.item_count(), fetched),
            Style::default().fg(Color::DarkGray),
        )
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(32)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(summary)).alignment(Alignment::Right),
        chunks[1],
    );
}
