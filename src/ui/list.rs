// Repository list rendering.
// Ranked cards with stars, forks, and open issues, plus loading and error states.

use ratatui::{prelude::*, widgets::*};

use popular::RepoRecord;

/// Format a count with thousands separators (e.g., "12,345").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the ranked repository list.
pub fn render_repos_list(
    frame: &mut Frame,
    repos: &[RepoRecord],
    list_state: &mut ListState,
    area: Rect,
) {
    if repos.is_empty() {
        render_empty(frame, area, "No repositories found");
        return;
    }

    let items: Vec<ListItem> = repos
        .iter()
        .enumerate()
        .map(|(index, repo)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("#{:<4}", index + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        repo.owner_login.as_str(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", repo.html_url),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("      "),
                    Span::styled("👤 ", Style::default().fg(Color::LightYellow)),
                    Span::styled(
                        format!("{} ", repo.owner_profile_url()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("      "),
                    Span::styled("★ ", Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{} stars  ", format_count(repo.star_count))),
                    Span::styled("⑂ ", Style::default().fg(Color::LightBlue)),
                    Span::raw(format!("{} forks  ", format_count(repo.fork_count))),
                    Span::styled("⚠ ", Style::default().fg(Color::LightRed)),
                    Span::raw(format!("{} open", format_count(repo.open_issue_count))),
                ]),
            ])
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Repositories "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list_state);
}
