// Category bar rendering.
// One tab per language, the selected one highlighted.

use ratatui::{prelude::*, widgets::*};

use popular::Category;

/// Draw the category bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, selected: Category, area: Rect) {
    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if *category == selected {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(category.title(), style),
            ])
        })
        .collect();

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" popular ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected.index())
        .highlight_style(Style::default().fg(Color::Red))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
