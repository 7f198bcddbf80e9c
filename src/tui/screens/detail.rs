//! Coin detail screen layout and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::format::{format_change, format_market_cap, format_price};
use crate::models::CoinDetail;
use crate::tui::app::App;
use crate::tui::components::status_bar;

/// Renders the detail screen for one coin id.
pub fn render(frame: &mut Frame, app: &App, id: &str) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Coin header
            Constraint::Min(8),    // Stats, description, chart
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, main_layout[0], app, id);

    if let Some(detail) = &app.detail {
        render_body(frame, main_layout[1], app, detail);
    } else if app.detail_loading {
        render_centered(
            frame,
            main_layout[1],
            format!("{} Loading coin data...", app.spinner()),
            Color::Yellow,
        );
    } else {
        // Fetch failed; the error went to the log, the screen stays calm.
        render_centered(frame, main_layout[1], "No data".to_string(), Color::DarkGray);
    }

    status_bar::render(frame, main_layout[2], app);
}

/// Renders the coin identity header.
fn render_header(frame: &mut Frame, area: Rect, app: &App, id: &str) {
    let line = match &app.detail {
        Some(detail) => {
            let rank = detail
                .market_cap_rank
                .map(|r| format!("#{r}"))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!(" {} ", detail.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("({}) ", detail.symbol.to_uppercase())),
                Span::styled(rank, Style::default().fg(Color::Cyan)),
            ])
        }
        None => Line::from(Span::styled(
            format!(" {id} "),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    };

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

/// Renders stats, description, and the 7-day chart.
fn render_body(frame: &mut Frame, area: Rect, app: &App, detail: &CoinDetail) {
    let body_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(area);

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .split(body_layout[0]);

    render_stats(frame, top_layout[0], detail);
    render_description(frame, top_layout[1], detail);
    render_chart(frame, body_layout[1], app);
}

/// Renders the market figures panel.
fn render_stats(frame: &mut Frame, area: Rect, detail: &CoinDetail) {
    let block = Block::default()
        .title(" Market ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let data = &detail.market_data;

    let price_line = Line::from(vec![
        Span::styled("Price     ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", money(data.price_usd())),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        match data.price_change_percentage_24h {
            Some(pct) => {
                let color = if pct.is_sign_negative() {
                    Color::Red
                } else {
                    Color::Green
                };
                Span::styled(format_change(pct), Style::default().fg(color))
            }
            None => Span::styled("--", Style::default().fg(Color::DarkGray)),
        },
    ]);

    let lines = vec![
        price_line,
        stat_line("MCap      ", scaled(data.market_cap_usd())),
        stat_line("Volume    ", scaled(data.volume_usd())),
        stat_line(
            "24h Range ",
            format!("{} - {}", money(data.low_24h_usd()), money(data.high_24h_usd())),
        ),
        stat_line(
            "Supply    ",
            format!(
                "{} / {}",
                supply(data.circulating_supply),
                supply(data.total_supply)
            ),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the description panel, HTML markup stripped.
fn render_description(frame: &mut Frame, area: Rect, detail: &CoinDetail) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = strip_html(&detail.description.en);
    let text = if text.trim().is_empty() {
        "No description available".to_string()
    } else {
        text
    };

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Renders the 7-day price chart.
fn render_chart(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" 7d Price (USD) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(series) = &app.chart else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading chart...",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    };

    let (Some((min_price, max_price)), Some((t0, t1))) =
        (series.price_range(), series.time_range())
    else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No chart data",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    };

    let points = series.points();

    // Color the line by direction over the window.
    let rising = series
        .prices
        .last()
        .zip(series.prices.first())
        .is_some_and(|(last, first)| last.price() >= first.price());
    let line_color = if rising { Color::Green } else { Color::Red };

    let y_min = min_price.to_f64().unwrap_or_default();
    let y_max = max_price.to_f64().unwrap_or_default();
    // Small headroom so the extremes do not sit on the border.
    let pad = ((y_max - y_min) * 0.05).max(y_max.abs() * 0.001 + f64::EPSILON);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([t0 as f64, t1 as f64])
                .labels(vec![Span::raw("7d ago"), Span::raw("now")]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min - pad, y_max + pad])
                .labels(vec![
                    Span::raw(format_price(min_price)),
                    Span::raw(format_price(max_price)),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Renders a single centered message line.
fn render_centered(frame: &mut Frame, area: Rect, message: String, color: Color) {
    if area.height == 0 {
        return;
    }
    let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(color)))
            .alignment(Alignment::Center),
        centered,
    );
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn money(value: Option<Decimal>) -> String {
    value.map(format_price).unwrap_or_else(|| "--".to_string())
}

fn scaled(value: Option<Decimal>) -> String {
    value
        .map(|v| format!("${}", format_market_cap(v)))
        .unwrap_or_else(|| "--".to_string())
}

fn supply(value: Option<Decimal>) -> String {
    value.map(format_market_cap).unwrap_or_else(|| "--".to_string())
}

/// Drops HTML tags from the API's description text.
fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
