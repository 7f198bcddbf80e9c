//! Market screen layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use rust_decimal::Decimal;

use crate::format::{format_change, format_market_cap, format_price};
use crate::models::CoinSummary;
use crate::tui::app::App;
use crate::tui::components::{controls, header, status_bar};
use crate::view::ViewMode;

/// Outer card size in grid mode, borders included.
const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 6;

/// Renders the market screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title + search
            Constraint::Length(1), // Sort/view controls
            Constraint::Min(5),    // Coin grid or table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    header::render(frame, main_layout[0], app);
    controls::render(frame, main_layout[1], app);

    if app.is_loading {
        render_loading(frame, main_layout[2], app);
    } else if app.derived.is_empty() {
        render_empty(frame, main_layout[2], app);
    } else {
        match app.view_mode {
            ViewMode::Grid => render_grid(frame, main_layout[2], app),
            ViewMode::List => render_list(frame, main_layout[2], app),
        }
    }

    status_bar::render(frame, main_layout[3], app);
}

/// Renders the centered loading indicator.
fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let line = Line::from(Span::styled(
        format!("{} Loading crypto data...", app.spinner()),
        Style::default().fg(Color::Yellow),
    ));
    let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        centered,
    );
}

/// Renders the empty state, shown both after a failed fetch and when the
/// search matches nothing.
fn render_empty(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let message = if app.search.is_empty() {
        "No market data"
    } else {
        "No coins match the search"
    };
    let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .alignment(ratatui::layout::Alignment::Center),
        centered,
    );
}

/// Renders coins as cards in a multi-column grid, scrolled so the
/// selected card stays visible.
fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let cols = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = app.derived.len().div_ceil(cols);

    let selected_row = app.selected / cols;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));
    let last_row = (first_row + visible_rows).min(total_rows);

    for row in first_row..last_row {
        for col in 0..cols {
            let index = row * cols + col;
            let Some(coin) = app.derived.get(index) else {
                break;
            };

            let y_offset = ((row - first_row) as u16) * CARD_HEIGHT;
            let card_area = Rect::new(
                area.x + (col as u16) * CARD_WIDTH,
                area.y + y_offset,
                CARD_WIDTH.min(area.width.saturating_sub((col as u16) * CARD_WIDTH)),
                CARD_HEIGHT.min(area.height.saturating_sub(y_offset)),
            );
            if card_area.height == 0 {
                continue;
            }
            render_card(frame, card_area, coin, index == app.selected);
        }
    }
}

/// Renders a single coin card.
fn render_card(frame: &mut Frame, area: Rect, coin: &CoinSummary, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", coin.symbol.to_uppercase()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rank = coin
        .market_cap_rank
        .map(|r| format!("#{r}"))
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            coin.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", format_price(coin.current_price)),
                Style::default().fg(Color::White),
            ),
            change_span(coin.price_change_percentage_24h),
        ]),
        Line::from(vec![
            Span::styled("MCap ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("${} ", format_market_cap(coin.market_cap))),
            Span::styled("Vol ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("${}", format_market_cap(coin.total_volume))),
        ]),
        Line::from(Span::styled(rank, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders coins as a table, one row per coin.
fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        "#", "Name", "Symbol", "Price", "24h", "Market Cap", "Volume",
    ])
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.derived.iter().map(|coin| {
        let rank = coin
            .market_cap_rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());

        Row::new(vec![
            Cell::from(rank),
            Cell::from(coin.name.clone()),
            Cell::from(coin.symbol.to_uppercase()),
            Cell::from(format_price(coin.current_price)),
            Cell::from(Line::from(change_span(coin.price_change_percentage_24h))),
            Cell::from(format!("${}", format_market_cap(coin.market_cap))),
            Cell::from(format!("${}", format_market_cap(coin.total_volume))),
        ])
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 24h change as a colored span, dim placeholder when absent.
fn change_span(change: Option<Decimal>) -> Span<'static> {
    match change {
        Some(pct) => {
            let color = if pct.is_sign_negative() {
                Color::Red
            } else {
                Color::Green
            };
            Span::styled(format_change(pct), Style::default().fg(color))
        }
        None => Span::styled("--", Style::default().fg(Color::DarkGray)),
    }
}
