use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::game::{GamePhase, Snapshot};
use crate::grid::{Cell, GridSpace};
use crate::input::Direction;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns per grid cell, so cells look roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_FOOD: &str = "()";
const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";

/// Renders the full game frame from an engine snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let [board_row, status_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let board_area = board_rect(board_row, snapshot.grid_size);
    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);
    render_status(frame, status_row, snapshot);

    match snapshot.phase {
        GamePhase::Idle => render_start_menu(frame, board_area),
        GamePhase::GameOver => {
            render_game_over_menu(frame, board_area, snapshot.score, snapshot.death_reason);
        }
        GamePhase::Running => {}
    }
}

/// Centers a bordered board of `grid_size` cells inside `area`, clipped to fit.
fn board_rect(area: Rect, grid_size: u16) -> Rect {
    let width = grid_size
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = grid_size.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let text = format!(
        "Score {}  Length {}  Tick {} ms",
        snapshot.score,
        snapshot.body.len(),
        snapshot.interval.as_millis()
    );
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.body.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, *segment) else {
            continue;
        };

        if index == 0 {
            let glyph = snapshot.heading.map_or(GLYPH_SNAKE_BODY, head_glyph);
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, grid_size: u16, cell: Cell) -> Option<(u16, u16)> {
    if !GridSpace::new(grid_size).in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
