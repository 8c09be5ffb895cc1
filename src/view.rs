use crate::consts;
use crate::game::controller::{Renderer, Scene};
use crate::game::Cell;
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Terminal,
};
use std::io;

/// Draws scenes to a terminal
#[derive(Debug)]
pub(crate) struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub(crate) fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer { terminal }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(scene, frame.area()))?;
        Ok(())
    }
}

impl Widget for &Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let mut block_size = self.grid.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            origin: Position::new(level_area.x, level_area.y),
            clip: block_area,
            buf,
        };
        for cell in self.snake.body() {
            level.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        level.draw_cell(self.apple, consts::APPLE_SYMBOL, consts::APPLE_STYLE);
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with.  A head that left the board lands on
        // the border.
        if self.snake.is_alive() {
            level.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        } else {
            level.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            Line::from(" SNAKE DOWN ").render(status_area, buf);
        }
    }
}

/// Draws board cells relative to `origin`, discarding anything outside `clip`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    origin: Position,
    clip: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some(x) = offset(self.origin.x, cell.x) else {
            return;
        };
        let Some(y) = offset(self.origin.y, cell.y) else {
            return;
        };
        let pos = Position { x, y };
        if !self.clip.contains(pos) {
            return;
        }
        if let Some(c) = self.buf.cell_mut(pos) {
            c.set_char(symbol);
            c.set_style(Style::reset().patch(style));
        }
    }
}

fn offset(base: u16, delta: i32) -> Option<u16> {
    u16::try_from(i32::from(base).checked_add(delta)?).ok()
}
