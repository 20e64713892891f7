//! Drawing-surface abstraction
//!
//! The simulation only ever fills rectangles and writes text. Hosts implement
//! `RenderTarget` over whatever they draw on (canvas 2D context, terminal).

use std::fmt;

/// A 2D surface that accepts filled rectangles and text
pub trait RenderTarget {
    /// Erase the whole surface (called by the host before each frame)
    fn clear(&mut self) {}

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Text { text: String, x: f32, y: f32 },
}

/// Records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderTarget for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}

/// Character-cell rasteriser, one cell per `cell_w x cell_h` pixels
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cell_w: f32,
    cell_h: f32,
    cells: Vec<char>,
}

impl AsciiCanvas {
    const EMPTY: char = ' ';
    const FILL: char = '#';

    pub fn new(width: f32, height: f32, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: width / cols as f32,
            cell_h: height / rows as f32,
            cells: vec![Self::EMPTY; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell, `None` outside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Map a pixel span onto the cell range it touches, clipped to the grid
    fn span(start: f32, len: f32, cell: f32, limit: usize) -> std::ops::Range<usize> {
        let first = (start / cell).floor().max(0.0) as usize;
        let last = ((start + len) / cell).ceil().max(0.0) as usize;
        first.min(limit)..last.min(limit)
    }
}

impl RenderTarget for AsciiCanvas {
    fn clear(&mut self) {
        self.cells.fill(Self::EMPTY);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let cols = Self::span(x, w, self.cell_w, self.cols);
        for row in Self::span(y, h, self.cell_h, self.rows) {
            for col in cols.clone() {
                self.cells[row * self.cols + col] = Self::FILL;
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        // Canvas text is anchored at its baseline; draw on the row above it
        let row = ((y / self.cell_h).floor() as isize - 1).max(0) as usize;
        if row >= self.rows || x < 0.0 {
            return;
        }
        let start = (x / self.cell_w).floor() as usize;
        for (offset, ch) in text.chars().enumerate() {
            let col = start + offset;
            if col >= self.cols {
                break;
            }
            self.cells[row * self.cols + col] = ch;
        }
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.cols + 2);
        writeln!(f, "{border}")?;
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().collect();
            writeln!(f, "|{line}|")?;
        }
        write!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.clear();
        list.fill_rect(1.0, 2.0, 3.0, 4.0);
        list.fill_text("7", 100.0, 100.0);

        assert_eq!(list.commands.len(), 3);
        assert_eq!(list.commands[0], DrawCommand::Clear);
        assert_eq!(list.rects().count(), 1);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["7"]);
    }

    #[test]
    fn test_ascii_canvas_fills_cells() {
        // 10px cells
        let mut canvas = AsciiCanvas::new(100.0, 50.0, 10, 5);
        canvas.fill_rect(20.0, 10.0, 15.0, 10.0);

        assert_eq!(canvas.cell(2, 1), Some('#'));
        assert_eq!(canvas.cell(3, 1), Some('#'));
        assert_eq!(canvas.cell(4, 1), Some(' '));
        assert_eq!(canvas.cell(2, 2), Some(' '));
        assert_eq!(canvas.cell(10, 0), None);

        canvas.clear();
        assert_eq!(canvas.cell(2, 1), Some(' '));
    }

    #[test]
    fn test_ascii_canvas_clips_offscreen() {
        let mut canvas = AsciiCanvas::new(100.0, 50.0, 10, 5);
        canvas.fill_rect(-30.0, -30.0, 15.0, 15.0);
        canvas.fill_rect(120.0, 10.0, 15.0, 15.0);
        assert!(!canvas.to_string().contains('#'));
    }

    #[test]
    fn test_ascii_canvas_text() {
        let mut canvas = AsciiCanvas::new(100.0, 50.0, 10, 5);
        canvas.fill_text("12", 50.0, 20.0);
        assert_eq!(canvas.cell(5, 1), Some('1'));
        assert_eq!(canvas.cell(6, 1), Some('2'));
    }
}
