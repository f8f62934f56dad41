//! Text rendering of the board.

use std::fmt;

use super::{Board, ColoredPiece, Square, SquareSet};

/// How [`Board::render`] draws pieces and markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStyle {
    /// Unicode chess symbols instead of layout letters
    pub glyphs: bool,
    /// Square drawn in brackets
    pub selected: Option<Square>,
    /// Squares marked with `*` (or with `x` when occupied)
    pub marked: SquareSet,
}

impl RenderStyle {
    fn piece_char(self, piece: ColoredPiece) -> char {
        if self.glyphs {
            piece.glyph()
        } else {
            piece.to_char()
        }
    }
}

impl Board {
    /// Draw the board row 0 first, with rank and file labels.
    #[must_use]
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::new();
        for row in 0..8 {
            out.push_str(&format!("{} ", 8 - row));
            for col in 0..8 {
                let sq = Square(row, col);
                let (open, close) = if style.selected == Some(sq) {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                let body = match (self.piece_at(sq), style.marked.contains(sq)) {
                    (Some(_), true) => 'x',
                    (Some(p), false) => style.piece_char(p),
                    (None, true) => '*',
                    (None, false) => '.',
                };
                out.push(open);
                out.push(body);
                out.push(close);
            }
            out.push('\n');
        }
        out.push_str("   a  b  c  d  e  f  g  h\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::default()))
    }
}
