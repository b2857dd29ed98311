use minedig_core::*;
use std::fmt;

/// Text view of a board as the player sees it.
///
/// Revealed cells show their value, hidden ones a blank. Every column is as wide as its widest
/// entry, header index included, and cells are closed with `" |"`.
pub struct BoardView<'a>(pub &'a Board);

pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let dim_size = board.dim_size();

        let visible: Vec<Vec<String>> = (0..dim_size)
            .map(|row| {
                (0..dim_size)
                    .map(|col| match board.visible_at((row, col)) {
                        Some(value) => value.to_string(),
                        None => " ".to_owned(),
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..usize::from(dim_size))
            .map(|col| {
                visible
                    .iter()
                    .map(|cells| cells[col].len())
                    .fold(col.to_string().len(), usize::max)
            })
            .collect();

        let label_width = (dim_size - 1).to_string().len();
        let row_width = label_width + 2 + widths.iter().map(|width| width + 2).sum::<usize>();
        let rule = "-".repeat(row_width);

        write!(f, "{:label_width$}  ", "")?;
        for (col, width) in widths.iter().enumerate() {
            write!(f, "{col:<width$}  ")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;

        for (row, cells) in visible.iter().enumerate() {
            write!(f, "{row:<label_width$} |")?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, "{cell:<width$} |")?;
            }
            writeln!(f)?;
        }

        write!(f, "{rule}")
    }
}
