use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Draw a box snapshot, locked cells in red.
pub fn render_grid<W: Write>(out: &mut W, title: &str, state: &[Vec<bool>]) -> io::Result<()> {
    queue!(out, Print(format!("{title}\n")))?;
    for row in state {
        for &cell in row {
            let (color, glyph) = if cell {
                (Color::Red, "■ ")
            } else {
                (Color::DarkGrey, "□ ")
            };
            queue!(out, SetForegroundColor(color), Print(glyph))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_draws_every_cell() {
        let mut buf = Vec::new();
        render_grid(&mut buf, "box", &[vec![true, false], vec![false, false]]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("box\n"));
        assert_eq!(text.matches('■').count(), 1);
        assert_eq!(text.matches('□').count(), 3);
    }
}
