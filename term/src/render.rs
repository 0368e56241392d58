use std::fmt::Write;

use sweeper_core::{DisplayValue, Game};

/// Three-digit mine counter, clamped like the classic LCD display.
pub fn format_for_counter(num: i32) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

fn symbol(display: DisplayValue) -> char {
    match display {
        DisplayValue::Hidden => '#',
        DisplayValue::Flag => 'F',
        DisplayValue::Number(0) => '.',
        DisplayValue::Number(count) => char::from(b'0' + count),
        DisplayValue::Mine => '*',
        DisplayValue::Exploded => 'X',
    }
}

/// Draws the counter line and the grid with row and column indices.
pub fn render(game: &Game) -> String {
    let (rows, cols) = game.size();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Remaining mines: {}",
        format_for_counter(game.remaining_flags())
    );

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>3}");
        for col in 0..cols {
            // coordinates come from the board's own size
            let display = game
                .cell_view((row, col))
                .map(|view| view.display)
                .unwrap_or(DisplayValue::Hidden);
            let _ = write!(out, "{:>3}", symbol(display));
        }
        out.push('\n');
    }
    out
}
