use memory_match_core::{CellView, Observation, SymbolId};
use std::fmt::Write;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters while they last, numbers after that.
pub fn symbol_label(symbol: SymbolId) -> String {
    match LETTERS.get(usize::from(symbol)) {
        Some(&letter) => char::from(letter).to_string(),
        None => symbol.to_string(),
    }
}

fn cell_text(cell: CellView) -> String {
    match cell {
        CellView::FaceDown => "##".to_owned(),
        CellView::FaceUp(symbol) => symbol_label(symbol),
        CellView::Matched(symbol) => format!("[{}]", symbol_label(symbol).to_lowercase()),
    }
}

/// Grid with row/column headers followed by the status lines.
pub fn board(obs: &Observation) -> String {
    let side = usize::from(obs.side);
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..side {
        let _ = write!(out, "{col:^5}");
    }
    out.push('\n');

    for (row, cells) in obs.cells.chunks(side.max(1)).enumerate() {
        let _ = write!(out, "{row:>2} ");
        for &cell in cells {
            let _ = write!(out, "{:^5}", cell_text(cell));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&status(obs));
    out
}

/// `Moves: N  Time: Ts`, plus the final time once the game is won.
pub fn status(obs: &Observation) -> String {
    let mut out = format!("Moves: {}  Time: {}s\n", obs.moves, obs.elapsed.as_secs());
    if let Some(final_time) = obs.final_time {
        let _ = writeln!(out, "Final Time: {}s", final_time.as_secs());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn observation(cells: Vec<CellView>) -> Observation {
        Observation {
            side: 2,
            cells,
            moves: 3,
            elapsed: Duration::from_millis(4500),
            final_time: None,
            won: false,
            input_locked: false,
        }
    }

    #[test]
    fn labels_use_letters_then_numbers() {
        assert_eq!(symbol_label(0), "A");
        assert_eq!(symbol_label(25), "Z");
        assert_eq!(symbol_label(26), "26");
    }

    #[test]
    fn renders_each_view() {
        use CellView::*;
        let text = board(&observation(vec![FaceDown, FaceUp(1), Matched(0), FaceDown]));
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["0", "1"]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["0", "##", "B"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["1", "[a]", "##"]);
        assert!(text.contains("Moves: 3  Time: 4s"));
        assert!(!text.contains("Final Time"));
    }

    #[test]
    fn shows_final_time_once_won() {
        let mut obs = observation(vec![CellView::Matched(0); 4]);
        obs.final_time = Some(Duration::from_secs(12));
        obs.elapsed = Duration::from_secs(12);
        obs.won = true;

        assert!(status(&obs).contains("Final Time: 12s"));
    }
}
