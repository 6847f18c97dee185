//! Bordered outcome-matrix rendering for the help screen.

use super::MoveCatalog;

/// Label for the top-left corner cell: rows are the computer's move,
/// columns are the user's.
const CORNER_LABEL: &str = "v PC\\User >";

/// Render the full (N+1) x (N+1) outcome matrix as a bordered text table.
///
/// Cell `[i][j]` is the outcome of `moves[i]` against `moves[j]`, so the
/// diagonal is all Draw and transposed cells swap Win and Lose. All columns
/// share one fixed width.
pub fn render_matrix(catalog: &MoveCatalog) -> String {
    let width = column_width(catalog);
    let columns = catalog.len() + 1;

    let mut separator = String::new();
    for _ in 0..columns {
        separator.push('+');
        separator.push_str(&"-".repeat(width));
    }
    separator.push('+');

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');

    let mut header: Vec<String> = vec![center(CORNER_LABEL, width)];
    header.extend(catalog.moves().iter().map(|m| center(m, width)));
    push_row(&mut out, &header, &separator);

    for (i, mv) in catalog.moves().iter().enumerate() {
        let mut row: Vec<String> = vec![center(mv, width)];
        for j in 0..catalog.len() {
            row.push(center(catalog.compare_at(i, j).as_str(), width));
        }
        push_row(&mut out, &row, &separator);
    }

    out
}

fn push_row(out: &mut String, cells: &[String], separator: &str) {
    out.push('|');
    for cell in cells {
        out.push_str(cell);
        out.push('|');
    }
    out.push('\n');
    out.push_str(separator);
    out.push('\n');
}

fn column_width(catalog: &MoveCatalog) -> usize {
    catalog
        .moves()
        .iter()
        .map(String::len)
        .chain([CORNER_LABEL.len(), "Draw".len()])
        .max()
        .unwrap_or(CORNER_LABEL.len())
        + 2
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    fn catalog(moves: &[&str]) -> MoveCatalog {
        MoveCatalog::new(moves.iter().map(|m| m.to_string()).collect()).unwrap()
    }

    /// Parse the rendered table back into trimmed cell contents.
    fn cells(rendered: &str) -> Vec<Vec<String>> {
        rendered
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| {
                line.trim_matches('|')
                    .split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_matrix_shape() {
        let c = catalog(&["rock", "paper", "scissors"]);
        let rows = cells(&render_matrix(&c));
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_header_row_and_column() {
        let c = catalog(&["rock", "paper", "scissors"]);
        let rows = cells(&render_matrix(&c));
        assert_eq!(rows[0], vec!["v PC\\User >", "rock", "paper", "scissors"]);
        assert_eq!(rows[1][0], "rock");
        assert_eq!(rows[2][0], "paper");
        assert_eq!(rows[3][0], "scissors");
    }

    #[test]
    fn test_diagonal_is_draw_and_transpose_swaps() {
        let c = catalog(&["rock", "paper", "scissors"]);
        let rows = cells(&render_matrix(&c));

        for i in 0..3 {
            assert_eq!(rows[i + 1][i + 1], "Draw");
            for j in 0..3 {
                if i == j {
                    continue;
                }
                let forward = &rows[i + 1][j + 1];
                let mirrored = &rows[j + 1][i + 1];
                match forward.as_str() {
                    "Win" => assert_eq!(mirrored, "Lose"),
                    "Lose" => assert_eq!(mirrored, "Win"),
                    other => panic!("unexpected cell {}", other),
                }
            }
        }
    }

    #[test]
    fn test_cells_match_compare() {
        let c = catalog(&["rock", "paper", "scissors", "lizard", "spock"]);
        let rows = cells(&render_matrix(&c));

        for (i, a) in c.moves().iter().enumerate() {
            for (j, b) in c.moves().iter().enumerate() {
                let expected = match c.compare(a, b).unwrap() {
                    Outcome::Win => "Win",
                    Outcome::Lose => "Lose",
                    Outcome::Draw => "Draw",
                };
                assert_eq!(rows[i + 1][j + 1], expected, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_fixed_column_width() {
        let c = catalog(&["a", "bb", "ccc"]);
        let rendered = render_matrix(&c);
        let border_lines: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with('+'))
            .collect();

        // all borders identical, all columns the same width
        assert!(border_lines.windows(2).all(|w| w[0] == w[1]));
        let widths: Vec<usize> = border_lines[0]
            .split('+')
            .filter(|s| !s.is_empty())
            .map(str::len)
            .collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
