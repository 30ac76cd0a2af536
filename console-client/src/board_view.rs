use tictactoe_engine::tictactoe::{
    Board, LOSS_SCORE, Mark, MoveCandidate, Player, TIE_SCORE, WIN_SCORE,
};

const ROW_SEPARATOR: &str = "---+---+---";

/// Empty cells show the number the player types to claim them.
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(5);

    for (row, chunk) in board.cells().chunks(3).enumerate() {
        if row > 0 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, mark)| match mark {
                Mark::Empty => format!(" {} ", row * 3 + col + 1),
                mark => format!(" {} ", mark.symbol()),
            })
            .collect();
        lines.push(cells.join("|"));
    }

    lines.join("\n")
}

/// Scores are from the computer's side; the label is for `viewer`.
pub fn describe_score(score: i32, viewer: Player) -> &'static str {
    let viewer_wins = match viewer {
        Player::Computer => WIN_SCORE,
        Player::Human => LOSS_SCORE,
    };

    if score == viewer_wins {
        "wins"
    } else if score == TIE_SCORE {
        "draws"
    } else {
        "loses"
    }
}

pub fn render_candidates(candidates: &[MoveCandidate], viewer: Player) -> String {
    candidates
        .iter()
        .map(|candidate| {
            format!(
                "{}:{}",
                candidate.index + 1,
                describe_score(candidate.score, viewer)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
