//! Built-in board layouts.

use super::transitions::TransitionTable;

/// Snakes of the classic board: head, tail, label.
///
/// Each snake is named after a programming language.
pub const CLASSIC_SNAKES: &[(u16, u16, &str)] = &[
    (16, 6, "C"),
    (46, 25, "C++"),
    (49, 11, "Java"),
    (62, 19, "Python"),
    (64, 60, "JavaScript"),
    (87, 24, "React"),
    (93, 73, "PHP"),
    (95, 75, "HTML"),
    (98, 78, "CSS"),
];

/// Ladders of the classic board: foot, top.
pub const CLASSIC_LADDERS: &[(u16, u16)] = &[
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (51, 67),
    (72, 91),
    (80, 99),
];

impl TransitionTable {
    /// The classic board with nine language snakes and eight ladders.
    ///
    /// The ladder on square 1 is never taken at the start of a game because
    /// transitions only trigger after a move.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in layout is covered by tests.
    #[must_use]
    pub fn classic() -> Self {
        let builder = CLASSIC_SNAKES
            .iter()
            .fold(TransitionTable::builder(), |b, &(head, tail, label)| {
                b.labeled_snake(head, tail, label)
            });
        CLASSIC_LADDERS
            .iter()
            .fold(builder, |b, &(foot, top)| b.ladder(foot, top))
            .build()
            .expect("classic layout is valid")
    }
}
