//! Snake and ladder transition tables.
//!
//! A table holds two disjoint maps keyed by the triggering square:
//! snake heads (leading down) and ladder feet (leading up). Tables are
//! validated once at construction and are immutable afterwards.
//!
//! ## Building
//!
//! ```
//! use snakes_ladders::board::TransitionTable;
//!
//! let table = TransitionTable::builder()
//!     .labeled_snake(46, 25, "C++")
//!     .ladder(4, 14)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.snake_destination(46).map(|s| s.number()), Some(25));
//! assert_eq!(table.ladder_destination(4).map(|s| s.number()), Some(14));
//! assert_eq!(table.snake_label(46), Some("C++"));
//! ```
//!
//! ## Loading
//!
//! Tables deserialize through the same validation, so a JSON file with an
//! upward "snake" or a square used twice is rejected.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Square};

/// Kind of transition triggered by landing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Snake,
    Ladder,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Snake => write!(f, "snake"),
            TransitionKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A single snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub from: Square,
    pub to: Square,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SnakeEntry {
    tail: Square,
    label: Option<String>,
}

/// Validated snake and ladder layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableSpec", into = "TableSpec")]
pub struct TransitionTable {
    snakes: FxHashMap<Square, SnakeEntry>,
    ladders: FxHashMap<Square, Square>,
}

impl TransitionTable {
    /// A table with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Start building a table.
    #[must_use]
    pub fn builder() -> TransitionTableBuilder {
        TransitionTableBuilder::default()
    }

    /// Destination of the snake whose head is at `square`.
    #[must_use]
    pub fn snake_destination(&self, square: u16) -> Option<Square> {
        let square = Square::new(square).ok()?;
        self.snakes.get(&square).map(|entry| entry.tail)
    }

    /// Destination of the ladder whose foot is at `square`.
    #[must_use]
    pub fn ladder_destination(&self, square: u16) -> Option<Square> {
        let square = Square::new(square).ok()?;
        self.ladders.get(&square).copied()
    }

    /// Display label of the snake at `square`, if it has one.
    #[must_use]
    pub fn snake_label(&self, square: u16) -> Option<&str> {
        let square = Square::new(square).ok()?;
        self.snakes.get(&square)?.label.as_deref()
    }

    /// The transition triggered by landing on `square`.
    ///
    /// Snakes are checked before ladders; construction guarantees at most
    /// one of them matches.
    #[must_use]
    pub fn transition_at(&self, square: Square) -> Option<Transition> {
        if let Some(entry) = self.snakes.get(&square) {
            return Some(Transition {
                kind: TransitionKind::Snake,
                from: square,
                to: entry.tail,
            });
        }
        self.ladders.get(&square).map(|&top| Transition {
            kind: TransitionKind::Ladder,
            from: square,
            to: top,
        })
    }

    /// Number of snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// All transitions ordered by triggering square.
    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        let mut all: Vec<_> = self
            .snakes
            .keys()
            .chain(self.ladders.keys())
            .filter_map(|&sq| self.transition_at(sq))
            .collect();
        all.sort_by_key(|t| t.from);
        all
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builder collecting raw square numbers; validation happens in `build`.
#[derive(Clone, Debug, Default)]
pub struct TransitionTableBuilder {
    spec: TableSpec,
}

impl TransitionTableBuilder {
    /// Add an unlabelled snake.
    #[must_use]
    pub fn snake(mut self, head: u16, tail: u16) -> Self {
        self.spec.snakes.push(SnakeSpec {
            head,
            tail,
            label: None,
        });
        self
    }

    /// Add a snake with a display label.
    #[must_use]
    pub fn labeled_snake(mut self, head: u16, tail: u16, label: impl Into<String>) -> Self {
        self.spec.snakes.push(SnakeSpec {
            head,
            tail,
            label: Some(label.into()),
        });
        self
    }

    /// Add a ladder.
    #[must_use]
    pub fn ladder(mut self, foot: u16, top: u16) -> Self {
        self.spec.ladders.push(LadderSpec { foot, top });
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable, ConfigError> {
        TransitionTable::try_from(self.spec)
    }
}

/// Serialized form of a table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct TableSpec {
    #[serde(default)]
    snakes: Vec<SnakeSpec>,
    #[serde(default)]
    ladders: Vec<LadderSpec>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SnakeSpec {
    head: u16,
    tail: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LadderSpec {
    foot: u16,
    top: u16,
}

impl TryFrom<TableSpec> for TransitionTable {
    type Error = ConfigError;

    fn try_from(spec: TableSpec) -> Result<Self, Self::Error> {
        let mut table = TransitionTable::empty();

        for snake in spec.snakes {
            let head = Square::new(snake.head)?;
            let tail = Square::new(snake.tail)?;
            if tail >= head {
                return Err(ConfigError::SnakeNotDescending { head, tail });
            }
            if head.is_finish() {
                return Err(ConfigError::TransitionFromFinish);
            }
            let entry = SnakeEntry {
                tail,
                label: snake.label,
            };
            if table.snakes.insert(head, entry).is_some() {
                return Err(ConfigError::OverlappingTransition(head));
            }
        }

        for ladder in spec.ladders {
            let foot = Square::new(ladder.foot)?;
            let top = Square::new(ladder.top)?;
            if top <= foot {
                return Err(ConfigError::LadderNotAscending { foot, top });
            }
            if table.snakes.contains_key(&foot) || table.ladders.insert(foot, top).is_some() {
                return Err(ConfigError::OverlappingTransition(foot));
            }
        }

        Ok(table)
    }
}

impl From<TransitionTable> for TableSpec {
    fn from(table: TransitionTable) -> Self {
        let mut snakes: Vec<_> = table
            .snakes
            .into_iter()
            .map(|(head, entry)| SnakeSpec {
                head: head.into(),
                tail: entry.tail.into(),
                label: entry.label,
            })
            .collect();
        snakes.sort_by_key(|s| s.head);

        let mut ladders: Vec<_> = table
            .ladders
            .into_iter()
            .map(|(foot, top)| LadderSpec {
                foot: foot.into(),
                top: top.into(),
            })
            .collect();
        ladders.sort_by_key(|l| l.foot);

        TableSpec { snakes, ladders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardError;

    fn sq(n: u16) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = TransitionTable::builder()
            .snake(16, 6)
            .ladder(9, 31)
            .build()
            .unwrap();

        assert_eq!(table.snake_destination(16), Some(sq(6)));
        assert_eq!(table.snake_destination(9), None);
        assert_eq!(table.ladder_destination(9), Some(sq(31)));
        assert_eq!(table.ladder_destination(16), None);
        assert_eq!(table.snake_count(), 1);
        assert_eq!(table.ladder_count(), 1);
    }

    #[test]
    fn test_lookup_out_of_range_is_none() {
        let table = TransitionTable::builder().snake(16, 6).build().unwrap();
        assert_eq!(table.snake_destination(0), None);
        assert_eq!(table.ladder_destination(500), None);
        assert_eq!(table.snake_label(0), None);
    }

    #[test]
    fn test_transition_at() {
        let table = TransitionTable::builder()
            .snake(49, 11)
            .ladder(21, 42)
            .build()
            .unwrap();

        assert_eq!(
            table.transition_at(sq(49)),
            Some(Transition { kind: TransitionKind::Snake, from: sq(49), to: sq(11) })
        );
        assert_eq!(
            table.transition_at(sq(21)),
            Some(Transition { kind: TransitionKind::Ladder, from: sq(21), to: sq(42) })
        );
        assert_eq!(table.transition_at(sq(50)), None);
    }

    #[test]
    fn test_labels() {
        let table = TransitionTable::builder()
            .labeled_snake(62, 19, "Python")
            .snake(64, 60)
            .build()
            .unwrap();

        assert_eq!(table.snake_label(62), Some("Python"));
        assert_eq!(table.snake_label(64), None);
    }

    #[test]
    fn test_rejects_upward_snake() {
        let err = TransitionTable::builder().snake(10, 20).build().unwrap_err();
        assert_eq!(err, ConfigError::SnakeNotDescending { head: sq(10), tail: sq(20) });
    }

    #[test]
    fn test_rejects_downward_ladder() {
        let err = TransitionTable::builder().ladder(30, 30).build().unwrap_err();
        assert_eq!(err, ConfigError::LadderNotAscending { foot: sq(30), top: sq(30) });
    }

    #[test]
    fn test_rejects_overlap() {
        let err = TransitionTable::builder()
            .snake(40, 3)
            .ladder(40, 60)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::OverlappingTransition(sq(40)));

        let err = TransitionTable::builder()
            .ladder(5, 50)
            .ladder(5, 60)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::OverlappingTransition(sq(5)));
    }

    #[test]
    fn test_rejects_off_board() {
        let err = TransitionTable::builder().ladder(90, 120).build().unwrap_err();
        assert_eq!(err, ConfigError::Board(BoardError::InvalidSquare(120)));
    }

    #[test]
    fn test_rejects_finish_snake() {
        let err = TransitionTable::builder().snake(100, 2).build().unwrap_err();
        assert_eq!(err, ConfigError::TransitionFromFinish);
    }

    #[test]
    fn test_transitions_sorted() {
        let table = TransitionTable::builder()
            .snake(93, 73)
            .ladder(4, 14)
            .snake(16, 6)
            .build()
            .unwrap();

        let froms: Vec<_> = table.transitions().iter().map(|t| t.from.number()).collect();
        assert_eq!(froms, vec![4, 16, 93]);
    }

    #[test]
    fn test_json_load() {
        let json = r#"{
            "snakes": [{"head": 16, "tail": 6, "label": "C"}],
            "ladders": [{"foot": 4, "top": 25}]
        }"#;
        let table: TransitionTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.ladder_destination(4), Some(sq(25)));
        assert_eq!(table.snake_label(16), Some("C"));
    }

    #[test]
    fn test_json_load_validates() {
        let json = r#"{"snakes": [{"head": 20, "tail": 30}]}"#;
        assert!(serde_json::from_str::<TransitionTable>(json).is_err());

        let json = r#"{"snakes": [{"head": 20, "tail": 3}], "ladders": [{"foot": 20, "top": 40}]}"#;
        assert!(serde_json::from_str::<TransitionTable>(json).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let table = TransitionTable::builder()
            .labeled_snake(87, 24, "React")
            .ladder(28, 84)
            .build()
            .unwrap();

        let json = serde_json::to_string(&table).unwrap();
        let back: TransitionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
