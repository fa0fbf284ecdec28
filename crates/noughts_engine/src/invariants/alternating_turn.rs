//! Alternating turn invariant: human, robot, human, ...

use super::Invariant;
use crate::{Side, TurnEngine};

/// Invariant: the human moves first and sides strictly alternate.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<TurnEngine<R>> for AlternatingTurnInvariant {
    fn holds(engine: &TurnEngine<R>) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.side != Side::Human
        {
            return false;
        }

        history
            .windows(2)
            .all(|pair| pair[0].side == pair[1].side.opponent())
    }

    fn description() -> &'static str {
        "Sides alternate turns, human first"
    }
}
