//! Street at which a hand concluded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::patterns::{self, Street};
use super::segment::Block;

/// Where the hand ended, as far as the transcript text tells.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    /// Classify a block from which markers it contains.
    ///
    /// Any revealed hand means showdown, whatever streets were dealt.
    /// Otherwise the deepest street is found by presence only: no flop is
    /// preflop, flop without turn is flop, turn without river is turn, and
    /// a river marker is river. Marker order inside the block is ignored.
    pub fn classify(block: &Block<'_>) -> Self {
        if block.lines().iter().any(|line| patterns::is_showdown(line)) {
            return Stage::Showdown;
        }

        let text = block.text();
        let flop = patterns::has_street(&text, Street::Flop);
        let turn = patterns::has_street(&text, Street::Turn);
        let river = patterns::has_street(&text, Street::River);

        match (flop, turn, river) {
            (false, _, _) => Stage::Preflop,
            (true, false, _) => Stage::Flop,
            (true, true, false) => Stage::Turn,
            (true, true, true) => Stage::River,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preflop" => Ok(Stage::Preflop),
            "flop" => Ok(Stage::Flop),
            "turn" => Ok(Stage::Turn),
            "river" => Ok(Stage::River),
            "showdown" => Ok(Stage::Showdown),
            _ => Err(format!("invalid stage: {}", s)),
        }
    }
}
