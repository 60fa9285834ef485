//! Rock-paper-scissors rules.

use std::{fmt, str::FromStr};

use rand::seq::SliceRandom;
use thiserror::Error;

/// An object a player can pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

/// `(winner, loser, verb)`. Adding a choice means adding its rows here.
const RULES: &[(Choice, Choice, &str)] = &[
    (Choice::Rock, Choice::Scissors, "crushes"),
    (Choice::Scissors, Choice::Paper, "cuts"),
    (Choice::Paper, Choice::Rock, "covers"),
];

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Stable value used in command options and menu values.
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Choice::Rock => "Solid and dependable",
            Choice::Paper => "Thin but surprisingly versatile",
            Choice::Scissors => "Sharp and to the point",
        }
    }

    /// Verb describing how `self` defeats `other`, if it does.
    pub fn verb_against(self, other: Choice) -> Option<&'static str> {
        RULES
            .iter()
            .find(|(winner, loser, _)| *winner == self && *loser == other)
            .map(|(_, _, verb)| *verb)
    }

    pub fn beats(self, other: Choice) -> bool {
        self.verb_against(other).is_some()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown object `{0}`")]
pub struct UnknownChoice(pub String);

impl FromStr for Choice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Choice::ALL
            .into_iter()
            .find(|choice| choice.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownChoice(wanted.to_owned()))
    }
}

/// Which participant won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub fn flip(self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Tie,
}

/// Decide a round between the challenger's and the opponent's pick.
pub fn resolve(challenger: Choice, opponent: Choice) -> Outcome {
    if challenger.beats(opponent) {
        Outcome::Win(Side::Challenger)
    } else if opponent.beats(challenger) {
        Outcome::Win(Side::Opponent)
    } else {
        Outcome::Tie
    }
}

/// A participant and what they picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: u64,
    pub choice: Choice,
}

/// Announcement text for a finished round, mentioning both players.
pub fn result_text(challenger: Player, opponent: Player) -> String {
    let (winner, loser) = match resolve(challenger.choice, opponent.choice) {
        Outcome::Tie => {
            return format!(
                "<@{}> and <@{}> draw with **{}**",
                challenger.id, opponent.id, challenger.choice
            );
        }
        Outcome::Win(Side::Challenger) => (challenger, opponent),
        Outcome::Win(Side::Opponent) => (opponent, challenger),
    };

    let verb = winner.choice.verb_against(loser.choice).unwrap_or("beats");
    format!(
        "<@{}>'s **{}** {} <@{}>'s **{}**",
        winner.id, winner.choice, verb, loser.id, loser.choice
    )
}

/// Every choice in a random order, for presenting the selection menu.
pub fn shuffled_choices() -> Vec<Choice> {
    let mut choices = Choice::ALL.to_vec();
    choices.shuffle(&mut rand::thread_rng());
    choices
}
