use ethers_core::types::{Address, U256};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::format::{accuracy, PotSplit};

#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum DuelDuration {
    OneDay = 0,
    ThreeDays = 1,
    SevenDays = 2,
}

impl DuelDuration {
    pub const ALL: [DuelDuration; 3] = [
        DuelDuration::OneDay,
        DuelDuration::ThreeDays,
        DuelDuration::SevenDays,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DuelDuration::OneDay => "24 Hours",
            DuelDuration::ThreeDays => "3 Days",
            DuelDuration::SevenDays => "7 Days",
        }
    }
}

#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum DuelStatus {
    /// Created, waiting for an opponent.
    Open = 0,

    /// Both stakes in, predictions accepted until the end time.
    Active = 1,

    /// Past the end time, waiting for resolution.
    Ended = 2,

    /// Winner (or tie) settled and paid out.
    Resolved = 3,
}

impl DuelStatus {
    pub fn label(self) -> &'static str {
        match self {
            DuelStatus::Open => "Open",
            DuelStatus::Active => "Active",
            DuelStatus::Ended => "Ended",
            DuelStatus::Resolved => "Resolved",
        }
    }
}

/// Which seat of a duel a player occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Creator,
    Opponent,
}

/// Settlement of a duel as far as the client can tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelOutcome {
    Undecided,
    Tie,
    Winner(Address),
}

/// Correct/total counters for one side of a duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub correct: u64,
    pub total: u64,
}

impl PlayerRecord {
    pub fn accuracy(&self) -> String {
        accuracy(self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duel {
    /// The duel id, also its index below `duelCounter`.
    pub id: U256,

    /// The player who opened the duel.
    pub creator: Address,

    /// The player who joined, if any.
    pub opponent: Option<Address>,

    /// Stake each player puts in, in wei.
    pub stake: U256,

    pub duration: DuelDuration,

    pub status: DuelStatus,

    /// Unix time the duel became active.
    pub start_time: u64,

    /// Unix time predictions close.
    pub end_time: u64,

    /// The winner once resolved. `None` on a resolved duel means a tie.
    pub winner: Option<Address>,

    pub creator_correct: u64,
    pub creator_total: u64,
    pub opponent_correct: u64,
    pub opponent_total: u64,
}

impl Duel {
    pub fn has_opponent(&self) -> bool {
        self.opponent.is_some()
    }

    pub fn is_creator(&self, account: &Address) -> bool {
        self.creator == *account
    }

    pub fn side_of(&self, account: &Address) -> Option<Side> {
        if self.creator == *account {
            Some(Side::Creator)
        } else if self.opponent.as_ref() == Some(account) {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn is_participant(&self, account: &Address) -> bool {
        self.side_of(account).is_some()
    }

    pub fn player(&self, side: Side) -> Option<Address> {
        match side {
            Side::Creator => Some(self.creator),
            Side::Opponent => self.opponent,
        }
    }

    pub fn record(&self, side: Side) -> PlayerRecord {
        match side {
            Side::Creator => PlayerRecord {
                correct: self.creator_correct,
                total: self.creator_total,
            },
            Side::Opponent => PlayerRecord {
                correct: self.opponent_correct,
                total: self.opponent_total,
            },
        }
    }

    pub fn outcome(&self) -> DuelOutcome {
        if self.status != DuelStatus::Resolved {
            return DuelOutcome::Undecided;
        }
        match self.winner {
            Some(winner) => DuelOutcome::Winner(winner),
            None => DuelOutcome::Tie,
        }
    }

    pub fn is_winner(&self, side: Side) -> bool {
        match (self.outcome(), self.player(side)) {
            (DuelOutcome::Winner(winner), Some(player)) => winner == player,
            _ => false,
        }
    }

    pub fn pot(&self) -> PotSplit {
        PotSplit::from_stake(self.stake)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn duel(status: DuelStatus, opponent: Option<Address>, winner: Option<Address>) -> Duel {
        Duel {
            id: U256::from(4),
            creator: Address::repeat_byte(0xaa),
            opponent,
            stake: U256::exp10(15),
            duration: DuelDuration::ThreeDays,
            status,
            start_time: 1_700_000_000,
            end_time: 1_700_259_200,
            winner,
            creator_correct: 3,
            creator_total: 4,
            opponent_correct: 1,
            opponent_total: 4,
        }
    }

    #[test]
    fn outcome__resolved_without_winner_is_a_tie() {
        // given
        let subject = duel(
            DuelStatus::Resolved,
            Some(Address::repeat_byte(0xbb)),
            None,
        );

        // when
        let outcome = subject.outcome();

        // then
        assert_eq!(outcome, DuelOutcome::Tie);
        assert!(!subject.is_winner(Side::Creator));
        assert!(!subject.is_winner(Side::Opponent));
    }

    #[test]
    fn outcome__unresolved_duel_is_undecided_even_with_winner_field() {
        let subject = duel(
            DuelStatus::Ended,
            Some(Address::repeat_byte(0xbb)),
            Some(Address::repeat_byte(0xaa)),
        );

        assert_eq!(subject.outcome(), DuelOutcome::Undecided);
    }

    #[test]
    fn is_winner__matches_the_winning_side() {
        let subject = duel(
            DuelStatus::Resolved,
            Some(Address::repeat_byte(0xbb)),
            Some(Address::repeat_byte(0xaa)),
        );

        assert!(subject.is_winner(Side::Creator));
        assert!(!subject.is_winner(Side::Opponent));
    }

    #[test]
    fn side_of__spectator_has_no_side() {
        // given
        let subject = duel(DuelStatus::Active, Some(Address::repeat_byte(0xbb)), None);

        // then
        assert_eq!(
            subject.side_of(&Address::repeat_byte(0xaa)),
            Some(Side::Creator)
        );
        assert_eq!(
            subject.side_of(&Address::repeat_byte(0xbb)),
            Some(Side::Opponent)
        );
        assert_eq!(subject.side_of(&Address::repeat_byte(0xcc)), None);
        assert!(!subject.is_participant(&Address::repeat_byte(0xcc)));
    }

    #[test]
    fn record__reports_accuracy_per_side() {
        let subject = duel(DuelStatus::Active, Some(Address::repeat_byte(0xbb)), None);

        assert_eq!(subject.record(Side::Creator).accuracy(), "75.0");
        assert_eq!(subject.record(Side::Opponent).accuracy(), "25.0");
    }

    #[test]
    fn duration__rejects_unknown_discriminant() {
        assert_eq!(DuelDuration::try_from(2u8).unwrap(), DuelDuration::SevenDays);
        assert!(DuelDuration::try_from(3u8).is_err());
        assert!(DuelStatus::try_from(4u8).is_err());
        assert_eq!(u8::from(DuelStatus::Resolved), 3);
    }
}
