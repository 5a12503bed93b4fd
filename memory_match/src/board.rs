use {
    bevy::prelude::*,
    skill_resources::{DeckShuffle, SkillRng},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Down,
    Up,
    /// Locked face-up for the rest of the game.
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub skill_id: String,
    pub face: CardFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Everything unmatched is face-down.
    Dealt,
    OneRevealed { first: usize },
    /// Two cards are up and waiting for their resolution delay. Flips are ignored.
    Checking { first: usize, second: usize },
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    Revealed { index: usize },
    PairRevealed { first: usize, second: usize, matched: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairResolution {
    pub first: usize,
    pub second: usize,
    pub matched: bool,
}

/// The cards of one memory match session, attached to the session entity.
#[derive(Component, Debug, Clone)]
pub struct MemoryBoard {
    cards: Vec<Card>,
    phase: BoardPhase,
    matched_pairs: usize,
    moves: u32,
    completion_claimed: bool,
}

impl MemoryBoard {
    /// Deals `pairs` random skills (all of them if fewer are given) as face-down pairs.
    pub fn deal(skill_ids: &[String], pairs: usize, shuffle: DeckShuffle, rng: &mut SkillRng) -> Self {
        let chosen = rng.sample(skill_ids, pairs);
        Self::from_deck(build_deck(&chosen, shuffle, rng))
    }

    /// Board with cards in exactly the given order.
    pub fn from_deck(deck: Vec<String>) -> Self {
        let phase = if deck.is_empty() {
            BoardPhase::Complete
        } else {
            BoardPhase::Dealt
        };

        Self {
            cards: deck
                .into_iter()
                .map(|skill_id| Card {
                    skill_id,
                    face: CardFace::Down,
                })
                .collect(),
            phase,
            matched_pairs: 0,
            moves: 0,
            completion_claimed: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Pairs revealed so far, matched or not.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BoardPhase::Complete
    }

    pub fn accepts_flips(&self) -> bool {
        matches!(self.phase, BoardPhase::Dealt | BoardPhase::OneRevealed { .. })
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if !self.accepts_flips() {
            return FlipOutcome::Ignored;
        }
        match self.cards.get(index) {
            Some(card) if card.face == CardFace::Down => {}
            _ => return FlipOutcome::Ignored,
        }

        self.cards[index].face = CardFace::Up;

        match self.phase {
            BoardPhase::OneRevealed { first } => {
                self.moves += 1;
                self.phase = BoardPhase::Checking {
                    first,
                    second: index,
                };
                FlipOutcome::PairRevealed {
                    first,
                    second: index,
                    matched: self.cards[first].skill_id == self.cards[index].skill_id,
                }
            }
            _ => {
                self.phase = BoardPhase::OneRevealed { first: index };
                FlipOutcome::Revealed { index }
            }
        }
    }

    /// Settles the pair under check: matches lock in, mismatches turn back over.
    pub fn resolve(&mut self) -> Option<PairResolution> {
        let BoardPhase::Checking { first, second } = self.phase else {
            return None;
        };

        let matched = self.cards[first].skill_id == self.cards[second].skill_id;
        let face = if matched {
            self.matched_pairs += 1;
            CardFace::Matched
        } else {
            CardFace::Down
        };
        self.cards[first].face = face;
        self.cards[second].face = face;

        self.phase = if self.matched_pairs >= self.total_pairs() {
            BoardPhase::Complete
        } else {
            BoardPhase::Dealt
        };

        Some(PairResolution {
            first,
            second,
            matched,
        })
    }

    /// True exactly once, after the board is complete.
    pub fn claim_completion(&mut self) -> bool {
        if !self.is_complete() || self.completion_claimed {
            return false;
        }
        self.completion_claimed = true;
        true
    }
}

/// Duplicates every id into a pair and lays the deck out according to `shuffle`.
pub fn build_deck(skill_ids: &[String], shuffle: DeckShuffle, rng: &mut SkillRng) -> Vec<String> {
    let pair_up = |ids: &[String]| -> Vec<String> {
        ids.iter()
            .flat_map(|id| [id.clone(), id.clone()])
            .collect()
    };

    match shuffle {
        DeckShuffle::Uniform => {
            let mut deck = pair_up(skill_ids);
            rng.shuffle(&mut deck);
            deck
        }
        DeckShuffle::Clustered { window } => {
            let mut deck = Vec::with_capacity(skill_ids.len() * 2);
            for group in skill_ids.chunks(window.max(1)) {
                let mut cards = pair_up(group);
                rng.shuffle(&mut cards);
                deck.extend(cards);
            }
            deck
        }
    }
}
