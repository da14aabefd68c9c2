//! Persona ranking with randomized tie-break
//!
//! Candidates are shuffled once with the injected [`RandomSource`] and then
//! stable-sorted by descending score. The result is a proper total order in
//! which every persona tied for a position is equally likely to come first,
//! and a persona with a unique score always lands in the same place.

use crate::core::ids::PersonaId;
use crate::core::random::{RandomSource, shuffle};
use serde::{Deserialize, Serialize};

/// A persona with its final accumulated score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPersona {
    pub persona: PersonaId,
    pub score: i64,
}

/// Outcome of classifying a finished quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    ranking: Vec<RankedPersona>,
}

impl Classification {
    /// Rank `scores`, breaking ties randomly.
    ///
    /// Returns `None` when there is nothing to rank.
    pub fn rank(scores: &[(PersonaId, i64)], rng: &dyn RandomSource) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut ranking: Vec<RankedPersona> = scores
            .iter()
            .map(|(persona, score)| RankedPersona {
                persona: persona.clone(),
                score: *score,
            })
            .collect();

        shuffle(&mut ranking, rng);
        ranking.sort_by(|a, b| b.score.cmp(&a.score));

        Some(Self { ranking })
    }

    /// Top-ranked persona
    pub fn winner(&self) -> &RankedPersona {
        // `rank` never builds an empty ranking
        &self.ranking[0]
    }

    /// Second-ranked persona, when at least two were ranked
    pub fn runner_up(&self) -> Option<&RankedPersona> {
        self.ranking.get(1)
    }

    /// Full ranking, best first
    pub fn ranking(&self) -> &[RankedPersona] {
        &self.ranking
    }

    /// True when the winner shares its score with the runner-up
    pub fn was_tie_broken(&self) -> bool {
        self.runner_up()
            .is_some_and(|second| second.score == self.winner().score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::{ScriptedRandom, XorShift};

    fn scores(pairs: &[(&str, i64)]) -> Vec<(PersonaId, i64)> {
        pairs
            .iter()
            .map(|(id, s)| (PersonaId::from(*id), *s))
            .collect()
    }

    #[test]
    fn test_empty_scores_rank_to_none() {
        assert!(Classification::rank(&[], &ScriptedRandom::new([])).is_none());
    }

    #[test]
    fn test_unique_max_always_wins() {
        let board = scores(&[("a", 3), ("b", 7), ("c", 3), ("d", 1)]);
        let rng = XorShift::new(42);
        for _ in 0..200 {
            let c = Classification::rank(&board, &rng).unwrap();
            assert_eq!(c.winner().persona.as_str(), "b");
            assert_eq!(c.winner().score, 7);
            assert!(!c.was_tie_broken());
        }
    }

    #[test]
    fn test_ranking_is_descending() {
        let board = scores(&[("a", 1), ("b", 5), ("c", 3)]);
        let c = Classification::rank(&board, &ScriptedRandom::new([])).unwrap();
        let order: Vec<_> = c.ranking().iter().map(|r| r.persona.as_str()).collect();
        assert_eq!(order, ["b", "c", "a"]);
        assert_eq!(c.runner_up().unwrap().persona.as_str(), "c");
    }

    #[test]
    fn test_single_persona_has_no_runner_up() {
        let c = Classification::rank(&scores(&[("solo", 0)]), &ScriptedRandom::new([])).unwrap();
        assert_eq!(c.winner().persona.as_str(), "solo");
        assert!(c.runner_up().is_none());
    }

    #[test]
    fn test_tie_order_follows_shuffle() {
        let board = scores(&[("a", 4), ("b", 4)]);

        // Shuffle keeps [a, b] when the source returns 1 for i = 1.
        let kept = Classification::rank(&board, &ScriptedRandom::new([1])).unwrap();
        assert_eq!(kept.winner().persona.as_str(), "a");
        assert_eq!(kept.runner_up().unwrap().persona.as_str(), "b");

        // Returning 0 swaps them.
        let swapped = Classification::rank(&board, &ScriptedRandom::new([0])).unwrap();
        assert_eq!(swapped.winner().persona.as_str(), "b");
        assert_eq!(swapped.runner_up().unwrap().persona.as_str(), "a");
        assert!(swapped.was_tie_broken());
    }

    #[test]
    fn test_two_way_tie_splits_evenly() {
        let board = scores(&[("a", 6), ("b", 6), ("c", 2)]);
        let rng = XorShift::new(0x5eed);
        let runs = 4000;
        let mut a_wins = 0;
        for _ in 0..runs {
            let c = Classification::rank(&board, &rng).unwrap();
            match c.winner().persona.as_str() {
                "a" => a_wins += 1,
                "b" => {}
                other => panic!("unexpected winner {other}"),
            }
            assert_eq!(c.ranking()[2].persona.as_str(), "c");
        }
        let share = a_wins as f64 / runs as f64;
        assert!((0.4..=0.6).contains(&share), "share was {share}");
    }
}
