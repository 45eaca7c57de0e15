//! Random question picking for quiz rounds.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::db::Question;

/// Category id the client sends when the player picked "All".
pub const ANY_CATEGORY: i64 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("No questions available for this category")]
    NoQuestionsAvailable,
    #[error("No questions remaining for this quiz")]
    NoQuestionsRemaining,
}

/// Picks a question from `pool` uniformly at random, skipping every id in
/// `seen`.
pub fn select_question<'a, R>(
    pool: &'a [Question],
    seen: &HashSet<i64>,
    rng: &mut R,
) -> Result<&'a Question, QuizError>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(QuizError::NoQuestionsAvailable);
    }
    let remaining: Vec<&Question> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();
    remaining
        .choose(rng)
        .copied()
        .ok_or(QuizError::NoQuestionsRemaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category,
            difficulty: 1,
        }
    }

    fn history_pool() -> Vec<Question> {
        vec![question(5, 4), question(9, 4), question(12, 4), question(23, 4)]
    }

    #[test]
    fn never_returns_seen_questions() {
        let pool = history_pool();
        let seen: HashSet<i64> = [5, 9].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = select_question(&pool, &seen, &mut rng).unwrap();
            assert!(!seen.contains(&picked.id));
            assert_eq!(picked.category, 4);
        }
    }

    #[test]
    fn every_unseen_question_can_be_picked() {
        let pool = history_pool();
        let seen: HashSet<i64> = [5].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let picked: HashSet<i64> = (0..500)
            .map(|_| select_question(&pool, &seen, &mut rng).unwrap().id)
            .collect();
        assert_eq!(picked, [9, 12, 23].into_iter().collect());
    }

    #[test]
    fn last_unseen_question_is_returned() {
        let pool = history_pool();
        let seen: HashSet<i64> = [5, 9, 12].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_question(&pool, &seen, &mut rng).unwrap().id, 23);
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let pool = history_pool();
        let seen: HashSet<i64> = [5, 9, 12, 23, 99].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_question(&pool, &seen, &mut rng),
            Err(QuizError::NoQuestionsRemaining)
        );
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_question(&[], &HashSet::new(), &mut rng),
            Err(QuizError::NoQuestionsAvailable)
        );
    }
}
