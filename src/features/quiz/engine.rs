use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Radius of the circular progress ring rendered on the results screen.
/// The stroke length is a fraction of this ring's circumference.
pub const RESULT_RING_RADIUS: f64 = 45.0;

/// Outcome of grading a submitted answer against the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerGrade {
    /// Marks earned: the question's point value for a correct choice,
    /// zero for an incorrect one.
    Earned(i32),
    /// The answer belongs to a different question than the one shown
    /// (or the attempt is already complete).
    WrongQuestion,
}

/// A player's in-flight run through one category's questions.
///
/// The attempt is pure state: it knows nothing about storage or HTTP.
/// Question order is fixed at start time and never reshuffled, so a
/// resumed attempt continues exactly where it left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    pub category_id: Uuid,
    pub question_ids: Vec<Uuid>,
    pub position: usize,
    pub score: i32,
}

impl QuizAttempt {
    /// Start a fresh attempt over the given questions in random order.
    pub fn start<R: Rng>(category_id: Uuid, mut question_ids: Vec<Uuid>, rng: &mut R) -> Self {
        question_ids.shuffle(rng);
        Self {
            category_id,
            question_ids,
            position: 0,
            score: 0,
        }
    }

    /// Whether this attempt continues for the requested category.
    /// A request for any other category discards it and starts fresh.
    pub fn resumes(&self, category_id: Uuid) -> bool {
        self.category_id == category_id
    }

    /// The question the player should see next, or `None` when done.
    pub fn current_question_id(&self) -> Option<Uuid> {
        self.question_ids.get(self.position).copied()
    }

    /// Grade a resolved answer against the question currently shown.
    /// `marks` is the current question's point value.
    pub fn grade_answer(
        &self,
        answer_question_id: Uuid,
        is_correct: bool,
        marks: i32,
    ) -> AnswerGrade {
        match self.current_question_id() {
            Some(current) if current == answer_question_id => {
                AnswerGrade::Earned(if is_correct { marks } else { 0 })
            }
            _ => AnswerGrade::WrongQuestion,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.question_ids.len()
    }

    pub fn total_questions(&self) -> usize {
        self.question_ids.len()
    }

    /// 1-based number of the question currently shown. Clamped to the
    /// total so a completed attempt reports the last question number;
    /// zero for an attempt with no questions.
    pub fn question_number(&self) -> usize {
        (self.position + 1).min(self.question_ids.len())
    }

    /// Record the outcome of answering the current question and advance.
    /// `earned` is the marks awarded (zero for a wrong or skipped answer).
    /// Has no effect once the attempt is complete.
    pub fn record_answer(&mut self, earned: i32) {
        if self.is_complete() {
            return;
        }
        self.score += earned;
        self.position += 1;
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_score(self.score, self.question_ids.len() as i32)
    }
}

/// Final result of an attempt, with the derived presentation values.
/// The percentage denominator is the number of questions in the attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub score: i32,
    pub total_questions: i32,
    /// Percentage rounded to the nearest whole number.
    pub percentage: i64,
    /// Length of the filled arc on a ring of [`RESULT_RING_RADIUS`],
    /// computed from the unrounded percentage.
    pub stroke_dasharray: f64,
}

impl ScoreSummary {
    pub fn from_score(score: i32, total_questions: i32) -> Self {
        let raw = if total_questions > 0 {
            (score as f64 / total_questions as f64) * 100.0
        } else {
            0.0
        };
        let circumference = 2.0 * std::f64::consts::PI * RESULT_RING_RADIUS;
        Self {
            score,
            total_questions,
            // Ties round to even, so 12.5% reports as 12 and 37.5% as 38
            percentage: raw.round_ties_even() as i64,
            stroke_dasharray: (raw / 100.0) * circumference,
        }
    }

    /// Summary for a player who has no recorded attempt.
    pub fn zero() -> Self {
        Self::from_score(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn start_shuffles_without_losing_questions() {
        let question_ids = ids(20);
        let mut rng = StdRng::seed_from_u64(7);
        let attempt = QuizAttempt::start(Uuid::new_v4(), question_ids.clone(), &mut rng);

        let original: HashSet<Uuid> = question_ids.iter().copied().collect();
        let shuffled: HashSet<Uuid> = attempt.question_ids.iter().copied().collect();
        assert_eq!(original, shuffled);
        assert_eq!(attempt.question_ids.len(), 20);
        assert_eq!(attempt.position, 0);
        assert_eq!(attempt.score, 0);
    }

    #[test]
    fn different_seeds_produce_different_orders() {
        let question_ids = ids(20);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let a = QuizAttempt::start(Uuid::new_v4(), question_ids.clone(), &mut rng_a);
        let b = QuizAttempt::start(Uuid::new_v4(), question_ids, &mut rng_b);
        assert_ne!(a.question_ids, b.question_ids);
    }

    #[test]
    fn empty_category_is_immediately_complete() {
        let mut rng = StdRng::seed_from_u64(0);
        let attempt = QuizAttempt::start(Uuid::new_v4(), Vec::new(), &mut rng);
        assert!(attempt.is_complete());
        assert_eq!(attempt.current_question_id(), None);
        assert_eq!(attempt.total_questions(), 0);
        assert_eq!(attempt.question_number(), 0);
    }

    #[test]
    fn record_answer_advances_and_accumulates_marks() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut attempt = QuizAttempt::start(Uuid::new_v4(), ids(3), &mut rng);

        let first = attempt.current_question_id().unwrap();
        attempt.record_answer(2);
        assert_eq!(attempt.score, 2);
        assert_eq!(attempt.position, 1);
        assert_ne!(attempt.current_question_id(), Some(first));

        attempt.record_answer(0);
        assert_eq!(attempt.score, 2);

        attempt.record_answer(1);
        assert_eq!(attempt.score, 3);
        assert!(attempt.is_complete());
        assert_eq!(attempt.current_question_id(), None);
    }

    #[test]
    fn record_answer_is_noop_once_complete() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut attempt = QuizAttempt::start(Uuid::new_v4(), ids(1), &mut rng);
        attempt.record_answer(1);
        assert!(attempt.is_complete());

        attempt.record_answer(5);
        assert_eq!(attempt.score, 1);
        assert_eq!(attempt.position, 1);
    }

    #[test]
    fn resumes_only_for_the_same_category() {
        let category_id = Uuid::new_v4();
        let mut rng = StdRng::seed_from_u64(6);
        let attempt = QuizAttempt::start(category_id, ids(3), &mut rng);

        assert!(attempt.resumes(category_id));
        assert!(!attempt.resumes(Uuid::new_v4()));
    }

    #[test]
    fn switching_category_discards_prior_progress() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut attempt = QuizAttempt::start(Uuid::new_v4(), ids(3), &mut rng);
        attempt.record_answer(2);
        attempt.record_answer(1);

        let other_category = Uuid::new_v4();
        assert!(!attempt.resumes(other_category));

        let fresh = QuizAttempt::start(other_category, ids(2), &mut rng);
        assert_eq!(fresh.position, 0);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.category_id, other_category);
    }

    #[test]
    fn correct_answer_earns_the_question_marks() {
        let mut rng = StdRng::seed_from_u64(8);
        let attempt = QuizAttempt::start(Uuid::new_v4(), ids(3), &mut rng);
        let current = attempt.current_question_id().unwrap();

        assert_eq!(
            attempt.grade_answer(current, true, 5),
            AnswerGrade::Earned(5)
        );
    }

    #[test]
    fn incorrect_answer_earns_nothing() {
        let mut rng = StdRng::seed_from_u64(8);
        let attempt = QuizAttempt::start(Uuid::new_v4(), ids(3), &mut rng);
        let current = attempt.current_question_id().unwrap();

        assert_eq!(
            attempt.grade_answer(current, false, 5),
            AnswerGrade::Earned(0)
        );
    }

    #[test]
    fn answer_for_another_question_is_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        let attempt = QuizAttempt::start(Uuid::new_v4(), ids(3), &mut rng);

        // correctness cannot rescue an answer from the wrong question
        assert_eq!(
            attempt.grade_answer(Uuid::new_v4(), true, 5),
            AnswerGrade::WrongQuestion
        );
    }

    #[test]
    fn grading_a_completed_attempt_is_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut attempt = QuizAttempt::start(Uuid::new_v4(), ids(1), &mut rng);
        let only_question = attempt.current_question_id().unwrap();
        attempt.record_answer(1);

        assert_eq!(
            attempt.grade_answer(only_question, true, 1),
            AnswerGrade::WrongQuestion
        );
    }

    #[test]
    fn question_number_is_one_based_and_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut attempt = QuizAttempt::start(Uuid::new_v4(), ids(2), &mut rng);
        assert_eq!(attempt.question_number(), 1);
        attempt.record_answer(1);
        assert_eq!(attempt.question_number(), 2);
        attempt.record_answer(1);
        assert_eq!(attempt.question_number(), 2);
    }

    #[test]
    fn summary_half_score_is_fifty_percent() {
        let summary = ScoreSummary::from_score(10, 20);
        assert_eq!(summary.percentage, 50);
        let expected = 0.5 * 2.0 * std::f64::consts::PI * RESULT_RING_RADIUS;
        assert!((summary.stroke_dasharray - expected).abs() < 1e-9);
    }

    #[test]
    fn summary_rounds_percentage_to_nearest_whole() {
        assert_eq!(ScoreSummary::from_score(1, 3).percentage, 33);
        assert_eq!(ScoreSummary::from_score(2, 3).percentage, 67);
    }

    #[test]
    fn summary_rounds_half_to_even() {
        // 12.5% -> 12, 37.5% -> 38
        assert_eq!(ScoreSummary::from_score(1, 8).percentage, 12);
        assert_eq!(ScoreSummary::from_score(3, 8).percentage, 38);
    }

    #[test]
    fn summary_full_score_covers_whole_ring() {
        let summary = ScoreSummary::from_score(7, 7);
        assert_eq!(summary.percentage, 100);
        let circumference = 2.0 * std::f64::consts::PI * RESULT_RING_RADIUS;
        assert!((summary.stroke_dasharray - circumference).abs() < 1e-9);
    }

    #[test]
    fn summary_with_no_questions_is_zero() {
        let summary = ScoreSummary::zero();
        assert_eq!(summary.score, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.stroke_dasharray, 0.0);
    }

    #[test]
    fn summary_stroke_uses_unrounded_percentage() {
        // 1/3 rounds to 33% but the arc should reflect 33.33..%
        let summary = ScoreSummary::from_score(1, 3);
        let circumference = 2.0 * std::f64::consts::PI * RESULT_RING_RADIUS;
        let expected = (1.0 / 3.0) * circumference;
        assert!((summary.stroke_dasharray - expected).abs() < 1e-9);
    }
}
