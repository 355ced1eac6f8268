use std::ops::RangeInclusive;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::structs::evaluate::Scores;

/// 评分使用的随机数来源
pub trait ScoreSource {
    /// 在闭区间内均匀取一个整数
    fn next_in_range(&mut self, range: RangeInclusive<u8>) -> u8;
}

impl ScoreSource for ThreadRng {
    fn next_in_range(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.gen_range(range)
    }
}

impl ScoreSource for StdRng {
    fn next_in_range(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.gen_range(range)
    }
}

pub const CONFIDENCE_RANGE: RangeInclusive<u8> = 6..=9;
pub const CONTENT_RANGE: RangeInclusive<u8> = 5..=9;
pub const COMMUNICATION_RANGE: RangeInclusive<u8> = 6..=8;
pub const EYE_CONTACT_RANGE: RangeInclusive<u8> = 5..=8;

/// 低于该分数的维度会得到对应建议
pub const SUGGESTION_THRESHOLD: u8 = 7;

pub const CONFIDENCE_SUGGESTION: &str = "Work on building confidence through practice";
pub const CONTENT_SUGGESTION: &str = "Focus on providing more specific examples";
pub const COMMUNICATION_SUGGESTION: &str = "Practice speaking more clearly and at appropriate pace";
pub const EYE_CONTACT_SUGGESTION: &str = "Maintain better eye contact with the camera";
pub const PRAISE: &str = "Great performance! Keep practicing to maintain your skills";

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scores: Scores,
    pub suggestions: Vec<&'static str>,
}

// 分数与回答内容无关，只取决于随机数
pub fn evaluate<S: ScoreSource + ?Sized>(source: &mut S) -> Evaluation {
    let confidence = source.next_in_range(CONFIDENCE_RANGE);
    let content = source.next_in_range(CONTENT_RANGE);
    let communication = source.next_in_range(COMMUNICATION_RANGE);
    let eye_contact = source.next_in_range(EYE_CONTACT_RANGE);

    let scores = Scores {
        confidence,
        content,
        communication,
        eye_contact,
        overall: overall_score([confidence, content, communication, eye_contact]),
    };
    let suggestions = suggestions_for(&scores);
    Evaluation { scores, suggestions }
}

/// 四项平均分保留一位小数，恰为.x5时向偶数舍入
pub fn overall_score(sub_scores: [u8; 4]) -> f64 {
    let sum: u32 = sub_scores.iter().map(|&s| u32::from(s)).sum();
    // 平均分*10的两倍，奇数即为恰好一半
    let doubled_tenths = sum * 5;
    let mut tenths = doubled_tenths / 2;
    if doubled_tenths % 2 == 1 && tenths % 2 == 1 {
        tenths += 1;
    }
    f64::from(tenths) / 10.0
}

pub fn suggestions_for(scores: &Scores) -> Vec<&'static str> {
    let dimensions = [
        (scores.confidence, CONFIDENCE_SUGGESTION),
        (scores.content, CONTENT_SUGGESTION),
        (scores.communication, COMMUNICATION_SUGGESTION),
        (scores.eye_contact, EYE_CONTACT_SUGGESTION),
    ];
    let mut suggestions: Vec<&'static str> = dimensions
        .iter()
        .filter(|(score, _)| *score < SUGGESTION_THRESHOLD)
        .map(|&(_, suggestion)| suggestion)
        .collect();
    if suggestions.is_empty() {
        suggestions.push(PRAISE);
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::{HashSet, VecDeque};

    /// 按顺序返回预设的分数
    struct Scripted(VecDeque<u8>);

    impl Scripted {
        fn new(values: [u8; 4]) -> Self {
            Scripted(values.into_iter().collect())
        }
    }

    impl ScoreSource for Scripted {
        fn next_in_range(&mut self, range: RangeInclusive<u8>) -> u8 {
            let value = self.0.pop_front().expect("script exhausted");
            assert!(range.contains(&value), "{} not in {:?}", value, range);
            value
        }
    }

    #[test]
    fn draws_dimensions_in_fixed_order() {
        let evaluation = evaluate(&mut Scripted::new([9, 5, 8, 6]));
        assert_eq!(evaluation.scores.confidence, 9);
        assert_eq!(evaluation.scores.content, 5);
        assert_eq!(evaluation.scores.communication, 8);
        assert_eq!(evaluation.scores.eye_contact, 6);
        assert_eq!(evaluation.scores.overall, 7.0);
        assert_eq!(
            evaluation.suggestions,
            vec![CONTENT_SUGGESTION, EYE_CONTACT_SUGGESTION]
        );
    }

    #[test]
    fn every_low_dimension_gets_a_suggestion() {
        let evaluation = evaluate(&mut Scripted::new([6, 5, 6, 5]));
        assert_eq!(
            evaluation.suggestions,
            vec![
                CONFIDENCE_SUGGESTION,
                CONTENT_SUGGESTION,
                COMMUNICATION_SUGGESTION,
                EYE_CONTACT_SUGGESTION
            ]
        );
    }

    #[test]
    fn praise_only_when_nothing_is_below_seven() {
        let evaluation = evaluate(&mut Scripted::new([7, 7, 7, 7]));
        assert_eq!(evaluation.suggestions, vec![PRAISE]);

        let evaluation = evaluate(&mut Scripted::new([7, 7, 7, 6]));
        assert_eq!(evaluation.suggestions, vec![EYE_CONTACT_SUGGESTION]);
    }

    #[test]
    fn overall_rounds_to_one_decimal() {
        assert_eq!(overall_score([6, 6, 6, 6]), 6.0);
        assert_eq!(overall_score([6, 6, 7, 7]), 6.5);
        // 6.25 / 6.75 恰好处于中间
        assert_eq!(overall_score([6, 6, 6, 7]), 6.2);
        assert_eq!(overall_score([6, 7, 7, 7]), 6.8);
        assert_eq!(overall_score([7, 7, 7, 8]), 7.2);
        assert_eq!(overall_score([9, 9, 8, 8]), 8.5);
        assert_eq!(overall_score([6, 5, 6, 5]), 5.5);
    }

    #[test]
    fn seeded_draws_respect_ranges_and_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [HashSet::new(), HashSet::new(), HashSet::new(), HashSet::new()];
        for _ in 0..1000 {
            let Evaluation { scores, suggestions } = evaluate(&mut rng);
            let subs = [
                scores.confidence,
                scores.content,
                scores.communication,
                scores.eye_contact,
            ];
            assert!(CONFIDENCE_RANGE.contains(&scores.confidence));
            assert!(CONTENT_RANGE.contains(&scores.content));
            assert!(COMMUNICATION_RANGE.contains(&scores.communication));
            assert!(EYE_CONTACT_RANGE.contains(&scores.eye_contact));

            let mean = subs.iter().map(|&s| f64::from(s)).sum::<f64>() / 4.0;
            assert!((scores.overall - mean).abs() <= 0.05 + f64::EPSILON);

            assert!(!suggestions.is_empty());
            let all_good = subs.iter().all(|&s| s >= SUGGESTION_THRESHOLD);
            assert_eq!(suggestions.contains(&PRAISE), all_good);

            for (set, value) in seen.iter_mut().zip(subs) {
                set.insert(value);
            }
        }
        // 每个取值都应出现过
        assert_eq!(seen[0].len(), 4);
        assert_eq!(seen[1].len(), 5);
        assert_eq!(seen[2].len(), 3);
        assert_eq!(seen[3].len(), 4);
    }

    #[test]
    fn same_seed_same_evaluation() {
        let a = evaluate(&mut StdRng::seed_from_u64(7));
        let b = evaluate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
