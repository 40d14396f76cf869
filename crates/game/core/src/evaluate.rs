//! Round evaluation: did the player guess the right item's metric correctly?

/// The player's guess about the right item relative to the left one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Choice {
    Higher,
    Lower,
}

/// Outcome of a round, keeping ties distinct because they pace differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Both metrics are equal. Always scored as correct.
    Tie,
    Correct,
    Incorrect,
}

impl Verdict {
    /// Judges a choice. An absent metric orders below every present one.
    pub fn judge(left: Option<u64>, right: Option<u64>, choice: Choice) -> Self {
        if left == right {
            return Verdict::Tie;
        }

        let correct = match choice {
            Choice::Higher => right > left,
            Choice::Lower => right < left,
        };

        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub const fn is_correct(self) -> bool {
        matches!(self, Verdict::Tie | Verdict::Correct)
    }

    pub const fn is_tie(self) -> bool {
        matches!(self, Verdict::Tie)
    }
}

/// Returns true if `choice` is correct for the given metrics.
///
/// Ties always favor the player, whatever they chose.
pub fn evaluate(left: Option<u64>, right: Option<u64>, choice: Choice) -> bool {
    Verdict::judge(left, right, choice).is_correct()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u64; 8] = [0, 1, 2, 79, 80, 81, 1_000_000, u64::MAX];

    #[test]
    fn ties_are_always_correct() {
        for value in SAMPLES {
            for choice in [Choice::Higher, Choice::Lower] {
                assert!(evaluate(Some(value), Some(value), choice));
                assert_eq!(
                    Verdict::judge(Some(value), Some(value), choice),
                    Verdict::Tie
                );
            }
        }
        assert!(evaluate(None, None, Choice::Lower));
    }

    #[test]
    fn strict_orderings_follow_the_choice() {
        for left in SAMPLES {
            for right in SAMPLES {
                if left == right {
                    continue;
                }
                assert_eq!(evaluate(Some(left), Some(right), Choice::Higher), right > left);
                assert_eq!(evaluate(Some(left), Some(right), Choice::Lower), right < left);
            }
        }
    }

    #[test]
    fn scenario_examples() {
        assert!(evaluate(Some(100), Some(250), Choice::Higher));
        assert!(!evaluate(Some(300), Some(120), Choice::Higher));
        assert!(evaluate(Some(80), Some(80), Choice::Lower));
    }

    #[test]
    fn absent_metric_orders_lowest() {
        assert!(evaluate(Some(5), None, Choice::Lower));
        assert!(!evaluate(Some(5), None, Choice::Higher));
        assert!(evaluate(None, Some(0), Choice::Higher));
    }

    #[test]
    fn choice_parses_case_insensitively() {
        assert_eq!("Higher".parse::<Choice>().ok(), Some(Choice::Higher));
        assert_eq!("LOWER".parse::<Choice>().ok(), Some(Choice::Lower));
        assert!("sideways".parse::<Choice>().is_err());
        assert_eq!(Choice::Lower.to_string(), "lower");
    }
}
