//! Pairwise answer similarity per question.
//!
//! Rows are one-directional: `movie -> reading` does not imply
//! `reading -> movie`. Keep entries exactly as listed; persisted scores were
//! produced from this table.

/// Similarity row for one answer code: the answer itself plus the weights it
/// grants to other codes of the same question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerWeights {
    pub answer: &'static str,
    pub similar: &'static [(&'static str, f64)],
}

impl AnswerWeights {
    /// Weight granted to `other`; codes missing from the row score zero.
    pub fn weight_to(&self, other: &str) -> f64 {
        self.similar
            .iter()
            .find(|(code, _)| *code == other)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }
}

const fn row(answer: &'static str, similar: &'static [(&'static str, f64)]) -> AnswerWeights {
    AnswerWeights { answer, similar }
}

pub const MATCH_WEIGHTS: &[(&str, &[AnswerWeights])] = &[
    (
        "q1",
        &[
            row("reading", &[("reading", 1.0), ("movie", 0.8), ("cafe", 0.6)]),
            row("outdoor", &[("outdoor", 1.0), ("sports", 0.9), ("activity", 0.8)]),
            row("cafe", &[("cafe", 1.0), ("reading", 0.7), ("movie", 0.6)]),
            row("cooking", &[("cooking", 1.0), ("home", 0.9)]),
            row("music", &[("music", 1.0), ("concert", 0.9)]),
            row("movie", &[("movie", 1.0), ("reading", 0.8), ("art", 0.7)]),
        ],
    ),
    (
        "q2",
        &[
            row("pop", &[("pop", 1.0)]),
            row("indie", &[("indie", 1.0), ("folk", 0.8), ("art", 0.7)]),
            row("jazz", &[("jazz", 1.0), ("classical", 0.8)]),
            row("classical", &[("classical", 1.0), ("jazz", 0.8)]),
            row("rock", &[("rock", 1.0)]),
            row("folk", &[("folk", 1.0), ("indie", 0.8)]),
        ],
    ),
    (
        "q3",
        &[
            row("dinner", &[("dinner", 1.0), ("cafe", 0.7)]),
            row("walk", &[("walk", 1.0), ("cafe", 0.8)]),
            row("activity", &[("activity", 1.0), ("outdoor", 0.9)]),
            row("cafe", &[("cafe", 1.0), ("walk", 0.8), ("dinner", 0.7)]),
            row("concert", &[("concert", 1.0), ("music", 0.9)]),
            row("home", &[("home", 1.0), ("cooking", 0.9)]),
        ],
    ),
    (
        "q4",
        &[
            row("stable", &[("stable", 1.0), ("mindful", 0.8)]),
            row("adventure", &[("adventure", 1.0), ("active", 0.9)]),
            row("balanced", &[("balanced", 1.0), ("stable", 0.8)]),
            row("artistic", &[("artistic", 1.0), ("mindful", 0.8)]),
            row("active", &[("active", 1.0), ("adventure", 0.9)]),
            row("mindful", &[("mindful", 1.0), ("artistic", 0.8), ("stable", 0.7)]),
        ],
    ),
    (
        "q5",
        &[
            row("reading", &[("reading", 1.0), ("art", 0.7)]),
            row("sports", &[("sports", 1.0), ("outdoor", 0.9)]),
            row("art", &[("art", 1.0), ("reading", 0.7), ("music", 0.8)]),
            row("music", &[("music", 1.0), ("art", 0.8)]),
            row("cooking", &[("cooking", 1.0)]),
            row("gaming", &[("gaming", 1.0)]),
        ],
    ),
    (
        "q6",
        &[
            row("career", &[("career", 1.0), ("balance", 0.8)]),
            row("family", &[("family", 1.0), ("balance", 0.9)]),
            row("travel", &[("travel", 1.0), ("adventure", 0.9)]),
            row("freedom", &[("freedom", 1.0), ("travel", 0.8)]),
            row("balance", &[("balance", 1.0), ("family", 0.9), ("career", 0.8)]),
            row("growth", &[("growth", 1.0), ("career", 0.8)]),
        ],
    ),
    (
        "q7",
        &[
            row("deep", &[("deep", 1.0), ("written", 0.8)]),
            row("daily", &[("daily", 1.0), ("humor", 0.8)]),
            row("humor", &[("humor", 1.0), ("daily", 0.8)]),
            row("written", &[("written", 1.0), ("deep", 0.8)]),
            row("direct", &[("direct", 1.0), ("action", 0.8)]),
            row("action", &[("action", 1.0), ("direct", 0.8)]),
        ],
    ),
    (
        "q8",
        &[
            row("honesty", &[("honesty", 1.0), ("loyalty", 0.9)]),
            row("humor", &[("humor", 1.0)]),
            row("kindness", &[("kindness", 1.0)]),
            row("intelligence", &[("intelligence", 1.0)]),
            row("loyalty", &[("loyalty", 1.0), ("honesty", 0.9)]),
            row("freedom", &[("freedom", 1.0)]),
        ],
    ),
    (
        "q9",
        &[
            row("romance", &[("romance", 1.0), ("drama", 0.8)]),
            row("drama", &[("drama", 1.0), ("art", 0.9), ("romance", 0.8)]),
            row("scifi", &[("scifi", 1.0)]),
            row("documentary", &[("documentary", 1.0)]),
            row("comedy", &[("comedy", 1.0)]),
            row("art", &[("art", 1.0), ("drama", 0.9)]),
        ],
    ),
    (
        "q10",
        &[
            row("soulmate", &[("soulmate", 1.0), ("growth", 0.8)]),
            row("companionship", &[("companionship", 1.0), ("stable", 0.9)]),
            row("passion", &[("passion", 1.0)]),
            row("growth", &[("growth", 1.0), ("soulmate", 0.8)]),
            row("fun", &[("fun", 1.0)]),
            row("stable", &[("stable", 1.0), ("companionship", 0.9)]),
        ],
    ),
];

/// Similarity rows for a question key, if the question is recognized.
pub fn weights_for(question: &str) -> Option<&'static [AnswerWeights]> {
    MATCH_WEIGHTS
        .iter()
        .find(|(key, _)| *key == question)
        .map(|(_, rows)| *rows)
}

/// Similarity row for one answer of one question.
pub fn answer_weights(question: &str, answer: &str) -> Option<&'static AnswerWeights> {
    weights_for(question)?.iter().find(|row| row.answer == answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_answer_fully_matches_itself() {
        for (question, rows) in MATCH_WEIGHTS {
            for row in rows.iter() {
                assert_eq!(row.weight_to(row.answer), 1.0, "{question}/{}", row.answer);
            }
        }
    }

    #[test]
    fn weights_stay_within_unit_interval() {
        for (_, rows) in MATCH_WEIGHTS {
            for row in rows.iter() {
                assert!(row
                    .similar
                    .iter()
                    .all(|(_, weight)| (0.0..=1.0).contains(weight)));
            }
        }
    }

    #[test]
    fn asymmetric_rows_are_kept() {
        let reading = answer_weights("q1", "reading").expect("reading row");
        let cafe = answer_weights("q1", "cafe").expect("cafe row");
        assert_eq!(reading.weight_to("cafe"), 0.6);
        assert_eq!(cafe.weight_to("reading"), 0.7);

        let art = answer_weights("q5", "art").expect("art row");
        let reading = answer_weights("q5", "reading").expect("reading row");
        assert_eq!(art.weight_to("music"), 0.8);
        assert_eq!(reading.weight_to("music"), 0.0);
    }

    #[test]
    fn unknown_lookups_return_none() {
        assert!(weights_for("q11").is_none());
        assert!(answer_weights("q1", "gaming").is_none());
    }
}
