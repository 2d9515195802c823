use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The ten questions of the onboarding questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
}

impl QuestionId {
    pub fn ordered() -> [QuestionId; 10] {
        [
            QuestionId::Q1,
            QuestionId::Q2,
            QuestionId::Q3,
            QuestionId::Q4,
            QuestionId::Q5,
            QuestionId::Q6,
            QuestionId::Q7,
            QuestionId::Q8,
            QuestionId::Q9,
            QuestionId::Q10,
        ]
    }

    /// Wire key used in stored answer records (`"q1"` .. `"q10"`).
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
            QuestionId::Q4 => "q4",
            QuestionId::Q5 => "q5",
            QuestionId::Q6 => "q6",
            QuestionId::Q7 => "q7",
            QuestionId::Q8 => "q8",
            QuestionId::Q9 => "q9",
            QuestionId::Q10 => "q10",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|question| question.key() == raw)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One user's questionnaire answers, keyed by question identifier.
///
/// Keys keep the order in which they were inserted (or appeared in the source
/// JSON object), and scoring walks them in that order. Unknown keys are kept
/// as-is so callers can decide whether to validate them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionnaireAnswers {
    entries: Vec<(String, String)>,
}

impl QuestionnaireAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an answer. Replacing keeps the key's original position.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        match self.entries.iter_mut().find(|(key, _)| *key == question) {
            Some(entry) => entry.1 = answer,
            None => self.entries.push((question, answer)),
        }
    }

    pub fn with(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.insert(question, answer);
        self
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == question)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn answer(&self, question: QuestionId) -> Option<&str> {
        self.get(question.key())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, answer)| (key.as_str(), answer.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QuestionnaireAnswers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = QuestionnaireAnswers::new();
        for (question, answer) in iter {
            answers.insert(question, answer);
        }
        answers
    }
}

impl Serialize for QuestionnaireAnswers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (question, answer) in &self.entries {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuestionnaireAnswers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AnswersVisitor;

        impl<'de> Visitor<'de> for AnswersVisitor {
            type Value = QuestionnaireAnswers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of question keys to answer codes")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut answers = QuestionnaireAnswers::new();
                while let Some((question, answer)) = access.next_entry::<String, String>()? {
                    answers.insert(question, answer);
                }
                Ok(answers)
            }
        }

        deserializer.deserialize_map(AnswersVisitor)
    }
}
