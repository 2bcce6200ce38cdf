//! Self-assessment data: the question table, answers, and recommendation records.

use std::collections::BTreeMap;

use serde::Serialize;

use super::logic::AssessmentEngine;
use crate::widgets::Scroll;

/// Informational tag on a question. Not used by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    WellBeing,
    Learning,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::WellBeing => "bem-estar",
            Category::Learning => "aprendizado",
        }
    }
}

pub const OPTION_COUNT: usize = 5;

#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub category: Category,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

pub const QUESTION_COUNT: usize = 4;

/// Asked in this order; a question's index is its position here.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "Como você avalia seu nível de estresse no trabalho atualmente?",
        options: ["Muito baixo", "Baixo", "Moderado", "Alto", "Muito alto"],
        category: Category::WellBeing,
    },
    Question {
        prompt: "Com que frequência você pratica atividades para relaxar?",
        options: [
            "Diariamente",
            "Algumas vezes na semana",
            "Raramente",
            "Quase nunca",
            "Nunca",
        ],
        category: Category::WellBeing,
    },
    Question {
        prompt: "Qual seu interesse em aprender sobre mindfulness e meditação?",
        options: [
            "Muito interessado",
            "Interessado",
            "Neutro",
            "Pouco interessado",
            "Nada interessado",
        ],
        category: Category::Learning,
    },
    Question {
        prompt: "Como você avalia seu equilíbrio entre vida pessoal e profissional?",
        options: ["Excelente", "Bom", "Regular", "Ruim", "Muito ruim"],
        category: Category::WellBeing,
    },
];

/// Selected option per question index.
///
/// `insert` stores whatever it is given; membership in the question's
/// option set is checked by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<usize, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous answer, if any.
    pub fn insert(&mut self, index: usize, option: impl Into<String>) -> Option<String> {
        self.entries.insert(index, option.into())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Question indices without an answer, ascending.
    pub fn missing(&self) -> Vec<usize> {
        (0..QUESTION_COUNT)
            .filter(|i| !self.entries.contains_key(i))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(|(&i, s)| (i, s.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (index, option) in iter {
            set.insert(index, option);
        }
        set
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub priority: Priority,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Progress through the questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// Screen state: the engine plus which question is on screen and, once
/// every question is answered, the evaluated recommendations.
pub struct AssessmentState {
    pub engine: AssessmentEngine,
    /// Index of the question being shown.
    pub current: usize,
    pub results: Option<Vec<Recommendation>>,
    /// Vertical scroll of the results view, in visual rows.
    pub scroll: Scroll,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self {
            engine: AssessmentEngine::new(),
            current: 0,
            results: None,
            scroll: Scroll::default(),
        }
    }

    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.current.min(QUESTION_COUNT - 1)]
    }

    /// Percentage shown in the progress bar while question `current` is on screen.
    pub fn progress_percent(&self) -> u16 {
        ((self.current + 1) * 100 / QUESTION_COUNT) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_distinct_options() {
        for q in &QUESTIONS {
            for (i, a) in q.options.iter().enumerate() {
                for b in &q.options[i + 1..] {
                    assert_ne!(a, b, "duplicate option in {:?}", q.prompt);
                }
            }
        }
    }

    #[test]
    fn categories() {
        let tags: Vec<&str> = QUESTIONS.iter().map(|q| q.category.label()).collect();
        assert_eq!(tags, ["bem-estar", "bem-estar", "aprendizado", "bem-estar"]);
    }

    #[test]
    fn has_option_is_exact_match() {
        assert!(QUESTIONS[0].has_option("Muito alto"));
        assert!(!QUESTIONS[0].has_option("muito alto"));
        assert!(!QUESTIONS[0].has_option("Muito alto "));
    }

    #[test]
    fn answer_set_missing_is_sorted() {
        let answers: AnswerSet = [(2, "Neutro")].into_iter().collect();
        assert_eq!(answers.missing(), vec![0, 1, 3]);
    }

    #[test]
    fn answer_set_insert_overwrites() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert(0, "Baixo"), None);
        assert_eq!(answers.insert(0, "Alto").as_deref(), Some("Baixo"));
        assert_eq!(answers.get(0), Some("Alto"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn progress_percent_per_question() {
        let mut s = AssessmentState::new();
        let mut seen = Vec::new();
        for i in 0..QUESTION_COUNT {
            s.current = i;
            seen.push(s.progress_percent());
        }
        assert_eq!(seen, [25, 50, 75, 100]);
    }

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::High.label(), "Alta");
        assert_eq!(Priority::Medium.label(), "Média");
    }

    #[test]
    fn recommendation_serializes_priority_lowercase() {
        let rec = Recommendation {
            title: "Meditação Guiada",
            priority: Priority::Medium,
            icon: "😌",
            description: "x",
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""priority":"medium""#), "{json}");
    }
}
