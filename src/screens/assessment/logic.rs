//! Self-assessment evaluation logic (no rendering or IO).
//!
//! Recommendations come from an ordered rule table. Each rule looks at one
//! question's answer and fires when it is one of the rule's trigger options.
//! All firing rules contribute, in table order. When nothing fires the
//! fixed fallback pair is returned instead.

use thiserror::Error;

use super::state::{AnswerSet, Phase, Priority, Recommendation, QUESTIONS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Evaluation was requested before every question had an answer.
    #[error("unanswered questions: {missing:?}")]
    IncompleteAnswers { missing: Vec<usize> },

    /// The answer is not one of the question's options.
    #[error("{option:?} is not an option of question {index}")]
    InvalidAnswer { index: usize, option: String },

    #[error("no question with index {0}")]
    UnknownQuestion(usize),
}

/// One row of the rule table.
pub struct Rule {
    pub question: usize,
    pub triggers: &'static [&'static str],
    pub recommendation: Recommendation,
}

impl Rule {
    fn fires(&self, answers: &AnswerSet) -> bool {
        answers
            .get(self.question)
            .is_some_and(|answer| self.triggers.contains(&answer))
    }
}

pub static RULES: [Rule; 4] = [
    Rule {
        question: 0,
        triggers: &["Alto", "Muito alto"],
        recommendation: Recommendation {
            title: "Gestão de Estresse",
            priority: Priority::High,
            icon: "💆",
            description: "Técnicas comprovadas para reduzir o estresse no trabalho",
        },
    },
    Rule {
        question: 1,
        triggers: &["Raramente", "Quase nunca", "Nunca"],
        recommendation: Recommendation {
            title: "Mindfulness Diário",
            priority: Priority::High,
            icon: "🧘",
            description: "Pratique mindfulness todos os dias para melhorar seu bem-estar",
        },
    },
    Rule {
        question: 2,
        triggers: &["Muito interessado", "Interessado"],
        recommendation: Recommendation {
            title: "Meditação Guiada",
            priority: Priority::Medium,
            icon: "😌",
            description: "Aprenda técnicas de meditação para acalmar a mente",
        },
    },
    Rule {
        question: 3,
        triggers: &["Ruim", "Muito ruim"],
        recommendation: Recommendation {
            title: "Equilíbrio Vida-Trabalho",
            priority: Priority::High,
            icon: "⚖️",
            description: "Estratégias para melhorar seu equilíbrio pessoal e profissional",
        },
    },
];

/// Returned, in this order, when no rule fires.
pub static FALLBACK: [Recommendation; 2] = [
    Recommendation {
        title: "Mindfulness Básico",
        priority: Priority::Medium,
        icon: "🧠",
        description: "Fundamentos do mindfulness para iniciantes",
    },
    Recommendation {
        title: "Autocuidado Digital",
        priority: Priority::Medium,
        icon: "📱",
        description: "Como usar a tecnologia a favor do seu bem-estar",
    },
];

fn check_answer(index: usize, option: &str) -> Result<(), AssessmentError> {
    let question = QUESTIONS
        .get(index)
        .ok_or(AssessmentError::UnknownQuestion(index))?;
    if question.has_option(option) {
        Ok(())
    } else {
        Err(AssessmentError::InvalidAnswer {
            index,
            option: option.to_string(),
        })
    }
}

/// Evaluate a complete answer set.
///
/// Never returns an empty list. Fails if any question is unanswered or an
/// answer is outside its question's options.
pub fn build_recommendations(answers: &AnswerSet) -> Result<Vec<Recommendation>, AssessmentError> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(AssessmentError::IncompleteAnswers { missing });
    }
    for (index, option) in answers.iter() {
        check_answer(index, option)?;
    }

    let fired: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| rule.fires(answers))
        .map(|rule| rule.recommendation)
        .collect();

    if fired.is_empty() {
        Ok(FALLBACK.to_vec())
    } else {
        Ok(fired)
    }
}

/// Owns the answers of one questionnaire run.
#[derive(Debug, Default)]
pub struct AssessmentEngine {
    answers: AnswerSet,
}

impl AssessmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the answer for question `index`, replacing any earlier one.
    /// Rejected answers leave the set untouched.
    pub fn record_answer(&mut self, index: usize, option: &str) -> Result<(), AssessmentError> {
        check_answer(index, option)?;
        self.answers.insert(index, option);
        Ok(())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.missing().is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.answers.is_empty() {
            Phase::NotStarted
        } else if self.is_complete() {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// Evaluate the engine's own answers.
    pub fn recommendations(&self) -> Result<Vec<Recommendation>, AssessmentError> {
        build_recommendations(&self.answers)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }
}

/// Number of rules whose condition holds. Used by tests to cross-check the table.
#[cfg(test)]
fn matching_rule_count(answers: &AnswerSet) -> usize {
    RULES.iter().filter(|r| r.fires(answers)).count()
}
