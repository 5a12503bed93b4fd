use {
    bevy::{platform::collections::HashSet, prelude::*},
    skill_components::QuizQuestion,
    skill_resources::{QuizBank, SkillCatalog, SkillRng},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { skill_id: String },
    Incorrect { skill_id: String },
    NoActiveQuestion,
}

/// One open quiz. Lives on the session entity.
#[derive(Component, Debug, Clone, Default)]
pub struct QuizSession {
    /// Index into the [`QuizBank`].
    current: Option<usize>,
    score: u32,
    wrong_answers: u32,
    /// Targets answered correctly whose unlock may not have landed in the catalog yet.
    solved: HashSet<String>,
}

impl QuizSession {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_question<'a>(&self, bank: &'a QuizBank) -> Option<&'a QuizQuestion> {
        bank.get(self.current?)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    /// Picks a random question whose skill is still locked. `None` once nothing is left.
    pub fn advance(&mut self, bank: &QuizBank, catalog: &SkillCatalog, rng: &mut SkillRng) -> Option<usize> {
        let candidates: Vec<usize> = bank
            .iter()
            .enumerate()
            .filter(|(_, question)| {
                catalog.is_locked(&question.skill_id) && !self.solved.contains(&question.skill_id)
            })
            .map(|(index, _)| index)
            .collect();

        self.current = rng.pick(&candidates).copied();
        self.current
    }

    pub fn submit(&mut self, bank: &QuizBank, option: &str) -> AnswerOutcome {
        let Some(question) = self.current_question(bank) else {
            return AnswerOutcome::NoActiveQuestion;
        };
        let skill_id = question.skill_id.clone();

        if question.is_correct(option) {
            self.score += 1;
            self.current = None;
            self.solved.insert(skill_id.clone());
            AnswerOutcome::Correct { skill_id }
        } else {
            self.wrong_answers += 1;
            AnswerOutcome::Incorrect { skill_id }
        }
    }
}
