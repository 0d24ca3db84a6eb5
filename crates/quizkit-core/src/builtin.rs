//! The question bank that ships with quizkit.

use crate::error::InvalidQuestion;
use crate::model::{Question, QuestionBank};
use crate::traits::QuestionProvider;

/// Identifier of the built-in bank.
pub const BUILTIN_BANK_ID: &str = "child-maltreatment";

/// Provider for the built-in bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestions;

impl QuestionProvider for BuiltinQuestions {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> anyhow::Result<QuestionBank> {
        Ok(builtin_bank()?)
    }
}

/// Child maltreatment facts quiz.
pub fn builtin_bank() -> Result<QuestionBank, InvalidQuestion> {
    let questions = vec![
        question(
            "Neglect is the most common form of child maltreatment in the U.S.",
            &["True", "False"],
            "True",
            "Neglect accounts for approximately 76% of substantiated cases of child maltreatment.",
        )?,
        question(
            "Which age group has the highest victimization rate in the U.S.?",
            &[
                "Infants under 1",
                "Children 1-3",
                "School-aged children (6-12)",
                "Teenagers (13-17)",
            ],
            "Infants under 1",
            "Infants under 1 year old have the highest rate of victimization at 24.5 per 1,000 children.",
        )?,
        question(
            "Which demographic group faces the highest rates of substantiated maltreatment?",
            &[
                "White children",
                "African American children",
                "Hispanic children",
                "American Indian/Alaska Native children",
            ],
            "American Indian/Alaska Native children",
            "American Indian/Alaska Native children have the highest victim rate at about 14.3 per 1,000 children.",
        )?,
        question(
            "What percentage of perpetrators of child maltreatment are parents?",
            &["Around 30%", "Around 50%", "Around 75%", "Around 90%"],
            "Around 75%",
            "Approximately 77.5% of perpetrators are parents of the victim.",
        )?,
        question(
            "In the most recent data, child maltreatment fatalities have:",
            &[
                "Increased significantly",
                "Remained mostly stable",
                "Decreased significantly",
                "Fluctuated with no clear trend",
            ],
            "Increased significantly",
            "Child fatalities due to maltreatment have increased by about 17% over the past decade.",
        )?,
        question(
            "Which is NOT typically considered a form of child maltreatment in official statistics?",
            &[
                "Physical abuse",
                "Emotional abuse",
                "Academic neglect",
                "Medical neglect",
            ],
            "Academic neglect",
            "While educational neglect is tracked in some states, 'academic neglect' is not a standard category in federal maltreatment statistics.",
        )?,
        question(
            "What factor has the strongest correlation with increased risk of child maltreatment?",
            &[
                "Geographic location",
                "Socioeconomic factors",
                "Parental age",
                "Family size",
            ],
            "Socioeconomic factors",
            "Economic stress, poverty, and lack of social supports are strongly correlated with increased risk of child maltreatment.",
        )?,
    ];
    QuestionBank::new(
        BUILTIN_BANK_ID,
        "Child Maltreatment Quiz",
        "Statistics, risk factors, and prevention of child maltreatment.",
        questions,
    )
}

fn question(
    prompt: &str,
    options: &[&str],
    answer: &str,
    explanation: &str,
) -> Result<Question, InvalidQuestion> {
    Question::new(
        prompt,
        options.iter().map(|o| o.to_string()).collect(),
        answer,
        explanation,
    )
}
