use assess_core::model::{AnswerValue, Catalog, Question, QuestionKind, ResponseFormat, Section};
use services::AssessmentProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub title: String,
    pub subtitle: &'static str,
    pub duration_label: &'static str,
    pub questions_label: String,
    pub sections_label: String,
    pub format_label: &'static str,
}

#[must_use]
pub fn map_intro(catalog: &Catalog) -> IntroVm {
    // Catalog titles read "<headline> - <subtitle>"; the intro shows the headline only.
    let title = catalog
        .title()
        .split(" - ")
        .next()
        .unwrap_or_else(|| catalog.title())
        .to_string();

    IntroVm {
        title,
        subtitle: "Collaboration & Communication Intelligence (CCI)",
        duration_label: "~25 minutes",
        questions_label: format!("{} questions", catalog.total_questions()),
        sections_label: format!("{} parts", catalog.section_count()),
        format_label: "Interactive scenarios",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressHeaderVm {
    pub section_title: String,
    pub section_description: String,
    pub question_label: String,
    pub percent_label: String,
    pub percent: u32,
}

#[must_use]
pub fn map_progress_header(section: &Section, progress: &AssessmentProgress) -> ProgressHeaderVm {
    let (number, total) = (progress.question_number, progress.total);
    ProgressHeaderVm {
        section_title: section.title().to_string(),
        section_description: section.description().to_string(),
        question_label: format!("Question {number} of {total}"),
        percent_label: format!("{}%", progress.percent),
        percent: progress.percent,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: String,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalePositionVm {
    pub value: i32,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionBodyVm {
    Choice {
        heading: Option<&'static str>,
        options: Vec<OptionVm>,
    },
    Scale {
        low_label: String,
        high_label: String,
        positions: Vec<ScalePositionVm>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: String,
    pub kind_label: &'static str,
    pub prompt: String,
    pub description: Option<String>,
    pub scenario: Option<String>,
    /// Quoted statement, with its heading when the kind has one.
    pub statement: Option<(Option<&'static str>, String)>,
    pub body: QuestionBodyVm,
    pub can_continue: bool,
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'a'.checked_add(i))
        .filter(u8::is_ascii_lowercase)
        .map_or('?', char::from)
}

#[must_use]
pub fn map_question_card(question: &Question, answer: Option<&AnswerValue>) -> QuestionCardVm {
    let body = match question.format() {
        ResponseFormat::Choice(options) => {
            let selected = answer.and_then(AnswerValue::as_choice);
            let heading = match question.kind() {
                QuestionKind::Scenario => Some("Your response:"),
                QuestionKind::ToneJudgment => Some("How would this likely be perceived?"),
                QuestionKind::MultipleChoice | QuestionKind::ScaleRating => None,
            };
            QuestionBodyVm::Choice {
                heading,
                options: options
                    .iter()
                    .enumerate()
                    .map(|(idx, option)| OptionVm {
                        id: option.id.to_string(),
                        letter: option_letter(idx),
                        text: option.text.clone(),
                        selected: selected == Some(&option.id),
                    })
                    .collect(),
            }
        }
        ResponseFormat::Scale(scale) => {
            let selected = answer.and_then(AnswerValue::as_scale);
            let labels = scale.labels();
            QuestionBodyVm::Scale {
                low_label: labels.first().cloned().unwrap_or_default(),
                high_label: labels.last().cloned().unwrap_or_default(),
                positions: scale
                    .positions()
                    .map(|(value, label)| ScalePositionVm {
                        value,
                        label: label.to_string(),
                        selected: selected == Some(value),
                    })
                    .collect(),
            }
        }
    };

    let statement_heading = match question.kind() {
        QuestionKind::ToneJudgment => Some("Your message:"),
        _ => None,
    };

    QuestionCardVm {
        id: question.id().to_string(),
        kind_label: question.kind().label(),
        prompt: question.prompt().to_string(),
        description: question.description().map(str::to_string),
        scenario: question.scenario().map(str::to_string),
        statement: question
            .statement()
            .map(|text| (statement_heading, text.to_string())),
        body,
        can_continue: answer.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::{OptionId, QuestionId};
    use services::builtin_catalog;

    #[test]
    fn intro_counts_catalog() {
        let catalog = builtin_catalog().unwrap();
        let intro = map_intro(&catalog);
        assert_eq!(intro.title, "Giving Constructive Feedback");
        assert_eq!(intro.questions_label, "19 questions");
        assert_eq!(intro.sections_label, "4 parts");
    }

    #[test]
    fn scenario_card_marks_selection() {
        let catalog = builtin_catalog().unwrap();
        let question = catalog
            .question(&QuestionId::new("clarity_scenario").unwrap())
            .unwrap();

        let unanswered = map_question_card(question, None);
        assert!(!unanswered.can_continue);
        assert_eq!(unanswered.kind_label, "Scenario");
        assert!(unanswered.scenario.is_some());

        let answer = AnswerValue::Choice(OptionId::new("b").unwrap());
        let card = map_question_card(question, Some(&answer));
        assert!(card.can_continue);
        let QuestionBodyVm::Choice { heading, options } = card.body else {
            panic!("expected choice body");
        };
        assert_eq!(heading, Some("Your response:"));
        let letters: Vec<char> = options.iter().map(|o| o.letter).collect();
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
        let selected: Vec<&str> = options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(selected, vec!["b"]);
    }

    #[test]
    fn scale_card_lists_positions() {
        let catalog = builtin_catalog().unwrap();
        let question = catalog
            .question(&QuestionId::new("feedback_comfort").unwrap())
            .unwrap();
        let card = map_question_card(question, Some(&AnswerValue::Scale(4)));
        assert_eq!(card.kind_label, "Agreement Scale");
        let QuestionBodyVm::Scale {
            low_label,
            high_label,
            positions,
        } = card.body
        else {
            panic!("expected scale body");
        };
        assert_eq!(low_label, "Very Uncomfortable");
        assert_eq!(high_label, "Very Comfortable");
        assert_eq!(positions.len(), 5);
        assert!(positions[3].selected);
        assert_eq!(positions[3].label, "Comfortable");
    }

    #[test]
    fn tone_card_has_message_heading() {
        let catalog = builtin_catalog().unwrap();
        let question = catalog
            .question(&QuestionId::new("tone_judgment").unwrap())
            .unwrap();
        let card = map_question_card(question, None);
        let message = "You really missed the mark here.".to_string();
        assert_eq!(card.statement, Some((Some("Your message:"), message)));
    }

    #[test]
    fn letters_beyond_z_fall_back() {
        assert_eq!(option_letter(0), 'a');
        assert_eq!(option_letter(25), 'z');
        assert_eq!(option_letter(26), '?');
    }
}
