use crate::error::GenAiError;
use fresher_fest_core::domain::activity::DEFAULT_QUESTION_COUNT;
use fresher_fest_core::{ActivityKind, ChallengeKind, Difficulty, GenerationParams};

/// Parameterized instruction text for one activity kind.
///
/// `body` may reference `{difficulty}`, `{number}` and `{type}`; the topic
/// clause references `{topic}` and is appended only when the parameter is
/// set, so an unset topic leaves no trace in the rendered instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    kind: ActivityKind,
    body: &'static str,
    topic_clause: Option<&'static str>,
}

impl PromptTemplate {
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Fill the template. Assumes `params` already passed
    /// `GenerationParams::check_for` for this template's kind.
    pub fn render(&self, params: &GenerationParams) -> String {
        let difficulty = params.difficulty.unwrap_or(Difficulty::Easy);
        let count = params.count.unwrap_or(DEFAULT_QUESTION_COUNT);
        let challenge = params.challenge.unwrap_or(ChallengeKind::Truth);

        let mut instruction = self
            .body
            .replace("{difficulty}", difficulty.as_str())
            .replace("{number}", &count.to_string())
            .replace("{type}", challenge.as_str());

        if let (Some(clause), Some(topic)) = (self.topic_clause, params.topic.as_deref()) {
            instruction.push(' ');
            instruction.push_str(&clause.replace("{topic}", topic));
        }

        instruction
    }
}

static TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        kind: ActivityKind::Riddle,
        body: "You are a riddle generator. Generate a fun and easy riddle suitable for \
               college freshers. Provide the riddle, its answer, and whether the riddle \
               is age appropriate. Ensure the riddle is appropriate for all audiences.",
        topic_clause: None,
    },
    PromptTemplate {
        kind: ActivityKind::IqTest,
        body: "You are an expert in creating IQ test questions. Generate an IQ test \
               question of {difficulty} difficulty. Make sure to provide both the \
               question and the answer. Optionally, you can provide an explanation \
               for the answer.",
        topic_clause: Some("The question should be on the topic of {topic}."),
    },
    PromptTemplate {
        kind: ActivityKind::TruthOrDare,
        body: "You are a creative game master specializing in creating engaging truth \
               and dare challenges for college students during their induction week. \
               Generate a {type} challenge that is appropriate, fun, and encourages \
               interaction among new students.",
        topic_clause: None,
    },
    PromptTemplate {
        kind: ActivityKind::TwoTruthsAndALie,
        body: "You are a creative assistant that generates \"Two Truths and a Lie\" \
               games for college freshers. The statements should be fun, interesting, \
               and believable. Generate two true statements and one lie, return the \
               three statements in a random order, and provide the index of the lie.",
        topic_clause: Some("The statements should be related to the topic of {topic}."),
    },
    PromptTemplate {
        kind: ActivityKind::GuessTheName,
        body: "You are a creative game master creating a \"Guess the Name\" challenge \
               for college students. The subject should be a well-known person, place, \
               or thing. Provide: the name to be guessed; a single intriguing sentence \
               that describes the subject without using any part of its name; exactly \
               three hints that make it progressively easier to guess; and a creative, \
               descriptive prompt for an AI image generator that describes an artistic \
               scene related to the subject rather than a direct depiction.",
        topic_clause: Some("The challenge should be related to the topic of: {topic}."),
    },
    PromptTemplate {
        kind: ActivityKind::RapidFire,
        body: "You are a creative question generator, skilled at creating engaging and \
               quick rapid fire questions. Generate {number} rapid fire questions. \
               Format each question as a simple string in a JSON array. No numbering \
               is required.",
        topic_clause: Some("The questions should be on the topic of {topic}."),
    },
    PromptTemplate {
        kind: ActivityKind::FlirtQuestion,
        body: "You are a playful icebreaker assistant for college orientation events. \
               Generate one light-hearted, respectful flirty question that new \
               students can ask each other.",
        topic_clause: Some("The question should be about {topic}."),
    },
];

/// Look up the instruction template for an activity kind
pub fn template_for(kind: ActivityKind) -> Result<&'static PromptTemplate, GenAiError> {
    TEMPLATES
        .iter()
        .find(|template| template.kind == kind)
        .ok_or_else(|| GenAiError::Configuration(format!("no prompt template for {kind}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_template() {
        for &kind in ActivityKind::all() {
            assert!(template_for(kind).is_ok(), "missing template for {kind}");
        }
    }

    #[test]
    fn test_topic_substituted_when_present() {
        let template = template_for(ActivityKind::RapidFire).unwrap();
        let params = GenerationParams::new().with_topic("space travel");

        let instruction = template.render(&params);
        assert!(instruction.contains("on the topic of space travel."));
    }

    #[test]
    fn test_topic_clause_omitted_when_absent() {
        let template = template_for(ActivityKind::RapidFire).unwrap();
        let instruction = template.render(&GenerationParams::new());

        assert!(!instruction.contains("on the topic of"));
        assert!(!instruction.contains("{topic}"));
    }

    #[test]
    fn test_count_and_difficulty_defaults() {
        let rapid = template_for(ActivityKind::RapidFire).unwrap();
        assert!(rapid
            .render(&GenerationParams::new())
            .contains("Generate 5 rapid fire questions"));

        let iq = template_for(ActivityKind::IqTest).unwrap();
        assert!(iq
            .render(&GenerationParams::new())
            .contains("of easy difficulty"));
        assert!(iq
            .render(&GenerationParams::new().with_difficulty(Difficulty::Hard))
            .contains("of hard difficulty"));
    }

    #[test]
    fn test_challenge_type_substitution() {
        let template = template_for(ActivityKind::TruthOrDare).unwrap();
        let params = GenerationParams::new().with_challenge(ChallengeKind::Dare);

        assert!(template.render(&params).contains("Generate a dare challenge"));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let params = GenerationParams::new()
            .with_topic("movies")
            .with_count(3);
        for &kind in ActivityKind::all() {
            let params = if kind.accepts_topic() {
                params.clone()
            } else {
                GenerationParams::new()
            };
            let instruction = template_for(kind).unwrap().render(&params);
            assert!(!instruction.contains('{'), "unfilled placeholder in {kind}");
        }
    }
}
