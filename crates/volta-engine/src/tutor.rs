//! Boundary types for the conversational tutoring collaborator.
//!
//! The tutor itself is a hosted service owned by the embedding
//! application; the engine never calls it. These types pin down the wire
//! contract so the host and any test double agree on the shape.

use serde::{Deserialize, Serialize};

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

/// One turn of the tutoring conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: Role,
    pub text: String,
}

/// Which half of the lesson the conversation is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonPhase {
    /// The student is describing what they observe in the animation.
    Observation,
    /// The student is explaining why it happens.
    Explanation,
}

/// The collaborator's reply to one exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorReply {
    pub response_text: String,
    /// The student has named every observable fact for this phase.
    pub all_facts_identified: bool,
    /// The student's explanation holds up.
    pub is_explanation_good: bool,
}

/// Implemented by the embedding application (or a test double).
pub trait Tutor {
    fn respond(&mut self, transcript: &[TranscriptTurn], phase: LessonPhase) -> TutorReply;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_parses_from_host_json() {
        let reply: TutorReply = serde_json::from_str(
            r#"{
                "response_text": "What happens to the bulb when the switch closes?",
                "all_facts_identified": false,
                "is_explanation_good": false
            }"#,
        )
        .unwrap();
        assert!(!reply.all_facts_identified);
        assert!(reply.response_text.contains("switch"));
    }

    #[test]
    fn roles_serialize_lowercase() {
        let turn = TranscriptTurn {
            role: Role::Student,
            text: "the bulb lights up".into(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains(r#""role":"student""#));
    }
}
