use super::script;
use super::InterviewError;
use crate::session::{InterviewSession, MathStep, Stage};

/// Qualitative exchanges before the interview moves to the quantitative
/// problem.
pub const QUAL_EXCHANGES: u32 = 5;

/// An incoming event for one session: the client either asks for the next
/// question or submits a transcribed answer.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    QuestionFetch,
    AnswerSubmitted { transcript: &'a str },
}

/// What the caller must do to produce the reply for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Emit fixed text, optionally telling the client to wait before
    /// recording.
    Scripted {
        text: String,
        wait_secs: Option<u64>,
    },
    /// Generate the reply with the language model, using the session
    /// history plus `directive` as one extra system message. The generated
    /// text must be recorded on the session as an assistant message.
    Generate { directive: &'static str },
    /// The interview is over; acknowledge without new content.
    ConcludedAck,
    /// No reply is defined for this stage; return only the transcript.
    TranscriptOnly,
}

/// Exhaustive transition function for the interview state machine.
///
/// Mutates `session` (stage, counter, scripted assistant messages, the
/// submitted user message) and returns the step the caller must take to
/// produce the reply. Stage only ever moves forward; once `Closing` is
/// reached every further submission yields the same acknowledgment.
pub fn advance(
    session: &mut InterviewSession,
    event: Event<'_>,
    math_wait_secs: u64,
) -> Result<Step, InterviewError> {
    match event {
        Event::QuestionFetch => match session.stage {
            Stage::Intro => {
                let text = script::intro_with_first_question();
                session.push_assistant(&text);
                session.stage = Stage::Qualitative;
                session.qual_count = 1;
                Ok(Step::Scripted {
                    text,
                    wait_secs: None,
                })
            }
            // Re-fetch path: generates a fresh question without consuming an
            // answer and resets the counter to 1, matching the deployed
            // behavior.
            Stage::Qualitative => {
                session.qual_count = 1;
                Ok(Step::Generate {
                    directive: script::FIRST_QUESTION_DIRECTIVE,
                })
            }
            Stage::Math {
                step: MathStep::Pending,
            } => {
                session.stage = Stage::Math {
                    step: MathStep::Posed,
                };
                Ok(Step::Scripted {
                    text: script::MATH_PROBLEM.to_string(),
                    wait_secs: Some(math_wait_secs),
                })
            }
            Stage::Math {
                step: MathStep::Posed,
            }
            | Stage::Done
            | Stage::Closing => Err(InterviewError::NoQuestionAvailable),
        },
        Event::AnswerSubmitted { transcript } => {
            session.push_user(transcript);
            match session.stage {
                Stage::Qualitative => {
                    if session.qual_count >= QUAL_EXCHANGES {
                        session.stage = Stage::Math {
                            step: MathStep::Posed,
                        };
                        Ok(Step::Scripted {
                            text: script::MATH_PROBLEM.to_string(),
                            wait_secs: Some(math_wait_secs),
                        })
                    } else {
                        session.qual_count += 1;
                        Ok(Step::Generate {
                            directive: script::FOLLOWUP_DIRECTIVE,
                        })
                    }
                }
                Stage::Math {
                    step: MathStep::Posed,
                } => {
                    let text = script::math_followups_text();
                    session.push_assistant(&text);
                    session.stage = Stage::Done;
                    Ok(Step::Scripted {
                        text,
                        wait_secs: None,
                    })
                }
                Stage::Done => {
                    session.stage = Stage::Closing;
                    Ok(Step::Scripted {
                        text: script::CLOSING_MESSAGE.to_string(),
                        wait_secs: None,
                    })
                }
                Stage::Closing => Ok(Step::ConcludedAck),
                // An answer before the first fetch, or while the problem has
                // not been read out, has no scripted reply.
                Stage::Intro
                | Stage::Math {
                    step: MathStep::Pending,
                } => Ok(Step::TranscriptOnly),
            }
        }
    }
}
