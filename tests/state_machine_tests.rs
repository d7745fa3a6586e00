// Transition-table tests for the interview state machine
//
// These exercise `advance` directly against a session, without the engine
// or any adapter, so every row of the table is checked in isolation.

use case_interviewer::interview::script;
use case_interviewer::{
    advance, Event, InterviewError, InterviewSession, MathStep, Role, Stage, Step, QUAL_EXCHANGES,
};

const WAIT: u64 = 10;

fn fetch(session: &mut InterviewSession) -> Result<Step, InterviewError> {
    advance(session, Event::QuestionFetch, WAIT)
}

fn submit(session: &mut InterviewSession, text: &str) -> Result<Step, InterviewError> {
    advance(session, Event::AnswerSubmitted { transcript: text }, WAIT)
}

#[test]
fn test_new_session_is_seeded() {
    let session = InterviewSession::new("s1");

    assert_eq!(session.stage, Stage::Intro);
    assert_eq!(session.qual_count, 0);
    assert_eq!(session.messages.len(), 2, "Two seeded system messages");
    assert!(session.messages.iter().all(|m| m.role == Role::System));
    assert_eq!(session.messages[0].content, script::SYSTEM_DIRECTIVE);
    assert!(session.messages[1].content.starts_with("CASE:"));
}

#[test]
fn test_intro_fetch_emits_intro_and_first_question() {
    let mut session = InterviewSession::new("s1");

    let step = fetch(&mut session).unwrap();

    let Step::Scripted { text, wait_secs } = step else {
        panic!("Intro fetch should be scripted, got {step:?}");
    };
    assert!(text.contains("begin the interview"));
    assert!(text.contains(script::FIRST_QUESTION));
    assert_eq!(wait_secs, None);

    assert_eq!(session.stage, Stage::Qualitative);
    assert_eq!(session.qual_count, 1);
    // The spoken text is recorded as an assistant message.
    assert_eq!(session.messages.len(), 3);
    assert_eq!(session.messages[2].role, Role::Assistant);
    assert_eq!(session.messages[2].content, text);
}

#[test]
fn test_qualitative_refetch_regenerates_and_resets_counter() {
    let mut session = InterviewSession::new("s1");
    fetch(&mut session).unwrap();
    submit(&mut session, "first answer").unwrap();
    assert_eq!(session.qual_count, 2);

    let step = fetch(&mut session).unwrap();

    assert_eq!(
        step,
        Step::Generate {
            directive: script::FIRST_QUESTION_DIRECTIVE
        }
    );
    // Re-fetch resets the exchange counter, matching the deployed behavior.
    assert_eq!(session.qual_count, 1);
    assert_eq!(session.stage, Stage::Qualitative);
}

#[test]
fn test_qualitative_answers_increment_counter_by_one() {
    let mut session = InterviewSession::new("s1");
    fetch(&mut session).unwrap();

    for expected in 2..=QUAL_EXCHANGES {
        let step = submit(&mut session, "an answer").unwrap();
        assert_eq!(
            step,
            Step::Generate {
                directive: script::FOLLOWUP_DIRECTIVE
            }
        );
        assert_eq!(session.qual_count, expected);
        assert_eq!(session.stage, Stage::Qualitative);
    }
}

#[test]
fn test_math_transition_happens_exactly_at_threshold() {
    let mut session = InterviewSession::new("s1");
    fetch(&mut session).unwrap();

    // Four more answers keep the interview qualitative.
    for _ in 0..4 {
        submit(&mut session, "an answer").unwrap();
        assert_eq!(session.stage, Stage::Qualitative);
    }
    assert_eq!(session.qual_count, QUAL_EXCHANGES);

    // The fifth answer triggers the quantitative problem.
    let step = submit(&mut session, "fifth answer").unwrap();
    let Step::Scripted { text, wait_secs } = step else {
        panic!("Expected the scripted quantitative problem, got {step:?}");
    };
    assert_eq!(text, script::MATH_PROBLEM);
    assert_eq!(wait_secs, Some(WAIT));
    assert_eq!(
        session.stage,
        Stage::Math {
            step: MathStep::Posed
        }
    );
}

#[test]
fn test_math_pending_fetch_poses_problem() {
    let mut session = InterviewSession::new("s1");
    session.stage = Stage::Math {
        step: MathStep::Pending,
    };

    let step = fetch(&mut session).unwrap();

    assert_eq!(
        step,
        Step::Scripted {
            text: script::MATH_PROBLEM.to_string(),
            wait_secs: Some(WAIT),
        }
    );
    assert_eq!(
        session.stage,
        Stage::Math {
            step: MathStep::Posed
        }
    );
}

#[test]
fn test_math_answer_emits_followup_list() {
    let mut session = InterviewSession::new("s1");
    session.stage = Stage::Math {
        step: MathStep::Posed,
    };

    let step = submit(&mut session, "about four years").unwrap();

    let Step::Scripted { text, wait_secs } = step else {
        panic!("Expected the scripted follow-up list, got {step:?}");
    };
    assert_eq!(text, script::MATH_FOLLOWUP_QUESTIONS.join("\n"));
    assert_eq!(wait_secs, None);
    assert_eq!(session.stage, Stage::Done);
    // The follow-up list is recorded as an assistant message.
    assert_eq!(
        session.messages.last().map(|m| m.role),
        Some(Role::Assistant)
    );
}

#[test]
fn test_done_answer_emits_closing_message() {
    let mut session = InterviewSession::new("s1");
    session.stage = Stage::Done;

    let step = submit(&mut session, "final thoughts").unwrap();

    assert_eq!(
        step,
        Step::Scripted {
            text: script::CLOSING_MESSAGE.to_string(),
            wait_secs: None,
        }
    );
    assert_eq!(session.stage, Stage::Closing);
}

#[test]
fn test_closing_is_terminal_and_idempotent() {
    let mut session = InterviewSession::new("s1");
    session.stage = Stage::Closing;

    for _ in 0..3 {
        let step = submit(&mut session, "anything else?").unwrap();
        assert_eq!(step, Step::ConcludedAck);
        assert_eq!(session.stage, Stage::Closing);
    }
}

#[test]
fn test_fetch_with_no_next_question_is_rejected() {
    for stage in [
        Stage::Math {
            step: MathStep::Posed,
        },
        Stage::Done,
        Stage::Closing,
    ] {
        let mut session = InterviewSession::new("s1");
        session.stage = stage;

        let err = fetch(&mut session).unwrap_err();
        assert!(
            matches!(err, InterviewError::NoQuestionAvailable),
            "Stage {stage:?} should reject fetches"
        );
        assert!(err.is_client_error());
        assert_eq!(session.stage, stage, "Rejected fetch must not move stage");
    }
}

#[test]
fn test_submitted_transcript_is_appended_as_user_message() {
    let mut session = InterviewSession::new("s1");
    fetch(&mut session).unwrap();

    submit(&mut session, "my segmentation answer").unwrap();

    let user = session
        .messages
        .iter()
        .find(|m| m.role == Role::User)
        .expect("User message should be recorded");
    assert_eq!(user.content, "my segmentation answer");
}

#[test]
fn test_submit_before_first_fetch_returns_transcript_only() {
    let mut session = InterviewSession::new("s1");

    let step = submit(&mut session, "early answer").unwrap();

    assert_eq!(step, Step::TranscriptOnly);
    assert_eq!(session.stage, Stage::Intro);
}
