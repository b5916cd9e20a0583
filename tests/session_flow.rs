use quiz_time::model::{FinishReason, QuestionRecord, SessionPhase, StartMode};
use quiz_time::session::{Verdict, format_remaining};
use quiz_time::store::{KEY_CURRENT_INDEX, KEY_REMAINING_TIME, answer_key};
use quiz_time::{KeyValueStore, MemoryStore, QuestionRepository, QuizSession, SessionError, SessionEvent};

fn repository() -> QuestionRepository {
    QuestionRepository::from_records(vec![
        QuestionRecord::new("Uno", ["a", "b", "c", "d"], 1),
        QuestionRecord::new("Dos", ["e", "f", "g", "h"], 0),
    ])
    .expect("dos preguntas válidas")
}

fn started(store: &mut MemoryStore) -> QuizSession {
    let mut session = QuizSession::new(&repository()).expect("sesión");
    session.start(StartMode::Fresh, store).expect("start");
    session
}

#[test]
fn answers_both_questions_and_finishes() {
    let mut store = MemoryStore::new();
    let mut session = started(&mut store);

    let events = session.select_option(1).unwrap();
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::Feedback(f)] if f.verdict == Verdict::Correct
    ));
    session.advance(&mut store).unwrap();
    assert_eq!(store.get_u64(KEY_CURRENT_INDEX), Some(1));
    assert_eq!(store.get_u64(&answer_key(0)), Some(1));

    let events = session.select_option(2).unwrap();
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::Feedback(f)] if f.verdict == Verdict::Incorrect && f.correct_index == Some(0)
    ));

    let events = session.advance(&mut store).unwrap();
    let finished = events.iter().find_map(|e| match e {
        SessionEvent::QuizFinished { reason, summary, .. } => Some((*reason, summary.clone())),
        _ => None,
    });
    let (reason, summary) = finished.expect("evento de fin");
    assert_eq!(reason, FinishReason::LastQuestion);
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.answered, 2);
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert!(store.is_empty());
}

#[test]
fn six_hundred_ticks_run_out_the_clock() {
    let mut store = MemoryStore::new();
    let mut session = started(&mut store);

    for _ in 0..599 {
        session.tick(1_000, &mut store).unwrap();
    }
    assert_eq!(session.remaining_ms(), 1_000);
    assert_eq!(store.get_u64(KEY_REMAINING_TIME), Some(1_000));
    assert_eq!(format_remaining(session.remaining_ms()), "00:01");

    let events = session.tick(1_000, &mut store).unwrap();
    assert!(events.iter().any(|e| matches!(
        e,
        SessionEvent::QuizFinished { reason: FinishReason::TimeUp, .. }
    )));
    assert_eq!(session.phase(), SessionPhase::Completed);
    assert!(store.is_empty());

    // Un tick tardío ya no hace nada
    assert!(session.tick(1_000, &mut store).unwrap().is_empty());
}

#[test]
fn pause_and_resume_keep_progress() {
    let mut store = MemoryStore::new();
    let mut session = started(&mut store);

    session.advance(&mut store).unwrap();
    session.select_option(3).unwrap();
    session.tick(5_000, &mut store).unwrap();
    session.pause(&mut store).unwrap();
    assert_eq!(session.phase(), SessionPhase::Paused);
    assert_eq!(store.get_u64(KEY_REMAINING_TIME), Some(595_000));
    assert_eq!(store.get_u64(&answer_key(1)), Some(3));

    // Pausada no se puede responder
    assert!(matches!(
        session.select_option(0),
        Err(SessionError::InvalidPhase { .. })
    ));

    let events = session.resume_from_pause(&mut store).unwrap();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert!(events.iter().any(|e| matches!(
        e,
        SessionEvent::QuestionChanged { index: 1, restored_selection: Some(3), .. }
    )));
    assert_eq!(session.remaining_ms(), 595_000);
}

#[test]
fn continue_in_a_new_session_after_restart() {
    let mut store = MemoryStore::new();
    {
        let mut session = started(&mut store);
        session.select_option(1).unwrap();
        session.advance(&mut store).unwrap();
        session.tick(1_000, &mut store).unwrap();
        session.flush(&mut store).unwrap();
    }
    assert!(store.has_saved_progress());

    let mut session = QuizSession::new(&repository()).unwrap();
    session.start(StartMode::Resume, &mut store).unwrap();
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.remaining_ms(), 599_000);
    assert_eq!(session.answers().get(&0), Some(&1));
}
