use super::super::sensing::PolarEstimate;
use super::{Question, QuestionBank, QuizSession, ShuffleRng, MAX_PLAYERS, QUESTIONS_PER_PLAYER};

static SHARED_BOX_QUESTIONS: [Question; 44] =
    [Question::new("Point at the pole", 0.0, 20.0, -10.0, 10.0); 44];
static SHARED_BOX_BANK: QuestionBank = QuestionBank::new(&SHARED_BOX_QUESTIONS);

fn estimate_at(theta_deg: f32, phi_deg: f32) -> PolarEstimate {
    PolarEstimate {
        radius: 15.0,
        theta_deg,
        phi_deg,
    }
}

fn inside() -> PolarEstimate {
    estimate_at(10.0, 0.0)
}

fn outside() -> PolarEstimate {
    estimate_at(90.0, 90.0)
}

#[test]
fn deal_assigns_distinct_questions_within_and_across_players() {
    let mut session = QuizSession::empty();
    let mut rng = ShuffleRng::seeded(0xC0FF_EE01);
    session.start(&SHARED_BOX_BANK, MAX_PLAYERS as u8, &mut rng);

    let mut seen = [false; 44];
    for player in 0..MAX_PLAYERS as u8 {
        session.set_current_player(player);
        for _ in 0..QUESTIONS_PER_PLAYER {
            let index = usize::from(session.current_question());
            assert!(index < SHARED_BOX_BANK.len());
            assert!(!seen[index], "question dealt twice in one session");
            seen[index] = true;
            session.record_answer(&SHARED_BOX_BANK, inside());
        }
    }
    assert_eq!(
        seen.iter().filter(|&&hit| hit).count(),
        MAX_PLAYERS * usize::from(QUESTIONS_PER_PLAYER)
    );
    assert!(session.is_session_done());
}

#[test]
fn different_seeds_deal_different_orders() {
    let mut first = QuizSession::empty();
    let mut second = QuizSession::empty();
    first.start(&SHARED_BOX_BANK, 1, &mut ShuffleRng::seeded(1));
    second.start(&SHARED_BOX_BANK, 1, &mut ShuffleRng::seeded(2));

    let mut diverged = false;
    for _ in 0..QUESTIONS_PER_PLAYER {
        if first.current_question() != second.current_question() {
            diverged = true;
        }
        first.record_answer(&SHARED_BOX_BANK, inside());
        second.record_answer(&SHARED_BOX_BANK, inside());
    }
    assert!(diverged);
}

#[test]
fn acceptance_box_edges_are_inclusive() {
    let mut session = QuizSession::empty();
    session.start(&SHARED_BOX_BANK, 1, &mut ShuffleRng::seeded(7));

    assert!(session.record_answer(&SHARED_BOX_BANK, estimate_at(0.0, -10.0)));
    assert!(session.record_answer(&SHARED_BOX_BANK, estimate_at(20.0, 10.0)));
    assert!(session.record_answer(&SHARED_BOX_BANK, estimate_at(20.0, -10.0)));
    assert!(!session.record_answer(&SHARED_BOX_BANK, estimate_at(20.5, 0.0)));
    assert!(!session.record_answer(&SHARED_BOX_BANK, estimate_at(10.0, 10.5)));
    assert_eq!(session.scores()[0], 3);
    assert_eq!(session.answered()[0], 5);
}

#[test]
fn progress_advances_on_every_answer_score_only_on_hits() {
    let mut session = QuizSession::empty();
    session.start(&SHARED_BOX_BANK, 2, &mut ShuffleRng::seeded(11));

    session.record_answer(&SHARED_BOX_BANK, inside());
    session.record_answer(&SHARED_BOX_BANK, outside());
    session.record_answer(&SHARED_BOX_BANK, inside());
    assert_eq!(session.scores(), [2, 0, 0, 0]);
    assert_eq!(session.answered(), [3, 0, 0, 0]);
}

#[test]
fn next_active_player_scans_from_the_lowest_index() {
    let mut session = QuizSession::empty();
    session.start(&SHARED_BOX_BANK, 3, &mut ShuffleRng::seeded(23));

    assert_eq!(session.next_active_player(), Some(0));
    for _ in 0..QUESTIONS_PER_PLAYER {
        session.record_answer(&SHARED_BOX_BANK, outside());
    }
    assert!(session.is_player_done(0));
    assert_eq!(session.next_active_player(), Some(1));

    session.set_current_player(2);
    for _ in 0..QUESTIONS_PER_PLAYER {
        session.record_answer(&SHARED_BOX_BANK, outside());
    }
    assert_eq!(session.next_active_player(), Some(1));
    assert!(!session.is_session_done());

    session.set_current_player(1);
    for _ in 0..QUESTIONS_PER_PLAYER {
        session.record_answer(&SHARED_BOX_BANK, inside());
    }
    assert!(session.is_session_done());
    assert_eq!(session.next_active_player(), None);
}

#[test]
fn restart_zeroes_scores_and_progress() {
    let mut session = QuizSession::empty();
    let mut rng = ShuffleRng::seeded(42);
    session.start(&SHARED_BOX_BANK, 2, &mut rng);
    session.record_answer(&SHARED_BOX_BANK, inside());
    session.record_answer(&SHARED_BOX_BANK, inside());

    session.start(&SHARED_BOX_BANK, 4, &mut rng);
    assert_eq!(session.num_players(), 4);
    assert_eq!(session.current_player(), 0);
    assert_eq!(session.scores(), [0; MAX_PLAYERS]);
    assert_eq!(session.answered(), [0; MAX_PLAYERS]);
}
