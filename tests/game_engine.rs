//! Full games between fixed policies

use relearn::{
    pipeline::run_match,
    policies::{BlockAttackPolicy, CenterCornersPolicy, PolicyKind, RandomPolicy, TopLeftPolicy},
    tictactoe::{GameOutcome, Player, run_game},
};

#[test]
fn test_top_left_self_play() {
    let log = run_game(&mut TopLeftPolicy, &mut TopLeftPolicy).unwrap();
    assert_eq!(log.values(), vec![0, 1, 7, 16, 70, 151, 637, 1366]);
    assert_eq!(log.outcome(), GameOutcome::Win(Player::X));
}

#[test]
fn test_center_corners_self_play() {
    let log = run_game(&mut CenterCornersPolicy, &mut CenterCornersPolicy).unwrap();
    assert_eq!(
        log.values(),
        vec![0, 81, 83, 92, 1550, 8111, 8117, 8144, 8630, 10817]
    );
    assert_eq!(log.outcome(), GameOutcome::Draw);
}

#[test]
fn test_block_attack_self_play() {
    let mut x = BlockAttackPolicy::new(Player::X);
    let mut o = BlockAttackPolicy::new(Player::O);
    let log = run_game(&mut x, &mut o).unwrap();
    assert_eq!(
        log.values(),
        vec![0, 81, 83, 92, 1550, 1577, 2063, 4250, 4256, 10817]
    );
    assert_eq!(log.outcome(), GameOutcome::Draw);
}

#[test]
fn test_block_attack_beats_top_left() {
    let mut o = BlockAttackPolicy::new(Player::O);
    let result = run_match(&mut TopLeftPolicy, &mut o, 5).unwrap();
    // O completes the 2-4-6 diagonal on its third move.
    assert_eq!(result.o_wins, 5);
}

#[test]
fn test_logs_end_at_first_terminal_position() {
    let mut x = RandomPolicy::with_seed(17);
    let mut o = RandomPolicy::with_seed(18);
    for _ in 0..200 {
        let log = run_game(&mut x, &mut o).unwrap();
        let positions = log.positions();

        assert_eq!(positions[0].value(), 0);
        assert!(log.final_position().is_terminal());
        assert!(positions[..positions.len() - 1].iter().all(|p| !p.is_terminal()));
        for (ply, position) in positions.iter().enumerate() {
            assert_eq!(position.occupied_count(), ply);
        }
    }
}

#[test]
fn test_seeded_kinds_are_reproducible() {
    let play = || {
        let mut x = PolicyKind::Random.build(Player::X, Some(5));
        let mut o = PolicyKind::Random.build(Player::O, Some(6));
        (0..20)
            .map(|_| run_game(x.as_mut(), o.as_mut()).unwrap().values())
            .collect::<Vec<_>>()
    };
    assert_eq!(play(), play());
}
