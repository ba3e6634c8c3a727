use games::*;
use uct::*;

fn search(simulations: u32, seed: u64) -> Uct<Nim, RandomRollout> {
    let config = UctConfig::new(config::EXPLORATION, simulations).unwrap();
    Uct::new(config, RandomRollout::seeded(seed)).unwrap()
}

#[test]
fn last_take_wins() -> Result<(), PlayError> {
    let mut game = Nim::new(&[1, 2])?;
    assert_eq!(game.available_moves().len(), 3);
    game.try_play(Take { heap: 1, count: 2 })?;
    assert_eq!(game.result(), GameResult::Ongoing);
    assert_eq!(game.player_turn(), Player::Min);
    game.try_play(Take { heap: 0, count: 1 })?;
    assert_eq!(game.result(), GameResult::Winner(Player::Min));
    assert!(game.available_moves().is_empty());
    Ok(())
}

#[test]
fn illegal_takes() -> Result<(), PlayError> {
    let mut game = Nim::new(&[3])?;
    assert_eq!(game.try_play(Take { heap: 1, count: 1 }), Err(PlayError::NoHeap(1)));
    assert_eq!(game.try_play(Take { heap: 0, count: 0 }), Err(PlayError::TakeZero));
    assert_eq!(
        game.try_play(Take { heap: 0, count: 4 }),
        Err(PlayError::TakeTooMany { take: 4, heap: 3 })
    );
    game.try_play(Take { heap: 0, count: 3 })?;
    assert_eq!(game.try_play(Take { heap: 0, count: 1 }), Err(PlayError::GameOver));
    Ok(())
}

#[test]
fn too_many_heaps() {
    assert_eq!(
        Nim::new(&[1; MAX_HEAPS + 1]),
        Err(PlayError::TooManyHeaps(MAX_HEAPS))
    );
}

#[test]
fn nim_sum_and_display() -> Result<(), PlayError> {
    let game = Nim::new(&[1, 2, 3])?;
    assert_eq!(game.nim_sum(), 0);
    assert_eq!(game.heaps(), &[1, 2, 3]);
    assert_eq!(game.to_string(), "0: |\n1: ||\n2: |||\n");
    Ok(())
}

#[test]
fn finds_zero_nim_sum() -> Result<(), PlayError> {
    for (heaps, best) in [
        (vec![2, 3], Take { heap: 1, count: 1 }),
        (vec![1, 1, 3], Take { heap: 2, count: 3 }),
    ] {
        let game = Nim::new(&heaps)?;
        let (take, _) = search(4000, 3).decide(&game).unwrap();
        assert_eq!(take, best, "{heaps:?}");

        let mut after = game.clone();
        after.play(take);
        assert_eq!(after.nim_sum(), 0);
    }
    Ok(())
}
