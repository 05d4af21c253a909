use std::{
    sync::{Arc, Barrier},
    thread,
};

use rand::{rngs::StdRng, SeedableRng};

use treasuremap::board::{
    water_target, Board, FnPolicy, GenerateError, InvalidSizeReason, PlayerLimits, Position,
    Strategy, Tile, WaterRange, MAX_TILES,
};

mod common;

fn count_tiles(board: &Board) -> (usize, usize, usize) {
    let (mut treasure, mut water, mut total) = (0, 0, 0);
    for x in 0..board.size() as i32 {
        for y in 0..board.size() as i32 {
            match board.get_tile(x, y).unwrap() {
                Tile::Treasure => treasure += 1,
                Tile::Water => water += 1,
                Tile::Grass => {}
            }
            total += 1;
        }
    }
    (treasure, water, total)
}

#[test]
fn second_board_is_rejected_while_first_is_live() {
    let _guard = common::serial();
    let board = Board::safe().unwrap();
    assert!(Board::is_live());
    assert!(Board::hazardous().is_err());
    assert!(Board::safe().is_err());
    board.teardown();
}

#[test]
fn teardown_allows_a_new_board() {
    let _guard = common::serial();
    let board = Board::hazardous().unwrap();
    board.teardown();
    assert!(!Board::is_live());
    let board = Board::safe().unwrap();
    assert_eq!(board.strategy(), Strategy::Safe);
    board.teardown();
}

#[test]
fn dropping_releases_the_board() {
    let _guard = common::serial();
    {
        let _board = Board::safe().unwrap();
        assert!(Board::is_live());
    }
    assert!(!Board::is_live());
}

#[test]
fn concurrent_construction_yields_one_board() {
    let _guard = common::serial();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let attempt = Board::safe();
                // Keep the winner alive until every thread has tried.
                barrier.wait();
                attempt.is_ok()
            })
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|&won| won)
        .count();
    assert_eq!(winners, 1);
    assert!(!Board::is_live());
}

#[test]
fn generate_before_size_fails() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    assert_eq!(board.size(), 0);
    assert_eq!(board.generate(), Err(GenerateError::SizeNotSet));
    board.teardown();

    let mut board = Board::hazardous().unwrap();
    assert_eq!(board.generate(), Err(GenerateError::SizeNotSet));
}

#[test]
fn set_size_requires_positive_square() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    assert!(!board.set_size(10, 11, 3));
    assert!(!board.set_size(0, 0, 3));
    assert_eq!(board.size(), 0);

    assert_eq!(
        board.try_set_size(5, 6, 2).unwrap_err().reason(),
        InvalidSizeReason::NotSquare
    );
    assert_eq!(
        board.try_set_size(0, 0, 2).unwrap_err().reason(),
        InvalidSizeReason::Zero
    );
    assert_eq!(
        board
            .try_set_size(usize::max_value(), usize::max_value(), 2)
            .unwrap_err()
            .reason(),
        InvalidSizeReason::TooLarge
    );

    assert!(board.set_size(10, 10, 3));
    assert_eq!(board.size(), 10);
}

#[test]
fn size_policy_is_consulted() {
    let _guard = common::serial();
    let mut board = Board::with_policy(Strategy::Safe, PlayerLimits::new(2..=8, 5..=50)).unwrap();
    let err = board.try_set_size(4, 4, 2).unwrap_err();
    assert_eq!(err.reason(), InvalidSizeReason::RejectedByPolicy);
    assert_eq!(err.dimensions(), (4, 4));
    assert_eq!(err.players(), 2);
    assert!(!board.set_size(20, 20, 9));
    assert_eq!(board.size(), 0);
    assert!(board.set_size(20, 20, 8));
    board.teardown();

    let mut board = Board::with_policy(
        Strategy::Hazardous,
        FnPolicy(|size: usize, players: usize| size >= players),
    )
    .unwrap();
    assert!(!board.set_size(3, 3, 4));
    assert!(board.set_size(4, 4, 4));
}

#[test]
fn oversized_boards_are_refused_without_allocating() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    let err = board.try_set_size(1 << 22, 1 << 22, 2).unwrap_err();
    assert_eq!(err.reason(), InvalidSizeReason::TooLarge);
    assert_eq!(board.size(), 0);

    // One past the cap on the side length.
    let side = 4097;
    assert!(side * side > MAX_TILES);
    assert!(!board.set_size(side, side, 2));
    assert_eq!(board.size(), 0);

    assert!(board.set_size(4096, 4096, 2));
    assert_eq!(board.size(), 4096);
}

#[test]
fn get_tile_checks_bounds() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    assert!(board.get_tile(0, 0).is_err());

    assert!(board.set_size(10, 10, 3));
    assert_eq!(board.get_tile(0, 0), Ok(Tile::Grass));
    board.generate().unwrap();
    for &(x, y) in &[(-1, 0), (0, -1), (10, 0), (0, 10), (11, 11)] {
        let err = board.get_tile(x, y).unwrap_err();
        assert_eq!(err.pos(), Position::new(x, y));
        assert_eq!(err.size(), 10);
    }
    assert!(board.get_tile(9, 9).is_ok());
}

#[test]
fn safe_map_has_one_treasure_and_ten_percent_water() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    assert!(board.set_size(10, 10, 3));
    for _ in 0..10 {
        board.generate().unwrap();
        let (treasure, water, total) = count_tiles(&board);
        assert_eq!(treasure, 1, "there is supposed to be only 1 treasure");
        assert_eq!(water, 10);
        assert_eq!(total, 100);
    }
}

#[test]
fn hazardous_map_has_one_treasure_and_quarter_to_third_water() {
    let _guard = common::serial();
    let mut board = Board::hazardous().unwrap();
    assert!(board.set_size(10, 10, 3));
    for _ in 0..10 {
        let generated = board.generate().unwrap();
        let (treasure, water, total) = count_tiles(&board);
        assert_eq!(treasure, 1, "there is supposed to be only 1 treasure");
        assert!(water >= 25 && water <= 35, "{} water tiles", water);
        assert_eq!(water, generated.water_tiles);
        assert_eq!(total, 100);
        assert_eq!(board.get_tile(generated.treasure.x, generated.treasure.y), Ok(Tile::Treasure));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let _guard = common::serial();
    let mut board = Board::hazardous().unwrap();
    assert!(board.set_size(15, 15, 2));

    let first = board.generate_with(&mut StdRng::seed_from_u64(1234)).unwrap();
    let layout: Vec<Vec<_>> = board.iter_rows().map(|row| row.collect()).collect();
    board.generate_with(&mut StdRng::seed_from_u64(99)).unwrap();
    let second = board.generate_with(&mut StdRng::seed_from_u64(1234)).unwrap();
    let again: Vec<Vec<_>> = board.iter_rows().map(|row| row.collect()).collect();

    assert_eq!(first, second);
    assert_eq!(layout, again);
    assert_eq!(layout.len(), 15);
}

#[test]
fn impossible_water_fails_and_leaves_grass() {
    let _guard = common::serial();
    let mut board = Board::safe().unwrap();
    assert!(board.set_size(1, 1, 1));
    assert_eq!(
        board.generate(),
        Err(GenerateError::TooMuchWater {
            target: 1,
            available: 0
        })
    );
    assert_eq!(board.get_tile(0, 0), Ok(Tile::Grass));
}

#[test]
fn custom_strategy_uses_its_range() {
    let _guard = common::serial();
    let range = WaterRange::new(40, 50).unwrap();
    let mut board = Board::new(Strategy::Custom(range)).unwrap();
    assert!(board.set_size(20, 20, 4));
    let generated = board.generate().unwrap();
    assert!(generated.water_pct >= 40 && generated.water_pct <= 50);
    assert_eq!(board.count(Tile::Water), water_target(400, generated.water_pct));
}

#[test]
fn resizing_discards_the_layout() {
    let _guard = common::serial();
    let mut board = Board::hazardous().unwrap();
    assert!(board.set_size(10, 10, 2));
    board.generate().unwrap();
    assert!(board.set_size(6, 6, 2));
    assert_eq!(board.count(Tile::Grass), 36);
    assert_eq!(board.iter_rows().count(), 6);
}
