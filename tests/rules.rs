use std::collections::HashSet;

use linked_snake::food::FoodSpawner;
use linked_snake::game::{GameState, TickOutcome};
use linked_snake::snake::{Collision, Direction, Snake};
use linked_snake::{Config, Coords};

fn body(snake: &Snake) -> Vec<Coords> {
    snake.body().collect()
}

#[test]
fn grow_on_five_by_five_board() {
    let mut snake = Snake::new((2, 2));
    snake.grow((0, 1));

    assert_eq!(snake.len(), 2);
    assert_eq!(body(&snake), vec![(2, 3), (2, 2)]);
}

#[test]
fn stepping_off_the_left_edge_hits_the_wall() {
    let mut snake = Snake::new((0, 0));
    snake.advance(Direction::Left);

    assert_eq!(snake.head(), (-1, 0));
    assert!(snake.check_collision(5, 5));
}

#[test]
fn three_segments_follow_the_head_down() {
    let mut snake = Snake::new((2, 0));
    snake.grow((0, 1));
    snake.grow((0, 1));
    assert_eq!(body(&snake), vec![(2, 2), (2, 1), (2, 0)]);

    snake.advance(Direction::Down);

    assert_eq!(body(&snake), vec![(2, 3), (2, 2), (2, 1)]);
    assert!(!snake.check_collision(5, 5));
}

#[test]
fn length_tracks_number_of_growths() {
    let mut snake = Snake::new((0, 0));
    for n in 1..=15 {
        snake.grow((1, 0));
        assert_eq!(snake.len(), 1 + n);
    }

    let cells: HashSet<Coords> = snake.body().collect();
    assert_eq!(cells.len(), 16);
}

#[test]
fn a_seeded_game_is_reproducible() {
    let mut config = Config::with_board(12, 12);
    config.seed = Some(2024);

    let mut a = GameState::new(&config).unwrap();
    let mut b = GameState::new(&config).unwrap();
    assert_eq!(a.food(), b.food());

    let turns = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for step in 0..40 {
        let dir = turns[(step / 3) % turns.len()];
        a.steer(dir);
        b.steer(dir);

        let (ra, rb) = (a.tick(), b.tick());
        assert_eq!(ra, rb);
        assert_eq!(a.food(), b.food());
        if ra.is_over() {
            break;
        }
    }
}

#[test]
fn food_is_never_under_the_snake_while_playing() {
    let mut config = Config::with_board(8, 8);
    config.seed = Some(99);
    let mut game = GameState::new(&config).unwrap();

    // Sweep the board row by row until the game ends one way or another
    let mut dirs = [Direction::Left, Direction::Up, Direction::Right, Direction::Up].iter().cycle();
    let mut dir = *dirs.next().unwrap();
    for _ in 0..200 {
        game.steer(dir);
        let outcome = game.tick();
        if outcome.is_over() {
            assert!(matches!(outcome, TickOutcome::Crashed(_) | TickOutcome::Won));
            break;
        }

        if let Some(food) = game.food() {
            assert!(!game.snake().is_occupied(food));
        }

        let (x, _) = game.snake().head();
        if x == 0 || x == 7 {
            dir = *dirs.next().unwrap();
        }
    }
}

#[test]
fn immediate_turnaround_is_filtered_before_the_body() {
    let mut game = GameState::new(&Config::with_board(10, 10)).unwrap();
    assert_eq!(game.direction(), Direction::Down);

    game.steer(Direction::Up);
    let outcome = game.tick();

    assert_ne!(outcome, TickOutcome::Crashed(Collision::Body));
    assert_eq!(game.direction(), Direction::Down);
}

#[test]
fn spawner_respects_a_fixed_occupied_set() {
    let occupied: HashSet<Coords> = (0..5).map(|x| (x, 0)).collect();
    let mut spawner = FoodSpawner::new(None);

    for _ in 0..100 {
        let (x, y) = spawner.spawn(5, 2, &occupied).unwrap();
        assert_eq!(y, 1);
        assert!((0..5).contains(&x));
    }
}

#[test]
fn two_turns_between_ticks_cannot_reverse_into_the_neck() {
    let mut config = Config::with_board(10, 10);
    config.initial_length = 3;
    let mut game = GameState::new(&config).unwrap();
    let before: Vec<Coords> = game.snake().body().collect();

    game.steer(Direction::Left);
    game.steer(Direction::Up);
    let outcome = game.tick();

    assert!(!outcome.is_over());
    assert_eq!(game.heading(), Direction::Left);
    assert_eq!(game.snake().head(), (before[0].0 - 1, before[0].1));
    assert_eq!(game.snake().body().nth(1), Some(before[0]));
}
