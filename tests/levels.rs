use colorshapes::logic::{ldtk::Project, Action, Config, Controls, Game, Hue, Shape};

const DT: f32 = 1.0 / 60.0;

fn project() -> Project {
    Project::load(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/world.ldtk")).unwrap()
}

fn start(hue: Hue) -> Game {
    let mut config = Config::default();
    config.start_level = hue;
    Game::new(config, project(), 7).unwrap()
}

#[test]
fn every_level_spawns_onto_the_floor() {
    for hue in [Hue::White, Hue::Red, Hue::Blue] {
        let mut game = start(hue);
        for _ in 0..300 {
            let player = game.player();
            if !player.is_respawning() && !player.is_airborne() {
                break;
            }
            game.run(DT, Controls::default()).unwrap();
        }
        let player = game.player();
        assert!(!player.is_airborne(), "{hue}: still falling");
        assert_eq!(player.body.bounds.bottom(), 448, "{hue}");
        assert_eq!(game.active(), hue);
    }
}

#[test]
fn default_start_level_is_shipped() {
    let game = Game::new(Config::default(), project(), 0).unwrap();
    assert_eq!(game.active(), Config::default().start_level);
    assert!(game.checkpoint().is_some());
}

#[test]
fn scripted_run_through_the_white_level() {
    let mut game = start(Hue::White);
    let mut visited = vec![game.active()];
    for frame in 0..1800 {
        let mut controls = Controls::default().with(Action::Right);
        if frame > 300 && frame % 40 < 10 {
            controls = controls.with(Action::Jump);
        }
        game.run(DT, controls).unwrap();
        game.drain_cues().for_each(drop);
        if !visited.contains(&game.active()) {
            visited.push(game.active());
        }
        assert!(!game.frame().sprites.is_empty());
    }
    assert!(visited.len() > 1, "never left the white level");
}

/// Walks right from the white spawn until both orbs are collected.
fn collect_white_orbs(game: &mut Game) {
    let right = Controls::default().with(Action::Right);
    for _ in 0..600 {
        if game.player().color() == Hue::Indigo {
            return;
        }
        game.run(DT, right).unwrap();
    }
    panic!("never collected both orbs, ended as {}", game.player().color());
}

#[test]
fn shifting_into_a_color_without_a_level_stays_put() {
    let mut config = Config::default();
    config.player.start_shape = Shape::Star;
    let mut game = Game::new(config, project(), 7).unwrap();
    collect_white_orbs(&mut game);

    let shift = Controls::default().with(Action::LevelShift);
    for _ in 0..10 {
        game.run(DT, shift).unwrap();
    }
    assert_eq!(game.active(), Hue::White);
    assert_eq!(game.player().color(), Hue::Indigo);
}

#[test]
fn circles_do_not_shift() {
    let mut game = start(Hue::White);
    assert_eq!(game.player().shape(), Shape::Circle);
    collect_white_orbs(&mut game);
    game.run(DT, Controls::default().with(Action::LevelShift)).unwrap();
    assert_eq!(game.active(), Hue::White);
}
