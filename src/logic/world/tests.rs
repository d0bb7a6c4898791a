use super::*;
use serde_json::{json, Value};

use crate::logic::objects::BouncerState;

const DT: f32 = 1.0 / 60.0;

fn project(levels: Vec<Value>) -> Project {
    serde_json::from_value(json!({ "levels": levels })).unwrap()
}

fn level(hue: Hue, objects: Vec<Value>) -> Value {
    json!({
        "identifier": hue.name(),
        "layerInstances": [{ "__identifier": "Objects", "entityInstances": objects }]
    })
}

fn object(tag: &str, x: i32, y: i32) -> Value {
    json!({ "__identifier": tag, "px": [x, y] })
}

fn colored(tag: &str, x: i32, y: i32, color: Hue) -> Value {
    json!({
        "__identifier": tag,
        "px": [x, y],
        "fieldInstances": [{ "__identifier": "color", "__value": color.name() }]
    })
}

fn platform(x: i32, y: i32, w: i32, h: i32) -> Value {
    json!({ "__identifier": "Platform", "px": [x, y], "width": w, "height": h })
}

fn start_in(hue: Hue, levels: Vec<Value>) -> Result<Game, Error> {
    let mut config = Config::default();
    config.start_level = hue;
    Game::new(config, project(levels), 0)
}

fn find(game: &Game, hue: Hue, kind: &str) -> Vec<Id> {
    game.level(hue)
        .map(|level| {
            level
                .objects()
                .filter(|object| object.kind.name() == kind)
                .map(|object| object.id)
                .collect()
        })
        .unwrap_or_default()
}

fn membership(game: &Game, hue: Hue, id: Id) -> Option<Membership> {
    game.level(hue)?.object(id).map(|object| object.membership)
}

/// Runs until the player is alive and in control again.
fn settle(game: &mut Game, controls: Controls) -> Vec<Cue> {
    let mut cues = Vec::new();
    for _ in 0..600 {
        if !game.player().is_dead() && !game.player().is_respawning() {
            return cues;
        }
        game.run(DT, controls).unwrap();
        cues.extend(game.drain_cues());
    }
    panic!("player never came back");
}

/// White room with a checkpoint at the origin (the player spawns at (56, 56)) and a
/// long floor at y = 200.
fn white_room(mut extra: Vec<Value>) -> Vec<Value> {
    let mut objects = vec![object("Checkpoint", 0, 0), platform(-200, 200, 2000, 32)];
    objects.append(&mut extra);
    vec![level(Hue::White, objects)]
}

#[test]
fn respawn_resets_the_player_for_every_checkpoint_color() {
    for hue in Hue::ALL {
        let mut game = start_in(
            hue,
            vec![level(hue, vec![object("Checkpoint", 100, 100), platform(-200, 400, 1000, 32)])],
        )
        .unwrap();
        let player = game.player();
        assert!(player.is_respawning(), "{hue}");
        assert!(!player.is_dead());
        assert_eq!(player.color(), hue);
        assert_eq!(player.body.vel, Vec2::ZERO);
        assert!(player.is_airborne());
        assert_eq!(player.jump_timer(), 0);
        assert!(player.keys().is_empty());
        assert_eq!(player.body.bounds.top_left(), IVec2::new(156, 156));
        assert_eq!(game.active(), hue);
        assert_eq!(game.drain_cues().collect::<Vec<_>>(), vec![Cue::Spawn]);
        // the ring is emitted on the entry frame already
        assert_eq!(game.active_level().particles.len(), 5);
    }
}

#[test]
fn start_level_needs_a_checkpoint() {
    let result = start_in(Hue::Red, vec![level(Hue::Red, vec![platform(0, 0, 32, 32)])]);
    assert!(matches!(result, Err(Error::NoCheckpoint { level: Hue::Red })));
    let result = start_in(Hue::Green, vec![level(Hue::Red, vec![])]);
    assert!(matches!(result, Err(Error::MissingLevel { level: Hue::Green })));
}

#[test]
fn respawn_returns_held_keys() {
    let mut game = start_in(Hue::White, white_room(vec![colored("Key", 50, 50, Hue::Red)])).unwrap();
    let key = find(&game, Hue::White, "key")[0];
    settle(&mut game, Controls::default());
    game.run(DT, Controls::default()).unwrap();
    assert_eq!(game.player().keys().len(), 1);
    assert_eq!(membership(&game, Hue::White, key), Some(Membership::Decorative));

    let reset = Controls::default().with(Action::Reset);
    game.run(DT, reset).unwrap();
    assert!(game.player().is_dead());
    while !game.player().is_respawning() {
        game.run(DT, reset).unwrap();
    }
    assert!(game.player().keys().is_empty());
    let object = game.level(Hue::White).unwrap().object(key).unwrap();
    assert_eq!(object.membership, Membership::Interactive);
    assert_eq!(object.body.bounds.top_left(), IVec2::new(50, 50));
    assert!(matches!(&object.kind, Kind::Key(state) if !state.following));
}

#[test]
fn held_key_survives_a_level_round_trip() {
    let red = level(
        Hue::Red,
        vec![
            object("Checkpoint", 100, 100),
            platform(0, 300, 600, 32),
            object("Key", 150, 150),
            object("Orb", 150, 150),
            object("Orb", 500, 100),
        ],
    );
    let blue = level(Hue::Blue, vec![platform(0, 300, 600, 32)]);
    let mut game = start_in(Hue::Red, vec![red, blue]).unwrap();
    let key = find(&game, Hue::Red, "key")[0];
    let orbs = find(&game, Hue::Red, "orb");
    settle(&mut game, Controls::default());
    game.run(DT, Controls::default()).unwrap();

    assert_eq!(game.player().keys().len(), 1);
    assert_eq!(membership(&game, Hue::Red, orbs[0]), Some(Membership::Inactive));
    assert_eq!(membership(&game, Hue::Red, orbs[1]), Some(Membership::Interactive));

    game.switch_level(Hue::Blue).unwrap();
    assert_eq!(game.active(), Hue::Blue);
    assert_eq!(membership(&game, Hue::Blue, key), Some(Membership::Decorative));
    assert_eq!(membership(&game, Hue::Red, key), None);

    game.switch_level(Hue::Red).unwrap();
    assert_eq!(membership(&game, Hue::Red, key), Some(Membership::Decorative));
    assert_eq!(membership(&game, Hue::Blue, key), None);
    assert_eq!(game.player().keys().len(), 1);
    assert_eq!(game.player().keys()[0].id, key);
    assert_eq!(membership(&game, Hue::Red, orbs[0]), Some(Membership::Interactive));
    assert_eq!(membership(&game, Hue::Red, orbs[1]), Some(Membership::Interactive));
}

#[test]
fn walking_into_a_spike_kills_and_respawns() {
    let mut game =
        start_in(Hue::White, white_room(vec![colored("Spike", 400, 168, Hue::Red)])).unwrap();
    let spawn = game.player().body.bounds.top_left();
    assert_eq!(spawn, IVec2::new(56, 56));
    let right = Controls::default().with(Action::Right);
    settle(&mut game, right);

    let mut cues = Vec::new();
    for _ in 0..600 {
        game.run(DT, right).unwrap();
        cues.extend(game.drain_cues());
        if game.player().is_dead() {
            break;
        }
    }
    assert!(game.player().is_dead());
    assert!(cues.contains(&Cue::Death));
    assert!(game.active_level().particles.len() >= 12);
    assert!(game.frame().sprites.iter().all(|sprite| sprite.image != "player"));

    let mut frames = 0;
    while !game.player().is_respawning() {
        game.run(DT, right).unwrap();
        frames += 1;
        assert!(frames < 300, "stuck dead");
    }
    assert!(frames >= game.config().timers.death_pause);
    let player = game.player();
    assert!(!player.is_dead());
    assert_eq!(player.body.bounds.top_left(), spawn);
    assert_eq!(player.color(), Hue::White);
    assert_eq!(player.body.vel, Vec2::ZERO);

    settle(&mut game, right);
    assert!(!game.player().is_dead());
}

#[test]
fn key_opens_the_door_of_its_color() {
    let mut game = start_in(
        Hue::White,
        white_room(vec![colored("Key", 50, 50, Hue::Red), colored("Door", 300, 104, Hue::Red)]),
    )
    .unwrap();
    let key = find(&game, Hue::White, "key")[0];
    let door = find(&game, Hue::White, "door")[0];
    let right = Controls::default().with(Action::Right);
    let mut cues = settle(&mut game, right);
    for _ in 0..600 {
        game.run(DT, right).unwrap();
        cues.extend(game.drain_cues());
        if membership(&game, Hue::White, door).is_none() {
            break;
        }
    }
    assert_eq!(membership(&game, Hue::White, door), None);
    assert_eq!(membership(&game, Hue::White, key), None);
    assert!(game.player().keys().is_empty());
    assert!(cues.contains(&Cue::Key));
    assert!(cues.contains(&Cue::Unlock));
}

#[test]
fn door_without_key_blocks() {
    let mut game =
        start_in(Hue::White, white_room(vec![colored("Door", 300, 104, Hue::Red)])).unwrap();
    let door = find(&game, Hue::White, "door")[0];
    let right = Controls::default().with(Action::Right);
    settle(&mut game, right);
    for _ in 0..300 {
        game.run(DT, right).unwrap();
    }
    assert_eq!(membership(&game, Hue::White, door), Some(Membership::Solid));
    assert_eq!(game.player().body.bounds.right(), 300);
    assert!(game.player().keys().is_empty());
}

#[test]
fn portals_switch_levels() {
    let levels = {
        let mut levels = white_room(vec![colored("Portal", 40, 50, Hue::Blue)]);
        levels.push(level(Hue::Blue, vec![platform(-200, 200, 2000, 32)]));
        levels
    };
    let mut game = start_in(Hue::White, levels).unwrap();
    settle(&mut game, Controls::default());
    game.run(DT, Controls::default()).unwrap();
    assert_eq!(game.active(), Hue::Blue);
    assert!(game.drain_cues().any(|cue| cue == Cue::LevelChange));
    // the checkpoint stays in white
    assert_eq!(game.checkpoint().unwrap().color, Hue::White);
}

#[test]
fn stars_shift_into_their_own_color() {
    let levels = {
        let mut levels = white_room(vec![colored("Orb", 56, 56, Hue::Green)]);
        levels.push(level(Hue::Green, vec![platform(-200, 200, 2000, 32)]));
        levels
    };
    let mut config = Config::default();
    config.player.start_shape = Shape::Star;
    let mut game = Game::new(config, project(levels), 0).unwrap();
    assert_eq!(game.player().shape(), Shape::Star);
    settle(&mut game, Controls::default());
    game.run(DT, Controls::default()).unwrap();
    assert_eq!(game.player().color(), Hue::Green);
    assert_eq!(game.active(), Hue::White);

    game.run(DT, Controls::default().with(Action::LevelShift)).unwrap();
    assert_eq!(game.active(), Hue::Green);

    game.player_mut().set_shape(Shape::Circle);
    game.switch_level(Hue::White).unwrap();
    game.run(DT, Controls::default().with(Action::LevelShift)).unwrap();
    assert_eq!(game.active(), Hue::White);
}

#[test]
fn creatures_stop_when_the_player_leaves() {
    let levels = {
        let mut levels = white_room(vec![object("Bouncer", 56, 60)]);
        levels.push(level(Hue::Blue, vec![]));
        levels
    };
    let mut game = start_in(Hue::White, levels).unwrap();
    let bouncer = find(&game, Hue::White, "bouncer")[0];
    settle(&mut game, Controls::default());
    game.run(DT, Controls::default()).unwrap();
    assert!(game.player().body.vel.y < 0.0);
    let state = |game: &Game| {
        let object = game.level(Hue::White).unwrap().object(bouncer).unwrap();
        let Kind::Bouncer(bouncer) = &object.kind else {
            unreachable!()
        };
        (bouncer.action, object.animator.as_ref().unwrap().state())
    };
    assert_eq!(state(&game), (true, BouncerState::BOUNCE));
    game.switch_level(Hue::Blue).unwrap();
    assert_eq!(state(&game), (false, BouncerState::IDLE));
    assert!(game.level(Hue::White).unwrap().particles.is_empty());
}

#[test]
fn views_cut_the_background_out_of_the_foreground() {
    let mut red = level(Hue::Red, vec![object("Checkpoint", 0, 0)]);
    red["layerInstances"].as_array_mut().unwrap().push(json!({
        "__identifier": "Views",
        "entityInstances": [
            { "__identifier": "Room", "px": [-100, -100], "width": 400, "height": 400 },
            { "__identifier": "Room", "px": [300, -100], "width": 400, "height": 100 },
            { "__identifier": "Far", "px": [2000, 2000], "width": 10, "height": 10 }
        ]
    }));
    let mut game = start_in(Hue::Red, vec![red]).unwrap();
    let frame = game.frame();
    assert_eq!(frame.background, Hue::Red.foreground());
    assert_eq!(frame.fills.len(), 2);
    assert!(frame.fills.iter().all(|fill| fill.color == Hue::Red.background()));
    assert!(frame.debug.is_none());

    settle(&mut game, Controls::default());
    let frame = game.frame();
    let offset = game.camera().offset;
    let player = frame
        .sprites
        .iter()
        .find(|sprite| sprite.image == "player")
        .unwrap();
    assert_eq!(player.bounds, game.player().body.bounds.translated(-offset));
}

#[test]
fn portal_to_a_missing_level_is_an_error() {
    let mut game =
        start_in(Hue::White, white_room(vec![colored("Portal", 40, 50, Hue::Violet)])).unwrap();
    settle(&mut game, Controls::default());
    let result = game.run(DT, Controls::default());
    assert!(matches!(result, Err(Error::MissingLevel { level: Hue::Violet })));
}

#[test]
fn one_key_opens_only_one_of_two_doors() {
    let room = level(
        Hue::White,
        vec![
            object("Checkpoint", 0, 0),
            platform(-200, 120, 2000, 32),
            colored("Key", 50, 50, Hue::Red),
            colored("Door", 300, 8, Hue::Red),
            colored("Door", 300, 104, Hue::Red),
        ],
    );
    let mut game = start_in(Hue::White, vec![room]).unwrap();
    let doors = find(&game, Hue::White, "door");
    let right = Controls::default().with(Action::Right);
    let mut cues = settle(&mut game, right);
    for _ in 0..300 {
        game.run(DT, right).unwrap();
        cues.extend(game.drain_cues());
    }
    let opened: Vec<bool> = doors
        .iter()
        .map(|&door| membership(&game, Hue::White, door).is_none())
        .collect();
    assert_eq!(opened, vec![true, false]);
    assert_eq!(cues.iter().filter(|&&cue| cue == Cue::Unlock).count(), 1);
    assert!(game.player().keys().is_empty());
    assert_eq!(game.player().body.bounds.right(), 300);
}

#[test]
fn only_one_death_per_frame() {
    let mut game = start_in(
        Hue::White,
        white_room(vec![
            colored("Spike", 56, 56, Hue::Red),
            colored("Spike", 60, 60, Hue::Blue),
            colored("Orb", 56, 56, Hue::Green),
        ]),
    )
    .unwrap();
    let orb = find(&game, Hue::White, "orb")[0];
    settle(&mut game, Controls::default());
    game.levels.get_mut(&Hue::White).unwrap().particles.clear();

    game.run(DT, Controls::default()).unwrap();
    assert!(game.player().is_dead());
    assert_eq!(game.drain_cues().collect::<Vec<_>>(), vec![Cue::Death]);
    assert_eq!(game.active_level().particles.len(), 12);
    assert_eq!(membership(&game, Hue::White, orb), Some(Membership::Interactive));
    assert_eq!(game.player().color(), Hue::White);
}

#[test]
fn dying_on_the_way_through_a_portal_only_waits_for_the_pause() {
    let levels = {
        let mut levels = white_room(vec![
            colored("Portal", 40, 50, Hue::Blue),
            colored("Spike", 56, 56, Hue::Red),
        ]);
        levels.push(level(Hue::Blue, vec![platform(-200, 200, 2000, 32)]));
        levels
    };
    let mut game = start_in(Hue::White, levels).unwrap();
    let config = game.config().clone();
    game.switch_level(Hue::Blue).unwrap();
    game.switch_level(Hue::White).unwrap();
    // long-lived particles in blue, numbered like the ones white is about to emit
    let blue = game.levels.get_mut(&Hue::Blue).unwrap();
    for _ in 0..400 {
        blue.particles.emit(Particle::new(
            Vec2::ZERO,
            Hue::Blue,
            Vec2::ZERO,
            1.0,
            0.0,
            &config.particle,
        ));
    }
    settle(&mut game, Controls::default());

    game.run(DT, Controls::default()).unwrap();
    assert!(game.player().is_dead());
    assert_eq!(game.active(), Hue::Blue);

    let mut frames = 0;
    while !game.player().is_respawning() {
        game.run(DT, Controls::default()).unwrap();
        frames += 1;
        assert!(frames < 100, "stuck dead");
    }
    assert_eq!(frames, config.timers.death_pause);
    assert_eq!(game.active(), Hue::White);
}
