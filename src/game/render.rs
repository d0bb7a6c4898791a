use super::*;

use bevy::render::camera::ScalingMode;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_startup_system(setup)
            .add_system(fit_camera.in_set(Stage::Present).before(draw))
            .add_system(draw.in_set(Stage::Present));
    }
}

/// Everything spawned for one frame; gone by the next.
#[derive(Component)]
struct Drawn;

const Z_STEP: f32 = 0.01;

fn setup(mut commands: Commands, config: Res<Config>) {
    let mut bundle = Camera2dBundle::default();
    bundle.projection.scaling_mode = ScalingMode::FixedVertical(config.resolution.h as f32);
    commands.spawn((bundle, Name::new("Camera")));
}

/// The screen always shows `resolution` world pixels, top-left at the origin.
fn fit_camera(
    config: Res<Config>,
    mut cameras: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !config.is_changed() {
        return;
    }
    let (w, h) = (config.resolution.w as f32, config.resolution.h as f32);
    for (mut transform, mut projection) in cameras.iter_mut() {
        projection.scaling_mode = ScalingMode::FixedVertical(h);
        transform.translation.x = w / 2.0;
        transform.translation.y = -h / 2.0;
    }
}

fn draw(
    session: Res<Game>,
    drawn: Query<Entity, With<Drawn>>,
    mut clear_color: ResMut<ClearColor>,
    mut images: ResMut<ImageCache>,
    mut texture_atlases: ResMut<Assets<TextureAtlas>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    for entity in drawn.iter() {
        commands.entity(entity).despawn();
    }

    let frame: Frame = session.frame();
    clear_color.0 = color(frame.background);

    let mut z = 0.0;
    for fill in &frame.fills {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: color(fill.color),
                    custom_size: Some(fill.bounds.size().as_vec2()),
                    ..default()
                },
                transform: Transform::from_translation(translation(&fill.bounds, z)),
                ..default()
            },
            Drawn,
        ));
        z += Z_STEP;
    }

    for sprite in &frame.sprites {
        let transform = Transform::from_translation(translation(&sprite.bounds, z))
            .with_rotation(Quat::from_rotation_z(sprite.rotation.to_radians()));
        let size = Some(sprite.bounds.size().as_vec2());
        match sprite.sheet {
            Some(sheet) => commands.spawn((
                SpriteSheetBundle {
                    sprite: TextureAtlasSprite {
                        index: sheet.index,
                        color: color(sprite.tint),
                        flip_x: sprite.flip_x,
                        flip_y: sprite.flip_y,
                        custom_size: size,
                        ..default()
                    },
                    texture_atlas: images.atlas(
                        sprite.image,
                        sheet,
                        sprite.bounds.size().as_vec2(),
                        &asset_server,
                        &mut texture_atlases,
                    ),
                    transform,
                    ..default()
                },
                Drawn,
            )),
            None => commands.spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: color(sprite.tint),
                        flip_x: sprite.flip_x,
                        flip_y: sprite.flip_y,
                        custom_size: size,
                        ..default()
                    },
                    texture: images.image(sprite.image, &asset_server),
                    transform,
                    ..default()
                },
                Drawn,
            )),
        };
        z += Z_STEP;
    }

    if let Some(debug) = &frame.debug {
        let screen = session.config().resolution.ivec2();
        let outline = outline(&debug.camera_box).map(|edge| (edge, Color::RED));
        let crosshair = crosshair(screen).map(|line| (line, Color::BLUE));
        for (bounds, line_color) in outline.into_iter().chain(crosshair) {
            commands.spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: line_color,
                        custom_size: Some(bounds.size().as_vec2()),
                        ..default()
                    },
                    transform: Transform::from_translation(translation(&bounds, z)),
                    ..default()
                },
                Drawn,
            ));
        }
    }
}

/// One pixel wide edges of `bounds`.
fn outline(bounds: &Bounds) -> [Bounds; 4] {
    let (x, y, w, h) = (bounds.x, bounds.y, bounds.w, bounds.h);
    [
        Bounds::new(x, y, w, 1),
        Bounds::new(x, y + h - 1, w, 1),
        Bounds::new(x, y, 1, h),
        Bounds::new(x + w - 1, y, 1, h),
    ]
}

/// Marks the middle of the screen, 20 pixels each way.
fn crosshair(screen: IVec2) -> [Bounds; 2] {
    let center = screen / 2;
    [
        Bounds::new(center.x - 20, center.y, 41, 1),
        Bounds::new(center.x, center.y - 20, 1, 41),
    ]
}

#[test]
fn debug_lines() {
    let edges = outline(&Bounds::new(600, 338, 400, 224));
    assert_eq!(edges[1], Bounds::new(600, 561, 400, 1));
    assert_eq!(edges[3], Bounds::new(999, 338, 1, 224));
    let [horizontal, vertical] = crosshair(IVec2::new(1600, 900));
    assert_eq!(horizontal.center(), IVec2::new(800, 450));
    assert_eq!(vertical.center(), IVec2::new(800, 450));
}
