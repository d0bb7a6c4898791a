use super::*;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImageCache>().init_resource::<SoundCache>();
    }
}

/// Image and sprite sheet handles by name, loaded on first use.
#[derive(Resource, Default)]
pub struct ImageCache {
    images: HashMap<&'static str, Handle<Image>>,
    atlases: HashMap<(&'static str, usize, usize), Handle<TextureAtlas>>,
}

impl ImageCache {
    pub fn image(&mut self, name: &'static str, asset_server: &AssetServer) -> Handle<Image> {
        self.images
            .entry(name)
            .or_insert_with(|| asset_server.load(image_path(name).as_str()))
            .clone()
    }

    /// `cell` is the size of one sheet cell in pixels.
    pub fn atlas(
        &mut self,
        name: &'static str,
        sheet: Sheet,
        cell: Vec2,
        asset_server: &AssetServer,
        texture_atlases: &mut Assets<TextureAtlas>,
    ) -> Handle<TextureAtlas> {
        if let Some(handle) = self.atlases.get(&(name, sheet.columns, sheet.rows)) {
            return handle.clone();
        }
        let texture = self.image(name, asset_server);
        let atlas = TextureAtlas::from_grid(texture, cell, sheet.columns, sheet.rows, None, None);
        let handle = texture_atlases.add(atlas);
        debug!("sliced {name} into {}x{}", sheet.columns, sheet.rows);
        self.atlases
            .insert((name, sheet.columns, sheet.rows), handle.clone());
        handle
    }
}

/// Sound handles by cue.
#[derive(Resource, Default)]
pub struct SoundCache {
    sounds: HashMap<Cue, Handle<AudioSource>>,
}

impl SoundCache {
    pub fn play(&mut self, cue: Cue, audio: &Audio, asset_server: &AssetServer) {
        let source = self
            .sounds
            .entry(cue)
            .or_insert_with(|| asset_server.load(sound_path(cue).as_str()))
            .clone();
        audio.play_sfx(source);
    }
}

fn image_path(image: &str) -> String {
    format!("img/{image}.png")
}

fn sound_path(cue: Cue) -> String {
    format!("sound/{}.wav", cue.name())
}

#[test]
fn asset_paths() {
    assert_eq!(image_path("player"), "img/player.png");
    assert_eq!(sound_path(Cue::LevelChange), "sound/level_change.wav");
}
