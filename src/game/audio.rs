use super::*;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_system(play_cues.in_set(Stage::Present));
    }
}

// AudioExt was made so that all sound effects have same volume
pub trait AudioExt {
    fn play_sfx(&self, source: Handle<AudioSource>) -> Handle<AudioSink>;
}

impl AudioExt for Audio {
    fn play_sfx(&self, source: Handle<AudioSource>) -> Handle<AudioSink> {
        self.play_with_settings(
            source,
            PlaybackSettings {
                volume: 0.1, // The volume of all sfx
                ..default()
            },
        )
    }
}

/// Cues are drained even with sound off so they never pile up.
fn play_cues(
    mut session: ResMut<Game>,
    mut sounds: ResMut<SoundCache>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    let enabled = session.config().sound;
    for cue in session.drain_cues() {
        if enabled {
            sounds.play(cue, &audio, &asset_server);
        }
    }
}
