use super::*;

/// One row of a sprite sheet played at `speed` frames per second. A negative speed
/// plays backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub row: usize,
    pub frames: usize,
    pub speed: f32,
}

impl Clip {
    pub const fn new(row: usize, frames: usize, speed: f32) -> Self {
        Self { row, frames, speed }
    }
}

#[derive(Debug, Clone)]
pub struct Animator {
    clips: Vec<(&'static str, Clip)>,
    state: &'static str,
    frame: f32,
}

impl Animator {
    /// Starts in the first clip.
    pub fn new(clips: Vec<(&'static str, Clip)>) -> Self {
        assert!(!clips.is_empty(), "animator needs at least one clip");
        let state = clips[0].0;
        Self {
            clips,
            state,
            frame: 0.0,
        }
    }

    pub fn single(clip: Clip) -> Self {
        Self::new(vec![("default", clip)])
    }

    pub fn state(&self) -> &'static str {
        self.state
    }

    pub fn clip(&self) -> Clip {
        self.clips
            .iter()
            .find(|(name, _)| *name == self.state)
            .map(|(_, clip)| *clip)
            .unwrap_or(self.clips[0].1)
    }

    pub fn set_state(&mut self, state: &str, frame: f32) {
        match self.clips.iter().find(|(name, _)| *name == state) {
            Some((name, _)) => {
                self.state = *name;
                self.frame = frame;
            }
            None => warn!("unknown animation state {state:?}"),
        }
    }

    /// Advances the current clip. Returns `true` when it wrapped around.
    pub fn animate(&mut self, dt: f32) -> bool {
        let clip = self.clip();
        let frames = clip.frames as f32;
        self.frame += clip.speed * dt;
        if self.frame >= frames {
            self.frame = 0.0;
            true
        } else if self.frame < 0.0 {
            self.frame = frames - 0.001;
            true
        } else {
            false
        }
    }

    pub fn frame(&self) -> usize {
        (self.frame.max(0.0) as usize).min(self.clip().frames.saturating_sub(1))
    }

    /// Sheet cell of the current frame as `(row, column)`.
    pub fn cell(&self) -> (usize, usize) {
        (self.clip().row, self.frame())
    }
}
