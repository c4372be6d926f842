//! Per-page stage: the audio time target and the single live splash.
//!
//! The browser client owns one [`Stage`] and feeds it clicks and timer ticks.
//! The stage decides what the DOM should look like; the client only applies
//! those decisions.

use crate::config::StageConfig;
use crate::error::StageError;
use crate::seek::SeekAction;
use crate::splash::{Click, Placement, SplashAnimation, Viewport};

/// Identifies one splash over the lifetime of a stage. Ids are never reused,
/// so a timer holding an old id can tell it has been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplashId(u64);

impl SplashId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnedSplash {
    pub id: SplashId,
    pub placement: Placement,
}

/// Result of one click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickOutcome {
    pub action: SeekAction,
    /// New splash to create. Only seeking clicks spawn one.
    pub spawned: Option<SpawnedSplash>,
    /// Splash to remove before `spawned` is created.
    pub replaced: Option<SplashId>,
}

/// What an animation timer firing should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTick {
    /// Show this frame.
    Show(u32),
    /// Every frame has been shown; the timer can be cancelled.
    Finished,
    /// The splash this timer belongs to has been replaced.
    Stale,
}

#[derive(Debug, Clone)]
struct LiveSplash {
    id: SplashId,
    placement: Placement,
    animation: SplashAnimation,
}

#[derive(Debug, Clone)]
pub struct Stage {
    config: StageConfig,
    audio_time: f64,
    live: Option<LiveSplash>,
    next_id: u64,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            audio_time: 0.0,
            live: None,
            next_id: 0,
        }
    }

    /// Like [`Stage::new`], but rejects a config the client could not render.
    pub fn try_new(config: StageConfig) -> Result<Self, StageError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Playback time most recently requested for the audio element.
    pub fn audio_time(&self) -> f64 {
        self.audio_time
    }

    pub fn live_splash(&self) -> Option<SpawnedSplash> {
        self.live.as_ref().map(|s| SpawnedSplash {
            id: s.id,
            placement: s.placement,
        })
    }

    pub fn frames_shown(&self) -> u32 {
        self.live
            .as_ref()
            .map_or(0, |s| s.animation.frames_shown())
    }

    /// Route a click through the seek table.
    ///
    /// A seek replaces the live splash with a new one at the click. A rewind
    /// only resets the audio time and leaves any live splash alone.
    pub fn click(&mut self, click: Click, viewport: Viewport) -> ClickOutcome {
        let action = self
            .config
            .seek_table
            .lookup_click(click.x, viewport.width);
        self.audio_time = action.target_secs();

        if !action.is_seek() {
            return ClickOutcome {
                action,
                spawned: None,
                replaced: None,
            };
        }

        let replaced = self.live.take().map(|s| s.id);
        let id = SplashId(self.next_id);
        self.next_id += 1;

        let placement = Placement::centered_on(click, viewport, self.config.splash_size);
        self.live = Some(LiveSplash {
            id,
            placement,
            animation: SplashAnimation::new(self.config.frame_count),
        });

        ClickOutcome {
            action,
            spawned: Some(SpawnedSplash { id, placement }),
            replaced,
        }
    }

    /// Advance the animation of splash `id` by one timer period.
    pub fn tick(&mut self, id: SplashId) -> FrameTick {
        match self.live.as_mut() {
            Some(live) if live.id == id => match live.animation.tick() {
                Some(frame) => FrameTick::Show(frame),
                None => FrameTick::Finished,
            },
            _ => FrameTick::Stale,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

    #[test]
    fn seeking_click_spawns_splash_and_sets_time() {
        let mut stage = Stage::default();
        let out = stage.click(Click::new(450.0, 300.0), VIEWPORT);

        assert_eq!(out.action, SeekAction::Seek(210.0));
        assert_eq!(stage.audio_time(), 210.0);
        assert_eq!(out.replaced, None);

        let spawned = out.spawned.unwrap();
        assert_eq!(spawned.placement, Placement { left: 350.0, top: 200.0 });
        assert_eq!(stage.live_splash(), Some(spawned));
    }

    #[test]
    fn second_seek_replaces_first_splash() {
        let mut stage = Stage::default();
        let first = stage.click(Click::new(50.0, 50.0), VIEWPORT).spawned.unwrap();
        let second = stage.click(Click::new(750.0, 50.0), VIEWPORT);

        assert_eq!(second.replaced, Some(first.id));
        let spawned = second.spawned.unwrap();
        assert_ne!(spawned.id, first.id);
        assert_eq!(stage.live_splash().map(|s| s.id), Some(spawned.id));
        assert_eq!(stage.audio_time(), 144.0);
    }

    #[test]
    fn rewind_keeps_live_splash() {
        let mut stage = Stage::default();
        let first = stage.click(Click::new(150.0, 100.0), VIEWPORT).spawned.unwrap();
        assert_eq!(stage.audio_time(), 40.0);

        let out = stage.click(Click::new(950.0, 100.0), VIEWPORT);
        assert_eq!(out.action, SeekAction::Rewind);
        assert_eq!(out.spawned, None);
        assert_eq!(out.replaced, None);
        assert_eq!(stage.audio_time(), 0.0);
        assert_eq!(stage.live_splash().map(|s| s.id), Some(first.id));
    }

    #[test]
    fn ticks_walk_frames_then_finish() {
        let mut stage = Stage::default();
        let id = stage.click(Click::new(10.0, 10.0), VIEWPORT).spawned.unwrap().id;

        for expected in 0..11 {
            assert_eq!(stage.tick(id), FrameTick::Show(expected));
        }
        assert_eq!(stage.tick(id), FrameTick::Finished);
        assert_eq!(stage.tick(id), FrameTick::Finished);
        assert_eq!(stage.frames_shown(), 11);
    }

    #[test]
    fn replaced_splash_ticks_are_stale() {
        let mut stage = Stage::default();
        let old = stage.click(Click::new(10.0, 10.0), VIEWPORT).spawned.unwrap().id;
        assert_eq!(stage.tick(old), FrameTick::Show(0));
        assert_eq!(stage.tick(old), FrameTick::Show(1));

        let new = stage.click(Click::new(10.0, 10.0), VIEWPORT).spawned.unwrap().id;
        assert_eq!(stage.tick(old), FrameTick::Stale);
        // The new splash starts from frame 0 regardless of the old one's progress.
        assert_eq!(stage.tick(new), FrameTick::Show(0));
    }

    #[test]
    fn at_most_one_splash_across_many_clicks() {
        let mut stage = Stage::default();
        let mut last = None;
        for i in 0..50 {
            let x = (i * 97 % 1000) as f64;
            let out = stage.click(Click::new(x, 400.0), VIEWPORT);
            if let Some(spawned) = out.spawned {
                assert_eq!(out.replaced, last);
                last = Some(spawned.id);
            }
            assert_eq!(stage.live_splash().map(|s| s.id), last);
        }
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let cfg = StageConfig {
            frame_count: 0,
            ..StageConfig::default()
        };
        assert_eq!(Stage::try_new(cfg).unwrap_err(), StageError::NoFrames);
        assert!(Stage::try_new(StageConfig::default()).is_ok());
    }
}
