//! Splash placement and frame animation.

/// Document extent in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Click position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub x: f64,
    pub y: f64,
}

impl Click {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of a square splash, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    /// Center a `size`-pixel square on the click, then pull it back inside
    /// the viewport. On an axis narrower than `size` the coordinate is 0.
    pub fn centered_on(click: Click, viewport: Viewport, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            left: clamp_axis(click.x - half, viewport.width - size),
            top: clamp_axis(click.y - half, viewport.height - size),
        }
    }
}

#[inline]
fn clamp_axis(pos: f64, max: f64) -> f64 {
    // `f64::clamp` panics when max < 0; small viewports pin to 0 instead.
    pos.min(max).max(0.0)
}

/// Frame counter for one splash.
///
/// Each tick shows the next frame until `frame_count` frames have been
/// shown; further ticks show nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashAnimation {
    shown: u32,
    frame_count: u32,
}

impl SplashAnimation {
    pub fn new(frame_count: u32) -> Self {
        Self {
            shown: 0,
            frame_count,
        }
    }

    /// Frame index to display on this tick, if any remain.
    pub fn tick(&mut self) -> Option<u32> {
        if self.shown < self.frame_count {
            let frame = self.shown;
            self.shown += 1;
            Some(frame)
        } else {
            None
        }
    }

    pub fn frames_shown(&self) -> u32 {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.frame_count
    }
}
