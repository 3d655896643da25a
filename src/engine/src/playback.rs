/// Frames advanced per playback tick.
pub const FRAME_STEP: u32 = 5;
/// Ticker period while playing, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 120;
/// Nominal frame rate of the analyzed footage, for timecode display.
pub const FRAMES_PER_SECOND: u32 = 30;

/// Transport state for one viewer instance: Paused (initial) or
/// Playing. The state itself carries no timer; a driver calls `tick`
/// at the fixed period while the machine reports `is_playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    current_frame: u32,
    total_frames: u32,
    playing: bool,
}

impl Playback {
    pub fn new(total_frames: u32) -> Self {
        Playback {
            current_frame: 0,
            total_frames,
            playing: false,
        }
    }

    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    #[inline]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Jump to a frame. Clamps into the valid range and leaves the
    /// play/pause state untouched.
    pub fn seek(&mut self, frame: u32) {
        self.current_frame = frame.min(self.frame_bound() - 1);
    }

    /// One timer tick: advance by `FRAME_STEP` and wrap to the start
    /// at the end of the range (playback loops, it never halts on its
    /// own). No-op while paused.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }

        let bound = self.frame_bound();
        self.current_frame = if self.current_frame + FRAME_STEP >= bound {
            0
        } else {
            self.current_frame + FRAME_STEP
        };
    }

    // Degenerate analyses report zero frames; treat them as a single
    // frame so stepping and seeking never divide by zero.
    #[inline]
    fn frame_bound(&self) -> u32 {
        self.total_frames.max(1)
    }
}

/// `mm:ss` position of a frame at the nominal frame rate.
pub fn timecode(frame: u32) -> String {
    let seconds = frame / FRAMES_PER_SECOND;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
