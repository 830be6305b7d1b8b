use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use super::{SpinTiming, slice_under_pointer};

/// Decelerating curve, `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Visual rotation after `progress` of the animation towards `target_degrees`
pub fn rotation_at(target_degrees: u32, progress: f64) -> f64 {
    f64::from(target_degrees) * ease_out_cubic(progress)
}

/// One rendered step of a spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Linear time progress in `[0, 1]`
    pub progress: f64,
    pub rotation_degrees: f64,
    /// Slice currently passing the pointer
    pub slice_index: usize,
}

/// How an animation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    Completed,
    Cancelled,
}

/// Time-driven rotation from 0 to a target angle
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    target_degrees: u32,
    slice_count: usize,
    timing: SpinTiming,
}

impl Animation {
    pub fn new(target_degrees: u32, slice_count: usize, timing: SpinTiming) -> Self {
        Self {
            target_degrees,
            slice_count,
            timing,
        }
    }

    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        let duration = self.timing.duration();
        if duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    pub fn frame_at(&self, progress: f64) -> Frame {
        let rotation_degrees = rotation_at(self.target_degrees, progress);
        Frame {
            progress,
            rotation_degrees,
            slice_index: slice_under_pointer(rotation_degrees, self.slice_count),
        }
    }

    /// Emit frames until the duration has elapsed or `cancel` is raised
    ///
    /// A completed run always ends with exactly one frame at progress 1.0.
    /// Blocks the calling thread; the selector runs it on its own thread.
    pub fn run(&self, cancel: &AtomicBool, mut on_frame: impl FnMut(Frame)) -> AnimationEnd {
        let started = Instant::now();

        loop {
            if cancel.load(Ordering::Acquire) {
                return AnimationEnd::Cancelled;
            }

            let progress = self.progress_at(started.elapsed());
            on_frame(self.frame_at(progress));
            if progress >= 1.0 {
                return AnimationEnd::Completed;
            }

            let remaining = self.timing.duration().saturating_sub(started.elapsed());
            thread::sleep(self.timing.frame_interval().min(remaining));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_monotone_and_decelerating() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_cubic(f64::from(i) / 100.0)).collect();
        let steps: Vec<f64> = samples.windows(2).map(|w| w[1] - w[0]).collect();

        assert!(steps.iter().all(|step| *step >= 0.0));
        assert!(steps.first() > steps.last());
    }

    #[test]
    fn test_rotation_at() {
        assert_eq!(rotation_at(1440, 0.0), 0.0);
        assert_eq!(rotation_at(1440, 1.0), 1440.0);
        assert_eq!(rotation_at(2000, 0.5), 1750.0);
    }

    #[test]
    fn test_instant_animation_emits_single_final_frame() {
        let animation = Animation::new(1476, 10, SpinTiming::instant());
        let mut frames = Vec::new();

        let end = animation.run(&AtomicBool::new(false), |frame| frames.push(frame));

        assert_eq!(end, AnimationEnd::Completed);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].progress, 1.0);
        assert_eq!(frames[0].rotation_degrees, 1476.0);
        assert_eq!(frames[0].slice_index, 9);
    }

    #[test]
    fn test_timed_animation_ends_on_final_frame() {
        let timing = SpinTiming::new(Duration::from_millis(40), Duration::from_millis(5));
        let animation = Animation::new(1800, 4, timing);
        let mut frames = Vec::new();

        let end = animation.run(&AtomicBool::new(false), |frame| frames.push(frame));

        assert_eq!(end, AnimationEnd::Completed);
        assert!(frames.len() > 1);
        assert_eq!(frames.iter().filter(|f| f.progress >= 1.0).count(), 1);
        assert!(frames.windows(2).all(|w| w[0].rotation_degrees <= w[1].rotation_degrees));
    }

    #[test]
    fn test_cancelled_animation_stops() {
        let animation = Animation::new(1800, 4, SpinTiming::default());
        let cancel = AtomicBool::new(true);
        let mut frames = 0;

        let end = animation.run(&cancel, |_| frames += 1);

        assert_eq!(end, AnimationEnd::Cancelled);
        assert_eq!(frames, 0);
    }
}
