//! Timed animation between two bookmarks.
//!
//! Feed the bookmark returned by [`BookmarkTransition::advance`] to
//! [`Manipulator::jump_to_bookmark`](crate::manipulator::Manipulator::jump_to_bookmark)
//! every frame until the transition finishes.

use crate::bookmark::Bookmark;
use crate::error::CamutilsError;
use crate::util::easing::EasingFunction;

/// An in-flight transition from one bookmark to another of the same mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookmarkTransition {
    from: Bookmark,
    to: Bookmark,
    /// Total duration in seconds. Zero finishes on the first advance.
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

impl BookmarkTransition {
    /// Transition lasting `duration` seconds (negative values are treated
    /// as zero).
    pub fn new(
        from: Bookmark,
        to: Bookmark,
        duration: f32,
        easing: EasingFunction,
    ) -> Result<Self, CamutilsError> {
        if from.mode() != to.mode() {
            return Err(CamutilsError::BookmarkModeMismatch {
                expected: from.mode(),
                found: to.mode(),
            });
        }
        Ok(Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        })
    }

    /// Transition between two map bookmarks timed by the length of the
    /// zoom-and-pan path, travelled at `velocity` path units per second.
    ///
    /// Fails with [`CamutilsError::UnsupportedTransition`] for non-map
    /// bookmarks.
    pub fn with_suggested_duration(
        from: Bookmark,
        to: Bookmark,
        velocity: f64,
        easing: EasingFunction,
    ) -> Result<Self, CamutilsError> {
        let length = Bookmark::duration(&from, &to)?;
        let seconds = if velocity > 0.0 { length / velocity } else { 0.0 };
        log::debug!("map transition: path length {length:.3}, {seconds:.3}s");
        Self::new(from, to, seconds as f32, easing)
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Destination bookmark.
    #[must_use]
    pub fn target(&self) -> &Bookmark {
        &self.to
    }

    /// Linear time progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the destination has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `delta_time` seconds and return the bookmark to show.
    /// Once finished this is exactly the destination.
    pub fn advance(&mut self, delta_time: f32) -> Bookmark {
        self.elapsed += delta_time.max(0.0);
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.evaluate(self.progress());
        // Modes were validated in `new`, so interpolation cannot fail.
        Bookmark::interpolate(&self.from, &self.to, f64::from(t))
            .unwrap_or(self.to)
    }
}
