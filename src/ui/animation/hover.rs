//! Exclusive hover fades
//!
//! Only one node is hovered at a time, so two slots are enough: the node
//! fading in and the node fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// One key moving towards a target progress
#[derive(Debug)]
struct Fade<K> {
    key: K,
    anim: Animated<f32>,
}

impl<K> Fade<K> {
    fn towards(key: K, from: f32, to: f32) -> Self {
        let mut anim = Animated::transition(from, hover_easing());
        anim.update(to.into());
        Self { key, anim }
    }

    fn progress(&self) -> f32 {
        *self.anim.value()
    }

    fn is_settled_at_zero(&self) -> bool {
        !self.anim.is_animating() && self.progress() < 0.01
    }
}

/// Hover state for a family of keys where at most one is hovered
#[derive(Debug)]
pub struct HoverAnimations<K: PartialEq + Clone> {
    entering: Option<Fade<K>>,
    leaving: Option<Fade<K>>,
    /// Skip easing and jump straight to 0 or 1
    instant: bool,
}

impl<K: PartialEq + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<K: PartialEq + Clone> HoverAnimations<K> {
    /// Create an empty manager; `animated = false` disables easing
    pub fn new(animated: bool) -> Self {
        Self {
            entering: None,
            leaving: None,
            instant: !animated,
        }
    }

    /// Currently hovered key, if any
    pub fn hovered(&self) -> Option<&K> {
        self.entering.as_ref().map(|fade| &fade.key)
    }

    /// Move the hover to `key`, or clear it with `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.hovered() == key.as_ref() {
            return;
        }

        let resumed = match (&self.leaving, &key) {
            (Some(leaving), Some(key)) if leaving.key == *key => leaving.progress(),
            _ => 0.0,
        };

        if let Some(old) = self.entering.take() {
            let from = old.progress();
            self.leaving = Some(Fade::towards(old.key, from, 0.0));
        }

        self.entering = key.map(|key| Fade::towards(key, resumed, 1.0));
    }

    /// Highlight strength for `key`, from 0.0 to 1.0
    pub fn progress(&self, key: &K) -> f32 {
        if self.instant {
            return if self.hovered() == Some(key) { 1.0 } else { 0.0 };
        }

        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|fade| fade.key == *key)
            .map(Fade::progress)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }

    /// Whether a frame subscription is needed
    pub fn is_animating(&self) -> bool {
        !self.instant
            && [&self.entering, &self.leaving]
                .into_iter()
                .flatten()
                .any(|fade| fade.anim.is_animating())
    }

    /// Advance both fades and drop the leaving one once it has settled
    pub fn tick(&mut self, now: Instant) {
        if let Some(fade) = self.entering.as_mut() {
            fade.anim.tick(now);
        }
        if let Some(fade) = self.leaving.as_mut() {
            fade.anim.tick(now);
            if fade.is_settled_at_zero() {
                self.leaving = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_exclusive() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new(false);
        assert_eq!(anims.hovered(), None);

        anims.set_hovered(Some(1));
        assert_eq!(anims.hovered(), Some(&1));
        assert_eq!(anims.progress(&1), 1.0);

        anims.set_hovered(Some(2));
        assert_eq!(anims.hovered(), Some(&2));
        assert_eq!(anims.progress(&1), 0.0);
        assert_eq!(anims.progress(&2), 1.0);

        anims.set_hovered(None);
        assert_eq!(anims.hovered(), None);
        assert_eq!(anims.progress(&2), 0.0);
    }

    #[test]
    fn instant_mode_never_requests_frames() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new(false);
        anims.set_hovered(Some(7));
        assert!(!anims.is_animating());
    }

    #[test]
    fn animated_progress_stays_in_range() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::new(true);
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_hovered(Some(1));
        anims.tick(Instant::now() + Duration::from_millis(50));
        let p = anims.progress(&1);
        assert!((0.0..=1.0).contains(&p));

        anims.set_hovered(Some(2));
        assert!((0.0..=1.0).contains(&anims.progress(&1)));
        assert!((0.0..=1.0).contains(&anims.progress(&2)));
    }

    #[test]
    fn unknown_keys_have_no_progress() {
        let mut anims: HoverAnimations<u32> = HoverAnimations::default();
        anims.set_hovered(Some(1));
        assert_eq!(anims.progress(&99), 0.0);
    }
}
