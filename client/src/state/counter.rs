//! Animated statistic counters.
//!
//! A counter runs `Pending -> Animating -> Settled`, or ends `Cancelled` when
//! its component is torn down mid-flight. Frames are sampled with
//! the animation-frame timestamp; the displayed value follows an eased curve
//! from 0 and lands exactly on the target once the duration has elapsed.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Map linear progress `t` (clamped to `[0, 1]`) onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - (1.0 - t).powi(2),
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Pending,
    Animating { started_at_ms: f64 },
    Settled,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub settled: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    easing: Easing,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64, easing: Easing) -> Self {
        Self { target, duration_ms, easing, phase: CounterPhase::Pending }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Start the clock at `now_ms`. Only the first call has any effect.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase != CounterPhase::Pending {
            return false;
        }
        self.phase = CounterPhase::Animating { started_at_ms: now_ms };
        true
    }

    /// Stop a pending or running animation. Returns `true` if it was live;
    /// settled counters keep their final value.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            CounterPhase::Pending | CounterPhase::Animating { .. } => {
                self.phase = CounterPhase::Cancelled;
                true
            }
            CounterPhase::Settled | CounterPhase::Cancelled => false,
        }
    }

    /// Sample the displayed value at `now_ms`. `None` until started and
    /// after cancellation.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&mut self, now_ms: f64) -> Option<CounterFrame> {
        let started_at_ms = match self.phase {
            CounterPhase::Pending | CounterPhase::Cancelled => return None,
            CounterPhase::Settled => return Some(self.settled_frame()),
            CounterPhase::Animating { started_at_ms } => started_at_ms,
        };

        let elapsed = (now_ms - started_at_ms).max(0.0);
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            self.phase = CounterPhase::Settled;
            return Some(self.settled_frame());
        }

        let progress = self.easing.apply(elapsed / self.duration_ms);
        let value = ((self.target as f64) * progress).floor() as u64;
        Some(CounterFrame { value: value.min(self.target), settled: false })
    }

    fn settled_frame(&self) -> CounterFrame {
        CounterFrame { value: self.target, settled: true }
    }
}

/// Parse a `data-target` attribute. Surrounding whitespace and digit-group
/// separators (`,` `_`) are accepted; anything else is rejected.
pub fn parse_target(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse() {
        Ok(target) => Some(target),
        Err(_) => None,
    }
}
