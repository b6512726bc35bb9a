use chrono::{DateTime, Duration, Utc};

/// Opacity of the table while a page change is pending.
pub const LOADING_TABLE_OPACITY: f32 = 0.5;

/// Linear fade-in of freshly shown rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIn {
    started_at: DateTime<Utc>,
    duration: Duration,
}

impl FadeIn {
    pub fn new(started_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// 0.0 at the start, 1.0 once `duration` has elapsed.
    pub fn opacity(&self, now: DateTime<Utc>) -> f32 {
        let total = self.duration.num_milliseconds();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = (now - self.started_at).num_milliseconds().clamp(0, total);
        elapsed as f32 / total as f32
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        now - self.started_at >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn opacity_ramps_linearly() {
        let fade = FadeIn::new(epoch(), Duration::milliseconds(300));

        assert!(fade.opacity(epoch()).abs() < f32::EPSILON);
        assert!((fade.opacity(epoch() + Duration::milliseconds(150)) - 0.5).abs() < 1e-6);
        assert!((fade.opacity(epoch() + Duration::seconds(2)) - 1.0).abs() < f32::EPSILON);
        assert!(fade.is_finished(epoch() + Duration::milliseconds(300)));
    }

    #[test]
    fn clock_before_start_is_transparent() {
        let fade = FadeIn::new(epoch() + Duration::seconds(1), Duration::milliseconds(300));
        assert!(fade.opacity(epoch()).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_is_opaque() {
        let fade = FadeIn::new(epoch(), Duration::zero());
        assert!((fade.opacity(epoch()) - 1.0).abs() < f32::EPSILON);
    }
}
