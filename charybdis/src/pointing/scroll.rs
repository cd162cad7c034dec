use usbd_hid::descriptor::MouseReport;

use crate::pointing::Side;
use crate::pointing::combine::combine_reports;

pub const DEFAULT_SCROLL_DIVISOR: f32 = 100.0;

/// Largest scroll step a single tick can emit
const MAX_STEP: i32 = 127;

/// Divisors converting raw sensor counts into scroll steps, larger is slower.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollConfig {
    pub divisor_h: f32,
    pub divisor_v: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            divisor_h: DEFAULT_SCROLL_DIVISOR,
            divisor_v: DEFAULT_SCROLL_DIVISOR,
        }
    }
}

/// Carries scroll motion that hasn't made a whole step yet from one report tick to the next.
///
/// Raw sensor counts are accumulated, so whole-number divisors never drift.
/// The pending fraction, `raw / divisor`, stays strictly inside (-1, 1) between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollAccumulator {
    /// Pending horizontal counts
    h: f32,
    /// Pending vertical counts
    v: f32,
    /// Divisors of the last tick, used to report the pending fraction
    divisor_h: f32,
    divisor_v: f32,
}

impl ScrollAccumulator {
    pub const fn new() -> Self {
        Self {
            h: 0.0,
            v: 0.0,
            divisor_h: DEFAULT_SCROLL_DIVISOR,
            divisor_v: DEFAULT_SCROLL_DIVISOR,
        }
    }

    /// Pending horizontal fraction
    pub fn horizontal(&self) -> f32 {
        self.h / self.divisor_h
    }

    /// Pending vertical fraction
    pub fn vertical(&self) -> f32 {
        self.v / self.divisor_v
    }

    /// Convert the motion in `report` into scroll steps.
    ///
    /// `pan` gets the horizontal step, `wheel` the negated vertical step, and
    /// `x`/`y` are cleared so the motion doesn't also move the cursor.
    pub fn apply(&mut self, report: &mut MouseReport, config: &ScrollConfig) {
        self.divisor_h = config.divisor_h;
        self.divisor_v = config.divisor_v;
        self.h += report.x as f32;
        self.v += report.y as f32;

        let step_h = Self::take_step(&mut self.h, config.divisor_h);
        let step_v = Self::take_step(&mut self.v, config.divisor_v);
        trace!("Scroll step h={} v={}, pending counts h={} v={}", step_h, step_v, self.h, self.v);

        report.pan = step_h;
        report.wheel = -step_v;
        report.x = 0;
        report.y = 0;
    }

    /// Scroll with the `scroll_side` half and merge it with the other half's report.
    pub fn process_combined(
        &mut self,
        config: &ScrollConfig,
        scroll_side: Side,
        mut left: MouseReport,
        mut right: MouseReport,
    ) -> MouseReport {
        match scroll_side {
            Side::Left => self.apply(&mut left, config),
            Side::Right => self.apply(&mut right, config),
        }
        combine_reports(left, right)
    }

    /// Remove the whole steps from `counts` and return them.
    fn take_step(counts: &mut f32, divisor: f32) -> i8 {
        // `as` truncates toward zero
        let whole = (*counts / divisor) as i32;
        *counts -= whole as f32 * divisor;
        if whole.unsigned_abs() > MAX_STEP as u32 {
            warn!("Scroll step {} exceeds the report range, clamped", whole);
        }
        whole.clamp(-MAX_STEP, MAX_STEP) as i8
    }
}

impl Default for ScrollAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
