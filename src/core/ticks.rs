//! "Nice" tick generation for linear axes.
//!
//! Tick increments are `1`, `2`, `5` or `10` times a power of ten, chosen so
//! that roughly `count` ticks cover `[start, stop]`. Negative powers are
//! expressed as a divisor to keep decimal ticks such as `0.02` exact.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    /// Positive: multiply the index. Negative: divide the index by `-inc`.
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, inc);
    if power < 0.0 {
        let divisor = 10f64.powf(-power) / factor;
        first = (start * divisor).round();
        last = (stop * divisor).round();
        if first / divisor < start {
            first += 1.0;
        }
        if last / divisor > stop {
            last -= 1.0;
        }
        inc = -divisor;
    } else {
        let multiplier = 10f64.powf(power) * factor;
        first = (start / multiplier).round();
        last = (stop / multiplier).round();
        if first * multiplier < start {
            first += 1.0;
        }
        if last * multiplier > stop {
            last -= 1.0;
        }
        inc = multiplier;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    Some(TickSpec {
        first: first as i64,
        last: last as i64,
        inc,
    })
}

/// Returns ascending tick values inside `[start, stop]`.
///
/// Reversed inputs are accepted; the output then runs from `start` towards
/// `stop`. Degenerate or non-finite inputs yield an empty vector, except
/// `start == stop` which yields that single value.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reversed = stop < start;
    let (low, high) = if reversed { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(low, high, count as f64) else {
        return Vec::new();
    };
    if spec.last < spec.first {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (spec.first..=spec.last)
        .map(|index| {
            let index = index as f64;
            if spec.inc < 0.0 {
                index / -spec.inc
            } else {
                index * spec.inc
            }
        })
        .collect();
    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Returns the tick increment that [`nice_ticks`] would use, if any.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    let spec = tick_spec(low, high, count as f64)?;
    Some(if spec.inc < 0.0 { 1.0 / -spec.inc } else { spec.inc })
}
