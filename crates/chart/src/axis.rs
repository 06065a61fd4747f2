//! Tick derivation and label formatting for the chart axes.
//!
//! Tick selection is a presentation heuristic only: it never reorders or
//! alters the underlying dataset.

use dataplot_dataset::RaceTime;

use crate::scale::BandScale;
use crate::scale::LinearScale;
use crate::scale::TimeScale;

/// A labeled reference point along an axis, positioned in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Evenly spaced value ticks from 0 to the domain maximum, using a
/// 1/2/5 step targeting roughly `target` ticks.
pub fn linear_ticks(scale: &LinearScale, target: usize) -> Vec<Tick> {
    if scale.max() <= 0.0 {
        return Vec::new();
    }

    let step = nice_step(scale.max() / target as f64);
    let mut ticks = Vec::new();
    let mut value = 0.0;

    while value <= scale.max() * (1.0 + 1e-9) {
        ticks.push(Tick {
            position: scale.position(value),
            label: thousands(value),
        });
        value += step;
    }

    ticks
}

/// Every `stride`-th category key, positioned at the band center, to
/// keep the labels from overlapping on dense categorical axes.
pub fn band_ticks<F>(scale: &BandScale, stride: usize, label: F) -> Vec<Tick>
where
    F: Fn(&str) -> String,
{
    scale
        .keys()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % stride.max(1) == 0)
        .filter_map(|(_, key)| {
            let position = scale.position(key)? + scale.bandwidth() / 2.0;
            Some(Tick { position, label: label(key) })
        })
        .collect()
}

/// One tick per `every` calendar years across the domain, aligned to
/// multiples of `every` and labeled with the year.
pub fn year_ticks(scale: &TimeScale, every: i32) -> Vec<Tick> {
    let (min, max) = scale.domain();
    if max <= min {
        return Vec::new();
    }

    let mut year = (min.ceil() as i32).div_euclid(every) * every;
    if (year as f64) < min {
        year += every;
    }

    let mut ticks = Vec::new();
    while year as f64 <= max {
        ticks.push(Tick {
            position: scale.position(year as f64),
            label: year.to_string(),
        });
        year += every;
    }

    ticks
}

/// One tick per `step` seconds across the domain, labeled `M:SS`.
pub fn time_ticks(scale: &TimeScale, step: u32) -> Vec<Tick> {
    let (min, max) = scale.domain();
    if max <= min || step == 0 {
        return Vec::new();
    }

    let mut seconds = (min / step as f64).ceil() as u32 * step;
    let mut ticks = Vec::new();

    while seconds as f64 <= max {
        ticks.push(Tick {
            position: scale.position(seconds as f64),
            label: RaceTime::from_seconds(seconds).to_string(),
        });
        seconds += step;
    }

    ticks
}

// Rounds a raw step up to the nearest 1/2/5 multiple of a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };

    factor * magnitude
}

/// Formats a value with thousands separators and at most one decimal,
/// e.g. `16010.2` as `16,010.2` and `2000` as `2,000`.
pub fn thousands(value: f64) -> String {
    let rounded = (value.abs() * 10.0).round() / 10.0;
    let integer = rounded.trunc() as u64;
    let tenth = ((rounded - rounded.trunc()) * 10.0).round() as u64;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (integer > 0 || tenth > 0) { "-" } else { "" };
    match tenth {
        0 => format!("{sign}{grouped}"),
        _ => format!("{sign}{grouped}.{tenth}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_use_a_nice_step() {
        let scale = LinearScale::from_values([18064.7], 490.0);
        let ticks = linear_ticks(&scale, 10);

        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[1].label, "2,000");
        assert_eq!(ticks[9].label, "18,000");
        assert_eq!(ticks[0].position, 490.0);
    }

    #[test]
    fn linear_ticks_over_empty_domain() {
        let scale = LinearScale::from_values([], 490.0);

        assert!(linear_ticks(&scale, 10).is_empty());
    }

    #[test]
    fn band_ticks_keep_every_nth_key() {
        let keys = (0..45).map(|i| format!("key{i:02}"));
        let scale = BandScale::new(keys, 900.0, 0.1);
        let ticks = band_ticks(&scale, 20, |key| key.to_owned());

        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].label, "key00");
        assert_eq!(ticks[1].label, "key20");
        assert_eq!(ticks[2].label, "key40");
        assert!(ticks[0].position < ticks[1].position);
    }

    #[test]
    fn year_ticks_align_to_even_years() {
        let scale = TimeScale::new(1993.0, 2016.0, 880.0);
        let ticks = year_ticks(&scale, 2);

        assert_eq!(ticks.first().unwrap().label, "1994");
        assert_eq!(ticks.last().unwrap().label, "2016");
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn time_ticks_step_by_fifteen_seconds() {
        let scale = TimeScale::new(2210.0, 2280.0, 580.0);
        let ticks = time_ticks(&scale, 15);

        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, "37:00");
        assert_eq!(ticks.last().unwrap().label, "38:00");
    }

    #[test]
    fn thousands_groups_and_keeps_one_decimal() {
        assert_eq!(thousands(243.1), "243.1");
        assert_eq!(thousands(2000.0), "2,000");
        assert_eq!(thousands(16010.2), "16,010.2");
        assert_eq!(thousands(0.0), "0");
    }
}
