// File: crates/wxline-core/src/ticks.rs
// Summary: Nice tick generation and label formatting for linear and UTC time domains.

use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Timelike, Utc};

/// One axis tick: position in range units plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

// ---- linear -----------------------------------------------------------------

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Round half toward +inf, so -2.5 rounds to -2 like the usual tick math expects.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Returns (i1, i2, inc): ticks are i*inc (inc > 0) or i/-inc (inc < 0) for i in i1..=i2.
fn tick_increment(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
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
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * k);
        i2 = round_half_up(stop * k);
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = round_half_up(start / k);
        i2 = round_half_up(stop / k);
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_increment(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced round values within [start, stop].
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_increment(lo, hi, count as f64);
    if !(i2 >= i1) { return Vec::new(); }
    let n = (i2 - i1 + 1.0) as usize;
    let mut ticks = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect::<Vec<_>>();
    if reverse { ticks.reverse(); }
    ticks
}

/// Spacing between ticks that [`linear_ticks`] would produce.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_increment(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Fixed decimal places needed to tell ticks `step` apart.
fn precision_fixed(step: f64) -> usize {
    let exp = (step.abs().log10() + 1e-9).floor();
    if exp.is_finite() && exp < 0.0 { (-exp) as usize } else { 0 }
}

/// Format `value` with grouped thousands and enough decimals for `step`.
/// Negative values use the Unicode minus sign.
pub fn format_linear(value: f64, step: f64) -> String {
    let digits = format!("{:.*}", precision_fixed(step), value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };
    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("\u{2212}{grouped}")
    } else {
        grouped
    }
}

// ---- time -------------------------------------------------------------------

const DUR_SECOND: f64 = 1_000.0;
const DUR_MINUTE: f64 = DUR_SECOND * 60.0;
const DUR_HOUR: f64 = DUR_MINUTE * 60.0;
const DUR_DAY: f64 = DUR_HOUR * 24.0;
const DUR_WEEK: f64 = DUR_DAY * 7.0;
const DUR_MONTH: f64 = DUR_DAY * 30.0;
const DUR_YEAR: f64 = DUR_DAY * 365.0;

/// Upper bound on interval boundaries walked for one axis.
const MAX_WALK: usize = 100_000;

/// Calendar unit used to place time ticks. All arithmetic is in UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    /// Weeks start on Sunday.
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub fn floor(self, t: DateTime<Utc>) -> DateTime<Utc> {
        let date = t.date_naive();
        let naive = match self {
            Self::Second => date.and_hms_opt(t.hour(), t.minute(), t.second()),
            Self::Minute => date.and_hms_opt(t.hour(), t.minute(), 0),
            Self::Hour => date.and_hms_opt(t.hour(), 0, 0),
            Self::Day => date.and_hms_opt(0, 0, 0),
            Self::Week => {
                let back = t.weekday().num_days_from_sunday() as i64;
                (date - Duration::days(back)).and_hms_opt(0, 0, 0)
            }
            Self::Month => date.with_day(1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            Self::Year => date
                .with_day(1)
                .and_then(|d| d.with_month(1))
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
        };
        naive.map(|n| Utc.from_utc_datetime(&n)).unwrap_or(t)
    }

    pub fn offset(self, t: DateTime<Utc>, n: u32) -> Option<DateTime<Utc>> {
        let n64 = i64::from(n);
        match self {
            Self::Second => t.checked_add_signed(Duration::seconds(n64)),
            Self::Minute => t.checked_add_signed(Duration::minutes(n64)),
            Self::Hour => t.checked_add_signed(Duration::hours(n64)),
            Self::Day => t.checked_add_signed(Duration::days(n64)),
            Self::Week => t.checked_add_signed(Duration::weeks(n64)),
            Self::Month => t.checked_add_months(Months::new(n)),
            Self::Year => t.checked_add_months(Months::new(n.saturating_mul(12))),
        }
    }

    /// Smallest boundary of this unit at or after `t`.
    pub fn ceil(self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let f = self.floor(t);
        if f == t { Some(t) } else { self.offset(f, 1) }
    }

    /// Value that a tick step must divide for the boundary to be kept.
    fn field(self, t: DateTime<Utc>) -> i64 {
        match self {
            Self::Second => t.second() as i64,
            Self::Minute => t.minute() as i64,
            Self::Hour => t.hour() as i64,
            Self::Day => t.day0() as i64,
            Self::Week => 0,
            Self::Month => t.month0() as i64,
            Self::Year => t.year() as i64,
        }
    }
}

/// Interval ladder: (unit, step, approximate duration in ms).
const TICK_INTERVALS: [(TimeUnit, u32, f64); 17] = [
    (TimeUnit::Second, 1, DUR_SECOND),
    (TimeUnit::Second, 5, 5.0 * DUR_SECOND),
    (TimeUnit::Second, 15, 15.0 * DUR_SECOND),
    (TimeUnit::Second, 30, 30.0 * DUR_SECOND),
    (TimeUnit::Minute, 1, DUR_MINUTE),
    (TimeUnit::Minute, 5, 5.0 * DUR_MINUTE),
    (TimeUnit::Minute, 15, 15.0 * DUR_MINUTE),
    (TimeUnit::Minute, 30, 30.0 * DUR_MINUTE),
    (TimeUnit::Hour, 1, DUR_HOUR),
    (TimeUnit::Hour, 3, 3.0 * DUR_HOUR),
    (TimeUnit::Hour, 6, 6.0 * DUR_HOUR),
    (TimeUnit::Hour, 12, 12.0 * DUR_HOUR),
    (TimeUnit::Day, 1, DUR_DAY),
    (TimeUnit::Day, 2, 2.0 * DUR_DAY),
    (TimeUnit::Week, 1, DUR_WEEK),
    (TimeUnit::Month, 1, DUR_MONTH),
    (TimeUnit::Month, 3, 3.0 * DUR_MONTH),
];

/// Spacing chosen for a time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStep {
    Millis(f64),
    Calendar(TimeUnit, u32),
}

/// Pick the interval closest to `(stop - start) / count`.
pub fn time_step(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> TimeStep {
    let (a, b) = (start.timestamp_millis() as f64, stop.timestamp_millis() as f64);
    let target = (b - a).abs() / count.max(1) as f64;
    let i = TICK_INTERVALS.partition_point(|&(_, _, dur)| dur <= target);
    if i == TICK_INTERVALS.len() {
        let years = tick_step(a / DUR_YEAR, b / DUR_YEAR, count).abs();
        return TimeStep::Calendar(TimeUnit::Year, years.round().max(1.0) as u32);
    }
    if i == 0 {
        return TimeStep::Millis(tick_step(a, b, count).abs().max(1.0));
    }
    let (lo, hi) = (TICK_INTERVALS[i - 1], TICK_INTERVALS[i]);
    let (unit, step, _) = if target / lo.2 < hi.2 / target { lo } else { hi };
    TimeStep::Calendar(unit, step)
}

/// Tick instants inside [start, stop], ascending.
pub fn time_ticks(start: DateTime<Utc>, stop: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    if count == 0 { return Vec::new(); }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    if lo == hi { return vec![lo]; }
    match time_step(lo, hi, count) {
        TimeStep::Millis(step) => {
            let (a, b) = (lo.timestamp_millis() as f64, hi.timestamp_millis() as f64);
            let first = (a / step).ceil() as i64;
            let last = (b / step).floor() as i64;
            (first..=last)
                .filter_map(|k| DateTime::from_timestamp_millis((k as f64 * step) as i64))
                .collect()
        }
        TimeStep::Calendar(unit, step) => {
            let mut out = Vec::new();
            let mut t = unit.ceil(lo);
            let mut walked = 0;
            while let Some(cur) = t {
                if cur > hi || walked >= MAX_WALK { break; }
                if step <= 1 || unit.field(cur) % i64::from(step) == 0 {
                    out.push(cur);
                }
                t = unit.offset(cur, 1);
                walked += 1;
            }
            out
        }
    }
}

/// Label a time tick with the coarsest format that still identifies it.
pub fn format_time(t: DateTime<Utc>) -> String {
    let fmt = if TimeUnit::Second.floor(t) < t {
        ".%3f"
    } else if TimeUnit::Minute.floor(t) < t {
        ":%S"
    } else if TimeUnit::Hour.floor(t) < t {
        "%I:%M"
    } else if TimeUnit::Day.floor(t) < t {
        "%I %p"
    } else if TimeUnit::Month.floor(t) < t {
        if TimeUnit::Week.floor(t) < t { "%a %d" } else { "%b %d" }
    } else if TimeUnit::Year.floor(t) < t {
        "%B"
    } else {
        "%Y"
    };
    t.format(fmt).to_string()
}
