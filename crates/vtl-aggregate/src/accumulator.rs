// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::fmt::Debug;
use vtl_type::Value;

/// The running state of one reducer fold. `combine` must be
/// associative so future parallel folds can partition the input
/// arbitrarily and still agree with sequential evaluation:
/// `combine(reduce(G1), reduce(G2)) == reduce(G1 ∪ G2)`.
pub trait Accumulator: Debug + Send + Sync + 'static {
    fn accumulate(&mut self, value: &Value);
    fn combine(&mut self, other: &dyn Accumulator);
    fn finish(&self) -> Value;

    /// Supports the concrete-type downcast every `combine` impl needs to
    /// merge with a sibling accumulator built by the same reducer.
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `count`: takes no expression, counts data points including nulls.
#[derive(Debug, Default, Clone)]
pub struct CountAccumulator {
    count: i64,
}

impl Accumulator for CountAccumulator {
    fn accumulate(&mut self, _value: &Value) {
        self.count += 1;
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        self.count += downcast::<Self>(other).count;
    }

    fn finish(&self) -> Value {
        Value::Integer(self.count)
    }
}

/// `sum`: Integer input stays Integer, Number input stays Number, nulls are
/// skipped. An empty or all-null group sums to zero, the standard identity
/// for summation over an empty set.
#[derive(Debug, Clone, Copy)]
pub enum SumAccumulator {
    Integer(i64),
    Number(f64),
}

impl Accumulator for SumAccumulator {
    fn accumulate(&mut self, value: &Value) {
        match (&mut *self, value) {
            (SumAccumulator::Integer(acc), Value::Integer(v)) => {
                *acc = acc.checked_add(*v).unwrap_or(*acc);
            }
            (SumAccumulator::Number(acc), _) => {
                if let Some(v) = value.as_f64() {
                    *acc += v;
                }
            }
            (SumAccumulator::Integer(_), Value::Null) => {}
            _ => {}
        }
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        match (&mut *self, other) {
            (SumAccumulator::Integer(a), SumAccumulator::Integer(b)) => {
                *a = a.checked_add(*b).unwrap_or(*a);
            }
            (SumAccumulator::Number(a), SumAccumulator::Number(b)) => *a += b,
            _ => unreachable!("sum accumulators of the same reducer always share a variant"),
        }
    }

    fn finish(&self) -> Value {
        match self {
            SumAccumulator::Integer(v) => Value::Integer(*v),
            SumAccumulator::Number(v) => Value::Number(*v),
        }
    }
}

/// `avg`: result is always Number; nulls skipped; empty input yields null.
#[derive(Debug, Default, Clone, Copy)]
pub struct AvgAccumulator {
    sum: f64,
    count: i64,
}

impl Accumulator for AvgAccumulator {
    fn accumulate(&mut self, value: &Value) {
        if let Some(v) = value.as_f64() {
            self.sum += v;
            self.count += 1;
        }
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        self.sum += other.sum;
        self.count += other.count;
    }

    fn finish(&self) -> Value {
        if self.count == 0 { Value::Null } else { Value::Number(self.sum / self.count as f64) }
    }
}

/// `median`: if any input is null the result is null; otherwise sort
/// ascending and average the two middle values for an even count, take the
/// middle value for an odd count; empty input yields null.
#[derive(Debug, Default, Clone)]
pub struct MedianAccumulator {
    values: Vec<f64>,
    any_null: bool,
}

impl Accumulator for MedianAccumulator {
    fn accumulate(&mut self, value: &Value) {
        match value.as_f64() {
            Some(v) => self.values.push(v),
            None if value.is_null() => self.any_null = true,
            None => {}
        }
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        self.values.extend_from_slice(&other.values);
        self.any_null |= other.any_null;
    }

    fn finish(&self) -> Value {
        if self.any_null || self.values.is_empty() {
            return Value::Null;
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = sorted.len();
        let median = if n % 2 == 1 { sorted[n / 2] } else { (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0 };
        Value::Number(median)
    }
}

fn value_ordering(a: &Value, b: &Value) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.as_str().cmp(b.as_str()),
        (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

/// `min`: result type matches input type. Nulls sort first under natural
/// order, so any null present makes the group's minimum null. Empty input
/// yields null.
#[derive(Debug, Default, Clone)]
pub struct MinAccumulator {
    best: Option<Value>,
    any_null: bool,
    any_seen: bool,
}

impl Accumulator for MinAccumulator {
    fn accumulate(&mut self, value: &Value) {
        self.any_seen = true;
        if value.is_null() {
            self.any_null = true;
            return;
        }
        self.best = Some(match self.best.take() {
            Some(current) if value_ordering(value, &current) == std::cmp::Ordering::Less => {
                value.clone()
            }
            Some(current) => current,
            None => value.clone(),
        });
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        self.any_seen |= other.any_seen;
        self.any_null |= other.any_null;
        self.best = match (self.best.take(), other.best.clone()) {
            (Some(a), Some(b)) => {
                Some(if value_ordering(&a, &b) != std::cmp::Ordering::Greater { a } else { b })
            }
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
    }

    fn finish(&self) -> Value {
        if !self.any_seen || self.any_null { return Value::Null }
        self.best.clone().unwrap_or(Value::Null)
    }
}

/// `max`: result type matches input type. Nulls sort first under natural
/// order, so they never win the maximum;
/// a group made up entirely of nulls still yields null. Empty input yields
/// null.
#[derive(Debug, Default, Clone)]
pub struct MaxAccumulator {
    best: Option<Value>,
    any_seen: bool,
}

impl Accumulator for MaxAccumulator {
    fn accumulate(&mut self, value: &Value) {
        self.any_seen = true;
        if value.is_null() {
            return;
        }
        self.best = Some(match self.best.take() {
            Some(current) if value_ordering(value, &current) == std::cmp::Ordering::Greater => {
                value.clone()
            }
            Some(current) => current,
            None => value.clone(),
        });
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        self.any_seen |= other.any_seen;
        self.best = match (self.best.take(), other.best.clone()) {
            (Some(a), Some(b)) => {
                Some(if value_ordering(&a, &b) != std::cmp::Ordering::Less { a } else { b })
            }
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
    }

    fn finish(&self) -> Value {
        if !self.any_seen { return Value::Null }
        self.best.clone().unwrap_or(Value::Null)
    }
}

/// Which central-moment statistic a [`MomentAccumulator`] finishes as:
/// population vs. sample divisor, and variance vs. its square root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentKind {
    VarPop,
    VarSamp,
    StddevPop,
    StddevSamp,
}

/// Shared accumulator for `var_pop`/`var_samp`/`stddev_pop`/`stddev_samp`:
/// sum and sum-of-squares of non-null values. Any null in the group forces
/// the result to null; an empty or singleton group yields `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct MomentAccumulator {
    kind: MomentKind,
    sum: f64,
    sum_sq: f64,
    count: i64,
    any_null: bool,
}

impl MomentAccumulator {
    pub fn new(kind: MomentKind) -> Self {
        Self { kind, sum: 0.0, sum_sq: 0.0, count: 0, any_null: false }
    }
}

impl Accumulator for MomentAccumulator {
    fn accumulate(&mut self, value: &Value) {
        match value.as_f64() {
            Some(v) => {
                self.sum += v;
                self.sum_sq += v * v;
                self.count += 1;
            }
            None => self.any_null = true,
        }
    }

    fn combine(&mut self, other: &dyn Accumulator) {
        let other = downcast::<Self>(other);
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
        self.any_null |= other.any_null;
    }

    fn finish(&self) -> Value {
        if self.any_null {
            return Value::Null;
        }
        if self.count <= 1 {
            return Value::Number(0.0);
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let divisor = match self.kind {
            MomentKind::VarPop | MomentKind::StddevPop => n,
            MomentKind::VarSamp | MomentKind::StddevSamp => n - 1.0,
        };
        let variance = (self.sum_sq - n * mean * mean) / divisor;
        let variance = variance.max(0.0);
        match self.kind {
            MomentKind::VarPop | MomentKind::VarSamp => Value::Number(variance),
            MomentKind::StddevPop | MomentKind::StddevSamp => Value::Number(variance.sqrt()),
        }
    }
}

fn downcast<T: 'static>(acc: &dyn Accumulator) -> &T {
    acc.as_any()
        .downcast_ref::<T>()
        .expect("combine is only ever called on accumulators built by the same reducer")
}
