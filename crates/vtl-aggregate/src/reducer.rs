// SPDX-License-Identifier: Apache-2.0

use crate::accumulator::{
    Accumulator, AvgAccumulator, CountAccumulator, MaxAccumulator, MedianAccumulator,
    MinAccumulator, MomentAccumulator, MomentKind, SumAccumulator,
};
use std::fmt::Debug;
use vtl_diagnostic::{Error, Result};
use vtl_type::ValueType;

/// The ten built-in statistical functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReducerKind {
    Count,
    Sum,
    Avg,
    Median,
    Min,
    Max,
    StddevPop,
    StddevSamp,
    VarPop,
    VarSamp,
}

impl ReducerKind {
    fn name(self) -> &'static str {
        match self {
            ReducerKind::Count => "count",
            ReducerKind::Sum => "sum",
            ReducerKind::Avg => "avg",
            ReducerKind::Median => "median",
            ReducerKind::Min => "min",
            ReducerKind::Max => "max",
            ReducerKind::StddevPop => "stddev_pop",
            ReducerKind::StddevSamp => "stddev_samp",
            ReducerKind::VarPop => "var_pop",
            ReducerKind::VarSamp => "var_samp",
        }
    }
}

/// A type-directed reducer, built for one declared input type and emitting
/// one declared result type. Built once per `aggregate`
/// clause via [`Reducer::build`]'s dispatch table, keyed on the child
/// expression's scalar type, rather than branching on a type tag at fold
/// time.
pub trait Reducer: Debug + Send + Sync {
    fn kind(&self) -> ReducerKind;
    fn result_type(&self) -> ValueType;
    fn new_accumulator(&self) -> Box<dyn Accumulator>;
}

macro_rules! simple_reducer {
    ($struct_name:ident, $kind:expr, $result_type:expr, $accumulator:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $struct_name {
            result_type: ValueType,
        }

        impl Reducer for $struct_name {
            fn kind(&self) -> ReducerKind {
                $kind
            }

            fn result_type(&self) -> ValueType {
                self.result_type
            }

            fn new_accumulator(&self) -> Box<dyn Accumulator> {
                Box::new(($accumulator)())
            }
        }
    };
}

simple_reducer!(CountReducer, ReducerKind::Count, ValueType::Integer, CountAccumulator::default);
simple_reducer!(AvgReducer, ReducerKind::Avg, ValueType::Number, AvgAccumulator::default);
simple_reducer!(MedianReducer, ReducerKind::Median, ValueType::Number, MedianAccumulator::default);

/// `sum`: Integer input produces Integer, Number input produces Number.
#[derive(Debug, Clone, Copy)]
pub struct SumReducer {
    input_type: ValueType,
}

impl Reducer for SumReducer {
    fn kind(&self) -> ReducerKind {
        ReducerKind::Sum
    }

    fn result_type(&self) -> ValueType {
        self.input_type
    }

    fn new_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(match self.input_type {
            ValueType::Integer => SumAccumulator::Integer(0),
            _ => SumAccumulator::Number(0.0),
        })
    }
}

/// `min`/`max`: result type matches the input type.
#[derive(Debug, Clone, Copy)]
pub struct MinReducer {
    input_type: ValueType,
}

impl Reducer for MinReducer {
    fn kind(&self) -> ReducerKind {
        ReducerKind::Min
    }

    fn result_type(&self) -> ValueType {
        self.input_type
    }

    fn new_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(MinAccumulator::default())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxReducer {
    input_type: ValueType,
}

impl Reducer for MaxReducer {
    fn kind(&self) -> ReducerKind {
        ReducerKind::Max
    }

    fn result_type(&self) -> ValueType {
        self.input_type
    }

    fn new_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(MaxAccumulator::default())
    }
}

/// `stddev_pop`/`stddev_samp`/`var_pop`/`var_samp`: always Number; divisor and sqrt-vs-not is carried by [`MomentKind`].
#[derive(Debug, Clone, Copy)]
pub struct MomentReducer {
    kind: ReducerKind,
    moment: MomentKind,
}

impl Reducer for MomentReducer {
    fn kind(&self) -> ReducerKind {
        self.kind
    }

    fn result_type(&self) -> ValueType {
        ValueType::Number
    }

    fn new_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(MomentAccumulator::new(self.moment))
    }
}

/// Numeric reducers (`sum`, `avg`, `median`, `min`, `max`, the four moment
/// reducers) accept Integer or Number input; `count` accepts no expression
/// at all.
fn require_numeric(kind: ReducerKind, input_type: ValueType) -> Result<()> {
    match input_type {
        ValueType::Integer | ValueType::Number => Ok(()),
        other => Err(Error::unsupported_type(format!(
            "{} does not accept {other} input",
            kind.name()
        ))),
    }
}

/// Builds the reducer matching `kind`
/// for a concrete input type, validating type-acceptance at construction
/// time rather than branching on a type tag per data point.
pub fn build(kind: ReducerKind, input_type: Option<ValueType>) -> Result<Box<dyn Reducer>> {
    if kind == ReducerKind::Count {
        return Ok(Box::new(CountReducer { result_type: ValueType::Integer }));
    }
    let input_type = input_type
        .ok_or_else(|| Error::invalid_argument(format!("{} requires an input expression", kind.name())))?;

    match kind {
        ReducerKind::Count => unreachable!("handled above"),
        ReducerKind::Sum => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(SumReducer { input_type }))
        }
        ReducerKind::Avg => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(AvgReducer { result_type: ValueType::Number }))
        }
        ReducerKind::Median => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MedianReducer { result_type: ValueType::Number }))
        }
        ReducerKind::Min => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MinReducer { input_type }))
        }
        ReducerKind::Max => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MaxReducer { input_type }))
        }
        ReducerKind::StddevPop => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MomentReducer { kind, moment: MomentKind::StddevPop }))
        }
        ReducerKind::StddevSamp => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MomentReducer { kind, moment: MomentKind::StddevSamp }))
        }
        ReducerKind::VarPop => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MomentReducer { kind, moment: MomentKind::VarPop }))
        }
        ReducerKind::VarSamp => {
            require_numeric(kind, input_type)?;
            Ok(Box::new(MomentReducer { kind, moment: MomentKind::VarSamp }))
        }
    }
}
