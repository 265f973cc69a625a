// towernum: a numeric tower library in Rust
// 2026

// generic.rs
//
// User-extensible fallback dispatch for the four arithmetic operators

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::arith;
use crate::error::{NumericError, Result};
use crate::value::Number;

/// The operators that admit user-defined methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl GenericOp {
    pub fn name(self) -> &'static str {
        match self {
            GenericOp::Add => "+",
            GenericOp::Sub => "-",
            GenericOp::Mul => "*",
            GenericOp::Div => "/",
        }
    }
}

/// An operand of the extended arithmetic entry points: either a tower
/// number or a user-defined numeric object.
pub trait NumericObject: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// The tower value of this operand, when it is one.
    fn as_number(&self) -> Option<&Number> {
        None
    }
}

impl NumericObject for Number {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_number(&self) -> Option<&Number> {
        Some(self)
    }
}

type GenericMethod = Arc<dyn Fn(&dyn NumericObject, &dyn NumericObject) -> Result<Number> + Send + Sync>;

/// Method table keyed by operator and the concrete operand types.
///
/// Registration is rare and write-locked; dispatch takes the read
/// lock only. The registry is consulted strictly after the core
/// dispatch matrix has run out of cases.
#[derive(Default)]
pub struct GenericRegistry {
    methods: RwLock<HashMap<(GenericOp, TypeId, TypeId), GenericMethod>>,
}

impl GenericRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a method for the ordered operand-type pair `(X, Y)`.
    pub fn register<X, Y, F>(&self, op: GenericOp, method: F)
    where
        X: Any,
        Y: Any,
        F: Fn(&X, &Y) -> Result<Number> + Send + Sync + 'static,
    {
        let wrapped: GenericMethod = Arc::new(move |x, y| {
            match (
                x.as_any().downcast_ref::<X>(),
                y.as_any().downcast_ref::<Y>(),
            ) {
                (Some(a), Some(b)) => method(a, b),
                _ => Err(NumericError::GenericDispatch {
                    op: op.name(),
                    x: format!("{:?}", x),
                    y: format!("{:?}", y),
                }),
            }
        });
        self.methods
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert((op, TypeId::of::<X>(), TypeId::of::<Y>()), wrapped);
    }

    fn no_method(op: GenericOp, x: &dyn NumericObject, y: &dyn NumericObject) -> NumericError {
        NumericError::GenericDispatch {
            op: op.name(),
            x: format!("{:?}", x),
            y: format!("{:?}", y),
        }
    }

    /// Invokes the method registered for the operand pair, or reports
    /// the absence of one.
    pub fn dispatch(
        &self,
        op: GenericOp,
        x: &dyn NumericObject,
        y: &dyn NumericObject,
    ) -> Result<Number> {
        let key = (op, x.as_any().type_id(), y.as_any().type_id());
        let method = {
            let methods = self.methods.read().unwrap_or_else(|e| e.into_inner());
            methods.get(&key).cloned()
        };
        match method {
            Some(m) => m(x, y),
            None => Err(Self::no_method(op, x, y)),
        }
    }
}

/// Addition over possibly-foreign operands: the tower matrix first,
/// the registry only when an operand is not a number.
pub fn dispatch_add(
    reg: &GenericRegistry,
    x: &dyn NumericObject,
    y: &dyn NumericObject,
) -> Result<Number> {
    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        return Ok(arith::add(a, b));
    }
    reg.dispatch(GenericOp::Add, x, y)
}

pub fn dispatch_sub(
    reg: &GenericRegistry,
    x: &dyn NumericObject,
    y: &dyn NumericObject,
) -> Result<Number> {
    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        return Ok(arith::sub(a, b));
    }
    reg.dispatch(GenericOp::Sub, x, y)
}

pub fn dispatch_mul(
    reg: &GenericRegistry,
    x: &dyn NumericObject,
    y: &dyn NumericObject,
) -> Result<Number> {
    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        return Ok(arith::mul(a, b));
    }
    reg.dispatch(GenericOp::Mul, x, y)
}

pub fn dispatch_div(
    reg: &GenericRegistry,
    x: &dyn NumericObject,
    y: &dyn NumericObject,
) -> Result<Number> {
    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        return arith::div(a, b);
    }
    reg.dispatch(GenericOp::Div, x, y)
}
