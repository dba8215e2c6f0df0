//! object.rs — heap-allocated reference types (spec.md §3 "Object").
//!
//! Reclamation is `Rc`-based rather than a traced/mark-swept collector:
//! spec.md §1 treats the GC as "a memory-management contract" external to
//! this core, and §9's Design Notes explicitly sanction reference counting
//! as one valid substitute ("implementers should use a tracing collector
//! or weak back-references... for reclamation"). See DESIGN.md for the
//! full Open Question writeup.

use std::fmt;
use std::rc::Rc;

use crate::chunk::Chunk;
use crate::upvalue::UpvalueHandle;
use crate::value::Value;
use crate::vm::{Vm, VmResult};

/// An interned, immutable string. Equality between two `LoxString`s that
/// came from the interner is always reference identity (spec.md §4.2).
#[derive(Debug)]
pub struct LoxString {
    pub chars: Box<str>,
    pub hash: u32,
}

impl fmt::Display for LoxString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chars)
    }
}

/// A reference to an interned string object. Always points at an
/// `Obj::Str` variant; kept as `Rc<Obj>` (rather than `Rc<LoxString>`) so
/// it shares the exact allocation `Value::Obj` stores, making pointer
/// identity comparisons and interner bookkeeping trivial.
pub type StrRef = Rc<Obj>;

/// A compiled function: arity, the upvalue slots its closures must fill,
/// and the chunk of bytecode that implements it.
#[derive(Debug)]
pub struct FunctionObj {
    pub arity: u8,
    pub upvalue_count: u8,
    pub chunk: Chunk,
    /// `None` for the implicit top-level script function (spec.md §2).
    pub name: Option<StrRef>,
}

impl FunctionObj {
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .and_then(|s| s.as_string())
            .map(|s| s.chars.as_ref())
            .unwrap_or("script")
    }
}

/// A host-provided callable. Never allocates a call frame (spec.md §4.3).
pub type NativeFn = fn(&mut Vm, &[Value]) -> VmResult<Value>;

pub struct NativeObj {
    pub name: StrRef,
    pub function: NativeFn,
}

impl fmt::Debug for NativeObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeObj({})", self.name)
    }
}

/// A function bound to its captured upvalues. Every user-callable value is
/// a closure, including the implicit top-level script (spec.md §3).
#[derive(Debug)]
pub struct ClosureObj {
    pub function: Rc<FunctionObj>,
    pub upvalues: Vec<UpvalueHandle>,
}

/// The heap object tag. Wrapped in `Rc` and stored behind `Value::Obj`.
/// `Function` and `Closure` hold an inner `Rc` so call-frame setup and
/// `OP_CLOSURE` can cheaply clone just the handle, not the chunk/upvalues.
#[derive(Debug)]
pub enum Obj {
    Str(LoxString),
    Function(Rc<FunctionObj>),
    Native(NativeObj),
    Closure(Rc<ClosureObj>),
}

impl Obj {
    pub fn as_string(&self) -> Option<&LoxString> {
        match self {
            Obj::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<FunctionObj>> {
        match self {
            Obj::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Rc<ClosureObj>> {
        match self {
            Obj::Closure(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&NativeObj> {
        match self {
            Obj::Native(n) => Some(n),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Obj::Str(_) => "string",
            Obj::Function(_) => "function",
            Obj::Native(_) => "native",
            Obj::Closure(_) => "closure",
        }
    }

    /// Object equality is reference identity (spec.md §4.1), except
    /// strings: interning already guarantees byte-equal strings are the
    /// *same* `Rc`, so plain `Rc::ptr_eq` (checked before this is called)
    /// already covers them. This fallback only matters for a string that
    /// somehow escaped interning (never produced by this crate's own
    /// `Interner`, but kept so `Value::values_equal` stays correct even if
    /// a future caller constructs a `Value::Obj(Rc::new(Obj::Str(..)))`
    /// by hand).
    pub fn identity_eq(&self, other: &Obj) -> bool {
        match (self, other) {
            (Obj::Str(a), Obj::Str(b)) => a.chars == b.chars,
            _ => false,
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obj::Str(s) => write!(f, "{s}"),
            Obj::Function(func) => write!(f, "<fn {}>", func.display_name()),
            Obj::Native(n) => write!(f, "<native fn {}>", n.name),
            Obj::Closure(c) => write!(f, "<fn {}>", c.function.display_name()),
        }
    }
}
/// Wraps an interned string handle as a `Value`.
pub fn string_value(s: StrRef) -> Value {
    Value::Obj(s)
}
