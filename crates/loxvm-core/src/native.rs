//! native.rs — the mandatory standard library (spec.md §6): `clock()`.

use crate::value::Value;
use crate::vm::{Vm, VmResult};

/// Wall-clock seconds elapsed since the VM was created, as a `Number`.
/// The reference implementation measures CPU time via `clock()`; we
/// measure elapsed wall time through the pluggable `Host` (so tests can
/// substitute a deterministic clock) rather than reaching for `std::time`
/// directly from engine code.
pub fn clock(vm: &mut Vm, _args: &[Value]) -> VmResult<Value> {
    Ok(Value::Number(vm.host_mut().elapsed_seconds()))
}
