//! Execution record builders.

use paramforge_core::{ErrorInfo, ExecutionRecord, FunctionRef, ParamTuple, ParamValue};

/// Name of the target every fixture record points at.
pub const TARGET: &str = "fixture_target";

/// A successful record for `params` returning null.
pub fn record(params: ParamTuple) -> ExecutionRecord {
    ExecutionRecord::succeeded(FunctionRef::new(TARGET), params, Some(ParamValue::Null))
}

/// A failed record for `params`.
pub fn failed_record(params: ParamTuple, message: &str) -> ExecutionRecord {
    ExecutionRecord::failed(
        FunctionRef::new(TARGET),
        params,
        ErrorInfo::new("FixtureError", message),
    )
}
