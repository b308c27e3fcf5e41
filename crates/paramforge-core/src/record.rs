//! Execution records produced by the external invocation layer.
//!
//! The explorer never invokes anything itself. A driver calls the function
//! under test with a tuple, wraps the outcome in an [`ExecutionRecord`] and
//! hands it back so each generator can see the value it contributed.

use std::fmt;
use std::sync::Arc;

use crate::value::{ParamTuple, ParamValue};

/// Opaque reference to the function under test.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionRef(Arc<str>);

impl FunctionRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Description of a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// The outcome of invoking the function under test with one tuple.
///
/// Exactly one of `result` and `error` is present. The constructors are the
/// only way to build a record, and deserialization rejects documents that
/// carry both or neither.
///
/// # Example
///
/// ```
/// use paramforge_core::{ExecutionRecord, FunctionRef, ParamValue};
///
/// let record = ExecutionRecord::succeeded(
///     FunctionRef::new("parse"),
///     vec![ParamValue::Int(7)],
///     Some(ParamValue::Bool(true)),
/// );
/// assert!(record.is_success());
/// assert_eq!(record.param(0), Some(&ParamValue::Int(7)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRecord"))]
pub struct ExecutionRecord {
    target: FunctionRef,
    params: ParamTuple,
    result: Option<ParamValue>,
    error: Option<ErrorInfo>,
}

impl ExecutionRecord {
    /// A completed invocation. `result` is `None` for functions that return nothing.
    pub fn succeeded(target: FunctionRef, params: ParamTuple, result: Option<ParamValue>) -> Self {
        Self {
            target,
            params,
            result: Some(result.unwrap_or(ParamValue::Null)),
            error: None,
        }
    }

    /// A failed invocation.
    pub fn failed(target: FunctionRef, params: ParamTuple, error: ErrorInfo) -> Self {
        Self {
            target,
            params,
            result: None,
            error: Some(error),
        }
    }

    pub fn target(&self) -> &FunctionRef {
        &self.target
    }

    pub fn params(&self) -> &[ParamValue] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&ParamValue> {
        self.params.get(index)
    }

    pub fn result(&self) -> Option<&ParamValue> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRecord {
    target: FunctionRef,
    params: ParamTuple,
    result: Option<ParamValue>,
    error: Option<ErrorInfo>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRecord> for ExecutionRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        match (raw.result, raw.error) {
            (Some(result), None) => Ok(Self::succeeded(raw.target, raw.params, Some(result))),
            (None, Some(error)) => Ok(Self::failed(raw.target, raw.params, error)),
            (Some(_), Some(_)) => Err("execution record has both a result and an error".into()),
            (None, None) => Err("execution record has neither a result nor an error".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_failure_are_exclusive() {
        let ok = ExecutionRecord::succeeded(FunctionRef::new("f"), vec![], None);
        assert!(ok.is_success());
        assert_eq!(ok.result(), Some(&ParamValue::Null));
        assert!(ok.error().is_none());

        let err = ExecutionRecord::failed(
            FunctionRef::new("f"),
            vec![ParamValue::Int(0)],
            ErrorInfo::new("DivideByZero", "attempt to divide by zero"),
        );
        assert!(!err.is_success());
        assert!(err.result().is_none());
        assert_eq!(
            err.error().map(ToString::to_string).as_deref(),
            Some("DivideByZero: attempt to divide by zero")
        );
    }

    #[test]
    fn function_ref_is_cheap_to_share() {
        let target = FunctionRef::new("checksum");
        let copy = target.clone();
        assert_eq!(target, copy);
        assert_eq!(copy.name(), "checksum");
    }

    #[cfg(feature = "serde")]
    mod serde_support {
        use super::*;

        fn failure() -> ExecutionRecord {
            ExecutionRecord::failed(
                FunctionRef::new("f"),
                vec![ParamValue::Int(0)],
                ErrorInfo::new("Overflow", "too big"),
            )
        }

        fn success() -> ExecutionRecord {
            ExecutionRecord::succeeded(
                FunctionRef::new("f"),
                vec![ParamValue::Int(0)],
                Some(ParamValue::Int(1)),
            )
        }

        fn mapping(record: &ExecutionRecord) -> serde_yaml::Mapping {
            match serde_yaml::to_value(record).unwrap() {
                serde_yaml::Value::Mapping(mapping) => mapping,
                other => panic!("expected a mapping, got {other:?}"),
            }
        }

        #[test]
        fn valid_records_deserialize() {
            for record in [success(), failure()] {
                let yaml = serde_yaml::to_string(&record).unwrap();
                let parsed: ExecutionRecord = serde_yaml::from_str(&yaml).unwrap();
                assert_eq!(parsed, record);
            }
        }

        #[test]
        fn result_and_error_together_are_rejected() {
            let mut both = mapping(&success());
            let error = mapping(&failure()).get("error").cloned().unwrap();
            both.insert("error".into(), error);

            let err = serde_yaml::from_value::<ExecutionRecord>(both.into()).unwrap_err();
            assert!(err.to_string().contains("both a result and an error"));
        }

        #[test]
        fn missing_outcome_is_rejected() {
            let mut neither = mapping(&failure());
            neither.insert("error".into(), serde_yaml::Value::Null);

            let err = serde_yaml::from_value::<ExecutionRecord>(neither.into()).unwrap_err();
            assert!(err.to_string().contains("neither a result nor an error"));
        }
    }
}
