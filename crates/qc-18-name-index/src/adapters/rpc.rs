//! # RPC Handler
//!
//! Adapter turning JSON-RPC style calls into [`NameIndexApi`] queries.
//!
//! Parameters are positional, in the node's order:
//!
//! ```text
//! name_show    (name)
//! name_history (name)
//! name_scan    (start?, count?)
//! name_filter  (regexp?, maxage?, from?, nb?, mode?)
//! ```
//!
//! A JSON `null` in any optional position means "use the default".
//!
//! The availability gate runs before any parameter is parsed, so an
//! unsynchronized node answers `NotReady` whatever the arguments.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    FilterRequest, NameIndexError, OutputMode, RpcError, RpcErrorCode, ScanRequest,
};
use crate::ports::inbound::NameIndexApi;

/// Methods served by [`NameRpcHandler`].
pub const NAME_METHODS: [&str; 4] = ["name_show", "name_history", "name_scan", "name_filter"];

/// RPC handler for the name index.
pub struct NameRpcHandler<A> {
    api: A,
}

impl<A: NameIndexApi> NameRpcHandler<A> {
    /// Create a new RPC handler.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Access the wrapped API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Dispatch one call.
    ///
    /// ## Supported Methods
    ///
    /// - `name_show`: current record of a name
    /// - `name_history`: all values of a name, oldest first
    /// - `name_scan`: ordered enumeration from a start key
    /// - `name_filter`: filtered, paginated listing or stats
    pub fn handle(&self, method: &str, params: &Value) -> Result<Value, RpcError> {
        debug!("[qc-18] RPC {} {}", method, params);
        if !NAME_METHODS.contains(&method) {
            return Err(RpcError::method_not_found(method));
        }
        self.api.check_ready(method)?;

        match method {
            "name_show" => {
                let name = parsed(method, name_param(params))?;
                to_json(&self.api.name_show(name)?)
            }
            "name_history" => {
                let name = parsed(method, name_param(params))?;
                to_json(&self.api.name_history(name)?)
            }
            "name_scan" => {
                let request = parsed(method, scan_request(params))?;
                to_json(&self.api.name_scan(&request)?)
            }
            "name_filter" => {
                let request = parsed(method, filter_request(params))?;
                to_json(&self.api.name_filter(&request)?)
            }
            _ => Err(RpcError::method_not_found(method)),
        }
    }
}

/// Log a parameter rejection and pass the result through.
fn parsed<T>(method: &str, result: Result<T, NameIndexError>) -> Result<T, NameIndexError> {
    result.inspect_err(|e| warn!("[qc-18] Rejected {}: {}", method, e))
}

fn name_param(params: &Value) -> Result<&str, NameIndexError> {
    let args = positional(params, 1)?;
    required_str(args, 0, "name")
}

fn scan_request(params: &Value) -> Result<ScanRequest, NameIndexError> {
    let args = positional(params, 2)?;
    Ok(ScanRequest::new(
        optional_str(args, 0, "start")?,
        optional_i64(args, 1, "count")?,
    ))
}

fn filter_request(params: &Value) -> Result<FilterRequest, NameIndexError> {
    let args = positional(params, 5)?;
    let mode = match optional_str(args, 4, "mode")? {
        Some(token) => token.parse::<OutputMode>()?,
        None => OutputMode::List,
    };
    Ok(FilterRequest {
        pattern: optional_str(args, 0, "regexp")?.map(str::to_string),
        max_age: optional_i64(args, 1, "maxage")?.unwrap_or(0),
        offset: optional_i64(args, 2, "from")?.unwrap_or(0),
        limit: optional_i64(args, 3, "nb")?.unwrap_or(0),
        mode,
    })
}

/// Positional arguments; `null` counts as no arguments.
fn positional(params: &Value, max: usize) -> Result<&[Value], NameIndexError> {
    let args = match params {
        Value::Null => &[][..],
        Value::Array(items) => items.as_slice(),
        _ => return Err(NameIndexError::invalid("params must be an array")),
    };
    if args.len() > max {
        return Err(NameIndexError::invalid(format!(
            "expected at most {} params, got {}",
            max,
            args.len()
        )));
    }
    Ok(args)
}

fn optional_str<'a>(
    args: &'a [Value],
    index: usize,
    name: &str,
) -> Result<Option<&'a str>, NameIndexError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(NameIndexError::invalid(format!(
            "{} must be a string, got {}",
            name, other
        ))),
    }
}

fn required_str<'a>(args: &'a [Value], index: usize, name: &str) -> Result<&'a str, NameIndexError> {
    optional_str(args, index, name)?
        .ok_or_else(|| NameIndexError::invalid(format!("missing {} parameter", name)))
}

fn optional_i64(args: &[Value], index: usize, name: &str) -> Result<Option<i64>, NameIndexError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            NameIndexError::invalid(format!("{} must be an integer, got {}", name, value))
        }),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError {
        code: RpcErrorCode::MiscError as i32,
        message: e.to_string(),
    })
}
