//! Training-log loading and search.
//!
//! The log is a tree-shaped JSON document loaded once at start and treated
//! as read-only. Search results are [`Trace`]s rather than items: a trace
//! can be re-resolved later with [`trace_access`], for the item itself or
//! any of its fields, without duplicating traversal logic.

use crate::{Error, Log, LogItem, Result, Trace};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use std::path::Path;

/// Load a training log from a JSON file
///
/// The document root must be an ordered sequence of log items. Read and
/// parse failures propagate; no local recovery is attempted.
pub fn load_log(path: &Path) -> Result<Log> {
    let contents = std::fs::read_to_string(path)?;
    let log: Log = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} top-level items from {:?}", log.len(), path);
    Ok(log)
}

/// Parse a log timestamp
///
/// Accepts `YYYY-MM-DD` (midnight assumed) or `YYYY-MM-DD HH:MM:SS`,
/// trying the date-only layout first. Anything else is a timestamp error.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map_err(|e| {
        Error::Timestamp(format!("{:?} matches neither accepted layout: {}", s, e))
    })
}

impl LogItem {
    /// Parse the record's `time` field as a timestamp
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        let time = self
            .field("time")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Timestamp("missing or non-string time field".into()))?;
        parse_timestamp(time)
    }
}

/// Resolve a trace to the item it locates
///
/// The first trace element indexes into the root sequence; each subsequent
/// element indexes into the previous item's `contents`. Fails if any index
/// is out of range or an expected `contents` sequence is absent.
pub fn trace_access<'a>(log: &'a [LogItem], trace: &[usize]) -> Result<&'a LogItem> {
    let (&first, rest) = trace
        .split_first()
        .ok_or_else(|| Error::Trace("empty trace".into()))?;

    let mut item = log.get(first).ok_or_else(|| {
        Error::Trace(format!(
            "index {} out of range at depth 0 (level has {} items)",
            first,
            log.len()
        ))
    })?;

    for (depth, &index) in rest.iter().enumerate() {
        let children = item
            .contents
            .as_deref()
            .ok_or_else(|| Error::Trace(format!("no contents at depth {}", depth + 1)))?;
        item = children.get(index).ok_or_else(|| {
            Error::Trace(format!(
                "index {} out of range at depth {} (level has {} items)",
                index,
                depth + 1,
                children.len()
            ))
        })?;
    }

    Ok(item)
}

/// Search the log for items satisfying `predicate`
///
/// Returns a lazy iterator of traces in document order (pre-order: a
/// matching parent is yielded before its matching descendants). An item
/// without `contents` simply ends recursion at that branch.
pub fn filter<F>(predicate: F, log: &[LogItem]) -> Matches<'_, F>
where
    F: FnMut(&LogItem) -> bool,
{
    Matches {
        predicate,
        stack: vec![Frame {
            level: log,
            next: 0,
            prefix: Vec::new(),
        }],
    }
}

/// Lazy depth-first iterator over matching traces, produced by [`filter`].
pub struct Matches<'a, F> {
    predicate: F,
    stack: Vec<Frame<'a>>,
}

/// One level of the depth-first walk: a `contents` sequence (or the root),
/// the next index to visit, and the trace prefix that reached it.
struct Frame<'a> {
    level: &'a [LogItem],
    next: usize,
    prefix: Trace,
}

impl<'a, F> Iterator for Matches<'a, F>
where
    F: FnMut(&LogItem) -> bool,
{
    type Item = Trace;

    fn next(&mut self) -> Option<Trace> {
        loop {
            let frame = self.stack.last_mut()?;

            if frame.next >= frame.level.len() {
                self.stack.pop();
                continue;
            }

            let index = frame.next;
            frame.next += 1;

            let item: &'a LogItem = &frame.level[index];
            let mut trace = frame.prefix.clone();
            trace.push(index);

            // Children are visited after the current item (pre-order).
            if let Some(children) = item.contents.as_deref() {
                self.stack.push(Frame {
                    level: children,
                    next: 0,
                    prefix: trace.clone(),
                });
            }

            if (self.predicate)(item) {
                return Some(trace);
            }
        }
    }
}
