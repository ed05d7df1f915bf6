// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-light command outcomes.

use std::fmt;

use serde::Deserialize;

use crate::command::{LightState, ResponseShape};
use crate::error::ParseError;

/// Outcome reported for one light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// The light applied the command.
    Ok,
    /// The light did not answer in time.
    TimedOut,
    /// Any other status, or none at all.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ResultStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::TimedOut => "timed_out",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How [`ApiResults::is_successful`] combines individual outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// At least one light succeeded.
    #[default]
    Any,
    /// Every light succeeded.
    All,
}

/// Result of a command for a single light.
///
/// Multi-state batches report one entry per requested state, carrying the
/// echoed `operation` and the per-light `results` it produced.
///
/// # Examples
///
/// ```
/// use lifx_http::response::{ApiResult, ResultStatus};
///
/// let json = r#"{"id": "d073d5000001", "label": "Desk", "status": "timed_out"}"#;
/// let result: ApiResult = serde_json::from_str(json).unwrap();
/// assert_eq!(result.status(), ResultStatus::TimedOut);
/// assert!(!result.is_successful());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    status: ResultStatus,
    #[serde(default)]
    operation: Option<LightState>,
    #[serde(default)]
    results: Vec<ApiResult>,
}

impl ApiResult {
    /// Returns the light id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the light label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the reported status.
    #[must_use]
    pub const fn status(&self) -> ResultStatus {
        self.status
    }

    /// Returns the echoed operation of a multi-state batch entry.
    #[must_use]
    pub fn operation(&self) -> Option<&LightState> {
        self.operation.as_ref()
    }

    /// Returns the nested results of a multi-state batch entry.
    #[must_use]
    pub fn results(&self) -> &[ApiResult] {
        &self.results
    }

    /// Returns `true` if the status is `ok`.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == ResultStatus::Ok
    }

    /// Returns `true` if the status is `timed_out`.
    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        self.status == ResultStatus::TimedOut
    }

    // A bare error body such as `{"error": ".."}` decodes into an all-default
    // value, which must not pass for a result.
    fn is_identified(&self) -> bool {
        self.id.is_some() || self.operation.is_some()
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ApiResult>) {
        if self.results.is_empty() {
            leaves.push(self);
        } else {
            for result in &self.results {
                result.collect_leaves(leaves);
            }
        }
    }
}

/// Ordered results of a command, one per light.
///
/// Decodes from `{"results": [..]}` or from a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ResultsRepr")]
pub struct ApiResults {
    results: Vec<ApiResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsRepr {
    Wrapped { results: Vec<ApiResult> },
    Bare(Vec<ApiResult>),
}

impl From<ResultsRepr> for ApiResults {
    fn from(repr: ResultsRepr) -> Self {
        match repr {
            ResultsRepr::Wrapped { results } | ResultsRepr::Bare(results) => Self { results },
        }
    }
}

impl ApiResults {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the outcomes satisfy `mode`.
    ///
    /// `Any` is false for an empty set, `All` is true for it. Entries with
    /// nested results are judged by those results.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_http::response::{ApiResults, MatchMode};
    ///
    /// let json = r#"{"results": [{"id": "a", "status": "ok"}, {"id": "b", "status": "timed_out"}]}"#;
    /// let results: ApiResults = serde_json::from_str(json).unwrap();
    /// assert!(results.is_successful(MatchMode::Any));
    /// assert!(!results.is_successful(MatchMode::All));
    /// ```
    #[must_use]
    pub fn is_successful(&self, mode: MatchMode) -> bool {
        let leaves = self.leaves();
        match mode {
            MatchMode::Any => leaves.iter().any(|r| r.is_successful()),
            MatchMode::All => leaves.iter().all(|r| r.is_successful()),
        }
    }

    /// Returns the per-light outcomes, replacing batch entries by their
    /// nested results.
    #[must_use]
    pub fn leaves(&self) -> Vec<&ApiResult> {
        let mut leaves = Vec::with_capacity(self.results.len());
        for result in &self.results {
            result.collect_leaves(&mut leaves);
        }
        leaves
    }

    /// Returns the per-light outcomes that timed out.
    pub fn timed_out(&self) -> impl Iterator<Item = &ApiResult> {
        self.leaves().into_iter().filter(|r| r.is_timed_out())
    }

    /// Returns the top-level results.
    pub fn iter(&self) -> std::slice::Iter<'_, ApiResult> {
        self.results.iter()
    }

    /// Returns the first top-level result.
    #[must_use]
    pub fn first(&self) -> Option<&ApiResult> {
        self.results.first()
    }

    /// Returns the number of top-level results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if there are no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Decodes a response body in the given shape.
    ///
    /// A single result is wrapped in a one-entry set. A single-shaped
    /// request answered with a list is accepted too.
    pub(crate) fn decode(shape: ResponseShape, body: &str) -> Result<Self, ParseError> {
        if shape == ResponseShape::Single
            && let Ok(result) = serde_json::from_str::<ApiResult>(body)
            && result.is_identified()
        {
            return Ok(Self::from(vec![result]));
        }
        Ok(serde_json::from_str(body)?)
    }
}

impl From<Vec<ApiResult>> for ApiResults {
    fn from(results: Vec<ApiResult>) -> Self {
        Self { results }
    }
}

impl IntoIterator for ApiResults {
    type Item = ApiResult;
    type IntoIter = std::vec::IntoIter<ApiResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ApiResults {
    type Item = &'a ApiResult;
    type IntoIter = std::slice::Iter<'a, ApiResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PowerState, Selector};

    fn results(json: &str) -> ApiResults {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_decoding() {
        let r: ApiResult = serde_json::from_str(r#"{"id": "a", "status": "ok"}"#).unwrap();
        assert_eq!(r.status(), ResultStatus::Ok);

        let r: ApiResult = serde_json::from_str(r#"{"id": "a", "status": "offline"}"#).unwrap();
        assert_eq!(r.status(), ResultStatus::Unknown);

        let r: ApiResult = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert_eq!(r.status(), ResultStatus::Unknown);
        assert!(!r.is_successful());
        assert!(!r.is_timed_out());
    }

    #[test]
    fn decodes_wrapped_and_bare_lists() {
        let wrapped = results(r#"{"results": [{"id": "a", "label": "Desk", "status": "ok"}]}"#);
        let bare = results(r#"[{"id": "a", "label": "Desk", "status": "ok"}]"#);
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped.first().unwrap().label(), Some("Desk"));
    }

    #[test]
    fn preserves_order() {
        let list = results(
            r#"[{"id": "c", "status": "ok"}, {"id": "a", "status": "ok"}, {"id": "b", "status": "ok"}]"#,
        );
        let ids: Vec<_> = list.iter().filter_map(ApiResult::id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn mixed_outcomes() {
        let list = results(r#"[{"id": "a", "status": "ok"}, {"id": "b", "status": "timed_out"}]"#);
        assert!(list.is_successful(MatchMode::Any));
        assert!(!list.is_successful(MatchMode::All));
        assert_eq!(list.timed_out().count(), 1);
        assert_eq!(list.timed_out().next().unwrap().id(), Some("b"));
    }

    #[test]
    fn empty_results() {
        let list = ApiResults::new();
        assert!(!list.is_successful(MatchMode::default()));
        assert!(list.is_successful(MatchMode::All));
        assert!(list.is_empty());
    }

    #[test]
    fn nested_batch_results_are_judged_by_leaves() {
        let list = results(
            r#"{"results": [
                {
                    "operation": {"selector": "group:Kitchen", "power": "on"},
                    "results": [
                        {"id": "a", "label": "One", "status": "ok"},
                        {"id": "b", "label": "Two", "status": "ok"}
                    ]
                },
                {
                    "operation": {"selector": "id:c", "brightness": 0.5},
                    "results": [{"id": "c", "label": "Three", "status": "timed_out"}]
                }
            ]}"#,
        );

        assert_eq!(list.len(), 2);
        assert_eq!(list.leaves().len(), 3);
        assert!(list.is_successful(MatchMode::Any));
        assert!(!list.is_successful(MatchMode::All));

        let operation = list.first().unwrap().operation().unwrap();
        assert_eq!(operation.selector(), Some(&Selector::parse("group:Kitchen")));
        assert_eq!(operation.power(), Some(PowerState::On));
    }

    #[test]
    fn decode_single_wraps_result() {
        let list = ApiResults::decode(
            ResponseShape::Single,
            r#"{"id": "a", "label": "Desk", "status": "ok"}"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.is_successful(MatchMode::All));
    }

    #[test]
    fn decode_single_accepts_list_answer() {
        let list = ApiResults::decode(
            ResponseShape::Single,
            r#"{"results": [{"id": "a", "status": "timed_out"}]}"#,
        )
        .unwrap();
        assert_eq!(list.timed_out().count(), 1);
    }

    #[test]
    fn decode_rejects_error_bodies() {
        let body = r#"{"error": "Invalid selector"}"#;
        assert!(matches!(
            ApiResults::decode(ResponseShape::Single, body),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            ApiResults::decode(ResponseShape::List, body),
            Err(ParseError::Json(_))
        ));
    }
}
