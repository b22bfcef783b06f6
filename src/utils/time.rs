use std::fmt;

use anyhow::{bail, Context};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AError, AResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

// Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> anyhow::Result<Self> {
        if start > end {
            bail!("start_date {start} is after end_date {end}");
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> anyhow::Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    // Each missing side keeps the default.
    pub fn with_params(&self, params: &RangeParams) -> anyhow::Result<Self> {
        let start = match params.start_date.as_deref() {
            Some(s) if !s.trim().is_empty() => parse_date(s)?,
            _ => self.start,
        };
        let end = match params.end_date.as_deref() {
            Some(s) if !s.trim().is_empty() => parse_date(s)?,
            _ => self.end,
        };
        Self::new(start, end)
    }

    pub fn from_query(
        &self,
        query: Result<Query<RangeParams>, QueryRejection>,
    ) -> AResult<Self> {
        let Query(params) = query.map_err(AError::bad_request)?;
        self.with_params(&params).map_err(AError::bad_request)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start_date(), self.end_date())
    }
}
