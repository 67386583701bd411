//! # Request Builder
//!
//! A [`RawRequest`] is the sparse map of field → requested raw value for one
//! invocation. Integer-kinded fields are validated here, before any file is
//! touched, so a malformed number is a usage error rather than a mid-batch
//! surprise. Enum tokens and text stay raw; resolution happens at
//! assignment time.

use crate::error::{Result, TagError};
use crate::field::{FieldId, Kind};
use std::collections::BTreeMap;

/// A validated request value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requested {
    Text(String),
    Number(u64),
}

impl Requested {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Requested::Text(s) => Some(s),
            Requested::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Requested::Number(n) => Some(*n),
            Requested::Text(_) => None,
        }
    }
}

/// Sparse, read-only map of requested field assignments.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    values: BTreeMap<FieldId, Requested>,
}

impl RawRequest {
    /// Build a request from raw string values, validating integer fields.
    pub fn build<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FieldId, S)>,
        S: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (field, raw) in entries {
            let raw = raw.into();
            let value = match field.spec().kind {
                Kind::UInt | Kind::PairedUInt(..) => {
                    let n = raw.parse::<u64>().map_err(|_| TagError::InvalidNumber {
                        field,
                        value: raw.clone(),
                    })?;
                    Requested::Number(n)
                }
                Kind::Text | Kind::Enum(_) | Kind::Binary => Requested::Text(raw),
            };
            values.insert(field, value);
        }
        Ok(Self { values })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, field: FieldId) -> Option<&Requested> {
        self.values.get(&field)
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.get(field).and_then(Requested::as_text)
    }

    pub fn number(&self, field: FieldId) -> Option<u64> {
        self.get(field).and_then(Requested::as_number)
    }

    /// Requested fields in field order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.values.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_fields_are_validated_up_front() {
        let err = RawRequest::build([(FieldId::Tempo, "fast")]).unwrap_err();
        match err {
            TagError::InvalidNumber { field, value } => {
                assert_eq!(field, FieldId::Tempo);
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn text_and_enum_fields_stay_raw() {
        let req = RawRequest::build([
            (FieldId::Album, "OK Computer"),
            (FieldId::Rating, "clean"),
            (FieldId::TrackTotal, "12"),
        ])
        .unwrap();
        assert_eq!(req.text(FieldId::Album), Some("OK Computer"));
        assert_eq!(req.text(FieldId::Rating), Some("clean"));
        assert_eq!(req.number(FieldId::TrackTotal), Some(12));
    }

    #[test]
    fn absent_fields_read_as_none() {
        let req = RawRequest::build([(FieldId::Album, "X")]).unwrap();
        assert!(req.get(FieldId::Artist).is_none());
        assert!(!req.is_empty());
        assert!(RawRequest::default().is_empty());
    }
}
