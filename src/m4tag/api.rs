//! # API Facade
//!
//! Thin entry point over the mutation engine, generic over the storage
//! backend so clients and tests share one code path. No I/O assumptions:
//! the facade returns structured results and never touches
//! stdout/stderr/exit codes.

use crate::apply::{self, RunReport};
use crate::error::Result;
use crate::field::FieldId;
use crate::removal::{self, RemovalSet};
use crate::request::RawRequest;
use crate::store::TagStore;
use std::path::PathBuf;

pub struct TagsApi<S: TagStore> {
    store: S,
}

impl<S: TagStore> TagsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Build a validated request from raw field/value pairs.
    pub fn build_request<I, V>(&self, entries: I) -> Result<RawRequest>
    where
        I: IntoIterator<Item = (FieldId, V)>,
        V: Into<String>,
    {
        RawRequest::build(entries)
    }

    /// Run one batch: assignments from `request`, removals from the
    /// optional compact spec, over the ordered file list.
    pub fn run(
        &mut self,
        request: &RawRequest,
        removal_spec: Option<&str>,
        files: &[PathBuf],
    ) -> Result<RunReport> {
        let removals = removal_spec.map(removal::parse).unwrap_or_default();
        apply::run(&mut self.store, request, &removals, files)
    }

    /// Run with an already-parsed removal set.
    pub fn run_with_removals(
        &mut self,
        request: &RawRequest,
        removals: &RemovalSet,
        files: &[PathBuf],
    ) -> Result<RunReport> {
        apply::run(&mut self.store, request, removals, files)
    }
}
