//! Mock database connection for testing.

use std::sync::{Arc, RwLock};

use nimbus_core::{
    application::ports::{Connection, Statement},
    domain::Record,
    error::NimbusResult,
};
use serde_json::Value;
use tracing::trace;

/// Stand-in connection: every call yields a [`MockStatement`].
///
/// Nothing is parsed or validated. Issued SQL is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    issued: Arc<RwLock<Vec<String>>>,
}

impl MockConnection {
    /// Create a new mock connection.
    pub fn new() -> Self {
        Self::default()
    }

    /// SQL passed to `prepare`/`query`/`exec`, oldest first (testing helper).
    pub fn issued(&self) -> Vec<String> {
        self.issued.read().map(|v| v.clone()).unwrap_or_default()
    }

    /// Forget issued SQL.
    pub fn clear(&self) {
        if let Ok(mut issued) = self.issued.write() {
            issued.clear();
        }
    }

    fn statement(&self, sql: &str) -> NimbusResult<Box<dyn Statement>> {
        trace!(sql, "Mock statement");
        if let Ok(mut issued) = self.issued.write() {
            issued.push(sql.to_string());
        }
        Ok(Box::new(MockStatement::new(sql)))
    }
}

impl Connection for MockConnection {
    fn prepare(&self, sql: &str) -> NimbusResult<Box<dyn Statement>> {
        self.statement(sql)
    }

    fn query(&self, sql: &str) -> NimbusResult<Box<dyn Statement>> {
        self.statement(sql)
    }

    fn exec(&self, sql: &str) -> NimbusResult<Box<dyn Statement>> {
        self.statement(sql)
    }
}

/// Statement that always succeeds and never yields rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockStatement {
    sql: String,
    executions: usize,
}

impl MockStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            executions: 0,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// How many times `execute` ran.
    pub fn executions(&self) -> usize {
        self.executions
    }
}

impl Statement for MockStatement {
    fn execute(&mut self, _params: &[Value]) -> NimbusResult<bool> {
        self.executions += 1;
        Ok(true)
    }

    fn fetch(&mut self) -> NimbusResult<Record> {
        Ok(Record::new())
    }

    fn fetch_all(&mut self) -> NimbusResult<Vec<Record>> {
        Ok(Vec::new())
    }
}
