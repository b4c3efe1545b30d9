//! The Executor - single entry point to the name registry.
//!
//! The Executor is a stateless dispatcher that routes commands to their
//! handlers and converts results to outputs.

use std::sync::Arc;

use tracing::debug;

use crate::bridge::Node;
use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor holds a reference to the [`Node`] but maintains no state of
/// its own. All state lives in the registry, mempool and index.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use namedb_executor::{Command, Executor};
///
/// let executor = Executor::new(node);
///
/// let result = executor.execute(Command::NameShow {
///     name: "d/example".into(),
///     options: None,
/// })?;
///
/// let results = executor.execute_many(vec![
///     Command::NameCheckDb,
///     Command::NamePending { name: None, options: None },
/// ]);
/// ```
#[derive(Clone)]
pub struct Executor {
    node: Arc<Node>,
}

impl Executor {
    /// Create a new executor over a node.
    pub fn new(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The node commands run against.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let command = cmd.name();
        let result = match cmd {
            Command::NameShow { name, options } => {
                crate::handlers::names::name_show(&self.node, name, options)
            }
            Command::NameHistory { name, options } => {
                crate::handlers::names::name_history(&self.node, name, options)
            }
            Command::NameScan {
                start,
                count,
                options,
            } => crate::handlers::names::name_scan(&self.node, start, count, options),
            Command::NamePending { name, options } => {
                crate::handlers::names::name_pending(&self.node, name, options)
            }
            Command::NameExport {
                regexp,
                path,
                options,
            } => crate::handlers::names::name_export(&self.node, regexp, &path, options),
            Command::NameCheckDb => crate::handlers::names::name_checkdb(&self.node),
            Command::NameRawTransaction { hex, vout, name_op } => {
                crate::handlers::rawtx::name_raw_transaction(&self.node, hex, vout, name_op)
            }
        };

        if let Err(e) = &result {
            debug!(target: "namedb::executor", command, error = %e, "Command failed");
        }
        result
    }

    /// Execute multiple commands in order.
    ///
    /// Every command runs regardless of earlier failures; results are
    /// returned in input order.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
