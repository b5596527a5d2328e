//! Error types for the controller crate.
//!
//! All operations that can fail return typed errors rather than panicking.

use gridsar_types::ObjectId;

/// Errors that can occur while deciding on an action.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// A keypress reached the resolver that is not in the key-action map.
    ///
    /// Input filtering drops unrecognized keys before resolution, so this
    /// indicates a programming error in the calling layer.
    #[error("unrecognized keypress reached the resolver: {key:?}")]
    UnrecognizedKey {
        /// The offending keypress token.
        key: String,
    },

    /// The snapshot does not contain the controlled agent's own entry.
    ///
    /// The engine guarantees the agent senses itself; a snapshot without
    /// the agent's record cannot be decided on.
    #[error("controlled agent {agent} missing from the world snapshot")]
    AgentNotInSnapshot {
        /// The controlled agent's id.
        agent: ObjectId,
    },
}
