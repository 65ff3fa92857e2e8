//! Rendering surface abstraction
//!
//! The game never touches the page directly. Everything the board, the
//! scoreboard and the start button should show is pushed through a
//! [`Surface`], which the host implements on top of whatever rendering layer
//! it uses.

use super::{SyncMessage, UpdateMessage};

/// Trait for sending messages to the rendering surface
pub trait Surface {
    /// Sends an incremental update, such as a single cell changing
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to send
    fn send_message(&self, message: &UpdateMessage);

    /// Sends a full view of the current game state
    ///
    /// Used after a load completes or when the surface is rebuilt.
    ///
    /// # Arguments
    ///
    /// * `state` - The synchronization message to send
    fn send_state(&self, state: &SyncMessage);
}
