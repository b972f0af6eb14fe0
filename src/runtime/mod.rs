//! Runtime module - everything outside the pure model/update core
//!
//! - `effects` - clipboard and file side effects for [`crate::commands::Cmd`]
//! - `session` - line-driven interactive loop

pub mod effects;
pub mod session;

pub use effects::{Clipboard, Effects, MemoryClipboard, SystemClipboard};
pub use session::Session;

use crate::commands::Operation;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::update::update;

/// Run `msg` through `update`, executing each resulting command and feeding
/// its completion message back in until nothing is left
pub fn dispatch<C: Clipboard>(model: &mut AppModel, effects: &mut Effects<C>, msg: Msg) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        if let Some(cmd) = update(model, msg) {
            next = Some(effects.execute(cmd));
        }
    }
}

/// Apply `operations` in order, returning the status message each one left
pub fn apply_operations<C: Clipboard>(
    model: &mut AppModel,
    effects: &mut Effects<C>,
    operations: &[Operation],
) -> Vec<String> {
    operations
        .iter()
        .filter_map(|op| {
            dispatch(model, effects, op.to_msg());
            model.ui.take_status()
        })
        .collect()
}
