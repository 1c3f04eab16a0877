//! Message processing: runs the update loop and dispatches actions

use std::sync::Arc;

use hdash_client::ApiClient;
use tokio::sync::mpsc;

use crate::actions::{handle_action, StreamTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop, following up messages
/// until none remain and dispatching each action as it is produced.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
    tasks: &mut StreamTasks,
) where
    C: ApiClient + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client, tasks);
        }

        msg = result.message;
    }
}
