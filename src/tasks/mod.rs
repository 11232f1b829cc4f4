// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module offloads blocking catalog requests from the main UI thread.
//! It provides a dedicated worker loop that translates [`AppTask`] requests
//! into catalog calls and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Playlist and playback changes
//! are handled synchronously as events.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use log::debug;
use tubeplay::catalog::VideoCatalog;

use crate::events::AppEvent;

/// The catalog shared with the worker thread, absent without an API key.
pub(crate) type Catalog = Option<Box<dyn VideoCatalog + Send>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    Search { query: String, max_results: u32 },

    /// Lists the channel. With a page token the results extend the current
    /// listing, otherwise they replace it.
    ListChannel(Option<String>),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `catalog` - The catalog to query, `None` when none is configured.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(catalog: Catalog, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            debug!("Running task {:?}", task);

            let ctx = TaskContext {
                catalog: catalog.as_deref(),
                event_tx: &event_tx,
            };

            if handle_task(task, &ctx).is_err() {
                // The application has gone away.
                break;
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
pub(crate) struct TaskContext<'a> {
    pub(crate) catalog: Option<&'a (dyn VideoCatalog + Send)>,
    pub(crate) event_tx: &'a Sender<AppEvent>,
}

/// Runs a single task and sends its result back through the application
/// event channel.
///
/// Catalog failures are reported as events; only a closed event channel is
/// an error here.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<(), std::sync::mpsc::SendError<AppEvent>> {
    match task {
        AppTask::Search { query, max_results } => handlers::search(ctx, &query, max_results),
        AppTask::ListChannel(page_token) => handlers::list_channel(ctx, page_token.as_deref()),
    }
}
