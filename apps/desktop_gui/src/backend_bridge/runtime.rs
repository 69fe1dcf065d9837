//! Backend worker: a dedicated thread running a tokio runtime that drains the
//! UI command queue and calls the generation service.
//!
//! Commands are processed sequentially, so generation cycles are strictly
//! serialized. Every `Generate` command produces exactly one terminal event
//! back to the UI, on success and on every failure path alike.

use std::thread;

use client_core::{BlueprintClient, GenerationService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerStartupFailed(format!(
                    "Backend worker failed to start: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = BlueprintClient::new(server_url);
            tracing::info!(server_url = client.server_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Generate { request } => {
                        let event = match client.generate(&request).await {
                            Ok(response) => UiEvent::BlueprintReady(response),
                            Err(err) => {
                                if err.is_transport() {
                                    tracing::error!("generation transport failure: {err}");
                                } else {
                                    tracing::warn!("generation rejected by service: {err}");
                                }
                                UiEvent::GenerationFailed(UiError::from_generate(&err))
                            }
                        };
                        // The terminal event releases the UI's loading state,
                        // so block rather than drop if the queue is full.
                        if ui_tx.send(event).is_err() {
                            tracing::error!(
                                "ui event channel closed; terminal generation event lost"
                            );
                        }
                    }
                }
            }
        });
    });
}
