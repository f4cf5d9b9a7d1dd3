use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

use crate::error::MeshError;
use crate::math::icosphere::generate_icosphere;
use crate::math::mesh::Mesh;
use crate::math::surface::{SurfaceSampleParams, generate_surface};

pub const MAX_ICOSPHERE_DEPTH: u32 = 9;

pub enum MeshCommand {
    GenerateSurface {
        label: String,
        params: SurfaceSampleParams,
    },
    GenerateIcosphere {
        label: String,
        depth: u32,
    },
    Stop,
}

#[derive(Debug)]
pub enum MeshResult {
    Surface { label: String, mesh: Mesh },
    Icosphere { label: String, mesh: Mesh },
    Error { label: String, error: MeshError },
}

impl MeshResult {
    pub fn label(&self) -> &str {
        match self {
            MeshResult::Surface { label, .. }
            | MeshResult::Icosphere { label, .. }
            | MeshResult::Error { label, .. } => label,
        }
    }
}

/// Runs mesh generation on a dedicated worker thread.
///
/// Commands are processed in submission order and every command except
/// `Stop` answers with exactly one [`MeshResult`].
pub struct MeshEngine {
    tx_cmd: Sender<MeshCommand>,
    rx_result: Receiver<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MeshEngine {
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = channel::unbounded::<MeshCommand>();
        let (tx_result, rx_result) = channel::unbounded::<MeshResult>();
        let last_error = Arc::new(Mutex::new(None));
        let last_error_clone = Arc::clone(&last_error);

        let thread_handle = thread::Builder::new()
            .name("mesh-engine".into())
            .spawn(move || mesh_thread(rx_cmd, tx_result, last_error_clone))
            .ok();

        if thread_handle.is_none() {
            *last_error.lock() = Some("failed to spawn mesh worker".to_string());
        }

        Self {
            tx_cmd,
            rx_result,
            last_error,
            thread_handle,
        }
    }

    pub fn generate_surface(&self, label: &str, params: SurfaceSampleParams) {
        let _ = self.tx_cmd.send(MeshCommand::GenerateSurface {
            label: label.to_string(),
            params,
        });
    }

    pub fn generate_icosphere(&self, label: &str, depth: u32) {
        let _ = self.tx_cmd.send(MeshCommand::GenerateIcosphere {
            label: label.to_string(),
            depth,
        });
    }

    pub fn try_recv_result(&self) -> Option<MeshResult> {
        self.rx_result.try_recv().ok()
    }

    /// Blocks until the next result; `None` once the worker has exited.
    pub fn recv_result(&self) -> Option<MeshResult> {
        self.rx_result.recv().ok()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn stop(&self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
    }
}

impl Default for MeshEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshEngine {
    fn drop(&mut self) {
        let _ = self.tx_cmd.send(MeshCommand::Stop);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

fn mesh_thread(
    rx_cmd: Receiver<MeshCommand>,
    tx_result: Sender<MeshResult>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    loop {
        let cmd = match rx_cmd.recv() {
            Ok(c) => c,
            Err(_) => return,
        };

        let result = match cmd {
            MeshCommand::GenerateSurface { label, params } => {
                debug!(%label, m = params.m, n = params.n, "generating surface");
                match generate_surface(&params) {
                    Ok(mesh) => MeshResult::Surface { label, mesh },
                    Err(error) => MeshResult::Error { label, error },
                }
            }
            MeshCommand::GenerateIcosphere { label, depth } => {
                debug!(%label, depth, "generating icosphere");
                match checked_icosphere(depth) {
                    Ok(mesh) => MeshResult::Icosphere { label, mesh },
                    Err(error) => MeshResult::Error { label, error },
                }
            }
            MeshCommand::Stop => return,
        };

        match &result {
            MeshResult::Error { label, error } => {
                warn!(%label, %error, "mesh generation rejected");
                *last_error.lock() = Some(format!("{label}: {error}"));
            }
            _ => *last_error.lock() = None,
        }

        if tx_result.send(result).is_err() {
            return;
        }
    }
}

fn checked_icosphere(depth: u32) -> Result<Mesh, MeshError> {
    if depth > MAX_ICOSPHERE_DEPTH {
        return Err(MeshError::DepthLimit {
            depth,
            max: MAX_ICOSPHERE_DEPTH,
        });
    }
    generate_icosphere(depth)
}
