use serde::Serialize;

/// Liveness payload for `/health`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Health {
    pub status: &'static str,
}
