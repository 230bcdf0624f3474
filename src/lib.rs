//! Workspace-level integration tests for contrast; see `tests/`.
