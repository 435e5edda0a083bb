//! Cross-crate integration tests for tran live in `tests/`.
