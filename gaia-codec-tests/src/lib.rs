//! Integration tests for `gaia-codec` live under `tests/`.
