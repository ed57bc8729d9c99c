//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the hub against mock
//! adapters. All tests run on the host with no radio hardware.

mod mock_hw;
