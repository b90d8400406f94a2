//! Database integration tests.

use super::*;
use crate::test_support::{paste_at_t0, setup_temp_db};
use std::sync::{Arc, Barrier};
use std::thread;

mod basic_ops;
