// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CratesTestPkg-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of crates-test-pkg and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! crates-test-pkg — minimal crates.io publishing test package.
//!
//! Two pure functions ([`greet()`] and [`add()`]) and just enough surface to
//! verify a publish end to end. There is intentionally no state, no I/O,
//! and no failure handling beyond what the type system already enforces.

pub mod greet;
pub mod sum;

pub use greet::{greet, DEFAULT_NAME};
pub use sum::add;

/// Crate version, mirrored from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
