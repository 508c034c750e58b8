// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CratesTestPkg-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of crates-test-pkg and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Returns `"Hello, {name}!"`.
///
/// The name is optional: `greet(None)` greets [`DEFAULT_NAME`]. Any string
/// is accepted, including the empty string.
pub fn greet<'a>(name: impl Into<Option<&'a str>>) -> String {
    let name = name.into().unwrap_or(DEFAULT_NAME);
    format!("Hello, {name}!")
}
