// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-CratesTestPkg-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of crates-test-pkg and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Returns `a + b` with native `i64` semantics.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
