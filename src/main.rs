// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ogextract::errors::OgError;

fn main() -> Result<(), OgError> {
    ogextract::run()
}
