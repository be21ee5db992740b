// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: static reference data shared between UI and logic.

pub mod country_codes;
