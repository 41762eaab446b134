// SPDX-FileCopyrightText: 2025 Fondazione LINKS
//
// SPDX-License-Identifier: APACHE-2.0

pub mod bank;
pub mod coin;
pub mod commitment;
pub mod detect;
pub mod identity;
pub mod merchant;
