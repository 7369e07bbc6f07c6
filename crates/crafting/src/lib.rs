// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Recipes, the resources they consume, and shopping-list totals.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod calculate;
mod model;
pub mod schema;
mod store;

pub use calculate::{RecipeSource, calculate};
pub use model::{CraftingItem, CraftingRequest, Recipe, RecipeToCreate, Resource, ResourceRequirement, ResourceTotal};
pub use store::RecipeStore;
