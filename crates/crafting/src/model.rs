// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
	pub id: i64,
	pub name: String,
}

/// One resource a recipe consumes, keyed by the shared resource name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequirement {
	pub id: i64,
	pub name: String,
	pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
	pub id: i64,
	pub name: String,
	pub category: String,
	pub description: String,
	pub resources: Vec<ResourceRequirement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeToCreate {
	pub name: String,
	pub category: String,
	#[serde(default)]
	pub description: String,
}

/// A recipe id and how many times to craft it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingItem {
	pub id: i64,
	pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingRequest {
	#[serde(default)]
	pub items: Vec<CraftingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTotal {
	pub name: String,
	pub total: i64,
}
