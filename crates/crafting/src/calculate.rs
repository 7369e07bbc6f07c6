// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeMap, HashMap};

use palcraft_type::Result;
use tracing::{debug, instrument};

use crate::{CraftingRequest, Recipe, ResourceTotal};

/// Anything that can resolve a recipe by id.
pub trait RecipeSource {
	fn recipe(&self, id: i64) -> Result<Option<Recipe>>;
}

impl RecipeSource for HashMap<i64, Recipe> {
	fn recipe(&self, id: i64) -> Result<Option<Recipe>> {
		Ok(self.get(&id).cloned())
	}
}

impl RecipeSource for BTreeMap<i64, Recipe> {
	fn recipe(&self, id: i64) -> Result<Option<Recipe>> {
		Ok(self.get(&id).cloned())
	}
}

impl<S: RecipeSource + ?Sized> RecipeSource for &S {
	fn recipe(&self, id: i64) -> Result<Option<Recipe>> {
		(**self).recipe(id)
	}
}

/// Total every resource needed to craft each item in `request`.
///
/// Unknown recipe ids are skipped. The result holds one entry per resource,
/// sorted by name. Quantities are multiplied as given, so zero or negative
/// requests contribute zero or negative amounts.
#[instrument(name = "crafting::calculate", level = "debug", skip_all, fields(items = request.items.len()))]
pub fn calculate(source: &impl RecipeSource, request: &CraftingRequest) -> Result<Vec<ResourceTotal>> {
	let mut totals: BTreeMap<String, i64> = BTreeMap::new();

	for item in &request.items {
		let Some(recipe) = source.recipe(item.id)? else {
			debug!(recipe = item.id, "skipping unknown recipe");
			continue;
		};

		for requirement in recipe.resources {
			let amount = requirement.quantity.saturating_mul(item.quantity);
			let total = totals.entry(requirement.name).or_insert(0);
			*total = total.saturating_add(amount);
		}
	}

	Ok(totals
		.into_iter()
		.map(|(name, total)| ResourceTotal {
			name,
			total,
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CraftingItem, ResourceRequirement};

	fn recipe(id: i64, name: &str, resources: &[(&str, i64)]) -> Recipe {
		Recipe {
			id,
			name: name.to_string(),
			category: "Tools".to_string(),
			description: String::new(),
			resources: resources
				.iter()
				.enumerate()
				.map(|(i, (name, quantity))| ResourceRequirement {
					id: i as i64 + 1,
					name: name.to_string(),
					quantity: *quantity,
				})
				.collect(),
		}
	}

	fn recipes() -> HashMap<i64, Recipe> {
		HashMap::from([
			(1, recipe(1, "Wooden Club", &[("Wood", 5), ("Stone", 2)])),
			(2, recipe(2, "Stone Pickaxe", &[("Wood", 5), ("Stone", 5)])),
			(3, recipe(3, "Cloth Outfit", &[("Cloth", 10)])),
		])
	}

	fn request(items: &[(i64, i64)]) -> CraftingRequest {
		CraftingRequest {
			items: items
				.iter()
				.map(|(id, quantity)| CraftingItem {
					id: *id,
					quantity: *quantity,
				})
				.collect(),
		}
	}

	fn totals(result: Vec<ResourceTotal>) -> Vec<(String, i64)> {
		result.into_iter().map(|t| (t.name, t.total)).collect()
	}

	#[test]
	fn test_club_and_pickaxe() {
		let result = calculate(&recipes(), &request(&[(1, 2), (2, 1)])).unwrap();
		assert_eq!(totals(result), vec![("Stone".to_string(), 9), ("Wood".to_string(), 15)]);
	}

	#[test]
	fn test_unknown_recipe_is_skipped() {
		let result = calculate(&recipes(), &request(&[(42, 3), (3, 1)])).unwrap();
		assert_eq!(totals(result), vec![("Cloth".to_string(), 10)]);
	}

	#[test]
	fn test_empty_request() {
		assert!(calculate(&recipes(), &CraftingRequest::default()).unwrap().is_empty());
	}

	#[test]
	fn test_order_and_splitting_do_not_matter() {
		let source = recipes();
		let combined = calculate(&source, &request(&[(1, 2), (2, 2)])).unwrap();
		let reordered = calculate(&source, &request(&[(2, 1), (1, 1), (2, 1), (1, 1)])).unwrap();
		assert_eq!(combined, reordered);

		let first = calculate(&source, &request(&[(1, 2), (2, 1)])).unwrap();
		let second = calculate(&source, &request(&[(2, 1)])).unwrap();
		let mut summed: BTreeMap<String, i64> = BTreeMap::new();
		for t in first.into_iter().chain(second) {
			*summed.entry(t.name).or_default() += t.total;
		}
		assert_eq!(totals(combined), summed.into_iter().collect::<Vec<_>>());
	}

	#[test]
	fn test_non_positive_quantities_are_literal() {
		let result = calculate(&recipes(), &request(&[(3, 0)])).unwrap();
		assert_eq!(totals(result), vec![("Cloth".to_string(), 0)]);

		let result = calculate(&recipes(), &request(&[(3, 2), (3, -1)])).unwrap();
		assert_eq!(totals(result), vec![("Cloth".to_string(), 10)]);
	}

	#[test]
	fn test_saturates_instead_of_overflowing() {
		let result = calculate(&recipes(), &request(&[(3, i64::MAX), (3, 1)])).unwrap();
		assert_eq!(totals(result), vec![("Cloth".to_string(), i64::MAX)]);
	}

	#[test]
	fn test_source_errors_propagate() {
		struct Broken;
		impl RecipeSource for Broken {
			fn recipe(&self, _id: i64) -> Result<Option<Recipe>> {
				Err(palcraft_type::error!(palcraft_type::diagnostic::internal::internal("broken")))
			}
		}
		assert!(calculate(&Broken, &request(&[(1, 1)])).is_err());
	}
}
