// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Crafting tables and their starter content.

use palcraft_sqlite::Sqlite;
use palcraft_type::{Result, Value};
use tracing::{info, instrument};

const TABLES: &[&str] = &[
	"CREATE TABLE IF NOT EXISTS resources (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name TEXT NOT NULL UNIQUE
	)",
	"CREATE TABLE IF NOT EXISTS crafting_recipes (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name TEXT NOT NULL,
		category TEXT NOT NULL,
		description TEXT NOT NULL DEFAULT ''
	)",
	"CREATE TABLE IF NOT EXISTS recipe_resources (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		recipe_id INTEGER NOT NULL,
		resource_id INTEGER NOT NULL,
		quantity INTEGER NOT NULL,
		FOREIGN KEY (recipe_id) REFERENCES crafting_recipes(id) ON DELETE CASCADE,
		FOREIGN KEY (resource_id) REFERENCES resources(id) ON DELETE CASCADE,
		UNIQUE(recipe_id, resource_id)
	)",
	"CREATE TABLE IF NOT EXISTS technologies (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		name TEXT NOT NULL UNIQUE,
		level INTEGER NOT NULL
	)",
	"CREATE TABLE IF NOT EXISTS technology_recipes (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		technology_id INTEGER NOT NULL,
		recipe_id INTEGER NOT NULL,
		FOREIGN KEY (technology_id) REFERENCES technologies(id) ON DELETE CASCADE,
		FOREIGN KEY (recipe_id) REFERENCES crafting_recipes(id) ON DELETE CASCADE,
		UNIQUE(technology_id, recipe_id)
	)",
	"CREATE TABLE IF NOT EXISTS inventory (
		id INTEGER PRIMARY KEY AUTOINCREMENT,
		resource_id INTEGER NOT NULL,
		quantity INTEGER NOT NULL,
		FOREIGN KEY (resource_id) REFERENCES resources(id) ON DELETE CASCADE
	)",
];

const SEED_RESOURCES: &[&str] = &["Wood", "Stone", "Cloth", "Paldium Fragment", "Metal Ore", "Coal", "Fiber"];

struct SeedRecipe {
	name: &'static str,
	category: &'static str,
	description: &'static str,
	resources: &'static [(&'static str, i64)],
}

const SEED_RECIPES: &[SeedRecipe] = &[
	SeedRecipe {
		name: "Wooden Club",
		category: "Weapons",
		description: "A simple wooden weapon for early combat",
		resources: &[("Wood", 5), ("Stone", 2)],
	},
	SeedRecipe {
		name: "Stone Pickaxe",
		category: "Tools",
		description: "Essential tool for mining stone and ore",
		resources: &[("Wood", 5), ("Stone", 5)],
	},
	SeedRecipe {
		name: "Stone Axe",
		category: "Tools",
		description: "Efficient tool for cutting trees",
		resources: &[("Wood", 5), ("Stone", 5)],
	},
	SeedRecipe {
		name: "Campfire",
		category: "Structures",
		description: "Cook food and provide warmth",
		resources: &[("Wood", 10), ("Stone", 5)],
	},
	SeedRecipe {
		name: "Wooden Chest",
		category: "Storage",
		description: "Basic storage container",
		resources: &[("Wood", 15), ("Stone", 5)],
	},
	SeedRecipe {
		name: "Cloth Outfit",
		category: "Armor",
		description: "Basic protection from elements",
		resources: &[("Cloth", 10)],
	},
	SeedRecipe {
		name: "Pal Sphere",
		category: "Pal Items",
		description: "Capture wild Pals",
		resources: &[("Paldium Fragment", 3), ("Wood", 3), ("Stone", 3)],
	},
	SeedRecipe {
		name: "Workbench",
		category: "Structures",
		description: "Craft advanced items",
		resources: &[("Wood", 20), ("Stone", 10)],
	},
	SeedRecipe {
		name: "Wooden Foundation",
		category: "Building",
		description: "Foundation for wooden structures",
		resources: &[("Wood", 8)],
	},
	SeedRecipe {
		name: "Wooden Wall",
		category: "Building",
		description: "Wall for wooden structures",
		resources: &[("Wood", 6)],
	},
];

/// Create any missing crafting table. Existing tables are left untouched.
#[instrument(name = "crafting::schema::bootstrap", level = "info", skip_all)]
pub fn bootstrap(storage: &Sqlite) -> Result<()> {
	for statement in TABLES {
		storage.execute_batch(statement)?;
	}
	Ok(())
}

/// Load the starter resources and recipes if no recipe exists yet.
///
/// Runs statement by statement, so an interrupted seed may leave part of the
/// data behind. Returns whether anything was seeded.
#[instrument(name = "crafting::schema::seed", level = "info", skip_all)]
pub fn seed(storage: &Sqlite) -> Result<bool> {
	let count = storage.query("SELECT COUNT(*) FROM crafting_recipes", &[])?;
	if count.scalar().and_then(Value::as_i64).unwrap_or(0) > 0 {
		return Ok(false);
	}

	for name in SEED_RESOURCES {
		storage.execute("INSERT OR IGNORE INTO resources (name) VALUES (?1)", &[Value::text(*name)])?;
	}

	for recipe in SEED_RECIPES {
		let recipe_id = storage.insert(
			"INSERT INTO crafting_recipes (name, category, description) VALUES (?1, ?2, ?3)",
			&[Value::text(recipe.name), Value::text(recipe.category), Value::text(recipe.description)],
		)?;

		for (resource, quantity) in recipe.resources {
			storage.execute(
				"INSERT INTO recipe_resources (recipe_id, resource_id, quantity) \
				 SELECT ?1, id, ?2 FROM resources WHERE name = ?3",
				&[Value::integer(recipe_id), Value::integer(*quantity), Value::text(*resource)],
			)?;
		}
	}

	info!(resources = SEED_RESOURCES.len(), recipes = SEED_RECIPES.len(), "seeded crafting data");
	Ok(true)
}
