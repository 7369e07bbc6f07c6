// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use palcraft_sqlite::Sqlite;
use palcraft_type::{
	Frame, Result, Value,
	diagnostic::{
		catalog::record_not_found,
		internal::internal,
		validation::{empty_name, invalid_quantity},
	},
	return_error,
};
use tracing::instrument;

use crate::{RecipeSource, Recipe, RecipeToCreate, Resource, ResourceRequirement};

const RECIPES: &str = "SELECT cr.id, cr.name, cr.category, cr.description, r.id, r.name, rr.quantity \
	FROM crafting_recipes AS cr \
	LEFT JOIN recipe_resources AS rr ON rr.recipe_id = cr.id \
	LEFT JOIN resources AS r ON r.id = rr.resource_id \
	ORDER BY cr.name, cr.id, r.name";

const RECIPE_BY_ID: &str = "SELECT cr.id, cr.name, cr.category, cr.description, r.id, r.name, rr.quantity \
	FROM crafting_recipes AS cr \
	LEFT JOIN recipe_resources AS rr ON rr.recipe_id = cr.id \
	LEFT JOIN resources AS r ON r.id = rr.resource_id \
	WHERE cr.id = ?1 \
	ORDER BY r.name";

/// Typed access to the crafting tables.
#[derive(Clone)]
pub struct RecipeStore {
	storage: Sqlite,
}

impl RecipeStore {
	pub fn new(storage: Sqlite) -> Self {
		Self {
			storage,
		}
	}

	/// All recipes by name, each with its requirements by resource name.
	#[instrument(name = "crafting::store::recipes", level = "debug", skip(self))]
	pub fn recipes(&self) -> Result<Vec<Recipe>> {
		recipes_from_frame(self.storage.query(RECIPES, &[])?)
	}

	#[instrument(name = "crafting::store::recipe", level = "debug", skip(self))]
	pub fn recipe(&self, id: i64) -> Result<Option<Recipe>> {
		let frame = self.storage.query(RECIPE_BY_ID, &[Value::integer(id)])?;
		Ok(recipes_from_frame(frame)?.into_iter().next())
	}

	/// Distinct recipe categories, sorted.
	pub fn categories(&self) -> Result<Vec<String>> {
		let frame = self.storage.query("SELECT DISTINCT category FROM crafting_recipes ORDER BY category", &[])?;
		frame.rows.iter().map(|row| text(&row[0])).collect()
	}

	pub fn resources(&self) -> Result<Vec<Resource>> {
		let frame = self.storage.query("SELECT id, name FROM resources ORDER BY name", &[])?;
		frame.rows
			.iter()
			.map(|row| {
				Ok(Resource {
					id: integer(&row[0])?,
					name: text(&row[1])?,
				})
			})
			.collect()
	}

	#[instrument(name = "crafting::store::create_resource", level = "debug", skip(self))]
	pub fn create_resource(&self, name: &str) -> Result<Resource> {
		let name = required_name("resource", name)?;
		let id = self.storage.insert("INSERT INTO resources (name) VALUES (?1)", &[Value::text(name)])?;
		Ok(Resource {
			id,
			name: name.to_string(),
		})
	}

	#[instrument(name = "crafting::store::update_resource", level = "debug", skip(self))]
	pub fn update_resource(&self, id: i64, name: &str) -> Result<()> {
		let name = required_name("resource", name)?;
		let changed =
			self.storage.execute("UPDATE resources SET name = ?1 WHERE id = ?2", &[Value::text(name), Value::integer(id)])?;
		if changed == 0 {
			return_error!(record_not_found("resources", id));
		}
		Ok(())
	}

	/// Removing a resource also removes every requirement on it.
	#[instrument(name = "crafting::store::delete_resource", level = "debug", skip(self))]
	pub fn delete_resource(&self, id: i64) -> Result<usize> {
		self.storage.execute("DELETE FROM resources WHERE id = ?1", &[Value::integer(id)])
	}

	#[instrument(name = "crafting::store::create_recipe", level = "debug", skip(self, recipe), fields(name = %recipe.name))]
	pub fn create_recipe(&self, recipe: &RecipeToCreate) -> Result<Recipe> {
		let name = required_name("recipe", &recipe.name)?;
		let id = self.storage.insert(
			"INSERT INTO crafting_recipes (name, category, description) VALUES (?1, ?2, ?3)",
			&[Value::text(name), Value::text(&recipe.category), Value::text(&recipe.description)],
		)?;
		Ok(Recipe {
			id,
			name: name.to_string(),
			category: recipe.category.clone(),
			description: recipe.description.clone(),
			resources: Vec::new(),
		})
	}

	/// Replace name, category and description. Requirements are untouched.
	#[instrument(name = "crafting::store::update_recipe", level = "debug", skip(self, recipe))]
	pub fn update_recipe(&self, id: i64, recipe: &RecipeToCreate) -> Result<()> {
		let name = required_name("recipe", &recipe.name)?;
		let changed = self.storage.execute(
			"UPDATE crafting_recipes SET name = ?1, category = ?2, description = ?3 WHERE id = ?4",
			&[Value::text(name), Value::text(&recipe.category), Value::text(&recipe.description), Value::integer(id)],
		)?;
		if changed == 0 {
			return_error!(record_not_found("crafting_recipes", id));
		}
		Ok(())
	}

	/// Removing a recipe also removes its requirements.
	#[instrument(name = "crafting::store::delete_recipe", level = "debug", skip(self))]
	pub fn delete_recipe(&self, id: i64) -> Result<usize> {
		self.storage.execute("DELETE FROM crafting_recipes WHERE id = ?1", &[Value::integer(id)])
	}

	/// Require `quantity` of a resource for a recipe. A recipe names each
	/// resource at most once.
	#[instrument(name = "crafting::store::add_requirement", level = "debug", skip(self))]
	pub fn add_requirement(&self, recipe_id: i64, resource_id: i64, quantity: i64) -> Result<i64> {
		if quantity < 1 {
			return_error!(invalid_quantity(quantity));
		}
		self.storage.insert(
			"INSERT INTO recipe_resources (recipe_id, resource_id, quantity) VALUES (?1, ?2, ?3)",
			&[Value::integer(recipe_id), Value::integer(resource_id), Value::integer(quantity)],
		)
	}

	#[instrument(name = "crafting::store::remove_requirement", level = "debug", skip(self))]
	pub fn remove_requirement(&self, recipe_id: i64, resource_id: i64) -> Result<usize> {
		self.storage.execute(
			"DELETE FROM recipe_resources WHERE recipe_id = ?1 AND resource_id = ?2",
			&[Value::integer(recipe_id), Value::integer(resource_id)],
		)
	}
}

impl RecipeSource for RecipeStore {
	fn recipe(&self, id: i64) -> Result<Option<Recipe>> {
		RecipeStore::recipe(self, id)
	}
}

fn required_name<'a>(what: &str, name: &'a str) -> Result<&'a str> {
	let name = name.trim();
	if name.is_empty() {
		return_error!(empty_name(what));
	}
	Ok(name)
}

/// Folds joined recipe/requirement rows into recipes. Rows of one recipe must
/// be adjacent.
fn recipes_from_frame(frame: Frame) -> Result<Vec<Recipe>> {
	let mut recipes: Vec<Recipe> = Vec::new();

	for row in &frame.rows {
		let [id, name, category, description, resource_id, resource_name, quantity] = row.as_slice() else {
			return_error!(internal(format!("recipe query returned {} columns", row.len())));
		};

		let id = integer(id)?;
		if recipes.last().map(|r| r.id) != Some(id) {
			recipes.push(Recipe {
				id,
				name: text(name)?,
				category: text(category)?,
				description: text(description)?,
				resources: Vec::new(),
			});
		}

		if resource_id.is_null() {
			continue;
		}

		if let Some(recipe) = recipes.last_mut() {
			recipe.resources.push(ResourceRequirement {
				id: integer(resource_id)?,
				name: text(resource_name)?,
				quantity: integer(quantity)?,
			});
		}
	}

	Ok(recipes)
}

fn integer(value: &Value) -> Result<i64> {
	match value {
		Value::Integer(v) => Ok(*v),
		other => Err(palcraft_type::error!(internal(format!("expected an integer, found {:?}", other)))),
	}
}

fn text(value: &Value) -> Result<String> {
	match value {
		Value::Text(v) => Ok(v.clone()),
		Value::Null => Ok(String::new()),
		other => Ok(other.to_string()),
	}
}
