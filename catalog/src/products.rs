//! The in-memory product catalog served by the listing pages.

use std::cmp::Ordering;

/// The sortable columns, in display order.
pub const COLUMNS: [&str; 4] = ["id", "name", "price", "stock"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
	pub id: u32,
	pub name: &'static str,
	pub category: &'static str,
	pub price_cents: u32,
	pub stock: u32,
}

impl Product {
	pub fn price(&self) -> String {
		format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
	Id,
	Name,
	Price,
	Stock,
}

impl Column {
	fn parse(raw: &str) -> Option<Self> {
		Some(match raw {
			"id" => Self::Id,
			"name" => Self::Name,
			"price" => Self::Price,
			"stock" => Self::Stock,
			_ => return None,
		})
	}

	fn compare(self, a: &Product, b: &Product) -> Ordering {
		match self {
			Self::Id => a.id.cmp(&b.id),
			Self::Name => a.name.cmp(b.name),
			Self::Price => a.price_cents.cmp(&b.price_cents),
			Self::Stock => a.stock.cmp(&b.stock),
		}
	}
}

/// How a listing is sorted, read from the `order` and `dir` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
	pub column: Column,
	pub descending: bool,
}

impl Sort {
	/// Unknown columns fall back to `id`; anything but `desc` is ascending.
	pub fn from_query(order: Option<&str>, dir: Option<&str>) -> Self {
		Self {
			column: order.and_then(Column::parse).unwrap_or(Column::Id),
			descending: dir == Some("desc"),
		}
	}
}

pub struct Catalog {
	products: Vec<Product>,
}

impl Catalog {
	pub fn new(products: Vec<Product>) -> Self {
		Self { products }
	}

	pub fn sample() -> Self {
		const SAMPLE: &[(&str, &str, u32, u32)] = &[
			("The Long Winter", "fiction", 1299, 4),
			("Harbor Lights", "fiction", 899, 12),
			("A Field of Glass", "fiction", 1549, 0),
			("Night Trains", "fiction", 1099, 7),
			("The Cartographer's Daughter", "fiction", 1799, 3),
			("Salt and Iron", "fiction", 999, 21),
			("Paper Moons", "fiction", 749, 9),
			("Quiet Rooms", "fiction", 1399, 5),
			("Under the Linden", "fiction", 1199, 14),
			("Deep Time", "science", 2499, 6),
			("The Restless Cell", "science", 1999, 2),
			("Orbits Explained", "science", 2250, 11),
			("Small Things Considered", "science", 1650, 8),
			("Weather Machines", "science", 2899, 1),
			("A Brief Atlas of Atoms", "science", 1875, 10),
			("Fields and Forces", "science", 3199, 4),
			("The Living Sea", "science", 2125, 13),
			("Weeknight Bread", "cookbooks", 2999, 7),
			("One Pot, Many Ways", "cookbooks", 2450, 18),
			("Spice Routes", "cookbooks", 3299, 2),
			("The Patient Cook", "cookbooks", 2799, 5),
			("Soups for Winter", "cookbooks", 1999, 16),
			("Knife Skills", "cookbooks", 1499, 9),
			("Market Greens", "cookbooks", 2199, 0),
		];

		Self::new(
			(1..)
				.zip(SAMPLE)
				.map(|(id, &(name, category, price_cents, stock))| Product {
					id,
					name,
					category,
					price_cents,
					stock,
				})
				.collect(),
		)
	}

	pub fn has_category(&self, category: &str) -> bool {
		self.products.iter().any(|product| product.category == category)
	}

	/// Category slugs in order of first appearance.
	pub fn categories(&self) -> Vec<&'static str> {
		let mut ret: Vec<&'static str> = Vec::new();
		for product in &self.products {
			if !ret.contains(&product.category) {
				ret.push(product.category);
			}
		}
		ret
	}

	/// Products in `category` (or all of them), sorted by `sort` with ties broken by id.
	pub fn list(&self, category: Option<&str>, sort: Sort) -> Vec<Product> {
		let mut ret: Vec<Product> = self
			.products
			.iter()
			.filter(|product| category.map_or(true, |category| product.category == category))
			.copied()
			.collect();
		ret.sort_by(|a, b| {
			let ordering = sort.column.compare(a, b);
			let ordering = if sort.descending {
				ordering.reverse()
			} else {
				ordering
			};
			ordering.then_with(|| a.id.cmp(&b.id))
		});
		ret
	}
}
