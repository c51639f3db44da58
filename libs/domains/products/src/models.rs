use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier, immutable after creation
    #[schema(example = "3f2b8c1e-6a0d-4d52-9a4b-2f1c5e7d9a10")]
    pub id: String,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = "High-performance laptop with 16GB RAM")]
    pub description: String,
    #[schema(example = 1200.0)]
    pub price: f64,
    #[schema(example = "electronics")]
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl Product {
    /// Build a stored record from validated fields, trimming strings.
    pub fn from_input(id: impl Into<String>, input: ProductInput) -> Self {
        let mut product = Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            in_stock: false,
        };
        product.apply(input);
        product
    }

    /// Overwrite every field except the identifier.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name.trim().to_string();
        self.description = input.description.trim().to_string();
        self.price = input.price;
        self.category = input.category.trim().to_string();
        self.in_stock = input.in_stock;
    }

    /// Overwrite only the fields present in `patch`.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category.trim().to_string();
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Full product body for create and replace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = "High-performance laptop with 16GB RAM")]
    pub description: String,
    #[schema(example = 1200.0)]
    pub price: f64,
    #[schema(example = "electronics")]
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// Partial product body for PATCH; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// The records a fresh development instance starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
