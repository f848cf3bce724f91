use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Business rules in front of a [`ProductRepository`].
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products, newest first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product with validation
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace all mutable fields of a product
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Flip a product's availability flag
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let product = self.get_product(id).await?;

        self.repository
            .update(
                id,
                UpdateProduct {
                    name: product.name,
                    price: product.price,
                    availability: !product.availability,
                },
            )
            .await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn keyboard(id: i32, availability: bool) -> Product {
        Product {
            id,
            name: "Keyboard".to_string(),
            price: 49.99,
            availability,
        }
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_row_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(9999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(9999).await;

        assert!(matches!(result, Err(ProductError::NotFound(9999))));
    }

    #[tokio::test]
    async fn test_create_product_short_circuits_on_invalid_price() {
        // No expectations set: the repository must never be reached
        let mock_repo = MockProductRepository::new();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: "Keyboard".to_string(),
                price: 0.0,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_product_short_circuits_on_empty_name() {
        let mock_repo = MockProductRepository::new();

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                1,
                UpdateProduct {
                    name: String::new(),
                    price: 49.99,
                    availability: true,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_toggle_availability_flips_flag() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(keyboard(1, true))));
        mock_repo
            .expect_update()
            .withf(|id, input| *id == 1 && !input.availability)
            .returning(|id, input| {
                Ok(Product {
                    id,
                    name: input.name,
                    price: input.price,
                    availability: input.availability,
                })
            });

        let service = ProductService::new(mock_repo);
        let toggled = service.toggle_availability(1).await.unwrap();

        assert!(!toggled.availability);
        assert_eq!(toggled.name, "Keyboard");
    }

    #[tokio::test]
    async fn test_toggle_availability_of_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(9999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.toggle_availability(9999).await;

        assert!(matches!(result, Err(ProductError::NotFound(9999))));
    }

    #[tokio::test]
    async fn test_delete_product_maps_missing_row_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(9999))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(9999).await;

        assert!(matches!(result, Err(ProductError::NotFound(9999))));
    }
}
