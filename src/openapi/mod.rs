use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = r#"
# Catalog API

Create, read, update and delete product categories and products.

Deleting a category also deletes every product in it.

## Error Handling

Failed requests return:

```json
{
  "error": "Not Found",
  "message": "Category 7 not found",
  "request_id": "5f0c1c5e-7f5e-4b8e-9a53-0d5c1f3b2a11",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development")
    ),
    tags(
        (name = "Categories", description = "Category management endpoints"),
        (name = "Products", description = "Product management endpoints"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::categories::list_categories,
        crate::handlers::categories::get_category,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,

        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,

        crate::health::root,
        crate::health::health_check,
    ),
    components(
        schemas(
            crate::dto::CategoryInput,
            crate::dto::CategoryResponse,
            crate::dto::ProductInput,
            crate::dto::ProductResponse,
            crate::dto::MessageResponse,
            crate::health::HealthInfo,
            crate::health::HealthStatus,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
