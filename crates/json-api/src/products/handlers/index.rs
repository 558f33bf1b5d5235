//! Products Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::ProductResponse},
    state::State,
};

/// Products Index Handler
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let products = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::MockProductsService;

    use crate::test_helpers::{Mocks, service};

    use super::{super::tests::make_product, *};

    #[tokio::test]
    async fn test_index_lists_products() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(1, 5), make_product(2, 0)]));

        let body: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&service(
                Mocks {
                    products,
                    ..Mocks::default()
                },
                Router::with_path("products").get(handler),
            ))
            .await
            .take_json()
            .await?;

        let stock: Vec<(i64, u32)> = body.iter().map(|p| (p.product_id, p.stock)).collect();

        assert_eq!(stock, vec![(1, 5), (2, 0)]);

        Ok(())
    }
}
