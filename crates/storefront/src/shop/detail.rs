//! Product detail page and likes.

use duka_core::{Product, ProductId, Section, ShopError};

use super::{Action, DetailView, Storefront, Surface};

/// Default number of products returned by [`Storefront::trending`].
pub const TRENDING_LIMIT: usize = 10;

impl DetailView {
    fn new(product: &Product, likes: u32) -> Self {
        Self {
            title: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            likes,
            add_action: Action::AddToCart,
        }
    }
}

impl<S: Surface> Storefront<S> {
    /// Open the detail page of product `id` and make it the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the catalog has no such product;
    /// selection and active section are left unchanged.
    pub fn view(&mut self, id: ProductId) -> Result<(), ShopError> {
        let product = self.catalog.find(id).ok_or(ShopError::NotFound(id))?;
        let detail = DetailView::new(product, self.likes(id));

        self.selection = Some(id);
        self.surface.show_detail(detail);
        self.show_section(Section::ProductPage);

        tracing::info!(product_id = %id, "Viewing product");
        Ok(())
    }

    /// Number of likes product `id` has received.
    #[must_use]
    pub fn likes(&self, id: ProductId) -> u32 {
        self.likes.get(&id).copied().unwrap_or(0)
    }

    /// Record a like for product `id` and return its new count.
    ///
    /// If the product is on the detail page, the page is redrawn with the new
    /// count without changing the active section.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::NotFound`] if the catalog has no such product.
    pub fn like(&mut self, id: ProductId) -> Result<u32, ShopError> {
        let product = self.catalog.find(id).ok_or(ShopError::NotFound(id))?;

        let count = self.likes.entry(id).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        if self.selection == Some(id) {
            self.surface.show_detail(DetailView::new(product, count));
        }

        tracing::info!(product_id = %id, likes = count, "Product liked");
        Ok(count)
    }

    /// Most liked products, highest first, at most `limit` of them.
    ///
    /// Products with equal counts keep their catalog order.
    #[must_use]
    pub fn trending(&self, limit: usize) -> Vec<(&Product, u32)> {
        let mut ranked: Vec<(&Product, u32)> = self
            .catalog
            .iter()
            .map(|product| (product, self.likes(product.id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::test_support::shop;
    use super::*;

    #[test]
    fn test_view_every_product() {
        let mut shop = shop();
        let ids: Vec<ProductId> = shop.catalog().iter().map(|p| p.id).collect();

        for id in ids {
            shop.view(id).unwrap();
            assert_eq!(shop.selection().unwrap().id, id);
            assert_eq!(shop.active_section(), Section::ProductPage);
        }
    }

    #[test]
    fn test_view_fills_detail_fields() {
        let mut shop = shop();
        shop.view(ProductId::new(3)).unwrap();

        let detail = shop.surface().detail.as_ref().unwrap();
        assert_eq!(detail.title, "Non-stick Pan");
        assert_eq!(detail.price, "Ksh 2800");
        assert_eq!(detail.description, "Durable 24cm granite coating pan.");
        assert_eq!(detail.category, "Kitchenware");
        assert_eq!(detail.add_action, Action::AddToCart);
    }

    #[test]
    fn test_view_missing_product_changes_nothing() {
        let mut shop = shop();
        shop.view(ProductId::new(1)).unwrap();
        shop.show_section(Section::Checkout);

        let err = shop.view(ProductId::new(42)).unwrap_err();
        assert_eq!(err, ShopError::NotFound(ProductId::new(42)));
        assert_eq!(shop.selection().unwrap().id, ProductId::new(1));
        assert_eq!(shop.active_section(), Section::Checkout);
        assert_eq!(shop.surface().detail.as_ref().unwrap().title, "Leather Handbag");
    }

    #[test]
    fn test_like_counts_up() {
        let mut shop = shop();
        assert_eq!(shop.like(ProductId::new(4)).unwrap(), 1);
        assert_eq!(shop.like(ProductId::new(4)).unwrap(), 2);
        assert_eq!(shop.likes(ProductId::new(4)), 2);
        assert_eq!(shop.likes(ProductId::new(1)), 0);
    }

    #[test]
    fn test_like_missing_product() {
        let mut shop = shop();
        assert_eq!(
            shop.like(ProductId::new(99)),
            Err(ShopError::NotFound(ProductId::new(99)))
        );
    }

    #[test]
    fn test_like_redraws_selected_detail() {
        let mut shop = shop();
        shop.view(ProductId::new(2)).unwrap();
        shop.show_section(Section::Catalog);

        shop.like(ProductId::new(2)).unwrap();
        assert_eq!(shop.surface().detail.as_ref().unwrap().likes, 1);
        assert_eq!(shop.active_section(), Section::Catalog);
    }

    #[test]
    fn test_trending_orders_by_likes_then_catalog() {
        let mut shop = shop();
        shop.like(ProductId::new(3)).unwrap();
        shop.like(ProductId::new(3)).unwrap();
        shop.like(ProductId::new(4)).unwrap();

        let ranked: Vec<(i32, u32)> = shop
            .trending(TRENDING_LIMIT)
            .into_iter()
            .map(|(p, likes)| (p.id.as_i32(), likes))
            .collect();
        assert_eq!(ranked, vec![(3, 2), (4, 1), (1, 0), (2, 0)]);

        assert_eq!(shop.trending(1).len(), 1);
    }
}
