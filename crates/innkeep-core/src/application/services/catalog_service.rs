//! Catalog Service - room types and accommodations.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::{
    application::{ports::CatalogGateway, services::bounded},
    domain::{Accommodation, RoomType, TypeId, filter_accommodations},
    error::InnkeepResult,
};

pub struct CatalogService {
    catalog: Arc<dyn CatalogGateway>,
    timeout: Option<Duration>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogGateway>) -> Self {
        Self {
            catalog,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[instrument(skip(self))]
    pub async fn types(&self) -> InnkeepResult<Vec<RoomType>> {
        bounded(self.timeout, "list_types", self.catalog.list_types()).await
    }

    #[instrument(skip(self))]
    pub async fn accommodations(&self) -> InnkeepResult<Vec<Accommodation>> {
        bounded(
            self.timeout,
            "list_accommodations",
            self.catalog.list_accommodations(),
        )
        .await
    }

    /// Accommodations selectable for `room_type`; all of them when unset.
    #[instrument(skip(self))]
    pub async fn accommodation_choices(
        &self,
        room_type: Option<TypeId>,
    ) -> InnkeepResult<Vec<Accommodation>> {
        let catalog = self.accommodations().await?;
        let choices = filter_accommodations(room_type, &catalog);
        debug!(offered = choices.len(), total = catalog.len());
        Ok(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockCatalogGateway;
    use crate::domain::AccommodationId;

    fn service() -> CatalogService {
        let mut catalog = MockCatalogGateway::new();
        catalog.expect_list_accommodations().returning(|| {
            Ok(vec![
                Accommodation::new(1, "Single", ""),
                Accommodation::new(2, "Double", ""),
                Accommodation::new(3, "Triple", ""),
                Accommodation::new(4, "Quadruple", ""),
            ])
        });
        CatalogService::new(Arc::new(catalog))
    }

    fn ids(list: &[Accommodation]) -> Vec<u64> {
        list.iter().map(|a| a.id.get()).collect()
    }

    #[tokio::test]
    async fn choices_follow_the_selected_type() {
        let service = service();
        let junior = service.accommodation_choices(Some(TypeId::new(2))).await.unwrap();
        assert_eq!(ids(&junior), vec![3, 4]);

        let suite = service.accommodation_choices(Some(TypeId::new(3))).await.unwrap();
        assert_eq!(ids(&suite), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unset_or_unknown_type_offers_everything() {
        let service = service();
        assert_eq!(service.accommodation_choices(None).await.unwrap().len(), 4);
        let unknown = service
            .accommodation_choices(Some(TypeId::new(42)))
            .await
            .unwrap();
        assert!(unknown.iter().any(|a| a.id == AccommodationId::new(4)));
    }
}
