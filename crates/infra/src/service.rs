//! Generic business-rule layer over one resource kind.

use std::marker::PhantomData;

use taphouse_core::{Document, DocumentId, ResourceKind, ServiceError, ServiceResult, StoreError};

use crate::repository::DocumentRepository;

/// Business rules for one resource kind, written once and instantiated per
/// kind: list filtering, full-replace update, partial-patch merge, and
/// existence-checked delete. All persistence is delegated to the repository;
/// no retries, no caching, no transport awareness.
///
/// Entity instances are owned exclusively by the request that fetched them;
/// nothing here is shared mutably between concurrent requests.
pub struct ResourceService<K: ResourceKind, R> {
    repository: R,
    _kind: PhantomData<K>,
}

impl<K, R> ResourceService<K, R>
where
    K: ResourceKind,
    R: DocumentRepository<K::Entity>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _kind: PhantomData,
        }
    }

    /// List documents, optionally constrained by the resource's filter.
    ///
    /// An empty filter (no recognized parameter carrying text) yields the
    /// unfiltered set. No matches is an empty list, never an error.
    pub async fn list(&self, filter: K::Filter) -> ServiceResult<Vec<K::Dto>> {
        let entities = if K::filter_is_empty(&filter) {
            self.repository.find_all().await?
        } else {
            self.repository
                .find_where(|entity| K::matches(entity, &filter))
                .await?
        };
        Ok(entities.iter().map(K::to_dto).collect())
    }

    pub async fn get_by_id(&self, id: DocumentId) -> ServiceResult<K::Dto> {
        let entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        Ok(K::to_dto(&entity))
    }

    /// Persist a new document; the store assigns identity and timestamps.
    pub async fn create(&self, dto: K::Dto) -> ServiceResult<DocumentId> {
        let saved = self.repository.save(K::to_entity(dto)).await?;
        let id = saved.id().ok_or(StoreError::MissingId)?;
        tracing::debug!(collection = K::COLLECTION, %id, "document created");
        Ok(id)
    }

    /// Full replace: overwrite every mutable field from the DTO.
    pub async fn update(&self, id: DocumentId, dto: K::Dto) -> ServiceResult<K::Dto> {
        let mut entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        K::replace(&mut entity, dto);
        let saved = self.repository.save(entity).await?;
        Ok(K::to_dto(&saved))
    }

    /// Partial patch: copy only supplied, non-blank fields onto the stored
    /// document.
    pub async fn patch(&self, id: DocumentId, dto: K::Dto) -> ServiceResult<K::Dto> {
        let mut entity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        K::merge(&mut entity, dto);
        let saved = self.repository.save(entity).await?;
        Ok(K::to_dto(&saved))
    }

    /// Delete by id; the target must exist.
    pub async fn delete(&self, id: DocumentId) -> ServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::NotFound);
        }
        self.repository.delete_by_id(id).await?;
        tracing::debug!(collection = K::COLLECTION, %id, "document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryDocumentStore;
    use taphouse_catalog::{Beer, BeerDto, BeerFilter, BeerResource};
    use taphouse_customers::{Customer, CustomerDto, CustomerFilter, CustomerResource};

    type BeerService = ResourceService<BeerResource, InMemoryDocumentStore<Beer>>;
    type CustomerService = ResourceService<CustomerResource, InMemoryDocumentStore<Customer>>;

    fn beer_service() -> BeerService {
        ResourceService::new(InMemoryDocumentStore::new())
    }

    fn beer_dto(name: &str, style: &str) -> BeerDto {
        BeerDto {
            beer_name: Some(name.to_string()),
            beer_style: Some(style.to_string()),
            upc: Some("0631234200036".to_string()),
            quantity_on_hand: Some(12),
            price: Some(10.0),
            ..BeerDto::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_identity_and_timestamps() {
        let service = beer_service();

        let id = service.create(beer_dto("Space Dust", "IPA")).await.unwrap();
        let found = service.get_by_id(id).await.unwrap();

        assert_eq!(found.id, Some(id));
        assert_eq!(found.beer_name.as_deref(), Some("Space Dust"));
        assert!(found.created_date.is_some());
        assert_eq!(found.created_date, found.last_modified_date);
    }

    #[tokio::test]
    async fn get_by_id_yields_not_found_for_unknown_id() {
        let service = beer_service();
        let err = service.get_by_id(DocumentId::new()).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_identity() {
        let service = beer_service();
        let id = service.create(beer_dto("Space Dust", "IPA")).await.unwrap();
        let created = service.get_by_id(id).await.unwrap();

        let updated = service
            .update(
                id,
                BeerDto {
                    beer_name: Some("Citra Haze".to_string()),
                    beer_style: Some("NEIPA".to_string()),
                    ..BeerDto::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.beer_name.as_deref(), Some("Citra Haze"));
        // Full replace clears fields absent from the body.
        assert_eq!(updated.upc, None);
        assert_eq!(updated.price, None);
        assert_eq!(updated.created_date, created.created_date);
    }

    #[tokio::test]
    async fn modified_timestamp_strictly_increases_across_saves() {
        let service = beer_service();
        let id = service.create(beer_dto("Space Dust", "IPA")).await.unwrap();
        let t0 = service.get_by_id(id).await.unwrap().last_modified_date;

        let t1 = service
            .update(id, beer_dto("Space Dust", "IPA"))
            .await
            .unwrap()
            .last_modified_date;
        let t2 = service
            .patch(id, BeerDto::default())
            .await
            .unwrap()
            .last_modified_date;

        assert!(t1 > t0);
        assert!(t2 > t1);
    }

    #[tokio::test]
    async fn update_unknown_id_yields_not_found() {
        let service = beer_service();
        let err = service
            .update(DocumentId::new(), beer_dto("Space Dust", "IPA"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[tokio::test]
    async fn patch_merges_only_supplied_fields() {
        let service = beer_service();
        let id = service.create(beer_dto("Space Dust", "IPA")).await.unwrap();

        let patched = service
            .patch(
                id,
                BeerDto {
                    beer_name: Some("New Name".to_string()),
                    ..BeerDto::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.beer_name.as_deref(), Some("New Name"));
        assert_eq!(patched.beer_style.as_deref(), Some("IPA"));
        assert_eq!(patched.price, Some(10.0));
        assert_eq!(patched.quantity_on_hand, Some(12));
    }

    #[tokio::test]
    async fn delete_twice_yields_not_found_on_second_call() {
        let service = beer_service();
        let id = service.create(beer_dto("Space Dust", "IPA")).await.unwrap();

        service.delete(id).await.unwrap();
        let err = service.delete(id).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound);

        let err = service.get_by_id(id).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[tokio::test]
    async fn filtered_listing_is_a_subset_matching_the_predicate() {
        let service = beer_service();
        service.create(beer_dto("Space Dust", "IPA")).await.unwrap();
        service.create(beer_dto("Galaxy Trip", "IPA")).await.unwrap();
        service.create(beer_dto("Night Porter", "Porter")).await.unwrap();

        let all = service.list(BeerFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let ipas = service
            .list(BeerFilter {
                beer_style: Some("IPA".to_string()),
                ..BeerFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(ipas.len(), 2);
        assert!(ipas.iter().all(|b| b.beer_style.as_deref() == Some("IPA")));
        assert!(ipas.iter().all(|b| all.iter().any(|a| a.id == b.id)));

        let none = service
            .list(BeerFilter {
                beer_name: Some("stout".to_string()),
                ..BeerFilter::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn customer_pipeline_uses_the_same_generic_service() {
        let service: CustomerService = ResourceService::new(InMemoryDocumentStore::new());

        let id = service
            .create(CustomerDto {
                customer_name: Some("Ada Brewster".to_string()),
                ..CustomerDto::default()
            })
            .await
            .unwrap();

        let patched = service
            .patch(
                id,
                CustomerDto {
                    customer_name: Some("New Customer Name".to_string()),
                    ..CustomerDto::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.customer_name.as_deref(), Some("New Customer Name"));

        let matches = service
            .list(CustomerFilter {
                customer_name: Some("customer".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);

        service.delete(id).await.unwrap();
        assert!(service.list(CustomerFilter::default()).await.unwrap().is_empty());
    }
}
