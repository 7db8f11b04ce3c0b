use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taphouse_core::validation::has_text;
use taphouse_core::{Document, DocumentId, ResourceKind, Violations};

/// Stored customer document.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Option<DocumentId>,
    pub customer_name: String,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Document for Customer {
    fn id(&self) -> Option<DocumentId> {
        self.id
    }

    fn assign_id(&mut self, id: DocumentId) {
        self.id = Some(id);
    }

    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    fn last_modified_date(&self) -> Option<DateTime<Utc>> {
        self.last_modified_date
    }

    fn mark_created(&mut self, at: DateTime<Utc>) {
        self.created_date = Some(at);
    }

    fn mark_modified(&mut self, at: DateTime<Utc>) {
        self.last_modified_date = Some(at);
    }
}

/// Externally visible representation of a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Recognized list-query parameters for customers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Pipeline rules for the Customer resource.
pub struct CustomerResource;

impl ResourceKind for CustomerResource {
    type Entity = Customer;
    type Dto = CustomerDto;
    type Filter = CustomerFilter;

    const COLLECTION: &'static str = "/api/v3/customer";

    fn to_dto(entity: &Customer) -> CustomerDto {
        CustomerDto {
            id: entity.id,
            customer_name: Some(entity.customer_name.clone()),
            created_date: entity.created_date,
            last_modified_date: entity.last_modified_date,
        }
    }

    fn to_entity(dto: CustomerDto) -> Customer {
        Customer {
            id: None,
            customer_name: dto.customer_name.unwrap_or_default(),
            created_date: None,
            last_modified_date: None,
        }
    }

    fn validate(dto: &CustomerDto) -> Violations {
        let mut violations = Violations::new();
        violations.require_text("customerName", dto.customer_name.as_deref());
        violations
    }

    fn validate_patch(dto: &CustomerDto) -> Violations {
        let mut violations = Violations::new();
        if dto.customer_name.is_some() {
            violations.require_text("customerName", dto.customer_name.as_deref());
        }
        violations
    }

    fn replace(entity: &mut Customer, dto: CustomerDto) {
        entity.customer_name = dto.customer_name.unwrap_or_default();
    }

    fn merge(entity: &mut Customer, dto: CustomerDto) {
        if has_text(dto.customer_name.as_deref()) {
            entity.customer_name = dto.customer_name.unwrap_or_default();
        }
    }

    fn filter_is_empty(filter: &CustomerFilter) -> bool {
        !has_text(filter.customer_name.as_deref())
    }

    fn matches(entity: &Customer, filter: &CustomerFilter) -> bool {
        match filter.customer_name.as_deref() {
            Some(name) if has_text(Some(name)) => entity
                .customer_name
                .to_lowercase()
                .contains(&name.to_lowercase()),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Customer {
        Customer {
            id: Some(DocumentId::new()),
            customer_name: "Ada Brewster".to_string(),
            created_date: Some(Utc::now()),
            last_modified_date: Some(Utc::now()),
        }
    }

    #[test]
    fn validate_requires_customer_name() {
        let violations = CustomerResource::validate(&CustomerDto::default());
        assert_eq!(violations.as_slice().len(), 1);
        assert_eq!(violations.as_slice()[0].field, "customerName");

        let dto = CustomerDto {
            customer_name: Some("Ada Brewster".to_string()),
            ..CustomerDto::default()
        };
        assert!(CustomerResource::validate(&dto).is_empty());
    }

    #[test]
    fn merge_ignores_blank_name() {
        let mut entity = test_customer();
        CustomerResource::merge(
            &mut entity,
            CustomerDto {
                customer_name: Some("".to_string()),
                ..CustomerDto::default()
            },
        );
        assert_eq!(entity.customer_name, "Ada Brewster");

        CustomerResource::merge(
            &mut entity,
            CustomerDto {
                customer_name: Some("New Customer Name".to_string()),
                ..CustomerDto::default()
            },
        );
        assert_eq!(entity.customer_name, "New Customer Name");
    }

    #[test]
    fn filter_matches_name_substring_case_insensitive() {
        let entity = test_customer();
        let filter = CustomerFilter {
            customer_name: Some("brew".to_string()),
        };
        assert!(CustomerResource::matches(&entity, &filter));

        let filter = CustomerFilter {
            customer_name: Some("smith".to_string()),
        };
        assert!(!CustomerResource::matches(&entity, &filter));
    }

    #[test]
    fn dto_round_trips_through_entity() {
        let entity = test_customer();
        let dto = CustomerResource::to_dto(&entity);
        assert_eq!(dto.customer_name.as_deref(), Some("Ada Brewster"));

        // New entity from a DTO starts unsaved: no id, no timestamps.
        let fresh = CustomerResource::to_entity(dto);
        assert_eq!(fresh.id, None);
        assert_eq!(fresh.created_date, None);
        assert_eq!(fresh.customer_name, "Ada Brewster");
    }
}
