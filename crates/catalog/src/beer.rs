use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taphouse_core::validation::has_text;
use taphouse_core::{Document, DocumentId, ResourceKind, Violations};

/// Stored beer document.
///
/// `id` and the audit timestamps are owned by the store layer: absent before
/// the first save, assigned there, and never overwritten by updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: Option<DocumentId>,
    pub beer_name: String,
    pub beer_style: String,
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    pub price: Option<f64>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Document for Beer {
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

/// Externally visible representation of a beer.
///
/// Every business field is optional at the wire level (patch bodies are
/// partial); validation enforces presence where required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Recognized list-query parameters for beers.
///
/// Unknown query parameters deserialize to an empty filter, which yields the
/// unfiltered listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerFilter {
    #[serde(default)]
    pub beer_name: Option<String>,
    #[serde(default)]
    pub beer_style: Option<String>,
}

/// Pipeline rules for the Beer resource.
pub struct BeerResource;

impl ResourceKind for BeerResource {
    type Entity = Beer;
    type Dto = BeerDto;
    type Filter = BeerFilter;

    const COLLECTION: &'static str = "/api/v3/beer";

    fn to_dto(entity: &Beer) -> BeerDto {
        BeerDto {
            id: entity.id,
            beer_name: Some(entity.beer_name.clone()),
            beer_style: Some(entity.beer_style.clone()),
            upc: entity.upc.clone(),
            quantity_on_hand: entity.quantity_on_hand,
            price: entity.price,
            created_date: entity.created_date,
            last_modified_date: entity.last_modified_date,
        }
    }

    fn to_entity(dto: BeerDto) -> Beer {
        Beer {
            id: None,
            beer_name: dto.beer_name.unwrap_or_default(),
            beer_style: dto.beer_style.unwrap_or_default(),
            upc: dto.upc,
            quantity_on_hand: dto.quantity_on_hand,
            price: dto.price,
            created_date: None,
            last_modified_date: None,
        }
    }

    fn validate(dto: &BeerDto) -> Violations {
        let mut violations = Violations::new();
        violations.require_text("beerName", dto.beer_name.as_deref());
        violations.require_text("beerStyle", dto.beer_style.as_deref());
        violations
    }

    fn validate_patch(dto: &BeerDto) -> Violations {
        let mut violations = Violations::new();
        if dto.beer_name.is_some() {
            violations.require_text("beerName", dto.beer_name.as_deref());
        }
        if dto.beer_style.is_some() {
            violations.require_text("beerStyle", dto.beer_style.as_deref());
        }
        violations
    }

    fn replace(entity: &mut Beer, dto: BeerDto) {
        entity.beer_name = dto.beer_name.unwrap_or_default();
        entity.beer_style = dto.beer_style.unwrap_or_default();
        entity.upc = dto.upc;
        entity.quantity_on_hand = dto.quantity_on_hand;
        entity.price = dto.price;
    }

    fn merge(entity: &mut Beer, dto: BeerDto) {
        if has_text(dto.beer_name.as_deref()) {
            entity.beer_name = dto.beer_name.unwrap_or_default();
        }
        if has_text(dto.beer_style.as_deref()) {
            entity.beer_style = dto.beer_style.unwrap_or_default();
        }
        if has_text(dto.upc.as_deref()) {
            entity.upc = dto.upc;
        }
        if dto.quantity_on_hand.is_some() {
            entity.quantity_on_hand = dto.quantity_on_hand;
        }
        if dto.price.is_some() {
            entity.price = dto.price;
        }
    }

    fn filter_is_empty(filter: &BeerFilter) -> bool {
        !has_text(filter.beer_name.as_deref()) && !has_text(filter.beer_style.as_deref())
    }

    fn matches(entity: &Beer, filter: &BeerFilter) -> bool {
        let name_ok = match filter.beer_name.as_deref() {
            Some(name) if has_text(Some(name)) => entity
                .beer_name
                .to_lowercase()
                .contains(&name.to_lowercase()),
            _ => true,
        };
        let style_ok = match filter.beer_style.as_deref() {
            Some(style) if has_text(Some(style)) => entity.beer_style == style,
            _ => true,
        };
        name_ok && style_ok
    }
}
