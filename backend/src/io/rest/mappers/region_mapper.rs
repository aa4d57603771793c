//! backend/src/io/rest/mappers/region_mapper.rs

use crate::domain::models::Region as DomainRegion;
use shared::{AddRegionRequest, Region as SharedRegion, UpdateRegionRequest};
use uuid::Uuid;

/// Mapper to convert between shared Region DTOs and domain Region models.
pub struct RegionMapper;

impl RegionMapper {
    /// Converts a shared Region DTO to a domain Region model.
    pub fn to_domain(dto: SharedRegion) -> DomainRegion {
        DomainRegion {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            area: dto.area,
            lat: dto.lat,
            long: dto.long,
            population: dto.population,
        }
    }

    /// Converts a domain Region model to a shared Region DTO.
    pub fn to_dto(domain: DomainRegion) -> SharedRegion {
        SharedRegion {
            id: domain.id,
            code: domain.code,
            name: domain.name,
            area: domain.area,
            lat: domain.lat,
            long: domain.long,
            population: domain.population,
        }
    }

    pub fn to_dto_list(domain_regions: Vec<DomainRegion>) -> Vec<SharedRegion> {
        domain_regions.into_iter().map(Self::to_dto).collect()
    }

    /// Builds an unsaved region from an add request. Call after validation:
    /// absent strings become empty.
    pub fn from_add_request(request: AddRegionRequest) -> DomainRegion {
        DomainRegion {
            id: Uuid::nil(),
            code: request.code.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population,
        }
    }

    pub fn from_update_request(request: UpdateRegionRequest) -> DomainRegion {
        DomainRegion {
            id: Uuid::nil(),
            code: request.code.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population,
        }
    }
}
