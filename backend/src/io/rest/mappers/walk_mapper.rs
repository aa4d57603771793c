//! backend/src/io/rest/mappers/walk_mapper.rs

use crate::domain::models::Walk as DomainWalk;
use shared::{AddWalkRequest, UpdateWalkRequest, Walk as SharedWalk};
use uuid::Uuid;

/// Mapper to convert between shared Walk DTOs and domain Walk models.
pub struct WalkMapper;

impl WalkMapper {
    pub fn to_domain(dto: SharedWalk) -> DomainWalk {
        DomainWalk {
            id: dto.id,
            name: dto.name,
            length: dto.length,
            region_id: dto.region_id,
            walk_difficulty_id: dto.walk_difficulty_id,
        }
    }

    pub fn to_dto(domain: DomainWalk) -> SharedWalk {
        SharedWalk {
            id: domain.id,
            name: domain.name,
            length: domain.length,
            region_id: domain.region_id,
            walk_difficulty_id: domain.walk_difficulty_id,
        }
    }

    pub fn to_dto_list(domain_walks: Vec<DomainWalk>) -> Vec<SharedWalk> {
        domain_walks.into_iter().map(Self::to_dto).collect()
    }

    pub fn from_add_request(request: AddWalkRequest) -> DomainWalk {
        DomainWalk {
            id: Uuid::nil(),
            name: request.name,
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }

    pub fn from_update_request(request: UpdateWalkRequest) -> DomainWalk {
        DomainWalk {
            id: Uuid::nil(),
            name: request.name,
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }
}
