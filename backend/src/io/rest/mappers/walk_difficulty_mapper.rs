//! backend/src/io/rest/mappers/walk_difficulty_mapper.rs

use crate::domain::models::WalkDifficulty as DomainWalkDifficulty;
use shared::{AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficulty as SharedWalkDifficulty};
use uuid::Uuid;

/// Mapper to convert between shared WalkDifficulty DTOs and domain models.
pub struct WalkDifficultyMapper;

impl WalkDifficultyMapper {
    pub fn to_domain(dto: SharedWalkDifficulty) -> DomainWalkDifficulty {
        DomainWalkDifficulty {
            id: dto.id,
            code: dto.code,
        }
    }

    pub fn to_dto(domain: DomainWalkDifficulty) -> SharedWalkDifficulty {
        SharedWalkDifficulty {
            id: domain.id,
            code: domain.code,
        }
    }

    pub fn to_dto_list(domain_difficulties: Vec<DomainWalkDifficulty>) -> Vec<SharedWalkDifficulty> {
        domain_difficulties.into_iter().map(Self::to_dto).collect()
    }

    pub fn from_add_request(request: AddWalkDifficultyRequest) -> DomainWalkDifficulty {
        DomainWalkDifficulty {
            id: Uuid::nil(),
            code: request.code,
        }
    }

    pub fn from_update_request(request: UpdateWalkDifficultyRequest) -> DomainWalkDifficulty {
        DomainWalkDifficulty {
            id: Uuid::nil(),
            code: request.code,
        }
    }
}
