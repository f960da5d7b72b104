use sqlx::SqlitePool;
use storage::{
    dto::lot::AllocateLotRequest, error::Result, models::Lot, repository::lot::LotRepository,
};

/// List all lot assignments
pub async fn list_lots(pool: &SqlitePool) -> Result<Vec<Lot>> {
    let repo = LotRepository::new(pool);
    repo.list().await
}

/// Allocate (or re-allocate) a lot for a team and event
pub async fn allocate_lot(pool: &SqlitePool, request: &AllocateLotRequest) -> Result<Lot> {
    let repo = LotRepository::new(pool);
    repo.allocate(request).await
}

/// Delete a lot assignment
pub async fn delete_lot(pool: &SqlitePool, lot_id: &str) -> Result<()> {
    let repo = LotRepository::new(pool);
    repo.delete(lot_id).await
}
