use storage::Catalog;
use storage::dto::round::{RoundDetailResponse, RoundSummary};
use storage::error::CatalogError;

/// Public catalog listing, in ascending round order.
pub fn list_rounds(catalog: &Catalog) -> Vec<RoundSummary> {
    catalog
        .rounds()
        .filter_map(|round| {
            catalog
                .scenario(&round.scenario_id)
                .map(|scenario| RoundSummary::new(round, scenario))
        })
        .collect()
}

pub fn get_round(catalog: &Catalog, id: u32) -> Result<RoundDetailResponse, CatalogError> {
    let round = catalog.round(id)?;
    let scenario = catalog.resolve(id)?;
    Ok(RoundDetailResponse::new(round, scenario))
}
