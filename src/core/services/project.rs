use crate::core::models::{
    account::Account,
    common::{non_blank, Pagination},
    project::{Create, Filters, Insert, Page, Project, ProjectQuery, Summary},
};
use crate::core::ports::repository::{ProjectCommon, Store, TxStore};
use crate::core::services::account::resolve;
use crate::error::Error;

fn coordinates(values: &[f64]) -> Option<[f64; 2]> {
    match values {
        [lng, lat] if lng.is_finite() && lat.is_finite() => Some([*lng, *lat]),
        _ => None,
    }
}

/// Creates a draft project owned by the session organization. Project and owner rows commit together.
pub async fn create_project<T: TxStore>(mut storer: T, email: &str, create: Create) -> Result<Project, Error> {
    let organization = match resolve(&mut storer, email).await? {
        Some(Account::Organization(organization)) => organization,
        _ => return Err(Error::Forbidden("Only organizations can create projects".into())),
    };
    let (Some(title), Some(description), Some(address), Some(points)) = (
        non_blank(create.title),
        non_blank(create.description),
        non_blank(create.address),
        create.coordinates,
    ) else {
        return Err(Error::BusinessError("Missing required fields".into()));
    };
    let coordinates = coordinates(&points).ok_or_else(|| Error::BusinessError("Coordinates must be [longitude, latitude]".into()))?;
    let project = ProjectCommon::insert(
        &mut storer,
        Insert {
            title,
            description,
            address,
            coordinates,
        },
    )
    .await?;
    ProjectCommon::add_owner(&mut storer, project.id, organization.id).await?;
    storer.commit().await?;
    log::info!("organization {} created project {}", organization.id, project.id);
    Ok(project)
}

pub async fn list_projects<S: Store>(mut storer: S, query: ProjectQuery, pagination: Pagination) -> Result<Page, Error> {
    let total_count = ProjectCommon::count(&mut storer, &query).await?;
    let projects = ProjectCommon::query(&mut storer, &query, &pagination).await?;
    let mut summary = Summary {
        total: total_count,
        ..Default::default()
    };
    for (status, count) in ProjectCommon::status_counts(&mut storer, query.organization_id).await? {
        summary.add(status, count);
    }
    Ok(Page {
        projects,
        pagination: pagination.info(total_count),
        summary,
        filters: Filters {
            status: query.status,
            organization_id: query.organization_id,
            search: query.search,
            sort_by: query.sort.as_str(),
            sort_order: query.order,
        },
    })
}
