//! Dashboard and report statistics service

use chrono::Utc;
use std::collections::BTreeMap;

use crate::{
    api::{
        dashboard::{AdminDashboard, CategoryBreakdown, ManagerDashboard, UserDashboard},
        reports::{CategoryShare, ReportTotals, ReportsResponse, StatEntry},
    },
    error::AppResult,
    models::{
        asset::AssetStatus,
        complaint::ComplaintStatus,
        request::RequestStatus,
    },
    store::Store,
};

/// An asset with fewer units than this is flagged as low stock
const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Clone)]
pub struct StatsService {
    store: Store,
}

impl StatsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Summary counters for the end-user landing page
    pub async fn user_dashboard(&self, user_id: &str) -> AppResult<UserDashboard> {
        let assets = self.store.assets.list_assigned_to(user_id).await;
        let requests = self.store.requests.list_for_user(user_id).await;
        let complaints = self.store.complaints.list_for_user(user_id).await;

        Ok(UserDashboard {
            assets: assets.len() as i64,
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count() as i64,
            open_complaints: complaints
                .iter()
                .filter(|c| c.status != ComplaintStatus::Resolved)
                .count() as i64,
        })
    }

    /// Summary counters for the manager landing page
    pub async fn manager_dashboard(&self) -> AppResult<ManagerDashboard> {
        let assets = self.store.assets.list().await;
        let requests = self.store.requests.list().await;
        let complaints = self.store.complaints.list().await;

        Ok(ManagerDashboard {
            total_assets: assets.len() as i64,
            assigned_assets: assets
                .iter()
                .filter(|a| a.status == AssetStatus::Assigned)
                .count() as i64,
            available_assets: assets
                .iter()
                .filter(|a| a.status == AssetStatus::Available)
                .count() as i64,
            employees: self.store.employees.count().await as i64,
            pending_requests: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count() as i64,
            open_complaints: complaints
                .iter()
                .filter(|c| {
                    matches!(c.status, ComplaintStatus::Open | ComplaintStatus::InProgress)
                })
                .count() as i64,
            low_stock: assets
                .iter()
                .filter(|a| a.quantity < LOW_STOCK_THRESHOLD)
                .count() as i64,
        })
    }

    /// Summary and per-category breakdown for the admin landing page
    pub async fn admin_dashboard(&self) -> AppResult<AdminDashboard> {
        let assets = self.store.assets.list().await;
        let categories = self.store.categories.list().await;

        let by_category = categories
            .iter()
            .map(|category| {
                let in_category: Vec<_> = assets
                    .iter()
                    .filter(|a| a.category == category.name)
                    .collect();
                CategoryBreakdown {
                    name: category.name.clone(),
                    total: in_category.len() as i64,
                    available: in_category
                        .iter()
                        .filter(|a| a.status == AssetStatus::Available)
                        .count() as i64,
                    assigned: in_category
                        .iter()
                        .filter(|a| a.status == AssetStatus::Assigned)
                        .count() as i64,
                }
            })
            .collect();

        Ok(AdminDashboard {
            total_assets: assets.len() as i64,
            employees: self.store.employees.count().await as i64,
            categories: categories.len() as i64,
            low_stock: assets
                .into_iter()
                .filter(|a| a.quantity < LOW_STOCK_THRESHOLD)
                .collect(),
            by_category,
        })
    }

    /// Full report for the admin reports page
    pub async fn reports(&self) -> AppResult<ReportsResponse> {
        let assets = self.store.assets.list().await;
        let requests = self.store.requests.list().await;
        let complaints = self.store.complaints.list().await;

        let totals = ReportTotals {
            assets: assets.len() as i64,
            employees: self.store.employees.count().await as i64,
            requests: requests.len() as i64,
            complaints: complaints.len() as i64,
            total_asset_value: assets.iter().map(|a| a.purchase_price).sum(),
        };

        let assets_by_status = [
            AssetStatus::Available,
            AssetStatus::Assigned,
            AssetStatus::Maintenance,
        ]
        .iter()
        .map(|status| StatEntry {
            label: status.to_string(),
            value: assets.iter().filter(|a| a.status == *status).count() as i64,
        })
        .collect();

        // Group by the category names actually used on assets, which may
        // drift from the category list
        let mut category_counts: BTreeMap<String, i64> = BTreeMap::new();
        for asset in &assets {
            *category_counts.entry(asset.category.clone()).or_insert(0) += 1;
        }
        let assets_by_category = category_counts
            .into_iter()
            .map(|(name, count)| CategoryShare {
                name,
                count,
                percentage: if assets.is_empty() {
                    0.0
                } else {
                    count as f64 / assets.len() as f64 * 100.0
                },
            })
            .collect();

        let requests_by_status = [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ]
        .iter()
        .map(|status| StatEntry {
            label: status.to_string(),
            value: requests.iter().filter(|r| r.status == *status).count() as i64,
        })
        .collect();

        let complaints_by_status = [
            ComplaintStatus::Open,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ]
        .iter()
        .map(|status| StatEntry {
            label: status.to_string(),
            value: complaints.iter().filter(|c| c.status == *status).count() as i64,
        })
        .collect();

        Ok(ReportsResponse {
            generated_at: Utc::now(),
            totals,
            assets_by_status,
            assets_by_category,
            requests_by_status,
            complaints_by_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    async fn service() -> (Store, StatsService) {
        let store = Store::new();
        seed::seed(&store).await;
        (store.clone(), StatsService::new(store))
    }

    #[tokio::test]
    async fn manager_dashboard_counts_match_the_seed() {
        let (store, svc) = service().await;
        let dashboard = svc.manager_dashboard().await.unwrap();

        let assets = store.assets.list().await;
        assert_eq!(dashboard.total_assets, assets.len() as i64);
        assert_eq!(
            dashboard.assigned_assets + dashboard.available_assets,
            assets
                .iter()
                .filter(|a| a.status != AssetStatus::Maintenance)
                .count() as i64
        );
        assert!(dashboard.pending_requests >= 1);
        assert!(dashboard.open_complaints >= 1);
    }

    #[tokio::test]
    async fn report_shares_sum_to_one_hundred_percent() {
        let (_, svc) = service().await;
        let report = svc.reports().await.unwrap();

        let total: f64 = report.assets_by_category.iter().map(|c| c.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(report.totals.total_asset_value > 0.0);
    }

    #[tokio::test]
    async fn user_dashboard_only_counts_own_records() {
        let (store, svc) = service().await;
        let alice = store.users.find_by_email("alice@example.com").await.unwrap();

        let dashboard = svc.user_dashboard(&alice.id).await.unwrap();
        assert_eq!(dashboard.assets, 1);
        assert_eq!(dashboard.pending_requests, 1);
        assert_eq!(dashboard.open_complaints, 1);
    }
}
